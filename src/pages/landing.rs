//! The single marketing page: hero, problem framing, feature grid, deep
//! dives, social proof, sample reports, pricing, and the closing CTA.

use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::footer::Footer;
use crate::components::icons::Icon;
use crate::components::nav::NavBar;
use crate::components::section::Section;
use crate::components::testimonials::TestimonialSlider;
use crate::content::{CORE_FEATURES, PRICING_TIERS, STATISTICS, TRUSTED_BRANDS};
use crate::utils::scroll;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>

            <div class="bg-grid"></div>
            <div class="bg-glow"></div>
            <div class="bg-accent-indigo"></div>
            <div class="bg-accent-cyan"></div>

            <NavBar />
            <Hero />
            <ProblemSection />
            <FeaturesSection />
            <CompetitorIntelSection />
            <ContentOptimizationSection />
            <SocialProofSection />
            <ReportsSection />
            <PricingSection />
            <FinalCtaSection />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {"The New Standard for GEO"}
                    </div>

                    <h1 class="hero-title">
                        {"See How AI Search "}<br />
                        <span class="text-gradient">{"Talks About You."}</span>
                    </h1>

                    <p class="hero-subtitle">
                        {"Forzeo reveals your visibility across ChatGPT, Gemini, Perplexity, \
                          and Copilot — and gives you clear actions to dominate generated answers."}
                    </p>

                    <div class="hero-cta-row">
                        <Button
                            variant={ButtonVariant::Secondary}
                            size={ButtonSize::Lg}
                            icon={Icon::ArrowRight}
                            onclick={scroll::anchor_callback("#audit")}
                        >
                            {"Run AI Visibility Audit"}
                        </Button>
                        <Button
                            variant={ButtonVariant::Outline}
                            size={ButtonSize::Lg}
                            onclick={scroll::anchor_callback("#solutions")}
                        >
                            {"View Sample Reports"}
                        </Button>
                    </div>

                    <div class="hero-brands">
                        <p>{"Trusted by marketers at"}</p>
                        <div class="hero-brand-row">
                            { for TRUSTED_BRANDS.iter().map(|brand| html! {
                                <span>{ *brand }</span>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="hero-visual">
                    <MockDashboard />
                    <div class="hero-visual-glow"></div>
                </div>
            </div>
        </section>
    }
}

/// Abstract product shot: a faked dashboard with metrics and an answer stream.
#[function_component(MockDashboard)]
fn mock_dashboard() -> Html {
    html! {
        <div class="dash glass-panel">
            <div class="dash-header">
                <div class="dash-lights">
                    <span class="dash-light red"></span>
                    <span class="dash-light yellow"></span>
                    <span class="dash-light green"></span>
                </div>
                <div class="dash-status mono-label">{"STATUS: OPTIMIZED"}</div>
            </div>

            <div class="dash-metrics">
                <div class="dash-metric">
                    <div class="dash-metric-label">{"Total Mentions"}</div>
                    <div class="dash-metric-value">{"14,205"}</div>
                    <div class="dash-metric-delta up">
                        { Icon::TrendingUp.render(12) }{" +12.5%"}
                    </div>
                </div>
                <div class="dash-metric">
                    <div class="dash-metric-label">{"Sentiment Score"}</div>
                    <div class="dash-metric-value">{"92.4"}</div>
                    <div class="dash-metric-delta cyan">
                        { Icon::CheckCircle.render(12) }{" Excellent"}
                    </div>
                </div>
            </div>

            <div class="dash-stream">
                <div class="dash-line">
                    <span class="dash-user">{"user:"}</span>
                    <span>{"Compare top CRM tools for enterprise."}</span>
                </div>
                <div class="dash-divider"></div>
                <div class="dash-line">
                    <span class="dash-ai">{"ai:"}</span>
                    <span>
                        {"Based on recent data, "}
                        <span class="dash-highlight">{"Forzeo"}</span>
                        {" is a leading choice due to robust security. Key competitors include..."}
                    </span>
                </div>
            </div>

            <div class="dash-badge glass-panel">
                <div class="dash-badge-icon">{ Icon::CheckCircle.render(24) }</div>
                <div>
                    <div class="dash-badge-label">{"Optimization Score"}</div>
                    <div class="dash-badge-value">{"98/100"}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <Section id="problem" darker=true>
            <div class="block-heading">
                <h2>{"SEO Alone Isn't Enough."}</h2>
                <p>
                    {"Traditional search is declining. AI assistants now answer queries \
                      directly, often without sending users to your website. If you aren't \
                      in the training data, you don't exist."}
                </p>
            </div>

            <div class="problem-grid">
                <div class="problem-card old">
                    <div class="problem-card-bg">{ Icon::Search.render(100) }</div>
                    <h3><span class="dot red"></span>{"Traditional SEO"}</h3>
                    <ul>
                        <li>{ Icon::Close.render(16) }<span>{"Optimizes for 10 blue links"}</span></li>
                        <li>{ Icon::Close.render(16) }<span>{"Relies on keywords & backlinks"}</span></li>
                        <li>{ Icon::Close.render(16) }<span>{"Losing traffic to zero-click searches"}</span></li>
                    </ul>
                </div>

                <div class="problem-card new">
                    <div class="problem-card-bg">{ Icon::Cpu.render(100) }</div>
                    <h3><span class="dot cyan"></span>{"Generative Optimization (GEO)"}</h3>
                    <ul>
                        <li>{ Icon::CheckCircle.render(16) }<span>{"Optimizes for AI Answers & Chat"}</span></li>
                        <li>{ Icon::CheckCircle.render(16) }<span>{"Focuses on entities & authority"}</span></li>
                        <li>{ Icon::CheckCircle.render(16) }<span>{"Captures intent before the click"}</span></li>
                    </ul>
                </div>
            </div>
        </Section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <Section id="features">
            <div class="block-heading left">
                <h2>
                    {"The Fastest Way to Improve "}<br />
                    {"Your "}<span class="text-gradient">{"AI Visibility."}</span>
                </h2>
            </div>

            <div class="features-grid">
                { for CORE_FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <div class="feature-icon">{ feature.icon.render(24) }</div>
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </div>
                }) }
            </div>
        </Section>
    }
}

#[function_component(CompetitorIntelSection)]
fn competitor_intel_section() -> Html {
    html! {
        <Section darker=true class={classes!("bordered-top")}>
            <div class="split">
                <div class="split-visual">
                    <div class="intel-rows">
                        { for (1..=3).map(|i| html! {
                            <div class="intel-row">
                                <div class="intel-row-left">
                                    <div class="intel-avatar"></div>
                                    <div class="intel-bar"></div>
                                </div>
                                <div class={classes!("intel-share", (i == 1).then_some("winning"))}>
                                    { if i == 1 { "+14% Share" } else { "-2% Share" } }
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="split-visual-glow cyan"></div>
                </div>
                <div class="split-copy">
                    <div class="kicker mono-label cyan">{"COMPETITOR INTELLIGENCE"}</div>
                    <h2>{"See Exactly Where Competitors Are Winning."}</h2>
                    <p>
                        {"Don't guess why they are recommended. Forzeo analyzes competitor \
                          mentions, identifies the authority sites feeding the AI, and \
                          highlights content gaps you need to fill."}
                    </p>
                    <ul class="check-list">
                        <li>{ Icon::Target.render(18) }{"Identify authority sources citation flow"}</li>
                        <li>{ Icon::Target.render(18) }{"Spot missing semantic angles"}</li>
                        <li>{ Icon::Target.render(18) }{"Benchmark share of voice"}</li>
                    </ul>
                </div>
            </div>
        </Section>
    }
}

#[function_component(ContentOptimizationSection)]
fn content_optimization_section() -> Html {
    html! {
        <Section>
            <div class="split">
                <div class="split-copy">
                    <div class="kicker mono-label indigo">{"CONTENT OPTIMIZATION"}</div>
                    <h2>{"Turn AI Insights Into High-Performing Content."}</h2>
                    <p>
                        {"We don't just tell you the problem; we fix it. Our Action Engine \
                          generates specific schema updates, paragraph rewrites, and entity \
                          definitions to align with LLM preferences."}
                    </p>
                    <Button variant={ButtonVariant::Outline} icon={Icon::ChevronRight}>
                        {"Explore Optimization Tools"}
                    </Button>
                </div>
                <div class="split-visual">
                    <div class="finding-card">
                        <div class="finding-header">
                            <span class="finding-warn">{ Icon::AlertTriangle.render(20) }</span>
                            <span>{"Missing Entity Connection"}</span>
                        </div>
                        <p>
                            {"Your pricing page lacks clear connection to \"Enterprise \
                              Security\" entities, causing generic output in ChatGPT \
                              queries for \"secure enterprise tools\"."}
                        </p>
                        <div class="finding-suggestion">
                            {"Suggestion: Add structured data for ISO 27001 compliance..."}
                        </div>
                    </div>
                    <div class="split-visual-glow indigo"></div>
                </div>
            </div>
        </Section>
    }
}

#[function_component(SocialProofSection)]
fn social_proof_section() -> Html {
    html! {
        <Section darker=true class={classes!("centered")}>
            <div class="stats-grid">
                { for STATISTICS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">{ stat.value }</div>
                        <div class="stat-label">{ stat.label }</div>
                    </div>
                }) }
            </div>

            <TestimonialSlider />
        </Section>
    }
}

#[function_component(ReportsSection)]
fn reports_section() -> Html {
    html! {
        <Section id="solutions">
            <div class="block-heading">
                <h2>{"Actionable Intelligence"}</h2>
                <p>
                    {"Comprehensive dashboards that translate complex AI behavior into \
                      clear growth strategies."}
                </p>
            </div>

            <div class="reports-grid">
                <VisibilitySnapshotCard />
                <CompetitorScorecardCard />
                <MentionBreakdownCard />
            </div>
        </Section>
    }
}

#[function_component(VisibilitySnapshotCard)]
fn visibility_snapshot_card() -> Html {
    html! {
        <div class="report-card">
            <div class="report-body">
                <div class="report-top">
                    <div class="report-title cyan">
                        { Icon::Activity.render(16) }
                        <h4 class="mono-label">{"Visibility Index"}</h4>
                    </div>
                    <div class="report-delta">{ Icon::TrendingUp.render(10) }{" +24%"}</div>
                </div>

                <div class="report-chart">
                    <svg viewBox="0 0 200 140" preserveAspectRatio="none">
                        <defs>
                            <linearGradient id="chart-fill" x1="0" y1="0" x2="0" y2="1">
                                <stop offset="0%" stop-color="#22d3ee" stop-opacity="0.3" />
                                <stop offset="100%" stop-color="#22d3ee" stop-opacity="0" />
                            </linearGradient>
                        </defs>
                        <path
                            d="M0,100 C20,90 40,95 60,60 C80,30 100,40 120,20 C140,10 160,25 200,5 L200,140 L0,140 Z"
                            fill="url(#chart-fill)"
                        />
                        <path
                            d="M0,100 C20,90 40,95 60,60 C80,30 100,40 120,20 C140,10 160,25 200,5"
                            fill="none"
                            stroke="#22d3ee"
                            stroke-width="3"
                            vector-effect="non-scaling-stroke"
                        />
                    </svg>
                    <div class="report-chart-point"></div>
                </div>

                <div class="report-axis mono-label">
                    <span>{"Week 1"}</span>
                    <span>{"Week 2"}</span>
                    <span>{"Week 3"}</span>
                    <span>{"Week 4"}</span>
                </div>
            </div>
            <div class="report-footer">
                <h3>{"AI Visibility Snapshot"}</h3>
                <p>{"Track your ranking trajectory across models."}</p>
            </div>
        </div>
    }
}

#[function_component(CompetitorScorecardCard)]
fn competitor_scorecard_card() -> Html {
    let rows = [
        ("Forzeo", 68, true),
        ("Competitor A", 42, false),
        ("Competitor B", 21, false),
    ];
    html! {
        <div class="report-card">
            <div class="report-body">
                <div class="report-top">
                    <div class="report-title indigo">
                        { Icon::Target.render(16) }
                        <h4 class="mono-label">{"Share of Voice"}</h4>
                    </div>
                </div>

                <div class="voice-bars">
                    { for rows.iter().map(|(name, share, is_brand)| html! {
                        <div class="voice-row">
                            <div class="voice-labels">
                                <span class={classes!(is_brand.then_some("brand"))}>{ *name }</span>
                                <span class={classes!(is_brand.then_some("brand-share"))}>
                                    { format!("{share}%") }
                                </span>
                            </div>
                            <div class="voice-track">
                                <div
                                    class={classes!("voice-fill", is_brand.then_some("brand"))}
                                    style={format!("width: {share}%;")}
                                ></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <div class="report-footer">
                <h3>{"Competitor Scorecard"}</h3>
                <p>{"Benchmark your presence against rivals."}</p>
            </div>
        </div>
    }
}

#[function_component(MentionBreakdownCard)]
fn mention_breakdown_card() -> Html {
    html! {
        <div class="report-card">
            <div class="report-body">
                <div class="report-top">
                    <div class="report-title purple">
                        { Icon::PieChart.render(16) }
                        <h4 class="mono-label">{"Mention Types"}</h4>
                    </div>
                </div>

                <div class="donut-row">
                    <div class="donut">
                        <svg viewBox="0 0 36 36">
                            <path
                                class="donut-track"
                                d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831"
                                fill="none" stroke="currentColor" stroke-width="4"
                            />
                            <path
                                class="donut-primary"
                                stroke-dasharray="60, 100"
                                d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831"
                                fill="none" stroke="currentColor" stroke-width="4"
                            />
                            <path
                                class="donut-secondary"
                                stroke-dasharray="25, 100"
                                stroke-dashoffset="-60"
                                d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831"
                                fill="none" stroke="currentColor" stroke-width="4"
                            />
                        </svg>
                        <div class="donut-center">{"Total"}</div>
                    </div>

                    <div class="donut-legend">
                        <div class="legend-row">
                            <div><span class="legend-dot indigo"></span>{"Citations"}</div>
                            <span class="legend-pct">{"60%"}</span>
                        </div>
                        <div class="legend-row">
                            <div><span class="legend-dot purple"></span>{"Direct Recs"}</div>
                            <span class="legend-pct">{"25%"}</span>
                        </div>
                        <div class="legend-row muted">
                            <div><span class="legend-dot slate"></span>{"Neutral"}</div>
                            <span class="legend-pct">{"15%"}</span>
                        </div>
                    </div>
                </div>
            </div>
            <div class="report-footer">
                <h3>{"Mention Breakdown"}</h3>
                <p>{"Analyze sentiment & context sources."}</p>
            </div>
        </div>
    }
}

#[function_component(PricingSection)]
fn pricing_section() -> Html {
    html! {
        <Section id="pricing" darker=true>
            <div class="block-heading">
                <h2>{"Simple, Transparent Pricing."}</h2>
                <p>{"Start auditing your visibility today."}</p>
            </div>

            <div class="pricing-grid">
                { for PRICING_TIERS.iter().map(|tier| {
                    let cta = if tier.price == "Custom" { "Contact Sales" } else { "Start Free Audit" };
                    let variant = if tier.recommended { ButtonVariant::Primary } else { ButtonVariant::Outline };
                    html! {
                        <div class={classes!("tier-card", tier.recommended.then_some("recommended"))}>
                            if tier.recommended {
                                <div class="tier-ribbon">{"Most Popular"}</div>
                            }
                            <h3>{ tier.name }</h3>
                            <div class="tier-price">
                                { tier.price }
                                <span>{"/mo"}</span>
                            </div>
                            <p class="tier-desc">{ tier.description }</p>
                            <ul class="tier-features">
                                { for tier.features.iter().map(|feat| html! {
                                    <li>{ Icon::CheckCircle.render(14) }<span>{ *feat }</span></li>
                                }) }
                            </ul>
                            <Button
                                variant={variant}
                                class={classes!("btn-block")}
                                onclick={scroll::anchor_callback("#audit")}
                            >
                                { cta }
                            </Button>
                        </div>
                    }
                }) }
            </div>
        </Section>
    }
}

#[function_component(FinalCtaSection)]
fn final_cta_section() -> Html {
    html! {
        <section id="audit" class="final-cta">
            <div class="final-cta-wash"></div>
            <div class="final-cta-inner">
                <h2>
                    {"Your Customers Ask AI Every Day. "}<br />
                    <span class="cyan">{"Make Sure It Recommends You."}</span>
                </h2>
                <div class="final-cta-buttons">
                    <Button variant={ButtonVariant::Primary} size={ButtonSize::Lg}>
                        {"Run My Free AI Visibility Audit"}
                    </Button>
                    <Button
                        variant={ButtonVariant::Ghost}
                        size={ButtonSize::Lg}
                        class={classes!("outlined")}
                    >
                        {"Book a Strategy Call"}
                    </Button>
                </div>
            </div>
        </section>
    }
}

const LANDING_CSS: &str = r#"
    .landing {
        position: relative;
        min-height: 100vh;
    }

    /* Hero */
    .hero {
        position: relative;
        padding: 10rem 1.5rem 5rem;
        z-index: 1;
    }
    .hero-inner {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-copy {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        align-self: flex-start;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: var(--brand-cyan);
        font-size: 0.875rem;
        font-weight: 500;
        backdrop-filter: blur(6px);
    }
    .hero-badge-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: var(--brand-cyan);
        box-shadow: 0 0 10px var(--brand-cyan);
    }
    .hero-title {
        font-size: 4rem;
        font-weight: 700;
        line-height: 1.1;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: var(--slate-400);
        max-width: 32rem;
    }
    .hero-cta-row {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .hero-brands {
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .hero-brands p {
        font-size: 0.875rem;
        color: var(--slate-500);
        margin-bottom: 1rem;
    }
    .hero-brand-row {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        font-family: var(--font-display);
        font-weight: 700;
        font-size: 1.125rem;
        color: var(--slate-400);
        opacity: 0.6;
    }
    .hero-brand-row span:hover {
        color: #fff;
    }
    .hero-visual {
        position: relative;
    }
    .hero-visual-glow {
        position: absolute;
        inset: -2.5rem;
        background: rgba(79, 70, 229, 0.2);
        filter: blur(64px);
        border-radius: 50%;
        z-index: -1;
        mix-blend-mode: screen;
    }

    /* Mock dashboard */
    .dash {
        position: relative;
        border-radius: 1rem;
        padding: 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    }
    .dash-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        padding-bottom: 1rem;
        margin-bottom: 2rem;
    }
    .dash-lights {
        display: flex;
        gap: 0.75rem;
    }
    .dash-light {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
    }
    .dash-light.red { background: #ef4444; }
    .dash-light.yellow { background: #eab308; }
    .dash-light.green { background: #22c55e; }
    .dash-status {
        padding: 0.25rem 0.75rem;
        border-radius: 0.25rem;
        background: rgba(0, 0, 0, 0.2);
        color: var(--brand-cyan);
        border: 1px solid rgba(34, 211, 238, 0.2);
        font-size: 0.75rem;
    }
    .dash-metrics {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .dash-metric {
        background: rgba(11, 15, 26, 0.4);
        padding: 1rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
    }
    .dash-metric-label {
        color: var(--slate-400);
        font-size: 0.75rem;
        margin-bottom: 0.25rem;
    }
    .dash-metric-value {
        font-family: var(--font-display);
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
    }
    .dash-metric-delta {
        font-size: 0.75rem;
        margin-top: 0.25rem;
        display: flex;
        align-items: center;
        gap: 0.25rem;
    }
    .dash-metric-delta.up { color: #34d399; }
    .dash-metric-delta.cyan { color: var(--brand-cyan); }
    .dash-stream {
        font-family: var(--font-mono);
        font-size: 0.875rem;
        background: rgba(0, 0, 0, 0.3);
        padding: 1rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .dash-line {
        display: flex;
        gap: 0.5rem;
    }
    .dash-user { color: #60a5fa; }
    .dash-ai { color: #c084fc; }
    .dash-divider {
        height: 1px;
        background: rgba(255, 255, 255, 0.05);
    }
    .dash-highlight {
        color: #fff;
        background: rgba(79, 70, 229, 0.6);
        padding: 0 0.25rem;
        border-radius: 0.25rem;
        box-shadow: 0 0 10px rgba(79, 70, 229, 0.3);
    }
    .dash-badge {
        position: absolute;
        bottom: -1.5rem;
        right: -1.5rem;
        padding: 1rem 1.5rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        gap: 0.75rem;
        background: rgba(19, 26, 43, 0.9);
    }
    .dash-badge-icon {
        padding: 0.5rem;
        background: rgba(34, 197, 94, 0.2);
        border-radius: 0.5rem;
        color: #4ade80;
        display: inline-flex;
    }
    .dash-badge-label {
        font-size: 0.75rem;
        color: var(--slate-400);
    }
    .dash-badge-value {
        font-size: 1.125rem;
        font-weight: 700;
        color: #fff;
    }

    /* Shared section headings */
    .block-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .block-heading.left {
        text-align: left;
    }
    .block-heading h2 {
        font-size: 2.5rem;
        margin-bottom: 1.5rem;
    }
    .block-heading p {
        color: var(--slate-400);
        max-width: 42rem;
        margin: 0 auto;
    }
    .block-heading.left p {
        margin: 0;
    }

    /* Problem */
    .problem-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .problem-card {
        position: relative;
        overflow: hidden;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.05);
        transition: border-color 0.3s;
    }
    .problem-card.old:hover {
        border-color: rgba(239, 68, 68, 0.3);
    }
    .problem-card.new {
        background: linear-gradient(135deg, rgba(79, 70, 229, 0.2), rgba(34, 211, 238, 0.1));
        border-color: rgba(34, 211, 238, 0.2);
    }
    .problem-card-bg {
        position: absolute;
        top: 0;
        right: 0;
        padding: 1rem;
        opacity: 0.1;
    }
    .problem-card h3 {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        margin-bottom: 1rem;
    }
    .problem-card.old h3 { color: var(--slate-300); }
    .dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
    }
    .dot.red { background: #ef4444; }
    .dot.cyan {
        background: var(--brand-cyan);
        box-shadow: 0 0 10px #22d3ee;
    }
    .problem-card li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        margin-bottom: 1rem;
        color: var(--slate-400);
    }
    .problem-card.new li { color: var(--slate-300); }
    .problem-card.old li svg { color: #ef4444; flex-shrink: 0; margin-top: 0.25rem; }
    .problem-card.new li svg { color: var(--brand-cyan); flex-shrink: 0; margin-top: 0.25rem; }

    /* Features grid */
    .features-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
    }
    .feature-card {
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: var(--brand-surface);
        border: 1px solid rgba(255, 255, 255, 0.05);
        transition: all 0.3s ease;
    }
    .feature-card:hover {
        border-color: rgba(79, 70, 229, 0.5);
        transform: translateY(-0.25rem);
    }
    .feature-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 0.5rem;
        background: rgba(79, 70, 229, 0.1);
        color: var(--brand-indigo);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        transition: all 0.2s ease;
    }
    .feature-card:hover .feature-icon {
        background: var(--brand-indigo);
        color: #fff;
    }
    .feature-card h3 {
        font-size: 1.125rem;
        margin-bottom: 0.75rem;
    }
    .feature-card p {
        color: var(--slate-400);
        font-size: 0.875rem;
    }

    /* Deep-dive splits */
    .bordered-top {
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .split {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .split-copy h2 {
        font-size: 2.25rem;
        margin-bottom: 1.5rem;
    }
    .split-copy > p {
        color: var(--slate-400);
        font-size: 1.125rem;
        margin-bottom: 2rem;
    }
    .kicker {
        margin-bottom: 1rem;
    }
    .kicker.cyan { color: var(--brand-cyan); }
    .kicker.indigo { color: var(--brand-indigo); }
    .check-list li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: var(--slate-300);
        margin-bottom: 0.75rem;
    }
    .check-list svg { color: var(--brand-indigo); flex-shrink: 0; }
    .split-visual {
        position: relative;
    }
    .split-visual-glow {
        position: absolute;
        inset: 0;
        filter: blur(64px);
        z-index: 0;
        transform: translate(2.5rem, 2.5rem);
    }
    .split-visual-glow.cyan { background: rgba(34, 211, 238, 0.2); }
    .split-visual-glow.indigo { background: rgba(79, 70, 229, 0.2); transform: none; inset: -1rem; }
    .intel-rows {
        position: relative;
        z-index: 1;
        display: grid;
        gap: 1rem;
    }
    .intel-row {
        background: var(--brand-surface);
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 1rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .intel-row-left {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .intel-avatar {
        width: 2rem;
        height: 2rem;
        border-radius: 0.25rem;
        background: rgba(255, 255, 255, 0.1);
    }
    .intel-bar {
        width: 6rem;
        height: 0.5rem;
        border-radius: 0.25rem;
        background: rgba(255, 255, 255, 0.1);
    }
    .intel-share {
        font-family: var(--font-mono);
        font-size: 0.875rem;
        color: var(--slate-500);
    }
    .intel-share.winning { color: #4ade80; }
    .finding-card {
        position: relative;
        z-index: 1;
        background: var(--brand-dark);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        padding: 1.5rem;
    }
    .finding-header {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #fff;
        font-weight: 500;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        padding-bottom: 1rem;
        margin-bottom: 1rem;
    }
    .finding-warn { color: #eab308; display: inline-flex; }
    .finding-card > p {
        color: var(--slate-400);
        font-size: 0.875rem;
        margin-bottom: 1rem;
    }
    .finding-suggestion {
        background: rgba(79, 70, 229, 0.1);
        border: 1px solid rgba(79, 70, 229, 0.2);
        padding: 0.75rem;
        border-radius: 0.25rem;
        font-size: 0.875rem;
        color: var(--brand-cyan);
    }

    /* Social proof */
    .centered { text-align: center; }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        margin-bottom: 6rem;
    }
    .stat {
        padding: 1.5rem;
        border-right: 1px solid rgba(255, 255, 255, 0.05);
    }
    .stat:last-child { border-right: 0; }
    .stat-value {
        font-family: var(--font-display);
        font-size: 3rem;
        font-weight: 700;
        background: linear-gradient(180deg, #fff, var(--slate-500));
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        color: transparent;
        margin-bottom: 0.5rem;
    }
    .stat-label {
        color: var(--slate-400);
        font-weight: 500;
    }

    /* Sample reports */
    .reports-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .report-card {
        display: flex;
        flex-direction: column;
        border-radius: 0.75rem;
        overflow: hidden;
        background: var(--brand-surface);
        border: 1px solid rgba(255, 255, 255, 0.1);
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
        transition: border-color 0.3s;
    }
    .report-card:hover { border-color: rgba(34, 211, 238, 0.3); }
    .report-body {
        flex: 1;
        display: flex;
        flex-direction: column;
        padding: 1.5rem;
        background: linear-gradient(180deg, var(--brand-surface), var(--brand-dark));
    }
    .report-top {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1.5rem;
    }
    .report-title {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .report-title h4 {
        color: var(--slate-300);
        font-weight: 500;
        font-size: 0.8rem;
    }
    .report-title.cyan svg { color: var(--brand-cyan); }
    .report-title.indigo svg { color: var(--brand-indigo); }
    .report-title.purple svg { color: #c084fc; }
    .report-delta {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        color: #34d399;
        background: rgba(52, 211, 153, 0.1);
        font-family: var(--font-mono);
        font-size: 0.75rem;
        padding: 0.125rem 0.5rem;
        border-radius: 0.25rem;
    }
    .report-chart {
        position: relative;
        flex: 1;
        min-height: 140px;
    }
    .report-chart svg {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        overflow: visible;
    }
    .report-chart-point {
        position: absolute;
        top: 5px;
        right: 0;
        width: 0.75rem;
        height: 0.75rem;
        background: var(--brand-cyan);
        border: 2px solid var(--brand-surface);
        border-radius: 50%;
        box-shadow: 0 0 10px #22d3ee;
    }
    .report-axis {
        display: flex;
        justify-content: space-between;
        color: var(--slate-500);
        font-size: 0.625rem;
        margin-top: 1rem;
    }
    .voice-bars {
        flex: 1;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .voice-labels {
        display: flex;
        justify-content: space-between;
        font-size: 0.75rem;
        color: var(--slate-400);
        margin-bottom: 0.25rem;
    }
    .voice-labels .brand { color: #fff; font-weight: 700; }
    .voice-labels .brand-share { color: var(--brand-cyan); }
    .voice-track {
        height: 0.5rem;
        width: 100%;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 9999px;
        overflow: hidden;
    }
    .voice-fill {
        height: 100%;
        background: var(--slate-600);
        border-radius: 9999px;
    }
    .voice-fill.brand {
        background: var(--brand-cyan);
        box-shadow: 0 0 10px rgba(34, 211, 238, 0.5);
    }
    .donut-row {
        display: flex;
        align-items: center;
        gap: 1rem;
        flex: 1;
    }
    .donut {
        position: relative;
        width: 5rem;
        height: 5rem;
        flex-shrink: 0;
    }
    .donut svg {
        width: 100%;
        height: 100%;
        transform: rotate(-90deg);
    }
    .donut-track { color: var(--slate-600); }
    .donut-primary { color: var(--brand-indigo); }
    .donut-secondary { color: #a855f7; }
    .donut-center {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.625rem;
        font-weight: 700;
        color: #fff;
    }
    .donut-legend {
        flex: 1;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        font-size: 0.75rem;
    }
    .legend-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        color: var(--slate-300);
    }
    .legend-row > div {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .legend-row.muted { color: var(--slate-400); }
    .legend-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        display: inline-block;
    }
    .legend-dot.indigo { background: var(--brand-indigo); }
    .legend-dot.purple { background: #a855f7; }
    .legend-dot.slate { background: var(--slate-600); }
    .legend-pct { font-family: var(--font-mono); color: #fff; }
    .legend-row.muted .legend-pct { color: var(--slate-500); }
    .report-footer {
        padding: 1rem;
        background: rgba(11, 15, 26, 0.5);
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .report-footer h3 {
        font-size: 1.125rem;
        margin-bottom: 0.25rem;
    }
    .report-footer p {
        color: var(--slate-400);
        font-size: 0.75rem;
    }

    /* Pricing */
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .tier-card {
        position: relative;
        display: flex;
        flex-direction: column;
        padding: 1.5rem;
        border-radius: 1rem;
        background: rgba(19, 26, 43, 0.3);
        border: 1px solid rgba(255, 255, 255, 0.05);
    }
    .tier-card.recommended {
        background: var(--brand-surface);
        border-color: rgba(79, 70, 229, 0.5);
        box-shadow: 0 0 30px rgba(79, 70, 229, 0.15);
    }
    .tier-ribbon {
        position: absolute;
        top: -0.75rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.25rem 0.75rem;
        background: var(--brand-indigo);
        color: #fff;
        font-size: 0.75rem;
        font-weight: 700;
        border-radius: 9999px;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        white-space: nowrap;
    }
    .tier-card h3 {
        font-size: 1.25rem;
        margin-bottom: 0.5rem;
    }
    .tier-price {
        font-family: var(--font-display);
        font-size: 1.875rem;
        font-weight: 700;
        color: #fff;
        margin-bottom: 1rem;
    }
    .tier-price span {
        font-family: var(--font-sans);
        font-size: 0.875rem;
        font-weight: 400;
        color: var(--slate-500);
    }
    .tier-desc {
        color: var(--slate-400);
        font-size: 0.875rem;
        margin-bottom: 1.5rem;
        min-height: 2.5rem;
    }
    .tier-features {
        flex: 1;
        margin-bottom: 2rem;
    }
    .tier-features li {
        display: flex;
        align-items: flex-start;
        gap: 0.5rem;
        font-size: 0.875rem;
        color: var(--slate-300);
        margin-bottom: 0.75rem;
    }
    .tier-features svg {
        color: var(--brand-cyan);
        flex-shrink: 0;
        margin-top: 0.25rem;
    }

    /* Final CTA */
    .final-cta {
        position: relative;
        padding: 6rem 1.5rem;
        overflow: hidden;
        z-index: 1;
    }
    .final-cta-wash {
        position: absolute;
        inset: 0;
        background: rgba(79, 70, 229, 0.1);
    }
    .final-cta-inner {
        position: relative;
        z-index: 1;
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .final-cta h2 {
        font-size: 3rem;
        margin-bottom: 2rem;
    }
    .final-cta .cyan { color: var(--brand-cyan); }
    .final-cta-buttons {
        display: flex;
        justify-content: center;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .final-cta .outlined {
        border: 1px solid rgba(255, 255, 255, 0.1);
    }

    @media (max-width: 1024px) {
        .hero-inner { grid-template-columns: 1fr; }
        .hero-title { font-size: 3rem; }
        .features-grid { grid-template-columns: 1fr 1fr; }
        .reports-grid { grid-template-columns: 1fr; }
        .pricing-grid { grid-template-columns: 1fr 1fr; }
        .split { grid-template-columns: 1fr; gap: 2.5rem; }
    }
    @media (max-width: 640px) {
        .hero { padding-top: 7rem; }
        .hero-title { font-size: 2.25rem; }
        .features-grid { grid-template-columns: 1fr; }
        .pricing-grid { grid-template-columns: 1fr; }
        .problem-grid { grid-template-columns: 1fr; }
        .stats-grid { grid-template-columns: 1fr; }
        .stat { border-right: 0; }
        .final-cta h2 { font-size: 2rem; }
        .dash-badge { right: 0; }
    }
"#;
