//! Static copy for the page: nav links, stats, feature cards, testimonials,
//! pricing tiers. Pure data, rendered as-is by the section components.

use crate::components::icons::Icon;

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Problem", href: "#problem" },
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Solutions", href: "#solutions" },
    NavLink { label: "Pricing", href: "#pricing" },
];

#[derive(Clone, PartialEq)]
pub struct Statistic {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATISTICS: &[Statistic] = &[
    Statistic { value: "1,200+", label: "Brands Audited" },
    Statistic { value: "38%", label: "Avg. Visibility Lift in 60 Days" },
    Statistic { value: "4", label: "Major LLMs Tracked Continuously" },
];

#[derive(Clone, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CORE_FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Search,
        title: "AI Visibility Audit",
        description:
            "Query ChatGPT, Gemini, Perplexity, and Copilot at scale to see exactly \
             when, where, and how your brand shows up in generated answers.",
    },
    Feature {
        icon: Icon::Cpu,
        title: "Action Engine",
        description:
            "Turns every gap into a concrete fix: schema updates, entity definitions, \
             and paragraph rewrites aligned with how LLMs weigh authority.",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Share-of-Voice Tracking",
        description:
            "Benchmark your mention share against competitors across models and \
             watch the trendline respond as optimizations land.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Source Intelligence",
        description:
            "Map the authority sites feeding each model's answers so you know \
             precisely which citations to win next.",
    },
];

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// CSS gradient behind the author avatar ring.
    pub accent: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We were invisible on Gemini until we used Forzeo. Within 45 days, \
                we became the #1 recommended tool for our category across all major LLMs.",
        author: "Sarah Jenkins",
        role: "CMO @ TechFlow",
        accent: "linear-gradient(135deg, #4f46e5, #22d3ee)",
    },
    Testimonial {
        quote: "The Action Engine is a game changer. It doesn't just show us what's \
                wrong; it gives us the exact schema and content tweaks to win the citation.",
        author: "Marcus Chen",
        role: "Head of SEO @ CloudScale",
        accent: "linear-gradient(135deg, #a855f7, #4f46e5)",
    },
    Testimonial {
        quote: "GEO is the new SEO, and Forzeo is the only platform that actually \
                understands how LLMs process brand authority. Essential for modern growth.",
        author: "Elena Rodriguez",
        role: "Digital Growth @ SaaSify",
        accent: "linear-gradient(135deg, #22d3ee, #34d399)",
    },
    Testimonial {
        quote: "Our brand hallucinations dropped by 60% after implementing Forzeo's \
                entity definition strategies. The ROI on brand safety alone is massive.",
        author: "David Park",
        role: "Founder @ Vertex",
        accent: "linear-gradient(135deg, #fbbf24, #f97316)",
    },
];

#[derive(Clone, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$99",
        description: "For solo founders checking how AI talks about them.",
        features: &[
            "Monthly visibility audit",
            "2 tracked models",
            "10 tracked prompts",
            "Email summary reports",
        ],
        recommended: false,
    },
    PricingTier {
        name: "Growth",
        price: "$249",
        description: "For marketing teams actively optimizing for AI answers.",
        features: &[
            "Weekly visibility audits",
            "All 4 major models",
            "100 tracked prompts",
            "Action Engine recommendations",
            "3 competitor scorecards",
        ],
        recommended: true,
    },
    PricingTier {
        name: "Scale",
        price: "$599",
        description: "For brands defending their category across every model.",
        features: &[
            "Daily visibility audits",
            "Unlimited tracked prompts",
            "10 competitor scorecards",
            "Hallucination monitoring",
            "Priority support",
        ],
        recommended: false,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        description: "For agencies and multi-brand portfolios.",
        features: &[
            "Multi-brand workspaces",
            "Custom prompt corpora",
            "Dedicated GEO strategist",
            "API access",
        ],
        recommended: false,
    },
];

pub const TRUSTED_BRANDS: &[&str] = &["TechFlow", "CloudScale", "SaaSify", "Vertex", "Nimbus Labs"];
