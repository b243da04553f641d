use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class={classes!("logo", props.class.clone())}>
            <style>{LOGO_CSS}</style>
            <span class="logo-mark">
                <svg width="28" height="28" viewBox="0 0 28 28" fill="none" aria-hidden="true">
                    <rect x="2" y="2" width="24" height="24" rx="6" fill="url(#logo-grad)" />
                    <path d="M9 19V9h10M9 14h7" stroke="#fff" stroke-width="2.5" stroke-linecap="round" />
                    <defs>
                        <linearGradient id="logo-grad" x1="2" y1="2" x2="26" y2="26">
                            <stop stop-color="#4f46e5" />
                            <stop offset="1" stop-color="#22d3ee" />
                        </linearGradient>
                    </defs>
                </svg>
            </span>
            <span class="logo-word">{"Forzeo"}</span>
        </div>
    }
}

const LOGO_CSS: &str = r#"
    .logo {
        display: inline-flex;
        align-items: center;
        gap: 0.6rem;
    }
    .logo-mark {
        display: inline-flex;
    }
    .logo-word {
        font-family: var(--font-display);
        font-weight: 700;
        font-size: 1.35rem;
        color: #fff;
        letter-spacing: -0.02em;
    }
"#;
