use yew::prelude::*;

use crate::components::logo::Logo;
use crate::utils::scroll;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer id="resources" class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Logo class={classes!("footer-logo")} />
                        <p>
                            {"The first comprehensive Generative Engine Optimization \
                              platform for modern brands."}
                        </p>
                    </div>

                    <div class="footer-col">
                        <h4>{"Platform"}</h4>
                        <ul>
                            <li><a href="#features" onclick={scroll::anchor_callback("#features")}>{"Features"}</a></li>
                            <li><a href="#solutions" onclick={scroll::anchor_callback("#solutions")}>{"Solutions"}</a></li>
                            <li><a href="#pricing" onclick={scroll::anchor_callback("#pricing")}>{"Pricing"}</a></li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Resources"}</h4>
                        <ul>
                            <li><a href="#">{"GEO Guide"}</a></li>
                            <li><a href="#">{"Blog"}</a></li>
                            <li><a href="#">{"Case Studies"}</a></li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li><a href="#">{"Privacy"}</a></li>
                            <li><a href="#">{"Terms"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    { format!("© {} Forzeo Inc. All rights reserved.", year) }
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .footer {
        position: relative;
        z-index: 1;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        background: var(--brand-dark);
        padding: 3rem 1.5rem;
    }
    .footer-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 3rem;
        margin-bottom: 3rem;
    }
    .footer-brand p {
        margin-top: 1.5rem;
        color: var(--slate-500);
        font-size: 0.875rem;
    }
    .footer-col h4 {
        color: #fff;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .footer-col li {
        margin-bottom: 0.5rem;
    }
    .footer-col a {
        font-size: 0.875rem;
        color: var(--slate-400);
        transition: color 0.2s;
    }
    .footer-col a:hover {
        color: var(--brand-cyan);
    }
    .footer-bottom {
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        text-align: center;
        color: var(--slate-600);
        font-size: 0.875rem;
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr 1fr;
            gap: 2rem;
        }
    }
"#;
