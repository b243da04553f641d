use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::Icon;
use crate::components::logo::Logo;
use crate::content::NAV_LINKS;
use crate::utils::scroll;

/// Scroll depth past which the bar swaps from transparent to solid chrome.
const SCROLL_THRESHOLD_PX: f64 = 20.0;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let is_scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);

    // Window scroll listener for the chrome swap, removed on unmount
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > SCROLL_THRESHOLD_PX);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial call
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(scroll_y > SCROLL_THRESHOLD_PX);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Anchor click: close the mobile menu, then smooth-scroll to the section
    let nav_click = {
        let menu_open = menu_open.clone();
        move |href: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll::scroll_to(href);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("nav", (*is_scrolled).then_some("scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-inner">
                <Logo />

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            href={link.href}
                            class="nav-link"
                            onclick={nav_click(link.href)}
                        >
                            { link.label }
                        </a>
                    }) }
                    <Button
                        variant={ButtonVariant::Primary}
                        size={ButtonSize::Sm}
                        onclick={nav_click("#audit")}
                    >
                        {"Get Started"}
                    </Button>
                </div>

                <button class="nav-menu-toggle" onclick={toggle_menu}>
                    { if *menu_open { Icon::Close.render(24) } else { Icon::Menu.render(24) } }
                </button>
            </div>

            if *menu_open {
                <div class="nav-mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            href={link.href}
                            class="nav-mobile-link"
                            onclick={nav_click(link.href)}
                        >
                            { link.label }
                        </a>
                    }) }
                    <Button
                        variant={ButtonVariant::Primary}
                        class={classes!("btn-block")}
                        onclick={nav_click("#audit")}
                    >
                        {"Get Started"}
                    </Button>
                </div>
            }
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        padding: 1.5rem 0;
        border-bottom: 1px solid transparent;
        background: transparent;
        transition: all 0.3s ease;
    }
    .nav.scrolled {
        padding: 1rem 0;
        background: rgba(11, 15, 26, 0.8);
        backdrop-filter: blur(12px);
        border-bottom-color: rgba(255, 255, 255, 0.1);
    }
    .nav-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: var(--slate-300);
        transition: color 0.2s;
    }
    .nav-link:hover {
        color: #fff;
    }
    .nav-menu-toggle {
        display: none;
        background: none;
        border: none;
        color: #fff;
    }
    .nav-mobile-menu {
        position: absolute;
        top: 100%;
        left: 0;
        width: 100%;
        background: var(--brand-dark);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .nav-mobile-link {
        font-size: 1.125rem;
        font-weight: 500;
        color: var(--slate-300);
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .nav-menu-toggle {
            display: block;
        }
    }
"#;
