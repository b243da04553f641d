//! Testimonial slider: the carousel cursor bound to Yew state, an interval
//! that advances it unattended, and arrow/dot controls for manual moves.
//! Manual moves do not reset the interval's phase; the timer keeps its own
//! schedule, matching the original behavior.

use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::{AutoAdvance, Carousel, Move, AUTO_ADVANCE_MS};
use crate::components::icons::Icon;
use crate::content::TESTIMONIALS;

/// Every mutation of the cursor, timer tick or click, lands here as one
/// synchronous reduction on the UI thread.
impl Reducible for Carousel {
    type Action = Move;

    fn reduce(self: Rc<Self>, action: Move) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(TestimonialSlider)]
pub fn testimonial_slider() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    // Auto-advance runs for the slider's whole lifetime; the handle is owned
    // by the effect and dropped on unmount, which cancels the interval
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut auto = AutoAdvance::idle();
                auto.start(AUTO_ADVANCE_MS, move || dispatcher.dispatch(Move::Next));
                move || auto.stop()
            },
            (),
        );
    }

    let on_prev = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Move::Prev))
    };
    let on_next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Move::Next))
    };
    let on_select = {
        let dispatcher = carousel.dispatcher();
        move |idx: usize| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(Move::Select(idx)))
        }
    };

    let active = carousel.active_index();

    html! {
        <div class="slider">
            <style>{SLIDER_CSS}</style>

            <button class="slider-arrow slider-arrow-left" onclick={on_prev}>
                { Icon::ChevronLeft.render(24) }
            </button>
            <button class="slider-arrow slider-arrow-right" onclick={on_next}>
                { Icon::ChevronRight.render(24) }
            </button>

            <div class="slider-frame">
                <div class="slider-panel glass-panel">
                    <div class="slider-quote-mark">{ Icon::Quote.render(160) }</div>
                    { for TESTIMONIALS.iter().enumerate().map(|(idx, t)| html! {
                        <div class={classes!("slide", (idx == active).then_some("active"))}>
                            <p class="slide-quote">{ format!("\u{201c}{}\u{201d}", t.quote) }</p>
                            <div class="slide-author">
                                <div class="slide-avatar" style={format!("background: {};", t.accent)}>
                                    <span>{ t.author.chars().next().map(String::from).unwrap_or_default() }</span>
                                </div>
                                <div>
                                    <div class="slide-author-name">{ t.author }</div>
                                    <div class="slide-author-role">{ t.role }</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="slider-dots">
                { for (0..TESTIMONIALS.len()).map(|idx| html! {
                    <button
                        class={classes!("slider-dot", (idx == active).then_some("active"))}
                        onclick={on_select(idx)}
                    />
                }) }
            </div>
        </div>
    }
}

const SLIDER_CSS: &str = r#"
    .slider {
        position: relative;
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 3rem;
    }
    .slider-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        z-index: 20;
        padding: 0.5rem;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(19, 26, 43, 0.5);
        color: var(--slate-400);
        display: inline-flex;
        transition: all 0.3s ease;
    }
    .slider-arrow:hover {
        background: var(--brand-indigo);
        border-color: var(--brand-indigo);
        color: #fff;
    }
    .slider-arrow-left { left: 0; }
    .slider-arrow-right { right: 0; }
    .slider-frame {
        background: linear-gradient(90deg, rgba(79, 70, 229, 0.1), transparent);
        padding: 1px;
        border-radius: 1.5rem;
    }
    .slider-panel {
        position: relative;
        overflow: hidden;
        background: var(--brand-surface);
        border-radius: 1.5rem;
        padding: 4rem 3rem;
        text-align: center;
    }
    .slider-quote-mark {
        position: absolute;
        top: 2.5rem;
        right: 2.5rem;
        opacity: 0.05;
        color: #fff;
        pointer-events: none;
    }
    .slide {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        opacity: 0;
        transform: translateY(2rem);
        transition: opacity 0.7s ease, transform 0.7s ease;
        pointer-events: none;
    }
    .slide.active {
        position: relative;
        opacity: 1;
        transform: translateY(0);
        pointer-events: auto;
    }
    .slide-quote {
        font-size: 1.5rem;
        font-weight: 300;
        font-style: italic;
        color: #e2e8f0;
        line-height: 1.6;
        max-width: 48rem;
        margin: 0 auto 2.5rem;
    }
    .slide-author {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }
    .slide-avatar {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        padding: 2px;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .slide-avatar span {
        width: 100%;
        height: 100%;
        border-radius: 50%;
        background: var(--brand-dark);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-family: var(--font-display);
        font-weight: 700;
        font-size: 1.25rem;
    }
    .slide-author-name {
        color: #fff;
        font-family: var(--font-display);
        font-weight: 700;
        font-size: 1.25rem;
    }
    .slide-author-role {
        color: var(--brand-cyan);
        font-size: 0.875rem;
        font-weight: 500;
        margin-top: 0.25rem;
    }
    .slider-dots {
        display: flex;
        justify-content: center;
        gap: 0.75rem;
        margin-top: 2rem;
    }
    .slider-dot {
        height: 0.375rem;
        width: 0.5rem;
        border: none;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
        transition: all 0.3s ease;
    }
    .slider-dot.active {
        width: 2rem;
        background: var(--brand-cyan);
    }
    @media (max-width: 768px) {
        .slider-panel { padding: 3rem 1.5rem; }
        .slide-quote { font-size: 1.15rem; }
    }
"#;
