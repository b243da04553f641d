//! Browser-side coverage for the auto-advance timer lifecycle. Runs under
//! `wasm-pack test` / `wasm-bindgen-test-runner`; compiles to nothing on
//! native targets.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use forzeo_web::carousel::{AutoAdvance, Carousel, Move};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn tick_advances_cursor_by_one_step() {
    let state = Rc::new(Cell::new(Carousel::new(4)));
    let mut auto = AutoAdvance::idle();
    {
        let state = state.clone();
        auto.start(50, move || {
            let mut c = state.get();
            c.apply(Move::Next);
            state.set(c);
        });
    }
    // One period elapses, the second has not yet fired
    TimeoutFuture::new(75).await;
    auto.stop();
    assert_eq!(state.get().active_index(), 1);
}

#[wasm_bindgen_test]
async fn restarting_keeps_exactly_one_timer() {
    let ticks = Rc::new(Cell::new(0u32));
    let mut auto = AutoAdvance::idle();
    for _ in 0..2 {
        let ticks = ticks.clone();
        auto.start(50, move || ticks.set(ticks.get() + 1));
    }
    TimeoutFuture::new(75).await;
    auto.stop();
    // A leaked first interval would have fired too
    assert_eq!(ticks.get(), 1);
}

#[wasm_bindgen_test]
async fn stop_halts_advancement() {
    let ticks = Rc::new(Cell::new(0u32));
    let mut auto = AutoAdvance::idle();
    {
        let ticks = ticks.clone();
        auto.start(30, move || ticks.set(ticks.get() + 1));
    }
    auto.stop();
    auto.stop(); // idempotent
    assert!(!auto.is_running());
    TimeoutFuture::new(100).await;
    assert_eq!(ticks.get(), 0);
}

#[wasm_bindgen_test]
async fn dropping_the_handle_cancels_the_timer() {
    let ticks = Rc::new(Cell::new(0u32));
    {
        let ticks = ticks.clone();
        let mut auto = AutoAdvance::idle();
        auto.start(30, move || ticks.set(ticks.get() + 1));
    }
    TimeoutFuture::new(100).await;
    assert_eq!(ticks.get(), 0);
}
