//! Wrap-around cursor over a fixed run of slides, plus the auto-advance timer
//! that drives it while the slider is on screen.

use gloo_timers::callback::Interval;

/// How long each testimonial stays up before the slider moves on.
pub const AUTO_ADVANCE_MS: u32 = 6_000;

/// A discrete move applied to the cursor. Timer ticks and user clicks both
/// funnel through this, so every mutation goes through one reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Prev,
    Select(usize),
}

/// Cyclic index over `len` slides. The active index always stays in
/// `0..len`; with `len == 0` the cursor is inert and every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn apply(&mut self, mv: Move) {
        match mv {
            Move::Next => self.next(),
            Move::Prev => self.prev(),
            Move::Select(i) => self.select(i),
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// Steps backward, wrapping from the first slide to the last. The
    /// `+ len` keeps the arithmetic in unsigned range before the modulus.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jumps straight to slide `i`. Callers are expected to pass an index in
    /// range (the pagination dots always do); an out-of-range index is a
    /// caller bug, clamped to the last slide rather than panicking.
    pub fn select(&mut self, i: usize) {
        if self.len == 0 {
            return;
        }
        self.active = i.min(self.len - 1);
    }
}

/// Owned handle for the periodic advance. At most one interval is ever armed:
/// starting again tears down the previous schedule first, and dropping the
/// handle (the slider unmounting) cancels whatever is running.
pub struct AutoAdvance {
    timer: Option<Interval>,
}

impl AutoAdvance {
    pub fn idle() -> Self {
        Self { timer: None }
    }

    pub fn start<F>(&mut self, interval_ms: u32, tick: F)
    where
        F: Fn() + 'static,
    {
        self.stop();
        self.timer = Some(Interval::new(interval_ms, tick));
    }

    /// Cancels the running schedule, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds_for_any_step_sequence() {
        for n in 1..=6 {
            let mut c = Carousel::new(n);
            for step in 0..100 {
                if step % 3 == 0 {
                    c.prev();
                } else {
                    c.next();
                }
                assert!(c.active_index() < n, "index escaped bounds at n={n}");
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = Carousel::new(5);
        c.select(2);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn prev_is_inverse_of_next() {
        let mut c = Carousel::new(4);
        c.select(1);
        c.next();
        c.prev();
        assert_eq!(c.active_index(), 1);
        c.prev();
        c.next();
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn prev_wraps_backward_from_zero() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn select_jumps_regardless_of_prior_state() {
        let mut c = Carousel::new(4);
        c.next();
        c.next();
        c.next();
        c.select(2);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn scripted_session_matches_expected_indices() {
        let mut c = Carousel::new(4);
        let script = [
            (Move::Next, 1),
            (Move::Next, 2),
            (Move::Prev, 1),
            (Move::Select(0), 0),
        ];
        for (mv, expected) in script {
            c.apply(mv);
            assert_eq!(c.active_index(), expected, "after {mv:?}");
        }
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.select(0);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn out_of_range_select_clamps_to_last() {
        let mut c = Carousel::new(4);
        c.select(9);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut c = Carousel::new(1);
        c.next();
        c.prev();
        assert_eq!(c.active_index(), 0);
    }
}
