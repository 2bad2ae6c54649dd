//! Millisecond clocks used to drive timed visual transitions.

use std::{cell::Cell, rc::Rc};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Source of the current time in milliseconds.
pub trait Clock {
    /// Returns the current time in milliseconds. Only differences between readings matter.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static CLOCK_ORIGIN: Instant = Instant::now();
}

/// Returns milliseconds since an arbitrary per-thread origin. Readings never decrease.
///
/// The browser build reads `performance.now()` and only falls back to `Date.now()` when the
/// window has no performance timeline; native builds use [`Instant`].
pub fn monotonic_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now)
            .max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        CLOCK_ORIGIN.with(|origin| origin.elapsed().as_millis() as u64)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Monotonic clock. Wall-clock adjustments never move it backwards.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        monotonic_ms_now()
    }
}

#[derive(Debug, Clone, Default)]
/// Manually advanced clock. Clones share the same time.
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Creates a clock starting at `start_ms`.
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }

    /// Sets the clock to an absolute reading.
    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_advance_together() {
        let clock = ManualClock::starting_at(1_000);
        let shared = clock.clone();
        clock.advance(250);
        assert_eq!(shared.now_ms(), 1_250);
        shared.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn system_clock_never_goes_backwards() {
        let mut last = SystemClock.now_ms();
        for _ in 0..1_000 {
            let now = SystemClock.now_ms();
            assert!(now >= last, "{now} < {last}");
            last = now;
        }
    }

    #[test]
    fn shared_clocks_read_through_the_pointer() {
        let manual = ManualClock::starting_at(42);
        let shared: Rc<dyn Clock> = Rc::new(manual.clone());
        manual.advance(8);
        assert_eq!(shared.now_ms(), 50);
    }
}
