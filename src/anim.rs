//! Time-based animation helpers
//!
//! Everything here is a pure function of a start instant and `now`, so the
//! renderers can be driven from the event loop without any animation state
//! of their own.

use crate::nav::Direction;
use std::time::{Duration, Instant};

/// Animation timings, all zero when animations are disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub transition: Duration,
    pub stagger_base: Duration,
    pub stagger_step: Duration,
    pub fill_delay: Duration,
    pub fill: Duration,
    pub type_interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            transition: Duration::from_millis(250),
            stagger_base: Duration::from_millis(300),
            stagger_step: Duration::from_millis(150),
            fill_delay: Duration::from_millis(1200),
            fill: Duration::from_millis(800),
            type_interval: crate::demo::typewriter::TYPE_INTERVAL,
        }
    }
}

impl Timing {
    pub fn disabled() -> Self {
        Timing {
            transition: Duration::ZERO,
            stagger_base: Duration::ZERO,
            stagger_step: Duration::ZERO,
            fill_delay: Duration::ZERO,
            fill: Duration::ZERO,
            type_interval: Duration::ZERO,
        }
    }

    pub fn stagger(&self, started: Instant) -> Stagger {
        Stagger {
            started,
            base: self.stagger_base,
            step: self.stagger_step,
        }
    }
}

/// Cubic ease-out on `t` in `[0, 1]`
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress of `now` through `[start, start + duration]`, in `[0, 1]`
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Slide-in of the body after a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub direction: Direction,
    pub started: Instant,
    pub duration: Duration,
}

impl Transition {
    pub fn new(direction: Direction, started: Instant, duration: Duration) -> Self {
        Transition {
            direction,
            started,
            duration,
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        progress(self.started, self.duration, now) >= 1.0
    }

    /// Horizontal offset in cells for a body `width` cells wide.
    ///
    /// Positive values push the content right (entering from the right on a
    /// forward move), negative values push it left. Starts at a quarter of
    /// the width and eases out to zero.
    pub fn offset(&self, width: u16, now: Instant) -> i32 {
        let remaining = 1.0 - ease_out(progress(self.started, self.duration, now));
        let travel = f64::from(width) / 4.0;
        (remaining * travel).round() as i32 * self.direction.sign()
    }
}

/// Staggered reveal: item `i` appears `base + i * step` after `started`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub started: Instant,
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    pub fn reveal_at(&self, index: usize) -> Instant {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.started + self.base + self.step * index
    }

    pub fn is_visible(&self, index: usize, now: Instant) -> bool {
        now >= self.reveal_at(index)
    }

    /// How many of the first `total` items are visible at `now`
    pub fn visible_count(&self, total: usize, now: Instant) -> usize {
        (0..total).take_while(|&i| self.is_visible(i, now)).count()
    }
}

/// Fraction of `target` a bar shows at `now`, growing over `duration`
/// after waiting `delay`
pub fn fill(target: f64, started: Instant, delay: Duration, duration: Duration, now: Instant) -> f64 {
    let t = progress(started + delay, duration, now);
    if now < started + delay {
        return 0.0;
    }
    target * ease_out(t)
}
