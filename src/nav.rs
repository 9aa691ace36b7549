//! Slide navigation
//!
//! [`SlideController`] owns the current slide index and the direction of the
//! last move. Every operation is a synchronous state transition: requests are
//! applied one at a time in the order received, and requests that would
//! leave the deck (past either end, or an out-of-range jump) are ignored.
//!
//! ```text
//!        go_prev            go_next
//!   0  <---------  ...  --------->  n-1
//!        go_to(i) jumps directly to any valid i
//! ```

use crate::deck::{self, Slide};
use tracing::debug;

/// Direction of the most recent navigation; drives the transition only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

impl Direction {
    /// +1 forward, -1 backward, 0 when there was no move yet
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
            Direction::None => 0,
        }
    }
}

/// Logical navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub direction: Direction,
}

/// Tracks which slide is visible
#[derive(Debug, Clone)]
pub struct SlideController {
    slides: Vec<Slide>,
    state: NavigationState,
}

impl SlideController {
    /// Create a controller positioned on the first slide.
    ///
    /// Returns `None` if the deck is empty or its ids are not `0..len`.
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if !deck::is_well_formed(&slides) {
            return None;
        }
        Some(SlideController {
            slides,
            state: NavigationState::default(),
        })
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> &Slide {
        // current_index is kept in range by every mutation
        &self.slides[self.state.current_index]
    }

    pub fn is_first(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.state.current_index + 1 == self.slides.len()
    }

    /// Fraction of the deck shown so far, in `(0, 1]`
    pub fn progress_fraction(&self) -> f64 {
        (self.state.current_index + 1) as f64 / self.slides.len() as f64
    }

    /// Jump to `target`.
    ///
    /// Out-of-range targets are rejected and leave the state untouched, as
    /// does jumping to the slide that is already shown. Returns whether the
    /// slide changed.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.slides.len() {
            debug!(target, count = self.slides.len(), "go_to out of range, ignored");
            return false;
        }
        let from = self.state.current_index;
        if target == from {
            return false;
        }
        let direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(target, direction);
        true
    }

    /// Advance one slide; no-op on the last slide
    pub fn go_next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.move_to(self.state.current_index + 1, Direction::Forward);
        true
    }

    /// Go back one slide; no-op on the first slide
    pub fn go_prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.move_to(self.state.current_index - 1, Direction::Backward);
        true
    }

    fn move_to(&mut self, target: usize, direction: Direction) {
        debug!(
            from = self.state.current_index,
            to = target,
            ?direction,
            "slide changed"
        );
        self.state = NavigationState {
            current_index: target,
            direction,
        };
    }
}
