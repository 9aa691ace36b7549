//! # Introduction
//!
//! A terminal slide deck presenting QUINN, an AI scheduling assistant. Six
//! slides walk through the problem, a chat prompt with a scripted live demo,
//! the orchestration logic, the escalation loop and the expected impact.
//!
//! ## Layers
//!
//! ```text
//! Config → App ─┬─ SlideController (which slide)
//!               ├─ DemoSequencer   (live demo, run tokens)
//!               └─ slide renderers (ratatui)
//! ```
//!
//! 1. [`deck`]: the ordered slide list and all static mock content.
//! 2. [`nav`]: [`nav::SlideController`]: bounded next/prev/jump navigation.
//! 3. [`demo`]: [`demo::DemoSequencer`]: the timed step script whose
//!    in-flight continuations are invalidated by a reset.
//! 4. [`anim`]: pure timing helpers for transitions, reveals and bar fills.
//! 5. [`config`], [`logging`], [`error`]: runtime settings, file logging and
//!    the crate error type.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Everything time-dependent takes the current [`std::time::Instant`] as an
//! argument, so the state machines can be driven deterministically in tests.

pub mod anim;
pub mod config;
pub mod deck;
pub mod demo;
pub mod error;
pub mod logging;
pub mod nav;
pub mod ui;
