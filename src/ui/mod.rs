//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state and the event loop: keys, clicks, demo ticks
//! - **[`chrome`]**: header, tab bar, progress bar and status bar around every slide
//! - **[`slides`]**: stateless render functions, one per slide
//! - **[`theme`]**: centralized color palette
//!
//! [`keymap`] maps key codes to [`keymap::Action`]s. The entry point for
//! consumers is [`App`]: construct it from a [`Config`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod chrome;
pub mod keymap;
pub mod slides;
pub mod theme;

pub use app::App;
