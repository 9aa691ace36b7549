//! Main TUI application state and logic

use crate::anim::{Timing, Transition};
use crate::config::Config;
use crate::deck::{self, content::PROMPT_TEXT, PROMPT_SLIDE};
use crate::demo::{default_script, DemoSequencer, Phase, SequencerEvent, Typewriter};
use crate::error::{DeckError, Result};
use crate::nav::SlideController;
use crate::ui::chrome::{self, HitRegions};
use crate::ui::keymap::{Action, Keymap};
use crate::ui::slides::SlideContext;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The main application state
pub struct App {
    /// Which slide is shown
    pub nav: SlideController,

    /// The live demo on the Prompt slide
    pub demo: DemoSequencer,

    /// Typing effect for the chat prompt
    pub typewriter: Typewriter,

    pub keymap: Keymap,
    pub timing: Timing,

    /// Event loop poll interval
    pub tick_rate: Duration,

    /// Slide-in animation of the last navigation
    pub transition: Option<Transition>,

    /// When the current slide was entered
    pub entered_at: Instant,

    /// Clickable tab bar regions from the last frame
    pub hit_regions: HitRegions,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create the app on the configured start slide
    pub fn new(config: &Config, now: Instant) -> Result<Self> {
        let mut nav = SlideController::new(deck::slides())
            .ok_or_else(|| DeckError::InvalidConfig("slide deck is malformed".to_string()))?;
        config.validate(nav.slide_count())?;
        nav.go_to(config.start_index());

        let timing = config.timing();
        let demo = DemoSequencer::with_grace(default_script(), config.grace()).scaled(config.demo.speed);
        let keymap = Keymap::for_deck(nav.slide_count());

        Ok(App {
            nav,
            demo,
            typewriter: Typewriter::new(PROMPT_TEXT, timing.type_interval, now),
            keymap,
            timing,
            tick_rate: config.tick_rate(),
            // the opening slide does not slide in
            transition: None,
            entered_at: now,
            hit_regions: HitRegions::default(),
            should_quit: false,
            status_message: String::from("Ready"),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|f| self.render(f, now))?;

            if self.should_quit {
                break;
            }

            // Wake up early if a demo step is due before the next tick
            let timeout = self
                .demo
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .map_or(self.tick_rate, |wait| wait.min(self.tick_rate));

            if event::poll(timeout)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key, now),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
                    _ => {}
                }
            }
        }

        info!("quitting");
        Ok(())
    }

    /// Advance the demo to `now` and report what happened in the status bar
    pub fn tick(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_done(now)) {
            self.transition = None;
        }
        for event in self.demo.tick(now) {
            self.status_message = match event {
                SequencerEvent::StepEntered(i) => {
                    let total = self.demo.script().len();
                    format!("Demo step {}/{}", i + 1, total)
                }
                SequencerEvent::ArtifactRevealed => "Escalation email ready".to_string(),
            };
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let size = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(DEFAULT_THEME.bg)), size);

        // header | slide body | tab bar | progress | status
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let current = self.nav.current_index();
        chrome::render_header(frame, chunks[0], current, self.nav.slide_count());

        let offset = self
            .transition
            .map_or(0, |t| t.offset(chunks[1].width, now));
        let body = shifted(chunks[1], offset);
        let ctx = SlideContext {
            now,
            entered_at: self.entered_at,
            timing: &self.timing,
            demo: &self.demo,
            typewriter: &self.typewriter,
        };
        (self.nav.current_slide().renderer)(frame, body, &ctx);

        self.hit_regions = chrome::render_tab_bar(frame, chunks[2], self.nav.slides(), current);
        chrome::render_progress(frame, chunks[3], self.nav.progress_fraction());
        chrome::render_status_bar(
            frame,
            chunks[4],
            &self.status_message,
            current == PROMPT_SLIDE,
            self.demo.state().active,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Only presses; repeats and releases would double-step on some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = self.keymap.action(key.code) {
            self.apply(action, now);
        }
    }

    /// Handle mouse events: left clicks on the tab bar
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) = self.hit_regions.hit(mouse.column, mouse.row) {
            self.apply(action, now);
        }
    }

    /// Perform `action`; invalid requests are ignored
    pub fn apply(&mut self, action: Action, now: Instant) {
        debug!(?action, "action");
        let from = self.nav.current_index();
        let moved = match action {
            Action::Next => self.nav.go_next(),
            Action::Prev => self.nav.go_prev(),
            Action::First => self.nav.go_to(0),
            Action::Last => self.nav.go_to(self.nav.slide_count() - 1),
            Action::GoTo(index) => self.nav.go_to(index),
            Action::StartDemo => {
                self.start_demo(now);
                false
            }
            Action::ResetDemo => {
                if self.demo.state().active {
                    self.demo.reset();
                    self.status_message = "Demo reset".to_string();
                }
                false
            }
            Action::Quit => {
                self.should_quit = true;
                false
            }
        };
        if moved {
            self.on_slide_changed(from, now);
        }
    }

    fn start_demo(&mut self, now: Instant) {
        if self.nav.current_index() != PROMPT_SLIDE {
            return;
        }
        if self.typewriter.is_typing(now) {
            self.status_message = "Wait for the prompt to finish typing".to_string();
            return;
        }
        if self.demo.phase() != Phase::Idle {
            return;
        }
        if self.demo.start(now) {
            self.status_message = "Running live demo...".to_string();
            // enter the first step right away instead of on the next poll
            self.tick(now);
        }
    }

    fn on_slide_changed(&mut self, from: usize, now: Instant) {
        let to = self.nav.current_index();
        self.transition = Some(Transition::new(self.nav.direction(), now, self.timing.transition));
        self.entered_at = now;
        self.status_message = format!("{} ({}/{})", self.nav.current_slide().label, to + 1, self.nav.slide_count());

        // The demo belongs to the Prompt slide: leaving tears it down and
        // coming back types the prompt again.
        if from == PROMPT_SLIDE {
            self.demo.reset();
        }
        if to == PROMPT_SLIDE {
            self.typewriter.restart(now);
        }
    }
}

/// Move `area` horizontally by `offset` cells, clipping what leaves it
fn shifted(area: Rect, offset: i32) -> Rect {
    let shift = offset.unsigned_abs().min(u32::from(area.width)) as u16;
    if offset > 0 {
        Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        }
    } else if offset < 0 {
        Rect {
            width: area.width - shift,
            ..area
        }
    } else {
        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_clips_inside_area() {
        let area = Rect::new(0, 1, 80, 20);
        assert_eq!(shifted(area, 0), area);
        assert_eq!(shifted(area, 10), Rect::new(10, 1, 70, 20));
        assert_eq!(shifted(area, -10), Rect::new(0, 1, 70, 20));
        assert_eq!(shifted(area, 500), Rect::new(80, 1, 0, 20));
    }
}
