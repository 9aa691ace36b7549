//! Slide renderers
//!
//! Each slide module exports a single `render` function matching
//! [`SlideRenderer`]. Renderers are stateless: everything that changes over
//! time (the typed prompt, the demo cursor, staggered reveals) is read from
//! the [`SlideContext`] built by the app for every frame.
//!
//! - [`hero`]: product name and the before/after calendar mockups
//! - [`friction`]: inbox ping-pong and hidden blockers
//! - [`prompt`]: chat mockup, live demo steps and the escalation email
//! - [`logic`]: the orchestration flow
//! - [`escalation`]: the escalation loop and a static email preview
//! - [`impact`]: metrics, benefits and before/after bars

pub mod escalation;
pub mod friction;
pub mod hero;
pub mod impact;
pub mod logic;
pub mod prompt;

use crate::anim::{Stagger, Timing};
use crate::demo::{DemoSequencer, Typewriter};
use crate::deck::content::EmailPreview;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Read-only view of everything a slide may draw from
pub struct SlideContext<'a> {
    pub now: Instant,
    /// When the current slide was entered; staggered reveals count from here
    pub entered_at: Instant,
    pub timing: &'a Timing,
    pub demo: &'a DemoSequencer,
    pub typewriter: &'a Typewriter,
}

impl SlideContext<'_> {
    pub fn stagger(&self) -> Stagger {
        self.timing.stagger(self.entered_at)
    }

    /// Whether something scheduled `delay_ms` after entry is on screen yet
    pub fn after(&self, delay_ms: u64) -> bool {
        if self.timing.stagger_step.is_zero() {
            return true;
        }
        self.now >= self.entered_at + std::time::Duration::from_millis(delay_ms)
    }
}

/// Draws one slide into the body area
pub type SlideRenderer = fn(&mut Frame, Rect, &SlideContext);

/// A horizontally centred column at most `max_width` wide
pub(crate) fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw a centred title and subtitle; returns the area below them
pub(crate) fn render_heading(frame: &mut Frame, area: Rect, title: Vec<Span<'static>>, subtitle: &str) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(title))
        .style(
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let subtitle = Paragraph::new(subtitle.to_string())
        .style(Style::default().fg(DEFAULT_THEME.muted))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[2]);

    rows[4]
}

/// Rounded card with an optional title
pub(crate) fn card(title: &str, border: ratatui::style::Color) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(DEFAULT_THEME.surface));
    if title.is_empty() {
        block
    } else {
        block.title(format!(" {} ", title))
    }
}

/// Outlook-style email window, used by the demo artifact and the escalation slide
pub(crate) fn render_email(frame: &mut Frame, area: Rect, email: &EmailPreview) {
    let label = Style::default().fg(DEFAULT_THEME.muted);
    let value = Style::default().fg(DEFAULT_THEME.ink);

    let mut lines = vec![
        Line::from(vec![Span::styled("From:    ", label), Span::styled(email.from, value)]),
        Line::from(vec![Span::styled("To:      ", label), Span::styled(email.to, value)]),
        Line::from(vec![
            Span::styled("Subject: ", label),
            Span::styled(
                email.subject_tag,
                Style::default()
                    .fg(DEFAULT_THEME.danger)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", email.subject),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::styled(email.body, value),
        Line::from(""),
        Line::styled(
            "SUGGESTED SLOTS",
            Style::default()
                .fg(DEFAULT_THEME.outlook)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    for slot in email.slots {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(DEFAULT_THEME.outlook)),
            Span::styled(*slot, Style::default().fg(DEFAULT_THEME.outlook)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("  {}  ", email.action),
            Style::default()
                .bg(DEFAULT_THEME.outlook)
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DEFAULT_THEME.outlook))
        .title(Span::styled(
            format!(" ✉ {} ", email.window_title),
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .bg(DEFAULT_THEME.outlook),
        ))
        .style(Style::default().bg(DEFAULT_THEME.paper));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
