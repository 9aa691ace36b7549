//! Header, tab bar, progress bar and status bar
//!
//! These frame every slide. The tab bar also records where it drew each
//! clickable element so mouse clicks can be mapped back to actions.

use crate::deck::Slide;
use crate::ui::keymap::Action;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Clickable regions of the tab bar from the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub prev: Rect,
    pub next: Rect,
    pub tabs: Vec<(Rect, usize)>,
}

impl HitRegions {
    /// Action for a click at (`column`, `row`), if it landed on a control
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        if self.prev.contains(pos) {
            return Some(Action::Prev);
        }
        if self.next.contains(pos) {
            return Some(Action::Next);
        }
        self.tabs
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, index)| Action::GoTo(index))
    }
}

/// Render the top bar: brand on the left, slide counter on the right
pub fn render_header(frame: &mut Frame, area: Rect, current: usize, total: usize) {
    let style = Style::default().bg(DEFAULT_THEME.bg);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        "  QUINN",
        Style::default()
            .fg(DEFAULT_THEME.heading)
            .add_modifier(Modifier::BOLD),
    ))
    .style(style);
    frame.render_widget(brand, halves[0]);

    let counter = Paragraph::new(Span::styled(
        format!("{} / {}  ", current + 1, total),
        Style::default().fg(DEFAULT_THEME.muted),
    ))
    .style(style)
    .alignment(Alignment::Right);
    frame.render_widget(counter, halves[1]);
}

/// Render `‹ [1 Hero] [2 Friction] ... ›` centred in `area`.
///
/// Returns where each control was drawn.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, slides: &[Slide], current: usize) -> HitRegions {
    let last = slides.len().saturating_sub(1);
    let arrow = |enabled: bool| {
        if enabled {
            Style::default().fg(DEFAULT_THEME.fg)
        } else {
            Style::default().fg(DEFAULT_THEME.faint)
        }
    };

    let tabs: Vec<Span> = slides
        .iter()
        .map(|slide| {
            let style = if slide.id == current {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .bg(DEFAULT_THEME.surface)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.muted)
            };
            Span::styled(format!(" {} {} ", slide.id + 1, slide.label), style)
        })
        .collect();
    let tabs_width: u16 = tabs.iter().map(|t| t.width() as u16 + 1).sum();
    // "‹ " + tabs + " ›"
    let total_width = tabs_width + 4;
    // same rounding as the centred paragraph below
    let start = area.x + (area.width / 2).saturating_sub(total_width / 2);

    let mut regions = HitRegions {
        prev: Rect::new(start, area.y, 2, 1).intersection(area),
        ..HitRegions::default()
    };

    let mut spans = vec![Span::styled("‹ ", arrow(current > 0))];
    let mut x = start + 2;
    for (slide, tab) in slides.iter().zip(tabs) {
        let width = tab.width() as u16;
        spans.push(tab);
        spans.push(Span::raw(" "));
        regions
            .tabs
            .push((Rect::new(x, area.y, width, 1).intersection(area), slide.id));
        x += width + 1;
    }
    spans.push(Span::styled(" ›", arrow(current < last)));
    regions.next = Rect::new(x, area.y, 2, 1).intersection(area);

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Center);
    frame.render_widget(bar, area);
    regions
}

/// Number of filled cells for the progress bar
pub fn progress_cells(width: u16, fraction: f64) -> u16 {
    let cells = (f64::from(width) * fraction.clamp(0.0, 1.0)).round() as u16;
    cells.min(width)
}

/// Render the deck progress as a thin full-width line
pub fn render_progress(frame: &mut Frame, area: Rect, fraction: f64) {
    let filled = progress_cells(area.width, fraction);
    let line = Line::from(vec![
        Span::styled(
            "━".repeat(filled as usize),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::styled(
            "─".repeat(area.width.saturating_sub(filled) as usize),
            Style::default().fg(DEFAULT_THEME.faint),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom: message on the left, keybinds on the right
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, on_prompt: bool, demo_active: bool) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Paragraph::new(Span::styled(
        format!(" {} ", message),
        Style::default().fg(DEFAULT_THEME.fg),
    ))
    .style(Style::default().bg(DEFAULT_THEME.surface))
    .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(DEFAULT_THEME.bg);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.surface)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.surface)
        .fg(DEFAULT_THEME.muted);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" slide ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" 1-6 ", key_style),
        Span::styled(" jump ", desc_style),
    ];
    if on_prompt {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(" ", desc_style));
        if demo_active {
            right_spans.push(Span::styled(" r ", key_style));
            right_spans.push(Span::styled(" reset demo ", desc_style));
        } else {
            right_spans.push(Span::styled(" ↵ ", key_style));
            right_spans.push(Span::styled(" live demo ", desc_style));
        }
    }
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(" ", desc_style));
    right_spans.push(Span::styled(" q ", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.surface))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
