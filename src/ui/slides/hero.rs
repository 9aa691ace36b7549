//! Hero slide: product name and the before/after calendars

use super::{card, centered, SlideContext};
use crate::deck::content::{
    CalendarEntry, EntryKind, CALENDAR_AFTER, CALENDAR_AFTER_CAPTION, CALENDAR_BEFORE,
    CALENDAR_BEFORE_CAPTION, HERO_FOOTER, HERO_TAGLINE_EMPHASIS, HERO_TAGLINE_LEAD, HERO_TITLE,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let area = centered(area, 90);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // title
            Constraint::Length(1), // underline
            Constraint::Length(1),
            Constraint::Length(1), // tagline
            Constraint::Length(2),
            Constraint::Length(10), // calendars
            Constraint::Length(1),
            Constraint::Length(1), // footer
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        spaced(HERO_TITLE),
        Style::default()
            .fg(DEFAULT_THEME.heading)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);
    frame.render_widget(
        Paragraph::new(Span::styled("────", Style::default().fg(DEFAULT_THEME.primary)))
            .alignment(Alignment::Center),
        rows[2],
    );

    if ctx.after(300) {
        let tagline = Paragraph::new(Line::from(vec![
            Span::styled(HERO_TAGLINE_LEAD, Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled(HERO_TAGLINE_EMPHASIS, Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(".", Style::default().fg(DEFAULT_THEME.muted)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, rows[4]);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(42),
            Constraint::Percentage(16),
            Constraint::Percentage(42),
        ])
        .split(rows[6]);

    if ctx.after(600) {
        render_calendar(frame, columns[0], CALENDAR_BEFORE, CALENDAR_BEFORE_CAPTION, false, ctx);

        let arrow = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(""),
            Line::styled("( ✦ )", Style::default().fg(DEFAULT_THEME.primary)),
            Line::styled(
                HERO_TITLE,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled("──▶", Style::default().fg(DEFAULT_THEME.primary)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(arrow, columns[1]);
    }

    if ctx.after(1000) {
        render_calendar(frame, columns[2], CALENDAR_AFTER, CALENDAR_AFTER_CAPTION, true, ctx);
    }

    if ctx.after(2000) {
        let footer = Paragraph::new(HERO_FOOTER)
            .style(Style::default().fg(DEFAULT_THEME.muted))
            .alignment(Alignment::Center);
        frame.render_widget(footer, rows[8]);
    }
}

fn render_calendar(
    frame: &mut Frame,
    area: Rect,
    entries: &[CalendarEntry],
    caption: &str,
    optimized: bool,
    ctx: &SlideContext,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let (border, title) = if optimized {
        (DEFAULT_THEME.primary, "Outlook Calendar · Optimized")
    } else {
        (DEFAULT_THEME.border_normal, "Outlook Calendar")
    };

    let visible = ctx.stagger().visible_count(entries.len(), ctx.now);
    let lines: Vec<Line> = entries
        .iter()
        .take(visible)
        .map(|entry| {
            let style = match entry.kind {
                EntryKind::Busy => Style::default().fg(DEFAULT_THEME.muted),
                EntryKind::Conflict => Style::default().fg(DEFAULT_THEME.danger),
                EntryKind::Unresolved => Style::default()
                    .fg(DEFAULT_THEME.danger)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
                EntryKind::Booked => Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            };
            let marker = match entry.kind {
                EntryKind::Booked => "✓ ",
                EntryKind::Unresolved => "! ",
                _ => "  ",
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:<6}", entry.time), style),
                Span::styled(entry.title, style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(card(title, border)), rows[0]);
    frame.render_widget(
        Paragraph::new(caption.to_string())
            .style(Style::default().fg(DEFAULT_THEME.muted))
            .alignment(Alignment::Center),
        rows[1],
    );
}

/// "QUINN" -> "Q U I N N"
fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
