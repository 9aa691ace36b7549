//! Friction slide: the reply-all spiral and hidden calendar blockers

use super::{card, centered, render_heading, SlideContext};
use crate::deck::content::{
    ADMIN_SHARE_NOTE, FRICTION_SUBTITLE, FRICTION_TITLE, HIDDEN_BLOCKERS, INBOX, INBOX_FOOTER,
    INBOX_UNREAD, TIME_WASTED_CAPTION, TIME_WASTED_HOURS,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let area = centered(area, 110);
    let body = render_heading(
        frame,
        area,
        vec![Span::raw("⚠ "), Span::raw(FRICTION_TITLE)],
        FRICTION_SUBTITLE,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .spacing(2)
        .split(body);

    if ctx.after(300) {
        render_inbox(frame, columns[0], ctx);
    }
    if ctx.after(500) {
        render_sidebar(frame, columns[1], ctx);
    }
}

fn render_inbox(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let visible = ctx.stagger().visible_count(INBOX.len(), ctx.now);

    let mut lines = Vec::new();
    for email in INBOX.iter().take(visible) {
        lines.push(Line::from(vec![
            Span::styled(
                email.from,
                Style::default()
                    .fg(DEFAULT_THEME.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", email.time), Style::default().fg(DEFAULT_THEME.muted)),
        ]));
        lines.push(Line::styled(email.subject, Style::default().fg(DEFAULT_THEME.fg)));
        lines.push(Line::styled(email.preview, Style::default().fg(DEFAULT_THEME.muted)));
        lines.push(Line::from(""));
    }
    if visible == INBOX.len() {
        lines.push(Line::styled(
            format!("✉ {}", INBOX_FOOTER),
            Style::default().fg(DEFAULT_THEME.danger),
        ));
    }

    let block = card(&format!("Inbox · {}", INBOX_UNREAD), DEFAULT_THEME.border_normal);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let wasted = vec![
        Line::from(vec![
            Span::styled(
                TIME_WASTED_HOURS,
                Style::default()
                    .fg(DEFAULT_THEME.danger)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", TIME_WASTED_CAPTION), Style::default().fg(DEFAULT_THEME.muted)),
        ]),
        Line::from(""),
        Line::styled(ADMIN_SHARE_NOTE, Style::default().fg(DEFAULT_THEME.muted)),
    ];
    frame.render_widget(
        Paragraph::new(wasted)
            .block(card("Time Wasted", DEFAULT_THEME.danger))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let visible = ctx.stagger().visible_count(HIDDEN_BLOCKERS.len(), ctx.now);
    let mut blockers = Vec::new();
    for blocker in HIDDEN_BLOCKERS.iter().take(visible) {
        blockers.push(Line::from(vec![
            Span::styled("◌ ", Style::default().fg(DEFAULT_THEME.warning)),
            Span::styled(
                blocker.person,
                Style::default()
                    .fg(DEFAULT_THEME.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        blockers.push(Line::styled(
            format!("  {}", blocker.reason),
            Style::default().fg(DEFAULT_THEME.muted),
        ));
    }
    frame.render_widget(
        Paragraph::new(blockers)
            .block(card("Hidden Unavailability", DEFAULT_THEME.warning))
            .wrap(Wrap { trim: false }),
        rows[1],
    );
}
