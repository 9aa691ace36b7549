//! Escalation slide: the escalate-and-recheck loop

use super::{card, centered, render_email, render_heading, SlideContext};
use crate::deck::content::{
    ESCALATION_CLOSING, ESCALATION_EMAIL, ESCALATION_KICKER, ESCALATION_LOOP,
    ESCALATION_LOOP_NOTE, ESCALATION_SEND_STEP, ESCALATION_SUBTITLE, ESCALATION_TITLE,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let area = centered(area, 120);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!("★ {} ★", ESCALATION_KICKER.to_uppercase()))
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.warning)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        rows[0],
    );
    let body = render_heading(
        frame,
        rows[1],
        vec![Span::styled(ESCALATION_TITLE, Style::default().fg(DEFAULT_THEME.warning))],
        ESCALATION_SUBTITLE,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(body);

    render_loop(frame, columns[0], ctx);
    if ctx.after(600) {
        render_email(frame, columns[1], &ESCALATION_EMAIL);
    }

    if ctx.after(1000) {
        frame.render_widget(
            Paragraph::new(ESCALATION_CLOSING)
                .style(Style::default().fg(DEFAULT_THEME.muted))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[2],
        );
    }
}

fn render_loop(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let visible = ctx.stagger().visible_count(ESCALATION_LOOP.len(), ctx.now);
    let last = ESCALATION_LOOP.len() - 1;

    let mut lines = Vec::new();
    for (i, step) in ESCALATION_LOOP.iter().enumerate().take(visible) {
        let color = if i == last {
            DEFAULT_THEME.success
        } else if i == ESCALATION_SEND_STEP {
            DEFAULT_THEME.warning
        } else {
            DEFAULT_THEME.heading
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>2}  ", i + 1), Style::default().fg(color)),
            Span::styled(step.label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::styled(
            format!("     {}", step.detail),
            Style::default().fg(DEFAULT_THEME.muted),
        ));
        if i < last {
            lines.push(Line::styled("      ↓", Style::default().fg(DEFAULT_THEME.faint)));
        }
    }
    if visible == ESCALATION_LOOP.len() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  ↻ {}", ESCALATION_LOOP_NOTE),
            Style::default()
                .fg(DEFAULT_THEME.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(card("Escalation Loop", DEFAULT_THEME.border_normal)),
        area,
    );
}
