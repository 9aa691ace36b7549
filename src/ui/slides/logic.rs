//! Logic slide: how a prompt flows through QUINN

use super::{card, centered, render_heading, SlideContext};
use crate::deck::content::{
    FlowStage, BRANCH_BLOCKED, BRANCH_FOUND, FLOW_STAGES, LOGIC_BADGES, LOGIC_SUBTITLE,
    LOGIC_TITLE_EMPHASIS, LOGIC_TITLE_LEAD,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let area = centered(area, 80);
    let body = render_heading(
        frame,
        area,
        vec![
            Span::raw(LOGIC_TITLE_LEAD),
            Span::styled(LOGIC_TITLE_EMPHASIS, Style::default().fg(DEFAULT_THEME.success)),
        ],
        LOGIC_SUBTITLE,
    );

    let mut constraints = vec![Constraint::Length(1); FLOW_STAGES.len() * 2];
    constraints.push(Constraint::Length(4)); // branches
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1)); // badges
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    let visible = ctx.stagger().visible_count(FLOW_STAGES.len(), ctx.now);
    for (i, stage) in FLOW_STAGES.iter().enumerate().take(visible) {
        frame.render_widget(stage_line(stage), rows[i * 2]);
        let connector = if i + 1 < FLOW_STAGES.len() { "│" } else { "┴" };
        frame.render_widget(
            Paragraph::new(connector)
                .style(Style::default().fg(DEFAULT_THEME.faint))
                .alignment(Alignment::Center),
            rows[i * 2 + 1],
        );
    }

    let branch_row = FLOW_STAGES.len() * 2;
    if visible == FLOW_STAGES.len() && ctx.after(1000) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Percentage(10),
                Constraint::Percentage(45),
            ])
            .split(rows[branch_row]);
        render_branch(frame, columns[0], BRANCH_FOUND, DEFAULT_THEME.success);
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), Line::from("OR")])
                .style(Style::default().fg(DEFAULT_THEME.muted))
                .alignment(Alignment::Center),
            columns[1],
        );
        render_branch(frame, columns[2], BRANCH_BLOCKED, DEFAULT_THEME.warning);
    }

    if ctx.after(1300) {
        let mut spans = Vec::new();
        for (i, badge) in LOGIC_BADGES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("   ·   ", Style::default().fg(DEFAULT_THEME.faint)));
            }
            spans.push(Span::styled(*badge, Style::default().fg(DEFAULT_THEME.muted)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            rows[branch_row + 2],
        );
    }
}

fn stage_line(stage: &FlowStage) -> Paragraph<'static> {
    let color = DEFAULT_THEME.accent(stage.accent);
    Paragraph::new(Line::from(vec![
        Span::styled("▌ ", Style::default().fg(color)),
        Span::styled(
            stage.label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", stage.detail), Style::default().fg(DEFAULT_THEME.muted)),
    ]))
    .alignment(Alignment::Center)
}

fn render_branch(frame: &mut Frame, area: Rect, (tag, action, detail): (&str, &str, &str), color: Color) {
    let lines = vec![
        Line::styled(
            action.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(detail.to_string(), Style::default().fg(DEFAULT_THEME.muted)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(card(tag, color))
            .alignment(Alignment::Center),
        area,
    );
}
