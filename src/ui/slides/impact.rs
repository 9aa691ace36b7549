//! Impact slide: headline metrics, benefits and before/after bars

use super::{card, centered, render_heading, SlideContext};
use crate::anim;
use crate::deck::content::{
    Comparison, BENEFITS, COMPARISONS, IMPACT_SUBTITLE, IMPACT_TAGLINE, IMPACT_TITLE_EMPHASIS,
    IMPACT_TITLE_LEAD, METRICS,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

pub fn render(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let area = centered(area, 110);
    let body = render_heading(
        frame,
        area,
        vec![
            Span::raw(IMPACT_TITLE_LEAD),
            Span::styled(IMPACT_TITLE_EMPHASIS, Style::default().fg(DEFAULT_THEME.success)),
        ],
        IMPACT_SUBTITLE,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(body);

    render_metrics(frame, rows[0], ctx);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(rows[2]);
    if ctx.after(800) {
        render_benefits(frame, columns[0], ctx);
        render_comparisons(frame, columns[1], ctx);
    }

    if ctx.after(2000) {
        frame.render_widget(
            Paragraph::new(IMPACT_TAGLINE)
                .style(
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            rows[4],
        );
    }
}

fn render_metrics(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let constraints = vec![Constraint::Ratio(1, METRICS.len() as u32); METRICS.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(1)
        .split(area);

    let visible = ctx.stagger().visible_count(METRICS.len(), ctx.now);
    for (metric, cell) in METRICS.iter().zip(cells.iter()).take(visible) {
        let color = DEFAULT_THEME.accent(metric.accent);
        let lines = vec![
            Line::styled(
                metric.value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                metric.label,
                Style::default()
                    .fg(DEFAULT_THEME.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(metric.detail, Style::default().fg(DEFAULT_THEME.muted)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(card("", color))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *cell,
        );
    }
}

fn render_benefits(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let visible = ctx.stagger().visible_count(BENEFITS.len(), ctx.now);
    let lines: Vec<Line> = BENEFITS
        .iter()
        .take(visible)
        .map(|benefit| {
            Line::from(vec![
                Span::styled(" ✔ ", Style::default().fg(DEFAULT_THEME.success)),
                Span::styled(*benefit, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(card("Key Benefits", DEFAULT_THEME.border_normal)),
        area,
    );
}

fn render_comparisons(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let block = card("Before vs. After", DEFAULT_THEME.border_normal);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // room for the tag column and the value after the bar
    let bar_width = inner.width.saturating_sub(20);
    let mut lines = Vec::new();
    for (i, comparison) in COMPARISONS.iter().enumerate() {
        let delay = ctx.timing.fill_delay + ctx.timing.stagger_step * (i as u32 * 2);
        lines.extend(comparison_lines(comparison, bar_width, delay, ctx));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn comparison_lines(
    comparison: &Comparison,
    bar_width: u16,
    delay: Duration,
    ctx: &SlideContext,
) -> Vec<Line<'static>> {
    let before = anim::fill(
        comparison.before.1,
        ctx.entered_at,
        delay,
        ctx.timing.fill,
        ctx.now,
    );
    let after = anim::fill(
        comparison.after.1,
        ctx.entered_at,
        delay + ctx.timing.fill / 4,
        ctx.timing.fill,
        ctx.now,
    );
    vec![
        Line::styled(comparison.label, Style::default().fg(DEFAULT_THEME.muted)),
        bar_line("Before", comparison.before.0, before, bar_width, DEFAULT_THEME.danger),
        bar_line("After", comparison.after.0, after, bar_width, DEFAULT_THEME.success),
    ]
}

/// Number of filled cells for `fraction` of `width`, at least one once non-zero
pub fn filled_cells(width: u16, fraction: f64) -> u16 {
    if fraction <= 0.0 || width == 0 {
        return 0;
    }
    let cells = (f64::from(width) * fraction.min(1.0)).round() as u16;
    cells.clamp(1, width)
}

fn bar_line(tag: &'static str, value: &'static str, fraction: f64, width: u16, color: Color) -> Line<'static> {
    let filled = filled_cells(width, fraction);
    Line::from(vec![
        Span::styled(format!("{:<7}", tag), Style::default().fg(color)),
        Span::styled("█".repeat(filled as usize), Style::default().fg(color)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled) as usize),
            Style::default().fg(DEFAULT_THEME.faint),
        ),
        Span::styled(format!(" {}", value), Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells_shows_small_values() {
        assert_eq!(filled_cells(40, 0.0), 0);
        assert_eq!(filled_cells(40, 0.01), 1);
        assert_eq!(filled_cells(40, 0.5), 20);
        assert_eq!(filled_cells(40, 1.5), 40);
        assert_eq!(filled_cells(0, 0.9), 0);
    }
}
