//! Prompt slide: chat mockup, live demo and the generated escalation email
//!
//! The prompt types itself out on entry. Once typing is done the demo can be
//! started; each script step is drawn as pending, active or done relative to
//! the sequencer cursor, and the email preview appears once the sequencer
//! reveals its artifact.

use super::{card, centered, render_email, render_heading, SlideContext};
use crate::demo::{DemoStep, Phase, StepTone};
use crate::deck::content::{
    ESCALATION_EMAIL, HERO_TITLE, PROMPT_PLACEHOLDER, PROMPT_SUBTITLE, PROMPT_TITLE,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// How a script step relates to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

pub fn step_status(index: usize, cursor: Option<usize>) -> StepStatus {
    match cursor {
        Some(c) if index < c => StepStatus::Done,
        Some(c) if index == c => StepStatus::Active,
        _ => StepStatus::Pending,
    }
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let area = centered(area, 100);
    let body = render_heading(frame, area, vec![Span::raw(PROMPT_TITLE)], PROMPT_SUBTITLE);

    let state = ctx.demo.state();
    let step_rows = if state.active {
        ctx.demo.script().len() as u16 + 2
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),         // chat
            Constraint::Length(1),         // demo button
            Constraint::Length(step_rows), // steps
            Constraint::Min(0),            // email
        ])
        .split(body);

    render_chat(frame, rows[0], ctx);
    render_demo_button(frame, rows[1], ctx);

    if state.active {
        render_steps(frame, rows[2], ctx);
    }
    if state.artifact_revealed {
        render_email(frame, rows[3], &ESCALATION_EMAIL);
    }
}

fn render_chat(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let typing = ctx.typewriter.is_typing(ctx.now);
    let mut message = vec![
        Span::styled("(V) ", Style::default().fg(DEFAULT_THEME.muted)),
        Span::styled(
            ctx.typewriter.visible(ctx.now),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ];
    if typing {
        message.push(Span::styled(
            "▏",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let send_style = if typing {
        Style::default().fg(DEFAULT_THEME.faint)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };

    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {:<60}", PROMPT_PLACEHOLDER),
                Style::default().fg(DEFAULT_THEME.muted),
            ),
            Span::styled("⎘  ⚙  ", Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled("➤", send_style),
        ]),
    ];

    let title = format!("◆ {} · Scheduling Assistant", HERO_TITLE);
    let paragraph = Paragraph::new(lines)
        .block(card(&title, DEFAULT_THEME.border_normal))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_demo_button(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    if ctx.typewriter.is_typing(ctx.now) {
        return;
    }
    let button = match ctx.demo.phase() {
        Phase::Idle => Span::styled(
            " ▶ Live Demo  [Enter] ",
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(DEFAULT_THEME.bg)
                .add_modifier(Modifier::BOLD),
        ),
        Phase::Running | Phase::Finished => Span::styled(
            " Reset  [r] ",
            Style::default()
                .bg(DEFAULT_THEME.faint)
                .fg(DEFAULT_THEME.heading),
        ),
    };
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), area);
}

fn render_steps(frame: &mut Frame, area: Rect, ctx: &SlideContext) {
    let cursor = ctx.demo.state().cursor;
    let spinner = spinner_frame(ctx);
    let lines: Vec<Line> = ctx
        .demo
        .script()
        .iter()
        .enumerate()
        .map(|(i, step)| step_line(step, step_status(i, cursor), spinner))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(card("", DEFAULT_THEME.border_normal)),
        area,
    );
}

fn step_line(step: &DemoStep, status: StepStatus, spinner: &'static str) -> Line<'static> {
    let reached = status != StepStatus::Pending;
    let tone_color = match step.tone {
        StepTone::Failure if reached => Some(DEFAULT_THEME.danger),
        StepTone::Success if reached => Some(DEFAULT_THEME.primary),
        _ => None,
    };

    let icon = match (status, step.tone) {
        (StepStatus::Active, StepTone::Progress) => spinner,
        (StepStatus::Done, _) => "✔",
        (_, StepTone::Failure) => "✖",
        (_, StepTone::Success) => "✔",
        _ => "○",
    };
    let icon_color = tone_color.unwrap_or(match status {
        StepStatus::Done => DEFAULT_THEME.primary,
        StepStatus::Active => DEFAULT_THEME.info,
        StepStatus::Pending => DEFAULT_THEME.faint,
    });
    let label_color = tone_color.unwrap_or(if reached {
        DEFAULT_THEME.fg
    } else {
        DEFAULT_THEME.faint
    });

    let mut label = Style::default().fg(label_color);
    if status == StepStatus::Active {
        label = label.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(icon_color)),
        Span::styled(step.label, label),
    ])
}

fn spinner_frame(ctx: &SlideContext) -> &'static str {
    let elapsed = ctx.now.saturating_duration_since(ctx.entered_at).as_millis();
    SPINNER[(elapsed / 120) as usize % SPINNER.len()]
}
