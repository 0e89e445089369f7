//! Roller tab view

use super::{dice_spans, label_line, total_style};
use crate::app::{App, MAX_DICE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use roll_core::stats::format_modifier;
use roll_core::{DieType, RollMode};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_controls(f, app, chunks[0]);
    draw_last_roll(f, app, chunks[1]);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let die_spans: Vec<Span> = DieType::all()
        .iter()
        .flat_map(|die| {
            let style = if *die == app.die {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(die.to_string(), style), Span::raw(" ")]
        })
        .collect();

    let mode_spans: Vec<Span> = RollMode::all()
        .iter()
        .flat_map(|mode| {
            let style = if *mode == app.mode {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(mode.name(), style), Span::raw(" ")]
        })
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(
            "═══ Dice ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(die_spans),
        Line::from(""),
        label_line("Count", format!("{} (1-{})", app.count, MAX_DICE)),
        label_line("Modifier", format_modifier(app.modifier)),
        label_row(app),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Mode ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(mode_spans),
    ];

    if app.mode != RollMode::Normal && !app.die.supports_advantage() {
        lines.push(Line::from(Span::styled(
            "  Only applies to d20 rolls",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    match app.current_specification() {
        Ok(spec) => {
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Roll"), Style::default().fg(Color::Gray)),
                Span::styled(
                    spec.notation(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(label_line(
                "Range",
                format!("{} - {}", spec.min_total(), spec.max_total()),
            ));
            lines.push(label_line("Average", format!("{:.1}", spec.average())));
        }
        Err(e) => lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        ))),
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Roll "));
    f.render_widget(paragraph, area);
}

fn label_row(app: &App) -> Line<'static> {
    let value = match (&app.label_input, &app.label) {
        (Some(input), _) => Span::styled(
            format!("{}_", input),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
        ),
        (None, Some(label)) => Span::styled(label.clone(), Style::default().fg(Color::White)),
        (None, None) => Span::styled("(none)", Style::default().fg(Color::DarkGray)),
    };
    Line::from(vec![
        Span::styled(format!("{:20}", "Label"), Style::default().fg(Color::Gray)),
        value,
    ])
}

fn draw_last_roll(f: &mut Frame, app: &App, area: Rect) {
    let lines = match app.last_outcome() {
        Some(outcome) => {
            let mut lines = Vec::new();
            if let Some(label) = outcome.label() {
                lines.push(Line::from(Span::styled(
                    label.to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{:20}", "Total"), Style::default().fg(Color::Gray)),
                Span::styled(outcome.total().to_string(), total_style(outcome)),
            ]));
            lines.push(label_line("Notation", outcome.notation()));
            lines.push(label_line("Mode", outcome.mode().name().to_string()));

            let mut dice = vec![Span::styled(
                format!("{:20}", "Dice"),
                Style::default().fg(Color::Gray),
            )];
            dice.extend(dice_spans(outcome));
            lines.push(Line::from(dice));

            lines.push(label_line("Sum", outcome.sum().to_string()));
            if let Some(discarded) = outcome.discarded_sum() {
                lines.push(label_line("Discarded sum", discarded.to_string()));
            }

            if outcome.is_natural_max() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "NATURAL 20!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
            } else if outcome.is_natural_one() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Natural 1...",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "No rolls yet. Press Enter to roll.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Last Roll "));
    f.render_widget(paragraph, area);
}
