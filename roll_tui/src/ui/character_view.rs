//! Character tab view

use super::{label_line, progress_bar};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use roll_core::stats::{format_modifier, format_weight, MAX_LEVEL};
use roll_core::{Ability, EncumbranceLevel};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_sheet(f, app, chunks[0]);
    draw_quick_rolls(f, app, chunks[1]);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn draw_sheet(f: &mut Frame, app: &App, area: Rect) {
    let sheet = &app.character;
    let mut lines = vec![
        Line::from(Span::styled(
            sheet.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        label_line("Level", sheet.level.to_string()),
        label_line("Proficiency bonus", format_modifier(sheet.proficiency_bonus())),
        Line::from(""),
        section("Abilities"),
    ];

    for ability in Ability::all() {
        let save = if sheet.is_save_proficient(*ability) { " (save)" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:20}", ability.name()), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>3}", sheet.ability_scores.get(*ability)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {:>3}", format_modifier(sheet.ability_scores.modifier(*ability))),
                Style::default().fg(Color::Green),
            ),
            Span::styled(save, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("Experience"));
    if sheet.level >= MAX_LEVEL {
        lines.push(label_line("XP", format!("{} (max level)", sheet.experience)));
    } else {
        let next = sheet.next_level_xp();
        lines.push(Line::from(vec![
            Span::styled(format!("{:20}", "XP"), Style::default().fg(Color::Gray)),
            progress_bar(sheet.experience as f64, next as f64, 20, Color::Blue),
            Span::styled(
                format!(" {} / {}", sheet.experience, next),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(label_line("To next level", sheet.xp_remaining().to_string()));
    }
    let implied = sheet.level_from_experience();
    if implied != sheet.level {
        lines.push(Line::from(Span::styled(
            format!("  XP corresponds to level {}", implied),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section("Encumbrance"));
    let level = sheet.encumbrance();
    let color = match level {
        EncumbranceLevel::Normal => Color::Green,
        EncumbranceLevel::Encumbered => Color::Yellow,
        EncumbranceLevel::HeavilyEncumbered => Color::LightRed,
        EncumbranceLevel::OverCapacity => Color::Red,
    };
    let capacity = sheet.carrying_capacity();
    lines.push(Line::from(vec![
        Span::styled(format!("{:20}", "Carried"), Style::default().fg(Color::Gray)),
        progress_bar(sheet.carried_weight, capacity as f64, 20, color),
        Span::styled(
            format!(
                " {} / {}",
                format_weight(sheet.carried_weight),
                format_weight(capacity as f64)
            ),
            Style::default().fg(Color::White),
        ),
    ]));
    let speed = match level.speed_penalty() {
        Some(0) => "no penalty".to_string(),
        Some(feet) => format!("-{} ft speed", feet),
        None => "cannot move".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{:20}", "Status"), Style::default().fg(Color::Gray)),
        Span::styled(level.name(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" ({})", speed), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(label_line(
        "Thresholds",
        format!(
            "{} / {}",
            format_weight(sheet.encumbered_threshold() as f64),
            format_weight(sheet.heavily_encumbered_threshold() as f64)
        ),
    ));

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Character "));
    f.render_widget(paragraph, area);
}

fn draw_quick_rolls(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .quick_rolls
        .iter()
        .enumerate()
        .map(|(i, quick)| {
            let spec = quick.specification(&app.character);
            let selected = i == app.quick_roll_index;
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}{:24}", prefix, spec.label.as_deref().unwrap_or_default()),
                    style,
                ),
                Span::styled(
                    format_modifier(spec.modifier),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let title = format!(" Quick Rolls [{}] ", app.mode.name());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    let mut state = ListState::default();
    state.select(Some(app.quick_roll_index));
    f.render_stateful_widget(list, area, &mut state);
}
