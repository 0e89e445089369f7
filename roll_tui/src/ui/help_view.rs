//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        heading("═══ Navigation ═══"),
        key_line("1-4", "Jump to tab (Roller/History/Character/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Show help"),
        Line::from(""),
        heading("═══ Roller ═══"),
        key_line("←/h  →/l", "Previous/next die"),
        key_line("↑/↓", "Add/remove a die (1-20)"),
        key_line("+ / -", "Adjust modifier"),
        key_line("m", "Cycle Normal/Advantage/Disadvantage"),
        key_line("n", "Edit roll label (Enter keeps, Esc cancels)"),
        key_line("Enter / Space", "Roll"),
        Line::from(""),
        heading("═══ History & Character ═══"),
        key_line("c", "Clear roll history"),
        key_line("Enter / Space", "Roll selected check, save or skill"),
        Line::from(""),
        heading("═══ Rules ═══"),
        Line::from(""),
        Line::from(Span::styled(
            "Advantage / Disadvantage:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  d20 only: roll the dice twice, keep the higher (lower) set"),
        Line::from("  Ties keep the first set; other dice ignore the mode"),
        Line::from(""),
        Line::from(Span::styled("Ability modifier:", Style::default().fg(Color::Yellow))),
        Line::from("  floor((score - 10) / 2)"),
        Line::from(""),
        Line::from(Span::styled("Skill bonus:", Style::default().fg(Color::Yellow))),
        Line::from("  modifier + proficiency × (0 none, 1 proficient, 2 expertise)"),
        Line::from(""),
        Line::from(Span::styled("Encumbrance:", Style::default().fg(Color::Yellow))),
        Line::from("  Over STR × 5: -10 ft  │  over STR × 10: -20 ft"),
        Line::from("  Over STR × 15: cannot move"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Rules "));

    f.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
