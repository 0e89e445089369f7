//! History tab view

use super::{dice_spans, total_style};
use crate::app::App;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let history = app.engine.history();
    let now = Utc::now();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No rolls yet.",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        history
            .iter()
            .skip(app.history_scroll)
            .map(|outcome| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:>10} ", outcome.age_label(now)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:>4}", outcome.total()),
                        total_style(outcome),
                    ),
                    Span::styled(
                        format!("  {:10} ", outcome.notation()),
                        Style::default().fg(Color::White),
                    ),
                ];
                if let Some(label) = outcome.label() {
                    spans.push(Span::styled(
                        format!("{} ", label),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                spans.extend(dice_spans(outcome));
                if outcome.discarded_sum().is_some() {
                    spans.push(Span::styled(
                        format!(" ({})", outcome.mode().name()),
                        Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let title = format!(
        " History ({}/{}) ",
        history.len(),
        history.capacity()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}
