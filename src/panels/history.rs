//! src/panels/history.rs
//!
//! History panel: the most recent interval counts of a graph, newest first.

use std::sync::PoisonError;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::shared::SharedGraph;

pub struct HistoryPanel {
    pub shared: SharedGraph,
}

impl HistoryPanel {
    pub fn new(shared: SharedGraph) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for HistoryPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.read().unwrap_or_else(PoisonError::into_inner);
        let history = g.graph.history();
        let peak = history.max();
        let rows = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = history
            .recent()
            .take(rows)
            .enumerate()
            .map(|(age, hits)| {
                let value = if age == 0 {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else if hits == peak && peak > 0 {
                    Style::default().fg(g.accent)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(format!("t-{age:<4}"), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{hits:>6}"), value),
                ])
            })
            .collect();

        let block = Block::default().title("History").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
