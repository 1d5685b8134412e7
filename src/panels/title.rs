//! src/panels/title.rs
//!
//! Header line: application name and how many graphs are animating.

use std::sync::PoisonError;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::shared::SharedGraph;

pub struct TitlePanel {
    pub title: String,
    pub graphs: Vec<SharedGraph>,
}

impl TitlePanel {
    pub fn new(title: &str, graphs: Vec<SharedGraph>) -> Self {
        Self {
            title: title.to_string(),
            graphs,
        }
    }

    fn running(&self) -> usize {
        self.graphs
            .iter()
            .filter(|g| {
                g.read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .graph
                    .is_running()
            })
            .count()
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}/{} running", self.running(), self.graphs.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let p = Paragraph::new(line)
            .centered()
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
