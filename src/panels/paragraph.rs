//! src/panels/paragraph.rs
//!
//! Static text panel used for help and footer lines.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
    pub alignment: Alignment,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: title.to_string(),
            alignment: Alignment::Left,
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }
}

impl crate::ui::Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut block = Block::default().borders(Borders::ALL);
        if !self.title.is_empty() {
            block = block.title(self.title.as_str());
        }
        let p = Paragraph::new(self.text.as_str())
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(p, area);
    }
}
