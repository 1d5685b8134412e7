//! src/panels/info.rs
//!
//! Graph info panel: run state, rates and axis ceiling.

use std::sync::PoisonError;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::shared::SharedGraph;

/// Read-only info panel; `highlighted` marks the focused graph.
pub struct InfoPanel {
    pub shared: SharedGraph,
    pub highlighted: bool,
}

impl InfoPanel {
    pub fn new(shared: SharedGraph) -> Self {
        Self {
            shared,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

fn or_dash<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

fn field<'a>(name: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{name:<9}"), Style::default().fg(Color::Yellow)),
        Span::raw(value),
    ])
}

impl crate::ui::Panel for InfoPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.read().unwrap_or_else(PoisonError::into_inner);
        let hg = &g.graph;

        let state = if hg.is_running() {
            Span::styled("running", Style::default().fg(Color::Green))
        } else {
            Span::styled("stopped", Style::default().fg(Color::Red))
        };
        let rates = hg.rates();

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    g.name.clone(),
                    Style::default().fg(g.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  ({:?})  ", g.variant)),
                state,
            ]),
            field(
                "interval",
                format!("{:.0} ms", hg.config().sample_interval()),
            ),
            field("ticks", hg.ticks().to_string()),
            field("pending", hg.pending_hits().to_string()),
            field("peak", hg.history().max().to_string()),
            field("ceiling", or_dash(hg.max_axes_point())),
            field("hits/s", or_dash(rates.map(|r| r.hits_per_second))),
            field("frames/s", or_dash(rates.map(|r| r.frames_per_second))),
        ];

        let mut block = Block::default().title("Info").borders(Borders::ALL);
        if self.highlighted {
            block = block.border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
