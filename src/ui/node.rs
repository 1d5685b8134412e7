//! src/ui/node.rs
//!
//! Screen layout as a tree of splits with panels at the leaves, rebuilt and
//! drawn every frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Anything that can draw itself into a rectangle of the frame.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

pub enum Node {
    /// Children laid out along `direction`, each sized by its constraint.
    Split {
        direction: Direction,
        parts: Vec<(Constraint, Node)>,
    },
    Leaf(Box<dyn Panel>),
}

impl Node {
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split { direction, parts } => {
                let areas = Layout::default()
                    .direction(*direction)
                    .constraints(parts.iter().map(|(c, _)| *c))
                    .split(area);
                for ((_, child), child_area) in parts.iter().zip(areas.iter()) {
                    child.draw(f, *child_area);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

/// Stack children top to bottom.
pub fn rows(parts: Vec<(Constraint, Node)>) -> Node {
    Node::Split {
        direction: Direction::Vertical,
        parts,
    }
}

/// Place children left to right.
pub fn columns(parts: Vec<(Constraint, Node)>) -> Node {
    Node::Split {
        direction: Direction::Horizontal,
        parts,
    }
}

pub fn leaf(panel: impl Panel + 'static) -> Node {
    Node::Leaf(Box::new(panel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::{Arc, Mutex};

    struct AreaRecorder(Arc<Mutex<Vec<Rect>>>);

    impl Panel for AreaRecorder {
        fn draw(&self, _f: &mut Frame<'_>, area: Rect) {
            self.0.lock().unwrap().push(area);
        }
    }

    #[test]
    fn splits_area_between_children() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let root = rows(vec![
            (Constraint::Length(3), leaf(AreaRecorder(seen.clone()))),
            (
                Constraint::Min(0),
                columns(vec![
                    (Constraint::Percentage(50), leaf(AreaRecorder(seen.clone()))),
                    (Constraint::Percentage(50), leaf(AreaRecorder(seen.clone()))),
                ]),
            ),
        ]);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| {
            let area = f.area();
            root.draw(f, area)
        }).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                Rect::new(0, 0, 40, 3),
                Rect::new(0, 3, 20, 7),
                Rect::new(20, 3, 20, 7),
            ]
        );
    }
}
