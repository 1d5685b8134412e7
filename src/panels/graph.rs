//! src/panels/graph.rs
//!
//! Graph panel: shows the background and history layers of a graph in the
//! terminal.
//!
//! Each terminal cell covers a block of surface pixels and shows two of
//! them stacked with half-block glyphs. History pixels win over background
//! pixels. Axis labels are placed in whole cells on top.

use std::ops::Range;
use std::sync::PoisonError;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::graph::shared::SharedGraph;
use crate::surface::{RasterSurface, TextAlign, TextBaseline, TextLabel};

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const FULL: &str = "█";

pub struct GraphPanel {
    pub shared: SharedGraph,
    pub highlighted: bool,
}

impl GraphPanel {
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

impl crate::ui::Panel for GraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.read().unwrap_or_else(PoisonError::into_inner);

        let mut border = Style::default().fg(g.accent);
        if self.highlighted {
            border = border.add_modifier(Modifier::BOLD);
        }
        let mut block = Block::default()
            .title(format!(" {} ", g.name))
            .borders(Borders::ALL)
            .border_style(border);
        if let Some(counters) = g.stage.counters() {
            let hps = counters
                .hits_per_second
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            let fps = counters
                .frames_per_second
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            block = block.title_bottom(Line::from(format!(" {hps} hits/s  {fps} fps ")).right_aligned());
        }
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (Some(background), Some(history)) = (g.background(), g.history_layer()) else {
            return;
        };
        let background = background.read().unwrap_or_else(PoisonError::into_inner);
        let history = history.read().unwrap_or_else(PoisonError::into_inner);
        f.render_widget(
            LayerView {
                background: &background,
                history: &history,
            },
            inner,
        );
    }
}

/// Composites two raster layers into a cell area.
pub struct LayerView<'a> {
    pub background: &'a RasterSurface,
    pub history: &'a RasterSurface,
}

impl LayerView<'_> {
    fn pixel_size(&self) -> (usize, usize) {
        (
            self.background.width().max(self.history.width()),
            self.background.height().max(self.history.height()),
        )
    }

    /// First colour found in the block, history before background.
    fn sample(&self, xs: Range<usize>, ys: Range<usize>) -> Option<Color> {
        [self.history, self.background].into_iter().find_map(|layer| {
            ys.clone()
                .flat_map(|y| xs.clone().map(move |x| (x, y)))
                .find_map(|(x, y)| layer.pixel(x, y))
        })
    }

    fn place_label(label: &TextLabel, area: Rect, px_w: usize, px_h: usize, buf: &mut Buffer) {
        let width = label.text.chars().count() as i64;
        let col = (label.x / px_w as f64 * area.width as f64).floor() as i64;
        let row_at = |y: f64| (y / px_h as f64 * area.height as f64).floor() as i64;
        let row = match label.baseline {
            TextBaseline::Top | TextBaseline::Middle => row_at(label.y),
            // text sits above a bottom baseline
            TextBaseline::Bottom => row_at(label.y) - 1,
        };
        let start = match label.align {
            TextAlign::Left => col,
            TextAlign::Center => col - width / 2,
            TextAlign::Right => col - width,
        };
        if row < 0 || row >= area.height as i64 {
            return;
        }
        let start = start.clamp(0, (area.width as i64 - width).max(0));
        buf.set_stringn(
            area.x + start as u16,
            area.y + row as u16,
            &label.text,
            area.width as usize - start as usize,
            Style::default().fg(label.colour),
        );
    }
}

/// Pixel range covered by cell `i` of `cells` over `pixels`.
fn cell_span(i: usize, cells: usize, pixels: usize) -> Range<usize> {
    let a = i * pixels / cells;
    let b = ((i + 1) * pixels / cells).max(a + 1).min(pixels);
    a..b
}

impl Widget for LayerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (px_w, px_h) = self.pixel_size();
        if px_w == 0 || px_h == 0 || area.is_empty() {
            return;
        }
        let cols = area.width as usize;
        let halves = area.height as usize * 2;

        for cy in 0..area.height {
            for cx in 0..area.width {
                let xs = cell_span(cx as usize, cols, px_w);
                let top = self.sample(xs.clone(), cell_span(cy as usize * 2, halves, px_h));
                let bottom = self.sample(xs, cell_span(cy as usize * 2 + 1, halves, px_h));
                let cell = &mut buf[(area.x + cx, area.y + cy)];
                match (top, bottom) {
                    (None, None) => {}
                    (Some(t), None) => {
                        cell.set_symbol(UPPER_HALF).set_fg(t);
                    }
                    (None, Some(b)) => {
                        cell.set_symbol(LOWER_HALF).set_fg(b);
                    }
                    (Some(t), Some(b)) if t == b => {
                        cell.set_symbol(FULL).set_fg(t);
                    }
                    (Some(t), Some(b)) => {
                        cell.set_symbol(UPPER_HALF).set_fg(t).set_bg(b);
                    }
                }
            }
        }

        for label in self.background.labels().iter().chain(self.history.labels()) {
            Self::place_label(label, area, px_w, px_h, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    fn layers() -> (RasterSurface, RasterSurface) {
        let mut bg = RasterSurface::default();
        let mut hist = RasterSurface::default();
        bg.resize(8.0, 8.0);
        hist.resize(8.0, 8.0);
        (bg, hist)
    }

    #[test]
    fn cell_spans_cover_every_pixel() {
        let spans: Vec<_> = (0..4).map(|i| cell_span(i, 4, 10)).collect();
        assert_eq!(spans, vec![0..2, 2..5, 5..7, 7..10]);
        // more cells than pixels still samples one pixel each
        assert_eq!(cell_span(3, 8, 4), 1..2);
    }

    #[test]
    fn history_drawn_over_background() {
        let (mut bg, mut hist) = layers();
        bg.set_fill_style("#cccccc");
        bg.fill_rect(0.0, 0.0, 8.0, 8.0);
        hist.set_fill_style("#00cccc");
        hist.fill_rect(4.0, 6.0, 4.0, 2.0);

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        LayerView {
            background: &bg,
            history: &hist,
        }
        .render(area, &mut buf);

        let grey = Color::Rgb(0xcc, 0xcc, 0xcc);
        let teal = Color::Rgb(0, 0xcc, 0xcc);
        assert_eq!(buf[(0, 0)].symbol(), FULL);
        assert_eq!(buf[(0, 0)].fg, grey);
        assert_eq!(buf[(1, 1)].symbol(), UPPER_HALF);
        assert_eq!(buf[(1, 1)].fg, grey);
        assert_eq!(buf[(1, 1)].bg, teal);
    }

    #[test]
    fn half_cells_for_partial_bars() {
        let (bg, mut hist) = layers();
        hist.set_fill_style("red");
        hist.fill_rect(0.0, 6.0, 8.0, 2.0);

        let area = Rect::new(0, 0, 1, 2);
        let mut buf = Buffer::empty(area);
        LayerView {
            background: &bg,
            history: &hist,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), LOWER_HALF);
        assert_eq!(buf[(0, 1)].fg, Color::Red);
    }

    #[test]
    fn labels_follow_alignment() {
        let (mut bg, hist) = layers();
        bg.resize(100.0, 40.0);
        bg.set_text_baseline(TextBaseline::Middle);
        bg.set_text_align(TextAlign::Right);
        bg.fill_text("52", 50.0, 0.0);
        bg.set_text_align(TextAlign::Left);
        bg.fill_text("13", 50.0, 30.0);

        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        LayerView {
            background: &bg,
            history: &hist,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(3, 0)].symbol(), "5");
        assert_eq!(buf[(4, 0)].symbol(), "2");
        assert_eq!(buf[(5, 3)].symbol(), "1");
        assert_eq!(buf[(6, 3)].symbol(), "3");
    }

    #[test]
    fn empty_layers_draw_nothing() {
        let bg = RasterSurface::default();
        let hist = RasterSurface::default();
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        LayerView {
            background: &bg,
            history: &hist,
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
