//! src/stage.rs
//!
//! `Stage`: a named collection of shared surfaces and counter texts that a
//! graph binds to and the terminal panels read from.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::graph::container::{Container, CounterElements, SharedText};
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct Stage<S> {
    prefix: String,
    canvases: HashMap<String, Arc<RwLock<S>>>,
    texts: HashMap<String, SharedText>,
}

impl<S: Surface + Default> Stage<S> {
    /// An empty stage; class names are `<prefix>-<role>`.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            canvases: HashMap::new(),
            texts: HashMap::new(),
        }
    }

    /// A stage with the background and history canvases in place.
    pub fn template(prefix: &str) -> Self {
        let mut stage = Self::new(prefix);
        stage.add_canvas("background");
        stage.add_canvas("history");
        stage
    }

    /// Add the hits-per-second and frames-per-second counter texts.
    pub fn with_counters(mut self) -> Self {
        self.add_text("hps-count");
        self.add_text("fps-count");
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn class(&self, role: &str) -> String {
        format!("{}-{}", self.prefix, role)
    }

    pub fn add_canvas(&mut self, role: &str) -> Arc<RwLock<S>> {
        let canvas = Arc::new(RwLock::new(S::default()));
        self.canvases.insert(self.class(role), canvas.clone());
        canvas
    }

    pub fn add_text(&mut self, role: &str) -> SharedText {
        let text = SharedText::default();
        self.texts.insert(self.class(role), text.clone());
        text
    }

    /// Look up a canvas by full class name.
    pub fn canvas(&self, class: &str) -> Option<Arc<RwLock<S>>> {
        self.canvases.get(class).cloned()
    }

    pub fn text(&self, class: &str) -> Option<SharedText> {
        self.texts.get(class).cloned()
    }

    pub fn background(&self) -> Option<Arc<RwLock<S>>> {
        self.canvas(&self.class("background"))
    }

    pub fn history(&self) -> Option<Arc<RwLock<S>>> {
        self.canvas(&self.class("history"))
    }

    pub fn counters(&self) -> Option<CounterElements<SharedText>> {
        Some(CounterElements {
            hits_per_second: self.text(&self.class("hps-count"))?,
            frames_per_second: self.text(&self.class("fps-count"))?,
        })
    }
}

impl<S: Surface + Default> Container for Stage<S> {
    type Surface = Arc<RwLock<S>>;
    type Text = SharedText;

    fn background_canvas(&self) -> Option<Self::Surface> {
        self.background()
    }

    fn history_canvas(&self) -> Option<Self::Surface> {
        self.history()
    }

    fn counter_elements(&self) -> Option<CounterElements<SharedText>> {
        self.counters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RasterSurface;

    #[test]
    fn template_has_both_canvases() {
        let stage: Stage<RasterSurface> = Stage::template("skyline");
        assert!(stage.canvas("skyline-background").is_some());
        assert!(stage.canvas("skyline-history").is_some());
        assert!(stage.counters().is_none());
    }

    #[test]
    fn lookups_share_the_same_surface() {
        let stage: Stage<RasterSurface> = Stage::template("hg").with_counters();
        let a = stage.history().unwrap();
        let b = stage.history_canvas().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(stage.text("hg-hps-count").is_some());
        assert!(stage.counter_elements().is_some());
    }
}
