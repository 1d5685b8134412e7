//! src/graph/container.rs
//!
//! Binding between a graph and the element hosting it: the two surfaces it
//! draws on and the optional text elements showing live rates.

use std::sync::{Arc, PoisonError, RwLock};

use crate::surface::Surface;

/// Something that displays a line of text.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// Alias: Arc<RwLock<String>>
pub type SharedText = Arc<RwLock<String>>;

impl TextSink for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut s = self.write().unwrap_or_else(PoisonError::into_inner);
        s.clear();
        s.push_str(text);
    }
}

/// Hits-per-second and frames-per-second counter elements.
#[derive(Clone, Debug)]
pub struct CounterElements<T> {
    pub hits_per_second: T,
    pub frames_per_second: T,
}

/// Root element a graph binds to.
pub trait Container {
    type Surface: Surface;
    type Text: TextSink + Send + Sync + 'static;

    /// Layer holding the static bar slots and axis labels.
    fn background_canvas(&self) -> Option<Self::Surface>;

    /// Layer holding the history bars, stacked over the background.
    fn history_canvas(&self) -> Option<Self::Surface>;

    fn counter_elements(&self) -> Option<CounterElements<Self::Text>> {
        None
    }
}
