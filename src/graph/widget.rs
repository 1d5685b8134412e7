//! src/graph/widget.rs
//!
//! `HitGraph`: counts hits, samples them into the history window at the
//! configured frame rate and redraws its layers.
//!
//! The graph never drives itself. The host repaints, calls [`HitGraph::pump`]
//! and every frame request that is due runs one [`HitGraph::on_frame`], which
//! re-requests a frame before doing anything else.

use log::{debug, trace, warn};

use super::animate::{FramePacer, PerSecondWindow, RateSample};
use super::config::GraphConfig;
use super::container::{Container, CounterElements, TextSink};
use super::data::{Accumulator, HistoryBuffer};
use super::options::GraphOptions;
use super::render::Layers;
use crate::clock::Clock;
use crate::error::GraphError;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::surface::{Surface, clamp_dimension};

type Counters = CounterElements<Box<dyn TextSink + Send + Sync>>;

pub struct HitGraph<S> {
    config: GraphConfig,
    layers: Layers<S>,
    counters: Option<Counters>,
    history: HistoryBuffer,
    buffer: Accumulator,
    pacer: Option<FramePacer>,
    per_second: PerSecondWindow,
    rates: Option<RateSample>,
    clock: Box<dyn Clock + Send + Sync>,
    scheduler: Box<dyn FrameScheduler + Send + Sync>,
    frame_id: Option<FrameHandle>,
    started: bool,
    ticks: u64,
}

impl<S: Surface> HitGraph<S> {
    /// Bind a graph to `container`. Both canvases must be present.
    pub fn new<C>(
        container: &C,
        config: GraphConfig,
        clock: Box<dyn Clock + Send + Sync>,
        scheduler: Box<dyn FrameScheduler + Send + Sync>,
    ) -> Result<Self, GraphError>
    where
        C: Container<Surface = S>,
    {
        let background = container
            .background_canvas()
            .ok_or_else(|| GraphError::MissingSurface("background".into()))?;
        let history = container
            .history_canvas()
            .ok_or_else(|| GraphError::MissingSurface("history".into()))?;
        let counters = container.counter_elements().map(|c| CounterElements {
            hits_per_second: Box::new(c.hits_per_second) as Box<dyn TextSink + Send + Sync>,
            frames_per_second: Box::new(c.frames_per_second) as Box<dyn TextSink + Send + Sync>,
        });

        let mut graph = Self {
            history: HistoryBuffer::new(config.history_len()),
            config,
            layers: Layers::new(background, history),
            counters,
            buffer: Accumulator::default(),
            pacer: None,
            per_second: PerSecondWindow::default(),
            rates: None,
            clock,
            scheduler,
            frame_id: None,
            started: false,
            ticks: 0,
        };
        graph.init_layers();
        Ok(graph)
    }

    /// Build from an options object, validating in order: container, height,
    /// width.
    pub fn from_options<C>(
        root: Option<&C>,
        options: &GraphOptions,
        base: GraphConfig,
        clock: Box<dyn Clock + Send + Sync>,
        scheduler: Box<dyn FrameScheduler + Send + Sync>,
    ) -> Result<Self, GraphError>
    where
        C: Container<Surface = S>,
    {
        let root = root.ok_or(GraphError::MissingContainer)?;
        let config = options.apply(base)?;
        Self::new(root, config, clock, scheduler)
    }

    // Re-created on every start so setters called before it take effect.
    fn init_layers(&mut self) {
        self.history = HistoryBuffer::new(self.config.history_len());
        self.layers.set_max_axes_point(None);
        self.layers.init_background(&self.config);
        self.layers.init_history(&self.config);
        self.layers.draw_background(&self.config);
    }

    pub fn bar_spacing(&mut self, bar_spacing: f64) -> &mut Self {
        self.config.bar_spacing = bar_spacing;
        self
    }

    pub fn bar_width(&mut self, bar_width: f64) -> &mut Self {
        self.config.bar_width = bar_width;
        self
    }

    pub fn gutter(&mut self, gutter: f64) -> &mut Self {
        self.config.gutter = gutter;
        self
    }

    pub fn width(&mut self, width: f64) -> &mut Self {
        self.config.width = clamp_dimension(width);
        self
    }

    pub fn height(&mut self, height: f64) -> &mut Self {
        self.config.height = clamp_dimension(height);
        self
    }

    pub fn background_bar_colour(&mut self, colour: &str) -> &mut Self {
        self.config.background_bar_colour = colour.to_string();
        self
    }

    pub fn history_bar_colour(&mut self, colour: &str) -> &mut Self {
        self.config.history_bar_colour = colour.to_string();
        self
    }

    pub fn axes_font(&mut self, font: &str) -> &mut Self {
        self.config.axes_font = font.to_string();
        self
    }

    /// Samples per second. Non-positive rates are ignored.
    pub fn frame_rate(&mut self, frame_rate: f64) -> &mut Self {
        if frame_rate > 0.0 {
            self.config.frame_rate = frame_rate;
        } else {
            warn!("ignoring frame rate {frame_rate}, keeping {}", self.config.frame_rate);
        }
        self
    }

    /// Start sampling.
    ///
    /// Without `start_guard`, calling this while already running schedules a
    /// second frame loop: two callbacks run per repaint. Both share one pacer,
    /// so sample ticks still happen once per interval.
    pub fn start(&mut self) {
        if self.started {
            if self.config.start_guard {
                debug!("start ignored, graph already running");
                return;
            }
            warn!("graph started twice; a second frame loop is now scheduled");
        }
        self.init_layers();
        let now = self.clock.now();
        self.pacer = Some(FramePacer::new(now, self.config.sample_interval()));
        self.per_second = PerSecondWindow::new(now);
        self.started = true;
        self.frame_id = Some(self.scheduler.request_frame());
        debug!(
            "graph started: {} intervals every {:.1}ms",
            self.history.len(),
            self.config.sample_interval()
        );
    }

    /// Cancel the most recently requested frame. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.frame_id.take() {
            self.scheduler.cancel_frame(handle);
            debug!("graph stopped (frame {})", handle.id());
        }
        self.started = false;
    }

    pub fn add_hit(&mut self) {
        self.buffer.add(1);
    }

    pub fn add_hits(&mut self, hits: u64) {
        self.buffer.add(hits);
    }

    /// Run the frame callbacks that are due at this repaint.
    ///
    /// Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let due = self.scheduler.due_frames();
        for _ in &due {
            self.on_frame();
        }
        due.len()
    }

    /// One repaint callback: reschedule, then tick if an interval has passed.
    pub fn on_frame(&mut self) {
        self.frame_id = Some(self.scheduler.request_frame());

        let now = self.clock.now();
        let Some(pacer) = self.pacer.as_mut() else {
            return;
        };
        if pacer.due(now) {
            self.per_second.record_frame(self.buffer.pending());
            self.tick();
        }

        if self.config.track_per_second_stats {
            if let Some(rates) = self.per_second.roll(now) {
                self.publish_rates(rates);
            }
        }
    }

    /// Move the pending hits into the history window and redraw.
    pub fn tick(&mut self) {
        let hits = self.buffer.take();
        self.history.rotate(hits);
        self.ticks += 1;
        trace!("tick {}: {} hits", self.ticks, hits);
        self.layers.draw_history(&self.config, &self.history);
    }

    fn publish_rates(&mut self, rates: RateSample) {
        self.rates = Some(rates);
        if let Some(counters) = self.counters.as_mut() {
            counters
                .hits_per_second
                .set_text(&rates.hits_per_second.to_string());
            counters
                .frames_per_second
                .set_text(&rates.frames_per_second.to_string());
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Hits not yet sampled.
    pub fn pending_hits(&self) -> u64 {
        self.buffer.pending()
    }

    pub fn max_axes_point(&self) -> Option<u64> {
        self.layers.max_axes_point()
    }

    pub fn rates(&self) -> Option<RateSample> {
        self.rates
    }

    pub fn pacer(&self) -> Option<&FramePacer> {
        self.pacer.as_ref()
    }

    pub fn frame_id(&self) -> Option<FrameHandle> {
        self.frame_id
    }

    pub fn pending_frames(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn is_running(&self) -> bool {
        self.started
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn layers(&self) -> &Layers<S> {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut Layers<S> {
        &mut self.layers
    }
}
