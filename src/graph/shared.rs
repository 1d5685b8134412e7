//! src/graph/shared.rs
//!
//! Per-graph state shared between the UI thread and the hit sources.

use std::sync::{Arc, RwLock};

use ratatui::style::Color;

use super::config::{GraphConfig, Variant};
use super::options::GraphOptions;
use super::widget::HitGraph;
use crate::clock::{Clock, SystemClock};
use crate::error::GraphError;
use crate::frame::{FrameScheduler, RepaintScheduler};
use crate::stage::Stage;
use crate::surface::{RasterSurface, SharedRaster};

/// A graph together with the stage it draws on and display metadata.
pub struct GraphShared {
    pub graph: HitGraph<SharedRaster>,
    pub stage: Stage<RasterSurface>,
    pub name: String,
    pub variant: Variant,
    pub accent: Color,
}

impl GraphShared {
    /// Construct `GraphShared` on a fresh stage.
    pub fn new(
        config: GraphConfig,
        name: &str,
        variant: Variant,
        accent: Color,
        clock: Box<dyn Clock + Send + Sync>,
        scheduler: Box<dyn FrameScheduler + Send + Sync>,
    ) -> Result<Self, GraphError> {
        let stage = Self::stage_for(variant, config.track_per_second_stats);
        let graph = HitGraph::new(&stage, config, clock, scheduler)?;
        Ok(Self {
            graph,
            stage,
            name: name.to_string(),
            variant,
            accent,
        })
    }

    /// Build from an untyped options object over the variant's defaults.
    pub fn from_options(
        options: &GraphOptions,
        name: &str,
        variant: Variant,
        accent: Color,
        clock: Box<dyn Clock + Send + Sync>,
        scheduler: Box<dyn FrameScheduler + Send + Sync>,
    ) -> Result<Self, GraphError> {
        let base = GraphConfig::for_variant(variant);
        let counters = options
            .track_per_second_stats
            .unwrap_or(base.track_per_second_stats);
        let stage = Self::stage_for(variant, counters);
        let graph = HitGraph::from_options(Some(&stage), options, base, clock, scheduler)?;
        Ok(Self {
            graph,
            stage,
            name: name.to_string(),
            variant,
            accent,
        })
    }

    fn stage_for(variant: Variant, counters: bool) -> Stage<RasterSurface> {
        let prefix = match variant {
            Variant::Skyline => "skyline",
            Variant::Activity => "ag",
        };
        let stage = Stage::template(prefix);
        if counters { stage.with_counters() } else { stage }
    }

    /// Variant defaults, wall clock, repaint-driven frames.
    pub fn preset(variant: Variant, name: &str, accent: Color) -> Result<Self, GraphError> {
        Self::new(
            GraphConfig::for_variant(variant),
            name,
            variant,
            accent,
            Box::new(SystemClock::new()),
            Box::new(RepaintScheduler::new()),
        )
    }

    pub fn background(&self) -> Option<SharedRaster> {
        self.stage.background()
    }

    pub fn history_layer(&self) -> Option<SharedRaster> {
        self.stage.history()
    }
}

/// Alias: Arc<RwLock<GraphShared>>
pub type SharedGraph = Arc<RwLock<GraphShared>>;

/// Alias for a write guard.
pub type GraphGuard<'a> = std::sync::RwLockWriteGuard<'a, GraphShared>;

pub fn share(graph: GraphShared) -> SharedGraph {
    Arc::new(RwLock::new(graph))
}
