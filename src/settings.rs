//! src/settings.rs
//!
//! Settings file: one `[[graph]]` table per graph. Besides `name`, `variant`
//! and `accent`, every key is a graph option (see `GraphOptions`).
//!
//! ```toml
//! [[graph]]
//! name = "Requests"
//! variant = "skyline"
//! accent = "cyan"
//! width = 780
//! height = 280
//! frameRate = 20
//! ```

use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::SettingsError;
use crate::graph::{GraphConfig, GraphOptions, Variant};
use crate::surface::parse_colour;

#[derive(Clone, Debug, Deserialize)]
pub struct GraphEntry {
    pub name: String,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(flatten)]
    pub options: GraphOptions,
}

impl GraphEntry {
    /// An entry using the variant's defaults.
    pub fn preset(name: &str, variant: Variant) -> Self {
        let cfg = GraphConfig::for_variant(variant);
        Self {
            name: name.to_string(),
            variant,
            accent: None,
            options: GraphOptions::with_size(cfg.width, cfg.height),
        }
    }

    /// Border colour for the graph's panels.
    pub fn accent_colour(&self) -> Color {
        self.accent
            .as_deref()
            .and_then(parse_colour)
            .unwrap_or(match self.variant {
                Variant::Skyline => Color::Cyan,
                Variant::Activity => Color::Magenta,
            })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default, rename = "graph")]
    pub graphs: Vec<GraphEntry>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// One graph of each variant, or just the requested one.
    pub fn presets(only: Option<Variant>) -> Self {
        let graphs = match only {
            Some(Variant::Skyline) => vec![GraphEntry::preset("Skyline", Variant::Skyline)],
            Some(Variant::Activity) => vec![GraphEntry::preset("Activity", Variant::Activity)],
            None => vec![
                GraphEntry::preset("Skyline", Variant::Skyline),
                GraphEntry::preset("Activity", Variant::Activity),
            ],
        };
        Self { graphs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn parses_graph_tables() {
        let s = Settings::parse(
            r##"
            [[graph]]
            name = "Requests"
            width = 600
            height = 200
            frameRate = 30

            [[graph]]
            name = "Errors"
            variant = "activity"
            accent = "#ff0000"
            width = 300
            height = "tall"
            "##,
        )
        .unwrap();
        assert_eq!(s.graphs.len(), 2);

        let first = &s.graphs[0];
        assert_eq!(first.variant, Variant::Skyline);
        assert_eq!(first.accent_colour(), Color::Cyan);
        let cfg = first.options.apply(GraphConfig::skyline()).unwrap();
        assert_eq!(cfg.frame_rate, 30.0);
        assert_eq!(cfg.width, 600.0);

        let second = &s.graphs[1];
        assert_eq!(second.accent_colour(), Color::Rgb(255, 0, 0));
        assert_eq!(
            second.options.apply(GraphConfig::activity()),
            Err(GraphError::InvalidHeight)
        );
    }

    #[test]
    fn presets_cover_both_variants() {
        assert_eq!(Settings::presets(None).graphs.len(), 2);
        let only = Settings::presets(Some(Variant::Activity));
        assert_eq!(only.graphs.len(), 1);
        assert_eq!(only.graphs[0].variant, Variant::Activity);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Settings::load(Path::new("/nonexistent/hitgraph.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
