//! TOML configuration for graph geometry, status classification and logging.
//!
//! Every section is optional; missing keys fall back to compiled-in
//! defaults. Lookup order for the file itself is `--config`, then the
//! `SIXNINES_CONFIG` environment variable, then `./sixnines.toml`.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::scale::PlotArea;
use crate::history::SuccessRule;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SIXNINES_CONFIG";

const LOCAL_CONFIG: &str = "sixnines.toml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Resolve the config file to use, if any. An explicit path wins over
    /// the environment, which wins over a `sixnines.toml` in the working
    /// directory.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }
        let local = PathBuf::from(LOCAL_CONFIG);
        local.exists().then_some(local)
    }

    /// Load from the located file, or use defaults when there is none.
    /// Returns the path that was read alongside the settings.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.graph;
        let horizontal = g.margin_left.checked_add(g.margin_right);
        ensure!(
            horizontal.is_some_and(|m| g.width > m),
            "graph.width ({}) must exceed the horizontal margins ({} + {})",
            g.width,
            g.margin_left,
            g.margin_right
        );
        let vertical = g.margin_top.checked_add(g.margin_bottom);
        ensure!(
            vertical.is_some_and(|m| g.height > m),
            "graph.height ({}) must exceed the vertical margins ({} + {})",
            g.height,
            g.margin_top,
            g.margin_bottom
        );
        ensure!(
            g.default_ceiling_ms.is_finite() && g.default_ceiling_ms > 0.0,
            "graph.default_ceiling_ms must be a positive number"
        );
        ensure!(
            g.marker_radius.is_finite() && g.marker_radius > 0.0,
            "graph.marker_radius must be a positive number"
        );
        ensure!(
            !self.status.rule().is_empty(),
            "status.success_min ({}) must be below status.success_max ({})",
            self.status.success_min,
            self.status.success_max
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Canvas geometry of the latency graph, in pixels unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    /// Narrowest time window the horizontal axis shows, in seconds.
    pub min_span_secs: u64,
    /// Top of the vertical axis when the history has no latency spread.
    pub default_ceiling_ms: f64,
    pub marker_radius: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 160,
            margin_left: 48,
            margin_right: 8,
            margin_top: 10,
            margin_bottom: 22,
            min_span_secs: 60,
            default_ceiling_ms: 1000.0,
            marker_radius: 3.0,
        }
    }
}

impl GraphConfig {
    pub(crate) fn plot_area(&self) -> PlotArea {
        let width = self
            .width
            .saturating_sub(self.margin_left.saturating_add(self.margin_right))
            .max(1);
        let height = self
            .height
            .saturating_sub(self.margin_top.saturating_add(self.margin_bottom))
            .max(1);
        PlotArea {
            left: self.margin_left as f64,
            top: self.margin_top as f64,
            width: width as f64,
            height: height as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// Status classification
// ---------------------------------------------------------------------------

/// Which status codes count as "up": `[success_min, success_max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub success_min: u16,
    pub success_max: u16,
}

impl Default for StatusConfig {
    fn default() -> Self {
        let rule = SuccessRule::default();
        Self {
            success_min: rule.min,
            success_max: rule.max_exclusive,
        }
    }
}

impl StatusConfig {
    pub fn rule(&self) -> SuccessRule {
        SuccessRule::new(self.success_min, self.success_max)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
