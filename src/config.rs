//! Application configuration (TOML).
//!
//! ```toml
//! [orbit]
//! ring_capacity = 4
//!
//! [store]
//! source = "tasks.json"
//!
//! [view]
//! root_label = "Project on Astrology"
//! viewer_name = "Rei"
//! viewer_role = "manager"
//! guide_mode = "per-ring"
//! ```
//!
//! Every section and key is optional; missing values fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mindmap::{Role, Viewer};
use crate::render::orbit::{LayoutError, OrbitConfig};
use crate::render::scene::GuideMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub orbit: OrbitConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// File path or http(s) URL of the task list
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> String {
    "tasks.json".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub root_label: String,
    pub viewer_name: String,
    pub viewer_role: Role,
    pub guide_mode: GuideMode,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            root_label: "Project on Astrology".to_string(),
            viewer_name: "Rei".to_string(),
            viewer_role: Role::Manager,
            guide_mode: GuideMode::PerRing,
            window_width: 1280.0,
            window_height: 900.0,
        }
    }
}

impl ViewConfig {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            name: self.viewer_name.clone(),
            role: self.viewer_role,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {message}")]
    Parse { message: String },
    #[error("invalid [orbit] section: {0}")]
    Layout(#[from] LayoutError),
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate. A broken `[orbit]` section is rejected here
    /// instead of at the first layout.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        cfg.orbit.validate()?;
        Ok(cfg)
    }
}
