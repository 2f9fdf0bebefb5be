//! Configuration system
//!
//! Settings are plain serde structs; [`Config`] adds file loading and saving
//! in TOML or RON, picked from the file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Octree tuning knobs
///
/// None of these affect query results, only the shape of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Maximum items per leaf before subdivision (values below 1 act as 1)
    pub capacity: usize,

    /// Maximum subdivision depth
    pub max_depth: u32,

    /// Leaves whose largest extent is at or below this size never subdivide
    pub min_node_size: f64,
}

impl OctreeConfig {
    /// Default leaf capacity
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Default depth limit
    pub const DEFAULT_MAX_DEPTH: u32 = 8;

    /// Config with the given capacity and default limits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Copy with capacity coerced to the minimum workable value
    pub(crate) fn sanitized(self) -> Self {
        Self {
            capacity: self.capacity.max(1),
            min_node_size: if self.min_node_size.is_finite() { self.min_node_size.max(0.0) } else { 0.0 },
            ..self
        }
    }
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            min_node_size: 0.0,
        }
    }
}

impl Config for OctreeConfig {}
