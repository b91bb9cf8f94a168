//! Error types for curve construction, configuration loading and launching.
//!
//! Everything that can go wrong is detected before the producer thread starts;
//! the sampling and render loops themselves have no error paths.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid curve geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// The outer gear radius of a spirograph must be non-zero (it divides the pen frequency).
    #[error("spirograph gear radius must be non-zero")]
    ZeroGearRadius,

    /// A geometry parameter was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Which parameter was rejected
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

/// Rejected configuration: pipeline settings, scene files or curve definitions.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A curve in the configuration has invalid geometry.
    #[error("curve {index}: {source}")]
    Curve {
        /// Position of the curve in the scene
        index: usize,
        #[source]
        source: CurveError,
    },

    /// A tunable was outside its valid range.
    #[error("invalid setting '{name}': {message}")]
    InvalidSetting {
        /// Setting name as written in the scene file / command line
        name: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// A colour string could not be understood.
    #[error("unknown color '{0}' (use a color name or #rrggbb / #rrggbbaa)")]
    UnknownColor(String),

    /// The scene did not declare any curves.
    #[error("scene does not contain any curves")]
    EmptyScene,

    /// Unknown preset name.
    #[error("unknown preset '{0}' (available: simple, spirographs)")]
    UnknownPreset(String),

    /// The scene file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scene file is not valid YAML for a scene.
    #[error("failed to parse YAML scene: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The scene file is not valid JSON for a scene.
    #[error("failed to parse JSON scene: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create an InvalidSetting error.
    pub fn invalid_setting(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name,
            message: message.into(),
        }
    }
}

/// Failure to launch the visualizer.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The producer thread could not be spawned.
    #[error("failed to spawn producer thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The native window / event loop failed.
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
