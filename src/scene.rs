//! Scene descriptions: which curves to draw, loaded from YAML/JSON or built-in presets.
//!
//! ```yaml
//! settings:
//!   steps_per_batch: 500
//!   manual: true
//! curves:
//!   - kind: spirograph
//!     gear_radius: 0.55
//!     pen_radius: 0.45
//!     color: black
//!     line_width: 1.0
//!   - kind: fourier
//!     terms:
//!       - { radius: 2.0, frequency: 1.0 }
//!       - { radius: -1.0, frequency: 2.0 }
//!     color: "#ff8000"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PipelineSettings;
use crate::curve::{spirograph, CurveModel, Term};
use crate::data::curve_look::{parse_color, CurveLook};
use crate::data::trace::CurveTrace;
use crate::error::ConfigError;
use crate::pipeline::Pipeline;

/// One curve in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveSpec {
    /// A general sum of rotating terms.
    Fourier {
        terms: Vec<Term>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_width: Option<f32>,
    },
    /// The three-term spirograph.
    Spirograph {
        gear_radius: f64,
        pen_radius: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_width: Option<f32>,
    },
}

impl CurveSpec {
    /// Build the model; non-finite terms and bad spirograph geometry are rejected here.
    pub fn model(&self) -> Result<CurveModel, crate::error::CurveError> {
        match self {
            CurveSpec::Fourier { terms, .. } => CurveModel::try_from_terms(terms.iter().copied()),
            CurveSpec::Spirograph {
                gear_radius,
                pen_radius,
                ..
            } => spirograph(*gear_radius, *pen_radius),
        }
    }

    /// Resolve the look; curves without a color get one from the palette by index.
    pub fn look(&self, index: usize) -> Result<CurveLook, ConfigError> {
        let (color, line_width) = match self {
            CurveSpec::Fourier {
                color, line_width, ..
            }
            | CurveSpec::Spirograph {
                color, line_width, ..
            } => (color, line_width),
        };
        let width = line_width.unwrap_or(CurveLook::default().width);
        let color = match color {
            Some(c) => parse_color(c)?,
            None => CurveLook::alloc_color(index),
        };
        CurveLook::checked(color, width)
    }
}

/// Optional pipeline overrides carried in a scene file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub steps_per_batch: Option<usize>,
    pub full_rotation_denominator: Option<u64>,
    pub producer_pacing_ms: Option<u64>,
    pub render_tick_ms: Option<u64>,
    pub manual: Option<bool>,
}

impl SceneSettings {
    /// Apply the overrides that are present onto `s`.
    pub fn apply_to(&self, s: &mut PipelineSettings) {
        if let Some(v) = self.steps_per_batch {
            s.steps_per_batch = v;
        }
        if let Some(v) = self.full_rotation_denominator {
            s.full_rotation_denominator = v;
        }
        if let Some(v) = self.producer_pacing_ms {
            s.producer_pacing_ms = v;
        }
        if let Some(v) = self.render_tick_ms {
            s.render_tick_ms = v;
        }
        if let Some(v) = self.manual {
            s.manual = v;
        }
    }
}

/// A list of curves plus optional setting overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub settings: SceneSettings,
    pub curves: Vec<CurveSpec>,
}

impl Scene {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a scene file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let scene = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };
        info!("loaded {} curve(s) from {:?}", scene.curves.len(), path);
        Ok(scene)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every curve and register it on `pipeline`, all or nothing.
    ///
    /// Returns the traces in scene order.
    pub fn register_into(
        &self,
        pipeline: &mut Pipeline,
    ) -> Result<Vec<Arc<CurveTrace>>, ConfigError> {
        if self.curves.is_empty() {
            return Err(ConfigError::EmptyScene);
        }
        let built = self
            .curves
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let model = spec
                    .model()
                    .map_err(|source| ConfigError::Curve { index, source })?;
                Ok((model, spec.look(index)?))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(built
            .into_iter()
            .map(|(model, look)| pipeline.register(model, look))
            .collect())
    }
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// A simple closed shape from three terms.
    Simple,
    /// Three nested spirographs.
    #[default]
    Spirographs,
}

impl Preset {
    pub fn scene(self) -> Scene {
        let curves = match self {
            Preset::Simple => vec![CurveSpec::Fourier {
                terms: vec![Term::new(2.0, 1.0), Term::new(-1.0, 2.0), Term::new(0.5, 3.0)],
                color: Some("black".into()),
                line_width: Some(1.0),
            }],
            // (gear radius, pen radius, color, width)
            Preset::Spirographs => [
                (0.55, 0.45, "black", 1.0),
                (0.75, 0.35, "orange", 0.5),
                (1.85, 1.75, "blue", 0.5),
            ]
            .into_iter()
            .map(|(gear, pen, color, width)| CurveSpec::Spirograph {
                gear_radius: gear,
                pen_radius: pen,
                color: Some(color.into()),
                line_width: Some(width),
            })
            .collect(),
        };
        Scene {
            settings: SceneSettings::default(),
            curves,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Simple => write!(f, "simple"),
            Preset::Spirographs => write!(f, "spirographs"),
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Preset::Simple),
            "spirographs" | "spirograph" => Ok(Preset::Spirographs),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}
