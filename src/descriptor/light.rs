//! Light specifications.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported light kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Uniform light with no direction.
    #[default]
    Ambient,
    /// Parallel rays from a direction.
    Directional,
    /// Omnidirectional light from a point.
    Point,
    /// Sky/ground gradient light.
    Hemisphere,
}

/// One light in a scene descriptor. Order in the `lights` sequence
/// defines the stable `light-<index>` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LightSpec {
    /// Light kind.
    #[serde(rename = "type")]
    pub kind: LightKind,
    /// Hex color string.
    pub color: String,
    /// Intensity multiplier.
    pub intensity: f32,
}

impl Default for LightSpec {
    fn default() -> Self {
        Self {
            kind: LightKind::Ambient,
            color: "#ffffff".to_owned(),
            intensity: 1.0,
        }
    }
}
