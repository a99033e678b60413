//! Camera projection, placement, and per-frame movement.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::delta::{AxisValues, DeltaTree};

/// Camera section of a scene descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CameraSpec {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Width-to-height aspect ratio. Also drives render-surface sizing.
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Initial camera position.
    pub position: AxisValues,
    /// Per-tick additive transform delta.
    pub frame_movement: DeltaTree,
    /// Sinusoidal swing periods per axis. When set, the axis position
    /// is driven absolutely by `spacing * sin(frame / period)` each
    /// tick, before the additive `frame_movement` delta.
    pub swing: SwingSpec,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            fov: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 2000.0,
            position: AxisValues::default(),
            frame_movement: DeltaTree::default(),
            swing: SwingSpec::default(),
        }
    }
}

/// Optional sinusoidal swing periods per camera axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, deny_unknown_fields)]
pub struct SwingSpec {
    /// Swing period on x, in frames.
    pub x: Option<f32>,
    /// Swing period on y, in frames.
    pub y: Option<f32>,
    /// Swing period on z, in frames.
    pub z: Option<f32>,
}

impl SwingSpec {
    /// Whether any axis swings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}
