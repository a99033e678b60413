//! Two-level additive property-delta trees.
//!
//! A delta tree names a positional property (`position`, `rotation`,
//! `scale`) and per-axis amounts. Applying a tree is always additive:
//! applying the same tree twice produces double the cumulative
//! transform, never an absolute set. `properties` adjustments are
//! applied once at build time; `frameMovement` trees are applied every
//! tick by the animation driver.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-axis values of one positional property.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, deny_unknown_fields)]
pub struct AxisValues {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl AxisValues {
    /// Convert to a `glam` vector.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Whether all components are zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// A two-level additive transform-delta tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, deny_unknown_fields)]
pub struct DeltaTree {
    /// Translation delta per axis.
    pub position: AxisValues,
    /// Euler rotation delta per axis, in radians.
    pub rotation: AxisValues,
    /// Scale delta per axis.
    pub scale: AxisValues,
}

impl DeltaTree {
    /// Whether the tree carries no deltas at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_zero()
            && self.rotation.is_zero()
            && self.scale.is_zero()
    }
}
