//! Mesh specifications: geometry kind + parameters, material, optional
//! texture/tiling, static adjustments, per-frame deltas, repetition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::delta::{AxisValues, DeltaTree};

/// One mesh in a scene descriptor. Order in the `meshes` sequence
/// defines the stable `item-<index>` name of the placed group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MeshSpec {
    /// Geometry kind name (`box`, `plane`, `sphere`, `lathe`, ...).
    pub geometry_name: String,
    /// Construction parameters for the geometry kind.
    pub geometry: GeometryParams,
    /// Optional procedural generator computing the first positional
    /// construction argument (e.g. lathe profile points).
    pub geometry_helper: Option<String>,
    /// Vestigial flag from older descriptor documents that selected a
    /// buffer-backed geometry representation. Accepted and ignored;
    /// every geometry handle is buffer-backed here.
    pub is_buffer_geometry: bool,
    /// Material kind name (`lambert`, `basic`, `phong`, `standard`).
    pub material_name: String,
    /// Material parameter overrides.
    pub material: MaterialParams,
    /// Hex color string.
    pub color: String,
    /// Optional texture image, loaded asynchronously.
    pub image: Option<String>,
    /// Optional tiling factors for the texture.
    pub repeat: Option<RepeatSpec>,
    /// One-time additive adjustment applied to each instance after
    /// placement.
    pub properties: DeltaTree,
    /// Per-tick additive delta applied by the animation driver.
    pub frame_movement: DeltaTree,
    /// Number of repeated instances placed along the spacing axis.
    pub count: u32,
    /// Distance between consecutive instances on z.
    pub spacing: f32,
    /// Alternating-side x displacement magnitude.
    pub offset: f32,
    /// Every `reverseSideRate`-th instance is placed at `-offset`
    /// instead of `+offset`. Zero disables alternation.
    pub reverse_side_rate: u32,
    /// Scale the per-tick delta by the 1-based repetition index and
    /// apply it per instance instead of to the group.
    pub index_scaled: bool,
    /// Base placement added to every instance.
    pub position: AxisValues,
}

impl Default for MeshSpec {
    fn default() -> Self {
        Self {
            geometry_name: "box".to_owned(),
            geometry: GeometryParams::default(),
            geometry_helper: None,
            is_buffer_geometry: false,
            material_name: "lambert".to_owned(),
            material: MaterialParams::default(),
            color: "#ffffff".to_owned(),
            image: None,
            repeat: None,
            properties: DeltaTree::default(),
            frame_movement: DeltaTree::default(),
            count: 1,
            spacing: 0.0,
            offset: 0.0,
            reverse_side_rate: 0,
            index_scaled: false,
            position: AxisValues::default(),
        }
    }
}

/// Texture tiling factors.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct RepeatSpec {
    /// Horizontal repeat factor.
    pub width: f32,
    /// Vertical repeat factor.
    pub height: f32,
}

/// Typed construction parameters, the union of every geometry kind's
/// named parameters. The geometry registry decides which fields a
/// given kind reads and in what order; absent fields pass through as
/// the engine's own defaults rather than erroring.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GeometryParams {
    /// Extent on x.
    pub width: Option<f32>,
    /// Extent on y.
    pub height: Option<f32>,
    /// Extent on z.
    pub depth: Option<f32>,
    /// Sphere/cone/torus radius.
    pub radius: Option<f32>,
    /// Cylinder top radius.
    pub radius_top: Option<f32>,
    /// Cylinder bottom radius.
    pub radius_bottom: Option<f32>,
    /// Torus tube radius.
    pub tube: Option<f32>,
    /// Subdivisions on x.
    pub width_segments: Option<u32>,
    /// Subdivisions on y.
    pub height_segments: Option<u32>,
    /// Subdivisions on z.
    pub depth_segments: Option<u32>,
    /// Subdivisions around the axis of revolution.
    pub radial_segments: Option<u32>,
    /// Subdivisions along a tube.
    pub tubular_segments: Option<u32>,
    /// Generic segment count (lathe profiles, circles).
    pub segments: Option<u32>,
    /// Parametric surface subdivisions on u.
    pub slices: Option<u32>,
    /// Parametric surface subdivisions on v.
    pub stacks: Option<u32>,
    /// Procedural curvature factor.
    pub curvature: Option<f32>,
    /// Torus arc length in radians.
    pub arc: Option<f32>,
    /// Lathe start angle in radians.
    pub phi_start: Option<f32>,
    /// Lathe sweep angle in radians.
    pub phi_length: Option<f32>,
    /// Procedural displacement region in uv space.
    pub range: Option<RangeSpec>,
}

impl GeometryParams {
    /// Look up a parameter by its registry name. Integer-valued
    /// parameters are widened to `f32`.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f32> {
        let int = |v: Option<u32>| v.map(|n| n as f32);
        match name {
            "width" => self.width,
            "height" => self.height,
            "depth" => self.depth,
            "radius" => self.radius,
            "radiusTop" => self.radius_top,
            "radiusBottom" => self.radius_bottom,
            "tube" => self.tube,
            "widthSegments" => int(self.width_segments),
            "heightSegments" => int(self.height_segments),
            "depthSegments" => int(self.depth_segments),
            "radialSegments" => int(self.radial_segments),
            "tubularSegments" => int(self.tubular_segments),
            "segments" => int(self.segments),
            "slices" => int(self.slices),
            "stacks" => int(self.stacks),
            "curvature" => self.curvature,
            "arc" => self.arc,
            "phiStart" => self.phi_start,
            "phiLength" => self.phi_length,
            _ => None,
        }
    }
}

/// Procedural displacement region in uv space, `0..1` on both axes.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RangeSpec {
    /// Region start on u.
    pub start_x: f32,
    /// Region end on u.
    pub end_x: f32,
    /// Region start on v.
    pub start_y: f32,
    /// Region end on v.
    pub end_y: f32,
}

impl RangeSpec {
    /// Whether the uv coordinate falls strictly inside the region.
    #[must_use]
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u > self.start_x && u < self.end_x && v > self.start_y && v < self.end_y
    }
}

/// Material parameter overrides layered over the factory defaults
/// (`transparent: true`, double-sided).
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MaterialParams {
    /// Override alpha blending.
    pub transparent: Option<bool>,
    /// Uniform opacity.
    pub opacity: Option<f32>,
    /// Render as wireframe.
    pub wireframe: Option<bool>,
    /// Override double-sided rendering.
    pub double_sided: Option<bool>,
    /// Flat instead of smooth shading.
    pub flat_shading: Option<bool>,
}
