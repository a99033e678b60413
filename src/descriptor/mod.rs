//! The Scene Descriptor: a single, fully-resolved, immutable data
//! document describing one scene's background, camera, lights, and
//! meshes.
//!
//! Descriptors are resolved by deep-merging a document-specific
//! override onto the base defaults ([`SceneDescriptor::resolve`]) and
//! never mutated afterwards; switching gallery entries replaces the
//! active descriptor wholesale. All wire names are camelCase, matching
//! the JSON documents the host embeds.

mod background;
mod camera;
mod delta;
mod light;
mod mesh;
pub mod merge;

pub use background::Background;
pub use camera::{CameraSpec, SwingSpec};
pub use delta::{AxisValues, DeltaTree};
pub use light::{LightKind, LightSpec};
pub use mesh::{
    GeometryParams, MaterialParams, MeshSpec, RangeSpec, RepeatSpec,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// A fully-resolved scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneDescriptor {
    /// Scene background.
    pub background: Background,
    /// Camera projection, placement, and per-frame movement.
    pub camera: CameraSpec,
    /// Ordered lights; index defines the `light-<index>` name.
    pub lights: Vec<LightSpec>,
    /// Ordered mesh specs; index defines the `item-<index>` name.
    pub meshes: Vec<MeshSpec>,
    /// Vertical margin within which the hosting element counts as
    /// visible for the animation driver's gating predicate.
    pub visibility_offset: f32,
}

impl Default for SceneDescriptor {
    fn default() -> Self {
        Self {
            background: Background::default(),
            camera: CameraSpec::default(),
            lights: vec![LightSpec::default()],
            meshes: Vec::new(),
            visibility_offset: 800.0,
        }
    }
}

impl SceneDescriptor {
    /// Generate JSON Schema describing descriptor documents.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SceneDescriptor)
    }

    /// The base defaults as a JSON document, ready for merging.
    ///
    /// Serializing the typed defaults cannot fail, so this is
    /// infallible.
    #[must_use]
    pub fn base_document() -> Value {
        serde_json::to_value(Self::default()).unwrap_or(Value::Null)
    }

    /// Resolve a serialized override document against a base document.
    ///
    /// Fails fast with [`Error::Config`] when the override is not a
    /// valid JSON object or the merged document does not deserialize;
    /// no partial application happens.
    pub fn resolve(base: &Value, override_doc: &str) -> Result<Self, Error> {
        let overlay: Value = serde_json::from_str(override_doc)?;
        Self::resolve_value(base, &overlay)
    }

    /// Resolve an already-parsed override document against a base.
    pub fn resolve_value(base: &Value, overlay: &Value) -> Result<Self, Error> {
        if !overlay.is_object() {
            return Err(Error::Config(
                "override document must be a JSON object".to_owned(),
            ));
        }
        let merged = merge::merge_documents(base, overlay);
        Ok(serde_json::from_value(merged)?)
    }
}
