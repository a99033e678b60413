//! The scene graph: named mesh groups, lights, camera, background.
//!
//! Names are the only cross-reference mechanism in the system: every
//! placed group is `item-<index>` and every light `light-<index>`,
//! derived from descriptor order, and the animation driver looks
//! objects up exclusively by those names. Lookup goes through
//! `FxHashMap` indices so per-tick resolution stays cheap.

pub mod builder;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::descriptor::{CameraSpec, DeltaTree, LightKind};
use crate::geometry::Geometry;
use crate::material::{Color, Material, Texture};

/// Position/rotation/scale of one scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Additively apply a delta tree, scaled by `factor`.
    ///
    /// Strictly accumulating: applying the same tree twice moves the
    /// node twice as far. There is no clamping.
    pub fn apply_delta(&mut self, tree: &DeltaTree, factor: f32) {
        self.position += tree.position.to_vec3() * factor;
        self.rotation += tree.rotation.to_vec3() * factor;
        self.scale += tree.scale.to_vec3() * factor;
    }
}

/// One placed copy of a mesh inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshInstance {
    /// 1-based repetition index within the group.
    pub index: u32,
    /// Local transform, composed with the group transform.
    pub transform: Transform,
    /// Surface handle; textures are swapped in here in place once
    /// their load resolves.
    pub material: Material,
}

/// A named group of `count` mesh instances sharing one geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup {
    /// Stable `item-<index>` name.
    pub name: String,
    /// Group transform, the default target of per-frame deltas.
    pub transform: Transform,
    /// Shared geometry handle.
    pub geometry: Geometry,
    /// Placed instances.
    pub instances: Vec<MeshInstance>,
}

impl MeshGroup {
    /// World position of instance `i`: group plus local translation.
    #[must_use]
    pub fn instance_world_position(&self, i: usize) -> Vec3 {
        self.transform.position + self.instances[i].transform.position
    }
}

/// A named light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Stable `light-<index>` name.
    pub name: String,
    /// Light kind.
    pub kind: LightKind,
    /// Current color.
    pub color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
}

/// The scene camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Width-to-height aspect ratio.
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Camera transform; per-frame deltas accumulate here.
    pub transform: Transform,
}

impl Camera {
    /// Place a camera from its descriptor section.
    #[must_use]
    pub fn from_spec(spec: &CameraSpec) -> Self {
        Self {
            fov: spec.fov,
            aspect: spec.aspect,
            near: spec.near,
            far: spec.far,
            transform: Transform {
                position: spec.position.to_vec3(),
                ..Transform::default()
            },
        }
    }
}

/// Scene background state.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundState {
    /// Flat color; also the placeholder while an image loads.
    Color(Color),
    /// Loaded image background.
    Texture(Texture),
}

/// A live scene graph.
#[derive(Debug)]
pub struct Scene {
    /// Background.
    pub background: BackgroundState,
    /// Camera.
    pub camera: Camera,
    groups: Vec<MeshGroup>,
    group_index: FxHashMap<String, usize>,
    lights: Vec<Light>,
    light_index: FxHashMap<String, usize>,
}

impl Scene {
    /// An empty scene with the given camera and background.
    #[must_use]
    pub fn new(camera: Camera, background: BackgroundState) -> Self {
        Self {
            background,
            camera,
            groups: Vec::new(),
            group_index: FxHashMap::default(),
            lights: Vec::new(),
            light_index: FxHashMap::default(),
        }
    }

    /// Add a named mesh group.
    pub fn add_group(&mut self, group: MeshGroup) {
        let _previous =
            self.group_index.insert(group.name.clone(), self.groups.len());
        self.groups.push(group);
    }

    /// Add a named light.
    pub fn add_light(&mut self, light: Light) {
        let _previous =
            self.light_index.insert(light.name.clone(), self.lights.len());
        self.lights.push(light);
    }

    /// Look up a mesh group by name.
    #[must_use]
    pub fn group_by_name(&self, name: &str) -> Option<&MeshGroup> {
        self.group_index.get(name).map(|&i| &self.groups[i])
    }

    /// Mutable lookup of a mesh group by name.
    pub fn group_by_name_mut(&mut self, name: &str) -> Option<&mut MeshGroup> {
        let index = *self.group_index.get(name)?;
        self.groups.get_mut(index)
    }

    /// Look up a light by name.
    #[must_use]
    pub fn light_by_name(&self, name: &str) -> Option<&Light> {
        self.light_index.get(name).map(|&i| &self.lights[i])
    }

    /// All mesh groups in placement order.
    #[must_use]
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    /// All lights in placement order.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Mutable access to all lights.
    pub fn lights_mut(&mut self) -> &mut [Light] {
        &mut self.lights
    }
}
