//! Scene Builder: a resolved descriptor to a live scene graph.
//!
//! Construction order matters: surface sizing, background, meshes,
//! lights, camera. Mesh nodes are created synchronously even when
//! their texture is still loading - a color-only placeholder material
//! goes in immediately and the texture is swapped in place on load
//! completion. By the time the animation driver's first tick runs,
//! every node name any `frameMovement` tree references already exists.

use crate::assets::{AssetLoader, TicketId};
use crate::descriptor::{MeshSpec, RepeatSpec, SceneDescriptor};
use crate::host::HostContext;
use crate::material::{self, Color};
use crate::scene::{
    BackgroundState, Camera, Light, MeshGroup, MeshInstance, Scene, Transform,
};
use crate::surface::RenderSurface;
use crate::{geometry, material as material_factory};

/// Where a pending texture goes once its load resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetTarget {
    /// The scene background.
    Background,
    /// Every instance material of the named group.
    MeshGroup {
        /// Group name.
        name: String,
        /// Tiling factors to configure before attachment.
        repeat: Option<RepeatSpec>,
    },
}

/// One in-flight texture load started during the build.
#[derive(Debug)]
pub struct PendingAsset {
    /// Loader ticket.
    pub ticket: TicketId,
    /// Attachment target.
    pub target: AssetTarget,
}

/// A freshly built scene plus its outstanding texture loads.
#[derive(Debug)]
pub struct BuiltScene {
    /// The populated scene graph.
    pub scene: Scene,
    /// Texture loads still in flight.
    pub pending: Vec<PendingAsset>,
}

/// Stable name of the mesh group at descriptor index `index`.
#[must_use]
pub fn item_name(index: usize) -> String {
    format!("item-{index}")
}

/// Stable name of the light at descriptor index `index`.
#[must_use]
pub fn light_name(index: usize) -> String {
    format!("light-{index}")
}

/// Build a scene graph from a resolved descriptor.
///
/// Per-mesh geometry failures are logged and skipped; the rest of the
/// scene still builds. Only the descriptor itself can abort a build,
/// and that happens earlier, at resolution time.
pub fn build(
    descriptor: &SceneDescriptor,
    host: &HostContext,
    surface: &mut impl RenderSurface,
    assets: &mut impl AssetLoader,
) -> BuiltScene {
    let (width, height) = host.surface_size(descriptor.camera.aspect);
    surface.resize(width, height);

    let mut pending = Vec::new();

    let background = match descriptor.background.color() {
        Some(color) => BackgroundState::Color(Color::parse(color)),
        None => BackgroundState::Color(material::WHITE),
    };
    if let Some(image) = descriptor.background.image() {
        pending.push(PendingAsset {
            ticket: assets.request(image),
            target: AssetTarget::Background,
        });
    }

    let mut scene =
        Scene::new(Camera::from_spec(&descriptor.camera), background);

    for (index, spec) in descriptor.meshes.iter().enumerate() {
        let name = item_name(index);
        match build_group(spec, &name) {
            Ok(group) => {
                if let Some(image) = &spec.image {
                    pending.push(PendingAsset {
                        ticket: assets.request(image),
                        target: AssetTarget::MeshGroup {
                            name: name.clone(),
                            repeat: spec.repeat,
                        },
                    });
                }
                scene.add_group(group);
            }
            Err(e) => {
                log::warn!("skipping mesh `{name}`: {e}");
            }
        }
    }

    for (index, spec) in descriptor.lights.iter().enumerate() {
        scene.add_light(Light {
            name: light_name(index),
            kind: spec.kind,
            color: Color::parse(&spec.color),
            intensity: spec.intensity,
        });
    }

    BuiltScene { scene, pending }
}

/// Build one named group: shared geometry, `count` placed instances,
/// one-time `properties` adjustment applied to each.
fn build_group(
    spec: &MeshSpec,
    name: &str,
) -> Result<MeshGroup, crate::error::Error> {
    let geometry = geometry::build(spec)?;
    let material =
        material_factory::build(&spec.color, &spec.material_name, &spec.material);

    let count = spec.count.max(1);
    let mut instances = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let mut transform = Transform {
            position: spec.position.to_vec3(),
            ..Transform::default()
        };
        transform.position.z += i as f32 * spec.spacing;
        if spec.reverse_side_rate > 0 {
            transform.position.x += if i % spec.reverse_side_rate == 0 {
                -spec.offset
            } else {
                spec.offset
            };
        }
        transform.apply_delta(&spec.properties, 1.0);
        instances.push(MeshInstance {
            index: i,
            transform,
            material: material.clone(),
        });
    }

    Ok(MeshGroup {
        name: name.to_owned(),
        transform: Transform::default(),
        geometry,
        instances,
    })
}
