//! Animation Driver: the continuously rescheduled per-frame loop.
//!
//! State machine is `Stopped -> Running` on scene build and back to
//! `Stopped` on teardown; re-entrant builds always start a fresh
//! `Running` driver, never resume a stopped one. A tick on a stopped
//! driver does nothing and does not reschedule - cancellation happens
//! before the render surface is detached, so no frame can land on a
//! detached surface.
//!
//! Within one tick the order is load-bearing: mesh deltas, then camera
//! swing, then the camera's additive delta, then the render call.
//! Swing reads the frame counter advanced by previous ticks, so camera
//! placement may reference the just-updated node state.

use crate::descriptor::SceneDescriptor;
use crate::scene::builder::item_name;
use crate::scene::Scene;
use crate::surface::RenderSurface;

/// Driver lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No loop alive.
    Stopped,
    /// Ticking every frame.
    Running,
}

/// Per-scene animation loop.
#[derive(Debug)]
pub struct AnimationDriver {
    state: DriverState,
    frame: u64,
}

impl AnimationDriver {
    /// A fresh running driver at frame zero.
    #[must_use]
    pub fn start() -> Self {
        Self {
            state: DriverState::Running,
            frame: 0,
        }
    }

    /// Cancel the loop. Subsequent ticks are no-ops.
    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Frames of work performed so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one tick.
    ///
    /// Returns whether the loop stays alive (i.e. whether the next
    /// tick should be scheduled). With `visible` false the work steps
    /// are skipped but the loop is kept alive, so an off-screen scene
    /// costs nothing yet resumes instantly.
    pub fn tick(
        &mut self,
        descriptor: &SceneDescriptor,
        scene: &mut Scene,
        surface: &mut impl RenderSurface,
        visible: bool,
    ) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        if !visible {
            return true;
        }

        self.apply_mesh_movement(descriptor, scene);
        self.apply_camera_movement(descriptor, scene);
        self.frame += 1;
        surface.present(scene);
        true
    }

    fn apply_mesh_movement(
        &self,
        descriptor: &SceneDescriptor,
        scene: &mut Scene,
    ) {
        for (index, spec) in descriptor.meshes.iter().enumerate() {
            if spec.frame_movement.is_empty() {
                continue;
            }
            let name = item_name(index);
            let Some(group) = scene.group_by_name_mut(&name) else {
                log::warn!("animation target `{name}` missing, skipping");
                continue;
            };
            if spec.index_scaled {
                for instance in &mut group.instances {
                    instance.transform.apply_delta(
                        &spec.frame_movement,
                        instance.index as f32,
                    );
                }
            } else {
                group.transform.apply_delta(&spec.frame_movement, 1.0);
            }
        }
    }

    fn apply_camera_movement(
        &self,
        descriptor: &SceneDescriptor,
        scene: &mut Scene,
    ) {
        let swing = &descriptor.camera.swing;
        if !swing.is_empty() {
            // Swing amplitude follows the first mesh's spacing, the
            // distance the camera covers per item.
            let amplitude = descriptor
                .meshes
                .first()
                .map_or(1.0, |m| m.spacing)
                .max(1.0);
            let frame = self.frame as f32;
            let position = &mut scene.camera.transform.position;
            if let Some(period) = swing.x {
                position.x = amplitude * (frame / period).sin();
            }
            if let Some(period) = swing.y {
                position.y = amplitude * (frame / period).sin();
            }
            if let Some(period) = swing.z {
                position.z = amplitude * (frame / period).sin();
            }
        }

        scene
            .camera
            .transform
            .apply_delta(&descriptor.camera.frame_movement, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryLoader;
    use crate::host::HostContext;
    use crate::scene::builder;
    use crate::surface::NullSurface;

    fn built(doc: &str) -> (SceneDescriptor, Scene, NullSurface) {
        let base = SceneDescriptor::base_document();
        let descriptor = SceneDescriptor::resolve(&base, doc).unwrap();
        let mut surface = NullSurface::new();
        let mut assets = MemoryLoader::new();
        let built = builder::build(
            &descriptor,
            &HostContext::default(),
            &mut surface,
            &mut assets,
        );
        (descriptor, built.scene, surface)
    }

    #[test]
    fn additive_drift_accumulates_per_tick() {
        let (descriptor, mut scene, mut surface) = built(
            r#"{"meshes": [{
                "geometryName": "box",
                "frameMovement": {"position": {"y": 1.0}}
            }]}"#,
        );
        let mut driver = AnimationDriver::start();
        for _ in 0..10 {
            assert!(driver.tick(&descriptor, &mut scene, &mut surface, true));
        }
        let group = scene.group_by_name("item-0").unwrap();
        assert_eq!(group.transform.position.y, 10.0);
        assert_eq!(surface.presented, 10);
    }

    #[test]
    fn properties_then_frame_movement_compose() {
        let (descriptor, mut scene, mut surface) = built(
            r#"{"meshes": [{
                "geometryName": "box",
                "properties": {"position": {"y": 5.0}},
                "frameMovement": {"position": {"y": 1.0}}
            }]}"#,
        );
        let mut driver = AnimationDriver::start();
        for _ in 0..3 {
            let _alive =
                driver.tick(&descriptor, &mut scene, &mut surface, true);
        }
        let group = scene.group_by_name("item-0").unwrap();
        // Build-time adjustment (5) plus three ticks of drift (3).
        assert_eq!(group.instance_world_position(0).y, 8.0);
    }

    #[test]
    fn visibility_gating_skips_work_but_keeps_loop_alive() {
        let (descriptor, mut scene, mut surface) = built(
            r#"{"meshes": [{
                "geometryName": "box",
                "frameMovement": {"position": {"y": 1.0}}
            }],
            "camera": {"frameMovement": {"position": {"z": -0.5}}}}"#,
        );
        let mut driver = AnimationDriver::start();
        for _ in 0..5 {
            assert!(driver.tick(&descriptor, &mut scene, &mut surface, false));
        }
        let group = scene.group_by_name("item-0").unwrap();
        assert_eq!(group.transform.position.y, 0.0);
        assert_eq!(scene.camera.transform.position.z, 0.0);
        assert_eq!(surface.presented, 0);
        assert_eq!(driver.frame(), 0);

        // Back in view: work resumes on the same loop.
        assert!(driver.tick(&descriptor, &mut scene, &mut surface, true));
        assert_eq!(surface.presented, 1);
    }

    #[test]
    fn stopped_driver_does_not_reschedule() {
        let (descriptor, mut scene, mut surface) =
            built(r#"{"meshes": [{"geometryName": "box"}]}"#);
        let mut driver = AnimationDriver::start();
        driver.stop();
        assert!(!driver.tick(&descriptor, &mut scene, &mut surface, true));
        assert_eq!(surface.presented, 0);
    }

    #[test]
    fn index_scaled_movement_spreads_across_instances() {
        let (descriptor, mut scene, mut surface) = built(
            r#"{"meshes": [{
                "geometryName": "plane",
                "count": 3,
                "indexScaled": true,
                "frameMovement": {"rotation": {"z": 0.01}}
            }]}"#,
        );
        let mut driver = AnimationDriver::start();
        for _ in 0..2 {
            let _alive =
                driver.tick(&descriptor, &mut scene, &mut surface, true);
        }
        let group = scene.group_by_name("item-0").unwrap();
        let rotation: Vec<f32> = group
            .instances
            .iter()
            .map(|i| i.transform.rotation.z)
            .collect();
        assert!((rotation[0] - 0.02).abs() < 1e-6);
        assert!((rotation[1] - 0.04).abs() < 1e-6);
        assert!((rotation[2] - 0.06).abs() < 1e-6);
        // Group transform untouched in index-scaled mode.
        assert_eq!(group.transform.rotation.z, 0.0);
    }

    #[test]
    fn camera_updates_apply_after_mesh_updates() {
        let (descriptor, mut scene, mut surface) = built(
            r#"{
                "meshes": [{"geometryName": "plane", "spacing": 100.0}],
                "camera": {
                    "swing": {"y": 50.0},
                    "frameMovement": {"position": {"z": -2.0}}
                }
            }"#,
        );
        let mut driver = AnimationDriver::start();
        let _alive = driver.tick(&descriptor, &mut scene, &mut surface, true);
        // First tick: swing evaluated at frame 0.
        assert_eq!(scene.camera.transform.position.y, 0.0);
        assert_eq!(scene.camera.transform.position.z, -2.0);

        let _alive = driver.tick(&descriptor, &mut scene, &mut surface, true);
        let expected = 100.0 * (1.0_f32 / 50.0).sin();
        assert!((scene.camera.transform.position.y - expected).abs() < 1e-4);
        assert_eq!(scene.camera.transform.position.z, -4.0);
    }

    #[test]
    fn missing_target_is_skipped_without_aborting_the_tick() {
        let (descriptor, mut scene, mut surface) = built(
            r#"{
                "meshes": [
                    {"geometryName": "wedge",
                     "frameMovement": {"position": {"x": 1.0}}},
                    {"geometryName": "box",
                     "frameMovement": {"position": {"y": 1.0}}}
                ]
            }"#,
        );
        // item-0 failed to build; its movement entry must be skipped
        // while item-1 keeps animating.
        let mut driver = AnimationDriver::start();
        assert!(driver.tick(&descriptor, &mut scene, &mut surface, true));
        assert!(scene.group_by_name("item-0").is_none());
        let group = scene.group_by_name("item-1").unwrap();
        assert_eq!(group.transform.position.y, 1.0);
    }
}
