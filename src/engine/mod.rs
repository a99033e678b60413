//! The top-level gallery engine.
//!
//! Owns exactly one active descriptor, its scene graph, and its
//! animation driver. The embedder forwards host events here: one
//! `tick` per display refresh, pointer events from the render
//! surface, and clicks classified through the injected selector
//! strategy. Gallery switches tear the current loop down (cancel,
//! then detach, in that order) before rebuilding, so a rapid
//! double-switch can never leave two loops alive.

mod construction;
mod input;

use serde_json::Value;

use crate::assets::AssetLoader;
use crate::descriptor::SceneDescriptor;
use crate::driver::{AnimationDriver, DriverState};
use crate::error::Error;
use crate::gallery::{Direction, Gallery, SelectorStrategy};
use crate::host::HostContext;
use crate::interaction::DragController;
use crate::material::Texture;
use crate::scene::builder::{self, AssetTarget, PendingAsset};
use crate::scene::{BackgroundState, Scene};
use crate::surface::RenderSurface;

/// Declarative scene engine with optional gallery cycling.
pub struct GalleryEngine<S: RenderSurface, A: AssetLoader> {
    defaults: Value,
    descriptor: SceneDescriptor,
    scene: Scene,
    driver: AnimationDriver,
    drag: DragController,
    gallery: Option<Gallery>,
    selectors: Box<dyn SelectorStrategy>,
    surface: S,
    assets: A,
    host: HostContext,
    pending: Vec<PendingAsset>,
}

impl<S: RenderSurface, A: AssetLoader> GalleryEngine<S, A> {
    /// The active descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &SceneDescriptor {
        &self.descriptor
    }

    /// The live scene graph.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Animation driver state.
    #[must_use]
    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    /// Frames of animation work performed for the active scene.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.driver.frame()
    }

    /// Current gallery index, if a gallery is configured.
    #[must_use]
    pub fn gallery_index(&self) -> Option<usize> {
        self.gallery.as_ref().map(Gallery::index)
    }

    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Texture loads still in flight for the active scene.
    #[must_use]
    pub fn pending_assets(&self) -> usize {
        self.pending.len()
    }

    /// Run one frame: pump asset completions, then drive the
    /// animation loop. Returns whether the loop stays alive.
    pub fn tick(&mut self) -> bool {
        self.pump_assets();
        let visible = self.host.is_in_view(self.descriptor.visibility_offset);
        self.driver.tick(
            &self.descriptor,
            &mut self.scene,
            &mut self.surface,
            visible,
        )
    }

    /// Switch the gallery entry, tearing down the current scene.
    ///
    /// No-op without a gallery. A resolution failure leaves the engine
    /// torn down with nothing rendered, reported to the caller.
    pub fn switch(&mut self, direction: Direction) -> Result<(), Error> {
        let Some(gallery) = self.gallery.as_mut() else {
            return Ok(());
        };
        // Cancel before detaching so no tick can land on a detached
        // surface; rebuild only after both.
        self.driver.stop();
        self.surface.detach();
        let overlay = gallery.advance(direction).clone();
        // Merged over the base defaults, never over the superseded
        // descriptor.
        let descriptor =
            SceneDescriptor::resolve_value(&self.defaults, &overlay)?;
        self.rebuild(descriptor);
        Ok(())
    }

    pub(crate) fn rebuild(&mut self, descriptor: SceneDescriptor) {
        let built = builder::build(
            &descriptor,
            &self.host,
            &mut self.surface,
            &mut self.assets,
        );
        self.scene = built.scene;
        self.pending = built.pending;
        self.descriptor = descriptor;
        self.driver = AnimationDriver::start();
    }

    /// Deliver resolved texture loads to their targets. Failures
    /// degrade to the color-only placeholder already in place.
    fn pump_assets(&mut self) {
        for event in self.assets.poll() {
            let Some(position) =
                self.pending.iter().position(|p| p.ticket == event.ticket)
            else {
                // A load that outlived its scene; the descriptor it
                // belonged to is gone.
                continue;
            };
            let pending = self.pending.remove(position);
            match event.result {
                Ok(texture) => self.attach_texture(pending.target, texture),
                Err(e) => {
                    log::warn!("texture load failed, staying color-only: {e}");
                }
            }
        }
    }

    fn attach_texture(&mut self, target: AssetTarget, texture: Texture) {
        match target {
            AssetTarget::Background => {
                self.scene.background = BackgroundState::Texture(texture);
            }
            AssetTarget::MeshGroup { name, repeat } => {
                match self.scene.group_by_name_mut(&name) {
                    Some(group) => {
                        for instance in &mut group.instances {
                            instance
                                .material
                                .attach_texture(texture.clone(), repeat);
                        }
                    }
                    None => {
                        log::warn!("texture target `{name}` missing");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::assets::MemoryLoader;
    use crate::gallery::ClickTarget;
    use crate::interaction::PointerEvent;
    use crate::material::Color;
    use crate::surface::NullSurface;

    fn engine(doc: &str) -> GalleryEngine<NullSurface, MemoryLoader> {
        GalleryEngine::new(
            HostContext::default(),
            NullSurface::new(),
            MemoryLoader::new(),
            doc,
        )
        .unwrap()
    }

    fn gallery_engine(
        doc: &str,
        examples: &str,
    ) -> GalleryEngine<NullSurface, MemoryLoader> {
        GalleryEngine::with_gallery(
            HostContext::default(),
            NullSurface::new(),
            MemoryLoader::new(),
            doc,
            examples,
        )
        .unwrap()
    }

    #[test]
    fn box_mesh_rotates_one_tenth_per_tick() {
        let mut engine = engine(
            r#"{"meshes": [{
                "geometryName": "box",
                "geometry": {"width": 1.0},
                "count": 1,
                "frameMovement": {"rotation": {"z": 0.1}}
            }]}"#,
        );
        for _ in 0..4 {
            assert!(engine.tick());
        }
        let group = engine.scene().group_by_name("item-0").unwrap();
        assert!((group.transform.rotation.z - 0.4).abs() < 1e-6);
        assert_eq!(engine.surface().presented, 4);
    }

    #[test]
    fn malformed_override_fails_construction() {
        let result = GalleryEngine::new(
            HostContext::default(),
            NullSurface::new(),
            MemoryLoader::new(),
            "{broken",
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn texture_resolves_into_placed_material() {
        let mut assets = MemoryLoader::new();
        assets.insert("tree.png", MemoryLoader::stub_texture("tree.png"));
        let mut engine = GalleryEngine::new(
            HostContext::default(),
            NullSurface::new(),
            assets,
            r#"{"meshes": [{
                "geometryName": "plane",
                "image": "tree.png",
                "repeat": {"width": 4.0, "height": 32.0}
            }]}"#,
        )
        .unwrap();

        // Node exists immediately, color-only.
        let group = engine.scene().group_by_name("item-0").unwrap();
        assert!(group.instances[0].material.map.is_none());
        assert_eq!(engine.pending_assets(), 1);

        // The load resolves on the next tick's pump.
        let _alive = engine.tick();
        let group = engine.scene().group_by_name("item-0").unwrap();
        let map = group.instances[0].material.map.as_ref().unwrap();
        assert_eq!(map.repeat, Some((4.0, 32.0)));
        assert_eq!(engine.pending_assets(), 0);
    }

    #[test]
    fn failed_texture_load_keeps_color_only_material() {
        let mut engine = engine(
            r#"{"meshes": [{
                "geometryName": "plane",
                "image": "missing.png"
            }]}"#,
        );
        let _alive = engine.tick();
        let group = engine.scene().group_by_name("item-0").unwrap();
        assert!(group.instances[0].material.map.is_none());
        assert_eq!(engine.pending_assets(), 0);
    }

    #[test]
    fn switch_resolves_over_base_defaults_not_previous_descriptor() {
        let mut engine = gallery_engine(
            r#"{"camera": {"fov": 100.0}}"#,
            r##"[
                {"camera": {"fov": 100.0}},
                {"background": "#ff0000"}
            ]"##,
        );
        assert_eq!(engine.descriptor().camera.fov, 100.0);
        engine.switch(Direction::Next).unwrap();
        // The second entry never set fov; the default returns.
        assert_eq!(engine.descriptor().camera.fov, 45.0);
        assert_eq!(engine.gallery_index(), Some(1));
    }

    #[test]
    fn rapid_double_switch_leaves_one_live_loop() {
        let mut engine = gallery_engine(
            "{}",
            r#"[
                {"camera": {"frameMovement": {"position": {"z": -1.0}}}},
                {"camera": {"frameMovement": {"position": {"z": -2.0}}}},
                {"camera": {"frameMovement": {"position": {"z": -4.0}}}}
            ]"#,
        );
        engine.switch(Direction::Next).unwrap();
        engine.switch(Direction::Next).unwrap();
        assert_eq!(engine.gallery_index(), Some(2));
        assert_eq!(engine.driver_state(), DriverState::Running);

        // Exactly one mutation stream: three ticks move the camera by
        // the third entry's delta and nothing else.
        for _ in 0..3 {
            assert!(engine.tick());
        }
        assert_eq!(engine.scene().camera.transform.position.z, -12.0);
        assert_eq!(engine.frame(), 3);
    }

    #[test]
    fn drag_sets_camera_absolutely() {
        let mut engine = engine("{}");
        engine.handle_pointer(PointerEvent::Pressed(Vec2::new(100.0, 100.0)));
        engine.handle_pointer(PointerEvent::Moved(Vec2::new(140.0, 90.0)));
        assert_eq!(engine.scene().camera.transform.position.x, 40.0);
        assert_eq!(engine.scene().camera.transform.position.y, 10.0);

        // Direct manipulation, not drift: repeating the same position
        // does not accumulate.
        engine.handle_pointer(PointerEvent::Moved(Vec2::new(140.0, 90.0)));
        assert_eq!(engine.scene().camera.transform.position.x, 40.0);
    }

    #[test]
    fn color_switch_click_recolors_background_and_lights() {
        let mut engine = engine(r#"{"lights": [{}, {"type": "point"}]}"#);
        let mut target = ClickTarget {
            classes: vec!["slideshow__color-switch".to_owned()],
            ..ClickTarget::default()
        };
        let _previous = target
            .dataset
            .insert("color".to_owned(), "#204060".to_owned());
        engine.handle_click(&target).unwrap();

        let expected = Color::parse("#204060");
        assert_eq!(
            engine.scene().background,
            BackgroundState::Color(expected)
        );
        for light in engine.scene().lights() {
            assert_eq!(light.color, expected);
        }
        // Recoloring renders once, outside the animation loop.
        assert_eq!(engine.surface().presented, 1);
    }

    #[test]
    fn nav_click_switches_the_gallery() {
        let mut engine = gallery_engine("{}", r#"[{}, {}, {}]"#);
        let mut target = ClickTarget {
            classes: vec!["slideshow__nav-button".to_owned()],
            ..ClickTarget::default()
        };
        let _previous = target
            .dataset
            .insert("direction".to_owned(), "prev".to_owned());
        engine.handle_click(&target).unwrap();
        assert_eq!(engine.gallery_index(), Some(2));
    }

    #[test]
    fn teardown_stops_the_loop_and_detaches() {
        let mut engine = engine("{}");
        assert!(engine.surface().attached);
        engine.teardown();
        assert_eq!(engine.driver_state(), DriverState::Stopped);
        assert!(!engine.surface().attached);
        assert!(!engine.tick());
    }
}
