//! Pointer and click handling.

use crate::assets::AssetLoader;
use crate::error::Error;
use crate::gallery::{ClickAction, ClickTarget};
use crate::interaction::{DragOutcome, PointerEvent};
use crate::material::Color;
use crate::scene::BackgroundState;
use crate::surface::RenderSurface;

use super::GalleryEngine;

impl<S: RenderSurface, A: AssetLoader> GalleryEngine<S, A> {
    /// Forward a pointer event from the render surface. Drag pans set
    /// the camera x/y absolutely.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let DragOutcome::Pan { x, y } = self.drag.handle(event) {
            self.scene.camera.transform.position.x = x;
            self.scene.camera.transform.position.y = y;
        }
    }

    /// Route a click through the selector strategy.
    pub fn handle_click(&mut self, target: &ClickTarget) -> Result<(), Error> {
        match self.selectors.interpret(target) {
            ClickAction::SetColor(color) => {
                self.set_color(&color);
                Ok(())
            }
            ClickAction::Switch(direction) => self.switch(direction),
            ClickAction::None => Ok(()),
        }
    }

    /// Recolor the background and every light, then render once so the
    /// change shows even while the scene is out of view.
    fn set_color(&mut self, color: &str) {
        let parsed = Color::parse(color);
        self.scene.background = BackgroundState::Color(parsed);
        for light in self.scene.lights_mut() {
            light.color = parsed;
        }
        self.surface.present(&self.scene);
    }
}
