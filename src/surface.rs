//! Render-surface capability.
//!
//! Rasterization is a collaborator of this crate, not part of it. The
//! engine drives a pixel-sized surface through this trait: resize at
//! build time, one `present` per tick, `detach` on teardown. Teardown
//! always cancels the animation driver before detaching, in that
//! order, so no frame is ever presented to a detached surface.

use crate::scene::Scene;

/// A pixel-sized presentation target.
pub trait RenderSurface {
    /// Size (or re-size) the surface in physical pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Rasterize one frame of the scene through its camera.
    fn present(&mut self, scene: &Scene);

    /// Remove the surface from its container.
    fn detach(&mut self);
}

/// Headless surface that counts frames instead of drawing them.
///
/// Backs the demo binary and tests; `presented` doubles as the
/// observable "camera-position mutation stream" when verifying that
/// exactly one animation loop is alive.
#[derive(Debug, Default)]
pub struct NullSurface {
    /// Frames presented since creation.
    pub presented: u64,
    /// Current size in physical pixels.
    pub size: (u32, u32),
    /// Whether the surface is attached to its container.
    pub attached: bool,
}

impl NullSurface {
    /// A detached, zero-sized surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for NullSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.attached = true;
    }

    fn present(&mut self, _scene: &Scene) {
        self.presented += 1;
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}
