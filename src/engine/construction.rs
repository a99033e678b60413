//! Engine construction and teardown.

use crate::assets::AssetLoader;
use crate::descriptor::SceneDescriptor;
use crate::driver::AnimationDriver;
use crate::error::Error;
use crate::gallery::{Gallery, SelectorStrategy, SlideshowSelectors};
use crate::host::HostContext;
use crate::interaction::DragController;
use crate::scene::builder;
use crate::surface::RenderSurface;

use super::GalleryEngine;

impl<S: RenderSurface, A: AssetLoader> GalleryEngine<S, A> {
    /// Build an engine for a single scene: defaults merged with one
    /// override document, no gallery.
    pub fn new(
        host: HostContext,
        surface: S,
        assets: A,
        override_doc: &str,
    ) -> Result<Self, Error> {
        Self::construct(host, surface, assets, override_doc, None)
    }

    /// Build an engine with a gallery of alternate override documents
    /// reachable through `next`/`prev` switching.
    pub fn with_gallery(
        host: HostContext,
        surface: S,
        assets: A,
        override_doc: &str,
        examples_doc: &str,
    ) -> Result<Self, Error> {
        let gallery = Gallery::from_json(examples_doc)?;
        Self::construct(host, surface, assets, override_doc, Some(gallery))
    }

    fn construct(
        host: HostContext,
        mut surface: S,
        mut assets: A,
        override_doc: &str,
        gallery: Option<Gallery>,
    ) -> Result<Self, Error> {
        let defaults = SceneDescriptor::base_document();
        let descriptor = SceneDescriptor::resolve(&defaults, override_doc)?;
        let built =
            builder::build(&descriptor, &host, &mut surface, &mut assets);
        Ok(Self {
            defaults,
            descriptor,
            scene: built.scene,
            driver: AnimationDriver::start(),
            drag: DragController::new(),
            gallery,
            selectors: Box::new(SlideshowSelectors::default()),
            surface,
            assets,
            host,
            pending: built.pending,
        })
    }

    /// Replace the click-routing strategy.
    #[must_use]
    pub fn with_selectors(
        mut self,
        selectors: Box<dyn SelectorStrategy>,
    ) -> Self {
        self.selectors = selectors;
        self
    }

    /// Record the host's current scroll position.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.host.scroll_y = scroll_y;
    }

    /// Resize for a new container width, keeping the descriptor's
    /// aspect ratio.
    pub fn set_container_width(&mut self, width: u32) {
        self.host.container_width = width;
        let (w, h) = self.host.surface_size(self.descriptor.camera.aspect);
        self.surface.resize(w, h);
    }

    /// Mutable host context, for embedders tracking element layout.
    pub fn host_mut(&mut self) -> &mut HostContext {
        &mut self.host
    }

    /// Cancel the animation loop, then release the render surface.
    /// The order is the teardown guarantee: no tick can land on a
    /// detached surface.
    pub fn teardown(&mut self) {
        self.driver.stop();
        self.surface.detach();
    }
}
