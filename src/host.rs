//! Host environment geometry.
//!
//! The embedder owns the real viewport; it reports container width,
//! element offset, scroll position, and device pixel ratio here. The
//! engine reads these for render-surface sizing and for the animation
//! driver's visibility predicate.

/// Viewport/host geometry snapshot, kept current by the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostContext {
    /// Container width in logical pixels; drives surface sizing
    /// together with the camera aspect ratio.
    pub container_width: u32,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f32,
    /// Vertical offset of the hosting element in the page.
    pub element_top: f32,
    /// Current scroll position.
    pub scroll_y: f32,
}

impl Default for HostContext {
    fn default() -> Self {
        Self {
            container_width: 1280,
            device_pixel_ratio: 1.0,
            element_top: 0.0,
            scroll_y: 0.0,
        }
    }
}

impl HostContext {
    /// Whether the hosting element is within `offset` of the current
    /// scroll position.
    #[must_use]
    pub fn is_in_view(&self, offset: f32) -> bool {
        self.element_top - offset < self.scroll_y
            && self.element_top + offset > self.scroll_y
    }

    /// Physical surface size for the given aspect ratio.
    #[must_use]
    pub fn surface_size(&self, aspect: f32) -> (u32, u32) {
        let logical_width = self.container_width as f32;
        let logical_height = (logical_width / aspect).round();
        (
            (logical_width * self.device_pixel_ratio).round() as u32,
            (logical_height * self.device_pixel_ratio).round() as u32,
        )
    }
}
