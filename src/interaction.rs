//! Pointer-drag tracking for camera panning.
//!
//! A press records the drag origin, carrying over the accumulated
//! offset from previous drags so repeated drags compose. While
//! pressed, each move produces an absolute camera x/y from the
//! origin-relative delta - direct manipulation, not drift. Release or
//! leave stores the pointer position as the baseline for the next
//! drag's origin adjustment.

use glam::Vec2;

/// A pointer event on the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a position.
    Pressed(Vec2),
    /// Button released at a position.
    Released(Vec2),
    /// Pointer left the surface at a position.
    Left(Vec2),
    /// Pointer moved to a position.
    Moved(Vec2),
}

/// Camera effect of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing to apply.
    None,
    /// Set the camera x/y to these values.
    Pan {
        /// New camera x.
        x: f32,
        /// New camera y.
        y: f32,
    },
}

/// Pointer press/move/release state machine.
#[derive(Debug, Default)]
pub struct DragController {
    pressed: bool,
    origin: Option<Vec2>,
    baseline: Option<Vec2>,
}

impl DragController {
    /// A controller with no drag history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> DragOutcome {
        match event {
            PointerEvent::Pressed(at) => {
                self.pressed = true;
                let origin = self.origin.get_or_insert(at);
                if let Some(baseline) = self.baseline {
                    *origin += at - baseline;
                }
                DragOutcome::None
            }
            PointerEvent::Moved(at) => {
                if !self.pressed {
                    return DragOutcome::None;
                }
                match self.origin {
                    Some(origin) => DragOutcome::Pan {
                        x: -(origin.x - at.x),
                        y: origin.y - at.y,
                    },
                    None => DragOutcome::None,
                }
            }
            PointerEvent::Released(at) | PointerEvent::Left(at) => {
                self.pressed = false;
                self.baseline = Some(at);
                DragOutcome::None
            }
        }
    }
}
