// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Declarative, interaction-driven 3D scene gallery engine.
//!
//! Vitrina turns a data-only scene description (background, camera,
//! lights, mesh specifications) into a live scene graph and drives a
//! continuous per-frame update loop that applies declared per-frame
//! transform deltas to named scene objects and the camera. A gallery
//! layer cycles through a list of such descriptions, tearing down and
//! rebuilding the scene on every switch.
//!
//! # Key entry points
//!
//! - [`engine::GalleryEngine`] - the top-level engine
//! - [`descriptor::SceneDescriptor`] - the resolved scene description
//! - [`scene::builder`] - descriptor-to-scene-graph construction
//! - [`driver::AnimationDriver`] - the per-frame update loop
//!
//! # Architecture
//!
//! Descriptor documents are JSON. A base (default) document is
//! deep-merged with a document-specific override (override wins,
//! arrays replaced wholesale) and deserialized into a typed
//! [`descriptor::SceneDescriptor`]. Two factories turn descriptor
//! fragments into renderable handles: [`geometry`] resolves a geometry
//! kind plus parameters (optionally through a procedural helper) and
//! [`material`] resolves color/material-kind/texture. The scene
//! builder names every placed mesh group `item-<index>` and every
//! light `light-<index>`; those names are the only handles the
//! animation driver uses for per-frame lookup.
//!
//! Rasterization is a collaborator, not part of this crate: the engine
//! presents through the [`surface::RenderSurface`] trait and loads
//! textures through the [`assets::AssetLoader`] trait. Everything runs
//! on one cooperative loop - pointer events, asset completions, and
//! per-frame ticks interleave but never run concurrently.

pub mod assets;
pub mod descriptor;
pub mod driver;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod material;
pub mod scene;
pub mod surface;
