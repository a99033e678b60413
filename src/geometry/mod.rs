//! Geometry factory: descriptor fragment to renderable geometry handle.
//!
//! The factory resolves a geometry kind through the static
//! [`registry`], extracts that kind's ordered parameters by name from
//! the typed parameter struct (absent parameters pass through as
//! [`GeometryArg::Missing`], the engine's own default), and runs an
//! optional procedural [`helpers`] generator to compute the first
//! positional construction argument.

pub mod helpers;
pub mod registry;

use glam::Vec2;
pub use helpers::{Generated, SurfaceGrid};
pub use registry::GeometryKind;

use crate::descriptor::MeshSpec;
use crate::error::Error;

/// One ordered construction argument of a geometry handle.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryArg {
    /// Parameter absent from the descriptor; the engine default
    /// applies.
    Missing,
    /// Plain numeric parameter.
    Scalar(f32),
    /// Helper-generated lathe profile.
    Profile(Vec<Vec2>),
    /// Helper-generated parametric surface.
    Surface(SurfaceGrid),
}

/// A renderable geometry handle: kind plus ordered construction
/// arguments per the registry's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Resolved geometry kind.
    pub kind: GeometryKind,
    /// Arguments in registry order.
    pub args: Vec<GeometryArg>,
}

impl Geometry {
    /// Scalar argument at `index`, if present.
    #[must_use]
    pub fn scalar(&self, index: usize) -> Option<f32> {
        match self.args.get(index) {
            Some(GeometryArg::Scalar(v)) => Some(*v),
            _ => None,
        }
    }
}

/// Build a geometry handle for a mesh spec.
///
/// Fails with [`Error::GeometryResolution`] on an unknown kind or
/// helper; the scene builder surfaces that as a per-mesh failure
/// without aborting the rest of the scene.
pub fn build(spec: &MeshSpec) -> Result<Geometry, Error> {
    let kind = GeometryKind::parse(&spec.geometry_name)?;
    let mut args: Vec<GeometryArg> = kind
        .parameter_names()
        .iter()
        .map(|name| {
            spec.geometry
                .scalar(name)
                .map_or(GeometryArg::Missing, GeometryArg::Scalar)
        })
        .collect();

    if let Some(helper) = &spec.geometry_helper {
        let generated = helpers::generate(kind, helper, &spec.geometry)?;
        args[0] = match generated {
            Generated::Profile(points) => GeometryArg::Profile(points),
            Generated::Surface(grid) => GeometryArg::Surface(grid),
        };
    }

    Ok(Geometry { kind, args })
}
