//! Static geometry-kind registry.
//!
//! Maps each supported geometry kind to its ordered construction
//! parameter names. This is deliberately static data rather than
//! runtime introspection of a rendering library: the ordered lists
//! below are the contract the factory extracts descriptor parameters
//! against.

use crate::error::Error;

/// Supported geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Rectangular cuboid.
    Box,
    /// Flat rectangle.
    Plane,
    /// UV sphere.
    Sphere,
    /// Cylinder with independent top/bottom radii.
    Cylinder,
    /// Cone.
    Cone,
    /// Torus.
    Torus,
    /// Torus knot.
    TorusKnot,
    /// Solid of revolution built from a 2D profile.
    Lathe,
    /// Surface sampled from a parametric generator.
    Parametric,
}

impl GeometryKind {
    /// Parse a descriptor geometry name.
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            "box" => Ok(Self::Box),
            "plane" => Ok(Self::Plane),
            "sphere" => Ok(Self::Sphere),
            "cylinder" => Ok(Self::Cylinder),
            "cone" => Ok(Self::Cone),
            "torus" => Ok(Self::Torus),
            "torusKnot" => Ok(Self::TorusKnot),
            "lathe" => Ok(Self::Lathe),
            "parametric" => Ok(Self::Parametric),
            other => Err(Error::GeometryResolution(format!(
                "unknown geometry kind `{other}`"
            ))),
        }
    }

    /// The descriptor name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Plane => "plane",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Torus => "torus",
            Self::TorusKnot => "torusKnot",
            Self::Lathe => "lathe",
            Self::Parametric => "parametric",
        }
    }

    /// Ordered construction parameter names for this kind.
    ///
    /// The first name of `lathe` and `parametric` denotes the
    /// positional argument a procedural helper computes; it has no
    /// scalar representation in the parameter struct.
    #[must_use]
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Box => &[
                "width",
                "height",
                "depth",
                "widthSegments",
                "heightSegments",
                "depthSegments",
            ],
            Self::Plane => {
                &["width", "height", "widthSegments", "heightSegments"]
            }
            Self::Sphere => &["radius", "widthSegments", "heightSegments"],
            Self::Cylinder => {
                &["radiusTop", "radiusBottom", "height", "radialSegments"]
            }
            Self::Cone => &["radius", "height", "radialSegments"],
            Self::Torus => {
                &["radius", "tube", "radialSegments", "tubularSegments", "arc"]
            }
            Self::TorusKnot => {
                &["radius", "tube", "tubularSegments", "radialSegments"]
            }
            Self::Lathe => &["points", "segments", "phiStart", "phiLength"],
            Self::Parametric => &["func", "slices", "stacks"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in [
            GeometryKind::Box,
            GeometryKind::Plane,
            GeometryKind::Sphere,
            GeometryKind::Cylinder,
            GeometryKind::Cone,
            GeometryKind::Torus,
            GeometryKind::TorusKnot,
            GeometryKind::Lathe,
            GeometryKind::Parametric,
        ] {
            assert_eq!(GeometryKind::parse(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_fails_resolution() {
        let err = GeometryKind::parse("dodecahedron").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::GeometryResolution(_)
        ));
    }

    #[test]
    fn box_parameters_are_ordered() {
        assert_eq!(
            GeometryKind::Box.parameter_names()[..3],
            ["width", "height", "depth"]
        );
    }
}
