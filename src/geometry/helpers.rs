//! Procedural geometry generators.
//!
//! Helpers are pure functions of the geometry parameter struct, keyed
//! by geometry kind. A lathe helper produces the 2D profile to
//! revolve; a parametric helper produces a tessellated surface grid.
//! Absent scalar parameters evaluate as zero; grid subdivisions
//! default to eight per axis.

use glam::{Vec2, Vec3};

use crate::descriptor::{GeometryParams, RangeSpec};
use crate::error::Error;
use crate::geometry::registry::GeometryKind;

const DEFAULT_SUBDIVISIONS: u32 = 8;

/// Output of a procedural helper: the first positional construction
/// argument of its geometry kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// 2D profile points for a lathed solid.
    Profile(Vec<Vec2>),
    /// Tessellated parametric surface.
    Surface(SurfaceGrid),
}

/// A parametric surface sampled on a regular uv grid, `(slices + 1) *
/// (stacks + 1)` points in row-major v order.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    /// Subdivisions on u.
    pub slices: u32,
    /// Subdivisions on v.
    pub stacks: u32,
    /// Sampled points.
    pub points: Vec<Vec3>,
}

impl SurfaceGrid {
    /// Sample point at grid coordinate `(i, j)` = `(u, v)` indices,
    /// `None` outside the `0..=slices` / `0..=stacks` grid.
    #[must_use]
    pub fn point(&self, i: u32, j: u32) -> Option<Vec3> {
        if i > self.slices || j > self.stacks {
            return None;
        }
        self.points.get((j * (self.slices + 1) + i) as usize).copied()
    }

    fn sample(
        params: &GeometryParams,
        surface: impl Fn(f32, f32) -> Vec3,
    ) -> Self {
        let slices = params.slices.unwrap_or(DEFAULT_SUBDIVISIONS).max(1);
        let stacks = params.stacks.unwrap_or(DEFAULT_SUBDIVISIONS).max(1);
        let mut points =
            Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
        for j in 0..=stacks {
            let v = j as f32 / stacks as f32;
            for i in 0..=slices {
                let u = i as f32 / slices as f32;
                points.push(surface(u, v));
            }
        }
        Self {
            slices,
            stacks,
            points,
        }
    }
}

/// Run the named helper for the given geometry kind.
///
/// Fails with [`Error::GeometryResolution`] when the kind has no
/// helpers or the name is not registered for it.
pub fn generate(
    kind: GeometryKind,
    helper: &str,
    params: &GeometryParams,
) -> Result<Generated, Error> {
    match (kind, helper) {
        (GeometryKind::Lathe, "plantPot") => {
            Ok(Generated::Profile(plant_pot(params)))
        }
        (GeometryKind::Parametric, "plane") => {
            Ok(Generated::Surface(SurfaceGrid::sample(params, |u, v| {
                flat_plane(params, u, v)
            })))
        }
        (GeometryKind::Parametric, "basket") => {
            Ok(Generated::Surface(SurfaceGrid::sample(params, |u, v| {
                basket(params, u, v)
            })))
        }
        (GeometryKind::Parametric, "bentPicture") => {
            Ok(Generated::Surface(SurfaceGrid::sample(params, |u, v| {
                bent_picture(params, u, v)
            })))
        }
        (GeometryKind::Parametric, "folderBox") => {
            Ok(Generated::Surface(SurfaceGrid::sample(params, |u, v| {
                folder_box(params, u, v)
            })))
        }
        (GeometryKind::Parametric, "trolley") => {
            Ok(Generated::Surface(SurfaceGrid::sample(params, |u, v| {
                trolley(params, u, v)
            })))
        }
        (GeometryKind::Parametric, "rail") => {
            Ok(Generated::Surface(SurfaceGrid::sample(params, |u, v| {
                rail(params, u, v)
            })))
        }
        (kind, helper) => Err(Error::GeometryResolution(format!(
            "unknown geometry helper `{helper}` for kind `{}`",
            kind.name()
        ))),
    }
}

fn scalar(value: Option<f32>) -> f32 {
    value.unwrap_or(0.0)
}

fn range(params: &GeometryParams) -> RangeSpec {
    params.range.unwrap_or_default()
}

/// Sinusoidal pot profile: radius swings with the sample index.
fn plant_pot(params: &GeometryParams) -> Vec<Vec2> {
    let segments = params.segments.unwrap_or(DEFAULT_SUBDIVISIONS);
    let curvature = scalar(params.curvature);
    let width = scalar(params.width);
    let height = scalar(params.height);
    (0..segments)
        .map(|i| {
            let i = i as f32;
            Vec2::new((i * curvature).sin() * width, i * height)
        })
        .collect()
}

fn flat_plane(params: &GeometryParams, u: f32, v: f32) -> Vec3 {
    Vec3::new(u * scalar(params.width), v * scalar(params.height), 0.0)
}

fn basket(params: &GeometryParams, u: f32, v: f32) -> Vec3 {
    let mut z = 0.0;
    if range(params).contains(u, v) {
        z += scalar(params.depth);
    }
    Vec3::new(u * scalar(params.width), v * scalar(params.height), z)
}

fn bent_picture(params: &GeometryParams, u: f32, v: f32) -> Vec3 {
    Vec3::new(
        u * scalar(params.width),
        v * scalar(params.height),
        (v + u).sin() * scalar(params.curvature),
    )
}

fn folder_box(params: &GeometryParams, u: f32, v: f32) -> Vec3 {
    let depth = scalar(params.depth);
    let mut y = v * scalar(params.height);
    let mut z = (v * depth).sin() * scalar(params.curvature);
    if range(params).contains(u, v) {
        y += depth;
        z -= depth;
    }
    Vec3::new(u * scalar(params.width), y, z)
}

fn trolley(params: &GeometryParams, u: f32, v: f32) -> Vec3 {
    let depth = scalar(params.depth);
    let mut y = v * scalar(params.height);
    let mut z = (v * depth).atan() * scalar(params.curvature);
    if range(params).contains(u, v) {
        y += depth;
        z -= depth;
    }
    Vec3::new(u * scalar(params.width), y, z)
}

fn rail(params: &GeometryParams, u: f32, v: f32) -> Vec3 {
    let width = scalar(params.width);
    let depth = scalar(params.depth);
    let mut z = depth;
    if range(params).contains(u, v) {
        z += (depth * u).sin() * width;
    }
    Vec3::new(u.sin() * width, v * scalar(params.height), z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(json: &str) -> GeometryParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn plant_pot_profile_follows_the_sine() {
        let p = params(
            r#"{"segments":4,"curvature":0.5,"width":2.0,"height":1.5}"#,
        );
        let Generated::Profile(points) =
            generate(GeometryKind::Lathe, "plantPot", &p).unwrap()
        else {
            panic!("expected a profile");
        };
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Vec2::new(0.0, 0.0));
        let expected_x = (2.0_f32 * 0.5).sin() * 2.0;
        assert!((points[2].x - expected_x).abs() < 1e-6);
        assert!((points[2].y - 3.0).abs() < 1e-6);
    }

    #[test]
    fn bent_picture_curves_on_z() {
        let p = params(
            r#"{"width":4.0,"height":2.0,"curvature":1.0,"slices":2,"stacks":2}"#,
        );
        let Generated::Surface(grid) =
            generate(GeometryKind::Parametric, "bentPicture", &p).unwrap()
        else {
            panic!("expected a surface");
        };
        assert_eq!(grid.points.len(), 9);
        // Corner (u=0, v=0): flat.
        assert_eq!(grid.point(0, 0), Some(Vec3::ZERO));
        // Off-grid coordinates resolve to nothing.
        assert_eq!(grid.point(3, 0), None);
        assert_eq!(grid.point(0, 3), None);
        // Center (u=0.5, v=0.5): z = sin(1.0).
        let center = grid.point(1, 1).unwrap();
        assert!((center.x - 2.0).abs() < 1e-6);
        assert!((center.y - 1.0).abs() < 1e-6);
        assert!((center.z - 1.0_f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn basket_displaces_only_inside_the_range() {
        let p = params(
            r#"{"width":1.0,"height":1.0,"depth":3.0,"slices":4,"stacks":4,
                "range":{"startX":0.3,"endX":0.7,"startY":0.3,"endY":0.7}}"#,
        );
        let Generated::Surface(grid) =
            generate(GeometryKind::Parametric, "basket", &p).unwrap()
        else {
            panic!("expected a surface");
        };
        // Center (u=v=0.5) is inside the range; corner is not.
        assert_eq!(grid.point(2, 2).unwrap().z, 3.0);
        assert_eq!(grid.point(0, 0).unwrap().z, 0.0);
    }

    #[test]
    fn unknown_helper_fails_resolution() {
        let err = generate(
            GeometryKind::Parametric,
            "pyramid",
            &GeometryParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::GeometryResolution(_)));

        // A valid helper name under the wrong kind also fails.
        let err = generate(
            GeometryKind::Lathe,
            "bentPicture",
            &GeometryParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::GeometryResolution(_)));
    }
}
