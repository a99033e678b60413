//! Material/texture factory: descriptor fragment to renderable
//! surface handle.
//!
//! Default material parameters are `{color, transparent: true,
//! double-sided}`, overridden and extended by the descriptor's
//! material parameters. Textures are attached later, once their asynchronous
//! load resolves; until then (and permanently, if the load fails) the
//! material stays color-only.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::descriptor::{MaterialParams, RepeatSpec};

/// Linear RGB color, components in `0..=1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

/// Opaque white.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

impl Color {
    /// Parse a `#rrggbb` or `#rgb` hex string. Unparseable input
    /// degrades to white with a warning rather than failing the mesh.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_else(|| {
            log::warn!("unparseable color `{text}`, using white");
            WHITE
        })
    }

    fn try_parse(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        // Byte-indexed slicing below; non-ASCII input is unparseable
        // anyway and must not panic on a char boundary.
        if !hex.is_ascii() {
            return None;
        }
        let (r, g, b) = match hex.len() {
            6 => (
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            ),
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17)
                };
                (digit(0)?, digit(1)?, digit(2)?)
            }
            _ => return None,
        };
        Some(Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        })
    }
}

/// Supported material kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialKind {
    /// Diffuse-only shading.
    #[default]
    Lambert,
    /// Unlit flat color/texture.
    Basic,
    /// Specular highlights.
    Phong,
    /// Roughness/metalness shading.
    Standard,
}

impl MaterialKind {
    /// Parse a descriptor material name. Unknown names degrade to
    /// `Lambert` with a warning; material resolution is never fatal to
    /// a mesh.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "lambert" => Self::Lambert,
            "basic" => Self::Basic,
            "phong" => Self::Phong,
            "standard" => Self::Standard,
            other => {
                log::warn!("unknown material kind `{other}`, using lambert");
                Self::Lambert
            }
        }
    }
}

/// A decoded texture, delivered by the asset loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Source asset name.
    pub source: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data.
    pub pixels: Vec<u8>,
    /// Wrap-and-repeat tiling factors, configured at attach time.
    pub repeat: Option<(f32, f32)>,
}

/// A renderable material handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Shading kind.
    pub kind: MaterialKind,
    /// Base color.
    pub color: Color,
    /// Alpha blending enabled.
    pub transparent: bool,
    /// Render both faces.
    pub double_sided: bool,
    /// Uniform opacity.
    pub opacity: f32,
    /// Wireframe rendering.
    pub wireframe: bool,
    /// Flat shading.
    pub flat_shading: bool,
    /// Surface texture, attached once its load resolves.
    pub map: Option<Texture>,
}

impl Material {
    /// Attach a loaded texture, configuring tiling first when
    /// requested.
    pub fn attach_texture(
        &mut self,
        mut texture: Texture,
        repeat: Option<RepeatSpec>,
    ) {
        texture.repeat = repeat.map(|r| (r.width, r.height));
        self.map = Some(texture);
    }
}

/// Build a color-only material handle from descriptor fields.
#[must_use]
pub fn build(
    color: &str,
    material_name: &str,
    params: &MaterialParams,
) -> Material {
    Material {
        kind: MaterialKind::parse(material_name),
        color: Color::parse(color),
        transparent: params.transparent.unwrap_or(true),
        double_sided: params.double_sided.unwrap_or(true),
        opacity: params.opacity.unwrap_or(1.0),
        wireframe: params.wireframe.unwrap_or(false),
        flat_shading: params.flat_shading.unwrap_or(false),
        map: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_transparent_and_double_sided() {
        let material =
            build("#ff0000", "lambert", &MaterialParams::default());
        assert_eq!(material.kind, MaterialKind::Lambert);
        assert!(material.transparent);
        assert!(material.double_sided);
        assert_eq!(material.opacity, 1.0);
        assert!(material.map.is_none());
        assert!((material.color.r - 1.0).abs() < 1e-6);
        assert_eq!(material.color.g, 0.0);
    }

    #[test]
    fn spec_parameters_override_defaults() {
        let params: MaterialParams = serde_json::from_str(
            r#"{"transparent":false,"opacity":0.5,"wireframe":true}"#,
        )
        .unwrap();
        let material = build("#ffffff", "basic", &params);
        assert_eq!(material.kind, MaterialKind::Basic);
        assert!(!material.transparent);
        assert_eq!(material.opacity, 0.5);
        assert!(material.wireframe);
    }

    #[test]
    fn short_hex_and_bad_colors() {
        let short = Color::parse("#fff");
        assert_eq!(short, WHITE);
        let bad = Color::parse("chartreuse");
        assert_eq!(bad, WHITE);
        // Multi-byte characters can satisfy the byte-length check;
        // they must degrade like any other bad input.
        assert_eq!(Color::parse("#a€ab"), WHITE);
        assert_eq!(Color::parse("#€"), WHITE);
        let gray = Color::parse("#808080");
        assert!((gray.r - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn attach_texture_configures_tiling_first() {
        let mut material =
            build("#ffffff", "lambert", &MaterialParams::default());
        let texture = Texture {
            source: "ground.jpg".to_owned(),
            width: 4,
            height: 4,
            pixels: vec![0; 64],
            repeat: None,
        };
        material.attach_texture(
            texture,
            Some(RepeatSpec {
                width: 4.0,
                height: 32.0,
            }),
        );
        let map = material.map.unwrap();
        assert_eq!(map.repeat, Some((4.0, 32.0)));
    }

    #[test]
    fn unknown_material_kind_degrades_to_lambert() {
        assert_eq!(MaterialKind::parse("velvet"), MaterialKind::Lambert);
    }
}
