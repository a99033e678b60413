//! Scene background: a flat color or an image reference.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background of a scene.
///
/// Descriptor documents write either `{"image": "..."}`,
/// `{"color": "#rrggbb"}`, or a bare color string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Background {
    /// Async-loaded image background.
    Image {
        /// Image asset name, resolved by the asset loader.
        image: String,
    },
    /// Flat color background, as an object.
    Color {
        /// Hex color string.
        color: String,
    },
    /// Flat color background, as a bare string.
    Flat(String),
}

impl Background {
    /// The color string, if this is a color background.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Color { color } | Self::Flat(color) => Some(color),
            Self::Image { .. } => None,
        }
    }

    /// The image asset name, if this is an image background.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Image { image } => Some(image),
            _ => None,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Flat("#000000".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_wire_forms() {
        let image: Background =
            serde_json::from_str(r#"{"image":"sky.jpg"}"#).unwrap();
        assert_eq!(image.image(), Some("sky.jpg"));
        assert_eq!(image.color(), None);

        let color: Background =
            serde_json::from_str(r##"{"color":"#102030"}"##).unwrap();
        assert_eq!(color.color(), Some("#102030"));

        let flat: Background =
            serde_json::from_str(r##""#ffffff""##).unwrap();
        assert_eq!(flat.color(), Some("#ffffff"));
    }
}
