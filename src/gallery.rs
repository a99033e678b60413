//! Gallery switching and click routing.
//!
//! A gallery holds an ordered list of override documents and a current
//! index; `next`/`prev` wrap circularly. Which clicks mean "change
//! color" versus "advance the gallery" is decided by an injected
//! [`SelectorStrategy`] reading structural class-name markers and data
//! attributes off the click target, so slideshow variants differ only
//! in the strategy they plug in, not in engine subclasses.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::error::Error;

/// Gallery traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the next entry.
    Next,
    /// Go back to the previous entry.
    Prev,
}

impl Direction {
    /// Parse a `direction` data-attribute value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            _ => None,
        }
    }
}

/// An ordered list of alternate override documents plus the current
/// index.
#[derive(Debug)]
pub struct Gallery {
    examples: Vec<Value>,
    index: usize,
}

impl Gallery {
    /// Gallery over parsed override documents.
    ///
    /// Fails with [`Error::Config`] when the list is empty.
    pub fn new(examples: Vec<Value>) -> Result<Self, Error> {
        if examples.is_empty() {
            return Err(Error::Config(
                "gallery example list is empty".to_owned(),
            ));
        }
        Ok(Self { examples, index: 0 })
    }

    /// Parse a serialized example list.
    pub fn from_json(examples_doc: &str) -> Result<Self, Error> {
        let parsed: Vec<Value> = serde_json::from_str(examples_doc)?;
        Self::new(parsed)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the gallery has no entries. Never true for a
    /// constructed gallery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Current entry index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current entry's override document.
    #[must_use]
    pub fn current(&self) -> &Value {
        &self.examples[self.index]
    }

    /// Move circularly and return the new entry's override document.
    pub fn advance(&mut self, direction: Direction) -> &Value {
        self.index = match direction {
            Direction::Next => {
                if self.index + 1 == self.examples.len() {
                    0
                } else {
                    self.index + 1
                }
            }
            Direction::Prev => {
                if self.index == 0 {
                    self.examples.len() - 1
                } else {
                    self.index - 1
                }
            }
        };
        self.current()
    }
}

/// Structural description of a clicked element: its class names and
/// data attributes.
#[derive(Debug, Clone, Default)]
pub struct ClickTarget {
    /// CSS class names on the element.
    pub classes: Vec<String>,
    /// `data-*` attributes on the element.
    pub dataset: FxHashMap<String, String>,
}

impl ClickTarget {
    /// Whether the element carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// A data attribute value.
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }
}

/// What a click means to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Not an engine-relevant click.
    None,
    /// Recolor the scene background and lights.
    SetColor(String),
    /// Switch the gallery entry.
    Switch(Direction),
}

/// Interprets click targets for one slideshow variant.
pub trait SelectorStrategy {
    /// Classify a click.
    fn interpret(&self, target: &ClickTarget) -> ClickAction;
}

/// Default selector set used by the slideshow markup.
#[derive(Debug, Clone)]
pub struct SlideshowSelectors {
    /// Class marking color-switch elements.
    pub color_switch_class: String,
    /// Class marking gallery navigation buttons.
    pub nav_button_class: String,
}

impl Default for SlideshowSelectors {
    fn default() -> Self {
        Self {
            color_switch_class: "slideshow__color-switch".to_owned(),
            nav_button_class: "slideshow__nav-button".to_owned(),
        }
    }
}

impl SelectorStrategy for SlideshowSelectors {
    fn interpret(&self, target: &ClickTarget) -> ClickAction {
        if target.has_class(&self.color_switch_class) {
            if let Some(color) = target.data("color") {
                return ClickAction::SetColor(color.to_owned());
            }
        }
        if target.has_class(&self.nav_button_class) {
            if let Some(direction) =
                target.data("direction").and_then(Direction::parse)
            {
                return ClickAction::Switch(direction);
            }
        }
        ClickAction::None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn gallery_of(n: usize) -> Gallery {
        let examples = (0..n).map(|i| json!({"visibilityOffset": i})).collect();
        Gallery::new(examples).unwrap()
    }

    #[test]
    fn next_wraps_to_zero_and_prev_wraps_to_last() {
        let mut gallery = gallery_of(3);
        assert_eq!(gallery.index(), 0);
        let _doc = gallery.advance(Direction::Next);
        let _doc = gallery.advance(Direction::Next);
        assert_eq!(gallery.index(), 2);
        let _doc = gallery.advance(Direction::Next);
        assert_eq!(gallery.index(), 0);
        let _doc = gallery.advance(Direction::Prev);
        assert_eq!(gallery.index(), 2);
    }

    #[test]
    fn empty_example_list_is_a_config_error() {
        assert!(matches!(
            Gallery::from_json("[]"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Gallery::from_json("{oops"),
            Err(Error::Config(_))
        ));
    }

    fn target(class: &str, data: &[(&str, &str)]) -> ClickTarget {
        ClickTarget {
            classes: vec![class.to_owned()],
            dataset: data
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }

    #[test]
    fn selectors_route_clicks_by_class_and_data() {
        let selectors = SlideshowSelectors::default();
        assert_eq!(
            selectors.interpret(&target(
                "slideshow__nav-button",
                &[("direction", "prev")]
            )),
            ClickAction::Switch(Direction::Prev)
        );
        assert_eq!(
            selectors.interpret(&target(
                "slideshow__color-switch",
                &[("color", "#123456")]
            )),
            ClickAction::SetColor("#123456".to_owned())
        );
        assert_eq!(
            selectors.interpret(&target("slideshow__title", &[])),
            ClickAction::None
        );
        // Nav button with an unreadable direction does nothing.
        assert_eq!(
            selectors.interpret(&target(
                "slideshow__nav-button",
                &[("direction", "sideways")]
            )),
            ClickAction::None
        );
    }
}
