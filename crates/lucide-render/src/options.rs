//! Rendering options.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Default icon size in pixels.
pub const DEFAULT_SIZE: u32 = 24;

/// Default stroke color.
pub const DEFAULT_COLOR: &str = "currentColor";

/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Options applied when rendering an icon.
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// use lucide_render::RenderOptions;
///
/// let options: RenderOptions = serde_json::from_str(r#"{"size": 16}"#).unwrap();
/// assert_eq!(options, RenderOptions::default().with_size(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Width and height in pixels.
    pub size: u32,
    /// Stroke color.
    pub color: String,
    /// Stroke width.
    pub stroke_width: u32,
    /// CSS class attribute; omitted from the markup when empty.
    pub class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            class: String::new(),
        }
    }
}

impl RenderOptions {
    /// Creates options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the CSS class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Builds options from a loosely typed key/value map, as handed over by
    /// template engines.
    ///
    /// Recognized keys are `size`, `color`, `strokeWidth` and `class`.
    /// Unknown keys, and values of the wrong type, are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "size" => {
                    if let Some(size) = as_u32(value) {
                        options.size = size;
                    }
                }
                "color" => {
                    if let Some(color) = value.as_str() {
                        options.color = color.to_string();
                    }
                }
                "strokeWidth" => {
                    if let Some(width) = as_u32(value) {
                        options.stroke_width = width;
                    }
                }
                "class" => {
                    if let Some(class) = value.as_str() {
                        options.class = class.to_string();
                    }
                }
                _ => {
                    tracing::trace!(key = %key, "ignoring unknown render option");
                }
            }
        }
        options
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}
