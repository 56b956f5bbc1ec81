//! The fixed SVG wrapper around icon markup.

use crate::options::RenderOptions;
use std::borrow::Cow;

/// Wraps `paths` in a complete Lucide `<svg>` element.
///
/// `None` renders with [`RenderOptions::default`]. The class attribute is
/// only emitted when non-empty. Color and class values are attribute-escaped;
/// `paths` is trusted markup and inserted as is.
pub fn build_svg(paths: &str, options: Option<&RenderOptions>) -> String {
    let default;
    let options = match options {
        Some(options) => options,
        None => {
            default = RenderOptions::default();
            &default
        }
    };

    let class = if options.class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, escape_attr(&options.class))
    };

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round"{class}>{paths}</svg>"#,
        size = options.size,
        color = escape_attr(&options.color),
        width = options.stroke_width,
    )
}

/// Escapes a value for use inside a double-quoted attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
