//! Output targets.

use crate::ir::IconSet;
use lucide_source::Icon;
use serde::Serialize;

/// Turns an [`IconSet`] into the text of one output artifact.
///
/// Emitters are pure: the same set always produces the same bytes.
pub trait Emitter {
    /// Renders the whole artifact.
    fn emit(&self, set: &IconSet) -> String;

    /// Extension of the artifact this emitter produces, without the dot.
    fn file_extension(&self) -> &'static str;
}

/// Emits a pretty-printed JSON manifest of the icon set.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

#[derive(Serialize)]
struct Manifest<'a> {
    icons: &'a [Icon],
}

impl Emitter for JsonEmitter {
    fn emit(&self, set: &IconSet) -> String {
        let manifest = Manifest { icons: set.icons() };
        // Serializing plain strings, bools and vectors cannot fail.
        let mut json = serde_json::to_string_pretty(&manifest).unwrap_or_default();
        json.push('\n');
        json
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
