//! The intermediate representation handed to emitters.

use crate::error::GenerateError;
use crate::rust::{fn_ident, variant_ident};
use lucide_source::Icon;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smol_str::SmolStr;

/// An ordered, validated collection of icons.
///
/// Icons keep the order they were added in (the driver adds them sorted by
/// file name). Every icon name and alias name is unique across the set, and
/// so are the Rust identifiers derived from each icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IconSet {
    icons: Vec<Icon>,
}

impl IconSet {
    /// Builds a set from icons, rejecting name collisions.
    ///
    /// Identifiers are compared in the form the Rust emitter writes them, so
    /// `self` (`SelfIcon`, `self_icon`) collides with `self-icon`.
    pub fn new(icons: Vec<Icon>) -> Result<Self, GenerateError> {
        let mut names: FxHashMap<SmolStr, SmolStr> = FxHashMap::default();
        let mut variants: FxHashMap<SmolStr, SmolStr> = FxHashMap::default();
        let mut functions: FxHashMap<SmolStr, SmolStr> = FxHashMap::default();

        for icon in &icons {
            claim(&mut variants, "identifier", variant_ident(icon).into(), icon)?;
            claim(&mut functions, "identifier", fn_ident(&icon.name).into(), icon)?;
            for name in icon.names() {
                claim(&mut names, "name", SmolStr::new(name), icon)?;
            }
        }

        Ok(Self { icons })
    }

    /// Returns the icons in emission order.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Number of icons (aliases not counted).
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if the set has no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Number of aliases across all icons.
    pub fn alias_count(&self) -> usize {
        self.icons.iter().map(|icon| icon.aliases.len()).sum()
    }
}

/// Records `value` as taken by `icon`, failing if another icon holds it.
fn claim(
    seen: &mut FxHashMap<SmolStr, SmolStr>,
    kind: &'static str,
    value: SmolStr,
    icon: &Icon,
) -> Result<(), GenerateError> {
    match seen.insert(value.clone(), icon.name.clone()) {
        Some(first) => Err(GenerateError::DuplicateName {
            kind,
            name: value,
            first,
            second: icon.name.clone(),
        }),
        None => Ok(()),
    }
}
