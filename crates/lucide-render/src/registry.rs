//! Name to render-function lookup.
//!
//! A [`Registry`] is built once with a [`RegistryBuilder`] and is read-only
//! afterwards, so it can be shared across threads behind a plain reference
//! or an `Arc`.

use crate::options::RenderOptions;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use std::fmt;

/// A function that renders one icon.
pub type RenderFn = fn(Option<&RenderOptions>) -> String;

/// Deprecation data attached to an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    /// Free-text reason; may be empty.
    pub reason: SmolStr,
}

impl Deprecation {
    /// Creates a deprecation with the given reason.
    pub fn new(reason: impl Into<SmolStr>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Clone)]
struct Entry {
    render: RenderFn,
    /// Set for aliases: the name of the icon they stand for.
    target: Option<SmolStr>,
    deprecation: Option<Deprecation>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("target", &self.target)
            .field("deprecation", &self.deprecation)
            .finish_non_exhaustive()
    }
}

/// Collects registrations for a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: IndexMap<SmolStr, Entry, FxBuildHasher>,
    duplicates: Vec<SmolStr>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an icon under `name`.
    pub fn register(&mut self, name: impl Into<SmolStr>, render: RenderFn) -> &mut Self {
        self.insert(
            name.into(),
            Entry {
                render,
                target: None,
                deprecation: None,
            },
        )
    }

    /// Registers `name` as an alias of `target`, rendering with the target's
    /// function.
    pub fn register_alias(
        &mut self,
        name: impl Into<SmolStr>,
        target: impl Into<SmolStr>,
        render: RenderFn,
        deprecation: Option<&str>,
    ) -> &mut Self {
        self.insert(
            name.into(),
            Entry {
                render,
                target: Some(target.into()),
                deprecation: deprecation.map(Deprecation::new),
            },
        )
    }

    fn insert(&mut self, name: SmolStr, entry: Entry) -> &mut Self {
        if self.entries.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.entries.insert(name, entry);
        }
        self
    }

    /// Names registered more than once so far, in the order they repeated.
    pub fn duplicates(&self) -> &[SmolStr] {
        &self.duplicates
    }

    /// Finishes the registry. The first registration of a name wins and
    /// every later one is reported as a warning.
    pub fn build(self) -> Registry {
        for name in &self.duplicates {
            tracing::warn!(name = %name, "ignoring duplicate icon registration");
        }
        Registry {
            entries: self.entries,
        }
    }
}

/// An immutable name to render-function table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<SmolStr, Entry, FxBuildHasher>,
}

impl Registry {
    /// Builds a registry holding every icon bundled with this crate.
    pub fn bundled() -> Self {
        let mut builder = RegistryBuilder::new();
        crate::icons::register_all(&mut builder);
        builder.build()
    }

    /// Returns the render function registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<RenderFn> {
        self.entries.get(name).map(|entry| entry.render)
    }

    /// Renders `name`, or returns an empty string if it is not registered.
    pub fn render(&self, name: &str, options: Option<&RenderOptions>) -> String {
        match self.lookup(name) {
            Some(render) => render(options),
            None => {
                tracing::debug!(name, "icon not found");
                String::new()
            }
        }
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered names, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(SmolStr::as_str)
    }

    /// Deprecation data for `name`, if it is a deprecated alias.
    pub fn deprecation(&self, name: &str) -> Option<&Deprecation> {
        self.entries
            .get(name)
            .and_then(|entry| entry.deprecation.as_ref())
    }

    /// The icon an alias stands for; `None` for icons and unknown names.
    pub fn resolve_alias(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|entry| entry.target.as_deref())
    }
}
