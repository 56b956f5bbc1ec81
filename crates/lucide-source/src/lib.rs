//! Icon source reader for lucide-rs.
//!
//! This crate turns a directory of upstream Lucide assets into typed records:
//! - Name normalization (`circle-x` -> `CircleX`)
//! - SVG inner-markup extraction using a `logos` lexer
//! - Sidecar metadata (`<name>.json`) with alias and deprecation data
//! - [`Icon`] / [`Alias`] records built per SVG file
//!
//! # Example
//!
//! ```
//! use lucide_source::{extract_inner, to_pascal_case};
//!
//! let svg = r#"<svg viewBox="0 0 24 24">
//!   <circle cx="12" cy="12" r="10" />
//! </svg>"#;
//!
//! assert_eq!(extract_inner(svg).unwrap(), r#"<circle cx="12" cy="12" r="10" />"#);
//! assert_eq!(to_pascal_case("circle-x").unwrap(), "CircleX");
//! ```

mod error;
mod icon;
mod lexer;
mod metadata;
mod naming;
mod svg;

pub use error::{SourceError, SvgError, SvgErrorKind};
pub use icon::{process_icon, Alias, Icon, METADATA_EXTENSION, SVG_EXTENSION};
pub use lexer::{MarkupKind, MarkupLexer, MarkupToken};
pub use metadata::{read_metadata, AliasEntry, Metadata};
pub use naming::{to_pascal_case, to_snake_case};
pub use svg::extract_inner;
