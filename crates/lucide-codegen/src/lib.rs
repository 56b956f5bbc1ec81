//! Icon registry generation for lucide-rs.
//!
//! This crate walks a directory of Lucide SVG files and their sidecar
//! metadata, builds an [`IconSet`], and renders it through an [`Emitter`]:
//! - [`RustEmitter`] writes a Rust module with one render function per icon
//!   and a `register_all` function for the runtime registry
//! - [`JsonEmitter`] writes a JSON manifest of the same data
//!
//! Generation is all-or-nothing: one bad icon fails the run and the output
//! file is left untouched.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use lucide_codegen::generate;
//!
//! let result = generate(
//!     Utf8Path::new("lucide-icons"),
//!     Utf8Path::new("crates/lucide-render/src/icons.rs"),
//! )?;
//! println!("generated {} icons", result.icons_generated);
//! # Ok::<(), lucide_codegen::GenerateError>(())
//! ```

mod emitter;
mod error;
mod generate;
mod ir;
mod rust;

pub use emitter::{Emitter, JsonEmitter};
pub use error::GenerateError;
pub use generate::{
    collect_icons, generate, generate_with, list_icon_names, list_svg_files, GenerationResult,
};
pub use ir::IconSet;
pub use rust::{fn_ident, raw_string, RustEmitter};
