//! Lucide icons as SVG markup.
//!
//! This crate is what templates link against:
//! - [`build_svg`] wraps icon markup in the standard Lucide `<svg>` element
//! - [`RenderOptions`] carries size, color, stroke width and class
//! - [`Registry`] maps icon and alias names to render functions
//! - [`icons`] holds the generated functions for the bundled icon set
//!
//! # Example
//!
//! ```
//! use lucide_render::{icons, Registry, RenderOptions};
//!
//! let registry = Registry::bundled();
//! let options = RenderOptions::new().with_size(16).with_class("icon");
//!
//! let svg = registry.render("circle-x", Some(&options));
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg, icons::circle_x(Some(&options)));
//!
//! // Unknown names render nothing.
//! assert_eq!(registry.render("not-an-icon", None), "");
//! ```

pub mod icons;
mod options;
mod registry;
mod svg;

pub use icons::{IconName, ALIASES};
pub use options::{RenderOptions, DEFAULT_COLOR, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
pub use registry::{Deprecation, Registry, RegistryBuilder, RenderFn};
pub use svg::build_svg;
