//! Rust module emitter.
//!
//! The generated module depends on a small runtime (`build_svg`,
//! `RenderOptions`, `RegistryBuilder`) reached through `runtime_path`, so the
//! same output works inside the runtime crate (`crate`) or outside it
//! (`lucide_render`).

use crate::emitter::Emitter;
use crate::ir::IconSet;
use lucide_source::{to_snake_case, Icon};

/// Strict and reserved Rust keywords.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Emits a Rust module with an `IconName` enum, one render function per
/// icon, an alias table and a `register_all` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustEmitter {
    runtime_path: String,
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self::new("crate")
    }
}

impl RustEmitter {
    /// Creates an emitter whose output refers to the runtime at `runtime_path`.
    pub fn new(runtime_path: impl Into<String>) -> Self {
        Self {
            runtime_path: runtime_path.into(),
        }
    }

    fn emit_enum(&self, set: &IconSet, out: &mut String) {
        out.push_str("/// Every icon in this module.\n");
        out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
        out.push_str("pub enum IconName {\n");
        for icon in set.icons() {
            out.push_str(&format!("    {},\n", variant_ident(icon)));
        }
        out.push_str("}\n\n");

        out.push_str("impl IconName {\n");

        out.push_str("    /// All icons, in name order.\n");
        out.push_str("    pub const ALL: &'static [IconName] = &[\n");
        for icon in set.icons() {
            out.push_str(&format!("        IconName::{},\n", variant_ident(icon)));
        }
        out.push_str("    ];\n\n");

        out.push_str("    /// Returns the hyphenated icon name.\n");
        out.push_str("    pub const fn name(self) -> &'static str {\n");
        out.push_str("        match self {\n");
        for icon in set.icons() {
            out.push_str(&format!(
                "            IconName::{} => \"{}\",\n",
                variant_ident(icon),
                icon.name
            ));
        }
        out.push_str("        }\n");
        out.push_str("    }\n\n");

        out.push_str("    /// Returns the inner SVG markup.\n");
        out.push_str("    pub const fn paths(self) -> &'static str {\n");
        out.push_str("        match self {\n");
        for icon in set.icons() {
            out.push_str(&format!(
                "            IconName::{} => {},\n",
                variant_ident(icon),
                raw_string(&icon.paths)
            ));
        }
        out.push_str("        }\n");
        out.push_str("    }\n\n");

        out.push_str("    /// Looks up an icon by name or alias.\n");
        out.push_str("    pub fn from_name(name: &str) -> Option<IconName> {\n");
        out.push_str("        match name {\n");
        for icon in set.icons() {
            let variant = variant_ident(icon);
            for name in icon.names() {
                out.push_str(&format!(
                    "            \"{name}\" => Some(IconName::{variant}),\n"
                ));
            }
        }
        out.push_str("            _ => None,\n");
        out.push_str("        }\n");
        out.push_str("    }\n\n");

        out.push_str("    /// Renders the icon as a complete SVG document.\n");
        out.push_str(&format!(
            "    pub fn render(self, options: Option<&{}::RenderOptions>) -> String {{\n",
            self.runtime_path
        ));
        out.push_str(&format!(
            "        {}::build_svg(self.paths(), options)\n",
            self.runtime_path
        ));
        out.push_str("    }\n");
        out.push_str("}\n");
    }

    fn emit_functions(&self, set: &IconSet, out: &mut String) {
        for icon in set.icons() {
            out.push('\n');
            out.push_str(&format!("/// Renders the `{}` icon.\n", icon.name));
            out.push_str(&format!(
                "pub fn {}(options: Option<&{}::RenderOptions>) -> String {{\n",
                fn_ident(&icon.name),
                self.runtime_path
            ));
            out.push_str(&format!(
                "    IconName::{}.render(options)\n",
                variant_ident(icon)
            ));
            out.push_str("}\n");
        }
    }

    fn emit_aliases(&self, set: &IconSet, out: &mut String) {
        out.push('\n');
        out.push_str("/// Aliases as `(alias, target, deprecation reason)`.\n");
        out.push_str("pub const ALIASES: &[(&str, &str, Option<&str>)] = &[\n");
        for icon in set.icons() {
            for alias in &icon.aliases {
                out.push_str(&format!(
                    "    (\"{}\", \"{}\", {}),\n",
                    alias.name,
                    alias.target_name,
                    deprecation_literal(alias.deprecated, &alias.deprecation_reason)
                ));
            }
        }
        out.push_str("];\n");
    }

    fn emit_register_all(&self, set: &IconSet, out: &mut String) {
        out.push('\n');
        out.push_str("/// Registers every icon and alias with `builder`.\n");
        out.push_str(&format!(
            "pub fn register_all(builder: &mut {}::RegistryBuilder) {{\n",
            self.runtime_path
        ));
        for icon in set.icons() {
            let function = fn_ident(&icon.name);
            out.push_str(&format!(
                "    builder.register(\"{}\", {function});\n",
                icon.name
            ));
            for alias in &icon.aliases {
                out.push_str(&format!(
                    "    builder.register_alias(\"{}\", \"{}\", {function}, {});\n",
                    alias.name,
                    alias.target_name,
                    deprecation_literal(alias.deprecated, &alias.deprecation_reason)
                ));
            }
        }
        out.push_str("}\n");
    }
}

impl Emitter for RustEmitter {
    fn emit(&self, set: &IconSet) -> String {
        let mut out = String::with_capacity(1024 + set.len() * 512);
        out.push_str("// @generated by lucide-codegen. Do not edit by hand.\n");
        out.push_str("// Regenerate with `lucide-tool generate`.\n\n");

        self.emit_enum(set, &mut out);
        self.emit_functions(set, &mut out);
        self.emit_aliases(set, &mut out);
        self.emit_register_all(set, &mut out);
        out
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }
}

/// Enum variant for an icon. `Self` is the only capitalized keyword.
pub(crate) fn variant_ident(icon: &Icon) -> String {
    if icon.pascal_name == "Self" {
        "SelfIcon".to_string()
    } else {
        icon.pascal_name.to_string()
    }
}

/// Function name for an icon: snake_case, escaped when it is not a valid
/// identifier on its own.
pub fn fn_ident(name: &str) -> String {
    let snake = to_snake_case(name);
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format!("icon_{snake}")
    } else if NON_RAW_KEYWORDS.contains(&snake.as_str()) {
        format!("{snake}_icon")
    } else if KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

/// Quotes `value` as a raw string literal with enough `#` guards.
pub fn raw_string(value: &str) -> String {
    let longest = value
        .match_indices('"')
        .map(|(i, _)| value[i + 1..].chars().take_while(|&c| c == '#').count())
        .max()
        .unwrap_or(0);
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{value}\"{hashes}")
}

fn deprecation_literal(deprecated: bool, reason: &str) -> String {
    if deprecated {
        format!("Some({reason:?})")
    } else {
        "None".to_string()
    }
}
