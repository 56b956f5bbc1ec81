// @generated by lucide-codegen. Do not edit by hand.
// Regenerate with `lucide-tool generate`.

/// Every icon in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconName {
    AArrowDown,
    Box,
    ChevronDown,
    CircleX,
    Menu,
}

impl IconName {
    /// All icons, in name order.
    pub const ALL: &'static [IconName] = &[
        IconName::AArrowDown,
        IconName::Box,
        IconName::ChevronDown,
        IconName::CircleX,
        IconName::Menu,
    ];

    /// Returns the hyphenated icon name.
    pub const fn name(self) -> &'static str {
        match self {
            IconName::AArrowDown => "a-arrow-down",
            IconName::Box => "box",
            IconName::ChevronDown => "chevron-down",
            IconName::CircleX => "circle-x",
            IconName::Menu => "menu",
        }
    }

    /// Returns the inner SVG markup.
    pub const fn paths(self) -> &'static str {
        match self {
            IconName::AArrowDown => r#"<path d="M3.5 13h6" /> <path d="m2 16 4.5-9 4.5 9" /> <path d="M18 7v9" /> <path d="m14 12 4 4 4-4" />"#,
            IconName::Box => r#"<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" /> <path d="m3.3 7 8.7 5 8.7-5" /> <path d="M12 22V12" />"#,
            IconName::ChevronDown => r#"<path d="m6 9 6 6 6-6" />"#,
            IconName::CircleX => r#"<circle cx="12" cy="12" r="10" /> <path d="m15 9-6 6" /> <path d="m9 9 6 6" />"#,
            IconName::Menu => r#"<line x1="4" x2="20" y1="12" y2="12" /> <line x1="4" x2="20" y1="6" y2="6" /> <line x1="4" x2="20" y1="18" y2="18" />"#,
        }
    }

    /// Looks up an icon by name or alias.
    pub fn from_name(name: &str) -> Option<IconName> {
        match name {
            "a-arrow-down" => Some(IconName::AArrowDown),
            "box" => Some(IconName::Box),
            "chevron-down" => Some(IconName::ChevronDown),
            "circle-x" => Some(IconName::CircleX),
            "x-circle" => Some(IconName::CircleX),
            "menu" => Some(IconName::Menu),
            _ => None,
        }
    }

    /// Renders the icon as a complete SVG document.
    pub fn render(self, options: Option<&crate::RenderOptions>) -> String {
        crate::build_svg(self.paths(), options)
    }
}

/// Renders the `a-arrow-down` icon.
pub fn a_arrow_down(options: Option<&crate::RenderOptions>) -> String {
    IconName::AArrowDown.render(options)
}

/// Renders the `box` icon.
pub fn r#box(options: Option<&crate::RenderOptions>) -> String {
    IconName::Box.render(options)
}

/// Renders the `chevron-down` icon.
pub fn chevron_down(options: Option<&crate::RenderOptions>) -> String {
    IconName::ChevronDown.render(options)
}

/// Renders the `circle-x` icon.
pub fn circle_x(options: Option<&crate::RenderOptions>) -> String {
    IconName::CircleX.render(options)
}

/// Renders the `menu` icon.
pub fn menu(options: Option<&crate::RenderOptions>) -> String {
    IconName::Menu.render(options)
}

/// Aliases as `(alias, target, deprecation reason)`.
pub const ALIASES: &[(&str, &str, Option<&str>)] = &[
    ("x-circle", "circle-x", Some("alias.name")),
];

/// Registers every icon and alias with `builder`.
pub fn register_all(builder: &mut crate::RegistryBuilder) {
    builder.register("a-arrow-down", a_arrow_down);
    builder.register("box", r#box);
    builder.register("chevron-down", chevron_down);
    builder.register("circle-x", circle_x);
    builder.register_alias("x-circle", "circle-x", circle_x, Some("alias.name"));
    builder.register("menu", menu);
}
