//! C binding generator for addingen.
//!
//! Emits one header and one source file per category plus an aggregate
//! `addin.h`. Templates and conversion rules are compiled in from `stubs/`
//! and can be overridden per project.

mod generator;
mod render;

pub mod files;

pub use addingen_codegen::{Addin, PreviewFile};
pub use generator::Generator;
pub use render::Renderer;

/// Platform name matched against `<SupportedPlatform name="...">`.
pub const PLATFORM_NAME: &str = "C";

/// Built-in templates, by name.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("copyright", addingen_codegen::COPYRIGHT),
    ("c.addin", include_str!("../stubs/c.addin")),
    ("c.header", include_str!("../stubs/c.header")),
    ("c.prototype", include_str!("../stubs/c.prototype")),
    ("c.source", include_str!("../stubs/c.source")),
    ("c.body.constructor", include_str!("../stubs/c.body.constructor")),
    ("c.body.member", include_str!("../stubs/c.body.member")),
    ("c.body.member_loop", include_str!("../stubs/c.body.member_loop")),
    (
        "c.body.enumeration_member",
        include_str!("../stubs/c.body.enumeration_member"),
    ),
    (
        "c.body.enumeration_member_loop",
        include_str!("../stubs/c.body.enumeration_member_loop"),
    ),
    ("c.body.procedure", include_str!("../stubs/c.body.procedure")),
    (
        "c.body.procedure_loop",
        include_str!("../stubs/c.body.procedure_loop"),
    ),
];

/// Built-in conversion rules.
pub const RULES: &str = include_str!("../stubs/c.rules.toml");
