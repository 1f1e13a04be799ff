//! Documentation page generator for addingen.
//!
//! Emits one doxygen page per category, an alphabetical index of every
//! function and a page listing the enumerated types.

mod generator;
mod render;

pub mod files;

pub use addingen_codegen::{Addin, PreviewFile};
pub use generator::Generator;
pub use render::Renderer;

/// Built-in templates, by name.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("copyright", addingen_codegen::COPYRIGHT),
    ("doxygen.all", include_str!("../stubs/doxygen.all")),
    ("doxygen.category", include_str!("../stubs/doxygen.category")),
    ("doxygen.enum_row", include_str!("../stubs/doxygen.enum_row")),
    ("doxygen.enumeration", include_str!("../stubs/doxygen.enumeration")),
    ("doxygen.enums", include_str!("../stubs/doxygen.enums")),
    ("doxygen.function", include_str!("../stubs/doxygen.function")),
    ("doxygen.list_item", include_str!("../stubs/doxygen.list_item")),
];

/// Built-in conversion rules.
pub const RULES: &str = include_str!("../stubs/doxygen.rules.toml");
