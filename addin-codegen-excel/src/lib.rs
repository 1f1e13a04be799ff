//! Excel addin generator for addingen.
//!
//! Emits, per category, the worksheet function bodies and the `xlfRegister`
//! calls that make them visible to Excel, plus `register_all.cpp` calling
//! every category's registration. The addin also carries the value object
//! type registration that serialization needs in the final binary.

mod generator;
mod render;

pub mod files;

pub use addingen_codegen::{Addin, PreviewFile};
pub use generator::Generator;
pub use render::{Renderer, counted_string};

/// Platform name matched against `<SupportedPlatform name="...">`.
pub const PLATFORM_NAME: &str = "Excel";

/// Built-in templates, by name.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("copyright", addingen_codegen::COPYRIGHT),
    ("excel.source", include_str!("../stubs/excel.source")),
    ("excel.body.constructor", include_str!("../stubs/excel.body.constructor")),
    ("excel.body.member", include_str!("../stubs/excel.body.member")),
    ("excel.body.member_loop", include_str!("../stubs/excel.body.member_loop")),
    (
        "excel.body.enumeration_member",
        include_str!("../stubs/excel.body.enumeration_member"),
    ),
    (
        "excel.body.enumeration_member_loop",
        include_str!("../stubs/excel.body.enumeration_member_loop"),
    ),
    ("excel.body.procedure", include_str!("../stubs/excel.body.procedure")),
    (
        "excel.body.procedure_loop",
        include_str!("../stubs/excel.body.procedure_loop"),
    ),
    ("excel.wizard_check", include_str!("../stubs/excel.wizard_check")),
    ("excel.trigger_check", include_str!("../stubs/excel.trigger_check")),
    ("excel.register", include_str!("../stubs/excel.register")),
    (
        "excel.register_parameter",
        include_str!("../stubs/excel.register_parameter"),
    ),
    (
        "excel.register_category",
        include_str!("../stubs/excel.register_category"),
    ),
    ("excel.register_all", include_str!("../stubs/excel.register_all")),
];

/// Built-in conversion rules.
pub const RULES: &str = include_str!("../stubs/excel.rules.toml");
