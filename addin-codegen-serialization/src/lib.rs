//! Serialization and value object generators for addingen.
//!
//! Both platforms work from the same subset of metadata: constructors that
//! generate code. [`SerializationGenerator`] emits the creator functions and
//! the factory registering them; [`ValueObjectsGenerator`] emits one value
//! object class per constructor, holding its arguments as properties.
//!
//! The [`registration`] module renders the type registration that an addin
//! binary compiles in; addin generators embed it in their own output.

mod generator;
mod render;

pub mod files;
pub mod registration;

pub use addingen_codegen::{Addin, PreviewFile};
pub use generator::{SerializationGenerator, ValueObjectsGenerator, constructors};
pub use registration::{REGISTRATION_TEMPLATES, Registrar, Registration};
pub use render::Renderer;

/// Built-in templates of the serialization platform, by name.
pub const SERIALIZATION_TEMPLATES: &[(&str, &str)] = &[
    ("copyright", addingen_codegen::COPYRIGHT),
    ("serialization.header", include_str!("../stubs/serialization.header")),
    (
        "serialization.declaration",
        include_str!("../stubs/serialization.declaration"),
    ),
    ("serialization.source", include_str!("../stubs/serialization.source")),
    ("serialization.creator", include_str!("../stubs/serialization.creator")),
    ("serialization.all", include_str!("../stubs/serialization.all")),
    ("serialization.factory", include_str!("../stubs/serialization.factory")),
    (
        "serialization.register_category",
        include_str!("../stubs/serialization.register_category"),
    ),
    ("serialization.register", include_str!("../stubs/serialization.register")),
];

/// Built-in templates of the value object platform, by name.
pub const VALUE_OBJECT_TEMPLATES: &[(&str, &str)] = &[
    ("copyright", addingen_codegen::COPYRIGHT),
    ("vo.header", include_str!("../stubs/vo.header")),
    ("vo.declaration", include_str!("../stubs/vo.declaration")),
    ("vo.source", include_str!("../stubs/vo.source")),
    ("vo.definition", include_str!("../stubs/vo.definition")),
];

/// Built-in conversion rules of the serialization platform.
pub const SERIALIZATION_RULES: &str = include_str!("../stubs/serialization.rules.toml");

/// Built-in conversion rules of the value object platform.
pub const VALUE_OBJECT_RULES: &str = include_str!("../stubs/valueobjects.rules.toml");
