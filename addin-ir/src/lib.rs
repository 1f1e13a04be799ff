//! Intermediate representation types for the addingen binding generator.
//!
//! The IR is the post-processed, read-only registry that generators walk.
//!
//! # Architecture
//!
//! ```text
//! addin.toml + XML → addingen-manifest (parsing) → addingen-ir (registry) → generators
//! ```
//!
//! Compared to the manifest definitions, the IR has:
//! - function kinds expressed as a tagged [`FunctionKind`]
//! - implicit parameters (`objectID`, `permanent`, ...) already applied
//! - descriptions and return values filled in

mod function;
mod registry;

pub use function::{Function, FunctionKind, Parameter, PlatformSupport, ReturnValue};
pub use registry::{AddinIR, Category, CategoryList, EnumValue, Enumeration, ProjectMeta};
