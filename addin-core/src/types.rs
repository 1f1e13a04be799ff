//! Primitive metadata types shared across the pipeline.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Primitive type of a parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Long,
    Double,
    Bool,
    String,
    Any,
    /// Structured property list, only meaningful with [`TensorRank::Vector`].
    Property,
}

impl DataType {
    /// Get the metadata type name (used in category XML)
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Long => "long",
            DataType::Double => "double",
            DataType::Bool => "bool",
            DataType::String => "string",
            DataType::Any => "any",
            DataType::Property => "property",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(DataType::Long),
            "double" => Ok(DataType::Double),
            "bool" => Ok(DataType::Bool),
            "string" => Ok(DataType::String),
            "any" => Ok(DataType::Any),
            "property" => Ok(DataType::Property),
            _ => Err(format!(
                "unknown type '{}', expected one of: long, double, bool, string, any, property",
                s
            )),
        }
    }
}

/// Dimensionality of a parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TensorRank {
    Scalar,
    Vector,
    Matrix,
}

impl TensorRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            TensorRank::Scalar => "scalar",
            TensorRank::Vector => "vector",
            TensorRank::Matrix => "matrix",
        }
    }
}

impl fmt::Display for TensorRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TensorRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scalar" => Ok(TensorRank::Scalar),
            "vector" => Ok(TensorRank::Vector),
            "matrix" => Ok(TensorRank::Matrix),
            _ => Err(format!(
                "unknown tensor rank '{}', expected one of: scalar, vector, matrix",
                s
            )),
        }
    }
}

/// How a function is implemented on a given platform.
///
/// Variants are ordered: a function supported at `Auto` is also supported
/// at `Manual` and `DocumentationOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Implementation {
    /// Only documentation is generated, no code.
    DocumentationOnly,
    /// Hand-written function; declarations and registration may be generated.
    Manual,
    /// Everything is generated.
    #[default]
    Auto,
}

impl Implementation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Implementation::DocumentationOnly => "documentationOnly",
            Implementation::Manual => "manual",
            Implementation::Auto => "auto",
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Implementation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documentationOnly" => Ok(Implementation::DocumentationOnly),
            "manual" => Ok(Implementation::Manual),
            "auto" => Ok(Implementation::Auto),
            _ => Err(format!(
                "unknown implementation '{}', expected one of: documentationOnly, manual, auto",
                s
            )),
        }
    }
}

/// Kind of a metadata function.
///
/// Generators key their per-kind behaviour on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionTag {
    /// Constructs a library object and returns its id.
    Constructor,
    /// Invokes a member function of an existing object.
    Member,
    /// Invokes a member function of an enumerated object from the registry.
    EnumerationMember,
    /// Free function not bound to an object.
    Procedure,
}

impl FunctionTag {
    /// Get the element name used in category XML.
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionTag::Constructor => "Constructor",
            FunctionTag::Member => "Member",
            FunctionTag::EnumerationMember => "EnumerationMember",
            FunctionTag::Procedure => "Procedure",
        }
    }

    /// Returns true for kinds that operate on an existing object.
    pub fn is_member(&self) -> bool {
        matches!(self, FunctionTag::Member | FunctionTag::EnumerationMember)
    }
}

impl fmt::Display for FunctionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
