//! Generation platforms.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Platforms the generator can emit bindings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// C prototypes and bodies
    C,
    /// Excel worksheet functions and their registration
    Excel,
    /// Documentation pages
    Doxygen,
    /// Serialization factory
    Serialization,
    /// Value object classes
    ValueObjects,
}

impl Platform {
    /// Every platform, in generation order.
    pub const ALL: [Platform; 5] = [
        Platform::C,
        Platform::Excel,
        Platform::Doxygen,
        Platform::Serialization,
        Platform::ValueObjects,
    ];

    /// Returns the platform identifier as used in addin.toml.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::C => "c",
            Platform::Excel => "excel",
            Platform::Doxygen => "doxygen",
            Platform::Serialization => "serialization",
            Platform::ValueObjects => "valueobjects",
        }
    }

    /// Output root used when addin.toml does not set one.
    ///
    /// `lib_root` is the project's library directory.
    pub fn default_root(&self, lib_root: &str) -> String {
        match self {
            Platform::C => "Addins/C".to_string(),
            Platform::Excel => "Addins/Excel".to_string(),
            Platform::Doxygen => "Docs/pages".to_string(),
            Platform::Serialization => format!("{lib_root}/Serialization"),
            Platform::ValueObjects => format!("{lib_root}/ValueObjects"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" => Ok(Platform::C),
            "excel" | "xl" => Ok(Platform::Excel),
            "doxygen" | "docs" => Ok(Platform::Doxygen),
            "serialization" => Ok(Platform::Serialization),
            "valueobjects" | "vo" => Ok(Platform::ValueObjects),
            _ => Err(format!(
                "unknown platform '{}', expected one of: c, excel, doxygen, serialization, valueobjects",
                s
            )),
        }
    }
}
