//! Transport mode identifiers.

use std::fmt;

use serde::Deserialize;

/// A TfL mode id such as `tube`, `walking` or `bus`.
///
/// Comparison is exact; TfL mode ids are lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Mode(String);

impl Mode {
    /// The London Underground.
    pub const TUBE: &'static str = "tube";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn tube() -> Self {
        Self::new(Self::TUBE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::tube()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Mode {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Mode {
    fn from(id: String) -> Self {
        Self(id)
    }
}
