use serde::Serialize;
use std::fmt;

/// A deduplicated author identity.
///
/// Authors are created only by the registry (see
/// [`crate::catalog::AuthorRegistry`]) and shared by reference by every
/// material they authored; two materials by "Pilar" and "PILAR" point at the
/// same instance.
#[derive(Debug, Serialize)]
pub struct Author {
    name: String,
}

impl Author {
    /// Only the registry constructs authors, so every instance is reachable
    /// through it.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name as first seen by the registry (original casing preserved).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
