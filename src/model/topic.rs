use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Fixed set of subject tags a material can be labelled with.
///
/// Topics are plain constants with no lifecycle; a material carries them in
/// the order they were supplied, duplicates included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Ai,
    Python,
    Iot,
    Management,
    Java,
    Algorithms,
    Javascript,
    Mobile,
    React,
    Web,
    Agile,
    SoftwareEngineering,
}

impl Topic {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Ai => "ai",
            Topic::Python => "python",
            Topic::Iot => "iot",
            Topic::Management => "management",
            Topic::Java => "java",
            Topic::Algorithms => "algorithms",
            Topic::Javascript => "javascript",
            Topic::Mobile => "mobile",
            Topic::React => "react",
            Topic::Web => "web",
            Topic::Agile => "agile",
            Topic::SoftwareEngineering => "software_engineering",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ai" => Ok(Topic::Ai),
            "python" => Ok(Topic::Python),
            "iot" => Ok(Topic::Iot),
            "management" => Ok(Topic::Management),
            "java" => Ok(Topic::Java),
            "algorithms" => Ok(Topic::Algorithms),
            "javascript" => Ok(Topic::Javascript),
            "mobile" => Ok(Topic::Mobile),
            "react" => Ok(Topic::React),
            "web" => Ok(Topic::Web),
            "agile" => Ok(Topic::Agile),
            "software_engineering" => Ok(Topic::SoftwareEngineering),
            other => Err(CatalogError::UnknownTopic(other.to_string())),
        }
    }
}
