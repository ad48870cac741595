use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::{Author, Topic, DATE_FORMAT};
use crate::error::CatalogError;

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Base,
    Advanced,
    Expert,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Base => "base",
            Level::Advanced => "advanced",
            Level::Expert => "expert",
        };
        f.write_str(name)
    }
}

/// Field-less discriminant used for exact-kind filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Book,
    Video,
    Course,
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialKind::Book => "book",
            MaterialKind::Video => "video",
            MaterialKind::Course => "course",
        };
        f.write_str(name)
    }
}

impl FromStr for MaterialKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "book" => Ok(MaterialKind::Book),
            "video" => Ok(MaterialKind::Video),
            "course" => Ok(MaterialKind::Course),
            other => Err(CatalogError::UnknownKind(other.to_string())),
        }
    }
}

/// Variant-specific payload of a material.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialDetails {
    Book { isbn: String, pages: u32 },
    Video { minutes: u32 },
    Course { price: f64, certified: bool, level: Level, sessions: u32 },
}

impl MaterialDetails {
    pub fn kind(&self) -> MaterialKind {
        match self {
            MaterialDetails::Book { .. } => MaterialKind::Book,
            MaterialDetails::Video { .. } => MaterialKind::Video,
            MaterialDetails::Course { .. } => MaterialKind::Course,
        }
    }
}

impl fmt::Display for MaterialDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialDetails::Book { isbn, pages } => write!(f, "isbn {isbn}, {pages} pages"),
            MaterialDetails::Video { minutes } => write!(f, "{minutes} min"),
            MaterialDetails::Course {
                price,
                certified,
                level,
                sessions,
            } => {
                let cert = if *certified {
                    "with certificate"
                } else {
                    "no certificate"
                };
                write!(f, "{sessions} classes, level {level}, {price:.2}, {cert}")
            }
        }
    }
}

/// A single catalog entry: the shared attribute set plus a kind-specific
/// payload.
///
/// Materials are immutable after creation and are constructed only through
/// [`crate::Catalog`] registration, which resolves the author through the
/// registry before the material exists.
#[derive(Debug, Clone, Serialize)]
pub struct Material {
    title: String,
    published_at: NaiveDateTime,
    rating: i32,
    author: Rc<Author>,
    topics: Vec<Topic>,
    details: MaterialDetails,
}

impl Material {
    pub(crate) fn new(
        title: impl Into<String>,
        published_at: NaiveDateTime,
        rating: i32,
        author: Rc<Author>,
        topics: Vec<Topic>,
        details: MaterialDetails,
    ) -> Self {
        Self {
            title: title.into(),
            published_at,
            rating,
            author,
            topics,
            details,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn published_at(&self) -> NaiveDateTime {
        self.published_at
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn author(&self) -> &Rc<Author> {
        &self.author
    }

    /// Topics in the order they were supplied at registration.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn details(&self) -> &MaterialDetails {
        &self.details
    }

    pub fn kind(&self) -> MaterialKind {
        self.details.kind()
    }

    pub fn has_topic(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }

    /// Default ordering across heterogeneous kinds: title, case-insensitive
    /// ascending. Exposed as a comparator rather than an `Ord` impl because
    /// title-only equality would be misleading for `Eq`.
    pub fn natural_order(a: &Material, b: &Material) -> Ordering {
        a.title.to_lowercase().cmp(&b.title.to_lowercase())
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}, by {}, rating {}, published {}",
            self.kind(),
            self.title,
            self.author.name(),
            self.rating,
            self.published_at.format(DATE_FORMAT),
        )?;
        if !self.topics.is_empty() {
            let tags: Vec<&str> = self.topics.iter().map(Topic::as_str).collect();
            write!(f, ", topics [{}]", tags.join(", "))?;
        }
        write!(f, ", {}", self.details)
    }
}
