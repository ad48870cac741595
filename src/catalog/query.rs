use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::rc::Rc;

use crate::model::{Material, MaterialKind, Topic};

/// Predicate over a material's attributes.
#[derive(Debug, Clone)]
pub enum MaterialFilter {
    /// Case-insensitive title substring match.
    TitleContains(String),
    /// Topic membership.
    HasTopic(Topic),
    /// Rating within an inclusive range.
    RatingBetween { min: i32, max: i32 },
    /// Publication timestamp strictly between two bounds, both exclusive.
    PublishedBetween {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Exact kind match combined with a case-insensitive author-name
    /// substring match.
    KindAndAuthor { kind: MaterialKind, author: String },
}

impl MaterialFilter {
    /// Evaluate this predicate against a material.
    pub fn matches(&self, material: &Material) -> bool {
        match self {
            MaterialFilter::TitleContains(fragment) => {
                contains_ignore_case(material.title(), fragment)
            }
            MaterialFilter::HasTopic(topic) => material.has_topic(*topic),
            MaterialFilter::RatingBetween { min, max } => {
                (*min..=*max).contains(&material.rating())
            }
            MaterialFilter::PublishedBetween { start, end } => {
                material.published_at() > *start && material.published_at() < *end
            }
            MaterialFilter::KindAndAuthor { kind, author } => {
                material.kind() == *kind
                    && contains_ignore_case(material.author().name(), author)
            }
        }
    }
}

/// Named sort orders for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Title, case-insensitive ascending (the natural material order).
    Title,
    /// Earlier publications first.
    PublicationDate,
    /// Best rating first. The only descending criterion.
    Rating,
    /// Author name, case-insensitive ascending.
    Author,
}

impl SortCriterion {
    pub fn compare(&self, a: &Material, b: &Material) -> Ordering {
        match self {
            SortCriterion::Title => Material::natural_order(a, b),
            SortCriterion::PublicationDate => a.published_at().cmp(&b.published_at()),
            SortCriterion::Rating => b.rating().cmp(&a.rating()),
            SortCriterion::Author => a
                .author()
                .name()
                .to_lowercase()
                .cmp(&b.author().name().to_lowercase()),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Read-only search executor over the catalog's collection.
///
/// Every selection runs the same pipeline: filter, then sort, then limit.
/// The limit always applies after sorting, so a capped result is the top N
/// of the full ordered match set, not the first N in insertion order.
pub struct MaterialQuery<'a> {
    materials: &'a [Rc<Material>],
}

impl<'a> MaterialQuery<'a> {
    pub fn new(materials: &'a [Rc<Material>]) -> Self {
        Self { materials }
    }

    /// Filter, then natural (title) order.
    pub fn select(&self, filter: &MaterialFilter) -> Vec<Rc<Material>> {
        self.run(filter, None, None)
    }

    /// Filter, then order by an explicit criterion.
    pub fn select_sorted(
        &self,
        filter: &MaterialFilter,
        order: SortCriterion,
    ) -> Vec<Rc<Material>> {
        self.run(filter, Some(order), None)
    }

    /// Filter, order by an explicit criterion, keep the first `limit`
    /// entries of the sorted result.
    pub fn select_limited(
        &self,
        filter: &MaterialFilter,
        order: SortCriterion,
        limit: usize,
    ) -> Vec<Rc<Material>> {
        self.run(filter, Some(order), Some(limit))
    }

    fn run(
        &self,
        filter: &MaterialFilter,
        order: Option<SortCriterion>,
        limit: Option<usize>,
    ) -> Vec<Rc<Material>> {
        let mut hits: Vec<Rc<Material>> = self
            .materials
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        match order {
            Some(criterion) => hits.sort_by(|a, b| criterion.compare(a, b)),
            None => hits.sort_by(|a, b| Material::natural_order(a, b)),
        }
        if let Some(n) = limit {
            hits.truncate(n);
        }
        hits
    }
}
