//! The catalog service: registration, author resolution and the named
//! search operations.

pub mod query;
pub mod registry;

pub use query::{MaterialFilter, MaterialQuery, SortCriterion};
pub use registry::AuthorRegistry;

use chrono::NaiveTime;
use std::rc::Rc;
use tracing::debug;

use crate::error::Result;
use crate::model::{
    parse_date, Author, Level, Material, MaterialDetails, MaterialKind, Topic,
};

/// Owns the material collection and the author registry.
///
/// Materials are appended in registration order and never removed or
/// mutated; all search operations are read-only and return snapshot lists.
#[derive(Debug, Default)]
pub struct Catalog {
    materials: Vec<Rc<Material>>,
    authors: AuthorRegistry,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book. `published` uses the `DD-MM-YYYY` format.
    #[allow(clippy::too_many_arguments)]
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        rating: i32,
        published: &str,
        topics: &[Topic],
        isbn: &str,
        pages: u32,
    ) -> Result<()> {
        self.register(
            title,
            author,
            rating,
            published,
            topics,
            MaterialDetails::Book {
                isbn: isbn.to_string(),
                pages,
            },
        )
    }

    /// Register a video. `published` uses the `DD-MM-YYYY` format.
    pub fn add_video(
        &mut self,
        title: &str,
        author: &str,
        rating: i32,
        published: &str,
        topics: &[Topic],
        minutes: u32,
    ) -> Result<()> {
        self.register(
            title,
            author,
            rating,
            published,
            topics,
            MaterialDetails::Video { minutes },
        )
    }

    /// Register a course. `published` uses the `DD-MM-YYYY` format.
    #[allow(clippy::too_many_arguments)]
    pub fn add_course(
        &mut self,
        title: &str,
        author: &str,
        rating: i32,
        published: &str,
        topics: &[Topic],
        price: f64,
        certified: bool,
        level: Level,
        sessions: u32,
    ) -> Result<()> {
        self.register(
            title,
            author,
            rating,
            published,
            topics,
            MaterialDetails::Course {
                price,
                certified,
                level,
                sessions,
            },
        )
    }

    fn register(
        &mut self,
        title: &str,
        author_name: &str,
        rating: i32,
        published: &str,
        topics: &[Topic],
        details: MaterialDetails,
    ) -> Result<()> {
        // Parse first: a bad date must leave both the collection and the
        // author registry untouched.
        let published_at = parse_date(published)?.and_time(NaiveTime::MIN);
        let author = self.authors.resolve(author_name);
        let material = Material::new(
            title,
            published_at,
            rating,
            author,
            topics.to_vec(),
            details,
        );
        debug!(title = %material.title(), kind = %material.kind(), "registered material");
        self.materials.push(Rc::new(material));
        Ok(())
    }

    /// Snapshot of every material in natural (title) order.
    pub fn materials(&self) -> Vec<Rc<Material>> {
        let mut all = self.materials.clone();
        all.sort_by(|a, b| Material::natural_order(a, b));
        all
    }

    /// Snapshot of every author in registry (first-seen) order.
    pub fn authors(&self) -> Vec<Rc<Author>> {
        self.authors.iter().cloned().collect()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    fn query(&self) -> MaterialQuery<'_> {
        MaterialQuery::new(&self.materials)
    }

    /// Materials labelled with `topic`, in natural order.
    pub fn by_topic(&self, topic: Topic) -> Vec<Rc<Material>> {
        self.query().select(&MaterialFilter::HasTopic(topic))
    }

    /// Materials whose title contains `fragment` (case-insensitive), sorted
    /// by title, capped at `limit`.
    pub fn by_title(&self, fragment: &str, limit: usize) -> Vec<Rc<Material>> {
        self.query().select_limited(
            &MaterialFilter::TitleContains(fragment.to_string()),
            SortCriterion::Title,
            limit,
        )
    }

    /// Materials with `min <= rating <= max`, best rating first, no cap.
    pub fn by_rating_sorted(&self, min: i32, max: i32) -> Vec<Rc<Material>> {
        self.query().select_sorted(
            &MaterialFilter::RatingBetween { min, max },
            SortCriterion::Rating,
        )
    }

    /// Materials published strictly between two `DD-MM-YYYY` dates (both
    /// bounds at start of day, both exclusive), earliest first, capped at
    /// `limit`. Fails on malformed bounds.
    pub fn by_date_range(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<Rc<Material>>> {
        let start = parse_date(start)?.and_time(NaiveTime::MIN);
        let end = parse_date(end)?.and_time(NaiveTime::MIN);
        Ok(self.query().select_limited(
            &MaterialFilter::PublishedBetween { start, end },
            SortCriterion::PublicationDate,
            limit,
        ))
    }

    /// Materials of exactly `kind` whose author name contains `author`
    /// (case-insensitive), sorted by author name, capped at `limit`.
    pub fn by_kind_and_author(
        &self,
        kind: MaterialKind,
        author: &str,
        limit: usize,
    ) -> Vec<Rc<Material>> {
        self.query().select_limited(
            &MaterialFilter::KindAndAuthor {
                kind,
                author: author.to_string(),
            },
            SortCriterion::Author,
            limit,
        )
    }

    /// Materials with `min <= rating <= max`, best rating first, capped at
    /// `limit`.
    pub fn by_rating_range(&self, min: i32, max: i32, limit: usize) -> Vec<Rc<Material>> {
        self.query().select_limited(
            &MaterialFilter::RatingBetween { min, max },
            SortCriterion::Rating,
            limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn catalog_with_two_books() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_book("Zeta", "Martin", 50, "01-02-2018", &[Topic::Ai], "1", 100)
            .unwrap();
        catalog
            .add_book("Alpha", "MARTIN", 60, "01-02-2020", &[Topic::Iot], "2", 120)
            .unwrap();
        catalog
    }

    #[test]
    fn test_registration_appends_and_resolves_author() {
        let catalog = catalog_with_two_books();
        assert_eq!(catalog.material_count(), 2);
        // Case-variant author names resolve to one shared identity.
        assert_eq!(catalog.author_count(), 1);

        let materials = catalog.materials();
        assert!(Rc::ptr_eq(materials[0].author(), materials[1].author()));
    }

    #[test]
    fn test_publication_time_is_start_of_day() {
        let catalog = catalog_with_two_books();
        for material in catalog.materials() {
            assert_eq!(material.published_at().time(), NaiveTime::MIN);
        }
    }

    #[test]
    fn test_materials_view_is_naturally_ordered_snapshot() {
        let mut catalog = catalog_with_two_books();
        let snapshot = catalog.materials();
        let titles: Vec<&str> = snapshot.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Alpha", "Zeta"]);

        // Later registrations do not show up in an earlier snapshot.
        catalog
            .add_video("Beta", "Pilar", 40, "01-01-2021", &[Topic::Web], 5)
            .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(catalog.materials().len(), 3);
    }

    #[test]
    fn test_invalid_date_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        let result = catalog.add_book(
            "Broken",
            "Nobody",
            10,
            "31-13-2020",
            &[Topic::Java],
            "3",
            50,
        );

        assert!(result.is_err());
        assert_eq!(catalog.material_count(), 0);
        // The author registry must not grow either.
        assert_eq!(catalog.author_count(), 0);
    }

    #[test]
    fn test_by_date_range_rejects_malformed_bounds() {
        let catalog = catalog_with_two_books();
        assert!(catalog.by_date_range("31-13-2020", "01-01-2021", 5).is_err());
        assert!(catalog.by_date_range("01-01-2017", "garbage", 5).is_err());
    }
}
