//! End-to-end searches over the reference dataset (five books, five videos,
//! five courses by three authors).

use learnwithus::cli::dataset::reference_catalog;
use learnwithus::model::{format_date, parse_date, MaterialKind, Topic};
use learnwithus::{Catalog, CatalogError};
use pretty_assertions::assert_eq;

#[test]
fn test_reference_dataset_shape() {
    let catalog = reference_catalog().unwrap();
    assert_eq!(catalog.material_count(), 15);
    assert_eq!(catalog.author_count(), 3);

    let authors: Vec<String> = catalog
        .authors()
        .iter()
        .map(|a| a.name().to_string())
        .collect();
    assert_eq!(authors, vec!["Martin", "Pilar", "Francisca"]);
}

#[test]
fn test_by_topic_returns_exact_subset_in_title_order() {
    let catalog = reference_catalog().unwrap();

    let results = catalog.by_topic(Topic::Python);
    assert!(results.iter().all(|m| m.has_topic(Topic::Python)));

    let titles: Vec<&str> = results.iter().map(|m| m.title()).collect();
    assert_eq!(
        titles,
        vec![
            "ABc Libro 3",
            "Axc Libro 4",
            "BBc Curso 4",
            "BBc Libro 1",
            "Bhy Curso 3",
            "Hyn Curso 1",
            "NBy Video 3",
        ]
    );

    // Everything not returned really lacks the topic.
    let returned = titles.len();
    let lacking = catalog
        .materials()
        .iter()
        .filter(|m| !m.has_topic(Topic::Python))
        .count();
    assert_eq!(returned + lacking, catalog.material_count());
}

#[test]
fn test_rating_range_sorted_descending_no_cap() {
    let catalog = reference_catalog().unwrap();

    let results = catalog.by_rating_sorted(75, 88);
    let ratings: Vec<i32> = results.iter().map(|m| m.rating()).collect();
    assert_eq!(ratings, vec![88, 88, 88, 75, 75, 75]);

    // Ties keep registration order (stable sort).
    let titles: Vec<&str> = results.iter().map(|m| m.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Axc Libro 4",
            "NHy Video 4",
            "BBc Curso 4",
            "ABc Libro 3",
            "NBy Video 3",
            "Bhy Curso 3",
        ]
    );
}

#[test]
fn test_by_title_caps_and_sorts() {
    let catalog = reference_catalog().unwrap();

    let results = catalog.by_title("Libro", 5);
    assert!(results.len() <= 5);
    let titles: Vec<&str> = results.iter().map(|m| m.title()).collect();
    assert_eq!(
        titles,
        vec![
            "ABc Libro 3",
            "Axc Libro 4",
            "Ayt Libro 5",
            "BBc Libro 1",
            "Bca Libro 2",
        ]
    );

    // The match itself is case-insensitive.
    assert_eq!(catalog.by_title("libro", 10).len(), 5);
}

#[test]
fn test_by_title_smaller_cap_keeps_sorted_prefix() {
    let catalog = reference_catalog().unwrap();

    let titles: Vec<String> = catalog
        .by_title("Libro", 2)
        .iter()
        .map(|m| m.title().to_string())
        .collect();
    assert_eq!(titles, vec!["ABc Libro 3", "Axc Libro 4"]);
}

#[test]
fn test_date_format_round_trip() {
    let date = parse_date("01-02-2018").unwrap();
    assert_eq!(format_date(date), "01-02-2018");
}

#[test]
fn test_by_kind_and_author() {
    let catalog = reference_catalog().unwrap();

    let results = catalog.by_kind_and_author(MaterialKind::Book, "Pilar", 3);
    assert!(results.len() <= 3);
    assert!(results.iter().all(|m| m.kind() == MaterialKind::Book));
    assert!(results
        .iter()
        .all(|m| m.author().name().to_lowercase().contains("pilar")));

    let titles: Vec<&str> = results.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["Bca Libro 2"]);

    // Same author fragment, different kind.
    let videos = catalog.by_kind_and_author(MaterialKind::Video, "pilar", 3);
    let titles: Vec<&str> = videos.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["BbC Video 2", "NBy Video 3"]);
}

#[test]
fn test_by_date_range_sorts_then_limits() {
    let catalog = reference_catalog().unwrap();

    let results = catalog
        .by_date_range("01-01-2018", "01-01-2020", 3)
        .unwrap();
    let titles: Vec<&str> = results.iter().map(|m| m.title()).collect();
    // Earliest three of the seven in-range materials, not the first three
    // registered.
    assert_eq!(titles, vec!["BBc Libro 1", "Ayt Libro 5", "Bhy Curso 3"]);
}

#[test]
fn test_by_rating_range_caps_after_sorting() {
    let catalog = reference_catalog().unwrap();

    let results = catalog.by_rating_range(45, 90, 5);
    let ratings: Vec<i32> = results.iter().map(|m| m.rating()).collect();
    assert_eq!(ratings, vec![88, 88, 88, 75, 75]);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let catalog = reference_catalog().unwrap();
    assert!(catalog.by_title("does not exist", 5).is_empty());
    assert!(catalog.by_rating_sorted(95, 100).is_empty());
    assert!(catalog
        .by_date_range("01-01-1990", "01-01-1991", 5)
        .unwrap()
        .is_empty());
}

#[test]
fn test_invalid_date_rejected_without_partial_insertion() {
    let mut catalog = Catalog::new();
    let result = catalog.add_book(
        "Broken",
        "Nobody",
        10,
        "31-13-2020",
        &[Topic::Java],
        "0",
        10,
    );

    assert!(matches!(result, Err(CatalogError::InvalidDate(_))));
    assert_eq!(catalog.material_count(), 0);
    assert_eq!(catalog.author_count(), 0);

    let search = catalog.by_date_range("31-13-2020", "01-01-2021", 3);
    assert!(matches!(search, Err(CatalogError::InvalidDate(_))));
}

#[test]
fn test_author_resolution_is_idempotent_across_registrations() {
    let catalog = reference_catalog().unwrap();

    // "Martin" appears on books, videos and courses; all share one instance.
    let martins: Vec<_> = catalog
        .materials()
        .into_iter()
        .filter(|m| m.author().name() == "Martin")
        .collect();
    assert_eq!(martins.len(), 5);
    for pair in martins.windows(2) {
        assert!(std::rc::Rc::ptr_eq(pair[0].author(), pair[1].author()));
    }
}
