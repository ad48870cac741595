//! The reference dataset: five books, five videos and five courses by three
//! authors, used by the demo binary and the integration tests.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Level, Topic};

/// Build a catalog pre-loaded with the reference dataset.
pub fn reference_catalog() -> Result<Catalog> {
    use Topic::*;

    let mut catalog = Catalog::new();

    catalog.add_book("BBc Libro 1", "Martin", 50, "01-02-2018", &[Ai, Python], "12345647", 340)?;
    catalog.add_book("Bca Libro 2", "Pilar", 60, "01-02-2020", &[Iot, Management], "32433242", 120)?;
    catalog.add_book("ABc Libro 3", "Francisca", 75, "11-12-2014", &[Java, Python], "3463345345", 110)?;
    catalog.add_book("Axc Libro 4", "Martin", 88, "20-03-2019", &[Algorithms, Python, Javascript], "736564343", 540)?;
    catalog.add_book("Ayt Libro 5", "Francisca", 43, "01-02-2018", &[Java, Mobile], "7346466", 362)?;

    catalog.add_video("Axc Video 1", "Martin", 50, "24-08-2016", &[React, Javascript, Web], 8)?;
    catalog.add_video("BbC Video 2", "Pilar", 60, "08-06-2019", &[Java, Management], 10)?;
    catalog.add_video("NBy Video 3", "Pilar", 75, "17-10-2019", &[Java, Python, Ai], 14)?;
    catalog.add_video("NHy Video 4", "Martin", 88, "09-04-2020", &[React, Algorithms, Mobile], 25)?;
    catalog.add_video("Bac Video 5", "Francisca", 43, "11-02-2020", &[Javascript, Mobile, Web], 12)?;

    catalog.add_course("Hyn Curso 1", "Francisca", 50, "29-03-2017", &[Ai, Python, React], 20.0, false, Level::Base, 6)?;
    catalog.add_course("Abc Curso 2", "Pilar", 60, "30-07-2019", &[Mobile, Management, Ai], 22.0, true, Level::Expert, 12)?;
    catalog.add_course("Bhy Curso 3", "Francisca", 75, "26-06-2018", &[Javascript, Python], 18.0, false, Level::Advanced, 4)?;
    catalog.add_course("BBc Curso 4", "Martin", 88, "20-03-2020", &[Agile, Python, Javascript], 6.0, true, Level::Base, 9)?;
    catalog.add_course("Axy Curso 5", "Pilar", 43, "02-06-2010", &[Management, SoftwareEngineering, Agile], 15.0, true, Level::Advanced, 5)?;

    debug!(
        materials = catalog.material_count(),
        authors = catalog.author_count(),
        "seeded reference catalog"
    );
    Ok(catalog)
}
