//! Domain model for the catalog: materials, authors and topic tags.

pub mod author;
pub mod material;
pub mod topic;

pub use author::Author;
pub use material::{Level, Material, MaterialDetails, MaterialKind};
pub use topic::Topic;

use chrono::NaiveDate;

use crate::error::Result;

/// The only external textual date representation in the system: `DD-MM-YYYY`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `DD-MM-YYYY` date string.
///
/// Fails with [`crate::CatalogError::InvalidDate`] when the text does not
/// match the pattern or names an invalid calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text, DATE_FORMAT)?)
}

/// Format a date back to `DD-MM-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
