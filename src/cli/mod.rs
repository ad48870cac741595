//! Command-line interface for the catalog demo binary.

pub mod app;
pub mod dataset;

pub use app::{Cli, Commands};
