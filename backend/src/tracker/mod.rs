//! Exercise tracker module
//!
//! Users and their exercise records, stored in a SQLite database.

pub mod dates;
pub mod db;
pub mod models;

pub use db::{LogFilter, TrackerDb};
pub use models::{Exercise, User};
