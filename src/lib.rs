//! Book catalog data model: authors with derived display fields,
//! backed by sqlite.

pub mod config;
pub mod traits;
pub mod types;
