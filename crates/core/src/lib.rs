//! Photo domain model.
//!
//! Validates raw photo API records into [`photo::Photo`] entities, derives
//! image [`dimensions::Dimensions`] from photo URLs and partitions photo
//! collections by album.

pub mod dimensions;
pub mod error;
pub mod group;
pub mod photo;
pub mod types;
