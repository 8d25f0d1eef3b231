//! Photo browsing pipeline.
//!
//! [`PhotoBrowser`] is the single entry point callers use: it validates
//! arguments, fetches raw records through a
//! [`PhotoGateway`](photoview_gateway::PhotoGateway), validates each record
//! into a [`Photo`](photoview_core::photo::Photo) and optionally groups the
//! result by album.

pub mod browser;
pub mod error;

pub use browser::{PhotoBrowser, DEFAULT_LIMIT};
pub use error::BrowserError;
