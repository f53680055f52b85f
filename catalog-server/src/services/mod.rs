//! Service layer — the orchestration core
//!
//! - [`catalog`] - product CRUD, ingestion, pagination
//! - [`feed`] - external product feed client
//! - [`mirror`] - startup synchronization into the secondary store
//! - [`hypermedia`] - link and page-view assembly

pub mod catalog;
pub mod feed;
pub mod hypermedia;
pub mod mirror;

pub use catalog::CatalogService;
pub use feed::FeedService;
pub use mirror::{MirrorReport, MirrorService};
