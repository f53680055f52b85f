//! Database models

pub mod product;
pub mod serde_helpers;

pub use product::{Product, ProductRecord};
