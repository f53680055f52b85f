//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Product entity
///
/// The id is assigned by the primary store on first save and never
/// changes afterwards; name and value are the only mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub value: Decimal,
}

/// Create/update request body
///
/// Updates are a full overwrite of both mutable fields, not a merge,
/// so both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductRecord {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub value: Decimal,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            value: product.value,
        }
    }
}
