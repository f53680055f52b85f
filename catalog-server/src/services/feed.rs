//! External product feed client
//!
//! Fetches the full upstream catalog as raw (title, price) records.
//! Failures are classified into exactly two caller-visible kinds:
//! transport-level failure (503) and a successful-but-empty response
//! (404), which must stay distinguishable.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::db::models::ProductRecord;
use crate::utils::{AppError, AppResult};

pub const API_OUT_OF_SERVICE_MSG: &str = "The API fake store is out of service";
pub const NO_PRODUCTS_MSG: &str = "No products found";

/// Raw feed record in the upstream's external shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedProduct {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(alias = "price")]
    pub value: Decimal,
}

impl From<FeedProduct> for ProductRecord {
    fn from(record: FeedProduct) -> Self {
        Self {
            name: record.name,
            value: record.value,
        }
    }
}

/// HTTP client for the external product feed
#[derive(Clone)]
pub struct FeedService {
    client: Client,
    base_url: String,
}

impl FeedService {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build feed client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetch the complete upstream catalog
    ///
    /// A null payload and zero records are the same retrievable-but-empty
    /// condition; both are distinct from a transport failure.
    pub async fn fetch_all(&self) -> AppResult<Vec<FeedProduct>> {
        let url = format!("{}/products", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Feed request failed");
            AppError::out_of_service(API_OUT_OF_SERVICE_MSG)
        })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Feed returned an error status");
            return Err(AppError::out_of_service(API_OUT_OF_SERVICE_MSG));
        }

        let records: Option<Vec<FeedProduct>> = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Failed to parse feed response: {e}")))?;

        match records {
            Some(records) if !records.is_empty() => Ok(records),
            _ => Err(AppError::not_found(NO_PRODUCTS_MSG)),
        }
    }
}
