//! Product Repository

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Product, ProductRecord};

const PRODUCT_TABLE: &str = "product";

/// Accept both "product:key" and bare "key" id forms
fn record_key(id: &str) -> String {
    id.strip_prefix("product:").unwrap_or(id).to_string()
}

#[derive(Debug, Deserialize)]
struct TotalRow {
    total: u64,
}

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new product; the store assigns the id
    pub async fn create(&self, record: ProductRecord) -> RepoResult<Product> {
        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(record)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Find all products in natural (id) order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY id")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self
            .base
            .db()
            .select((PRODUCT_TABLE, record_key(id)))
            .await?;
        Ok(product)
    }

    /// Whole-collection element count
    pub async fn count(&self) -> RepoResult<u64> {
        let totals: Vec<TotalRow> = self
            .base
            .db()
            .query("SELECT count() AS total FROM product GROUP ALL")
            .await?
            .take(0)?;
        Ok(totals.first().map(|row| row.total).unwrap_or(0))
    }

    /// Bounded scan: one page of products plus the whole-collection count
    ///
    /// Page boundaries are computed from the requested zero-based index
    /// and size against the current total; ordering is by id, which is
    /// stable for a given store state.
    pub async fn find_page(&self, page: usize, size: usize) -> RepoResult<(Vec<Product>, u64)> {
        // An offset that overflows is past anything the store could
        // hold; same contract as any other out-of-range page.
        let start = (page as u64)
            .checked_mul(size as u64)
            .and_then(|s| i64::try_from(s).ok());
        let Some(start) = start else {
            return Ok((Vec::new(), self.count().await?));
        };

        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY id LIMIT $limit START $start")
            .query("SELECT count() AS total FROM product GROUP ALL")
            .bind(("limit", size as i64))
            .bind(("start", start))
            .await?;

        let products: Vec<Product> = result.take(0)?;
        let totals: Vec<TotalRow> = result.take(1)?;
        let total = totals.first().map(|row| row.total).unwrap_or(0);
        Ok((products, total))
    }

    /// Overwrite name and value in place; the id is untouched
    pub async fn update(&self, id: &str, record: ProductRecord) -> RepoResult<Product> {
        let updated: Option<Product> = self
            .base
            .db()
            .update((PRODUCT_TABLE, record_key(id)))
            .merge(record)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<Product> = self
            .base
            .db()
            .delete((PRODUCT_TABLE, record_key(id)))
            .await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }

    /// Write a snapshot of an already-persisted product, keyed by its
    /// existing id (overwrite if present). Used by the mirror warm-up.
    pub async fn upsert_snapshot(&self, product: &Product) -> RepoResult<Product> {
        let id = product
            .id
            .as_ref()
            .ok_or_else(|| RepoError::Validation("product has no id".to_string()))?;

        let saved: Option<Product> = self
            .base
            .db()
            .upsert((PRODUCT_TABLE, id.key().to_string()))
            .content(ProductRecord::from(product))
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to mirror product".to_string()))
    }
}
