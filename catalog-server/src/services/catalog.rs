//! Catalog Service — product orchestration over the primary store
//!
//! Converts feed records to entities, persists, updates, deletes,
//! paginates, and attaches navigation links. Every operation returns
//! either a success value or one kind from the closed [`AppError`]
//! taxonomy; status translation belongs to the dispatcher.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::feed::FeedService;
use super::hypermedia::{self, PagedProducts, ProductView};
use crate::db::models::{Product, ProductRecord};
use crate::db::repository::ProductRepository;
use crate::utils::{AppError, AppResult};

pub const PRODUCT_NOT_FOUND_MSG: &str = "This product was not found. Try again.";
pub const NO_PRODUCTS_TO_LIST_MSG: &str = "There are no products to list";
pub const SAVE_FAILED_MSG: &str = "Failed to save product";

pub struct CatalogService {
    repo: ProductRepository,
    feed: FeedService,
}

impl CatalogService {
    pub fn new(primary: Surreal<Db>, feed: FeedService) -> Self {
        Self {
            repo: ProductRepository::new(primary),
            feed,
        }
    }

    /// Fetch the external catalog and persist every record, assigning a
    /// fresh id per entity. Returns the persisted list in feed order.
    /// Feed errors propagate untranslated.
    pub async fn ingest_from_feed(&self) -> AppResult<Vec<Product>> {
        let records = self.feed.fetch_all().await?;

        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            saved.push(self.repo.create(record.into()).await?);
        }
        tracing::info!(count = saved.len(), "Ingested products from feed");
        Ok(saved)
    }

    /// Persist a batch of create requests in order.
    ///
    /// A store failure fails the whole batch as SaveFailed; writes
    /// already committed before the failure stay in place (no
    /// cross-record transaction).
    pub async fn create_many(&self, records: Vec<ProductRecord>) -> AppResult<Vec<Product>> {
        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            let product = self
                .repo
                .create(record)
                .await
                .map_err(|e| AppError::save_failed(format!("{}: {}", SAVE_FAILED_MSG, e)))?;
            saved.push(product);
        }
        Ok(saved)
    }

    /// Bounded scan in the store's natural order, wrapped with per-item
    /// self links and page metadata. Any empty page — including an
    /// out-of-range index — is NoContent, not an error of its own.
    pub async fn list_page(&self, page: usize, size: usize) -> AppResult<PagedProducts> {
        if size == 0 {
            return Err(AppError::validation("page size must be at least 1"));
        }

        let (items, total) = self.repo.find_page(page, size).await?;
        if items.is_empty() {
            return Err(AppError::no_content(NO_PRODUCTS_TO_LIST_MSG));
        }

        Ok(hypermedia::page_of(items, page, size, total))
    }

    /// Fetch one product and attach a link back to the listing
    pub async fn get_one(&self, id: &str) -> AppResult<ProductView> {
        let product = self.find_existing(id).await?;
        Ok(hypermedia::attach_list(product))
    }

    /// Overwrite name and value of an existing product; id untouched
    pub async fn update(&self, id: &str, record: ProductRecord) -> AppResult<Product> {
        self.find_existing(id).await?;
        let updated = self.repo.update(id, record).await?;
        Ok(updated)
    }

    /// Remove a product from the primary store.
    /// The secondary mirror is intentionally left stale.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.find_existing(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    async fn find_existing(&self, id: &str) -> AppResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND_MSG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;
    use surrealdb::engine::local::Mem;

    async fn test_db() -> Surreal<Db> {
        let db = Surreal::new::<Mem>(()).await.expect("in-memory engine");
        db.use_ns("test").use_db("test").await.expect("namespace");
        db
    }

    // The feed is not exercised by CRUD tests; point it at a closed port.
    fn dead_feed() -> FeedService {
        FeedService::new("http://127.0.0.1:1".to_string(), Duration::from_millis(200))
            .expect("feed client")
    }

    async fn service() -> CatalogService {
        CatalogService::new(test_db().await, dead_feed())
    }

    fn record(name: &str, value: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            value: value.parse().expect("decimal literal"),
        }
    }

    #[tokio::test]
    async fn test_create_many_preserves_order_and_assigns_distinct_ids() {
        let catalog = service().await;

        let saved = catalog
            .create_many(vec![
                record("First", "1.00"),
                record("Second", "2.00"),
                record("Third", "3.00"),
            ])
            .await
            .unwrap();

        let names: Vec<&str> = saved.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);

        let ids: HashSet<String> = saved
            .iter()
            .map(|p| p.id.as_ref().expect("id assigned").to_string())
            .collect();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_list_page_empty_store_is_no_content() {
        let catalog = service().await;
        let result = catalog.list_page(0, 20).await;
        assert!(
            matches!(result, Err(AppError::NoContent(ref msg)) if msg == NO_PRODUCTS_TO_LIST_MSG)
        );
    }

    #[tokio::test]
    async fn test_list_page_out_of_range_is_no_content() {
        let catalog = service().await;
        catalog.create_many(vec![record("Only", "1.00")]).await.unwrap();

        let result = catalog.list_page(7, 20).await;
        assert!(matches!(result, Err(AppError::NoContent(_))));
    }

    #[tokio::test]
    async fn test_list_page_huge_index_is_no_content() {
        let catalog = service().await;
        catalog.create_many(vec![record("Only", "1.00")]).await.unwrap();

        // Even an index whose offset would overflow is just an empty page
        let result = catalog.list_page(usize::MAX, 2).await;
        assert!(matches!(result, Err(AppError::NoContent(_))));
    }

    #[tokio::test]
    async fn test_list_page_bounds_and_total_count() {
        let catalog = service().await;
        let records = (0..5).map(|i| record(&format!("Item {i}"), "1.00")).collect();
        catalog.create_many(records).await.unwrap();

        let page = catalog.list_page(0, 4).await.unwrap();
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.page.total_elements, 5);
        assert_eq!(page.page.total_pages, 2);

        // Every item carries a resolvable self link
        for item in &page.items {
            let id = item.product.id.as_ref().unwrap();
            assert_eq!(item.links[0].href, format!("/products/{id}"));
        }
    }

    #[tokio::test]
    async fn test_list_page_zero_size_is_rejected() {
        let catalog = service().await;
        assert!(matches!(
            catalog.list_page(0, 0).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_one_attaches_list_link() {
        let catalog = service().await;
        let saved = catalog
            .create_many(vec![record("Keyboard", "49.90")])
            .await
            .unwrap();
        let id = saved[0].id.as_ref().unwrap().to_string();

        let view = catalog.get_one(&id).await.unwrap();
        assert_eq!(view.product.name, "Keyboard");
        assert_eq!(view.links[0].rel, "products");
        assert_eq!(view.links[0].href, "/products");
    }

    #[tokio::test]
    async fn test_get_one_missing_uses_canonical_message() {
        let catalog = service().await;
        let result = catalog.get_one("product:missing").await;
        assert!(
            matches!(result, Err(AppError::NotFound(ref msg)) if msg == PRODUCT_NOT_FOUND_MSG)
        );
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_round_trips() {
        let catalog = service().await;
        let saved = catalog
            .create_many(vec![record("Monitor", "150.00")])
            .await
            .unwrap();
        let id = saved[0].id.as_ref().unwrap().to_string();

        let updated = catalog.update(&id, record("Monitor 24\"", "139.99")).await.unwrap();
        assert_eq!(updated.id.as_ref().unwrap().to_string(), id);
        assert_eq!(updated.name, "Monitor 24\"");

        let view = catalog.get_one(&id).await.unwrap();
        assert_eq!(view.product.name, "Monitor 24\"");
        assert_eq!(view.product.value, "139.99".parse().unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let catalog = service().await;
        let result = catalog.update("product:missing", record("X", "1.00")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let catalog = service().await;
        let saved = catalog
            .create_many(vec![record("Cable", "5.00")])
            .await
            .unwrap();
        let id = saved[0].id.as_ref().unwrap().to_string();

        catalog.delete(&id).await.unwrap();
        assert!(matches!(
            catalog.get_one(&id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ingest_propagates_feed_transport_failure() {
        let catalog = service().await;
        let result = catalog.ingest_from_feed().await;
        assert!(matches!(result, Err(AppError::OutOfService(_))));
    }
}
