//! Secondary store mirror synchronization
//!
//! One-shot snapshot copy from the primary store into the in-memory
//! secondary store, run synchronously before the server starts
//! accepting requests. The mirror is never written again by this layer,
//! and drift introduced afterward is not tracked.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::ProductRepository;
use crate::utils::AppResult;

/// Outcome of a warm-up pass
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorReport {
    pub copied: usize,
    pub failed: usize,
}

/// Copies the primary store's contents into the secondary store
pub struct MirrorService {
    primary: ProductRepository,
    secondary: ProductRepository,
}

impl MirrorService {
    pub fn new(primary: Surreal<Db>, secondary: Surreal<Db>) -> Self {
        Self {
            primary: ProductRepository::new(primary),
            secondary: ProductRepository::new(secondary),
        }
    }

    /// Replicate every primary record into the secondary store,
    /// keyed by its existing id (overwrite if present).
    ///
    /// A primary read failure propagates fatally — startup must not
    /// silently produce an empty mirror. Individual secondary write
    /// failures are logged and counted, and the pass continues.
    pub async fn warm_up(&self) -> AppResult<MirrorReport> {
        let products = self.primary.find_all().await?;

        let mut report = MirrorReport::default();
        for product in &products {
            match self.secondary.upsert_snapshot(product).await {
                Ok(_) => report.copied += 1,
                Err(e) => {
                    tracing::warn!(id = ?product.id, error = %e, "Failed to mirror product");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            copied = report.copied,
            failed = report.failed,
            "In-memory mirror warm-up complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ProductRecord;
    use std::collections::HashSet;
    use surrealdb::engine::local::Mem;

    async fn test_db() -> Surreal<Db> {
        let db = Surreal::new::<Mem>(()).await.expect("in-memory engine");
        db.use_ns("test").use_db("test").await.expect("namespace");
        db
    }

    fn record(name: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            value: "1.00".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_warm_up_copies_full_snapshot() {
        let primary = test_db().await;
        let secondary = test_db().await;

        let repo = ProductRepository::new(primary.clone());
        let mut expected = HashSet::new();
        for name in ["A", "B", "C"] {
            let product = repo.create(record(name)).await.unwrap();
            expected.insert(product.id.unwrap().to_string());
        }

        let mirror = MirrorService::new(primary, secondary.clone());
        let report = mirror.warm_up().await.unwrap();
        assert_eq!(report.copied, 3);
        assert_eq!(report.failed, 0);

        let mirrored: HashSet<String> = ProductRepository::new(secondary)
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.unwrap().to_string())
            .collect();
        assert_eq!(mirrored, expected);
    }

    #[tokio::test]
    async fn test_warm_up_over_empty_primary_is_a_noop() {
        let primary = test_db().await;
        let secondary = test_db().await;

        let mirror = MirrorService::new(primary, secondary.clone());
        let report = mirror.warm_up().await.unwrap();
        assert_eq!(report.copied, 0);
        assert_eq!(report.failed, 0);

        let mirrored = ProductRepository::new(secondary).find_all().await.unwrap();
        assert!(mirrored.is_empty());
    }

    #[tokio::test]
    async fn test_warm_up_continues_past_failing_records() {
        let primary = test_db().await;
        let secondary = test_db().await;

        // The secondary rejects one specific record; the pass must
        // carry on and count the failure instead of aborting.
        secondary
            .query("DEFINE FIELD name ON TABLE product ASSERT $value != 'Recalled'")
            .await
            .unwrap()
            .check()
            .unwrap();

        let repo = ProductRepository::new(primary.clone());
        repo.create(record("A")).await.unwrap();
        repo.create(record("Recalled")).await.unwrap();
        repo.create(record("B")).await.unwrap();

        let mirror = MirrorService::new(primary, secondary.clone());
        let report = mirror.warm_up().await.unwrap();
        assert_eq!(report.copied, 2);
        assert_eq!(report.failed, 1);

        let mirrored: Vec<String> = ProductRepository::new(secondary)
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(mirrored.len(), 2);
        assert!(!mirrored.contains(&"Recalled".to_string()));
    }

    #[tokio::test]
    async fn test_warm_up_is_idempotent() {
        let primary = test_db().await;
        let secondary = test_db().await;

        let repo = ProductRepository::new(primary.clone());
        repo.create(record("A")).await.unwrap();
        repo.create(record("B")).await.unwrap();

        let mirror = MirrorService::new(primary, secondary.clone());
        mirror.warm_up().await.unwrap();
        let report = mirror.warm_up().await.unwrap();
        assert_eq!(report.copied, 2);

        // Second pass overwrites by id instead of duplicating
        let mirrored = ProductRepository::new(secondary).find_all().await.unwrap();
        assert_eq!(mirrored.len(), 2);
    }
}
