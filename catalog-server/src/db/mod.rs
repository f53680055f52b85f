//! Database Module
//!
//! Opens the two embedded SurrealDB engines: a durable RocksDB-backed
//! primary store under the work directory, and an in-memory secondary
//! store that serves as the startup-synchronized mirror.

pub mod models;
pub mod repository;

use std::path::PathBuf;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "catalog";
const DATABASE: &str = "catalog";

/// Database service — owns one embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the durable primary store under `work_dir/catalog.db`
    pub async fn open_durable(work_dir: &str) -> Result<Self, AppError> {
        std::fs::create_dir_all(work_dir)
            .map_err(|e| AppError::database(format!("Failed to create work dir: {e}")))?;

        let path = PathBuf::from(work_dir).join("catalog.db");
        let db = Surreal::new::<RocksDb>(path.to_string_lossy().into_owned())
            .await
            .map_err(|e| AppError::database(format!("Failed to open primary store: {e}")))?;
        Self::select_ns(&db).await?;

        tracing::info!(work_dir = %work_dir, "Primary store opened (embedded RocksDB)");
        Ok(Self { db })
    }

    /// Open the in-memory secondary store
    pub async fn open_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open secondary store: {e}")))?;
        Self::select_ns(&db).await?;

        tracing::info!("Secondary store opened (in-memory)");
        Ok(Self { db })
    }

    async fn select_ns(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))
    }
}
