use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::FeedService;
use crate::utils::AppResult;

/// Shared server state
///
/// The primary store is authoritative; the secondary store is the
/// in-memory mirror written only by the startup warm-up.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub primary: Surreal<Db>,
    pub secondary: Surreal<Db>,
    pub feed: FeedService,
}

impl ServerState {
    pub fn new(
        config: Config,
        primary: Surreal<Db>,
        secondary: Surreal<Db>,
        feed: FeedService,
    ) -> Self {
        Self {
            config,
            primary,
            secondary,
            feed,
        }
    }

    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let primary = DbService::open_durable(&config.work_dir).await?.db;
        let secondary = DbService::open_memory().await?.db;
        let feed = FeedService::new(
            config.feed_base_url.clone(),
            Duration::from_millis(config.feed_timeout_ms),
        )?;

        Ok(Self::new(config.clone(), primary, secondary, feed))
    }
}
