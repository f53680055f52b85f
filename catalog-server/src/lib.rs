//! Catalog Server - product catalog service with dual-store mirroring
//!
//! # Architecture overview
//!
//! - **Database** (`db`): two embedded SurrealDB engines — a durable
//!   RocksDB primary store and an in-memory secondary mirror
//! - **Services** (`services`): the orchestration core — feed
//!   ingestion, product CRUD, pagination/hypermedia assembly, and the
//!   startup mirror synchronization
//! - **HTTP API** (`api`): thin axum dispatcher; all status mapping
//!   lives on the error type
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/        # configuration, state, server startup
//! ├── db/          # store engines, models, repository
//! ├── services/    # feed, catalog, mirror, hypermedia
//! ├── api/         # HTTP routes and handlers
//! └── utils/       # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::services::{CatalogService, FeedService, MirrorService};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
