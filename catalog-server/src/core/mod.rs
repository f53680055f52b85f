//! Core module - server configuration, state and startup
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared state (stores + feed client)
//! - [`Server`] - HTTP server with mirror warm-up barrier

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
