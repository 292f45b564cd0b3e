//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Schema DDL (schema)
//! - Database connection and migrations (db)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Demo data (seed)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod config;
pub mod db;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
