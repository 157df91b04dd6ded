//! # Scribe Infrastructure
//!
//! Concrete implementations of the blog store port defined in `scribe-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL store via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryBlogRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
