//! # Scribe Core
//!
//! The domain layer of the Scribe blog service.
//! This crate contains the blog lifecycle and search logic with zero
//! infrastructure dependencies; stores plug in through [`ports`].

pub mod converter;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::BlogService;
