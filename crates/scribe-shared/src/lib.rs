//! # Scribe Shared
//!
//! Wire types shared between the blog service and its clients.
//! Nothing in here knows about storage; these are the request, response,
//! and error shapes that cross the HTTP boundary.

pub mod dto;
pub mod response;
pub mod taxonomy;

pub use dto::{BlogRequest, BlogResponse, PageResponse};
pub use response::{ErrorCode, ErrorResponse};
pub use taxonomy::{Category, Tag, UnknownVariant};
