//! Observability module - request ids and request context on errors.

mod request_context;

pub use request_context::RequestContextMiddleware;
