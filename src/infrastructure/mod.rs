//! Infrastructure Layer
//!
//! Cross-cutting concerns shared by the adapters.

pub mod retry;

pub use retry::BackoffPolicy;
