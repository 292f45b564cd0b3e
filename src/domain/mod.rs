//! Domain layer - Pure business abstractions
//!
//! Trait definitions, input types and domain error types. The storage
//! implementations live in `infrastructure`.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
