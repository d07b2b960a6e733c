//! `invoicedesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod reducer;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, RequiredField, ValidationError};
pub use reducer::Reducer;
