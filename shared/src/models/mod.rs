//! Data models
//!
//! Entities are owned and persisted by the external rental API; this
//! workspace only reads them. Wire format is camelCase JSON, ids are
//! serialized as `_id`.

pub mod car;
pub mod credit;
pub mod quote;
pub mod rental;
pub mod service;
pub mod tier;

// Re-exports
pub use car::*;
pub use credit::*;
pub use quote::*;
pub use rental::*;
pub use service::*;
pub use tier::*;
