//! Request authentication
//!
//! The quote service does not verify tokens itself: the rental API is the
//! authority. A bearer token is extracted into [`AuthContext`] and forwarded
//! to the credits lookup, which rejects it if it is invalid.
//!
//! - [`AuthContext`] - caller identity passed explicitly to consumers
//! - [`extract_bearer`] - parse `Authorization: Bearer <token>`

pub mod context;
pub mod extractor;

pub use context::{AuthContext, extract_bearer};
