//! HTTP client for the Bazaar storefront backend.
//!
//! One [`ApiClient`] serves every screen: the generic CRUD surface
//! (list/create/update/remove) is driven by [`bazaar_model::Resource`]
//! metadata, and the handful of resource-specific verbs (inventory
//! adjustment, order status, contact replies, user notifications) are
//! explicit methods. Each operation is exactly one HTTP request; responses
//! are decoded and returned directly, with no retry layer.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod form;

pub use client::{ApiClient, ApiConfig};
pub use endpoints::InventoryOp;
pub use error::{ApiError, Result};
pub use form::{EncodedField, FilePart};
