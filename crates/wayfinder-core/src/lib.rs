//! wayfinder-core: Shared types for the Wayfinder location graph.
//!
//! This crate provides the request schema shared by the HTTP layer and the
//! graph crate, plus the validation errors surfaced at the service boundary.

pub mod error;
pub mod schema;

pub use error::ValidationError;
pub use schema::RelationshipRequest;
