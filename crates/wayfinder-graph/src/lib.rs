//! Wayfinder Graph — Neo4j client for the location graph.
//!
//! This crate is the single mutation point for the location graph. All reads
//! and writes flow through [`GraphClient`] so that the dual-edge invariant
//! (every connection exists in both directions with reciprocal bearings) is
//! enforced in one place.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use mutations::{reciprocal_angle, CreatedRelationship};
pub use queries::{ConnectionRecord, RelationCheck};
