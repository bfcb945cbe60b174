//! Write operations for the location graph.
//!
//! All mutations use MERGE (upsert) semantics: Locations are created on first
//! reference and re-inserting a connection rewrites the edge properties
//! instead of duplicating the edge.

use chrono::Utc;
use neo4rs::query;

use wayfinder_core::RelationshipRequest;

use crate::client::{GraphClient, GraphError};

/// Endpoints of a relationship pair that was just written.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CreatedRelationship {
    pub from: String,
    pub to: String,
}

/// Reciprocal bearing: a bearing and its reverse differ by 180 degrees.
/// The result is always normalized into [0, 360).
pub fn reciprocal_angle(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0)
}

impl GraphClient {
    /// Upsert both Locations and both directed CONNECTED_TO edges between
    /// them: forward with the given distance/angle, reverse with the same
    /// distance and the reciprocal angle.
    ///
    /// Issued as a single Cypher statement so the pair commits atomically;
    /// a failure leaves no partial edge behind.
    pub async fn try_create_relationship(
        &self,
        req: &RelationshipRequest,
    ) -> Result<Option<CreatedRelationship>, GraphError> {
        let q = query(
            "MERGE (from:Location {name: $from_node})
             ON CREATE SET from.first_seen = $now
             SET from.last_seen = $now
             MERGE (to:Location {name: $to_node})
             ON CREATE SET to.first_seen = $now
             SET to.last_seen = $now
             MERGE (from)-[r1:CONNECTED_TO]->(to)
             SET r1.distance = $distance,
                 r1.angle = $angle
             MERGE (to)-[r2:CONNECTED_TO]->(from)
             SET r2.distance = $distance,
                 r2.angle = $reverse_angle
             RETURN from.name AS from_name, to.name AS to_name",
        )
        .param("from_node", req.from_node.clone())
        .param("to_node", req.to_node.clone())
        .param("distance", req.distance)
        .param("angle", req.angle)
        .param("reverse_angle", reciprocal_angle(req.angle))
        .param("now", Utc::now().to_rfc3339());

        match self.query_one(q).await? {
            Some(row) => {
                let from: String = row.get("from_name").map_err(|e| {
                    GraphError::Deserialization(format!("Failed to read from_name: {e}"))
                })?;
                let to: String = row.get("to_name").map_err(|e| {
                    GraphError::Deserialization(format!("Failed to read to_name: {e}"))
                })?;
                Ok(Some(CreatedRelationship { from, to }))
            }
            None => Ok(None),
        }
    }

    /// Fail-open form of [`try_create_relationship`]: store errors are logged
    /// and collapsed into `None`, the only failure signal callers see.
    /// No retry is attempted.
    ///
    /// [`try_create_relationship`]: GraphClient::try_create_relationship
    pub async fn create_relationship(
        &self,
        req: &RelationshipRequest,
    ) -> Option<CreatedRelationship> {
        match self.try_create_relationship(req).await {
            Ok(Some(created)) => {
                tracing::info!(
                    from = %created.from,
                    to = %created.to,
                    distance = req.distance,
                    angle = req.angle,
                    "Relationship created"
                );
                Some(created)
            }
            Ok(None) => {
                tracing::warn!(
                    from = %req.from_node,
                    to = %req.to_node,
                    "Relationship write returned no record"
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    from = %req.from_node,
                    to = %req.to_node,
                    error = %e,
                    "Error creating relationship"
                );
                None
            }
        }
    }

    /// Delete all nodes and relationships in the configured database.
    /// The database itself is untouched.
    pub async fn try_clear_database(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await
    }

    /// Fail-open form of [`try_clear_database`]: returns false on store
    /// error, after logging it. Clearing an already-empty database succeeds.
    ///
    /// [`try_clear_database`]: GraphClient::try_clear_database
    pub async fn clear_database(&self) -> bool {
        match self.try_clear_database().await {
            Ok(()) => {
                tracing::info!(database = %self.database(), "Database cleared");
                true
            }
            Err(e) => {
                tracing::error!(database = %self.database(), error = %e, "Error clearing database");
                false
            }
        }
    }
}
