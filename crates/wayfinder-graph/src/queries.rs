//! Read operations for the location graph.

use neo4rs::query;

use crate::client::{GraphClient, GraphError};

/// Typed outcome of an existence check.
///
/// The HTTP layer only sees the boolean collapse via [`exists`], which maps
/// `QueryFailed` to false (fail-open, matching the external contract), but
/// the distinction is kept here so a store outage is distinguishable from a
/// genuine miss in the logs.
///
/// [`exists`]: RelationCheck::exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationCheck {
    Found,
    NotFound,
    QueryFailed,
}

impl RelationCheck {
    /// True only when a matching edge was actually found.
    pub fn exists(&self) -> bool {
        matches!(self, RelationCheck::Found)
    }
}

/// Properties of a single directed connection.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ConnectionRecord {
    pub distance: f64,
    pub angle: f64,
}

impl GraphClient {
    /// Whether any CONNECTED_TO edge exists between the two named Locations,
    /// in either direction.
    pub async fn try_relationship_exists(
        &self,
        from_node: &str,
        to_node: &str,
    ) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (a:Location)-[r:CONNECTED_TO]-(b:Location)
             WHERE (a.name = $from_node AND b.name = $to_node)
                OR (a.name = $to_node AND b.name = $from_node)
             RETURN r LIMIT 1",
        )
        .param("from_node", from_node.to_string())
        .param("to_node", to_node.to_string());

        Ok(self.query_one(q).await?.is_some())
    }

    /// Existence check with the store error swallowed into
    /// [`RelationCheck::QueryFailed`] after logging.
    pub async fn check_relationship(&self, from_node: &str, to_node: &str) -> RelationCheck {
        match self.try_relationship_exists(from_node, to_node).await {
            Ok(true) => RelationCheck::Found,
            Ok(false) => RelationCheck::NotFound,
            Err(e) => {
                tracing::error!(
                    from = %from_node,
                    to = %to_node,
                    error = %e,
                    "Error checking relationship"
                );
                RelationCheck::QueryFailed
            }
        }
    }

    /// Boolean existence check. Direction-symmetric, and false on store
    /// failure (fail-open).
    pub async fn relationship_exists(&self, from_node: &str, to_node: &str) -> bool {
        self.check_relationship(from_node, to_node).await.exists()
    }

    /// Read back the directed connection from one Location to another.
    pub async fn connection_between(
        &self,
        from_node: &str,
        to_node: &str,
    ) -> Result<Option<ConnectionRecord>, GraphError> {
        let q = query(
            "MATCH (a:Location {name: $from_node})-[r:CONNECTED_TO]->(b:Location {name: $to_node})
             RETURN r.distance AS distance, r.angle AS angle
             LIMIT 1",
        )
        .param("from_node", from_node.to_string())
        .param("to_node", to_node.to_string());

        match self.query_one(q).await? {
            Some(row) => {
                let distance: f64 = row.get("distance").map_err(|e| {
                    GraphError::Deserialization(format!("Failed to read distance: {e}"))
                })?;
                let angle: f64 = row.get("angle").map_err(|e| {
                    GraphError::Deserialization(format!("Failed to read angle: {e}"))
                })?;
                Ok(Some(ConnectionRecord { distance, angle }))
            }
            None => Ok(None),
        }
    }

    /// Count Location nodes in the database.
    pub async fn count_locations(&self) -> Result<i64, GraphError> {
        let q = query("MATCH (n:Location) RETURN count(n) AS cnt");
        match self.query_one(q).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }

    /// Count directed CONNECTED_TO edges in the database.
    pub async fn count_connections(&self) -> Result<i64, GraphError> {
        let q = query("MATCH (:Location)-[r:CONNECTED_TO]->(:Location) RETURN count(r) AS cnt");
        match self.query_one(q).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}
