//! Request schema for relationship insertion.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A request to connect two Locations with a distance and a bearing.
///
/// `angle` is the bearing in degrees from `from_node` to `to_node`,
/// conventionally in [0, 360). The reverse edge gets the reciprocal bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRequest {
    pub from_node: String,
    pub to_node: String,
    pub distance: f64,
    pub angle: f64,
}

impl RelationshipRequest {
    /// Check the boundary invariants: non-empty node names that differ.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from_node.is_empty() || self.to_node.is_empty() {
            return Err(ValidationError::EmptyNodeName);
        }
        if self.from_node == self.to_node {
            return Err(ValidationError::SameNode);
        }
        Ok(())
    }
}
