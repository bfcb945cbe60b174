use thiserror::Error;

/// Boundary validation errors for relationship requests.
///
/// These never reach the graph store: a request that fails validation is
/// rejected at the HTTP layer with the error's display text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cannot create relationship between the same node.")]
    SameNode,

    #[error("from_node and to_node must be non-empty.")]
    EmptyNodeName,
}
