use thiserror::Error;

use crate::model::Username;

/// Failure of a single [crate::FriendGraph] operation. The graph is left unchanged.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GraphError {
    #[error("Duplicate profile: '{0}' is already in the network.")]
    DuplicateVertex(Username),

    #[error("Invalid username '{0}': usernames must be non-empty and contain no whitespace.")]
    InvalidUsername(Username),

    #[error("Unknown profile: '{0}' is not in the network.")]
    UnknownVertex(Username),

    #[error("Invalid friendship: '{0}' cannot be friends with themselves.")]
    SelfEdge(Username),
}
