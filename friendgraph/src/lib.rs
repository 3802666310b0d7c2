pub use command::{Command, CommandError};
pub use graph::{AdjacencyMatrix, FriendGraph, GraphError, Network};
pub use input::Input;
pub use model::{Profile, Username};
pub use output::Output;
pub use session::{Format, Session, Summary};

pub mod command;
pub mod graph;
pub mod input;
pub mod model;
pub mod output;
pub mod session;

#[cfg(test)]
pub(crate) mod test_util;
