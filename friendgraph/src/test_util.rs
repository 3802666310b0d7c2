use crate::model::Profile;
use crate::FriendGraph;

pub const NAMES: &[&str] = &["alice", "bob", "carol", "dave", "erin", "frank"];

pub fn test_profile(i: usize) -> Profile {
    Profile::new(NAMES[i], NAMES[i].to_uppercase())
}

/// A graph of the first `n` [test_profile]s with no friendships.
pub fn test_graph(n: usize) -> FriendGraph {
    FriendGraph::new((0..n).map(test_profile)).expect("test profiles are unique")
}
