use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;

use crate::graph::FriendGraph;
use crate::model::Username;

/// Undirected petgraph view of a [FriendGraph]. Node indices match the graph's insertion order.
pub type Network = UnGraph<Username, ()>;

impl FriendGraph {
    /// Copies the vertex set and friendships into a [Network] for use with petgraph algorithms.
    pub fn to_network(&self) -> Network {
        let mut network = Network::with_capacity(self.len(), self.friendship_count());
        let nodes = self
            .profiles()
            .map(|profile| network.add_node(profile.username().clone()))
            .collect::<Vec<_>>();
        for (i, j) in self.matrix.edges() {
            network.add_edge(nodes[i], nodes[j], ());
        }
        network
    }

    /// Number of disconnected friend circles. Every profile without friends is its own circle.
    pub fn community_count(&self) -> usize {
        connected_components(&self.to_network())
    }
}
