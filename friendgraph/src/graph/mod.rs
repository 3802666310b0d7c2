use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

pub use error::GraphError;
pub use matrix::AdjacencyMatrix;
pub use network::Network;

use crate::model::{Profile, Username};

mod error;
mod matrix;
mod network;

/// Undirected social network over a growing set of [Profile]s.
///
/// Profiles are kept in insertion order, and a profile's position in that order is its row and
/// column in the [AdjacencyMatrix]. The graph owns its profiles and is the single source of truth
/// for them; callers refer to vertices by [Username].
///
/// Every fallible operation either succeeds completely or returns a [GraphError] and leaves the
/// graph as it was.
#[derive(Debug, Default, Clone)]
pub struct FriendGraph {
    profiles: Vec<Profile>,
    index: HashMap<Username, usize>,
    matrix: AdjacencyMatrix,
}

impl FriendGraph {
    /// Creates a graph from an initial list of profiles with no friendships.
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Result<Self, GraphError> {
        let profiles = profiles.into_iter().collect_vec();
        let mut index = HashMap::with_capacity(profiles.len());
        for (i, profile) in profiles.iter().enumerate() {
            check_username(profile)?;
            if index.insert(profile.username().clone(), i).is_some() {
                return Err(GraphError::DuplicateVertex(profile.username().clone()));
            }
        }
        let matrix = AdjacencyMatrix::with_dimension(profiles.len());
        Ok(Self {
            profiles,
            index,
            matrix,
        })
    }

    /// Adds `profile` as a new vertex with no friends. Existing friendships are preserved.
    pub fn add_profile(&mut self, profile: Profile) -> Result<(), GraphError> {
        check_username(&profile)?;
        if self.contains(profile.username().as_str()) {
            return Err(GraphError::DuplicateVertex(profile.username().clone()));
        }
        let i = self.matrix.grow();
        debug!("added profile '{}' at index {}", profile.username(), i);
        self.index.insert(profile.username().clone(), i);
        self.profiles.push(profile);
        Ok(())
    }

    /// Records a friendship between `a` and `b`. Adding an existing friendship is a no-op.
    pub fn add_friend(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let (i, j) = (self.vertex(a)?, self.vertex(b)?);
        if i == j {
            return Err(GraphError::SelfEdge(Username::new(a)));
        }
        if self.matrix.set(i, j) {
            debug!("added friendship '{}' <-> '{}'", a, b);
        } else {
            debug!("'{}' and '{}' are already friends", a, b);
        }
        Ok(())
    }

    /// Whether `a` and `b` are friends.
    pub fn search_friend(&self, a: &str, b: &str) -> Result<bool, GraphError> {
        let (i, j) = (self.vertex(a)?, self.vertex(b)?);
        Ok(self.matrix.get(i, j))
    }

    /// All friends of `a`, in insertion order.
    pub fn all_friends(&self, a: &str) -> Result<Vec<&Profile>, GraphError> {
        let i = self.vertex(a)?;
        Ok(self.matrix.row(i).map(|j| &self.profiles[j]).collect_vec())
    }

    /// Friends shared by `a` and `b`, in insertion order.
    pub fn mutual_friends(&self, a: &str, b: &str) -> Result<Vec<&Profile>, GraphError> {
        let (i, j) = (self.vertex(a)?, self.vertex(b)?);
        Ok(self
            .matrix
            .row(i)
            .filter(|k| self.matrix.get(j, *k))
            .map(|k| &self.profiles[k])
            .collect_vec())
    }

    pub fn friend_count(&self, a: &str) -> Result<usize, GraphError> {
        Ok(self.matrix.degree(self.vertex(a)?))
    }

    /// Each friendship once, earlier-added profile first.
    pub fn friendships(&self) -> impl Iterator<Item = (&Profile, &Profile)> + '_ {
        self.matrix
            .edges()
            .map(|(i, j)| (&self.profiles[i], &self.profiles[j]))
    }

    pub fn friendship_count(&self) -> usize {
        self.matrix.edge_count()
    }

    /// Replaces (or clears, with `None`) the image reference of `username`.
    pub fn set_profile_image(
        &mut self,
        username: &str,
        profile_image: Option<String>,
    ) -> Result<(), GraphError> {
        let i = self.vertex(username)?;
        self.profiles[i].set_profile_image(profile_image);
        Ok(())
    }

    pub fn profile(&self, username: &str) -> Option<&Profile> {
        self.index.get(username).map(|i| &self.profiles[*i])
    }

    pub fn contains(&self, username: &str) -> bool {
        self.index.contains_key(username)
    }

    /// Profiles in insertion order.
    pub fn profiles(&self) -> impl ExactSizeIterator<Item = &Profile> + '_ {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    fn vertex(&self, username: &str) -> Result<usize, GraphError> {
        self.index
            .get(username)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(Username::new(username)))
    }
}

fn check_username(profile: &Profile) -> Result<(), GraphError> {
    if profile.username().is_valid() {
        Ok(())
    } else {
        Err(GraphError::InvalidUsername(profile.username().clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{test_graph, test_profile, NAMES};
    use crate::{FriendGraph, GraphError};
    use anyhow::Result;

    mod new {
        use crate::model::Profile;
        use crate::test_util::{test_profile, NAMES};
        use crate::{FriendGraph, GraphError};
        use anyhow::Result;

        #[test]
        fn zero_matrix() -> Result<()> {
            let graph = FriendGraph::new((0..3).map(test_profile))?;
            assert_eq!(graph.len(), 3);
            assert_eq!(graph.matrix().dim(), 3);
            assert_eq!(graph.friendship_count(), 0);
            Ok(())
        }

        #[test]
        fn empty() -> Result<()> {
            let graph = FriendGraph::new(vec![])?;
            assert!(graph.is_empty());
            assert_eq!(graph.matrix().dim(), 0);
            Ok(())
        }

        #[test]
        fn invalid_username() {
            let result = FriendGraph::new([test_profile(0), Profile::new("mary ann", "Mary")]);
            assert_eq!(
                result.unwrap_err(),
                GraphError::InvalidUsername("mary ann".into())
            );
            let result = FriendGraph::new([Profile::new("", "Nobody")]);
            assert_eq!(result.unwrap_err(), GraphError::InvalidUsername("".into()));
        }

        #[test]
        fn duplicate() {
            let result = FriendGraph::new([test_profile(0), test_profile(1), test_profile(0)]);
            assert_eq!(
                result.unwrap_err(),
                GraphError::DuplicateVertex(NAMES[0].into())
            );
        }
    }

    mod add_profile {
        use crate::model::Profile;
        use crate::test_util::{test_graph, test_profile, NAMES};
        use crate::{FriendGraph, GraphError};
        use anyhow::Result;

        #[test]
        fn grows_by_one() -> Result<()> {
            let mut graph = FriendGraph::default();
            for i in 0..5 {
                graph.add_profile(test_profile(i))?;
                assert_eq!(graph.len(), i + 1);
                assert_eq!(graph.matrix().dim(), i + 1);
            }
            assert_eq!(graph.friendship_count(), 0);
            Ok(())
        }

        #[test]
        fn keeps_insertion_order() -> Result<()> {
            let mut graph = test_graph(2);
            graph.add_profile(test_profile(2))?;
            let names = graph
                .profiles()
                .map(|p| p.username().to_string())
                .collect::<Vec<_>>();
            assert_eq!(names, &NAMES[..3]);
            Ok(())
        }

        #[test]
        fn duplicate_leaves_graph_unchanged() -> Result<()> {
            let mut graph = test_graph(2);
            graph.add_friend(NAMES[0], NAMES[1])?;
            let result = graph.add_profile(Profile::new(NAMES[1], "someone else"));
            assert_eq!(result, Err(GraphError::DuplicateVertex(NAMES[1].into())));
            assert_eq!(graph.len(), 2);
            assert_eq!(graph.matrix().dim(), 2);
            assert_eq!(graph.profile(NAMES[1]), Some(&test_profile(1)));
            assert!(graph.search_friend(NAMES[0], NAMES[1])?);
            Ok(())
        }

        #[test]
        fn invalid_username_leaves_graph_unchanged() {
            let mut graph = test_graph(1);
            assert_eq!(
                graph.add_profile(Profile::new("two words", "Two")),
                Err(GraphError::InvalidUsername("two words".into()))
            );
            assert_eq!(graph.len(), 1);
            assert_eq!(graph.matrix().dim(), 1);
        }

        #[test]
        fn preserves_friendships() -> Result<()> {
            let mut graph = test_graph(3);
            graph.add_friend(NAMES[0], NAMES[2])?;
            graph.add_friend(NAMES[1], NAMES[2])?;
            graph.add_profile(test_profile(3))?;
            graph.add_profile(test_profile(4))?;
            assert!(graph.search_friend(NAMES[0], NAMES[2])?);
            assert!(graph.search_friend(NAMES[2], NAMES[1])?);
            assert!(!graph.search_friend(NAMES[0], NAMES[1])?);
            assert!(graph.all_friends(NAMES[3])?.is_empty());
            assert_eq!(graph.friendship_count(), 2);
            Ok(())
        }
    }

    mod add_friend {
        use crate::test_util::{test_graph, NAMES};
        use crate::GraphError;
        use anyhow::Result;

        #[test]
        fn symmetric() -> Result<()> {
            let mut graph = test_graph(3);
            graph.add_friend(NAMES[2], NAMES[0])?;
            assert!(graph.search_friend(NAMES[0], NAMES[2])?);
            assert!(graph.search_friend(NAMES[2], NAMES[0])?);
            Ok(())
        }

        #[test]
        fn idempotent() -> Result<()> {
            let mut graph = test_graph(2);
            graph.add_friend(NAMES[0], NAMES[1])?;
            graph.add_friend(NAMES[0], NAMES[1])?;
            graph.add_friend(NAMES[1], NAMES[0])?;
            assert!(graph.search_friend(NAMES[0], NAMES[1])?);
            assert_eq!(graph.friendship_count(), 1);
            assert_eq!(graph.friend_count(NAMES[0])?, 1);
            Ok(())
        }

        #[test]
        fn self_edge() {
            let mut graph = test_graph(2);
            assert_eq!(
                graph.add_friend(NAMES[1], NAMES[1]),
                Err(GraphError::SelfEdge(NAMES[1].into()))
            );
            assert_eq!(graph.friendship_count(), 0);
            assert_eq!(graph.matrix().dim(), 2);
        }

        #[test]
        fn unknown_vertex() {
            let mut graph = test_graph(2);
            assert_eq!(
                graph.add_friend(NAMES[0], "nobody"),
                Err(GraphError::UnknownVertex("nobody".into()))
            );
            assert_eq!(
                graph.add_friend("nobody", NAMES[0]),
                Err(GraphError::UnknownVertex("nobody".into()))
            );
            assert_eq!(graph.friendship_count(), 0);
        }

        #[test]
        fn unknown_self_edge_reports_unknown() {
            let mut graph = test_graph(1);
            assert_eq!(
                graph.add_friend("nobody", "nobody"),
                Err(GraphError::UnknownVertex("nobody".into()))
            );
        }
    }

    mod search_friend {
        use crate::test_util::{test_graph, NAMES};
        use crate::GraphError;
        use anyhow::Result;

        #[test]
        fn false_before_add() -> Result<()> {
            let graph = test_graph(3);
            for a in &NAMES[..3] {
                for b in &NAMES[..3] {
                    assert!(!graph.search_friend(a, b)?);
                }
            }
            Ok(())
        }

        #[test]
        fn self_is_never_friend() -> Result<()> {
            let mut graph = test_graph(2);
            graph.add_friend(NAMES[0], NAMES[1])?;
            assert!(!graph.search_friend(NAMES[0], NAMES[0])?);
            Ok(())
        }

        #[test]
        fn unknown_vertex() {
            let graph = test_graph(2);
            assert_eq!(
                graph.search_friend(NAMES[0], "nobody"),
                Err(GraphError::UnknownVertex("nobody".into()))
            );
        }
    }

    mod all_friends {
        use crate::test_util::{test_graph, NAMES};
        use crate::GraphError;
        use anyhow::Result;

        #[test]
        fn insertion_order() -> Result<()> {
            let mut graph = test_graph(5);
            graph.add_friend(NAMES[2], NAMES[4])?;
            graph.add_friend(NAMES[2], NAMES[0])?;
            graph.add_friend(NAMES[3], NAMES[2])?;
            let friends = graph
                .all_friends(NAMES[2])?
                .iter()
                .map(|p| p.username().as_str())
                .collect::<Vec<_>>();
            assert_eq!(friends, vec![NAMES[0], NAMES[3], NAMES[4]]);
            Ok(())
        }

        #[test]
        fn only_direct_friends() -> Result<()> {
            let mut graph = test_graph(3);
            graph.add_friend(NAMES[0], NAMES[1])?;
            graph.add_friend(NAMES[1], NAMES[2])?;
            let friends = graph.all_friends(NAMES[0])?;
            assert_eq!(friends.len(), 1);
            assert_eq!(friends[0].username(), &NAMES[1]);
            Ok(())
        }

        #[test]
        fn none() -> Result<()> {
            let graph = test_graph(2);
            assert!(graph.all_friends(NAMES[0])?.is_empty());
            Ok(())
        }

        #[test]
        fn unknown_vertex() {
            let graph = test_graph(2);
            assert_eq!(
                graph.all_friends("nobody"),
                Err(GraphError::UnknownVertex("nobody".into()))
            );
        }
    }

    #[test]
    fn mutual_friends() -> Result<()> {
        let mut graph = test_graph(5);
        graph.add_friend(NAMES[0], NAMES[3])?;
        graph.add_friend(NAMES[0], NAMES[2])?;
        graph.add_friend(NAMES[1], NAMES[3])?;
        graph.add_friend(NAMES[1], NAMES[2])?;
        graph.add_friend(NAMES[1], NAMES[4])?;
        let mutual = graph
            .mutual_friends(NAMES[0], NAMES[1])?
            .iter()
            .map(|p| p.username().as_str())
            .collect::<Vec<_>>();
        assert_eq!(mutual, vec![NAMES[2], NAMES[3]]);
        assert!(graph.mutual_friends(NAMES[2], NAMES[4])?.len() == 1);
        Ok(())
    }

    #[test]
    fn friendships() -> Result<()> {
        let mut graph = test_graph(3);
        graph.add_friend(NAMES[2], NAMES[0])?;
        graph.add_friend(NAMES[2], NAMES[1])?;
        let pairs = graph
            .friendships()
            .map(|(a, b)| (a.username().as_str(), b.username().as_str()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(NAMES[0], NAMES[2]), (NAMES[1], NAMES[2])]);
        Ok(())
    }

    #[test]
    fn set_profile_image() -> Result<()> {
        let mut graph = test_graph(2);
        graph.set_profile_image(NAMES[0], Some("https://img/0.png".to_string()))?;
        assert_eq!(
            graph.profile(NAMES[0]).and_then(|p| p.profile_image()),
            Some("https://img/0.png")
        );
        graph.set_profile_image(NAMES[0], None)?;
        assert_eq!(graph.profile(NAMES[0]).and_then(|p| p.profile_image()), None);
        assert_eq!(
            graph.set_profile_image("nobody", None),
            Err(GraphError::UnknownVertex("nobody".into()))
        );
        Ok(())
    }

    #[test]
    fn profile_lookup() {
        let graph = test_graph(2);
        assert_eq!(graph.profile(NAMES[1]), Some(&test_profile(1)));
        assert_eq!(graph.profile("nobody"), None);
        assert!(graph.contains(NAMES[0]));
        assert!(!graph.contains("nobody"));
    }

    #[test]
    fn example_scenario() -> Result<()> {
        use crate::model::Profile;

        let mut graph =
            FriendGraph::new([Profile::new("alice", "Alice"), Profile::new("bob", "Bob")])?;
        assert_eq!(graph.matrix().dim(), 2);

        graph.add_profile(Profile::new("carol", "Carol"))?;
        assert_eq!(graph.matrix().dim(), 3);
        assert!(!graph.matrix().get(0, 1));

        graph.add_friend("alice", "bob")?;
        assert!(graph.search_friend("alice", "bob")?);
        assert!(!graph.search_friend("alice", "carol")?);

        graph.add_profile(Profile::new("dave", "Dave"))?;
        assert_eq!(graph.matrix().dim(), 4);
        assert!(graph.search_friend("alice", "bob")?);

        let friends = graph.all_friends("alice")?;
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].username(), &"bob");

        let before = graph.matrix().clone();
        assert_eq!(
            graph.add_friend("alice", "alice"),
            Err(GraphError::SelfEdge("alice".into()))
        );
        assert_eq!(graph.matrix(), &before);
        Ok(())
    }
}
