//! Per-query breadth-first traversal state.

use std::collections::VecDeque;

use tracing::trace;

use knightpath_core::{BoardRules, Position};

use crate::error::SearchError;
use crate::search::arena::{NodeArena, NodeId};
use crate::search::visited::VisitedSet;

/// FIFO queue of nodes awaiting expansion.
pub type Frontier = VecDeque<NodeId>;

/// Everything one breadth-first traversal owns.
///
/// Created fresh for each query and dropped when the query returns. A square
/// is marked visited when it is first discovered, so the frontier never holds
/// two nodes for the same square.
pub struct Traversal<'a> {
    rules: &'a BoardRules,
    node_limit: Option<usize>,
    arena: NodeArena,
    visited: VisitedSet,
    frontier: Frontier,
}

impl<'a> Traversal<'a> {
    /// Seed a traversal with the root node at `start`.
    ///
    /// `start` must already be within `rules.bounds()`.
    pub fn new(
        rules: &'a BoardRules,
        node_limit: Option<usize>,
        start: Position,
    ) -> Result<Self, SearchError> {
        let bounds = rules.bounds();
        let mut traversal = Self {
            rules,
            node_limit,
            arena: NodeArena::with_capacity(bounds.square_count().min(1024)),
            visited: VisitedSet::new(bounds),
            frontier: Frontier::new(),
        };
        traversal.check_limit()?;
        traversal.visited.insert(start);
        let root = traversal.arena.push_root(start);
        traversal.frontier.push_back(root);
        Ok(traversal)
    }

    /// Take the next node to expand.
    #[inline]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.frontier.pop_front()
    }

    /// Discover every unvisited destination of `current`.
    pub fn expand(&mut self, current: NodeId) -> Result<(), SearchError> {
        let node = self.arena[current];
        trace!(square = %node.position, depth = node.depth, "expanding");

        for dest in self.rules.destinations(node.position) {
            if self.visited.contains(dest) {
                continue;
            }
            self.check_limit()?;
            self.visited.insert(dest);
            let child = self.arena.push_child(dest, current);
            self.frontier.push_back(child);
        }
        Ok(())
    }

    /// Nodes created so far.
    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Consume the traversal, keeping only its node arena.
    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    fn check_limit(&self) -> Result<(), SearchError> {
        match self.node_limit {
            Some(limit) if self.arena.len() >= limit => {
                Err(SearchError::NodeLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
