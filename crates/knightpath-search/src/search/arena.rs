//! Arena storage for search nodes, with parent links held as indices.

use std::ops::Index;

use knightpath_core::Position;

/// Handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of this node in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A square discovered during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// The square this node stands for.
    pub position: Position,
    /// The node this one was first discovered from; `None` for the root.
    pub parent: Option<NodeId>,
    /// Moves from the root.
    pub depth: u32,
}

/// Owns every node created during one traversal.
///
/// Nodes are only ever appended, so a parent always has a smaller id than
/// its children and parent links can never form a cycle.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append the root node.
    pub fn push_root(&mut self, position: Position) -> NodeId {
        self.push(SearchNode {
            position,
            parent: None,
            depth: 0,
        })
    }

    /// Append a node discovered from `parent`.
    pub fn push_child(&mut self, position: Position, parent: NodeId) -> NodeId {
        let depth = self[parent].depth + 1;
        self.push(SearchNode {
            position,
            parent: Some(parent),
            depth,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` if no node has been created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// Walk parent links from `id` up to and including the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let node = &self[next?];
            next = node.parent;
            Some(node)
        })
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::NodeArena;
    use knightpath_core::Position;

    #[test]
    fn depth_follows_parent() {
        let mut arena = NodeArena::default();
        let root = arena.push_root(Position::new(0, 0));
        let a = arena.push_child(Position::new(1, 2), root);
        let b = arena.push_child(Position::new(2, 4), a);
        assert_eq!(arena[root].depth, 0);
        assert_eq!(arena[a].depth, 1);
        assert_eq!(arena[b].depth, 2);
        assert_eq!(arena[b].parent, Some(a));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn ancestry_ends_at_root() {
        let mut arena = NodeArena::with_capacity(4);
        let root = arena.push_root(Position::new(0, 0));
        let a = arena.push_child(Position::new(1, 2), root);
        let b = arena.push_child(Position::new(3, 3), a);
        let walked: Vec<_> = arena.ancestry(b).map(|n| n.position).collect();
        assert_eq!(
            walked,
            vec![Position::new(3, 3), Position::new(1, 2), Position::new(0, 0)]
        );
    }
}
