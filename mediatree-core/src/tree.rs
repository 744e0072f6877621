//! The parse tree shared by both container engines.
//!
//! Nodes live in an arena owned by the [`Tree`]; the classic
//! parent / first-child / next-sibling shape is expressed with [`NodeId`]
//! indices. Dropping the tree drops every payload exactly once with no
//! recursion, so close-time cleanup needs no explicit free walk.
//!
//! The tree is generic over the payload union `P`: each format crate supplies
//! its own closed sum of domain value types.

use std::fmt;

/// Index of a node within its tree's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A single box (BMFF) or element (EBML).
#[derive(Debug)]
pub struct Node<P> {
    /// Byte offset of the header's first byte in the source file.
    pub offset: u64,
    /// Total size in bytes, header included. Zero marks a synthetic node.
    pub size: u64,
    /// Byte offset of the last byte, inclusive.
    pub end: u64,
    /// Byte offset of the payload's first byte.
    pub payload_offset: u64,
    /// Payload length in bytes.
    pub payload_size: u64,
    /// Type identifier: a FourCC as u32 (BMFF) or a raw VINT ID (EBML).
    pub id: u64,
    /// Extended type, present only for BMFF `uuid` boxes.
    pub uuid: Option<crate::value::Uuid>,
    /// Depth: zero for the synthetic root, one for top-level nodes.
    pub level: u32,
    /// Whether this node was synthesised rather than read from the file.
    pub synthetic: bool,
    /// Decoded payload, if the type dispatch interned one.
    pub payload: P,

    parent: NodeId,
    first_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl<P> Node<P> {
    /// The parent node. The root is its own parent.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// The first child in file order, if any.
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    /// The next sibling in file order, if any.
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}

/// Fields of a node about to be attached to the tree.
///
/// `level`, links and flags are derived at attach time.
#[derive(Debug)]
pub struct NewNode<P> {
    /// Byte offset of the header's first byte.
    pub offset: u64,
    /// Total size in bytes, header included.
    pub size: u64,
    /// Byte offset of the last byte, inclusive.
    pub end: u64,
    /// Byte offset of the payload's first byte.
    pub payload_offset: u64,
    /// Payload length in bytes.
    pub payload_size: u64,
    /// Type identifier.
    pub id: u64,
    /// Initial payload, usually the union's empty variant.
    pub payload: P,
}

/// An arena-backed parse tree.
#[derive(Debug)]
pub struct Tree<P> {
    nodes: Vec<Node<P>>,
}

impl<P> Tree<P> {
    /// Create a tree holding only the synthetic root, which covers the whole
    /// file `[0, file_size - 1]` and is its own parent.
    pub fn with_root(file_size: u64, root_id: u64, root_payload: P) -> Self {
        let root = Node {
            offset: 0,
            size: file_size,
            end: file_size.saturating_sub(1),
            payload_offset: 0,
            payload_size: file_size,
            id: root_id,
            uuid: None,
            level: 0,
            synthetic: true,
            payload: root_payload,
            parent: NodeId(0),
            first_child: None,
            next_sibling: None,
        };
        Self { nodes: vec![root] }
    }

    /// The synthetic root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node. Engines use this to intern payloads; a
    /// completed tree is never mutated.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<P> {
        &mut self.nodes[id.0]
    }

    /// Find where a node starting at `offset` attaches, walking ancestor
    /// links from the previously attached node until an ancestor still open
    /// at `offset` is found.
    ///
    /// Returns the parent and, when the walk stepped at least once, the node
    /// it stepped out of, which is exactly the new node's preceding sibling.
    /// This handles containers that close several levels at once without an
    /// explicit stack.
    pub fn find_attach_point(&self, last: NodeId, offset: u64) -> (NodeId, Option<NodeId>) {
        let mut current = last;
        let mut preceding = None;
        while self.nodes[current.0].end < offset {
            let parent = self.nodes[current.0].parent;
            if parent == current {
                break;
            }
            preceding = Some(current);
            current = parent;
        }
        (current, preceding)
    }

    /// Attach a node under `parent`, after `preceding` when given, at the
    /// tail of the child chain otherwise.
    pub fn attach(&mut self, parent: NodeId, preceding: Option<NodeId>, new: NewNode<P>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let level = self.nodes[parent.0].level + 1;
        self.nodes.push(Node {
            offset: new.offset,
            size: new.size,
            end: new.end,
            payload_offset: new.payload_offset,
            payload_size: new.payload_size,
            id: new.id,
            uuid: None,
            level,
            synthetic: false,
            payload: new.payload,
            parent,
            first_child: None,
            next_sibling: None,
        });

        match preceding {
            Some(prev) => {
                debug_assert!(self.nodes[prev.0].parent == parent);
                self.nodes[prev.0].next_sibling = Some(id);
            }
            None => match self.nodes[parent.0].first_child {
                None => self.nodes[parent.0].first_child = Some(id),
                Some(first) => {
                    let mut tail = first;
                    while let Some(next) = self.nodes[tail.0].next_sibling {
                        tail = next;
                    }
                    self.nodes[tail.0].next_sibling = Some(id);
                }
            },
        }
        id
    }

    /// Iterate over the direct children of a node in file order.
    pub fn children(&self, id: NodeId) -> Children<'_, P> {
        Children {
            tree: self,
            next: self.nodes[id.0].first_child,
        }
    }

    /// Iterate depth-first (pre-order) over a node and everything below it.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_, P> {
        Descendants {
            tree: self,
            start,
            stack: vec![start],
        }
    }

    /// Depth-first search appending every node whose type matches `id`.
    pub fn find_by_id(&self, id: u64) -> Vec<NodeId> {
        self.descendants(self.root())
            .filter(|&n| self.nodes[n.0].id == id)
            .collect()
    }

    /// Walk a compound-name path from `start` and return the terminal node's
    /// payload if every hop resolves. `name_of` maps a node to its display
    /// name; the first matching child in file order wins at each hop.
    pub fn value_at_path<'a, F>(&'a self, start: NodeId, path: &[&str], name_of: F) -> Option<&'a P>
    where
        F: Fn(&Node<P>) -> String,
    {
        let mut current = start;
        for hop in path {
            current = self
                .children(current)
                .find(|&c| name_of(self.node(c)) == *hop)?;
        }
        Some(&self.nodes[current.0].payload)
    }

    /// Check the byte-range invariants of the tree shape, returning a
    /// description of the first violation. Synthetic nodes are exempt from
    /// the range checks.
    pub fn verify_shape(&self, file_size: u64) -> Result<(), String> {
        for (i, node) in self.nodes.iter().enumerate() {
            if node.synthetic {
                continue;
            }
            if node.payload_offset + node.payload_size != node.end + 1 {
                return Err(format!("node {}: payload range does not meet end", i));
            }
            if node.end >= file_size {
                return Err(format!("node {}: end {} past file size", i, node.end));
            }
            let parent = &self.nodes[node.parent.0];
            if !parent.synthetic {
                if node.offset < parent.payload_offset || node.end > parent.end {
                    return Err(format!("node {}: escapes parent range", i));
                }
            }
            if let Some(sibling) = node.next_sibling {
                let sibling = &self.nodes[sibling.0];
                if !sibling.synthetic && sibling.offset <= node.end {
                    return Err(format!("node {}: overlaps next sibling", i));
                }
            }
        }
        Ok(())
    }
}

/// Iterator over direct children.
pub struct Children<'a, P> {
    tree: &'a Tree<P>,
    next: Option<NodeId>,
}

impl<'a, P> Iterator for Children<'a, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.nodes[id.0].next_sibling;
        Some(id)
    }
}

/// Depth-first pre-order iterator.
pub struct Descendants<'a, P> {
    tree: &'a Tree<P>,
    start: NodeId,
    stack: Vec<NodeId>,
}

impl<'a, P> Iterator for Descendants<'a, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        if id != self.start {
            if let Some(sibling) = node.next_sibling {
                self.stack.push(sibling);
            }
        }
        if let Some(child) = node.first_child {
            self.stack.push(child);
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(offset: u64, size: u64, id: u64) -> NewNode<u32> {
        NewNode {
            offset,
            size,
            end: offset + size - 1,
            payload_offset: offset + 8,
            payload_size: size - 8,
            id,
            payload: 0,
        }
    }

    /// root
    /// ├── a [0, 39]
    /// │   ├── b [8, 23]
    /// │   └── c [24, 39]
    /// └── d [40, 59]
    fn sample_tree() -> (Tree<u32>, Vec<NodeId>) {
        let mut tree = Tree::with_root(60, 0, 0);
        let root = tree.root();

        let a = tree.attach(root, None, leaf(0, 40, 1));
        let (p, prev) = tree.find_attach_point(a, 8);
        assert_eq!(p, a);
        assert_eq!(prev, None);
        let b = tree.attach(p, prev, leaf(8, 16, 2));

        let (p, prev) = tree.find_attach_point(b, 24);
        assert_eq!(p, a);
        assert_eq!(prev, Some(b));
        let c = tree.attach(p, prev, leaf(24, 16, 3));

        // Closing two levels at once: next offset is past both c and a.
        let (p, prev) = tree.find_attach_point(c, 40);
        assert_eq!(p, root);
        assert_eq!(prev, Some(a));
        let d = tree.attach(p, prev, leaf(40, 20, 4));

        (tree, vec![a, b, c, d])
    }

    #[test]
    fn test_links_and_levels() {
        let (tree, ids) = sample_tree();
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        assert_eq!(tree.node(a).parent(), tree.root());
        assert_eq!(tree.node(b).parent(), a);
        assert_eq!(tree.node(a).first_child(), Some(b));
        assert_eq!(tree.node(b).next_sibling(), Some(c));
        assert_eq!(tree.node(a).next_sibling(), Some(d));
        assert_eq!(tree.node(tree.root()).level, 0);
        assert_eq!(tree.node(a).level, 1);
        assert_eq!(tree.node(b).level, 2);
    }

    #[test]
    fn test_children_iteration() {
        let (tree, ids) = sample_tree();
        let kids: Vec<_> = tree.children(ids[0]).collect();
        assert_eq!(kids, vec![ids[1], ids[2]]);
    }

    #[test]
    fn test_descendants_preorder() {
        let (tree, ids) = sample_tree();
        let order: Vec<_> = tree.descendants(tree.root()).collect();
        assert_eq!(order, vec![tree.root(), ids[0], ids[1], ids[2], ids[3]]);

        // A subtree walk does not escape into siblings of the start node.
        let sub: Vec<_> = tree.descendants(ids[0]).collect();
        assert_eq!(sub, vec![ids[0], ids[1], ids[2]]);
    }

    #[test]
    fn test_find_by_id() {
        let (mut tree, ids) = sample_tree();
        tree.node_mut(ids[3]).id = 2;
        let found = tree.find_by_id(2);
        assert_eq!(found, vec![ids[1], ids[3]]);
    }

    #[test]
    fn test_value_at_path() {
        let (mut tree, ids) = sample_tree();
        tree.node_mut(ids[2]).payload = 77;
        let names = |node: &Node<u32>| format!("n{}", node.id);
        let value = tree.value_at_path(tree.root(), &["n1", "n3"], names);
        assert_eq!(value.copied(), Some(77));
        assert!(tree
            .value_at_path(tree.root(), &["n1", "n9"], names)
            .is_none());
    }

    #[test]
    fn test_verify_shape() {
        let (tree, _) = sample_tree();
        assert!(tree.verify_shape(60).is_ok());

        let (mut bad, ids) = sample_tree();
        bad.node_mut(ids[1]).end = 55; // escapes parent a
        assert!(bad.verify_shape(60).is_err());
    }
}
