use super::ast::Label;
use super::LineNumber;
use serde::Serialize;

/// Handle into a [`Tree`] arena. Only minted by [`Tree::alloc`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct NodeId(u32);

/// Arena of labeled nodes. Parent and child links are index fields, so the
/// splice and promote operations are plain re-links with no ownership
/// cycles. Nodes orphaned by surgery stay in the arena unreferenced; the
/// tree proper is whatever is reachable from a root.
#[derive(Debug, Default, Serialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

#[derive(Debug, Serialize)]
struct Node {
    label: Option<Label>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    line_number: LineNumber,
    depth: u32,
}

impl Tree {
    pub fn new() -> Tree {
        Tree::default()
    }

    /// Allocate a detached node at depth 0.
    pub fn alloc(&mut self, label: Option<Label>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            label,
            parent: None,
            children: Vec::new(),
            line_number: None,
            depth: 0,
        });
        id
    }

    /// Append `child` to `parent`'s child list, setting the back-reference
    /// and renumbering the child's subtree depths.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.node(child).parent.is_none());
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        let depth = self.node(parent).depth + 1;
        self.renumber(child, depth);
    }

    /// Splice `new_node` into the slot `node` occupies and re-hang `node`
    /// beneath it. When `node` is a fragment root, `new_node` simply becomes
    /// the new root of that fragment. `node`'s subtree gets one level deeper.
    pub fn insert_above(&mut self, node: NodeId, new_node: NodeId) {
        debug_assert!(self.node(new_node).parent.is_none());
        debug_assert!(self.node(new_node).children.is_empty());
        let parent = self.node(node).parent;
        let depth = match parent {
            Some(parent) => {
                let slot = self.child_slot(parent, node);
                self.node_mut(parent).children[slot] = new_node;
                self.node_mut(new_node).parent = Some(parent);
                self.node(parent).depth + 1
            }
            None => 0,
        };
        self.node_mut(node).parent = Some(new_node);
        self.node_mut(new_node).children.push(node);
        self.renumber(new_node, depth);
    }

    /// Remove `node`'s parent from the tree and put `node` in its place.
    /// When the parent was a fragment root, `node` becomes one; otherwise
    /// `node` is substituted into the grandparent's child list. No-op when
    /// `node` is itself a root. The abandoned parent keeps any other
    /// children it had, unreachable from the tree.
    pub fn promote(&mut self, node: NodeId) {
        let parent = match self.node(node).parent {
            Some(parent) => parent,
            None => return,
        };
        let grandparent = self.node(parent).parent;
        let slot = self.child_slot(parent, node);
        self.node_mut(parent).children.remove(slot);
        self.node_mut(parent).parent = None;
        match grandparent {
            Some(grandparent) => {
                let slot = self.child_slot(grandparent, parent);
                self.node_mut(grandparent).children[slot] = node;
                self.node_mut(node).parent = Some(grandparent);
                let depth = self.node(grandparent).depth + 1;
                self.renumber(node, depth);
            }
            None => {
                self.node_mut(node).parent = None;
                self.renumber(node, 0);
            }
        }
    }

    /// Walk parent links to the top of `node`'s fragment.
    pub fn root(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(parent) = self.node(current).parent {
            current = parent;
        }
        current
    }

    pub fn label(&self, node: NodeId) -> Option<&Label> {
        self.node(node).label.as_ref()
    }

    pub fn set_label(&mut self, node: NodeId, label: Label) {
        self.node_mut(node).label = Some(label);
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn depth(&self, node: NodeId) -> u32 {
        self.node(node).depth
    }

    pub fn line_number(&self, node: NodeId) -> LineNumber {
        self.node(node).line_number
    }

    pub fn set_line_number(&mut self, node: NodeId, line_number: LineNumber) {
        self.node_mut(node).line_number = line_number;
    }

    /// Assert the structural invariants of the fragment rooted at `root`:
    /// mutually consistent parent/child links, child depth one greater than
    /// parent depth, and no node visited twice. Test support.
    pub fn check_consistency(&self, root: NodeId) {
        assert!(self.node(root).parent.is_none(), "root has a parent");
        assert_eq!(self.node(root).depth, 0, "root depth not 0");
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            assert!(!seen[id.0 as usize], "node visited twice");
            seen[id.0 as usize] = true;
            for &child in &self.node(id).children {
                assert_eq!(self.node(child).parent, Some(id), "bad back-reference");
                assert_eq!(
                    self.node(child).depth,
                    self.node(id).depth + 1,
                    "bad depth"
                );
                stack.push(child);
            }
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    fn child_slot(&self, parent: NodeId, child: NodeId) -> usize {
        self.node(parent)
            .children
            .iter()
            .position(|&c| c == child)
            .unwrap_or_else(|| unreachable!("child not under its parent"))
    }

    /// Set `node`'s depth and renumber its whole subtree.
    fn renumber(&mut self, node: NodeId, depth: u32) {
        let mut stack = vec![(node, depth)];
        while let Some((id, depth)) = stack.pop() {
            self.node_mut(id).depth = depth;
            for &child in &self.node(id).children {
                stack.push((child, depth + 1));
            }
        }
    }
}
