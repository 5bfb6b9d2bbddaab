//! Tree traversal
//!
//! Annotated classes may appear anywhere in a module, including nested
//! inside other classes or functions, so the scanner walks the full
//! tree rather than just top-level statements. Pre-order with an
//! explicit stack: deterministic for a given tree, lazy, one pass.

use crate::parse::PyNode;

/// Pre-order walk over every node of a subtree, the root included.
pub struct TreeWalk<'t> {
    stack: Vec<PyNode<'t>>,
}

impl<'t> TreeWalk<'t> {
    pub fn new(root: PyNode<'t>) -> Self {
        TreeWalk { stack: vec![root] }
    }
}

impl<'t> Iterator for TreeWalk<'t> {
    type Item = PyNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let first_child_at = self.stack.len();
        self.stack.extend(node.children());
        // Children were pushed left-to-right; reverse that slice so the
        // leftmost child pops first.
        self.stack[first_child_at..].reverse();
        Some(node)
    }
}

/// All `class_definition` nodes of a tree, in discovery order.
pub struct ClassScan<'t> {
    walk: TreeWalk<'t>,
}

impl<'t> ClassScan<'t> {
    pub fn new(root: PyNode<'t>) -> Self {
        ClassScan {
            walk: TreeWalk::new(root),
        }
    }
}

impl<'t> Iterator for ClassScan<'t> {
    type Item = PyNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk
            .find(|node| node.kind().as_ref() == "class_definition")
    }
}
