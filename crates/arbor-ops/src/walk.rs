// SPDX-License-Identifier: MIT OR Apache-2.0
//! Depth-bounded pre-order walk
//!
//! Every search in arbor is a filter over this walk. The rules are:
//!
//! - Nodes are visited depth-first, pre-order, children in the composite's own
//!   enumeration order.
//! - A node is always yielded (and so can be matched) before the depth limit is
//!   consulted. The limit only decides whether its children are visited, so a
//!   match at exactly `max_depth` is still found.
//! - Only iterable nodes (non-empty composites) are descended into.
//!
//! The walk keeps an explicit stack, so input depth is bounded by heap rather
//! than by the call stack.

use arbor_core::{KeyRef, Path, Tree, is_iterable};
use tracing::trace;

/// Depth configuration for a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Deepest level whose nodes may be descended from; `None` is unbounded
    pub max_depth: Option<usize>,
}

impl WalkOptions {
    /// Unbounded walk
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Walk with an optional depth limit
    #[must_use]
    pub const fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Limit descent to `depth` edges below the root
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether a node at `depth` may have its children visited
    #[must_use]
    pub const fn allows_descent(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(limit) => depth < limit,
            None => true,
        }
    }
}

/// A node reached by the walk
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    /// The node itself
    pub node: &'a Tree,
    /// Key under which the parent holds this node; `None` for the root
    pub key: Option<KeyRef<'a>>,
    /// Location from the root
    pub path: Path,
    /// Edges from the root
    pub depth: usize,
}

#[derive(Debug)]
struct Frame<'a> {
    node: &'a Tree,
    key: Option<KeyRef<'a>>,
    path: Path,
    depth: usize,
}

/// Pre-order iterator over a tree, see the module docs
#[derive(Debug)]
pub struct Walker<'a> {
    stack: Vec<Frame<'a>>,
    options: WalkOptions,
    /// Frames pushed for the children of the last yielded node
    pushed: usize,
}

impl<'a> Walker<'a> {
    /// Start a walk at `root`
    #[must_use]
    pub fn new(root: &'a Tree, options: WalkOptions) -> Self {
        Self {
            stack: vec![Frame {
                node: root,
                key: None,
                path: Path::root(),
                depth: 0,
            }],
            options,
            pushed: 0,
        }
    }

    /// Do not visit the children of the node returned by the last `next`
    pub fn skip_children(&mut self) {
        let keep = self.stack.len() - self.pushed;
        self.stack.truncate(keep);
        self.pushed = 0;
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.stack.pop()?;
        let before = self.stack.len();

        if is_iterable(frame.node) {
            if self.options.allows_descent(frame.depth) {
                // Reverse push so the first child is popped first
                for (key, child) in frame.node.entries().rev() {
                    self.stack.push(Frame {
                        node: child,
                        key: Some(key),
                        path: frame.path.join(key.to_segment()),
                        depth: frame.depth + 1,
                    });
                }
            } else {
                trace!(depth = frame.depth, path = %frame.path, "walk depth limit reached");
            }
        }
        self.pushed = self.stack.len() - before;

        Some(Visit {
            node: frame.node,
            key: frame.key,
            path: frame.path,
            depth: frame.depth,
        })
    }
}

/// Walk `tree` with an optional depth limit
#[must_use]
pub fn walk(tree: &Tree, max_depth: Option<usize>) -> Walker<'_> {
    Walker::new(tree, WalkOptions::with_max_depth(max_depth))
}
