// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deep cloning with depth windows
//!
//! Cloning goes through a bottom-up rebuild: every composite within the copy
//! limit gets a frame on an explicit stack, its entries are copied in order,
//! and a finished frame is stored into its parent under the key it held
//! pending. Renaming reuses the same engine with a key hook.

use crate::walk::walk;
use arbor_core::{Mapping, MappingIter, Sequence, SequenceIter, Tree};
use tracing::trace;

/// Options for [`deep_clone_with`]
///
/// Depths are measured from the root of the cloned tree in both fields.
///
/// # Example
///
/// ```
/// use arbor_ops::clone::{CloneOptions, deep_clone_with};
/// use arbor_core::Tree;
///
/// let tree = Tree::from(serde_json::json!({"a": {"b": 1}}));
/// let shallow = deep_clone_with(&tree, &CloneOptions::new().max_depth(1));
/// assert_eq!(shallow, Tree::from(serde_json::json!({"a": {}})));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneOptions {
    /// Composites at this depth or deeper are copied as empty composites of
    /// the same kind. `None` copies everything.
    pub max_depth: Option<usize>,
    /// Depth of the nodes to clone. `0` clones the root; anything greater
    /// returns a sequence of every node found at that depth, in pre-order.
    pub start_depth: usize,
}

impl CloneOptions {
    /// Full clone from the root
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            start_depth: 0,
        }
    }

    /// Stop copying children below `depth`
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Clone the nodes at `depth` instead of the root
    #[must_use]
    pub const fn start_depth(mut self, depth: usize) -> Self {
        self.start_depth = depth;
        self
    }
}

/// Composite under construction, with the key its open child goes under
#[derive(Debug)]
enum Partial<'a> {
    Sequence {
        source: SequenceIter<'a>,
        copy: Sequence,
        pending: usize,
    },
    Mapping {
        source: MappingIter<'a>,
        copy: Mapping,
        pending: String,
    },
}

#[derive(Debug)]
struct Frame<'a> {
    partial: Partial<'a>,
    depth: usize,
}

impl<'a> Frame<'a> {
    /// A frame for `node` when it is a composite within `limit`
    fn open(node: &'a Tree, depth: usize, limit: Option<usize>) -> Option<Self> {
        if limit.is_some_and(|max| depth >= max) {
            return None;
        }
        let partial = match node {
            // Preserve the slot count so holes stay where they were
            Tree::Sequence(seq) => Partial::Sequence {
                source: seq.iter(),
                copy: Sequence::sparse(seq.len()),
                pending: 0,
            },
            Tree::Mapping(map) => Partial::Mapping {
                source: map.iter(),
                copy: Mapping::with_capacity(map.len()),
                pending: String::new(),
            },
            _ => return None,
        };
        Some(Self { partial, depth })
    }

    /// Copy entries until a child needs a frame of its own. That frame is
    /// returned and the child's key is held until [`Frame::fill`].
    fn advance<F>(&mut self, limit: Option<usize>, rename: &mut F) -> Option<Self>
    where
        F: FnMut(&str, usize) -> Option<String>,
    {
        let depth = self.depth;
        match &mut self.partial {
            Partial::Sequence {
                source,
                copy,
                pending,
            } => {
                for (index, child) in source {
                    if let Some(frame) = Self::open(child, depth + 1, limit) {
                        *pending = index;
                        return Some(frame);
                    }
                    copy.set(index, child.empty_like());
                }
            }
            Partial::Mapping {
                source,
                copy,
                pending,
            } => {
                for (name, child) in source {
                    let key = rename(name, depth).unwrap_or_else(|| name.to_owned());
                    if let Some(frame) = Self::open(child, depth + 1, limit) {
                        *pending = key;
                        return Some(frame);
                    }
                    copy.insert(key, child.empty_like());
                }
            }
        }
        None
    }

    fn fill(&mut self, value: Tree) {
        match &mut self.partial {
            Partial::Sequence { copy, pending, .. } => copy.set(*pending, value),
            Partial::Mapping { copy, pending, .. } => {
                copy.insert(std::mem::take(pending), value);
            }
        }
    }

    fn finish(self) -> Tree {
        match self.partial {
            Partial::Sequence { copy, .. } => Tree::Sequence(copy),
            Partial::Mapping { copy, .. } => Tree::Mapping(copy),
        }
    }
}

/// Rebuild `root` as an independent tree.
///
/// `root_depth` is the depth `root` had in the tree it came from. Composites at
/// `copy_limit` or deeper are copied empty. `rename` is asked for every mapping
/// key, in pre-order, along with the depth of the mapping holding it; returning
/// a name replaces the key.
pub(crate) fn rebuild<F>(
    root: &Tree,
    root_depth: usize,
    copy_limit: Option<usize>,
    mut rename: F,
) -> Tree
where
    F: FnMut(&str, usize) -> Option<String>,
{
    let Some(frame) = Frame::open(root, root_depth, copy_limit) else {
        return root.empty_like();
    };

    let mut stack = vec![frame];
    while let Some(top) = stack.last_mut() {
        if let Some(child) = top.advance(copy_limit, &mut rename) {
            stack.push(child);
            continue;
        }
        let Some(done) = stack.pop() else { break };
        let value = done.finish();
        match stack.last_mut() {
            Some(parent) => parent.fill(value),
            None => return value,
        }
    }
    Tree::Undefined
}

/// Independent copy of `tree`
#[must_use]
pub fn deep_clone(tree: &Tree) -> Tree {
    rebuild(tree, 0, None, |_, _| None)
}

/// Clone within a depth window, see [`CloneOptions`]
#[must_use]
pub fn deep_clone_with(tree: &Tree, options: &CloneOptions) -> Tree {
    if options.start_depth == 0 {
        return rebuild(tree, 0, options.max_depth, |_, _| None);
    }
    let window: Sequence = walk(tree, Some(options.start_depth))
        .filter(|visit| visit.depth == options.start_depth)
        .map(|visit| rebuild(visit.node, visit.depth, options.max_depth, |_, _| None))
        .collect();
    trace!(
        start_depth = options.start_depth,
        nodes = window.len(),
        "deep_clone_with window"
    );
    Tree::Sequence(window)
}
