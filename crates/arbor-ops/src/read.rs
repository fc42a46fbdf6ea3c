// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reads built on the locate family
//!
//! Results borrow from the searched tree. Clone them to detach.

use crate::locate::{locate, locate_all, locate_all_key, locate_key};
use arbor_core::{Path, Result, Tree};

/// First node matching `identity`
#[must_use]
pub fn deep_get<'t>(tree: &'t Tree, identity: &Tree, max_depth: Option<usize>) -> Option<&'t Tree> {
    locate(tree, identity, max_depth).and_then(|path| path.resolve(tree))
}

/// Every node matching `identity`, in pre-order
#[must_use]
pub fn deep_filter<'t>(tree: &'t Tree, identity: &Tree, max_depth: Option<usize>) -> Vec<&'t Tree> {
    locate_all(tree, identity, max_depth)
        .iter()
        .filter_map(|path| path.resolve(tree))
        .collect()
}

/// Value held under the first entry keyed `key_name`
///
/// # Errors
///
/// Returns [`arbor_core::ArborError::EmptyKeyName`] when `key_name` is empty.
pub fn deep_get_key<'t>(
    tree: &'t Tree,
    key_name: &str,
    max_depth: Option<usize>,
) -> Result<Option<&'t Tree>> {
    Ok(locate_key(tree, key_name, max_depth)?
        .and_then(|parent| parent.join(key_name).resolve(tree)))
}

/// Values held under every entry keyed `key_name`, in pre-order
///
/// # Errors
///
/// Returns [`arbor_core::ArborError::EmptyKeyName`] when `key_name` is empty.
pub fn deep_filter_key<'t>(
    tree: &'t Tree,
    key_name: &str,
    max_depth: Option<usize>,
) -> Result<Vec<&'t Tree>> {
    Ok(locate_all_key(tree, key_name, max_depth)?
        .iter()
        .filter_map(|parent| parent.join(key_name).resolve(tree))
        .collect())
}

/// Where a match is read from: the composite holding a matched scalar, or the
/// matched composite itself. A scalar match at the root is its own context.
fn context_path(path: Path, identity: &Tree) -> Path {
    if identity.is_composite() {
        return path;
    }
    path.parent().unwrap_or(path)
}

/// Context of the first match, see [`deep_filter_context`]
#[must_use]
pub fn deep_get_context<'t>(
    tree: &'t Tree,
    identity: &Tree,
    max_depth: Option<usize>,
) -> Option<&'t Tree> {
    locate(tree, identity, max_depth)
        .map(|path| context_path(path, identity))
        .and_then(|path| path.resolve(tree))
}

/// Contexts of every match, in pre-order.
///
/// For a scalar identity this is the composite that holds each matched scalar,
/// so sibling entries can be inspected next to the match. For a composite
/// identity it is the matched node. A parent holding several matches is
/// reported once per match.
#[must_use]
pub fn deep_filter_context<'t>(
    tree: &'t Tree,
    identity: &Tree,
    max_depth: Option<usize>,
) -> Vec<&'t Tree> {
    locate_all(tree, identity, max_depth)
        .into_iter()
        .filter_map(|path| context_path(path, identity).resolve(tree))
        .collect()
}
