// SPDX-License-Identifier: MIT OR Apache-2.0
//! Locating values and keys
//!
//! Two matching modes share the walk in [`crate::walk`]:
//!
//! - **Value match** ([`locate`], [`locate_all`]): a node matches an identity
//!   when it is [`identical`] to it, or when the identity is a non-empty
//!   composite and the node, trimmed down to the identity's own keys, is
//!   identical to the identity. The node may carry extra keys.
//! - **Key match** ([`locate_key`], [`locate_all_key`]): a node matches when the
//!   key its parent holds it under equals the key name. The reported path is
//!   the parent's, so it can be used both to read and to delete the entry. The
//!   root has no key and never matches.

use crate::walk::walk;
use arbor_core::{
    Path, Result, Tree, contains_keys, identical, is_iterable, same_type, trim, validate_key_name,
};
use tracing::{debug, trace};

/// Validate a key name argument, logging the rejection
pub(crate) fn checked_key<'k>(key_name: &'k str, operation: &'static str) -> Result<&'k str> {
    validate_key_name(key_name).inspect_err(|err| debug!(operation, %err, "rejected key name"))
}

/// Whether `node` matches `identity` by value or by shape
#[must_use]
pub fn matches_identity(node: &Tree, identity: &Tree) -> bool {
    identical(node, identity) || shape_contains(node, identity)
}

/// Shape-contains match: `node` restricted to the own keys of `identity` is
/// identical to `identity`.
#[must_use]
pub fn shape_contains(node: &Tree, identity: &Tree) -> bool {
    if !is_iterable(identity) || same_type(node, identity).is_none() {
        return false;
    }
    let keys = identity.keys();
    contains_keys(node, &keys) && trim(node, &keys).is_some_and(|t| identical(&t, identity))
}

/// Path of the first node matching `identity`, in pre-order.
///
/// The root path is returned when the whole tree matches.
#[must_use]
pub fn locate(tree: &Tree, identity: &Tree, max_depth: Option<usize>) -> Option<Path> {
    walk(tree, max_depth)
        .find(|visit| matches_identity(visit.node, identity))
        .map(|visit| visit.path)
}

/// Paths of every node matching `identity`, in pre-order.
///
/// A node that matches both by value and by shape is reported once. An empty
/// result means nothing matched.
#[must_use]
pub fn locate_all(tree: &Tree, identity: &Tree, max_depth: Option<usize>) -> Vec<Path> {
    let paths: Vec<Path> = walk(tree, max_depth)
        .filter(|visit| matches_identity(visit.node, identity))
        .map(|visit| visit.path)
        .collect();
    trace!(matches = paths.len(), "locate_all");
    paths
}

/// Parent path of the first entry whose key is `key_name`, in pre-order.
///
/// Sequence slots are keyed by their decimal index.
///
/// # Errors
///
/// Returns [`arbor_core::ArborError::EmptyKeyName`] when `key_name` is empty.
pub fn locate_key(tree: &Tree, key_name: &str, max_depth: Option<usize>) -> Result<Option<Path>> {
    let key_name = checked_key(key_name, "locate_key")?;
    Ok(walk(tree, max_depth)
        .find(|visit| visit.key.is_some_and(|key| key.matches(key_name)))
        .and_then(|visit| visit.path.parent()))
}

/// Parent paths of every entry whose key is `key_name`, in pre-order.
///
/// # Errors
///
/// Returns [`arbor_core::ArborError::EmptyKeyName`] when `key_name` is empty.
pub fn locate_all_key(tree: &Tree, key_name: &str, max_depth: Option<usize>) -> Result<Vec<Path>> {
    let key_name = checked_key(key_name, "locate_all_key")?;
    let paths: Vec<Path> = walk(tree, max_depth)
        .filter(|visit| visit.key.is_some_and(|key| key.matches(key_name)))
        .filter_map(|visit| visit.path.parent())
        .collect();
    trace!(key = key_name, matches = paths.len(), "locate_all_key");
    Ok(paths)
}
