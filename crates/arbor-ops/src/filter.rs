// SPDX-License-Identifier: MIT OR Apache-2.0
//! Set filtering of candidate identities against a tree
//!
//! A batch of identities is a sequence, a mapping, or a single value. Sequence
//! batches produce a sequence of the kept identities, mapping batches keep the
//! labels of the kept entries, and a single value is returned as is when it
//! passes.

use crate::clone::deep_clone;
use crate::locate::locate;
use crate::read::deep_filter_context;
use crate::walk::walk;
use arbor_core::{ArborError, Mapping, Result, Sequence, Tree, is_falsy, is_truthy};
use tracing::{debug, trace};

/// Whether any node matches `identity`, with the same rules as [`locate`]
#[must_use]
pub fn exists(tree: &Tree, identity: &Tree, max_depth: Option<usize>) -> bool {
    locate(tree, identity, max_depth).is_some()
}

/// Keep the identities of a batch for which `keep` holds
fn keep_where<F>(identities: &Tree, mut keep: F) -> Option<Tree>
where
    F: FnMut(&Tree) -> bool,
{
    match identities {
        Tree::Sequence(batch) => {
            let kept: Sequence = batch
                .values()
                .filter(|identity| keep(identity))
                .map(deep_clone)
                .collect();
            trace!(batch = batch.key_count(), kept = kept.len(), "filtered sequence batch");
            Some(Tree::Sequence(kept))
        }
        Tree::Mapping(batch) => {
            let kept: Mapping = batch
                .iter()
                .filter(|(_, identity)| keep(identity))
                .map(|(label, identity)| (label, deep_clone(identity)))
                .collect();
            trace!(batch = batch.len(), kept = kept.len(), "filtered mapping batch");
            Some(Tree::Mapping(kept))
        }
        single => keep(single).then(|| deep_clone(single)),
    }
}

/// The identities of the batch that exist in `tree`
#[must_use]
pub fn only_existing(tree: &Tree, identities: &Tree, max_depth: Option<usize>) -> Option<Tree> {
    keep_where(identities, |identity| exists(tree, identity, max_depth))
}

/// The identities of the batch that do not exist in `tree`
#[must_use]
pub fn only_missing(tree: &Tree, identities: &Tree, max_depth: Option<usize>) -> Option<Tree> {
    keep_where(identities, |identity| !exists(tree, identity, max_depth))
}

/// Reduce a property argument to a single key name.
///
/// A composite with exactly one own key gives that key. A non-empty string
/// names itself and a non-zero number names its decimal form. Anything else
/// names nothing.
#[must_use]
pub fn single_property(property: &Tree) -> Option<String> {
    match property {
        Tree::Sequence(_) | Tree::Mapping(_) => {
            let mut entries = property.entries();
            match (entries.next(), entries.next()) {
                (Some((key, _)), None) => Some(key.to_string()),
                _ => None,
            }
        }
        Tree::String(name) if !name.is_empty() => Some(name.clone()),
        Tree::Number(n) if *n != 0.0 => Some(n.to_string()),
        _ => None,
    }
}

fn property_name(property: &Tree, operation: &'static str) -> Result<String> {
    single_property(property).ok_or_else(|| {
        let kind = property.kind();
        debug!(operation, %kind, "rejected property");
        ArborError::InvalidProperty { kind }
    })
}

/// Walk `tree` and stop descending at every node owning `name`; true as soon
/// as one of those values passes `test`.
fn found_where(tree: &Tree, name: &str, max_depth: Option<usize>, test: fn(&Tree) -> bool) -> bool {
    let mut walker = walk(tree, max_depth);
    while let Some(visit) = walker.next() {
        if let Some(value) = visit.node.get_key(name) {
            if test(value) {
                return true;
            }
            walker.skip_children();
        }
    }
    false
}

/// Whether a node owning `property` holds a truthy value there.
///
/// Nodes below one that owns the property are not inspected.
///
/// # Errors
///
/// Returns [`ArborError::InvalidProperty`] when `property` does not reduce to
/// a key name, see [`single_property`].
pub fn found_truthy(tree: &Tree, property: &Tree, max_depth: Option<usize>) -> Result<bool> {
    let name = property_name(property, "found_truthy")?;
    Ok(found_where(tree, &name, max_depth, is_truthy))
}

/// Whether a node owning `property` holds a falsy value there
///
/// # Errors
///
/// Returns [`ArborError::InvalidProperty`] when `property` does not reduce to
/// a key name.
pub fn found_falsy(tree: &Tree, property: &Tree, max_depth: Option<usize>) -> Result<bool> {
    let name = property_name(property, "found_falsy")?;
    Ok(found_where(tree, &name, max_depth, is_falsy))
}

/// Keep the identities whose matches hold `name` with a value passing `test`.
///
/// The contexts of each identity are searched from the whole tree; `max_depth`
/// bounds the property search inside them. A single-value batch is checked
/// against the whole tree instead.
fn only_where(
    tree: &Tree,
    identities: &Tree,
    name: &str,
    max_depth: Option<usize>,
    test: fn(&Tree) -> bool,
) -> Option<Tree> {
    if !identities.is_composite() {
        return found_where(tree, name, max_depth, test).then(|| deep_clone(identities));
    }
    keep_where(identities, |identity| {
        let contexts: Sequence = deep_filter_context(tree, identity, None)
            .into_iter()
            .map(deep_clone)
            .collect();
        !contexts.is_empty() && found_where(&Tree::Sequence(contexts), name, max_depth, test)
    })
}

/// The identities whose matches hold a truthy `property`
///
/// # Errors
///
/// Returns [`ArborError::InvalidProperty`] when `property` does not reduce to
/// a key name.
pub fn only_truthy(
    tree: &Tree,
    identities: &Tree,
    property: &Tree,
    max_depth: Option<usize>,
) -> Result<Option<Tree>> {
    let name = property_name(property, "only_truthy")?;
    Ok(only_where(tree, identities, &name, max_depth, is_truthy))
}

/// The identities whose matches hold a falsy `property`
///
/// # Errors
///
/// Returns [`ArborError::InvalidProperty`] when `property` does not reduce to
/// a key name.
pub fn only_falsy(
    tree: &Tree,
    identities: &Tree,
    property: &Tree,
    max_depth: Option<usize>,
) -> Result<Option<Tree>> {
    let name = property_name(property, "only_falsy")?;
    Ok(only_where(tree, identities, &name, max_depth, is_falsy))
}
