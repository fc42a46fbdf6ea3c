// SPDX-License-Identifier: MIT OR Apache-2.0
//! Key removal and renaming
//!
//! Every operation here returns a fresh tree and leaves its input untouched.

use crate::clone::{deep_clone, rebuild};
use crate::locate::{checked_key, locate_all_key, locate_key};
use arbor_core::{ArborError, Result, Tree};
use tracing::{debug, trace};

/// Copy of `tree` without the first entry keyed `key_name`, in pre-order.
///
/// A removed sequence slot becomes a hole, so later indices do not shift.
///
/// # Errors
///
/// Returns [`ArborError::EmptyKeyName`] when `key_name` is empty.
pub fn deep_remove_key(tree: &Tree, key_name: &str, max_depth: Option<usize>) -> Result<Tree> {
    let key_name = checked_key(key_name, "deep_remove_key")?;
    let mut copy = deep_clone(tree);
    if let Some(parent) = locate_key(tree, key_name, max_depth)? {
        let removed = parent.join(key_name).remove_from(&mut copy);
        trace!(key = key_name, path = %parent, removed = removed.is_some(), "deep_remove_key");
    }
    Ok(copy)
}

/// Copy of `tree` without any entry keyed `key_name`.
///
/// Matches nested inside an entry that was already removed are gone with it.
///
/// # Errors
///
/// Returns [`ArborError::EmptyKeyName`] when `key_name` is empty.
pub fn deep_remove_all_key(tree: &Tree, key_name: &str, max_depth: Option<usize>) -> Result<Tree> {
    let key_name = checked_key(key_name, "deep_remove_all_key")?;
    let mut copy = deep_clone(tree);
    let removed = locate_all_key(tree, key_name, max_depth)?
        .iter()
        .filter_map(|parent| parent.join(key_name).remove_from(&mut copy))
        .count();
    trace!(key = key_name, removed, "deep_remove_all_key");
    Ok(copy)
}

fn checked_new_key<'k>(new_key: &'k str, operation: &'static str) -> Result<&'k str> {
    if new_key.is_empty() {
        debug!(operation, "rejected empty replacement key name");
        return Err(ArborError::EmptyNewKeyName);
    }
    Ok(new_key)
}

const fn renames_at(depth: usize, max_depth: Option<usize>) -> bool {
    match max_depth {
        Some(limit) => depth < limit,
        None => true,
    }
}

/// Copy of `tree` with the first mapping key equal to `key_name` renamed.
///
/// Mappings at depth `max_depth` or deeper are left alone, but are still
/// copied. Entry order is kept. When `new_key` already names an earlier entry
/// of the same mapping, that entry receives the renamed value.
///
/// # Errors
///
/// Returns [`ArborError::EmptyKeyName`] or [`ArborError::EmptyNewKeyName`]
/// for empty names.
pub fn rename_key(
    tree: &Tree,
    key_name: &str,
    new_key: &str,
    max_depth: Option<usize>,
) -> Result<Tree> {
    let key_name = checked_key(key_name, "rename_key")?;
    let new_key = checked_new_key(new_key, "rename_key")?;
    let mut applied = false;
    let renamed = rebuild(tree, 0, None, |key, depth| {
        if applied || key != key_name || !renames_at(depth, max_depth) {
            return None;
        }
        applied = true;
        Some(new_key.to_owned())
    });
    trace!(from = key_name, to = new_key, applied, "rename_key");
    Ok(renamed)
}

/// Copy of `tree` with every eligible mapping key equal to `key_name` renamed.
///
/// # Errors
///
/// Returns [`ArborError::EmptyKeyName`] or [`ArborError::EmptyNewKeyName`]
/// for empty names.
pub fn rename_keys(
    tree: &Tree,
    key_name: &str,
    new_key: &str,
    max_depth: Option<usize>,
) -> Result<Tree> {
    let key_name = checked_key(key_name, "rename_keys")?;
    let new_key = checked_new_key(new_key, "rename_keys")?;
    let mut renamed_count = 0_usize;
    let renamed = rebuild(tree, 0, None, |key, depth| {
        if key != key_name || !renames_at(depth, max_depth) {
            return None;
        }
        renamed_count += 1;
        Some(new_key.to_owned())
    });
    trace!(from = key_name, to = new_key, renamed = renamed_count, "rename_keys");
    Ok(renamed)
}
