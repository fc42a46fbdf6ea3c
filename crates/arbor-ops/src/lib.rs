// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Tree search and transformation
//!
//! Depth-bounded operations over [`arbor_core::Tree`] values.
//!
//! ## Search
//! - [`locate()`] / [`locate_all`]: paths of nodes matching an identity, either
//!   by value or by shape (the node restricted to the identity's keys equals
//!   the identity)
//! - [`locate_key`] / [`locate_all_key`]: parent paths of entries with a key
//!
//! ## Reads
//! - [`deep_get`], [`deep_filter`] and their `_key` and `_context` variants
//!
//! ## Copies
//! - [`deep_clone`] / [`deep_clone_with`]: full or depth-windowed copies
//! - [`deep_remove_key`], [`deep_remove_all_key`], [`rename_key`],
//!   [`rename_keys`]: copies with entries removed or renamed
//!
//! ## Filtering
//! - [`exists`], [`only_existing`], [`only_missing`]
//! - [`found_truthy`], [`found_falsy`], [`only_truthy`], [`only_falsy`]
//!
//! ## Depth
//! Every `max_depth` argument counts edges from the root and `None` means
//! unbounded. A node at exactly `max_depth` can still match; only its
//! children are out of reach.
//!
//! No operation recurses on the call stack, and none mutates its input.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Deep cloning with depth windows
pub mod clone;
/// Set filtering of candidate identities
pub mod filter;
/// Value and key search
pub mod locate;
/// Depth measurements and match counting
pub mod metrics;
/// Key removal and renaming
pub mod mutate;
/// Reads built on search
pub mod read;
/// Depth-bounded pre-order walk
pub mod walk;

pub use clone::{CloneOptions, deep_clone, deep_clone_with};
pub use filter::{
    exists, found_falsy, found_truthy, only_existing, only_falsy, only_missing, only_truthy,
    single_property,
};
pub use locate::{locate, locate_all, locate_all_key, locate_key, matches_identity, shape_contains};
pub use metrics::{count_matches, match_depth, max_depth};
pub use mutate::{deep_remove_all_key, deep_remove_key, rename_key, rename_keys};
pub use read::{
    deep_filter, deep_filter_context, deep_filter_key, deep_get, deep_get_context, deep_get_key,
};
pub use walk::{Visit, WalkOptions, Walker, walk};
