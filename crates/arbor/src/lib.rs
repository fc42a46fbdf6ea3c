// SPDX-License-Identifier: MIT OR Apache-2.0
//! # arbor
//!
//! Search, copy, and filter arbitrarily nested JSON-like trees.
//!
//! - [`arbor_core`] - the [`Tree`] value model, paths, predicates, and errors
//! - [`arbor_ops`] - the walk engine and every operation built on it
//! - [`prelude`] - both, for glob import
//!
//! ```
//! use arbor::prelude::*;
//!
//! let tree = Tree::from(serde_json::json!({"a": {"b": {"c": 1}}}));
//! let path = locate(&tree, &Tree::from(1), None);
//! assert_eq!(path.map(|p| p.to_string()), Some("a.b.c".to_owned()));
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

pub use arbor_core;
pub use arbor_ops;

pub use arbor_core::{ArborError, Kind, Mapping, Path, PathSegment, Result, Sequence, Tree};

/// Everything needed for everyday use
pub mod prelude {
    pub use arbor_core::{
        ArborError, Kind, Mapping, Path, PathSegment, Sequence, Tree, contains_keys, identical,
        is_falsy, is_iterable, is_truthy, same_structure, same_type, trim,
    };
    pub use arbor_ops::{
        CloneOptions, WalkOptions, count_matches, deep_clone, deep_clone_with, deep_filter,
        deep_filter_context, deep_filter_key, deep_get, deep_get_context, deep_get_key,
        deep_remove_all_key, deep_remove_key, exists, found_falsy, found_truthy, locate,
        locate_all, locate_all_key, locate_key, match_depth, max_depth, only_existing, only_falsy,
        only_missing, only_truthy, rename_key, rename_keys, single_property, walk,
    };
}
