// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and structural predicates for arbor
//!
//! This crate provides the foundational types used across the arbor ecosystem:
//!
//! - [`error`] - Error types and Result alias
//! - [`value`] - The [`Tree`] value model and its composites
//! - [`path`] - Segment-based paths with a dotted string form
//! - [`predicate`] - Classification, truthiness, and structural equality

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Error types for arbor operations
pub mod error;
/// Segment-based tree paths
pub mod path;
/// Type, truthiness, and structural predicates
pub mod predicate;
/// Tree value model
pub mod value;
// Re-exports for convenience
pub use error::{ArborError, Result, validate_key_name};
pub use path::{Path, PathSegment};
pub use predicate::{
    contains_keys, falser, identical, is_falsy, is_iterable, is_truthy, length, same_structure,
    same_type, trim,
};
pub use value::{Entries, KeyRef, Kind, Mapping, MappingIter, Sequence, SequenceIter, Tree};
