// SPDX-License-Identifier: MIT OR Apache-2.0
//! Segment-based tree paths
//!
//! A [`Path`] is the ordered list of keys from the root to a node, root
//! excluded. The empty path addresses the root itself.
//!
//! The dotted string form (`users.0.name`) is available through `Display` and
//! `FromStr`. Segments that themselves contain `.` cannot be told apart from
//! nested segments in that form; there is no escaping.

use crate::value::Tree;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Parse a canonical decimal index: digits only, no sign, no leading zeros.
pub(crate) fn parse_index(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse().ok()
}

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key
    Key(String),
    /// Sequence index
    Index(usize),
}

impl PathSegment {
    /// Whether this segment is spelled `name` in the dotted form
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Key(key) => key == name,
            Self::Index(index) => parse_index(name) == Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    /// Canonical decimal strings become indices, everything else a key.
    fn from(s: &str) -> Self {
        parse_index(s).map_or_else(|| Self::Key(s.to_owned()), Self::Index)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Location of a node, from the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[PathSegment; 8]>,
}

impl Path {
    /// The root path
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse the dotted form. The empty string is the root.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        dotted.split('.').map(PathSegment::from).collect()
    }

    /// Whether this addresses the root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments, which is also the depth of the addressed node
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`Path::is_root`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from the root down
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Final segment
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Append a segment in place
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// Drop the final segment
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// A new path one segment deeper
    #[must_use]
    pub fn join(&self, segment: impl Into<PathSegment>) -> Self {
        let mut child = self.clone();
        child.push(segment);
        child
    }

    /// Path of the containing node, `None` for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut parent = self.clone();
        parent.pop();
        Some(parent)
    }

    /// Walk `tree` segment by segment
    #[must_use]
    pub fn resolve<'t>(&self, tree: &'t Tree) -> Option<&'t Tree> {
        self.segments
            .iter()
            .try_fold(tree, |node, segment| node.child(segment))
    }

    /// Mutable counterpart of [`Path::resolve`]
    pub fn resolve_mut<'t>(&self, tree: &'t mut Tree) -> Option<&'t mut Tree> {
        self.segments
            .iter()
            .try_fold(tree, |node, segment| node.child_mut(segment))
    }

    /// Detach the addressed node from its parent.
    ///
    /// Returns `None` for the root or when the path no longer resolves.
    /// Sequence slots become holes.
    pub fn remove_from(&self, tree: &mut Tree) -> Option<Tree> {
        let (last, parents) = self.segments.split_last()?;
        let parent = parents
            .iter()
            .try_fold(tree, |node, segment| node.child_mut(segment))?;
        parent.remove_child(last)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Compares against the dotted form without allocating
impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        if other.is_empty() {
            return self.is_root();
        }
        let mut parts = other.split('.');
        self.segments
            .iter()
            .all(|segment| parts.next().is_some_and(|part| segment.matches(part)))
            && parts.next().is_none()
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dotted = String::deserialize(deserializer)?;
        Ok(Self::parse(&dotted))
    }
}
