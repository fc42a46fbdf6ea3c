// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tree value model
//!
//! A [`Tree`] is either a scalar or a composite. Composites come in two kinds:
//!
//! - [`Sequence`] - slots indexed `0..len`; a slot may be a hole after removal
//! - [`Mapping`] - string keys kept in insertion order
//!
//! Both expose their own keys through [`Tree::entries`], which is the single
//! enumeration order every traversal in arbor follows.
//!
//! Cloning, comparing and dropping a tree work from an explicit stack, so
//! nesting depth is bounded by the heap rather than the call stack.

use crate::path::{PathSegment, parse_index};
use ahash::RandomState;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Classification of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Absent value
    Undefined,
    /// Explicit null
    Null,
    /// Boolean scalar
    #[serde(rename = "boolean")]
    Bool,
    /// Numeric scalar
    Number,
    /// String scalar
    String,
    /// Ordered, index-addressed composite
    #[serde(rename = "array")]
    Sequence,
    /// Key-addressed composite
    #[serde(rename = "object")]
    Mapping,
}

impl Kind {
    /// Classification name, as used in diagnostics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "array",
            Self::Mapping => "object",
        }
    }

    /// Whether nodes of this kind hold children
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON-like tree node
///
/// `PartialEq` is exact representation equality (hole positions and sequence
/// length included). Use [`crate::identical`] for the structural equality the
/// traversal operations are defined on.
#[derive(Debug, Default)]
pub enum Tree {
    /// Absent value
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Numeric scalar
    Number(f64),
    /// String scalar
    String(String),
    /// Ordered composite
    Sequence(Sequence),
    /// Keyed composite
    Mapping(Mapping),
}

impl Tree {
    /// Classify this node
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
        }
    }

    /// Whether this node is a sequence or a mapping, empty or not
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    /// Borrow the sequence, if this is one
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Borrow the mapping, if this is one
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the string, if this is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is one
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is one
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Own entries in enumeration order; empty for scalars
    #[must_use]
    pub fn entries(&self) -> Entries<'_> {
        let inner = match self {
            Self::Sequence(seq) => EntriesInner::Sequence(seq.iter()),
            Self::Mapping(map) => EntriesInner::Mapping(map.iter()),
            _ => EntriesInner::Empty,
        };
        Entries { inner }
    }

    /// Number of own keys; `0` for scalars
    #[must_use]
    pub fn key_count(&self) -> usize {
        match self {
            Self::Sequence(seq) => seq.key_count(),
            Self::Mapping(map) => map.len(),
            _ => 0,
        }
    }

    /// Own keys in enumeration order, sequence indices in decimal form
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries().map(|(key, _)| key.to_string()).collect()
    }

    /// Look up an own key. Sequences accept canonical decimal indices.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Sequence(seq) => parse_index(key).and_then(|index| seq.get(index)),
            Self::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Step to a child through one path segment.
    ///
    /// Segments are matched leniently: an index against a mapping looks up its
    /// decimal key, a key against a sequence is read as an index.
    #[must_use]
    pub fn child(&self, segment: &PathSegment) -> Option<&Self> {
        match (self, segment) {
            (Self::Sequence(seq), PathSegment::Index(index)) => seq.get(*index),
            (Self::Mapping(map), PathSegment::Index(index)) => map.get(&index.to_string()),
            (_, PathSegment::Key(key)) => self.get_key(key),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Tree::child`]
    pub fn child_mut(&mut self, segment: &PathSegment) -> Option<&mut Self> {
        match (self, segment) {
            (Self::Sequence(seq), PathSegment::Index(index)) => seq.get_mut(*index),
            (Self::Sequence(seq), PathSegment::Key(key)) => {
                parse_index(key).and_then(|index| seq.get_mut(index))
            }
            (Self::Mapping(map), PathSegment::Index(index)) => map.get_mut(&index.to_string()),
            (Self::Mapping(map), PathSegment::Key(key)) => map.get_mut(key),
            _ => None,
        }
    }

    /// Remove the child addressed by one segment.
    ///
    /// Removing from a sequence leaves a hole; the length is unchanged.
    pub fn remove_child(&mut self, segment: &PathSegment) -> Option<Self> {
        match (self, segment) {
            (Self::Sequence(seq), PathSegment::Index(index)) => seq.remove(*index),
            (Self::Sequence(seq), PathSegment::Key(key)) => {
                parse_index(key).and_then(|index| seq.remove(index))
            }
            (Self::Mapping(map), PathSegment::Index(index)) => map.remove(&index.to_string()),
            (Self::Mapping(map), PathSegment::Key(key)) => map.remove(key),
            _ => None,
        }
    }

    /// An empty composite of the same kind, or a copy of a scalar
    #[must_use]
    pub fn empty_like(&self) -> Self {
        match self {
            Self::Undefined => Self::Undefined,
            Self::Null => Self::Null,
            Self::Bool(b) => Self::Bool(*b),
            Self::Number(n) => Self::Number(*n),
            Self::String(s) => Self::String(s.clone()),
            Self::Sequence(_) => Self::Sequence(Sequence::new()),
            Self::Mapping(_) => Self::Mapping(Mapping::new()),
        }
    }
}

/// A composite being copied, with the key its next composite child goes under
enum CopyFrame<'a> {
    Sequence {
        source: SequenceIter<'a>,
        copy: Sequence,
        pending: usize,
    },
    Mapping {
        source: MappingIter<'a>,
        copy: Mapping,
        pending: &'a str,
    },
}

impl<'a> CopyFrame<'a> {
    fn open(node: &'a Tree) -> Option<Self> {
        match node {
            Tree::Sequence(seq) => Some(Self::Sequence {
                source: seq.iter(),
                copy: Sequence::sparse(seq.len()),
                pending: 0,
            }),
            Tree::Mapping(map) => Some(Self::Mapping {
                source: map.iter(),
                copy: Mapping::with_capacity(map.len()),
                pending: "",
            }),
            _ => None,
        }
    }

    /// Copy scalar children until a composite child turns up; its frame is
    /// returned and its key remembered for [`CopyFrame::fill`].
    fn next_composite(&mut self) -> Option<Self> {
        match self {
            Self::Sequence {
                source,
                copy,
                pending,
            } => {
                for (index, child) in source {
                    if let Some(frame) = Self::open(child) {
                        *pending = index;
                        return Some(frame);
                    }
                    copy.set(index, child.empty_like());
                }
            }
            Self::Mapping {
                source,
                copy,
                pending,
            } => {
                for (key, child) in source {
                    if let Some(frame) = Self::open(child) {
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
        match self {
            Self::Sequence { copy, pending, .. } => copy.set(*pending, value),
            Self::Mapping { copy, pending, .. } => {
                copy.insert(*pending, value);
            }
        }
    }

    fn finish(self) -> Tree {
        match self {
            Self::Sequence { copy, .. } => Tree::Sequence(copy),
            Self::Mapping { copy, .. } => Tree::Mapping(copy),
        }
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        let Some(root) = CopyFrame::open(self) else {
            return self.empty_like();
        };
        let mut stack = vec![root];
        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.next_composite() {
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
        Self::Undefined
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            let equal = match (left, right) {
                (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
                (Self::Bool(l), Self::Bool(r)) => l == r,
                #[allow(clippy::float_cmp)] // representation equality
                (Self::Number(l), Self::Number(r)) => l == r,
                (Self::String(l), Self::String(r)) => l == r,
                (Self::Sequence(l), Self::Sequence(r)) => {
                    l.len() == r.len()
                        && l.slots.iter().zip(&r.slots).all(|pair| match pair {
                            (Some(l), Some(r)) => {
                                pending.push((l, r));
                                true
                            }
                            (None, None) => true,
                            _ => false,
                        })
                }
                (Self::Mapping(l), Self::Mapping(r)) => {
                    l.len() == r.len()
                        && l.iter().zip(r.iter()).all(|((key_a, value_a), (key_b, value_b))| {
                            pending.push((value_a, value_b));
                            key_a == key_b
                        })
                }
                _ => false,
            };
            if !equal {
                return false;
            }
        }
        true
    }
}

/// Drop detached composites one level at a time.
///
/// Each node popped here has already lost its children to `pending`, so its
/// own drop never descends.
fn dismantle(mut pending: Vec<Tree>) {
    while let Some(mut node) = pending.pop() {
        match &mut node {
            Tree::Sequence(seq) => pending.extend(seq.slots.drain(..).flatten()),
            Tree::Mapping(map) => pending.extend(map.entries.drain(..).map(|(_, value)| value)),
            _ => {}
        }
    }
}

/// Ordered composite whose slots may contain holes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    slots: Vec<Option<Tree>>,
}

impl Sequence {
    /// Create an empty sequence
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` slots
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Create a sequence of `len` holes
    #[must_use]
    pub fn sparse(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Slot count, holes included
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of present (non-hole) slots
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Append a value
    pub fn push(&mut self, value: Tree) {
        self.slots.push(Some(value));
    }

    /// Store a value at `index`, padding with holes when past the end
    pub fn set(&mut self, index: usize, value: Tree) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(value);
    }

    /// Value at `index`, `None` for holes and out-of-range indices
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tree> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable value at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tree> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Take the value at `index`, leaving a hole
    pub fn remove(&mut self, index: usize) -> Option<Tree> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Whether `index` holds a value
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Present slots with their indices
    #[must_use]
    pub fn iter(&self) -> SequenceIter<'_> {
        SequenceIter {
            inner: self.slots.iter().enumerate(),
        }
    }

    /// Present values in index order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Tree> {
        self.iter().map(|(_, value)| value)
    }
}

impl Drop for Sequence {
    fn drop(&mut self) {
        if self.slots.iter().flatten().any(Tree::is_composite) {
            dismantle(self.slots.drain(..).flatten().collect());
        }
    }
}

impl<T: Into<Tree>> FromIterator<T> for Sequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(|value| Some(value.into())).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = (usize, &'a Tree);
    type IntoIter = SequenceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the present slots of a [`Sequence`]
#[derive(Debug, Clone)]
pub struct SequenceIter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<Tree>>>,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = (usize, &'a Tree);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }
}

impl DoubleEndedIterator for SequenceIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            let (index, slot) = self.inner.next_back()?;
            if let Some(value) = slot {
                return Some((index, value));
            }
        }
    }
}

/// Insertion-ordered string-keyed composite
///
/// Equality is order-sensitive, like the rest of [`Tree`]'s representation
/// equality.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: IndexMap<String, Tree, RandomState>,
}

impl Mapping {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Entry count
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.entries.get(key)
    }

    /// Mutable value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tree> {
        self.entries.get_mut(key)
    }

    /// Whether `key` is an own key
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Tree) -> Option<Tree> {
        self.entries.insert(key.into(), value)
    }

    /// Remove `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Tree> {
        self.entries.shift_remove(key)
    }

    /// Entries in insertion order
    #[must_use]
    pub fn iter(&self) -> MappingIter<'_> {
        MappingIter {
            inner: self.entries.iter(),
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        if self.entries.values().any(Tree::is_composite) {
            dismantle(self.entries.drain(..).map(|(_, value)| value).collect());
        }
    }
}

impl<K: Into<String>, V: Into<Tree>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value.into());
        }
        map
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a str, &'a Tree);
    type IntoIter = MappingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`Mapping`]
#[derive(Debug, Clone)]
pub struct MappingIter<'a> {
    inner: indexmap::map::Iter<'a, String, Tree>,
}

impl<'a> Iterator for MappingIter<'a> {
    type Item = (&'a str, &'a Tree);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for MappingIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, value)| (key.as_str(), value))
    }
}

/// Borrowed own key of a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRef<'a> {
    /// Sequence slot index
    Index(usize),
    /// Mapping key
    Name(&'a str),
}

impl KeyRef<'_> {
    /// Whether this key is spelled `name`. Indices compare in canonical
    /// decimal form, so `"0"` matches index 0 but `"00"` does not.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::Index(index) => parse_index(name) == Some(index),
            Self::Name(key) => key == name,
        }
    }

    /// Owned path segment for this key
    #[must_use]
    pub fn to_segment(self) -> PathSegment {
        match self {
            Self::Index(index) => PathSegment::Index(index),
            Self::Name(key) => PathSegment::Key(key.to_owned()),
        }
    }
}

impl fmt::Display for KeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(key) => f.write_str(key),
        }
    }
}

/// Iterator over the own entries of a node, see [`Tree::entries`]
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

#[derive(Debug, Clone)]
enum EntriesInner<'a> {
    Sequence(SequenceIter<'a>),
    Mapping(MappingIter<'a>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (KeyRef<'a>, &'a Tree);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(iter) => iter.next().map(|(i, v)| (KeyRef::Index(i), v)),
            EntriesInner::Mapping(iter) => iter.next().map(|(k, v)| (KeyRef::Name(k), v)),
            EntriesInner::Empty => None,
        }
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(iter) => iter.next_back().map(|(i, v)| (KeyRef::Index(i), v)),
            EntriesInner::Mapping(iter) => iter.next_back().map(|(k, v)| (KeyRef::Name(k), v)),
            EntriesInner::Empty => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Tree {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Tree {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Tree {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Tree {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Tree {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for Tree {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Tree {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Tree {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Tree {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Sequence> for Tree {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl From<Mapping> for Tree {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Tree {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().collect())
    }
}

impl From<serde_json::Value> for Tree {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => {
                Self::Mapping(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Tree> for serde_json::Value {
    fn from(tree: Tree) -> Self {
        match tree {
            Tree::Undefined | Tree::Null => Self::Null,
            Tree::Bool(b) => Self::Bool(b),
            Tree::Number(n) => json_number(n),
            Tree::String(s) => Self::String(s),
            Tree::Sequence(mut seq) => Self::Array(
                std::mem::take(&mut seq.slots)
                    .into_iter()
                    .map(|slot| slot.map_or(Self::Null, Self::from))
                    .collect(),
            ),
            Tree::Mapping(mut map) => Self::Object(
                std::mem::take(&mut map.entries)
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn json_number(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Tree {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(seq) => {
                let mut out = serializer.serialize_seq(Some(seq.len()))?;
                for slot in &seq.slots {
                    match slot {
                        Some(value) => out.serialize_element(value)?,
                        None => out.serialize_element(&())?,
                    }
                }
                out.end()
            }
            Self::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TreeVisitor)
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = Tree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON-like value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Tree, E> {
        Ok(Tree::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Tree, E> {
        Ok(Tree::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Tree, E> {
        Ok(Tree::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Tree, E> {
        Ok(Tree::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Tree, E> {
        Ok(Tree::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Tree, E> {
        Ok(Tree::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Tree, E> {
        Ok(Tree::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Tree, E> {
        Ok(Tree::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Tree, D::Error> {
        Tree::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Tree, A::Error> {
        let mut seq = Sequence::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(value) = access.next_element::<Tree>()? {
            seq.push(value);
        }
        Ok(Tree::Sequence(seq))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Tree, A::Error> {
        let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Tree>()? {
            map.insert(key, value);
        }
        Ok(Tree::Mapping(map))
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
