// SPDX-License-Identifier: MIT OR Apache-2.0
//! Type, truthiness, and structural predicates
//!
//! Everything the traversal engine decides about a single node lives here:
//! whether it can be descended into, whether it counts as falsy, and whether
//! two nodes are structurally the same.

use crate::value::{Kind, Mapping, Sequence, Tree};

/// A composite with at least one present key.
///
/// Empty composites are not iterable; walks compare them but never descend.
#[must_use]
pub fn is_iterable(value: &Tree) -> bool {
    value.is_composite() && value.key_count() > 0
}

/// `undefined`, `null`, `""`, `0` and `false` are falsy. Every composite,
/// empty or not, is truthy, and so is `NaN`.
#[must_use]
pub fn is_falsy(value: &Tree) -> bool {
    match value {
        Tree::Undefined | Tree::Null => true,
        Tree::Bool(b) => !b,
        Tree::Number(n) => *n == 0.0,
        Tree::String(s) => s.is_empty(),
        Tree::Sequence(_) | Tree::Mapping(_) => false,
    }
}

/// Negation of [`is_falsy`]
#[must_use]
pub fn is_truthy(value: &Tree) -> bool {
    !is_falsy(value)
}

/// The value itself when truthy, `None` when falsy
#[must_use]
pub fn falser(value: &Tree) -> Option<&Tree> {
    is_truthy(value).then_some(value)
}

/// Own key count of a composite, `0` for scalars
#[must_use]
pub fn length(value: &Tree) -> usize {
    value.key_count()
}

/// The shared kind, if both values have one
#[must_use]
pub fn same_type(a: &Tree, b: &Tree) -> Option<Kind> {
    let kind = a.kind();
    (kind == b.kind()).then_some(kind)
}

/// Same kind, and for composites the same own keys in the same order
#[must_use]
pub fn same_structure(a: &Tree, b: &Tree) -> Option<Kind> {
    let kind = same_type(a, b)?;
    if kind.is_composite() {
        if a.key_count() != b.key_count() {
            return None;
        }
        let keys_match = a
            .entries()
            .zip(b.entries())
            .all(|((key_a, _), (key_b, _))| key_a == key_b);
        if !keys_match {
            return None;
        }
    }
    Some(kind)
}

/// Deep structural equality.
///
/// Composites need the same structure and identical children; scalars compare
/// by value, numbers with IEEE semantics (`NaN` is never identical).
#[must_use]
pub fn identical(a: &Tree, b: &Tree) -> bool {
    let mut pending = vec![(a, b)];
    while let Some((left, right)) = pending.pop() {
        let Some(kind) = same_structure(left, right) else {
            return false;
        };
        if kind.is_composite() {
            pending.extend(
                left.entries()
                    .zip(right.entries())
                    .map(|((_, l), (_, r))| (l, r)),
            );
            continue;
        }
        let equal = match (left, right) {
            (Tree::Undefined, Tree::Undefined) | (Tree::Null, Tree::Null) => true,
            (Tree::Bool(l), Tree::Bool(r)) => l == r,
            #[allow(clippy::float_cmp)] // IEEE equality is the contract
            (Tree::Number(l), Tree::Number(r)) => l == r,
            (Tree::String(l), Tree::String(r)) => l == r,
            _ => false,
        };
        if !equal {
            return false;
        }
    }
    true
}

/// Whether `value` is iterable and owns every key in `keys`.
///
/// An empty key list never matches.
#[must_use]
pub fn contains_keys<K: AsRef<str>>(value: &Tree, keys: &[K]) -> bool {
    if keys.is_empty() || !is_iterable(value) {
        return false;
    }
    keys.iter().all(|key| value.get_key(key.as_ref()).is_some())
}

/// Restrict a composite to the listed keys.
///
/// Mappings keep the original key names, in key-list order. Sequences take the
/// listed slots in key-list order and re-index them from zero. Returns `None`
/// for scalars or an empty key list.
#[must_use]
pub fn trim<K: AsRef<str>>(value: &Tree, keys: &[K]) -> Option<Tree> {
    if keys.is_empty() {
        return None;
    }
    match value {
        Tree::Mapping(map) => {
            let mut trimmed = Mapping::with_capacity(keys.len());
            for key in keys {
                let key = key.as_ref();
                if let Some(entry) = map.get(key) {
                    trimmed.insert(key, entry.clone());
                }
            }
            Some(Tree::Mapping(trimmed))
        }
        Tree::Sequence(_) => {
            let trimmed: Sequence = keys
                .iter()
                .filter_map(|key| value.get_key(key.as_ref()).cloned())
                .collect();
            Some(Tree::Sequence(trimmed))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn t(value: serde_json::Value) -> Tree {
        Tree::from(value)
    }

    #[test]
    fn test_is_iterable() {
        assert!(is_iterable(&t(json!([1]))));
        assert!(is_iterable(&t(json!({"a": 1}))));
        assert!(!is_iterable(&t(json!([]))));
        assert!(!is_iterable(&t(json!({}))));
        assert!(!is_iterable(&t(json!("abc"))));
        assert!(!is_iterable(&Tree::Undefined));
    }

    #[test]
    fn test_falsy_values() {
        for falsy in [
            Tree::Undefined,
            Tree::Null,
            Tree::from(""),
            Tree::from(0),
            Tree::Number(-0.0),
            Tree::from(false),
        ] {
            assert!(is_falsy(&falsy), "{falsy:?} should be falsy");
            assert_eq!(falser(&falsy), None);
        }
        for truthy in [
            t(json!([])),
            t(json!({})),
            Tree::from("0"),
            Tree::from(-1),
            Tree::Number(f64::NAN),
            Tree::from(true),
        ] {
            assert!(is_truthy(&truthy), "{truthy:?} should be truthy");
            assert_eq!(falser(&truthy), Some(&truthy));
        }
    }

    #[test]
    fn test_length() {
        assert_eq!(length(&t(json!({"a": 1, "b": 2}))), 2);
        assert_eq!(length(&t(json!([1, 2, 3]))), 3);
        assert_eq!(length(&t(json!("abc"))), 0);
    }

    #[test]
    fn test_same_type() {
        assert_eq!(same_type(&t(json!(1)), &t(json!(2.5))), Some(Kind::Number));
        assert_eq!(same_type(&t(json!([])), &t(json!({}))), None);
        assert_eq!(same_type(&Tree::Null, &Tree::Undefined), None);
    }

    #[test]
    fn test_same_structure_requires_key_order() {
        let ab = t(json!({"a": 1, "b": 2}));
        let ba = t(json!({"b": 2, "a": 1}));
        let abc = t(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(same_structure(&ab, &t(json!({"a": 9, "b": 9}))), Some(Kind::Mapping));
        assert_eq!(same_structure(&ab, &ba), None);
        assert_eq!(same_structure(&ab, &abc), None);
        assert_eq!(same_structure(&t(json!([])), &t(json!([]))), Some(Kind::Sequence));
        assert_eq!(same_structure(&t(json!("x")), &t(json!("y"))), Some(Kind::String));
    }

    #[test]
    fn test_identical() {
        let a = t(json!({"a": [1, {"b": null}], "c": "d"}));
        assert!(identical(&a, &a.clone()));
        assert!(!identical(&a, &t(json!({"a": [1, {"b": false}], "c": "d"}))));
        assert!(!identical(&a, &t(json!({"c": "d", "a": [1, {"b": null}]}))));
        assert!(identical(&t(json!([])), &t(json!([]))));
        assert!(!identical(&t(json!([])), &t(json!({}))));
        assert!(!identical(&Tree::Number(f64::NAN), &Tree::Number(f64::NAN)));
        assert!(identical(&Tree::Undefined, &Tree::Undefined));
    }

    #[test]
    fn test_identical_ignores_hole_positions_only_through_keys() {
        let mut holey: Sequence = vec![1, 2].into_iter().collect();
        holey.remove(1);
        // [1, <hole>] enumerates the same keys as [1]
        assert!(identical(&Tree::Sequence(holey.clone()), &t(json!([1]))));
        let mut shifted: Sequence = vec![2, 1].into_iter().collect();
        shifted.remove(0);
        // [<hole>, 1] owns key "1", not "0"
        assert!(!identical(&Tree::Sequence(shifted), &t(json!([1]))));
    }

    #[test]
    fn test_contains_keys() {
        let obj = t(json!({"a": 1, "b": 2}));
        assert!(contains_keys(&obj, &["a"]));
        assert!(contains_keys(&obj, &["b", "a"]));
        assert!(!contains_keys(&obj, &["a", "z"]));
        assert!(!contains_keys(&obj, &[] as &[&str]));
        assert!(contains_keys(&t(json!(["x", "y"])), &["1"]));
        assert!(!contains_keys(&t(json!(["x", "y"])), &["2"]));
        assert!(!contains_keys(&t(json!({})), &["a"]));
        assert!(!contains_keys(&t(json!("abc")), &["0"]));
    }

    #[test]
    fn test_trim() {
        let obj = t(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(trim(&obj, &["c", "a"]), Some(t(json!({"c": 3, "a": 1}))));
        assert_eq!(trim(&obj, &["a", "z"]), Some(t(json!({"a": 1}))));
        assert_eq!(trim(&t(json!([10, 20, 30])), &["2", "0"]), Some(t(json!([30, 10]))));
        assert_eq!(trim(&obj, &[] as &[&str]), None);
        assert_eq!(trim(&t(json!(5)), &["a"]), None);
    }

    #[test]
    fn test_trim_copies_deep_entries() {
        let mut deep = Tree::from(0);
        for _ in 0..200_000 {
            deep = Tree::from(vec![deep]);
        }
        let holder: Mapping = [("k", deep), ("j", Tree::Null)].into_iter().collect();
        let holder = Tree::Mapping(holder);
        let trimmed = trim(&holder, &["k"]);
        assert_eq!(trimmed.as_ref().map(Tree::key_count), Some(1));
        let copied = trimmed.and_then(|tree| tree.get_key("k").cloned());
        assert!(copied.as_ref() == holder.get_key("k"));
    }
}
