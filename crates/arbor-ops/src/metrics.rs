// SPDX-License-Identifier: MIT OR Apache-2.0
//! Depth measurements and match counting

use crate::locate::{locate, locate_all};
use crate::walk::walk;
use arbor_core::Tree;

/// Depth of the first match, `0` when the root matches
#[must_use]
pub fn match_depth(tree: &Tree, identity: &Tree, max_depth: Option<usize>) -> Option<usize> {
    locate(tree, identity, max_depth).map(|path| path.len())
}

/// Deepest level of `tree`, counting scalar leaves as a level.
///
/// `{"a": {"b": {"c": 1}}}` is 3 levels deep, a lone scalar is 0. The result
/// never exceeds `max_layer`.
#[must_use]
pub fn max_depth(tree: &Tree, max_layer: Option<usize>) -> usize {
    walk(tree, max_layer)
        .map(|visit| visit.depth)
        .max()
        .unwrap_or_default()
}

/// Number of matches for `identity`.
///
/// The search stops at the smaller of `nth_depth` and `max_depth`. With
/// `nth_depth` set, only matches exactly that deep are counted.
#[must_use]
pub fn count_matches(
    tree: &Tree,
    identity: &Tree,
    nth_depth: Option<usize>,
    max_depth: Option<usize>,
) -> usize {
    let limit = match (nth_depth, max_depth) {
        (Some(nth), Some(max)) => Some(nth.min(max)),
        (nth, max) => nth.or(max),
    };
    let paths = locate_all(tree, identity, limit);
    match nth_depth {
        Some(nth) => paths.iter().filter(|path| path.len() == nth).count(),
        None => paths.len(),
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
    fn test_match_depth() {
        let tree = t(json!({"a": {"b": {"c": 1}}}));
        assert_eq!(match_depth(&tree, &t(json!(1)), None), Some(3));
        assert_eq!(match_depth(&tree, &t(json!({"c": 1})), None), Some(2));
        assert_eq!(match_depth(&tree, &tree.clone(), None), Some(0));
        assert_eq!(match_depth(&tree, &t(json!(2)), None), None);
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(max_depth(&t(json!({"a": {"b": {"c": 1}}})), None), 3);
        assert_eq!(max_depth(&t(json!({"a": {"b": {"c": 1}}})), Some(2)), 2);
        assert_eq!(max_depth(&t(json!([1, [2, [3]]])), None), 3);
        assert_eq!(max_depth(&t(json!({"a": {}})), None), 1);
        assert_eq!(max_depth(&t(json!("leaf")), None), 0);
    }

    #[test]
    fn test_count_matches() {
        let tree = t(json!({"x": 1, "a": {"x": 1, "b": {"x": 1}}}));
        let one = t(json!(1));
        assert_eq!(count_matches(&tree, &one, None, None), 3);
        assert_eq!(count_matches(&tree, &one, Some(2), None), 1);
        assert_eq!(count_matches(&tree, &one, None, Some(2)), 2);
        assert_eq!(count_matches(&tree, &one, Some(3), Some(2)), 0);
        assert_eq!(count_matches(&tree, &t(json!({"x": 1})), None, None), 3);
        assert_eq!(count_matches(&tree, &t(json!(5)), None, None), 0);
    }
}
