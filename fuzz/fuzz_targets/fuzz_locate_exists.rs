#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for search agreement.
//!
//! Parses the input as JSON, picks one of the document's own nodes as the
//! identity, and verifies that `exists`, `locate`, and `locate_all` agree and
//! that every reported path resolves to a matching node.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_locate_exists

use arbor_core::Tree;
use arbor_ops::{exists, locate, locate_all, matches_identity, walk};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, json)) = data.split_first() else {
        return;
    };
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(json) else {
        return;
    };
    let tree = Tree::from(value);

    let nodes: Vec<&Tree> = walk(&tree, None).map(|visit| visit.node).collect();
    let identity = nodes[usize::from(selector) % nodes.len()].clone();
    let limit = (selector & 0x80 != 0).then_some(usize::from(selector & 0x07));

    let first = locate(&tree, &identity, limit);
    let all = locate_all(&tree, &identity, limit);
    assert_eq!(exists(&tree, &identity, limit), first.is_some());
    assert_eq!(first.is_some(), !all.is_empty());
    assert_eq!(first.as_ref(), all.first());
    if limit.is_none() {
        assert!(first.is_some(), "a node of the tree must be found");
    }

    for path in &all {
        let node = path.resolve(&tree).expect("located path must resolve");
        assert!(matches_identity(node, &identity));
    }
});
