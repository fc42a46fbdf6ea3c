#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for clone and key rewriting fidelity.
//!
//! Verifies on arbitrary JSON documents that:
//! - `deep_clone` is identical to its source
//! - depth-bounded clones never exceed their bound
//! - removing every occurrence of a key leaves none behind
//! - renaming a key away and back restores the document
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_clone_fidelity

use arbor_core::{Tree, identical};
use arbor_ops::{
    CloneOptions, deep_clone, deep_clone_with, deep_remove_all_key, locate_all_key, max_depth,
    rename_keys,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let tree = Tree::from(value);

    let copy = deep_clone(&tree);
    assert!(identical(&copy, &tree));
    assert_eq!(copy, tree);

    for limit in 0..4 {
        let bounded = deep_clone_with(&tree, &CloneOptions::new().max_depth(limit));
        assert!(max_depth(&bounded, None) <= limit);
    }

    let Some(key) = tree.keys().into_iter().find(|key| !key.is_empty()) else {
        return;
    };
    let scrubbed = deep_remove_all_key(&tree, &key, None).expect("key from the tree is not empty");
    assert!(locate_all_key(&scrubbed, &key, None).unwrap().is_empty());

    // Renaming through a key the document never uses cannot collide
    let marker = "\u{0}arbor-fuzz\u{0}";
    if locate_all_key(&tree, marker, None).unwrap().is_empty() {
        let there = rename_keys(&tree, &key, marker, None).unwrap();
        let back = rename_keys(&there, marker, &key, None).unwrap();
        assert_eq!(back, tree);
    }
});
