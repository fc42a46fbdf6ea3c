#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for dotted path parsing.
//!
//! Any string parses to a path whose dotted form is the original string, and
//! resolving or removing a fuzzed path against a fixed document never panics.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_path_round_trip

use arbor_core::{Path, Tree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(dotted) = std::str::from_utf8(data) else {
        return;
    };
    let path = Path::parse(dotted);
    assert_eq!(path.to_string(), dotted);
    assert!(path == dotted);
    assert_eq!(path.len(), if dotted.is_empty() { 0 } else { dotted.split('.').count() });

    let mut tree = Tree::from(serde_json::json!({
        "a": [{"b": 1}, {"c": [true, null]}],
        "0": {"1": "x"},
        "": {"": 0}
    }));
    let resolved = path.resolve(&tree).cloned();
    let removed = path.remove_from(&mut tree);
    if !path.is_root() {
        assert_eq!(resolved, removed);
    }
});
