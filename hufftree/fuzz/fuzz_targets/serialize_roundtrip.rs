#![no_main]

use common::count_simple;
use hufftree::build_tree;
use hufftree::SerializedTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let counts = count_simple(&data);
    let tree = build_tree(&counts).unwrap();

    let rebuilt = SerializedTree::from_tree(&tree).to_tree().unwrap();

    let mut original_depths = tree.leaf_depths();
    let mut rebuilt_depths = rebuilt.leaf_depths();
    original_depths.sort();
    rebuilt_depths.sort();
    assert_eq!(original_depths, rebuilt_depths);
});
