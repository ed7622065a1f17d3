#![no_main]

use common::count_simple;
use hufftree::build_tree;
use hufftree::codes::check_prefix_property;
use hufftree::CodeTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let counts = count_simple(&data);
    let tree = build_tree(&counts).unwrap();
    check_prefix_property(&CodeTable::from_tree(&tree));
});
