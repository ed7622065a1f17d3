#![no_main]

use hufftree::NodeKind;
use hufftree::SerializedTree;
use libfuzzer_sys::fuzz_target;

// a malformed pair must come back as an error, never panic or hang
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let (kind_bits, values) = data.split_at(data.len() / 2);
    let kinds = kind_bits
        .iter()
        .map(|byte| {
            if byte & 1 == 0 {
                NodeKind::Internal
            } else {
                NodeKind::Leaf
            }
        })
        .collect();

    let serialized = SerializedTree {
        kinds,
        values: values.to_vec(),
    };
    let _ = serialized.to_tree();
});
