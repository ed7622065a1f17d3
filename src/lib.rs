/*!
huff_flex is a prefix-code (Huffman) compression engine: it derives an
optimal binary code tree from byte frequencies and encodes/decodes byte
streams against it.

The pipeline is split into independent passes. Counting, tree building
and tree serialization are separate from the encode/decode passes, so a
tree can be built once, shipped as its level-order `(kinds, values)`
pair and rebuilt wherever the payload has to be decoded; the frequency
data itself never has to travel.

Codes are not canonical: equal-weight nodes merge in insertion order,
which is deterministic for a given input but not guaranteed to match
the output of any other encoder.

```
use huff_flex::{compress, decompress};

let input = b"aabcceeeefff";
let compressed = compress(input).unwrap();
assert_eq!(decompress(&compressed).unwrap(), input);
```
*/

pub mod decode;
pub mod encode;

use log::debug;

pub use common::count_simple;
pub use common::CountsTable;
pub use common::HuffError;
pub use common::MAX_SYMBOL_VALUE;
pub use decode::decode;
pub use encode::encode;
pub use encode::Encoded;
pub use hufftree::build_tree;
pub use hufftree::CodeTable;
pub use hufftree::NodeKind;
pub use hufftree::SerializedTree;
pub use hufftree::Tree;

/// Everything a consumer has to retain to reverse `compress`.
///
/// The serialized tree is the only part meant to cross a process
/// boundary on its own; `bit_len` and `symbol_count` travel next to
/// the payload because neither is recoverable from the padded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    pub tree: SerializedTree,
    pub bytes: Vec<u8>,
    pub bit_len: usize,
    pub symbol_count: usize,
}

/// Counts the input, builds the tree, derives the code table and
/// encodes. Empty input has no symbols to build a tree from and is
/// rejected with `EmptyAlphabet`.
pub fn compress(input: &[u8]) -> Result<Compressed, HuffError> {
    let counts = count_simple(input);
    debug!(
        "compressing {} bytes over {} distinct symbols",
        input.len(),
        common::num_symbols(&counts)
    );
    let tree = build_tree(&counts)?;
    let table = CodeTable::from_tree(&tree);
    let encoded = encode(input, &table)?;

    Ok(Compressed {
        tree: SerializedTree::from_tree(&tree),
        bytes: encoded.bytes,
        bit_len: encoded.bit_len,
        symbol_count: encoded.symbol_count,
    })
}

/// Rebuilds the tree from its serialized pair and decodes the payload,
/// exercising the same path a consumer on the far side of a process
/// boundary would take.
pub fn decompress(compressed: &Compressed) -> Result<Vec<u8>, HuffError> {
    let tree = compressed.tree.to_tree()?;
    decode(
        &compressed.bytes,
        compressed.bit_len,
        compressed.symbol_count,
        &tree,
    )
}
