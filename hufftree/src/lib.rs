/*!
hufftree builds optimal binary prefix-code trees from symbol
frequencies and turns them into the two artifacts the codec needs: a
symbol-to-code lookup for encoding and a compact level-order
serialization that survives a process boundary and rebuilds an
equivalent tree on the other side.
*/

pub mod codes;
pub mod serialize;
pub mod tree;

pub use codes::{Code, CodeTable};
pub use serialize::{NodeKind, SerializedTree};
pub use tree::build_tree;
pub use tree::Node;
pub use tree::Tree;

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

/// upper bound of nodes in a tree over a single-byte alphabet:
/// 256 leaves plus 255 parents
pub const MAX_TREE_NODES: usize = 2 * (MAX_SYMBOL_VALUE as usize + 1) - 1;
