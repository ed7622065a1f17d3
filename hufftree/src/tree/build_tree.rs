use core::cmp::Ordering;
use std::collections::BinaryHeap;

use common::CountsTable;
use common::HuffError;
use log::debug;

use crate::tree::tree_node::Node;
use crate::tree::Tree;

/// Heap entry for a node still waiting to be merged.
///
/// `seq` is a monotonically increasing insertion counter, so nodes of
/// equal weight leave the heap in insertion order. This keeps the tree
/// shape deterministic for a given frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingNode {
    weight: u32,
    seq: u16,
    pos: u16,
}

impl PartialOrd for PendingNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for PendingNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Builds the prefix-code tree with greedy minimum-weight merges.
///
/// One leaf is created per non-zero count. While more than one node is
/// unmerged, the two lightest leave the heap (first popped becomes the
/// left child) and a parent carrying their combined weight replaces
/// them. A single distinct symbol yields a tree whose root is that
/// leaf, no merge happens.
pub fn build_tree(counts: &CountsTable) -> Result<Tree, HuffError> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut heap = BinaryHeap::with_capacity(256);

    for (byte, count) in counts.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let pos = nodes.len() as u16;
        nodes.push(Node::leaf(byte as u8, *count));
        heap.push(PendingNode {
            weight: *count,
            seq: pos,
            pos,
        });
    }
    if nodes.is_empty() {
        return Err(HuffError::EmptyAlphabet);
    }
    debug!("building tree over {} symbols", heap.len());

    let mut seq = nodes.len() as u16;
    // single leaf case: the loop below never runs and the only node is
    // the root
    let mut root = nodes.len() - 1;
    while let (Some(first), Some(second)) = (heap.pop(), heap.pop()) {
        let pos = nodes.len() as u16;
        nodes.push(Node::parent(
            first.weight.saturating_add(second.weight),
            first.pos,
            second.pos,
        ));
        root = pos as usize;
        heap.push(PendingNode {
            weight: nodes[root].weight,
            seq,
            pos,
        });
        seq += 1;
        if heap.len() == 1 {
            break;
        }
    }

    Ok(Tree { nodes, root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::count_simple;

    #[test]
    fn test_empty_alphabet() {
        let counts = [0_u32; 256];
        assert_eq!(build_tree(&counts), Err(HuffError::EmptyAlphabet));
    }

    #[test]
    fn test_single_symbol() {
        let counts = count_simple(&[7, 7, 7]);
        let tree = build_tree(&counts).unwrap();

        assert_eq!(tree.num_nodes(), 1);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().symbol(), Some(7));
        assert_eq!(tree.root().weight(), 3);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_weight_conservation() {
        let src: Vec<u8> = vec![1, 2, 3, 3, 4, 4, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6];
        let counts = count_simple(&src);
        let tree = build_tree(&counts).unwrap();

        assert_eq!(tree.root().weight() as usize, src.len());
        let leaf_weight_sum: u32 = tree
            .leaf_depths()
            .iter()
            .map(|(symbol, _depth)| counts[*symbol as usize])
            .sum();
        assert_eq!(leaf_weight_sum, tree.root().weight());
    }

    #[test]
    fn test_two_children_or_none() {
        let src: Vec<u8> = vec![1, 2, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5];
        let counts = count_simple(&src);
        let tree = build_tree(&counts).unwrap();

        for pos in 0..tree.num_nodes() {
            let node = tree.node(pos as u16);
            assert_eq!(node.child(0).is_some(), node.child(1).is_some());
        }
        assert_eq!(tree.num_leaves(), 5);
        // a binary tree with n leaves has n - 1 internal nodes
        assert_eq!(tree.num_nodes(), 2 * 5 - 1);
    }

    // input is the number of repeats per symbol
    fn gen_fibo_distribution(fibo_counts: &[u64]) -> Vec<u8> {
        use std::io::Read;
        let mut all_bytes = Vec::new();

        for (num, repeat) in fibo_counts.iter().enumerate() {
            std::io::repeat(num as u8)
                .take(*repeat)
                .read_to_end(&mut all_bytes)
                .unwrap();
        }
        all_bytes
    }

    #[test]
    fn test_skewed_distribution_chains() {
        // fibonacci counts force the deepest possible tree
        let all_bytes = gen_fibo_distribution(&[1_u64, 1, 2, 3, 5, 8, 13, 21]);
        let counts = count_simple(&all_bytes);
        let tree = build_tree(&counts).unwrap();

        assert_eq!(tree.depth(), 7);
        assert_eq!(tree.root().weight() as usize, all_bytes.len());
    }

    #[test]
    fn test_balanced_distribution() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        let counts = count_simple(&all_bytes);
        let tree = build_tree(&counts).unwrap();

        assert_eq!(tree.num_leaves(), 256);
        assert_eq!(tree.depth(), 8);
        assert_eq!(tree.estimate_compressed_size(), 256);
    }

    #[test]
    fn test_tie_break_is_insertion_order() {
        // frequencies {a:2, b:1, c:2, e:4, f:3}; the two weight-2
        // leaves tie and must merge in byte order
        let src = b"aabcceeeefff";
        let counts = count_simple(src);
        let tree = build_tree(&counts).unwrap();

        let mut depths = tree.leaf_depths();
        depths.sort();
        assert_eq!(
            depths,
            vec![
                (b'a', 3),
                (b'b', 3),
                (b'c', 2),
                (b'e', 2),
                (b'f', 2),
            ]
        );
        assert_eq!(tree.root().weight(), 12);
        assert_eq!(tree.depth(), 3);
        // 2*3 + 1*3 + 2*2 + 4*2 + 3*2 = 27 bits
        assert_eq!(tree.estimate_compressed_size(), 4);
    }
}
