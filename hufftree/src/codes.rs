/*!
Symbol-to-code lookup derived from a tree walk: descending left appends
a 0, descending right a 1, the accumulated path is the code recorded at
each leaf.
*/

use common::HuffError;
use log::log_enabled;
use log::trace;
use log::Level::Trace;

use crate::tree::Tree;

/// A single prefix code, the root-to-leaf path of its symbol, one
/// entry per bit (0 = left, 1 = right).
///
/// Codes are kept unpacked. On a maximally skewed tree a code can grow
/// to 255 bits, which no fixed-width container holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    bits: Vec<u8>,
}

impl Code {
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// true for the degenerate single-symbol alphabet, whose only code
    /// is the empty path
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
}

/// Symbol-to-code lookup, one slot per byte value.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Walks the tree depth first with an explicit stack. Recursing
    /// would nest as deep as the tree is high, which approaches the
    /// alphabet size on skewed inputs.
    pub fn from_tree(tree: &Tree) -> CodeTable {
        let mut codes: Vec<Option<Code>> = vec![None; 256];

        let mut stack = vec![(tree.root, Vec::new())];
        while let Some((pos, path)) = stack.pop() {
            let node = &tree.nodes[pos];
            match (node.left, node.right) {
                (Some(left), Some(right)) => {
                    let mut right_path = path.clone();
                    right_path.push(1);
                    let mut left_path = path;
                    left_path.push(0);
                    // right first, so the left subtree is walked first
                    stack.push((right as usize, right_path));
                    stack.push((left as usize, left_path));
                }
                _ => {
                    if let Some(symbol) = node.symbol {
                        codes[symbol as usize] = Some(Code { bits: path });
                    }
                }
            }
        }

        if log_enabled!(Trace) {
            for (symbol, code) in codes.iter().enumerate() {
                if let Some(code) = code {
                    trace!("{}: {}", symbol, render_code(code));
                }
            }
        }

        CodeTable { codes }
    }

    #[inline]
    pub fn get(&self, symbol: u8) -> Result<&Code, HuffError> {
        self.codes[symbol as usize]
            .as_ref()
            .ok_or(HuffError::UnknownSymbol(symbol))
    }

    /// number of symbols with a code
    pub fn num_codes(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|code| (symbol as u8, code)))
    }
}

fn render_code(code: &Code) -> String {
    code.bits().iter().map(|bit| char::from(b'0' + bit)).collect()
}

/// will validate that no code in the table is the prefix of another.
/// This validation is quadratic and meant for tests and fuzzing, not
/// for a regular compression pass.
pub fn check_prefix_property(table: &CodeTable) {
    let codes = table.iter().collect::<Vec<_>>();
    for (symbol, code) in &codes {
        for (other_symbol, other_code) in &codes {
            if symbol == other_symbol || code.len() > other_code.len() {
                continue;
            }
            if !code.is_empty() && other_code.bits().starts_with(code.bits()) {
                panic!(
                    "invalid prefix detected between {:?} and {:?}",
                    symbol, other_symbol
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;
    use common::count_simple;

    fn table_for(input: &[u8]) -> CodeTable {
        let counts = count_simple(input);
        let tree = build_tree(&counts).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_example_codes() {
        let table = table_for(b"aabcceeeefff");

        assert_eq!(table.num_codes(), 5);
        assert_eq!(table.get(b'a').unwrap().bits(), &[1, 0, 1]);
        assert_eq!(table.get(b'b').unwrap().bits(), &[1, 0, 0]);
        assert_eq!(table.get(b'c').unwrap().bits(), &[0, 0]);
        assert_eq!(table.get(b'e').unwrap().bits(), &[1, 1]);
        assert_eq!(table.get(b'f').unwrap().bits(), &[0, 1]);

        check_prefix_property(&table);
    }

    #[test]
    fn test_unknown_symbol() {
        let table = table_for(b"aabcceeeefff");
        assert_eq!(table.get(b'z'), Err(HuffError::UnknownSymbol(b'z')));
    }

    #[test]
    fn test_single_symbol_code_is_empty() {
        let table = table_for(&[42, 42, 42]);

        assert_eq!(table.num_codes(), 1);
        let code = table.get(42).unwrap();
        assert!(code.is_empty());
        assert_eq!(code.len(), 0);
    }

    #[test]
    fn test_prefix_property_balanced() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        let table = table_for(&all_bytes);

        assert_eq!(table.num_codes(), 256);
        for (_symbol, code) in table.iter() {
            assert_eq!(code.len(), 8);
        }
        check_prefix_property(&table);
    }

    #[test]
    fn test_prefix_property_skewed() {
        use std::io::Read;
        let mut all_bytes = Vec::new();
        for (num, repeat) in [1_u64, 1, 2, 3, 5, 8, 13, 21].iter().enumerate() {
            std::io::repeat(num as u8)
                .take(*repeat)
                .read_to_end(&mut all_bytes)
                .unwrap();
        }
        let table = table_for(&all_bytes);

        // deepest chain of an 8 symbol fibonacci distribution
        assert_eq!(table.get(0).unwrap().len(), 7);
        check_prefix_property(&table);
    }
}
