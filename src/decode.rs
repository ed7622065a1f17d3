use bitstream::BitReader;
use bitstream::BITS_PER_BYTE;
use common::HuffError;
use hufftree::Tree;
use log::debug;

/// Walks the tree bit by bit: 0 descends left, 1 descends right, a
/// leaf emits its symbol and resets the cursor to the root. Exactly
/// `bit_len` bits are consumed, pad bits are never interpreted.
///
/// A tree that is a single leaf carries empty codes, so the payload
/// holds no bits at all; only `symbol_count` tells how often the
/// symbol occurred.
pub fn decode(
    bytes: &[u8],
    bit_len: usize,
    symbol_count: usize,
    tree: &Tree,
) -> Result<Vec<u8>, HuffError> {
    if tree.root().is_leaf() {
        if let Some(symbol) = tree.root().symbol() {
            return Ok(vec![symbol; symbol_count]);
        }
    }

    let mut reader = BitReader::new(bytes, bit_len).ok_or(HuffError::TruncatedBitstream {
        needed: bit_len,
        available: bytes.len() * BITS_PER_BYTE,
    })?;

    let mut decoded = Vec::with_capacity(symbol_count);
    let mut node = tree.root();
    while let Some(bit) = reader.next_bit() {
        if let Some(child) = node.child(bit) {
            node = tree.node(child);
        }
        if node.is_leaf() {
            if let Some(symbol) = node.symbol() {
                decoded.push(symbol);
            }
            node = tree.root();
        }
    }

    debug!("decoded {} symbols from {} bits", decoded.len(), bit_len);
    Ok(decoded)
}
