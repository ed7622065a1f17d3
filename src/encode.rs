use bitstream::BitWriter;
use common::HuffError;
use hufftree::CodeTable;
use log::debug;

/// Encoded payload next to the metadata required to decode it.
///
/// `bit_len` and `symbol_count` are not recoverable from the packed
/// bytes: pad bits look like data bits, and a single-symbol alphabet
/// encodes to zero bits no matter how long the input was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    /// meaningful bits in `bytes`, the rest of the last byte is padding
    pub bit_len: usize,
    /// number of input symbols
    pub symbol_count: usize,
}

/// Concatenates the code of every input byte in order and packs the
/// result MSB-first, zero-padded to the next byte boundary.
///
/// Fails with `UnknownSymbol` when a byte has no entry in the table,
/// which means the table was derived from a different input.
pub fn encode(input: &[u8], table: &CodeTable) -> Result<Encoded, HuffError> {
    let mut writer = BitWriter::new();

    for byte in input {
        let code = table.get(*byte)?;
        for bit in code.bits() {
            writer.push_bit(*bit);
        }
    }

    let (bytes, bit_len) = writer.finish();
    debug!(
        "encoded {} symbols into {} bits ({} bytes)",
        input.len(),
        bit_len,
        bytes.len()
    );
    Ok(Encoded {
        bytes,
        bit_len,
        symbol_count: input.len(),
    })
}
