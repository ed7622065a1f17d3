mod error;

pub use error::HuffError;

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

/// one slot per byte value, holding its number of occurences
pub type CountsTable = [u32; MAX_SYMBOL_VALUE as usize + 1];

/// creates a table with the counts of each symbol
#[inline]
pub fn count_simple(input: &[u8]) -> CountsTable {
    let mut counts = [0_u32; 256];

    for byte in input {
        counts[*byte as usize] = counts[*byte as usize].saturating_add(1);
    }
    counts
}

/// number of distinct symbols in the table
#[inline]
pub fn num_symbols(counts: &CountsTable) -> usize {
    counts.iter().filter(|count| **count != 0).count()
}

/// sum of all counts, equals the length of the analyzed input
#[inline]
pub fn total_count(counts: &CountsTable) -> u64 {
    counts.iter().map(|count| *count as u64).sum()
}
