//! Block and word representation helpers.
//!
//! The state is kept column-major: byte `(row, col)` lives at index
//! `4 * col + row`, so column `c` is word `c` of the block.

/// Number of bytes in one AES block.
pub const BLOCK_BYTES: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_BYTES];

/// 32-bit word, packed big-endian (the first byte is the most significant).
pub type Word = u32;

/// Splits a block into its four column words.
#[inline]
pub fn to_words(block: &Block) -> [Word; 4] {
    let mut words = [0; 4];
    for (word, column) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = Word::from_be_bytes([column[0], column[1], column[2], column[3]]);
    }
    words
}

/// Packs four column words back into a block.
#[inline]
pub fn from_words(words: &[Word; 4]) -> Block {
    let mut block = [0u8; BLOCK_BYTES];
    for (column, word) in block.chunks_exact_mut(4).zip(words.iter()) {
        column.copy_from_slice(&word.to_be_bytes());
    }
    block
}
