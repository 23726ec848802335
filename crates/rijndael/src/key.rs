//! Key sizes and expanded round-key schedules.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Word;
use crate::error::{Error, Result};

/// Words per block (`Nb`).
pub const NB: usize = 4;

/// Largest round count, reached by 256-bit keys.
pub const MAX_ROUNDS: usize = 14;

/// One round key: `Nb` words.
pub type RoundKey = [Word; NB];

/// The three key lengths FIPS-197 defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All supported sizes, shortest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Words per key (`Nk`).
    pub const fn key_words(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes192 => 12,
            KeySize::Aes256 => 14,
        }
    }

    /// Key length in bytes.
    pub const fn key_bytes(self) -> usize {
        self.key_words() * 4
    }

    /// Resolves a size from its word count.
    pub fn from_key_words(key_words: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.key_words() == key_words)
            .ok_or_else(|| {
                Error::invalid_parameter(
                    "key_words",
                    format!("expected 4, 6 or 8 words, got {key_words}"),
                )
            })
    }

    /// Resolves a size from a key length in bytes.
    pub fn from_key_len(len: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.key_bytes() == len)
            .ok_or_else(|| {
                Error::invalid_parameter("key", format!("expected 16, 24 or 32 bytes, got {len}"))
            })
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.key_bytes() * 8)
    }
}

/// Expanded round keys for one cipher key.
///
/// Holds exactly `rounds() + 1` round keys. Key material is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Schedule {
    keys: [RoundKey; MAX_ROUNDS + 1],
    #[zeroize(skip)]
    key_size: KeySize,
}

impl Schedule {
    pub(crate) fn new(keys: [RoundKey; MAX_ROUNDS + 1], key_size: KeySize) -> Self {
        Self { keys, key_size }
    }

    /// Key size the schedule was expanded from.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// All round keys in order, `rounds() + 1` of them.
    pub fn round_keys(&self) -> &[RoundKey] {
        &self.keys[..=self.rounds()]
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn get(&self, round: usize) -> &RoundKey {
        &self.round_keys()[round]
    }
}

impl fmt::Debug for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schedule")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}
