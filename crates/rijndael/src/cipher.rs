//! Block encryption/decryption and the keyed [`Aes`] session.

use crate::block::Block;
use crate::error::Result;
use crate::expand::{expand, expand_key};
use crate::key::{KeySize, Schedule};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, schedule: &Schedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.get(rounds));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, schedule: &Schedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.get(0));

    state
}

/// A cipher key expanded once and reused for any number of blocks.
///
/// Methods take `&self`, so one session can be shared read-only between
/// threads; each call works on its own block.
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: Schedule,
}

impl Aes {
    /// Expands `key`, inferring the key size from its length (16, 24 or 32 bytes).
    pub fn new(key: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_key_len(key.len())?;
        Ok(Self {
            schedule: expand(key, key_size),
        })
    }

    /// Expands `key`, requiring it to be exactly `key_size` long.
    pub fn with_size(key: &[u8], key_size: KeySize) -> Result<Self> {
        let schedule = expand_key(key, key_size.key_words(), key_size.rounds())?;
        Ok(Self { schedule })
    }

    /// Wraps an already expanded schedule.
    pub fn from_schedule(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// Key size of this session.
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Expanded round keys.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Encrypts `block` in place.
    pub fn encrypt_block(&self, block: &mut Block) {
        *block = encrypt_block(block, &self.schedule);
    }

    /// Decrypts `block` in place.
    pub fn decrypt_block(&self, block: &mut Block) {
        *block = decrypt_block(block, &self.schedule);
    }
}
