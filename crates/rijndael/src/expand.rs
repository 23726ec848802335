//! Key expansion.

use zeroize::Zeroize;

use crate::block::Word;
use crate::error::{Error, Result};
use crate::gf::xtime;
use crate::key::{KeySize, Schedule, MAX_ROUNDS, NB};
use crate::tables::Tables;

const MAX_WORDS: usize = NB * (MAX_ROUNDS + 1);

fn rot_word(word: Word) -> Word {
    word.rotate_left(8)
}

fn sub_word(tables: &Tables, word: Word) -> Word {
    Word::from_be_bytes(word.to_be_bytes().map(|b| tables.sbox(b)))
}

/// Expands `key` into `rounds + 1` round keys.
///
/// `key_words` must be 4, 6 or 8, `rounds` must be the matching 10, 12 or 14,
/// and `key` must hold exactly `key_words * 4` bytes. Mismatches are reported,
/// never corrected.
pub fn expand_key(key: &[u8], key_words: usize, rounds: usize) -> Result<Schedule> {
    let key_size = KeySize::from_key_words(key_words)?;
    if rounds != key_size.rounds() {
        return Err(Error::invalid_parameter(
            "rounds",
            format!(
                "{key_size} uses {} rounds, got {rounds}",
                key_size.rounds()
            ),
        ));
    }
    if key.len() != key_size.key_bytes() {
        return Err(Error::invalid_parameter(
            "key",
            format!(
                "{key_size} needs {} key bytes, got {}",
                key_size.key_bytes(),
                key.len()
            ),
        ));
    }
    Ok(expand(key, key_size))
}

/// Runs the FIPS-197 recurrence. `key` must already be `key_size.key_bytes()` long.
pub(crate) fn expand(key: &[u8], key_size: KeySize) -> Schedule {
    let tables = crate::tables::tables();
    let nk = key_size.key_words();
    let total = NB * (key_size.rounds() + 1);

    let mut w = [0 as Word; MAX_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        *word = Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut rcon = 0x01u8;
    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(tables, rot_word(temp)) ^ (Word::from(rcon) << 24);
            rcon = xtime(rcon);
        } else if nk == 8 && i % 8 == 4 {
            temp = sub_word(tables, temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut keys = [[0 as Word; NB]; MAX_ROUNDS + 1];
    for (round_key, words) in keys.iter_mut().zip(w[..total].chunks_exact(NB)) {
        round_key.copy_from_slice(words);
    }
    w.zeroize();

    Schedule::new(keys, key_size)
}
