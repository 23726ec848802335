//! AES round transformations.
//!
//! Crate-internal; the pipelines in `cipher` and the per-step trace tests are
//! the only callers.

use crate::block::{from_words, to_words, Block};
use crate::key::{RoundKey, NB};
use crate::tables::{tables, MulBy};

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    let t = tables();
    for byte in state.iter_mut() {
        *byte = t.sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    let t = tables();
    for byte in state.iter_mut() {
        *byte = t.inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` columns.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..NB {
        for row in 1..4 {
            state[4 * col + row] = src[4 * ((col + row) % NB) + row];
        }
    }
}

/// Rotates row `r` right by `r` columns.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..NB {
        for row in 1..4 {
            state[4 * col + row] = src[4 * ((col + NB - row) % NB) + row];
        }
    }
}

/// MixColumns over all four columns: circulant `{2, 3, 1, 1}`.
#[inline]
pub(crate) fn mix_columns(state: &mut Block) {
    let t = tables();
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = t.mul(MulBy::Two, a0) ^ t.mul(MulBy::Three, a1) ^ a2 ^ a3;
        col[1] = a0 ^ t.mul(MulBy::Two, a1) ^ t.mul(MulBy::Three, a2) ^ a3;
        col[2] = a0 ^ a1 ^ t.mul(MulBy::Two, a2) ^ t.mul(MulBy::Three, a3);
        col[3] = t.mul(MulBy::Three, a0) ^ a1 ^ a2 ^ t.mul(MulBy::Two, a3);
    }
}

/// Inverse MixColumns over all four columns: circulant `{14, 11, 13, 9}`.
#[inline]
pub(crate) fn inv_mix_columns(state: &mut Block) {
    const ROW: [MulBy; 4] = [MulBy::Fourteen, MulBy::Eleven, MulBy::Thirteen, MulBy::Nine];
    let t = tables();
    for col in state.chunks_exact_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];
        for (row, out) in col.iter_mut().enumerate() {
            *out = (0..4).fold(0, |acc, k| acc ^ t.mul(ROW[(k + 4 - row) % 4], a[k]));
        }
    }
}

/// Adds (XORs) a round key into the state, one word per column.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &RoundKey) {
    let mut words = to_words(state);
    for (word, key) in words.iter_mut().zip(round_key.iter()) {
        *word ^= key;
    }
    *state = from_words(&words);
}
