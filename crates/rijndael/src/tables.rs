//! Fixed lookup tables derived from GF(2^8) arithmetic.

use std::sync::OnceLock;

use crate::gf::{gf_mul, inverse_table};

/// Multipliers appearing in the MixColumns and InvMixColumns matrices.
pub const MIX_COL_CONSTANTS: [u8; 6] = [0x02, 0x03, 0x09, 0x0b, 0x0d, 0x0e];

const AFFINE_CONSTANT: u8 = 0x63;

/// Row selector into the multiply-by-constant table, in [`MIX_COL_CONSTANTS`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MulBy {
    Two = 0,
    Three,
    Nine,
    Eleven,
    Thirteen,
    Fourteen,
}

/// The four key-independent tables the cipher reads.
///
/// Obtain the shared instance with [`tables`]; [`Tables::generate`] builds a
/// fresh, uncached copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tables {
    sbox: [u8; 256],
    inv_sbox: [u8; 256],
    inverse: [u8; 256],
    mix_col: [[u8; 256]; MIX_COL_CONSTANTS.len()],
}

impl Tables {
    /// Builds every table from the field definition.
    pub fn generate() -> Self {
        let inverse = inverse_table();

        let mut sbox = [0u8; 256];
        let mut inv_sbox = [0u8; 256];
        for x in 0..=255u8 {
            let substituted = affine(inverse[x as usize]);
            sbox[x as usize] = substituted;
            inv_sbox[substituted as usize] = x;
        }

        let mix_col = core::array::from_fn(|row| {
            let constant = MIX_COL_CONSTANTS[row];
            core::array::from_fn(|x| gf_mul(x as u8, constant))
        });

        Self {
            sbox,
            inv_sbox,
            inverse,
            mix_col,
        }
    }

    /// S-box image of `byte`.
    #[inline]
    pub fn sbox(&self, byte: u8) -> u8 {
        self.sbox[byte as usize]
    }

    /// Inverse S-box image of `byte`.
    #[inline]
    pub fn inv_sbox(&self, byte: u8) -> u8 {
        self.inv_sbox[byte as usize]
    }

    /// Multiplicative inverse of `byte`, with `0` mapped to `0`.
    #[inline]
    pub fn inverse(&self, byte: u8) -> u8 {
        self.inverse[byte as usize]
    }

    /// `byte · constant` in GF(2^8).
    ///
    /// Constants from [`MIX_COL_CONSTANTS`] are table lookups; any other
    /// multiplier is computed directly.
    pub fn mul_by_constant(&self, byte: u8, constant: u8) -> u8 {
        match MIX_COL_CONSTANTS.iter().position(|&c| c == constant) {
            Some(row) => self.mix_col[row][byte as usize],
            None => gf_mul(byte, constant),
        }
    }

    #[inline]
    pub(crate) fn mul(&self, by: MulBy, byte: u8) -> u8 {
        self.mix_col[by as usize][byte as usize]
    }
}

/// FIPS-197 affine transform: `b ⊕ rotl(b,1) ⊕ rotl(b,2) ⊕ rotl(b,3) ⊕ rotl(b,4) ⊕ 0x63`.
#[inline]
fn affine(byte: u8) -> u8 {
    byte ^ byte.rotate_left(1)
        ^ byte.rotate_left(2)
        ^ byte.rotate_left(3)
        ^ byte.rotate_left(4)
        ^ AFFINE_CONSTANT
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Returns the process-wide tables, building them on first use.
pub fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::generate)
}

/// S-box image of `byte`.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    tables().sbox(byte)
}

/// Inverse S-box image of `byte`.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    tables().inv_sbox(byte)
}

/// Multiplicative inverse of `byte` in GF(2^8) (`0` maps to `0`).
#[inline]
pub fn inverse(byte: u8) -> u8 {
    tables().inverse(byte)
}

/// `byte · constant` in GF(2^8), read from the MixColumns tables where possible.
#[inline]
pub fn mul_by_constant(byte: u8, constant: u8) -> u8 {
    tables().mul_by_constant(byte, constant)
}
