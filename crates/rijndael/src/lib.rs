//! Table-driven AES (Rijndael) block cipher following FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) lookup tables (S-box, inverse S-box, multiplicative inverses and
//!   the MixColumns multiply-by-constant tables), built once per process.
//! - Key expansion for 128-, 192- and 256-bit keys.
//! - Single-block encryption and decryption over a 16-byte state.
//!
//! Chaining modes, padding and key derivation belong to callers; everything here
//! works on one block at a time.
//!
//! The implementation uses byte-indexed table lookups and is not constant-time;
//! it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod expand;
mod gf;
mod key;
mod round;
mod tables;


pub use crate::block::{from_words, to_words, Block, Word, BLOCK_BYTES};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes};
pub use crate::error::{Error, Result};
pub use crate::expand::expand_key;
pub use crate::gf::{gf_mul, REDUCTION_POLY};
pub use crate::key::{KeySize, RoundKey, Schedule, MAX_ROUNDS, NB};
pub use crate::tables::{
    inv_sbox, inverse, mul_by_constant, sbox, tables, Tables, MIX_COL_CONSTANTS,
};
