//! GF(2^8) arithmetic under the AES reduction polynomial.

/// Reduction polynomial `x^8 + x^4 + x^3 + x + 1`.
pub const REDUCTION_POLY: u16 = 0x11b;

/// Multiplicative order of `2` in GF(2^8)*; its cosets split the 255 units into five runs.
const ORDER_OF_TWO: usize = 51;

/// Seeds for the power runs, arranged so that entries `2k` and `2k + 1` are inverses.
/// `1`, `3` and `5` cover three cosets of `<2>`; `0xf6 = 3^-1` and `0x52 = 5^-1` cover
/// the remaining two.
const RUN_SEEDS: [u8; 6] = [0x01, 0x01, 0x03, 0xf6, 0x05, 0x52];

/// Multiplies by `x`, reducing by the field polynomial when bit 8 is set.
#[inline]
pub(crate) const fn xtime(byte: u8) -> u8 {
    let shifted = (byte as u16) << 1;
    if shifted & 0x100 != 0 {
        (shifted ^ REDUCTION_POLY) as u8
    } else {
        shifted as u8
    }
}

/// Multiplies two field elements by shift-and-add over the set bits of `b`.
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Builds the multiplicative inverse table; `0` maps to `0`.
///
/// Each seed `s` is advanced through `s, 2s, 4s, ..., 2^51 s`. Since `2^51 = 1`,
/// position `i` of run `j` times position `51 - i` of run `j ^ 1` equals the
/// product of the two seeds, which is `1` by construction of [`RUN_SEEDS`].
pub(crate) fn inverse_table() -> [u8; 256] {
    let mut runs = [[0u8; ORDER_OF_TWO + 1]; RUN_SEEDS.len()];
    for (run, &seed) in runs.iter_mut().zip(RUN_SEEDS.iter()) {
        let mut power = seed;
        for slot in run.iter_mut() {
            *slot = power;
            power = xtime(power);
        }
    }

    let mut inverses = [0u8; 256];
    for (j, run) in runs.iter().enumerate() {
        let partner = &runs[j ^ 1];
        for (i, &element) in run.iter().enumerate() {
            inverses[element as usize] = partner[ORDER_OF_TWO - i];
        }
    }
    inverses
}
