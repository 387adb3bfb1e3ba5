//! Round key derivation.

use crate::bits::{permute, rotl28};
use crate::tables::{LEFT_SHIFTS, PC1, PC2};

/// Derives the 16 round keys for `master`.
///
/// PC-1 drops the 8 parity bits and splits the remaining 56 bits into two
/// 28-bit halves; each round rotates both halves left by the scheduled
/// amount (rotations accumulate round over round) and extracts 48 key
/// bits through PC-2. Every 64-bit value is a valid master key.
pub(crate) fn round_keys(master: u64) -> [u64; 16] {
    let state = permute(master, &PC1, 64);
    let mut c = state >> 28;
    let mut d = state & 0x0fff_ffff;

    let mut keys = [0; 16];
    for (round, key) in keys.iter_mut().enumerate() {
        c = rotl28(c, LEFT_SHIFTS[round]);
        d = rotl28(d, LEFT_SHIFTS[round]);
        *key = permute(c << 28 | d, &PC2, 56);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    // First and last subkeys of the classic FIPS walkthrough key.
    #[test]
    fn test_known_subkeys() {
        let keys = round_keys(0x133457799BBCDFF1);
        assert_eq!(keys[0], 0x1B02EFFC7072);
        assert_eq!(keys[15], 0xCB3D8B0E17F5);
    }

    #[quickcheck]
    fn prop_subkeys_are_48_bit(master: u64) -> bool {
        round_keys(master).iter().all(|key| key >> 48 == 0)
    }

    #[quickcheck]
    fn prop_parity_bits_are_ignored(master: u64) -> bool {
        // Bits 8, 16, ..., 64 of the standard numbering are parity; they
        // sit at positions 0, 8, ..., 56 of the u64 and never reach PC-1.
        round_keys(master) == round_keys(master ^ 0x0101_0101_0101_0101)
    }
}
