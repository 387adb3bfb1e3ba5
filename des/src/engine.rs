//! Key-caching cipher facade.

use crate::cipher::transform;
use crate::fused;
use crate::schedule;

/// DES engine bound to one master key.
///
/// The 16 round keys are derived once at construction and never change,
/// so a single engine can be shared between threads and reused for any
/// number of blocks. Any 64-bit value is accepted as a key; the parity
/// bits are ignored.
///
/// The u64 representation puts bit 1 of the standard numbering at the
/// most significant bit; [`Engine::encrypt_bytes`] and
/// [`Engine::decrypt_bytes`] take blocks in transmission order instead.
pub struct Engine {
    keys: [u64; 16],
}

impl Engine {
    pub fn new(master: u64) -> Self {
        Self {
            keys: schedule::round_keys(master),
        }
    }

    pub fn encrypt(&self, block: u64) -> u64 {
        transform(block, self.keys.iter().copied(), fused::feistel)
    }

    pub fn decrypt(&self, block: u64) -> u64 {
        transform(block, self.keys.iter().rev().copied(), fused::feistel)
    }

    /// Encrypts a block given in transmission order: the first byte
    /// carries bits 1-8 of the standard numbering. Apply the same
    /// convention to the key with `u64::from_be_bytes`.
    pub fn encrypt_bytes(&self, block: [u8; 8]) -> [u8; 8] {
        self.encrypt(u64::from_be_bytes(block)).to_be_bytes()
    }

    /// Inverse of [`Engine::encrypt_bytes`].
    pub fn decrypt_bytes(&self, block: [u8; 8]) -> [u8; 8] {
        self.decrypt(u64::from_be_bytes(block)).to_be_bytes()
    }
}

pub fn encrypt(plaintext: u64, key: u64) -> u64 {
    Engine::new(key).encrypt(plaintext)
}

pub fn decrypt(ciphertext: u64, key: u64) -> u64 {
    Engine::new(key).decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::process;

    use quickcheck_macros::quickcheck;

    use std::convert::TryInto;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_known_answer() {
        let engine = Engine::new(0x133457799BBCDFF1);
        let ciphertext = engine.encrypt(0x0123456789ABCDEF);
        assert_eq!(ciphertext, 0x85E813540F0AB405);
        assert_eq!(engine.decrypt(ciphertext), 0x0123456789ABCDEF);
    }

    #[test]
    fn test_known_answer_bytes() {
        let key = u64::from_be_bytes(hex::decode("133457799bbcdff1").unwrap().try_into().unwrap());
        let plaintext: [u8; 8] = hex::decode("0123456789abcdef").unwrap().try_into().unwrap();

        let engine = Engine::new(key);
        let ciphertext = engine.encrypt_bytes(plaintext);
        assert_eq!(hex::encode(ciphertext), "85e813540f0ab405");
        assert_eq!(engine.decrypt_bytes(ciphertext), plaintext);
    }

    #[test]
    fn test_same_key_same_schedule() {
        let a = Engine::new(0x0123456789ABCDEF);
        let b = Engine::new(0x0123456789ABCDEF);
        assert_eq!(a.keys, b.keys);
        for block in [0, 1, u64::MAX, 0x8787878787878787].iter() {
            assert_eq!(a.encrypt(*block), b.encrypt(*block));
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let engine = Arc::new(Engine::new(0x133457799BBCDFF1));
        let handles: Vec<_> = (0u64..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    let block = 0x0123456789ABCDEF ^ i;
                    assert_eq!(engine.decrypt(engine.encrypt(block)), block);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[quickcheck]
    fn prop_round_trip(block: u64, key: u64) -> bool {
        let engine = Engine::new(key);
        engine.decrypt(engine.encrypt(block)) == block
    }

    // The engine's fused path and the stateless reference path must agree.
    #[quickcheck]
    fn prop_engine_matches_process(block: u64, key: u64) -> bool {
        let engine = Engine::new(key);
        engine.encrypt(block) == process(block, key, 16, true)
            && engine.decrypt(block) == process(block, key, 16, false)
    }

    #[quickcheck]
    fn prop_bytes_api_matches_u64_api(block: u64, key: u64) -> bool {
        let engine = Engine::new(key);
        engine.encrypt_bytes(block.to_be_bytes()) == engine.encrypt(block).to_be_bytes()
    }

    #[quickcheck]
    fn prop_one_shot_helpers(block: u64, key: u64) -> bool {
        decrypt(encrypt(block, key), key) == block
    }
}
