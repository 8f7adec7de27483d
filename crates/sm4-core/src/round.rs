//! SM4 round function and block transform.

use zeroize::Zeroize;

use crate::block::{load_words, store_words, Block};
use crate::key::RoundKeys;
use crate::transform::round_transform;

/// Runs the 32-round recurrence over one block, consuming round keys in the
/// order given, and applies the final reverse transform R.
///
/// Encryption and decryption share this function; only the key order differs.
#[inline]
pub(crate) fn crypt_block(round_keys: impl Iterator<Item = u32>, input: &Block) -> Block {
    let mut x = load_words(input);
    for rk in round_keys {
        let next = x[0] ^ round_transform(x[1] ^ x[2] ^ x[3] ^ rk);
        x = [x[1], x[2], x[3], next];
    }
    // R: (X35, X34, X33, X32)
    x.reverse();
    let out = store_words(&x);
    x.zeroize();
    out
}

/// Encrypts a single 16-byte block with expanded round keys.
#[inline]
pub(crate) fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    crypt_block(round_keys.forward(), block)
}

/// Decrypts a single 16-byte block with expanded round keys.
#[inline]
pub(crate) fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    crypt_block(round_keys.reverse(), block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Sm4Key;
    use crate::schedule::expand_key;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const STANDARD_KEY: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];
    const STANDARD_CIPHER: [u8; 16] = [
        0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f, 0x53, 0x6e, 0x42,
        0x46,
    ];

    #[test]
    fn encrypt_matches_standard_vector() {
        let round_keys = expand_key(&Sm4Key::from(STANDARD_KEY));
        let ct = encrypt_block(&STANDARD_KEY, &round_keys);
        assert_eq!(ct, STANDARD_CIPHER);
    }

    #[test]
    fn decrypt_matches_standard_vector() {
        let round_keys = expand_key(&Sm4Key::from(STANDARD_KEY));
        let pt = decrypt_block(&STANDARD_CIPHER, &round_keys);
        assert_eq!(pt, STANDARD_KEY);
    }

    #[test]
    fn reverse_transform_is_applied() {
        let round_keys = expand_key(&Sm4Key::from(STANDARD_KEY));
        let mut x = load_words(&STANDARD_KEY);
        for rk in round_keys.forward() {
            let next = x[0] ^ round_transform(x[1] ^ x[2] ^ x[3] ^ rk);
            x = [x[1], x[2], x[3], next];
        }
        // Without R the output would be (X32, X33, X34, X35).
        assert_ne!(store_words(&x), STANDARD_CIPHER);
        x.reverse();
        assert_eq!(store_words(&x), STANDARD_CIPHER);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_key(&Sm4Key::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
