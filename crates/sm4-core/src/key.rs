//! Key types for SM4.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// SM4 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds, and of round keys.
pub(crate) const ROUNDS: usize = 32;

/// SM4 master key wrapper, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Sm4Key(pub(crate) [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Sm4Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for SM4, stored in encryption order.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct RoundKeys(pub(crate) [u32; ROUNDS]);

impl RoundKeys {
    /// Round keys in encryption order, `rk[0]` through `rk[31]`.
    #[inline]
    pub(crate) fn forward(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// The same round keys read back to front, for decryption.
    #[inline]
    pub(crate) fn reverse(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().rev().copied()
    }
}
