//! SM4 cipher context and the generic block-cipher interface.

use core::fmt;

use crate::block::{inexact_overlap, Block, BLOCK_SIZE};
use crate::error::KeySizeError;
use crate::key::{RoundKeys, Sm4Key, KEY_SIZE};
use crate::round::{decrypt_block, encrypt_block};
use crate::schedule::expand_key;

/// Single-block cipher interface consumed by chaining modes.
///
/// `encrypt` and `decrypt` process exactly one block from the front of `src`
/// into the front of `dst`. Implementations panic on misuse: a buffer shorter
/// than one block, or windows that partially overlap.
pub trait BlockCipher {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypts the first block of `src` into the first block of `dst`.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]);

    /// Decrypts the first block of `src` into the first block of `dst`.
    fn decrypt(&self, dst: &mut [u8], src: &[u8]);
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// An SM4 cipher instance holding the expanded round keys of one key.
///
/// The context is immutable after construction, so a shared reference can be
/// used from many threads at once.
#[derive(Clone)]
pub struct Sm4Cipher {
    round_keys: RoundKeys,
}

impl Sm4Cipher {
    /// Creates a cipher from a 16-byte key.
    ///
    /// Any other length fails with [`KeySizeError`] carrying that length.
    pub fn new(key: &[u8]) -> Result<Self, KeySizeError> {
        let bytes: [u8; KEY_SIZE] = key.try_into().map_err(|_| {
            log::debug!("rejected sm4 key of {} bytes", key.len());
            KeySizeError(key.len())
        })?;
        Ok(Self::from(bytes))
    }

    /// Block size in bytes, always [`BLOCK_SIZE`].
    #[inline]
    pub const fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Encrypts the first 16 bytes of `src` into the first 16 bytes of `dst`.
    ///
    /// # Panics
    ///
    /// If `src` or `dst` is shorter than one block, or if the two blocks
    /// partially overlap.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        self.crypt(Direction::Encrypt, dst, src);
    }

    /// Decrypts the first 16 bytes of `src` into the first 16 bytes of `dst`.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        self.crypt(Direction::Decrypt, dst, src);
    }

    /// Encrypts the first block of `block` in place.
    ///
    /// # Panics
    ///
    /// If `block` is shorter than one block.
    pub fn encrypt_in_place(&self, block: &mut [u8]) {
        self.crypt_within(Direction::Encrypt, block, 0, 0);
    }

    /// Decrypts the first block of `block` in place.
    ///
    /// # Panics
    ///
    /// If `block` is shorter than one block.
    pub fn decrypt_in_place(&self, block: &mut [u8]) {
        self.crypt_within(Direction::Decrypt, block, 0, 0);
    }

    /// Encrypts the block at offset `src` of `buf` into offset `dst` of the
    /// same buffer.
    ///
    /// Equal offsets encrypt in place; offsets at least one block apart are
    /// disjoint.
    ///
    /// # Panics
    ///
    /// If either window runs past the end of `buf`, or if the windows
    /// partially overlap.
    pub fn encrypt_within(&self, buf: &mut [u8], src: usize, dst: usize) {
        self.crypt_within(Direction::Encrypt, buf, src, dst);
    }

    /// Decrypts the block at offset `src` of `buf` into offset `dst` of the
    /// same buffer.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`encrypt_within`](Self::encrypt_within).
    pub fn decrypt_within(&self, buf: &mut [u8], src: usize, dst: usize) {
        self.crypt_within(Direction::Decrypt, buf, src, dst);
    }

    fn crypt(&self, direction: Direction, dst: &mut [u8], src: &[u8]) {
        let input = check_args(dst, src);
        let output = self.apply(direction, &input);
        dst[..BLOCK_SIZE].copy_from_slice(&output);
    }

    fn crypt_within(&self, direction: Direction, buf: &mut [u8], src: usize, dst: usize) {
        let input = {
            let whole: &[u8] = buf;
            let src_window = whole.get(src..).unwrap_or_default();
            let dst_window = whole.get(dst..).unwrap_or_default();
            check_args(dst_window, src_window)
        };
        let output = self.apply(direction, &input);
        buf[dst..dst + BLOCK_SIZE].copy_from_slice(&output);
    }

    #[inline]
    fn apply(&self, direction: Direction, input: &Block) -> Block {
        match direction {
            Direction::Encrypt => encrypt_block(input, &self.round_keys),
            Direction::Decrypt => decrypt_block(input, &self.round_keys),
        }
    }
}

/// Validates one block operation and copies out the input block.
fn check_args(dst: &[u8], src: &[u8]) -> Block {
    if src.len() < BLOCK_SIZE {
        panic!("sm4: input not full block");
    }
    if dst.len() < BLOCK_SIZE {
        panic!("sm4: output not full block");
    }
    if inexact_overlap(&dst[..BLOCK_SIZE], &src[..BLOCK_SIZE]) {
        panic!("sm4: invalid buffer overlap");
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&src[..BLOCK_SIZE]);
    block
}

impl From<[u8; KEY_SIZE]> for Sm4Cipher {
    fn from(key: [u8; KEY_SIZE]) -> Self {
        let key = Sm4Key::from(key);
        let round_keys = expand_key(&key);
        log::trace!("expanded sm4 key schedule");
        Self { round_keys }
    }
}

impl TryFrom<&[u8]> for Sm4Cipher {
    type Error = KeySizeError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl BlockCipher for Sm4Cipher {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        Sm4Cipher::encrypt(self, dst, src);
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        Sm4Cipher::decrypt(self, dst, src);
    }
}

impl fmt::Debug for Sm4Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sm4Cipher").finish_non_exhaustive()
    }
}
