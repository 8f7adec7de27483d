//! SM4 block cipher primitive (GB/T 32907-2016).
//!
//! This crate provides the single-block core that chaining modes build on:
//! - Key schedule expanding a 128-bit key into 32 round keys.
//! - Single-block encryption and decryption over 16-byte blocks.
//! - A [`BlockCipher`] seam for mode-of-operation layers.
//!
//! The S-box lookup scans the whole table instead of indexing it with secret
//! data, and the round loop has no data-dependent branches. Round keys are
//! wiped when the cipher is dropped.
//!
//! ```
//! use sm4_core::Sm4Cipher;
//!
//! let cipher = Sm4Cipher::new(&[0x42; 16]).unwrap();
//! let mut block = *b"sixteen byte msg";
//! cipher.encrypt_in_place(&mut block);
//! cipher.decrypt_in_place(&mut block);
//! assert_eq!(&block, b"sixteen byte msg");
//! assert_eq!(cipher.block_size(), 16);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;
mod schedule;
mod transform;

pub use crate::block::BLOCK_SIZE;
pub use crate::cipher::{BlockCipher, Sm4Cipher};
pub use crate::error::KeySizeError;
pub use crate::key::KEY_SIZE;
