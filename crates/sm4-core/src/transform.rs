//! SM4 substitution and linear diffusion layers.

use crate::sbox::sbox;

/// Non-linear transform τ: the S-box applied to each byte of the word.
#[inline]
pub(crate) fn substitute(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Diffusion layer L of the round function.
#[inline]
pub(crate) fn linear_encrypt(word: u32) -> u32 {
    word ^ word.rotate_left(2) ^ word.rotate_left(10) ^ word.rotate_left(18) ^ word.rotate_left(24)
}

/// Diffusion layer L' of the key schedule.
#[inline]
pub(crate) fn linear_key_schedule(word: u32) -> u32 {
    word ^ word.rotate_left(13) ^ word.rotate_left(23)
}

/// Composite transform T = L ∘ τ, used by encryption and decryption rounds.
#[inline]
pub(crate) fn round_transform(word: u32) -> u32 {
    linear_encrypt(substitute(word))
}

/// Composite transform T' = L' ∘ τ, used only by key expansion.
#[inline]
pub(crate) fn key_transform(word: u32) -> u32 {
    linear_key_schedule(substitute(word))
}
