//! Block representation helpers.

/// SM4 block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// SM4 block of 16 bytes.
pub(crate) type Block = [u8; BLOCK_SIZE];

/// Splits 16 bytes into four big-endian words.
#[inline]
pub(crate) fn load_words(bytes: &[u8; 16]) -> [u32; 4] {
    core::array::from_fn(|i| {
        u32::from_be_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]])
    })
}

/// Joins four words back into 16 big-endian bytes.
#[inline]
pub(crate) fn store_words(words: &[u32; 4]) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Reports whether `a` and `b` share memory without starting at the same
/// address. Identical windows (in-place use) and disjoint windows are fine.
pub(crate) fn inexact_overlap(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let a_start = a.as_ptr() as usize;
    let b_start = b.as_ptr() as usize;
    if a_start == b_start {
        return false;
    }
    a_start < b_start + b.len() && b_start < a_start + a.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_big_endian() {
        let bytes: Block = core::array::from_fn(|i| i as u8);
        let words = load_words(&bytes);
        assert_eq!(words[0], 0x0001_0203);
        assert_eq!(words[3], 0x0c0d_0e0f);
        assert_eq!(store_words(&words), bytes);
    }

    #[test]
    fn overlap_classification() {
        let buf = [0u8; 48];
        // identical
        assert!(!inexact_overlap(&buf[0..16], &buf[0..16]));
        // disjoint, including adjacent windows
        assert!(!inexact_overlap(&buf[0..16], &buf[16..32]));
        assert!(!inexact_overlap(&buf[32..48], &buf[0..16]));
        // partial
        assert!(inexact_overlap(&buf[0..16], &buf[1..17]));
        assert!(inexact_overlap(&buf[15..31], &buf[0..16]));
        // empty never overlaps
        assert!(!inexact_overlap(&buf[0..0], &buf[0..16]));
    }

    #[test]
    fn separate_buffers_do_not_overlap() {
        let a = [0u8; 16];
        let b = [0u8; 16];
        assert!(!inexact_overlap(&a, &b));
    }
}
