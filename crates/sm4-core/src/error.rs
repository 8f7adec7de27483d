//! Error types.

use thiserror::Error;

/// Returned when a key is not exactly [`KEY_SIZE`](crate::KEY_SIZE) bytes long.
///
/// Carries the rejected length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("sm4: invalid key size {0}")]
pub struct KeySizeError(pub usize);
