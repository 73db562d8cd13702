//! Error type for CBC encryption and decryption.

use std::collections::TryReserveError;

use thiserror::Error;

/// Failures surfaced by [`crate::cbc_encrypt`] and [`crate::cbc_decrypt`].
#[derive(Debug, Error)]
pub enum Error {
    /// The output buffer could not be allocated.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// The recovered plaintext does not end in a valid padding run.
    #[error("invalid padding byte {value:#04x}")]
    InvalidPadding {
        /// Final byte of the recovered plaintext.
        value: u8,
    },

    /// The ciphertext length is not `16 + 16k` with `k >= 1`.
    #[error("malformed input: length {len} is not an IV plus a positive number of blocks")]
    MalformedInput {
        /// Length of the rejected input.
        len: usize,
    },

    /// The secure random source did not yield an IV.
    #[error("entropy source failure: {0}")]
    EntropySource(#[from] rand::Error),
}

/// Convenience alias for results in this crate.
pub type Result<T> = core::result::Result<T, Error>;
