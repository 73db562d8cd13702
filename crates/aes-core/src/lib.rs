//! From-scratch AES-128 as described in FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) helpers for the MixColumns constants.
//! - The forward and inverse S-boxes and round constants.
//! - The AES-128 key schedule (44 big-endian words).
//! - Single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;

pub use crate::block::{cell, xor_in_place, Block, State, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes128, ROUNDS};
pub use crate::key::{Aes128Key, InvalidKeyLength, RoundKeys, SCHEDULE_WORDS};
