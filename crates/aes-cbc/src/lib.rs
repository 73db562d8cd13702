//! AES-128 in cipher-block chaining mode with PKCS#7-style padding.
//!
//! [`cbc_encrypt`] returns `IV ‖ ciphertext` using a fresh IV from the
//! operating system; [`cbc_decrypt`] reverses it. No authentication is
//! provided: a successful decryption is not evidence of integrity.
//!
//! ```
//! use aes_cbc::{cbc_decrypt, cbc_encrypt};
//! use aes_core::Aes128Key;
//!
//! let key = Aes128Key::from([0x42; 16]);
//! let sealed = cbc_encrypt(&key, b"attack at dawn").unwrap();
//! assert_eq!(sealed.len(), 32);
//! assert_eq!(cbc_decrypt(&key, &sealed).unwrap(), b"attack at dawn");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod mode;
mod padding;

pub use crate::config::{CbcConfig, PaddingCheck};
pub use crate::error::{Error, Result};
pub use crate::mode::{
    cbc_decrypt, cbc_encrypt, decrypt_with_config, encrypt_with_iv, generate_iv, Cbc,
};
pub use crate::padding::{pad, pad_len, unpad};
