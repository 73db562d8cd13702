//! Cipher-block chaining over AES-128.
//!
//! The wire format is `IV ‖ C1 ‖ … ‖ Cn`, where the IV is 16 fresh random
//! bytes and `n >= 1` because padding always adds at least one byte.

use aes_core::{xor_in_place, Aes128, Aes128Key, Block, BLOCK_LEN};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::config::CbcConfig;
use crate::error::{Error, Result};
use crate::padding::{pad, unpad};

/// Draws a fresh IV from `rng`.
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Block> {
    let mut iv = [0u8; BLOCK_LEN];
    rng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

/// Pads `message` and encrypts it under `cipher` with an explicit IV.
///
/// Returns `iv ‖ ciphertext`. Callers must never reuse an IV under one key;
/// [`Cbc::encrypt`] draws a new one on every call.
pub fn encrypt_with_iv(cipher: &Aes128, iv: &Block, message: &[u8]) -> Result<Vec<u8>> {
    let padded = Zeroizing::new(pad(message)?);
    let mut out = Vec::new();
    out.try_reserve_exact(BLOCK_LEN + padded.len())?;
    out.extend_from_slice(iv);

    let mut prev = *iv;
    for chunk in padded.chunks_exact(BLOCK_LEN) {
        let mut block: Block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &prev);
        cipher.encrypt_block(&mut block);
        out.extend_from_slice(&block);
        prev = block;
    }

    Ok(out)
}

/// Decrypts `iv ‖ ciphertext` and strips padding according to `config`.
pub fn decrypt_with_config(key: &Aes128Key, input: &[u8], config: &CbcConfig) -> Result<Vec<u8>> {
    if input.len() < 2 * BLOCK_LEN || input.len() % BLOCK_LEN != 0 {
        return Err(Error::MalformedInput { len: input.len() });
    }
    let cipher = Aes128::new(key);
    let (iv, body) = input.split_at(BLOCK_LEN);

    let mut plain = Vec::new();
    plain.try_reserve_exact(body.len())?;

    let mut prev: Block = [0u8; BLOCK_LEN];
    prev.copy_from_slice(iv);
    for chunk in body.chunks_exact(BLOCK_LEN) {
        let mut block: Block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_in_place(&mut block, &prev);
        plain.extend_from_slice(&block);
        prev.copy_from_slice(chunk);
    }

    let message_len = match unpad(&plain, config.padding) {
        Ok(message) => message.len(),
        Err(err) => {
            plain.zeroize();
            return Err(err);
        }
    };
    plain[message_len..].zeroize();
    plain.truncate(message_len);
    Ok(plain)
}

/// CBC encryptor/decryptor drawing IVs from `R`.
pub struct Cbc<R: RngCore + CryptoRng> {
    rng: R,
    config: CbcConfig,
}

impl<R: RngCore + CryptoRng> Cbc<R> {
    /// Creates a context with the default configuration.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: CbcConfig::default(),
        }
    }

    /// Creates a context with explicit configuration.
    pub fn with_config(rng: R, config: CbcConfig) -> Self {
        Self { rng, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CbcConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut CbcConfig {
        &mut self.config
    }

    /// Encrypts `message` under `key` with a freshly drawn IV.
    pub fn encrypt(&mut self, key: &Aes128Key, message: &[u8]) -> Result<Vec<u8>> {
        let iv = generate_iv(&mut self.rng)?;
        encrypt_with_iv(&Aes128::new(key), &iv, message)
    }

    /// Decrypts `iv ‖ ciphertext` produced by [`Cbc::encrypt`].
    pub fn decrypt(&self, key: &Aes128Key, input: &[u8]) -> Result<Vec<u8>> {
        decrypt_with_config(key, input, &self.config)
    }
}

/// Encrypts `message` with an IV from the operating system's secure source.
pub fn cbc_encrypt(key: &Aes128Key, message: &[u8]) -> Result<Vec<u8>> {
    Cbc::new(OsRng).encrypt(key, message)
}

/// Decrypts `iv ‖ ciphertext` with the default padding check.
pub fn cbc_decrypt(key: &Aes128Key, input: &[u8]) -> Result<Vec<u8>> {
    decrypt_with_config(key, input, &CbcConfig::default())
}
