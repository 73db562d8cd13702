//! AES-128 key schedule and block encryption/decryption.

use crate::block::{Block, State};
use crate::key::{Aes128Key, RoundKeys, SCHEDULE_WORDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into the 44-word schedule.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / 4];
        }
        w[i] = w[i - 4] ^ temp;
    }

    RoundKeys(w)
}

fn encrypt_with(round_keys: &RoundKeys, block: &mut Block) {
    let mut state = State::load(block);

    add_round_key(&mut state, &round_keys.round(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys.round(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys.round(ROUNDS));

    state.store(block);
}

fn decrypt_with(round_keys: &RoundKeys, block: &mut Block) {
    let mut state = State::load(block);

    add_round_key(&mut state, &round_keys.round(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, &round_keys.round(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, &round_keys.round(0));

    state.store(block);
}

/// Encrypts a single 16-byte block in place, expanding `key` first.
pub fn encrypt_block(key: &Aes128Key, block: &mut Block) {
    encrypt_with(&expand_key(key), block);
}

/// Decrypts a single 16-byte block in place, expanding `key` first.
pub fn decrypt_block(key: &Aes128Key, block: &mut Block) {
    decrypt_with(&expand_key(key), block);
}

/// AES-128 cipher holding a pre-expanded key schedule.
///
/// Use this when processing more than one block under the same key.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Wraps an already expanded schedule.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// Returns the key schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block in place.
    #[inline]
    pub fn encrypt_block(&self, block: &mut Block) {
        encrypt_with(&self.round_keys, block);
    }

    /// Decrypts one block in place.
    #[inline]
    pub fn decrypt_block(&self, block: &mut Block) {
        decrypt_with(&self.round_keys, block);
    }
}
