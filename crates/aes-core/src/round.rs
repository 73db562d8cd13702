//! AES round transformations over the state grid.

use crate::block::State;
use crate::gf::{double, mul11, mul13, mul14, mul3, mul9};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_left(row);
    }
}

/// Performs the inverse of ShiftRows: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_right(row);
    }
}

fn mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        double(a0) ^ mul3(a1) ^ a2 ^ a3,
        a0 ^ double(a1) ^ mul3(a2) ^ a3,
        a0 ^ a1 ^ double(a2) ^ mul3(a3),
        mul3(a0) ^ a1 ^ a2 ^ double(a3),
    ]
}

fn inv_mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3),
        mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3),
        mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3),
        mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = inv_mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state, one big-endian word per column.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[u32; 4]) {
    for (col, word) in round_key.iter().enumerate() {
        let mut column = state.column(col);
        for (byte, key_byte) in column.iter_mut().zip(word.to_be_bytes()) {
            *byte ^= key_byte;
        }
        state.set_column(col, column);
    }
}
