//! Byte arithmetic in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
//!
//! Only the constants used by MixColumns (2, 3) and InvMixColumns (9, 11, 13,
//! 14) are provided. Each one is a composition of [`double`] and XOR.

/// Low byte of the AES reducing polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by 2.
#[inline]
pub const fn double(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies `a` by 3 (`2 + 1`).
#[inline]
pub const fn mul3(a: u8) -> u8 {
    double(a) ^ a
}

/// Multiplies `a` by 9 (`8 + 1`).
#[inline]
pub const fn mul9(a: u8) -> u8 {
    double(double(double(a))) ^ a
}

/// Multiplies `a` by 11 (`8 + 2 + 1`).
#[inline]
pub const fn mul11(a: u8) -> u8 {
    let x2 = double(a);
    double(double(x2)) ^ x2 ^ a
}

/// Multiplies `a` by 13 (`8 + 4 + 1`).
#[inline]
pub const fn mul13(a: u8) -> u8 {
    let x4 = double(double(a));
    double(x4) ^ x4 ^ a
}

/// Multiplies `a` by 14 (`8 + 4 + 2`).
#[inline]
pub const fn mul14(a: u8) -> u8 {
    let x2 = double(a);
    let x4 = double(x2);
    double(x4) ^ x4 ^ x2
}
