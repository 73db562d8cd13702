//! Key types for AES-128.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;

/// Number of 32-bit words in an expanded AES-128 key.
pub const SCHEDULE_WORDS: usize = 44;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Returned when a byte slice is not exactly 16 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("AES-128 key must be 16 bytes, got {0}")]
pub struct InvalidKeyLength(pub usize);

impl TryFrom<&[u8]> for Aes128Key {
    type Error = InvalidKeyLength;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| InvalidKeyLength(value.len()))?;
        Ok(Self(bytes))
    }
}

/// Expanded key schedule: 44 big-endian words, four per round.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub(crate) [u32; SCHEDULE_WORDS]);

impl RoundKeys {
    /// Returns the full word schedule.
    #[inline]
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.0
    }

    /// Returns schedule word `i` (0..44).
    #[inline]
    pub fn word(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// Returns the four words of round key `round` (0..=10).
    #[inline]
    pub fn round(&self, round: usize) -> [u32; 4] {
        let base = round * 4;
        [
            self.0[base],
            self.0[base + 1],
            self.0[base + 2],
            self.0[base + 3],
        ]
    }

    /// Returns round key `round` as 16 bytes.
    pub fn to_bytes(&self, round: usize) -> Block {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.round(round)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        let bytes = [7u8; 20];
        assert_eq!(
            Aes128Key::try_from(&bytes[..16]),
            Ok(Aes128Key([7u8; 16]))
        );
        assert_eq!(Aes128Key::try_from(&bytes[..]), Err(InvalidKeyLength(20)));
        assert_eq!(Aes128Key::try_from(&bytes[..0]), Err(InvalidKeyLength(0)));
    }

    #[test]
    fn round_bytes_are_big_endian() {
        let mut words = [0u32; SCHEDULE_WORDS];
        words[4] = 0xa0fa_fe17;
        words[7] = 0x2a6c_7605;
        let keys = RoundKeys(words);
        let bytes = keys.to_bytes(1);
        assert_eq!(&bytes[..4], &[0xa0, 0xfa, 0xfe, 0x17]);
        assert_eq!(&bytes[12..], &[0x2a, 0x6c, 0x76, 0x05]);
        assert_eq!(keys.round(1)[3], 0x2a6c_7605);
    }
}
