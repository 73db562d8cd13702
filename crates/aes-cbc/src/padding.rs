//! PKCS#7-style padding to a multiple of the block length.

use aes_core::BLOCK_LEN;

use crate::config::PaddingCheck;
use crate::error::{Error, Result};

/// Number of padding bytes appended to a message of `len` bytes (always `1..=16`).
#[inline]
pub fn pad_len(len: usize) -> usize {
    BLOCK_LEN - (len % BLOCK_LEN)
}

/// Returns `message` followed by `pad_len(message.len())` copies of that length.
///
/// A message that is already block aligned (including the empty message)
/// gains a full block of `0x10`.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let extra = pad_len(message.len());
    let mut out = Vec::new();
    out.try_reserve_exact(message.len() + extra)?;
    out.extend_from_slice(message);
    out.resize(message.len() + extra, extra as u8);
    Ok(out)
}

/// Strips padding from a decrypted buffer, returning the message prefix.
///
/// With [`PaddingCheck::LastByte`] only the final byte's range is checked, so a
/// successful unpad is not evidence of integrity.
pub fn unpad(buf: &[u8], check: PaddingCheck) -> Result<&[u8]> {
    let value = *buf.last().ok_or(Error::InvalidPadding { value: 0 })?;
    let n = usize::from(value);
    if n == 0 || n > BLOCK_LEN || n > buf.len() {
        return Err(Error::InvalidPadding { value });
    }
    let (message, padding) = buf.split_at(buf.len() - n);
    if check == PaddingCheck::Strict && padding.iter().any(|&b| b != value) {
        return Err(Error::InvalidPadding { value });
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_lengths() {
        assert_eq!(pad_len(0), 16);
        assert_eq!(pad_len(1), 15);
        assert_eq!(pad_len(15), 1);
        assert_eq!(pad_len(16), 16);
        assert_eq!(pad_len(17), 15);
    }

    #[test]
    fn empty_message_gets_full_block() {
        assert_eq!(pad(&[]).unwrap(), vec![0x10; 16]);
    }

    #[test]
    fn aligned_message_gets_extra_block() {
        let padded = pad(&[0xaa; 16]).unwrap();
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[0x10; 16]);
    }

    #[test]
    fn short_message_padding_bytes() {
        let padded = pad(b"Hello, World!").unwrap();
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[13..], &[3, 3, 3]);
        assert_eq!(unpad(&padded, PaddingCheck::Strict).unwrap(), b"Hello, World!");
    }

    #[test]
    fn unpad_rejects_out_of_range_final_byte() {
        let mut block = [0x41u8; 16];
        block[15] = 0;
        assert!(matches!(
            unpad(&block, PaddingCheck::LastByte),
            Err(Error::InvalidPadding { value: 0 })
        ));
        block[15] = 0x11;
        assert!(matches!(
            unpad(&block, PaddingCheck::LastByte),
            Err(Error::InvalidPadding { value: 0x11 })
        ));
        assert!(matches!(
            unpad(&[], PaddingCheck::LastByte),
            Err(Error::InvalidPadding { .. })
        ));
    }

    #[test]
    fn last_byte_check_ignores_inner_padding_bytes() {
        let mut block = [0x41u8; 16];
        block[14] = 0x07;
        block[15] = 0x02;
        assert_eq!(unpad(&block, PaddingCheck::LastByte).unwrap(), &block[..14]);
        assert!(matches!(
            unpad(&block, PaddingCheck::Strict),
            Err(Error::InvalidPadding { value: 0x02 })
        ));
    }

    #[test]
    fn padding_longer_than_buffer_is_rejected() {
        assert!(matches!(
            unpad(&[0x05, 0x05], PaddingCheck::LastByte),
            Err(Error::InvalidPadding { value: 0x05 })
        ));
    }
}
