//! Encrypts a short message with a random key and decrypts it back.

use aes_cbc::{cbc_decrypt, cbc_encrypt};
use aes_core::Aes128Key;
use rand::RngCore;

fn main() -> Result<(), aes_cbc::Error> {
    let mut key_bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);

    let message = b"first block here, and a little more";
    let sealed = cbc_encrypt(&key, message)?;
    let (iv, body) = sealed.split_at(16);
    println!("iv:         {:02x?}", iv);
    println!("ciphertext: {} bytes", body.len());

    let recovered = cbc_decrypt(&key, &sealed)?;
    assert_eq!(&recovered[..], &message[..]);
    println!("example succeeded; recovered {} bytes", recovered.len());
    Ok(())
}
