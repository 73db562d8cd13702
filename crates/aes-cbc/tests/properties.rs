use aes_cbc::{cbc_decrypt, cbc_encrypt, Cbc, CbcConfig, Error};
use aes_core::{decrypt_block, encrypt_block, Aes128, Aes128Key};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_key(rng: &mut impl RngCore) -> Aes128Key {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Aes128Key::from(bytes)
}

#[test]
fn block_round_trip_for_random_keys() {
    let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
    for _ in 0..256 {
        let key = random_key(&mut rng);
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let original = block;
        encrypt_block(&key, &mut block);
        decrypt_block(&key, &mut block);
        assert_eq!(block, original);
    }
}

#[test]
fn cbc_round_trip_across_lengths() {
    let mut rng = ChaCha20Rng::from_seed([12u8; 32]);
    let key = random_key(&mut rng);
    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 1000] {
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        let sealed = cbc_encrypt(&key, &message).unwrap();
        assert_eq!(sealed.len(), 16 + (len / 16 + 1) * 16, "length {len}");
        assert_eq!(sealed.len() % 16, 0);
        assert!(sealed.len() >= 32);
        assert_eq!(cbc_decrypt(&key, &sealed).unwrap(), message);
    }
}

#[test]
fn cbc_round_trip_random_lengths_strict() {
    let mut rng = ChaCha20Rng::from_seed([13u8; 32]);
    let mut cbc = Cbc::with_config(ChaCha20Rng::from_seed([14u8; 32]), CbcConfig::strict());
    for _ in 0..64 {
        let key = random_key(&mut rng);
        let len = rng.gen_range(0..200);
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        let sealed = cbc.encrypt(&key, &message).unwrap();
        assert_eq!(cbc.decrypt(&key, &sealed).unwrap(), message);
    }
}

#[test]
fn aligned_message_carries_full_padding_block() {
    let key = Aes128Key::from([9u8; 16]);
    let message = [0x5au8; 32];
    let sealed = cbc_encrypt(&key, &message).unwrap();
    assert_eq!(sealed.len(), 16 + 48);

    let cipher = Aes128::new(&key);
    let mut last: [u8; 16] = sealed[48..].try_into().unwrap();
    cipher.decrypt_block(&mut last);
    for (b, c) in last.iter_mut().zip(&sealed[32..48]) {
        *b ^= c;
    }
    assert_eq!(last, [0x10; 16]);
    assert_eq!(cbc_decrypt(&key, &sealed).unwrap(), message);
}

#[test]
fn successive_encryptions_use_fresh_ivs() {
    let key = Aes128Key::from([1u8; 16]);
    let a = cbc_encrypt(&key, b"identical plaintext").unwrap();
    let b = cbc_encrypt(&key, b"identical plaintext").unwrap();
    assert_ne!(&a[..16], &b[..16]);
    assert_ne!(&a[16..], &b[16..]);
}

#[test]
fn chaining_hides_repeated_blocks() {
    let key = Aes128Key::from([2u8; 16]);
    let sealed = cbc_encrypt(&key, &[0u8; 64]).unwrap();
    let blocks: Vec<&[u8]> = sealed[16..].chunks(16).collect();
    for i in 0..blocks.len() {
        for j in i + 1..blocks.len() {
            assert_ne!(blocks[i], blocks[j]);
        }
    }
}

#[test]
fn malformed_lengths_are_rejected_before_decryption() {
    let key = Aes128Key::from([3u8; 16]);
    let sealed = cbc_encrypt(&key, b"some message").unwrap();
    for len in [0, 16, 20, sealed.len() - 1] {
        assert!(matches!(
            cbc_decrypt(&key, &sealed[..len]),
            Err(Error::MalformedInput { .. })
        ));
    }
}

#[test]
fn wrong_key_never_returns_padding_garbage() {
    let key = Aes128Key::from([4u8; 16]);
    let other = Aes128Key::from([5u8; 16]);
    let mut rejected = 0;
    for _ in 0..64 {
        let sealed = cbc_encrypt(&key, b"sixteen byte msg").unwrap();
        match cbc_decrypt(&other, &sealed) {
            Err(Error::InvalidPadding { value }) => {
                assert!(value == 0 || value > 16);
                rejected += 1;
            }
            Ok(message) => assert!(message.len() >= 16 && message.len() < 32),
            Err(err) => panic!("unexpected error {err}"),
        }
    }
    // About 15/16 of wrong-key decryptions fail the range check.
    assert!(rejected > 32, "only {rejected} rejections");
}
