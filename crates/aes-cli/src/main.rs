//! Command-line interface for AES-128 CBC encryption.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_cbc::{decrypt_with_config, encrypt_with_iv, generate_iv, CbcConfig, PaddingCheck};
use aes_core::{decrypt_block, encrypt_block, expand_key, Aes128, Aes128Key};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 CBC CLI.
#[derive(Parser)]
#[command(
    name = "aescbc",
    version,
    author,
    about = "AES-128 CBC encryption with PKCS#7-style padding"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh random AES-128 key as hex.
    Keygen {
        /// Optional RNG seed for reproducible keys (testing only).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file, writing `IV ‖ ciphertext`.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext input file (any length).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the IV-prefixed ciphertext.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Print sizes and the IV to stderr.
        #[arg(long, short, default_value_t = false)]
        verbose: bool,
    },
    /// Decrypt a file produced by `enc`.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (`IV ‖ ciphertext`).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Require every padding byte to match, not only the last one.
        #[arg(long, default_value_t = false)]
        strict_padding: bool,
        /// Print sizes and the IV to stderr.
        #[arg(long, short, default_value_t = false)]
        verbose: bool,
    },
    /// Run the FIPS-197 and SP 800-38A known-answer tests.
    Selftest,
    /// Run a local demo: generate a key, encrypt a message, decrypt it back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Enc {
            key_hex,
            input,
            output,
            verbose,
        } => cmd_enc(&key_hex, &input, &output, verbose),
        Commands::Dec {
            key_hex,
            input,
            output,
            strict_padding,
            verbose,
        } => {
            let config = CbcConfig {
                padding: if strict_padding {
                    PaddingCheck::Strict
                } else {
                    PaddingCheck::LastByte
                },
            };
            cmd_dec(&key_hex, &input, &output, &config, verbose)
        }
        Commands::Selftest => cmd_selftest(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    rng.try_fill_bytes(&mut key).context("draw key bytes")?;
    println!("{}", hex::encode(key));
    Ok(())
}

fn cmd_enc(key_hex: &str, input_path: &Path, output_path: &Path, verbose: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let iv = generate_iv(&mut rand::rngs::OsRng).context("generate IV")?;
    let sealed = encrypt_with_iv(&Aes128::new(&key), &iv, &data).context("encrypt")?;
    if verbose {
        eprintln!(
            "encrypted {} bytes -> {} bytes, iv {}",
            data.len(),
            sealed.len(),
            hex::encode(iv)
        );
    }
    fs::write(output_path, sealed).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(
    key_hex: &str,
    input_path: &Path,
    output_path: &Path,
    config: &CbcConfig,
    verbose: bool,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plain = decrypt_with_config(&key, &data, config)
        .with_context(|| format!("decrypt {}", input_path.display()))?;
    if verbose {
        eprintln!(
            "decrypted {} bytes -> {} bytes, iv {}",
            data.len(),
            plain.len(),
            hex::encode(&data[..16])
        );
    }
    fs::write(output_path, plain).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

struct BlockVector {
    name: &'static str,
    key: &'static str,
    plain: &'static str,
    cipher: &'static str,
}

const BLOCK_VECTORS: [BlockVector; 2] = [
    BlockVector {
        name: "FIPS-197 appendix B",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plain: "3243f6a8885a308d313198a2e0370734",
        cipher: "3925841d02dc09fbdc118597196a0b32",
    },
    BlockVector {
        name: "FIPS-197 appendix C.1",
        key: "000102030405060708090a0b0c0d0e0f",
        plain: "00112233445566778899aabbccddeeff",
        cipher: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
];

const CBC_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const CBC_IV: &str = "000102030405060708090a0b0c0d0e0f";
const CBC_PLAIN: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);
const CBC_CIPHER: &str = concat!(
    "7649abac8119b246cee98e9b12e9197d",
    "5086cb9b507219ee95db113a917678b2",
    "73bed6b8e3c1743b7116e69e22229516",
    "3ff1caa1681fac09120eca307586e1a7",
);

fn cmd_selftest() -> Result<()> {
    for vector in &BLOCK_VECTORS {
        let key = parse_key_hex(vector.key)?;
        let mut block = decode_block(vector.plain)?;
        encrypt_block(&key, &mut block);
        if hex::encode(block) != vector.cipher {
            bail!("{}: encryption mismatch", vector.name);
        }
        decrypt_block(&key, &mut block);
        if hex::encode(block) != vector.plain {
            bail!("{}: decryption mismatch", vector.name);
        }
        println!("ok   {}", vector.name);
    }

    let key = parse_key_hex(CBC_KEY)?;
    let cipher = Aes128::from_round_keys(expand_key(&key));
    if cipher.round_keys().word(43) != 0xb663_0ca6 {
        bail!("FIPS-197 appendix A.1: key expansion mismatch");
    }
    println!("ok   FIPS-197 appendix A.1");

    let iv = decode_block(CBC_IV)?;
    let plain = hex::decode(CBC_PLAIN).context("decode CBC plaintext")?;
    let sealed = encrypt_with_iv(&cipher, &iv, &plain)
        .context("CBC encrypt")?;
    if hex::encode(&sealed[16..80]) != CBC_CIPHER {
        bail!("SP 800-38A F.2.1: ciphertext mismatch");
    }
    let recovered =
        decrypt_with_config(&key, &sealed, &CbcConfig::strict()).context("CBC decrypt")?;
    if recovered != plain {
        bail!("SP 800-38A F.2.1: round trip mismatch");
    }
    println!("ok   SP 800-38A F.2.1");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);

    let message = b"The quick brown fox jumps over the lazy dog";
    let iv = generate_iv(&mut rng).context("generate IV")?;
    let sealed = encrypt_with_iv(&Aes128::new(&key), &iv, message).context("encrypt")?;
    let recovered = decrypt_with_config(&key, &sealed, &CbcConfig::strict()).context("decrypt")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(message));
    println!("iv: {}", hex::encode(iv));
    println!("ciphertext: {}", hex::encode(&sealed[16..]));
    println!("decrypted: {}", hex::encode(&recovered));
    if recovered != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice())
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn decode_block(hex_str: &str) -> Result<[u8; 16]> {
    let mut block = [0u8; 16];
    hex::decode_to_slice(hex_str, &mut block).with_context(|| format!("decode {hex_str}"))?;
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_accepts_32_hex_chars() {
        let key = parse_key_hex(" 000102030405060708090a0b0c0d0e0f\n").unwrap();
        assert_eq!(key.0[15], 0x0f);
    }

    #[test]
    fn parse_key_rejects_wrong_length() {
        assert!(parse_key_hex("0001").is_err());
        assert!(parse_key_hex("zz").is_err());
    }

    #[test]
    fn selftest_passes() {
        cmd_selftest().unwrap();
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(5));
        let mut b = seeded_rng(Some(5));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn cli_parses_dec_flags() {
        let cli = Cli::try_parse_from([
            "aescbc",
            "dec",
            "--key-hex",
            "00",
            "--input",
            "in.bin",
            "--output",
            "out.bin",
            "--strict-padding",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Dec {
                strict_padding: true,
                verbose: false,
                ..
            }
        ));
    }
}
