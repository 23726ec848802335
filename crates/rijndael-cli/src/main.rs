//! Command-line interface for the `rijndael` block cipher core.

#![forbid(unsafe_code)]

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael::{decrypt_block, encrypt_block, expand_key, tables, Aes, Block, KeySize};

/// Single-block AES CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Single-block AES (FIPS-197) encryption, key schedules and tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded round keys, one round per line.
    Schedule {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Print the S-box as a 16×16 grid.
    Tables {
        /// Print the inverse S-box instead.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// Check known answers and random round trips for every key size.
    Check {
        /// Number of random samples per key size.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random AES-256 key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// FIPS-197 Appendix C example vectors: `(key, plaintext, ciphertext)`.
const KNOWN_ANSWERS: [(&str, &str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "00112233445566778899aabbccddeeff",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Schedule { key_hex } => cmd_schedule(&key_hex),
        Commands::Tables { inverse } => cmd_tables(inverse),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let aes = parse_key_hex(key_hex)?;
    let mut block = parse_block_hex(block_hex)?;
    aes.encrypt_block(&mut block);
    println!("{}", hex::encode(block));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let aes = parse_key_hex(key_hex)?;
    let mut block = parse_block_hex(block_hex)?;
    aes.decrypt_block(&mut block);
    println!("{}", hex::encode(block));
    Ok(())
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let aes = parse_key_hex(key_hex)?;
    println!("{}", aes.key_size());
    for (round, words) in aes.schedule().round_keys().iter().enumerate() {
        println!(
            "{round:>2}: {:08x} {:08x} {:08x} {:08x}",
            words[0], words[1], words[2], words[3]
        );
    }
    Ok(())
}

fn cmd_tables(inverse: bool) -> Result<()> {
    let t = tables();
    println!("    {}", (0..16).map(|c| format!(" {c:x}")).collect::<String>());
    for row in 0..16u8 {
        let cells: String = (0..16u8)
            .map(|col| {
                let x = (row << 4) | col;
                let value = if inverse { t.inv_sbox(x) } else { t.sbox(x) };
                format!(" {value:02x}")
            })
            .collect();
        println!("{row:x}0 |{cells}");
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in KNOWN_ANSWERS {
        let aes = parse_key_hex(key_hex)?;
        let mut block = parse_block_hex(plain_hex)?;
        aes.encrypt_block(&mut block);
        if hex::encode(block) != cipher_hex {
            bail!("{} known answer mismatch", aes.key_size());
        }
        aes.decrypt_block(&mut block);
        if hex::encode(block) != plain_hex {
            bail!("{} known answer did not decrypt", aes.key_size());
        }
    }

    let mut rng = seeded_rng(seed);
    for size in KeySize::ALL {
        for _ in 0..samples {
            let mut key = vec![0u8; size.key_bytes()];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            let schedule = expand_key(&key, size.key_words(), size.rounds())
                .with_context(|| format!("expand {size} key"))?;
            let ct = encrypt_block(&block, &schedule);
            if decrypt_block(&ct, &schedule) != block {
                bail!("{size} round trip failed for key {}", hex::encode(&key));
            }
        }
        println!("{size}: ok ({samples} samples)");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let aes = Aes::with_size(&key_bytes, KeySize::Aes256).context("expand demo key")?;

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let plaintext_hex = hex::encode(block);

    aes.encrypt_block(&mut block);
    let ciphertext_hex = hex::encode(block);

    aes.decrypt_block(&mut block);
    let decrypted_hex = hex::encode(block);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes::new(&bytes).context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    ensure!(
        bytes.len() == 16,
        "block must be 16 bytes (32 hex characters), got {}",
        bytes.len()
    );
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
