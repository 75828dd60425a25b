//! Command-line interface for `aes-trace`.

#![forbid(unsafe_code)]

mod config;
mod render;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use aes_trace::codec::hex_to_bytes;
use aes_trace::{encrypt, encrypt_block, expand, Block, KeySize};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, Level, Log, Metadata, Record};

use crate::config::{FileConfig, OutputFormat, Settings};

/// AES round-by-round tracing CLI.
#[derive(Parser)]
#[command(
    name = "aestrace",
    version,
    author,
    about = "Encrypt one AES block and show the state after every step"
)]
struct Cli {
    /// TOML file with default settings.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single block and print its trace.
    Encrypt {
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        plaintext: String,
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Key size in bits (128, 192 or 256).
        #[arg(long, value_name = "BITS")]
        key_size: Option<u32>,
        /// Output format.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write the trace to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Verify the cipher against the FIPS-197 known-answer vectors.
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    match cli.command {
        Commands::Encrypt {
            plaintext,
            key,
            key_size,
            format,
            out,
        } => {
            let settings = Settings::resolve(&file_config, key_size, format);
            cmd_encrypt(&plaintext, &key, &settings, out.as_deref())
        }
        Commands::Check => cmd_check(),
    }
}

fn cmd_encrypt(plaintext: &str, key: &str, settings: &Settings, out: Option<&Path>) -> Result<()> {
    let trace = encrypt(plaintext, key, settings.key_size)
        .with_context(|| format!("encrypt with AES-{}", settings.key_size))?;
    let rendered = match settings.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&trace).context("serialize trace")?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render::trace_text(&trace),
    };
    match out {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!("wrote trace to {}", path.display());
        }
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("write trace to stdout")?,
    }
    Ok(())
}

struct KnownAnswer {
    name: &'static str,
    size: KeySize,
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const KNOWN_ANSWERS: [KnownAnswer; 4] = [
    KnownAnswer {
        name: "FIPS-197 C.1",
        size: KeySize::Aes128,
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69C4E0D86A7B0430D8CDB78070B4C55A",
    },
    KnownAnswer {
        name: "FIPS-197 C.2",
        size: KeySize::Aes192,
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "DDA97CA4864CDFE06EAF70A0EC0D7191",
    },
    KnownAnswer {
        name: "FIPS-197 C.3",
        size: KeySize::Aes256,
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8EA2B7CA516745BFEAFC49904B496089",
    },
    KnownAnswer {
        name: "FIPS-197 B",
        size: KeySize::Aes128,
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841D02DC09FBDC118597196A0B32",
    },
];

fn cmd_check() -> Result<()> {
    for vector in &KNOWN_ANSWERS {
        let trace = encrypt(vector.plaintext, vector.key, vector.size.bits())
            .with_context(|| format!("{}: traced encryption", vector.name))?;
        if trace.final_ciphertext != vector.ciphertext {
            bail!(
                "{}: traced ciphertext {} does not match {}",
                vector.name,
                trace.final_ciphertext,
                vector.ciphertext
            );
        }

        let key = hex_to_bytes(vector.key)?;
        let block: Block = hex_to_bytes(vector.plaintext)?
            .as_slice()
            .try_into()
            .context("plaintext is not one block")?;
        let schedule = expand(&key, vector.size)?;
        let untraced = hex::encode_upper(encrypt_block(&block, &schedule));
        if untraced != vector.ciphertext {
            bail!(
                "{}: block ciphertext {} does not match {}",
                vector.name,
                untraced,
                vector.ciphertext
            );
        }
        println!("ok {} ({})", vector.name, vector.size);
    }
    Ok(())
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|err| anyhow!("install logger: {err}"))?;
    let level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    log::set_max_level(level.to_level_filter());
    Ok(())
}
