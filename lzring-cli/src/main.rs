//! lzring CLI - fixed-format LZSS stream compression
//!
//! A thin wrapper that opens the two byte streams and hands them to the
//! encoder or decoder. Pass `-` as either path to use stdin/stdout.

use clap::{Parser, Subcommand};
use lzring_core::error::Result;
use lzring_lzss::{decode_lzss, encode_lzss};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lzring")]
#[command(
    author,
    version,
    about = "Fixed-format LZSS stream compressor (12-bit offsets, 4-bit lengths)"
)]
#[command(long_about = "
lzring compresses and decompresses byte streams with the traditional
fixed-format LZSS sliding-window codec.

Examples:
  lzring encode input.txt output.lzs
  lzring decode output.lzs restored.txt
  lzring encode - - < input.txt > output.lzs
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a stream
    #[command(alias = "e")]
    Encode {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Output file, or `-` for stdout
        output: PathBuf,
    },

    /// Decompress a stream
    #[command(alias = "d")]
    Decode {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Output file, or `-` for stdout
        output: PathBuf,
    },
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encode { input, output } => {
            let reader = open_input(&input)?;
            let writer = open_output(&output)?;
            encode_lzss(reader, writer)
        }
        Commands::Decode { input, output } => {
            let reader = open_input(&input)?;
            let writer = open_output(&output)?;
            decode_lzss(reader, writer)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("lzring: {e}");
        std::process::exit(1);
    }
}
