use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use memmap2::Mmap;

use hsf::{utils, EncodeError};

#[derive(Parser)]
#[command(
    name = "hsf",
    version,
    about = "Split-topology prefix coding for DNA sequences"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a DNA sequence file, writing <in_file>.hsf
    Compress {
        /// Input path holding symbols over {A,C,G,T,N}
        in_file: PathBuf,
    },
    /// Expand an .hsf file, writing the input path with the suffix stripped
    Decompress {
        /// Input path ending in .hsf
        in_file: PathBuf,
    },
}

fn compress(in_file: &Path) -> Result<()> {
    let file =
        File::open(in_file).with_context(|| format!("cannot open {}", in_file.display()))?;
    if file.metadata()?.len() == 0 {
        // an empty file cannot be mapped; report the real problem
        bail!("{}: {}", in_file.display(), EncodeError::EmptyInput);
    }
    let mmap = unsafe { Mmap::map(&file) }?;

    let out_path = utils::compressed_path(in_file);
    let mut writer = File::create(&out_path)
        .map(BufWriter::new)
        .with_context(|| format!("cannot create {}", out_path.display()))?;
    hsf::compress(&mmap, &mut writer)?;
    writer.flush()?;

    let packed = fs::metadata(&out_path)?.len();
    eprintln!(
        "Compressed {} -> {} ({} -> {} bytes)",
        in_file.display(),
        out_path.display(),
        mmap.len(),
        packed
    );
    Ok(())
}

fn decompress(in_file: &Path) -> Result<()> {
    let out_path = utils::decompressed_path(in_file)?;
    let reader = File::open(in_file)
        .map(BufReader::new)
        .with_context(|| format!("cannot open {}", in_file.display()))?;
    let mut writer = File::create(&out_path)
        .map(BufWriter::new)
        .with_context(|| format!("cannot create {}", out_path.display()))?;
    hsf::decompress(reader, &mut writer)?;
    writer.flush()?;

    eprintln!(
        "Decompressed {} -> {} ({} bytes)",
        in_file.display(),
        out_path.display(),
        fs::metadata(&out_path)?.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Compress { in_file } => compress(&in_file),
        Command::Decompress { in_file } => decompress(&in_file),
    }
}
