//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use bitfold::compression::{compress, decompress};
use bitfold::tools::md5::Md5;
use bitfold::{Error, Result};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Suffix appended to packed files.
const SUFFIX: &str = "bfh";

#[derive(Parser)]
#[clap(author, version, about = "Canonical Huffman file packer")]
struct Cli {
    /// More -v, more detail (info, debug, trace)
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack a file into <file>.bfh
    Pack {
        file: PathBuf,
        /// Overwrite an existing output file
        #[clap(short, long)]
        force: bool,
    },
    /// Restore a packed <file>.bfh
    Unpack {
        file: PathBuf,
        /// Overwrite an existing output file
        #[clap(short, long)]
        force: bool,
    },
    /// Print the MD5 digest of a file
    Digest { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    match cli.command {
        Command::Pack { file, force } => pack(&file, force),
        Command::Unpack { file, force } => unpack(&file, force),
        Command::Digest { file } => digest(&file),
    }
}

fn pack(file: &Path, force: bool) -> Result<()> {
    let data = fs::read(file)?;
    let mut target = file.as_os_str().to_owned();
    target.push(".");
    target.push(SUFFIX);
    let target = PathBuf::from(target);
    check_target(&target, force)?;
    let packed = compress(&data)?;
    fs::write(&target, &packed)?;
    info!(
        "{} -> {} ({} -> {} bytes)",
        file.display(),
        target.display(),
        data.len(),
        packed.len()
    );
    Ok(())
}

fn unpack(file: &Path, force: bool) -> Result<()> {
    if file.extension().map_or(true, |ext| ext != SUFFIX) {
        return Err(Error::Corrupt("expected a .bfh input file"));
    }
    let target = file.with_extension("");
    check_target(&target, force)?;
    let packed = fs::read(file)?;
    let data = decompress(&packed)?;
    fs::write(&target, &data)?;
    info!("{} -> {}", file.display(), target.display());
    Ok(())
}

fn digest(file: &Path) -> Result<()> {
    let data = fs::read(file)?;
    let mut md5 = Md5::new();
    md5.update(&data);
    let hex: String = md5
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect();
    println!("{}  {}", hex, file.display());
    Ok(())
}

/// Refuse to clobber existing output unless forced.
fn check_target(target: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} exists, use --force to overwrite", target.display()),
        )));
    }
    Ok(())
}
