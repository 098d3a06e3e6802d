use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gzinflate::{decompress_all, Error, GunzipConfig};

#[derive(Parser, Debug)]
#[command(name = "gzinflate")]
#[command(about = "Decompress gzip (RFC 1951/1952) streams")]
#[command(version)]
struct Args {
    /// Input gzip file (use - for stdin)
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout; default when not given)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Test mode: decompress and verify checksums without writing output
    #[arg(short = 't', long)]
    test: bool,

    /// Keep (don't delete) the input file after a successful decompression
    /// to an explicit output file, gunzip(1)-style. Has no effect on stdin
    /// input or `-t`/stdout output, neither of which has a file to delete.
    #[arg(short, long)]
    keep: bool,

    /// Verify each member's optional FHCRC header checksum
    #[arg(long)]
    verify_header_crc: bool,

    /// Show per-member statistics on completion
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Exit codes for normal (non-`-t`) operation.
const EXIT_OK: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Exit codes for `-t/--test` mode, gzip(1)-style:
/// 0 valid, 1 invalid (checksum/size mismatch), 2 unreadable/malformed stream.
const EXIT_TEST_VALID: u8 = 0;
const EXIT_TEST_INVALID: u8 = 1;
const EXIT_TEST_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            if !args.quiet {
                eprintln!("gzinflate: {}", e);
            }
            ExitCode::from(if args.test { EXIT_TEST_ERROR } else { EXIT_ERROR })
        }
    }
}

fn run(args: &Args) -> Result<u8, Error> {
    let is_stdin = args.input.to_str() == Some("-");

    let reader: Box<dyn Read> = if is_stdin {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(&args.input)?)
    };

    let config = GunzipConfig { verify_header_crc: args.verify_header_crc, ..GunzipConfig::default() };

    if args.test {
        return run_test_mode(args, reader, &config);
    }

    let stats = match &args.output {
        Some(path) if path.to_str() != Some("-") => {
            let file = File::create(path)?;
            let stats = decompress_all(reader, BufWriter::new(file), &config)?;
            if !is_stdin && !args.keep {
                std::fs::remove_file(&args.input)?;
            }
            stats
        }
        _ => {
            let stdout = io::stdout();
            decompress_all(reader, BufWriter::new(stdout.lock()), &config)?
        }
    };

    if args.verbose && !args.quiet {
        eprintln!(
            "gzinflate: {} member(s), {} bytes -> {} bytes",
            stats.members_decoded, stats.input_bytes, stats.output_bytes
        );
    }

    Ok(EXIT_OK)
}

/// Decompresses to a sink and reports validity without ever touching the
/// input file, distinguishing "invalid" (trailer checksum/size mismatch)
/// from "error" (malformed or unreadable stream).
fn run_test_mode(
    args: &Args,
    reader: Box<dyn Read>,
    config: &GunzipConfig,
) -> Result<u8, Error> {
    match decompress_all(reader, io::sink(), config) {
        Ok(stats) => {
            if !args.quiet {
                eprintln!("{}: OK", args.input.display());
            }
            if args.verbose && !args.quiet {
                eprintln!(
                    "gzinflate: {} member(s), {} bytes -> {} bytes",
                    stats.members_decoded, stats.input_bytes, stats.output_bytes
                );
            }
            Ok(EXIT_TEST_VALID)
        }
        Err(e @ (Error::Crc32Mismatch { .. } | Error::SizeMismatch { .. })) => {
            if !args.quiet {
                eprintln!("{}: {}", args.input.display(), e);
            }
            Ok(EXIT_TEST_INVALID)
        }
        Err(e) => Err(e),
    }
}
