//! mzip: command-line Huffman archiver.
//!
//! Compresses one file per invocation. The input path comes from the first
//! positional argument, or from a console prompt when none is given.

use anyhow::{anyhow, bail, Context, Result};
use mzip_compress::config::EncoderConfig;
use mzip_compress::Encoder;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    stats: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("--out requires a path".to_string());
                }
                cli.output = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a path".to_string());
                }
                cli.config = Some(PathBuf::from(&args[i]));
            }
            "--stats" => {
                cli.stats = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if arg.starts_with("--") => {
                return Err(format!("unknown argument: {arg}"));
            }
            arg => {
                if cli.input.is_some() {
                    return Err("only one input file per run".to_string());
                }
                cli.input = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }
    Ok(cli)
}

fn prompt_for_input() -> Result<PathBuf> {
    print!("Enter the name of the file that you want to read from: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("no file name given");
    }
    Ok(PathBuf::from(name))
}

fn print_help() {
    println!("mzip: Huffman prefix-code file compressor");
    println!();
    println!("USAGE:");
    println!("    mzip [FILE] [OPTIONS]");
    println!();
    println!("    With no FILE, the input path is read from a console prompt.");
    println!();
    println!("OPTIONS:");
    println!("    --out <PATH>       Archive destination (default: FILE with the .MZIP extension)");
    println!("    --config <PATH>    JSON encoder configuration");
    println!("    --stats            Print the encode summary as JSON");
    println!("    --help, -h         Print this help");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args).map_err(|e| anyhow!(e))?;

    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_input()?,
    };

    let config = match cli.config {
        Some(path) => EncoderConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EncoderConfig::default(),
    };

    let encoder = Encoder::new(config);
    let summary = encoder
        .encode_file_to(&input, cli.output.as_deref())
        .with_context(|| format!("compressing {}", input.display()))?;

    println!(
        "{} -> {} ({} -> {} bytes, {:.1}% of original)",
        summary.source,
        summary.output.display(),
        summary.original_size,
        summary.compressed_size,
        summary.ratio * 100.0
    );
    if cli.stats {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_positional_input() {
        let cli = parse_args(&strings(&["notes.txt"])).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("notes.txt")));
        assert!(cli.output.is_none());
        assert!(!cli.stats);
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse_args(&strings(&["a.bin", "--out", "b.MZIP", "--stats"])).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("b.MZIP")));
        assert!(cli.stats);
    }

    #[test]
    fn test_parse_rejects_second_input() {
        assert!(parse_args(&strings(&["a.bin", "b.bin"])).is_err());
    }

    #[test]
    fn test_parse_rejects_dangling_out() {
        assert!(parse_args(&strings(&["a.bin", "--out"])).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(parse_args(&strings(&["--frobnicate"])).is_err());
    }
}
