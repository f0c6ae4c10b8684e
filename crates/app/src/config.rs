//! Configuration for the huffviz walkthrough.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//! The tool works with ZERO arguments: it generates sample text from a
//! time-based seed. Pass --seed to make a run fully reproducible.

use std::path::PathBuf;

/// Where the input text comes from.
#[derive(Debug, Clone)]
pub enum TextSource {
    /// Literal text from --text
    Literal(String),
    /// Read from a file via --in
    File(PathBuf),
    /// Generated sample text (default)
    Generated,
}

/// Complete configuration for a walkthrough run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input text source
    pub source: TextSource,

    /// Seed for sample-text generation
    pub seed: u64,

    /// Length of generated sample text, in symbols
    pub sample_chars: usize,

    /// Whether to print the tree diagram
    pub print_tree: bool,

    /// Whether to run the decode half of the walkthrough
    pub decode: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut text: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut print_tree = false;
        let mut decode = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--print-tree" => {
                    print_tree = true;
                }
                "--no-decode" => {
                    decode = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if text.is_some() && input_file.is_some() {
            return Err("--text and --in are mutually exclusive".to_string());
        }

        let source = match (text, input_file) {
            (Some(t), None) => TextSource::Literal(t),
            (None, Some(p)) => TextSource::File(p),
            _ => TextSource::Generated,
        };

        // Explicit seed or time-based fallback
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            source,
            seed,
            sample_chars: sample_chars.unwrap_or(400),
            print_tree,
            decode,
        })
    }
}

fn print_help() {
    println!("huffviz: Huffman codec walkthrough");
    println!();
    println!("USAGE:");
    println!("    huffviz [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --text <STRING>        Compress this text");
    println!("    --in <PATH>            Compress the contents of a file");
    println!("    --seed <N>             Seed for generated sample text");
    println!("    --sample-chars <N>     Generated sample length (default: 400)");
    println!();
    println!("    --print-tree           Print the tree diagram");
    println!("    --no-decode            Skip the decode half of the walkthrough");
    println!("    --help, -h             Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffviz                          # Random sample text");
    println!("    huffviz --seed 42 --print-tree   # Deterministic run with diagram");
    println!("    huffviz --text 'aabb'            # Walk through a specific text");
    println!();
}
