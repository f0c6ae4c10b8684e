//! huffviz: terminal walkthrough of the Huffman codec.
//!
//! Compresses a text and renders what the codec produced at each stage:
//! frequency table, code table, optional tree diagram, packed hex dump,
//! and size metrics. Then runs the inverse (unpack, truncate to the
//! tracked bit length, decode) and verifies the round trip.
//!
//! The codec itself never sees a file or a flag; everything here is the
//! presentation collaborator feeding it complete in-memory texts.

mod config;
mod sample;

use config::{Config, TextSource};
use huffviz_core::{
    compress, decompress, entropy, frequencies, pack, to_hex, unpack, CompressionMetrics, Node,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(1);
        }
    };

    if let Err(message) = run(&config) {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), String> {
    let text = resolve_text(config)?;
    if text.is_empty() {
        return Err("input text is empty: nothing to compress".to_string());
    }

    println!("=== Input ===");
    println!("{} symbols, {} bytes", text.chars().count(), text.len());
    println!("{}", preview(&text));
    println!();

    let freq = frequencies(&text);
    let compressed = compress(&text).map_err(|e| e.to_string())?;
    let table = huffviz_core::code_table(&compressed.tree);

    println!("=== Frequency Table ===");
    for (symbol, count) in freq.iter() {
        // table covers every symbol in freq; the empty code is the
        // single-symbol degenerate case
        let code = table
            .get(symbol)
            .map(|c| c.to_string())
            .unwrap_or_default();
        println!("{symbol:?}  x{count:<6} code: {code}");
    }
    println!();

    if config.print_tree {
        println!("=== Tree ===");
        print_node(&compressed.tree, 0, "root");
        println!();
    }

    let packed = pack(&compressed.bits);

    println!("=== Packed Bytes ===");
    if packed.is_empty() {
        println!("(zero bytes: single-symbol text encodes to zero bits)");
    } else {
        for line in packed.chunks(24) {
            println!("{}", to_hex(line));
        }
    }
    println!();

    let metrics = CompressionMetrics::measure(&text, &compressed.bits);
    metrics.print_summary();
    println!("Entropy: {:.2} bits/symbol", entropy(&freq));
    println!();

    if config.decode {
        // Packed bytes keep no bit count, so the caller tracks it and
        // truncates the pad bits away before decoding.
        let bit_len = compressed.bits.len();
        let mut unpacked = unpack(&packed);
        unpacked.truncate(bit_len);

        let decoded = decompress(&unpacked, &compressed.tree).map_err(|e| e.to_string())?;

        println!("=== Decode ===");
        if let Node::Leaf { symbol, .. } = &compressed.tree {
            // Single-symbol text: zero bits stored, repetition count lost.
            println!(
                "Round trip: not applicable ({symbol:?} encodes to zero bits; \
                 the repetition count is not stored anywhere)"
            );
        } else if decoded == text {
            println!("Round trip: PASSED ({} symbols recovered)", decoded.chars().count());
        } else {
            println!("Round trip: FAILED");
            println!("{}", preview(&decoded));
            return Err("decoded text does not match input".to_string());
        }
    }

    Ok(())
}

/// Resolve the input text from the configured source.
fn resolve_text(config: &Config) -> Result<String, String> {
    match &config.source {
        TextSource::Literal(text) => Ok(text.clone()),
        TextSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display())),
        TextSource::Generated => {
            println!("(generated sample text, seed {})", config.seed);
            println!();
            Ok(sample::generate_sample_text(config.seed, config.sample_chars))
        }
    }
}

/// First line of the text, clipped to 72 symbols.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    let clipped: String = line.chars().take(72).collect();
    if clipped.chars().count() < text.chars().count() {
        format!("{clipped}...")
    } else {
        clipped
    }
}

/// Indented tree diagram: leaves show their symbol, internals their
/// frequency sum.
fn print_node(node: &Node, depth: usize, label: &str) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, frequency } => {
            println!("{indent}{label} -> leaf {symbol:?} (freq {frequency})");
        }
        Node::Internal {
            frequency,
            left,
            right,
        } => {
            println!("{indent}{label} -> internal (freq {frequency})");
            print_node(left, depth + 1, "0");
            print_node(right, depth + 1, "1");
        }
    }
}
