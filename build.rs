//! Build script to generate embedded seed vocabularies
//!
//! Reads one seed file per word length and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 10;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("seeds.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated seed vocabularies").unwrap();
    writeln!(output).unwrap();

    for length in MIN_LENGTH..=MAX_LENGTH {
        let input_path = format!("seeds/{length}letter.txt");
        generate_seed_list(&mut output, &input_path, length);

        // Rebuild if seed lists change
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(output, "/// Seed tokens keyed by word length").unwrap();
    writeln!(output, "pub const SEEDS: &[(usize, &[&str])] = &[").unwrap();
    for length in MIN_LENGTH..=MAX_LENGTH {
        writeln!(output, "    ({length}, SEEDS_{length}),").unwrap();
    }
    writeln!(output, "];").unwrap();

    println!("cargo:rerun-if-changed=seeds");
}

fn generate_seed_list(output: &mut fs::File, input_path: &str, length: usize) {
    // A missing seed file is an empty bucket, not a build failure
    let content = if Path::new(input_path).exists() {
        fs::read_to_string(input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"))
    } else {
        String::new()
    };

    let tokens: Vec<&str> = content.split_whitespace().collect();

    writeln!(
        output,
        "/// Raw seed tokens for the {length}-letter bucket ({} tokens)",
        tokens.len()
    )
    .unwrap();
    writeln!(output, "pub const SEEDS_{length}: &[&str] = &[").unwrap();

    for token in tokens {
        writeln!(output, "    {token:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
