//! Build script to generate the embedded word pool
//!
//! Reads the tab-separated lexicon file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_lexicon(
        "data/lexicon.tsv",
        &Path::new(&out_dir).join("lexicon.rs"),
        "LEXICON",
        "Secret words and their hints, one (word, hint) pair per match",
    );

    // Rebuild if the word pool changes
    println!("cargo:rerun-if-changed=data/lexicon.tsv");
}

fn generate_lexicon(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_once('\t')
                .unwrap_or_else(|| panic!("Missing tab separator in lexicon line: {line}"))
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word pool").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, hint) in entries {
        writeln!(output, "    ({:?}, {:?}),", word.trim(), hint.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
