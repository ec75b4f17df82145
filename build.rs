//! Build script that embeds the default word lists
//!
//! Each list in `data/` becomes a `pub const NAME: &[&str]` in `OUT_DIR`, which
//! `src/wordlists/embedded.rs` pulls in with `include!`.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const LISTS: [(&str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "ANSWERS",
        "Words that can be the hidden answer",
    ),
    (
        "data/allowed.txt",
        "ALLOWED",
        "Every word accepted as a guess (answers included)",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));

    for (input, const_name, doc) in LISTS {
        let output = Path::new(&out_dir).join(format!("{}.rs", const_name.to_lowercase()));
        if let Err(e) = embed_list(input, &output, const_name, doc) {
            panic!("Failed to embed {input} into {}: {e}", output.display());
        }
        println!("cargo:rerun-if-changed={input}");
    }
}

fn embed_list(input: &str, output: &Path, const_name: &str, doc: &str) -> io::Result<()> {
    let content = fs::read_to_string(input)?;
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut out = BufWriter::new(fs::File::create(output)?);
    writeln!(out, "// Generated from {input} by build.rs")?;
    writeln!(out)?;
    writeln!(out, "/// {doc} ({} words)", words.len())?;
    writeln!(out, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(out, "    \"{word}\",")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Number of words in {const_name}")?;
    writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len())?;
    out.flush()
}
