//! Generates the embedded word list constants from the files under data/.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LISTS: &[(&str, &str, &str)] = &[
    (
        "data/answers.txt",
        "ANSWERS",
        "Words eligible as secrets (curated answer list)",
    ),
    (
        "data/allowed.txt",
        "ALLOWED",
        "All allowed guessable words",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for &(input, const_name, doc) in LISTS {
        let source = fs::read_to_string(input)
            .unwrap_or_else(|e| panic!("failed to read {input}: {e}"));
        let words: Vec<&str> = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut generated = String::new();
        writeln!(generated, "/// {doc}").unwrap();
        writeln!(generated, "pub const {const_name}: &[&str] = &[").unwrap();
        for word in &words {
            writeln!(generated, "    {word:?},").unwrap();
        }
        writeln!(generated, "];").unwrap();
        writeln!(generated).unwrap();
        writeln!(generated, "/// Number of words in {const_name}").unwrap();
        writeln!(
            generated,
            "pub const {const_name}_COUNT: usize = {};",
            words.len()
        )
        .unwrap();

        let file_name = format!("{}.rs", const_name.to_lowercase());
        let target = Path::new(&out_dir).join(file_name);
        fs::write(&target, generated)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", target.display()));

        println!("cargo:rerun-if-changed={input}");
    }
}
