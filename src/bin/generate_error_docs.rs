//! Generate error code documentation from the error enums themselves.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use mkpuzzle::errors::LoadError;
use mkpuzzle::generator::GenerateError;
use std::path::PathBuf;
use std::time::Duration;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_load_error_variants() -> Vec<LoadError> {
    vec![
        LoadError::MalformedRecord { line_number: 3, line: "CAT".to_string() },
        LoadError::EmptyHint { line_number: 5, word: "DOG".to_string() },
        LoadError::InvalidLetter { line_number: 2, word: "ICE-CREAM".to_string(), invalid_char: '-' },
        LoadError::EmptyClueList,
        LoadError::Io {
            path: PathBuf::from("clues.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

fn all_generate_error_variants() -> Vec<GenerateError> {
    vec![
        GenerateError::InvalidSize { size: 0 },
        GenerateError::EmptyClueList,
        GenerateError::UnplaceableInitialWord { word: "ZZZZZZZZZZZZ".to_string(), size: 3 },
        GenerateError::NoSolutionFound { placed: 2, total: 3 },
        GenerateError::TimedOut { elapsed: Duration::from_secs(30) },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Generation Errors (G001–G005)](#generation-errors)");
    println!("- [Clue List Errors (L001–L005)](#clue-list-errors)\n");

    println!("## Generation Errors\n");
    println!("Errors from building the grid. Only `G004` and `G005` depend on the search itself.\n");
    generate_error_docs!(all_generate_error_variants());

    println!("## Clue List Errors\n");
    println!("Errors while reading the `WORD hint` clue file.\n");
    generate_error_docs!(all_load_error_variants());
}
