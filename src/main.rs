//! CLI tool to tokenize and parse Lox source files.

use std::fs;
use std::process::ExitCode;

/// Conventional exit status for lexical and syntax failures.
const DATA_ERR: u8 = 65;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: lox <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokenize  Scan file(s) and print one line per token");
        eprintln!("  parse     Parse file(s) and print the canonical expression form");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  lox tokenize expr.lox");
        eprintln!("  lox parse expr.lox");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_read_error = false;
    let mut had_source_error = false;

    for path in files {
        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_read_error = true;
                continue;
            }
        };

        match command {
            "tokenize" => {
                let result = lox_rs::scan(&source);
                for err in &result.errors {
                    eprintln!("{err}");
                }
                for token in &result.tokens {
                    println!("{token}");
                }
                if result.had_error() {
                    had_source_error = true;
                }
            }
            "parse" => {
                let result = lox_rs::scan(&source);
                for err in &result.errors {
                    eprintln!("{err}");
                }
                if result.had_error() {
                    had_source_error = true;
                    continue;
                }
                match lox_rs::parse(&result.tokens) {
                    Ok(expr) => println!("{}", lox_rs::print(&expr)),
                    Err(e) => {
                        eprintln!("{e}");
                        had_source_error = true;
                    }
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_source_error {
        ExitCode::from(DATA_ERR)
    } else if had_read_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
