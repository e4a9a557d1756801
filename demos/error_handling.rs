//! Demonstrate error handling for invalid Lox input.

fn main() {
    // Unterminated string: recorded during the scan, scan continues
    let result = lox_rs::scan("1 + \"unclosed");
    for err in &result.errors {
        println!("Scan error: {err}");
        println!("  Kind: {:?}", err.kind);
        println!(
            "  Location: line {}, column {}",
            err.span.line, err.span.column
        );
    }
    println!("  Tokens still produced: {}", result.tokens.len());

    println!();

    // Missing closing parenthesis: terminal for the parse call
    match lox_rs::parse_str("(1 + 2") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(lox_rs::Error::Scan(e)) => {
            println!("Scan error: {e}");
        }
        Err(lox_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
    }
}
