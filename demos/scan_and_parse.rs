//! Scan a Lox expression, list its tokens, and print the canonical form.

fn main() {
    let input = "-123 * (45.67 + 2)";

    let result = lox_rs::scan(input);
    println!("Tokens:");
    for token in &result.tokens {
        println!("  {token}");
    }

    let expr = lox_rs::parse(&result.tokens).expect("parse failed");
    println!("\nCanonical form:\n{}", lox_rs::print(&expr));
}
