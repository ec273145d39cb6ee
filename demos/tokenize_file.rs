//! Example: Tokenize a LISP file
//!
//! Usage: cargo run --example tokenize_file <script.lisp> [encoding]

use lisp_lexer::{Encoding, TokenStream};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example tokenize_file <script.lisp> [encoding]");
        process::exit(1);
    }

    let encoding = match args.get(2).map(|label| label.parse::<Encoding>()) {
        Some(Ok(encoding)) => encoding,
        Some(Err(err)) => {
            eprintln!("{}", err);
            process::exit(1);
        }
        None => Encoding::Utf8,
    };

    let file_path = &args[1];
    let mut stream = match TokenStream::open(file_path, encoding) {
        Ok(stream) => stream,
        Err(err) => {
            eprintln!("Error opening '{}': {}", file_path, err);
            process::exit(1);
        }
    };

    println!("=== Tokens of {} ({}) ===", file_path, encoding);

    let mut count = 0;
    let mut failed = false;
    for token in stream.by_ref() {
        match token {
            Ok(token) => {
                count += 1;
                println!("  {:>4}: {}", count, token);
            }
            Err(err) => {
                eprintln!("Lexer error: {}", err);
                failed = true;
            }
        }
    }
    stream.close();

    if failed {
        process::exit(1);
    }
    println!("\nTokens generated: {}", count);
}
