//! Cereal CLI
//!
//! Tokenizes JSON-like documents and prints the token list.

use cereal::commands::{demo, lex, CliError};
use cereal::options::parse_lex_args;

fn main() {
    cereal::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                print_lex_usage();
                std::process::exit(1);
            }
            parse_lex_args(&args[2..])
                .map_err(CliError::from)
                .and_then(|options| lex(&options))
        }
        "demo" => demo(),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("cereal {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(err) => {
            let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
            eprint!("{}", err.render(color));
            if matches!(err, CliError::Options(_)) {
                eprintln!();
                print_lex_usage();
            }
            std::process::exit(1);
        }
    }
}

fn print_lex_usage() {
    eprintln!("Usage: cereal lex <file | - | --input <text>> [--format=<fmt>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input <text>    Tokenize <text> instead of a file");
    eprintln!("  --format=<fmt>    Output format: display (default), debug, json");
    eprintln!();
    eprintln!("Use '-' as the file to read standard input.");
}

fn print_usage() {
    println!("Cereal - a scanner for JSON-like documents");
    println!();
    println!("Usage: cereal <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Tokenize a document and print its tokens");
    println!("  demo           Tokenize a built-in sample document");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG          Enable logging (e.g. RUST_LOG=cereal_json=trace)");
    println!("  CEREAL_LOG_TREE   Show logs as an indented span tree");
}
