//! Reads an input name and an output switch, the way a small converter would.
//!
//! Set `RUST_LOG=declopt=debug` to watch the parser at work.

use declopt::{Parser, ValueKind};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut parser = Parser::from_env();
    if let Err(err) = declare(&mut parser) {
        eprintln!("{}", parser.diagnostic(&err));
        std::process::exit(2);
    }

    let matches = match parser.parse_env() {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("{}", parser.diagnostic(&err));
            std::process::exit(1);
        }
    };
    let name = parser.bin_name().unwrap_or("files");

    if matches.get::<bool>("help").unwrap_or(false) {
        match parser.help(Some(&["input", "output", "", "help"][..])) {
            Ok(help) => print!("{}", help),
            Err(err) => {
                eprintln!("{}", parser.diagnostic(&err));
                std::process::exit(2);
            }
        }
        return;
    }

    let output = match matches.get::<bool>("output") {
        Some(output) => output,
        None => {
            eprintln!("{}: option --output is missing", name);
            std::process::exit(1);
        }
    };
    let input = match matches.get::<&str>("input") {
        Some(input) => input,
        None => {
            eprintln!("{}: option --input is missing", name);
            std::process::exit(1);
        }
    };

    println!("{}: --output: {}", name, output);
    println!("{}: --input: {}", name, input);
}

fn declare(parser: &mut Parser) -> Result<(), declopt::Error> {
    parser
        .flag('h', "help", "Display this help message")?
        .option('i', "input", "Input file name", ValueKind::Text)?
        .option('o', "output", "Give output", ValueKind::Boolean)?;
    Ok(())
}
