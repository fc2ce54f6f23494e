use declopt::Parser;

struct Args {
    thing: String,
    number: i64,
    shout: bool,
}

fn parser() -> Result<Parser, declopt::Error> {
    use declopt::prelude::*;

    let mut parser = Parser::from_env();
    parser
        .option('n', "number", "How many times to say it", Integer)?
        .flag(None, "shout", "Say it loudly")?
        .option('t', "thing", "What to greet", Text)?
        .flag('h', "help", "Show this message")?;
    Ok(parser)
}

fn parse_args(parser: &Parser) -> Result<Option<Args>, declopt::Error> {
    let matches = parser.parse_env()?;
    if matches.get::<bool>("help").unwrap_or(false) {
        println!("Usage: hello [-n|--number=NUM] [--shout] [-t THING]\n");
        print!("{}", parser.help(None)?);
        return Ok(None);
    }
    Ok(Some(Args {
        thing: matches.get("thing").unwrap_or_else(|| "world".to_owned()),
        number: matches.get("number").unwrap_or(1),
        shout: matches.get("shout").unwrap_or(false),
    }))
}

fn main() -> Result<(), declopt::Error> {
    let parser = parser()?;
    let args = match parse_args(&parser) {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("{}", parser.diagnostic(&err));
            std::process::exit(1);
        }
    };
    let mut message = format!("Hello {}", args.thing);
    if args.shout {
        message = message.to_uppercase();
    }
    for _ in 0..args.number {
        println!("{}", message);
    }
    Ok(())
}
