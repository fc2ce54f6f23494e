#[derive(Debug)]
struct Args {
    follow: bool,
    number: i64,
    sleep: f64,
    file: Option<std::path::PathBuf>,
}

fn parse_args() -> Result<Args, declopt::Error> {
    use declopt::prelude::*;

    let mut parser = Parser::from_env();
    parser
        .flag('f', "follow", "Output appended data as the file grows")?
        .option('n', "lines", "Output the last NUM lines", Integer)?
        .option('s', "sleep-interval", "Seconds between checks with -f", Float)?
        .option(None, "file", "File to read", Text)?
        .flag(None, "help", "Display this help and exit")?;

    // -f and -n stack as in `tail -fn 20`
    let matches = parser.parse_env()?;
    if matches.contains("help") {
        let order = ["lines", "follow", "sleep-interval", "", "file", "help"];
        print!("{}", parser.help(Some(&order[..]))?);
        std::process::exit(0);
    }
    Ok(Args {
        follow: matches.contains("follow"),
        number: matches.get("lines").unwrap_or(10),
        sleep: matches.get("sleep-interval").unwrap_or(1.0),
        file: matches.get::<&str>("file").map(Into::into),
    })
}

fn main() -> Result<(), declopt::Error> {
    let args = parse_args()?;
    println!("{:#?}", args);
    Ok(())
}
