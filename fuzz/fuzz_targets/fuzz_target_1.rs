#![no_main]
use declopt::{Error, Parser, UnknownShorts, ValueKind};
use libfuzzer_sys::fuzz_target;
use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

fn parser(policy: UnknownShorts) -> Result<Parser, Error> {
    let mut parser = Parser::new("fuzz");
    parser
        .unknown_shorts(policy)
        .flag('a', "all", "")?
        .flag('b', "brief", "")?
        .option('n', "number", "", ValueKind::Integer)?
        .option('r', "ratio", "", ValueKind::Float)?
        .option('y', "yes", "", ValueKind::Boolean)?
        .option('f', "file", "", ValueKind::Text)?
        .option(None, "name", "", ValueKind::Text)?;
    Ok(parser)
}

// We check some basic invariants but mainly make sure that it
// doesn't panic or hang.
fuzz_target!(|data: &[u8]| {
    let (policy, data) = match data.split_first() {
        Some((&first, rest)) if first % 2 == 1 => (UnknownShorts::Reject, rest),
        Some((_, rest)) => (UnknownShorts::Ignore, rest),
        None => (UnknownShorts::Ignore, data),
    };
    let args: Vec<OsString> = data
        // Arguments can't contain null bytes (on Unix) so it's a
        // reasonable separator
        .split(|&x| x == b'\0')
        .map(|arg| OsString::from_vec(arg.to_vec()))
        .collect();

    let parser = parser(policy).unwrap();
    let first = parser.parse(args.clone());
    let second = parser.parse(args);
    match (first, second) {
        (Ok(first), Ok(second)) => {
            assert_eq!(first, second);
            for (long, _) in first.iter() {
                assert!(parser.registry().lookup(long).is_some());
            }
        }
        (Err(first), Err(second)) => {
            assert!(!first.is_declaration());
            assert_eq!(first.to_string(), second.to_string());
        }
        _ => panic!("parsing is not deterministic"),
    }
});
