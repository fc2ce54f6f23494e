//! A declarative command line option parser.
//!
//! You declare the options a program understands, with their short and long
//! names and the kind of value they take. The parser then checks a command
//! line against that declaration in one pass and hands back typed values,
//! or an error that names the offending option.
//!
//! Supported syntax:
//! - Long options: `--name`, `--name=value`, `--name value`
//! - Short options: `-n`, `-n=value`, `-n value`
//! - Stacked short options: `-abc`, where at most one of them takes a value
//!   from the next argument
//!
//! Values are converted to [`ValueKind::Integer`], [`ValueKind::Float`],
//! [`ValueKind::Boolean`] or [`ValueKind::Text`] as declared.
//!
//! ## Example
//! ```no_run
//! use declopt::{Parser, ValueKind};
//!
//! fn main() -> Result<(), declopt::Error> {
//!     let mut parser = Parser::from_env();
//!     parser
//!         .flag('h', "help", "Display this help message")?
//!         .option('n', "number", "Number of lines", ValueKind::Integer)?
//!         .option(None, "name", "Who to greet", ValueKind::Text)?;
//!
//!     let matches = match parser.parse_env() {
//!         Ok(matches) => matches,
//!         Err(err) => {
//!             eprintln!("{}", parser.diagnostic(&err));
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     if matches.get::<bool>("help").unwrap_or(false) {
//!         print!("{}", parser.help(None)?);
//!         return Ok(());
//!     }
//!     let number = matches.get::<i64>("number").unwrap_or(1);
//!     let name = matches.get::<&str>("name").unwrap_or("world");
//!     for _ in 0..number {
//!         println!("Hello {}", name);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::ffi::OsString;

use tracing::{debug, trace};

mod error;
mod help;
mod registry;
mod store;
mod token;
mod value;

pub use error::Error;
pub use registry::{Arity, OptionDef, Registry, ValueKind};
pub use store::Matches;
pub use value::{FromValue, Value};

use token::Token;

/// What to do with short options that were never declared.
///
/// Unknown long options are always an error. Unknown short options are
/// skipped by default, which is the traditional behaviour of this parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownShorts {
    /// Skip them and leave the matches untouched.
    #[default]
    Ignore,
    /// Fail with [`Error::UnknownOption`], like long options do.
    Reject,
}

/// A parser for command line options.
#[derive(Debug, Clone)]
pub struct Parser {
    bin_name: Option<String>,
    registry: Registry,
    unknown_shorts: UnknownShorts,
}

impl Parser {
    /// Create a parser with a program name for diagnostics.
    pub fn new(bin_name: impl Into<String>) -> Parser {
        Parser {
            bin_name: Some(bin_name.into()),
            registry: Registry::new(),
            unknown_shorts: UnknownShorts::default(),
        }
    }

    /// Create a parser named after the first element of
    /// [`std::env::args_os`].
    ///
    /// If that is missing or not valid unicode the parser has no name.
    pub fn from_env() -> Parser {
        Parser {
            bin_name: std::env::args_os().next().and_then(|arg| arg.into_string().ok()),
            registry: Registry::new(),
            unknown_shorts: UnknownShorts::default(),
        }
    }

    /// The name used in [`diagnostic`][Parser::diagnostic].
    pub fn bin_name(&self) -> Option<&str> {
        self.bin_name.as_deref()
    }

    /// Choose how unknown short options are treated.
    pub fn unknown_shorts(&mut self, policy: UnknownShorts) -> &mut Parser {
        self.unknown_shorts = policy;
        self
    }

    /// Declare an option. See [`Registry::register`].
    pub fn register(&mut self, def: OptionDef) -> Result<&mut Parser, Error> {
        self.registry.register(def)?;
        Ok(self)
    }

    /// Declare an option that takes no argument.
    ///
    /// `short` is a `char` or `None`.
    pub fn flag(
        &mut self,
        short: impl Into<Option<char>>,
        long: &str,
        description: &str,
    ) -> Result<&mut Parser, Error> {
        self.register(with_short(OptionDef::flag(long, description), short.into()))
    }

    /// Declare an option that requires an argument of the given kind.
    ///
    /// `short` is a `char` or `None`.
    pub fn option(
        &mut self,
        short: impl Into<Option<char>>,
        long: &str,
        description: &str,
        kind: ValueKind,
    ) -> Result<&mut Parser, Error> {
        self.register(with_short(
            OptionDef::valued(long, description, kind),
            short.into(),
        ))
    }

    /// The declared options.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse the process's own arguments, skipping the program name.
    pub fn parse_env(&self) -> Result<Matches, Error> {
        self.parse(std::env::args_os().skip(1))
    }

    /// Parse a command line. The program name must not be included.
    ///
    /// Every argument has to be an option or the value of the option before
    /// it. The first problem aborts parsing.
    pub fn parse<I>(&self, args: I) -> Result<Matches, Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(|arg| {
            let arg: OsString = arg.into();
            arg.into_string().map_err(Error::NonUnicodeArgument)
        });
        let mut matches = Matches::default();

        while let Some(arg) = args.next() {
            let arg = arg?;
            trace!(arg = %arg, "next argument");
            // Holds the following argument if it gets consumed as a value
            let next: Option<String>;

            match token::classify(&arg) {
                Token::Long { name, value } => {
                    let flag = format!("--{}", name);
                    let def = self
                        .registry
                        .lookup(name)
                        .ok_or_else(|| Error::UnknownOption { flag: flag.clone() })?;
                    let value = match value {
                        None if def.requires_argument() => {
                            next = args.next().transpose()?;
                            next.as_deref()
                        }
                        value => value,
                    };
                    store_value(&mut matches, def, &flag, value)?;
                }
                Token::Shorts { cluster, value } => {
                    let defs = self.resolve_shorts(cluster, value)?;
                    // Decided once for the whole cluster, so at most one
                    // argument is consumed
                    let value = match value {
                        None if defs.iter().any(|(_, def)| def.requires_argument()) => {
                            next = args.next().transpose()?;
                            next.as_deref()
                        }
                        value => value,
                    };
                    for (short, def) in defs {
                        store_value(&mut matches, def, &format!("-{}", short), value)?;
                    }
                }
                Token::Stray(arg) => return Err(Error::UnrecognizedFormat(arg.into())),
            }
        }

        debug!(found = matches.len(), "parsed command line");
        Ok(matches)
    }

    /// Look up each character of a short option cluster.
    fn resolve_shorts(
        &self,
        cluster: &str,
        value: Option<&str>,
    ) -> Result<Vec<(char, &OptionDef)>, Error> {
        let stacked = cluster.chars().nth(1).is_some();
        if stacked && value.is_some() {
            return Err(Error::StackedValue {
                cluster: cluster.into(),
            });
        }

        let mut defs = Vec::new();
        for short in cluster.chars() {
            match self.registry.lookup_short(short) {
                Some(def) => defs.push((short, def)),
                None => match self.unknown_shorts {
                    UnknownShorts::Ignore => debug!(%short, "ignoring unknown short option"),
                    UnknownShorts::Reject => {
                        return Err(Error::UnknownOption {
                            flag: format!("-{}", short),
                        })
                    }
                },
            }
        }

        if defs.iter().filter(|(_, def)| def.requires_argument()).count() > 1 {
            return Err(Error::AmbiguousStack {
                cluster: cluster.into(),
            });
        }
        Ok(defs)
    }

    /// List the declared options.
    ///
    /// Without an order every option is listed in declaration order. With an
    /// order only the named options are listed, and `""` adds a blank line.
    /// Naming an undeclared option fails with [`Error::UnknownHelpEntry`].
    pub fn help(&self, order: Option<&[&str]>) -> Result<String, Error> {
        help::render(&self.registry, order)
    }

    /// Format an error for display to the user, prefixed with the program
    /// name if there is one.
    pub fn diagnostic(&self, err: &Error) -> String {
        match self.bin_name() {
            Some(bin_name) => format!("{}: {}", bin_name, err),
            None => err.to_string(),
        }
    }
}

fn with_short(def: OptionDef, short: Option<char>) -> OptionDef {
    match short {
        Some(short) => def.with_short(short),
        None => def,
    }
}

/// Convert and store the value for one option.
///
/// An empty value counts as a missing one.
fn store_value(
    matches: &mut Matches,
    def: &OptionDef,
    flag: &str,
    value: Option<&str>,
) -> Result<(), Error> {
    match def.arity() {
        Arity::Flag => {
            if let Some(value) = value {
                debug!(flag, value, "flag does not take a value, ignoring it");
            }
            matches.insert(def.long(), Value::Present);
        }
        Arity::Value(kind) => {
            let value = match value {
                Some(value) if !value.is_empty() => value,
                _ => return Err(Error::MissingValue { flag: flag.into() }),
            };
            let value = value::coerce(value, kind).map_err(|err| Error::InvalidValue {
                flag: flag.into(),
                kind: err.kind,
                value: err.token,
            })?;
            matches.insert(def.long(), value);
        }
    }
    Ok(())
}

/// A small prelude for declaring options.
///
/// It allows you to write `Integer`/`Float`/`Boolean`/`Text` without a
/// [`ValueKind`] prefix.
///
/// If this is used it's best to import it inside a function, not in module
/// scope. For example:
/// ```ignore
/// fn parser() -> Result<declopt::Parser, declopt::Error> {
///     use declopt::prelude::*;
///     ...
/// }
/// ```
pub mod prelude {
    pub use super::ValueKind::*;
    pub use super::{Parser, UnknownShorts};
}
