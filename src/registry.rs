use std::collections::HashMap;
use std::fmt::Display;

use tracing::debug;

use crate::Error;

/// The kind of value an option's argument is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A base-10 integer, stored as `i64`.
    Integer,
    /// A decimal or scientific floating point number, stored as `f64`.
    Float,
    /// Exactly `true` or `false`.
    Boolean,
    /// Any text, kept as is.
    Text,
}

impl ValueKind {
    pub(crate) fn article(self) -> &'static str {
        match self {
            ValueKind::Integer => "an",
            ValueKind::Float | ValueKind::Boolean | ValueKind::Text => "a",
        }
    }

    /// Placeholder used in help listings, e.g. `--count=INT`.
    pub(crate) fn placeholder(self) -> &'static str {
        match self {
            ValueKind::Integer => "INT",
            ValueKind::Float => "NUM",
            ValueKind::Boolean => "BOOL",
            ValueKind::Text => "TEXT",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Text => "text",
        })
    }
}

/// Whether an option takes an argument, and of which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A plain flag, e.g. `--verbose`.
    Flag,
    /// An option that requires an argument, e.g. `--count 3`.
    Value(ValueKind),
}

/// A declared option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDef {
    long: String,
    short: Option<char>,
    description: String,
    arity: Arity,
}

impl OptionDef {
    /// An option that takes no argument.
    pub fn flag(long: impl Into<String>, description: impl Into<String>) -> OptionDef {
        OptionDef {
            long: long.into(),
            short: None,
            description: description.into(),
            arity: Arity::Flag,
        }
    }

    /// An option that requires an argument of the given kind.
    pub fn valued(
        long: impl Into<String>,
        description: impl Into<String>,
        kind: ValueKind,
    ) -> OptionDef {
        OptionDef {
            long: long.into(),
            short: None,
            description: description.into(),
            arity: Arity::Value(kind),
        }
    }

    /// Add a single-character alias.
    pub fn with_short(mut self, short: char) -> OptionDef {
        self.short = Some(short);
        self
    }

    /// The long name, without dashes. Parsed values are stored under it.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The short name, if any.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Text for help listings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the option takes an argument.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Shorthand for `arity() != Arity::Flag`.
    pub fn requires_argument(&self) -> bool {
        matches!(self.arity, Arity::Value(_))
    }

    /// The kind of the argument, or `None` for flags.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self.arity {
            Arity::Flag => None,
            Arity::Value(kind) => Some(kind),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let long = &self.long;
        if long.is_empty()
            || long.starts_with('-')
            || long.contains('=')
            || long.contains(char::is_whitespace)
        {
            return Err(Error::InvalidLong(long.clone()));
        }
        match self.short {
            Some(ch) if ch == '-' || ch == '=' || ch.is_whitespace() => {
                Err(Error::InvalidShort(ch))
            }
            _ => Ok(()),
        }
    }
}

/// The set of declared options.
///
/// Options are kept in declaration order and indexed by both names.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    options: Vec<OptionDef>,
    by_long: HashMap<String, usize>,
    by_short: HashMap<char, usize>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Declare an option.
    ///
    /// Fails if the long name or the short name is already taken, or if
    /// either is malformed. The registry is unchanged on failure.
    pub fn register(&mut self, def: OptionDef) -> Result<(), Error> {
        def.validate()?;
        if self.by_long.contains_key(&def.long) {
            return Err(Error::DuplicateLong { long: def.long });
        }
        if let Some(short) = def.short {
            if let Some(&index) = self.by_short.get(&short) {
                return Err(Error::DuplicateShort {
                    short,
                    existing: self.options[index].long.clone(),
                    long: def.long,
                });
            }
        }

        debug!(long = %def.long, short = ?def.short, arity = ?def.arity, "registered option");
        let index = self.options.len();
        self.by_long.insert(def.long.clone(), index);
        if let Some(short) = def.short {
            self.by_short.insert(short, index);
        }
        self.options.push(def);
        Ok(())
    }

    /// Find an option by its long name.
    pub fn lookup(&self, long: &str) -> Option<&OptionDef> {
        self.by_long.get(long).map(|&index| &self.options[index])
    }

    /// Find an option by its short name.
    pub fn lookup_short(&self, short: char) -> Option<&OptionDef> {
        self.by_short.get(&short).map(|&index| &self.options[index])
    }

    /// All options, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDef> + '_ {
        self.options.iter()
    }

    /// The number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Result<Registry, Error> {
        let mut registry = Registry::new();
        registry.register(OptionDef::flag("help", "Show help").with_short('h'))?;
        registry.register(OptionDef::valued("input", "Input file", ValueKind::Text).with_short('i'))?;
        registry.register(OptionDef::valued("depth", "Depth", ValueKind::Integer))?;
        Ok(registry)
    }

    #[test]
    fn test_lookup() -> Result<(), Error> {
        let registry = sample()?;
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup("input").unwrap().short(), Some('i'));
        assert_eq!(registry.lookup_short('h').unwrap().long(), "help");
        assert_eq!(
            registry.lookup("depth").unwrap().value_kind(),
            Some(ValueKind::Integer)
        );
        assert!(!registry.lookup("help").unwrap().requires_argument());
        assert!(registry.lookup("missing").is_none());
        assert!(registry.lookup_short('d').is_none());
        assert!(registry.lookup("").is_none());
        Ok(())
    }

    #[test]
    fn test_declaration_order() -> Result<(), Error> {
        let registry = sample()?;
        let names: Vec<_> = registry.iter().map(OptionDef::long).collect();
        assert_eq!(names, ["help", "input", "depth"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_long() -> Result<(), Error> {
        let mut registry = sample()?;
        match registry.register(OptionDef::flag("help", "again")) {
            Err(Error::DuplicateLong { long }) => assert_eq!(long, "help"),
            _ => panic!(),
        }
        // A different short name doesn't make it unique
        match registry.register(OptionDef::flag("input", "again").with_short('x')) {
            Err(Error::DuplicateLong { long }) => assert_eq!(long, "input"),
            _ => panic!(),
        }
        assert_eq!(registry.len(), 3);
        assert!(registry.lookup_short('x').is_none());
        Ok(())
    }

    #[test]
    fn test_duplicate_short() -> Result<(), Error> {
        let mut registry = sample()?;
        match registry.register(OptionDef::flag("hidden", "").with_short('h')) {
            Err(Error::DuplicateShort {
                short,
                existing,
                long,
            }) => {
                assert_eq!(short, 'h');
                assert_eq!(existing, "help");
                assert_eq!(long, "hidden");
            }
            _ => panic!(),
        }
        assert!(registry.lookup("hidden").is_none());

        // Options without a short name never collide with each other
        registry.register(OptionDef::flag("quiet", ""))?;
        registry.register(OptionDef::flag("loud", ""))?;
        Ok(())
    }

    #[test]
    fn test_malformed_names() {
        let mut registry = Registry::new();
        for long in ["", "-x", "--x", "a=b", "two words"] {
            match registry.register(OptionDef::flag(long, "")) {
                Err(Error::InvalidLong(name)) => assert_eq!(name, long),
                _ => panic!("{:?} was accepted", long),
            }
        }
        for short in ['-', '=', ' '] {
            match registry.register(OptionDef::flag("ok", "").with_short(short)) {
                Err(Error::InvalidShort(ch)) => assert_eq!(ch, short),
                _ => panic!("{:?} was accepted", short),
            }
        }
        assert!(registry.is_empty());
    }
}
