use std::collections::HashMap;

use crate::{FromValue, Value};

/// The options found by [`Parser::parse`][crate::Parser::parse], keyed by
/// long name.
///
/// An option that appears more than once keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matches {
    values: HashMap<String, Value>,
}

impl Matches {
    pub(crate) fn insert(&mut self, long: &str, value: Value) {
        self.values.insert(long.to_owned(), value);
    }

    /// Get the value of an option as a particular type.
    ///
    /// Returns `None` if the option was not given, is not declared, or has a
    /// value of another kind. See [`FromValue`] for the available types.
    ///
    /// ```
    /// # use declopt::{Parser, ValueKind};
    /// # fn main() -> Result<(), declopt::Error> {
    /// let mut parser = Parser::new("demo");
    /// parser.option('n', "number", "How many", ValueKind::Integer)?;
    /// let matches = parser.parse(["-n", "3"])?;
    /// assert_eq!(matches.get::<i64>("number"), Some(3));
    /// assert_eq!(matches.get::<&str>("number"), None);
    /// # Ok(()) }
    /// ```
    pub fn get<'a, T: FromValue<'a>>(&'a self, long: &str) -> Option<T> {
        self.values.get(long).and_then(T::from_value)
    }

    /// Get the raw value of an option.
    pub fn value(&self, long: &str) -> Option<&Value> {
        self.values.get(long)
    }

    /// Whether the option was given, whatever its kind.
    pub fn contains(&self, long: &str) -> bool {
        self.values.contains_key(long)
    }

    /// The number of distinct options that were given.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options were given.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All options that were given, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(long, value)| (long.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut matches = Matches::default();
        matches.insert("count", Value::Integer(1));
        matches.insert("count", Value::Integer(2));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.get::<i64>("count"), Some(2));
    }

    #[test]
    fn test_absent() {
        let mut matches = Matches::default();
        assert!(matches.is_empty());
        assert_eq!(matches.get::<bool>("help"), None);
        assert_eq!(matches.value("help"), None);

        matches.insert("help", Value::Present);
        matches.insert("name", Value::Text("x".into()));
        assert!(matches.contains("help"));
        assert_eq!(matches.get::<bool>("help"), Some(true));
        assert_eq!(matches.get::<i64>("help"), None);
        assert_eq!(matches.get::<f64>("name"), None);
        assert_eq!(matches.get::<String>("name").as_deref(), Some("x"));

        let mut seen: Vec<_> = matches.iter().map(|(long, _)| long).collect();
        seen.sort_unstable();
        assert_eq!(seen, ["help", "name"]);
    }
}
