use std::ffi::OsString;

use crate::ValueKind;

/// An error during option declaration or argument parsing.
///
/// Declaration errors ([`Error::is_declaration`]) point at a mistake in the
/// program that set up the [`Parser`][crate::Parser]. Everything else is
/// caused by the command line and is meant to be shown to the user.
#[non_exhaustive]
#[derive(thiserror::Error)]
pub enum Error {
    /// Two options were declared with the same long name.
    #[error("option '--{long}' is declared more than once")]
    DuplicateLong {
        /// The long name.
        long: String,
    },

    /// Two options were declared with the same short name.
    #[error("short option '-{short}' is declared by both '--{existing}' and '--{long}'")]
    DuplicateShort {
        /// The short name.
        short: char,
        /// The option that claimed it first.
        existing: String,
        /// The option that tried to claim it.
        long: String,
    },

    /// A long name is empty, starts with `-` or contains `=` or whitespace.
    #[error("invalid long option name {0:?}")]
    InvalidLong(String),

    /// A short name is `-`, `=` or whitespace.
    #[error("invalid short option name {0:?}")]
    InvalidShort(char),

    /// An argument that isn't shaped like an option.
    #[error("unrecognized option format: {0:?}")]
    UnrecognizedFormat(String),

    /// An option that was never declared.
    #[error("unknown option '{flag}'")]
    UnknownOption {
        /// The option as written, with dashes.
        flag: String,
    },

    /// An option that takes a value got none.
    #[error("option '{flag}' requires an argument")]
    MissingValue {
        /// The option as written, with dashes.
        flag: String,
    },

    /// An option value didn't match the declared kind.
    #[error("option '{flag}' requires {} {kind} argument, found {value:?}", .kind.article())]
    InvalidValue {
        /// The option as written, with dashes.
        flag: String,
        /// The declared kind.
        kind: ValueKind,
        /// The offending value.
        value: String,
    },

    /// A value was attached with `=` to a group of short options, as in `-abc=10`.
    #[error("stacked short options '-{cluster}' cannot take an attached argument")]
    StackedValue {
        /// The short options, without the dash.
        cluster: String,
    },

    /// More than one short option in a group takes a value, as in `-io`.
    #[error("stacked short options '-{cluster}' contain more than one option that requires an argument")]
    AmbiguousStack {
        /// The short options, without the dash.
        cluster: String,
    },

    /// An argument that is not valid unicode.
    #[error("argument is invalid unicode: {0:?}")]
    NonUnicodeArgument(OsString),

    /// A help listing named an option that was never declared.
    #[error("'{name}' is not an existing option")]
    UnknownHelpEntry {
        /// The requested name.
        name: String,
    },
}

impl Error {
    /// Whether this error comes from declaring options rather than from
    /// parsing a command line.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Error::DuplicateLong { .. }
                | Error::DuplicateShort { .. }
                | Error::InvalidLong(_)
                | Error::InvalidShort(_)
        )
    }
}

// This is printed when returning an error from main(), so defer to Display
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidValue {
            flag: "--count".into(),
            kind: ValueKind::Integer,
            value: "12abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "option '--count' requires an integer argument, found \"12abc\""
        );
        assert_eq!(format!("{:?}", err), err.to_string());

        let err = Error::InvalidValue {
            flag: "-o".into(),
            kind: ValueKind::Boolean,
            value: "True".into(),
        };
        assert_eq!(
            err.to_string(),
            "option '-o' requires a boolean argument, found \"True\""
        );

        let err = Error::MissingValue {
            flag: "--input".into(),
        };
        assert_eq!(err.to_string(), "option '--input' requires an argument");
    }

    #[test]
    fn test_categories() {
        assert!(Error::DuplicateLong { long: "x".into() }.is_declaration());
        assert!(Error::InvalidShort('=').is_declaration());
        assert!(!Error::UnknownOption { flag: "--x".into() }.is_declaration());
        assert!(!Error::UnknownHelpEntry { name: "x".into() }.is_declaration());
    }
}
