//! Splitting a single argument into its option name and attached value.

/// The shape of one command line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `--name` or `--name=value`.
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },
    /// `-abc` or `-n=value`. The cluster is never empty.
    Shorts {
        cluster: &'a str,
        value: Option<&'a str>,
    },
    /// Anything else, including a bare `-` and `-=value`.
    Stray(&'a str),
}

pub(crate) fn classify(arg: &str) -> Token<'_> {
    if let Some(rest) = arg.strip_prefix("--") {
        let (name, value) = split_value(rest);
        Token::Long { name, value }
    } else if let Some(rest) = arg.strip_prefix('-') {
        match split_value(rest) {
            ("", _) => Token::Stray(arg),
            (cluster, value) => Token::Shorts { cluster, value },
        }
    } else {
        Token::Stray(arg)
    }
}

/// Everything after the first `=` is the value.
fn split_value(text: &str) -> (&str, Option<&str>) {
    match text.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (text, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long() {
        assert_eq!(
            classify("--foo"),
            Token::Long {
                name: "foo",
                value: None
            }
        );
        assert_eq!(
            classify("--foobar=qux=baz"),
            Token::Long {
                name: "foobar",
                value: Some("qux=baz")
            }
        );
        assert_eq!(
            classify("--foo="),
            Token::Long {
                name: "foo",
                value: Some("")
            }
        );
        assert_eq!(
            classify("--"),
            Token::Long {
                name: "",
                value: None
            }
        );
        assert_eq!(
            classify("---x"),
            Token::Long {
                name: "-x",
                value: None
            }
        );
    }

    #[test]
    fn test_shorts() {
        assert_eq!(
            classify("-abc"),
            Token::Shorts {
                cluster: "abc",
                value: None
            }
        );
        assert_eq!(
            classify("-n=10"),
            Token::Shorts {
                cluster: "n",
                value: Some("10")
            }
        );
        assert_eq!(
            classify("-aµ"),
            Token::Shorts {
                cluster: "aµ",
                value: None
            }
        );
        assert_eq!(
            classify("-7"),
            Token::Shorts {
                cluster: "7",
                value: None
            }
        );
    }

    #[test]
    fn test_stray() {
        assert_eq!(classify("foo"), Token::Stray("foo"));
        assert_eq!(classify("-"), Token::Stray("-"));
        assert_eq!(classify("-=x"), Token::Stray("-=x"));
        assert_eq!(classify(""), Token::Stray(""));
        assert_eq!(classify("a-b"), Token::Stray("a-b"));
    }
}
