use std::borrow::Cow;
use std::fmt;

/// What the parser was looking for when an alternative failed.
///
/// Payloads are usually `'static` table entries generated next to the
/// grammar; messages built at parse time own their text instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Any single element.
    Any,
    /// An element of a character class, described by its source text, e.g. `[a-z]`.
    Class(Cow<'static, str>),
    /// An exact sequence of elements.
    Literal(Cow<'static, str>),
    /// The end of input.
    Eof,
    /// A message supplied by the grammar author.
    User(Cow<'static, str>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpectedKind {
    Any,
    Class,
    Literal,
    Eof,
    User,
}

impl Expected {
    pub const fn class(description: &'static str) -> Self {
        Self::Class(Cow::Borrowed(description))
    }

    pub const fn literal(text: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(text))
    }

    pub fn user(message: impl Into<Cow<'static, str>>) -> Self {
        Self::User(message.into())
    }

    pub fn kind(&self) -> ExpectedKind {
        match self {
            Self::Any => ExpectedKind::Any,
            Self::Class(_) => ExpectedKind::Class,
            Self::Literal(_) => ExpectedKind::Literal,
            Self::Eof => ExpectedKind::Eof,
            Self::User(_) => ExpectedKind::User,
        }
    }

    /// The textual payload, for the kinds that carry one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Class(text) | Self::Literal(text) | Self::User(text) => Some(&**text),
            Self::Any | Self::Eof => None,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any character"),
            Self::Class(description) => f.write_str(description),
            Self::Literal(text) => write!(f, "\"{}\"", text.escape_debug()),
            Self::Eof => f.write_str("end of input"),
            Self::User(message) => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let rendered = [
            Expected::Any,
            Expected::class("[0-9]"),
            Expected::literal("\r\n"),
            Expected::Eof,
            Expected::user(format!("{} expression", "an")),
        ]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

        assert_eq!(rendered, ["any character", "[0-9]", r#""\r\n""#, "end of input", "an expression"]);
    }

    #[test]
    fn borrowed_and_owned_payloads_are_equal() {
        assert_eq!(Expected::literal("if"), Expected::Literal(Cow::Owned("if".to_owned())));
        assert_ne!(Expected::literal("if"), Expected::user("if"));
        assert_eq!(Expected::user("if").payload(), Some("if"));
        assert_eq!(Expected::Eof.payload(), None);
        assert_eq!(Expected::class("[a]").kind(), ExpectedKind::Class);
    }
}
