use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::parser::{Outcome, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// The parser first checks that as many characters remain as the literal
/// has, failing with `EndOfInput` otherwise, and only then compares them.
/// The output is the matched slice of the input.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
    length: usize,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let length = expected.chars().count();
        Literal { expected, length }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        if !cursor.has_available(self.length) {
            return Err(cursor.error(
                ErrorKind::EndOfInput,
                format!(
                    "expected {:?}, but reached end of input",
                    self.expected
                ),
            ));
        }

        let found = cursor.consume(self.length)?;
        if found == self.expected {
            Ok((found, cursor.advance_bytes(found.len())))
        } else {
            Err(cursor.error(
                ErrorKind::UnexpectedLiteral {
                    expected: self.expected.to_string(),
                    found: found.to_string(),
                },
                format!("expected {:?}, found {:?}", self.expected, found),
            ))
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let cursor = Cursor::new("hello");

        let (matched, cursor) = literal("hello").parse(cursor).unwrap();
        assert_eq!(matched, "hello");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let cursor = Cursor::new("hello world");

        let (matched, cursor) = literal("hello").parse(cursor).unwrap();
        assert_eq!(matched, "hello");
        assert_eq!(cursor.rest(), " world");
    }

    #[test]
    fn test_unicode_string() {
        let cursor = Cursor::new("こんにちは世界");

        let (matched, cursor) = literal("こんにちは").parse(cursor).unwrap();
        assert_eq!(matched, "こんにちは");
        assert_eq!(cursor.peek().unwrap(), '世');
    }

    #[test]
    fn test_empty_literal() {
        let cursor = Cursor::new("hello");

        let (matched, after) = literal("").parse(cursor).unwrap();
        assert_eq!(matched, "");
        // Cursor should not advance for empty string
        assert_eq!(after, cursor);
    }

    #[test]
    fn test_mismatch() {
        let error = literal("hello").parse(Cursor::new("help!")).unwrap_err();

        assert_eq!(
            error.kind,
            ErrorKind::UnexpectedLiteral {
                expected: "hello".to_string(),
                found: "help!".to_string()
            }
        );
        assert_eq!(error.position, 0);
        assert_eq!(error.message, "expected \"hello\", found \"help!\"");
    }

    #[test]
    fn test_insufficient_input() {
        // A shorter prefix of the literal is end of input, not a mismatch
        let error = literal("hello").parse(Cursor::new("hel")).unwrap_err();

        assert_eq!(error.kind, ErrorKind::EndOfInput);
        assert!(error.message.contains("reached end of input"));
    }

    #[test]
    fn test_insufficient_input_with_mismatch() {
        let error = literal("hello").parse(Cursor::new("xy")).unwrap_err();
        assert_eq!(error.kind, ErrorKind::EndOfInput);
    }

    #[test]
    fn test_owned_literal() {
        let keyword = String::from("let");
        let cursor = Cursor::new("let x");

        let (matched, _) = literal(keyword).parse(cursor).unwrap();
        assert_eq!(matched, "let");
    }
}
