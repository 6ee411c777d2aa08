use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::parser::{Outcome, Parser};

/// Parser that consumes and returns any single character
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let ch = cursor.peek()?;
        Ok((ch, cursor.advance_bytes(ch.len_utf8())))
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific character
#[derive(Debug, Clone, Copy)]
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.peek()? {
            ch if ch == self.expected => Ok((ch, cursor.advance_bytes(ch.len_utf8()))),
            found => Err(cursor.error(
                ErrorKind::UnexpectedChar {
                    expected: self.expected.to_string(),
                    found,
                },
                format!("expected {:?}, found {:?}", self.expected, found),
            )),
        }
    }
}

/// Convenience function to create an IsChar parser
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}

/// Parser that matches one character satisfying a predicate
///
/// `expected` describes the accepted class in failure messages, e.g.
/// `"digit"`.
#[derive(Debug, Clone)]
pub struct CharWhere<F> {
    predicate: F,
    expected: String,
}

impl<F> CharWhere<F> {
    pub fn new(predicate: F, expected: impl Into<String>) -> Self {
        CharWhere {
            predicate,
            expected: expected.into(),
        }
    }
}

impl<'code, F> Parser<'code> for CharWhere<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.peek()? {
            ch if (self.predicate)(ch) => Ok((ch, cursor.advance_bytes(ch.len_utf8()))),
            found => Err(cursor.error(
                ErrorKind::UnexpectedChar {
                    expected: self.expected.clone(),
                    found,
                },
                format!("expected {}, found {:?}", self.expected, found),
            )),
        }
    }
}

/// Convenience function to create a CharWhere parser
pub fn char_where<F>(predicate: F, expected: impl Into<String>) -> CharWhere<F>
where
    F: Fn(char) -> bool,
{
    CharWhere::new(predicate, expected)
}
