use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser that skips any run of Unicode whitespace, including none
///
/// Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Whitespace;

impl<'code> Parser<'code> for Whitespace {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let rest = cursor.rest();
        let skipped = rest.len() - rest.trim_start().len();
        Ok(((), cursor.advance_bytes(skipped)))
    }
}

/// Convenience function to create a Unicode whitespace parser
pub fn whitespace() -> Whitespace {
    Whitespace
}

/// Parser that allows whitespace on both sides of the wrapped parser
///
/// # Examples
/// - `"42"` → `42`
/// - `"  42 \n"` → `42`
#[derive(Debug, Clone)]
pub struct Padded<P> {
    parser: P,
}

impl<P> Padded<P> {
    pub fn new(parser: P) -> Self {
        Padded { parser }
    }
}

impl<'code, P> Parser<'code> for Padded<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let ((), cursor) = Whitespace.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = Whitespace.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Wrap a parser so it skips surrounding whitespace
pub fn padded<'code, P>(parser: P) -> Padded<P>
where
    P: Parser<'code>,
{
    Padded::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::between;
    use crate::chars::is_char;
    use crate::literal::literal;

    #[test]
    fn test_whitespace_skips_ascii() {
        let cursor = Cursor::new(" \t\r\nabc");

        let ((), cursor) = whitespace().parse(cursor).unwrap();
        assert_eq!(cursor.peek().unwrap(), 'a');
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_whitespace_skips_unicode() {
        let test_cases = [
            "\u{00A0}", // Non-breaking space
            "\u{1680}", // Ogham space mark
            "\u{2003}", // Em space
            "\u{2028}", // Line separator
            "\u{3000}", // Ideographic space
            "\u{000B}", // Vertical tab
            "\u{0085}", // Next line
        ];

        for space in test_cases {
            let input = format!("{space}x");
            let ((), cursor) = whitespace().parse(Cursor::new(&input)).unwrap();
            assert_eq!(cursor.rest(), "x", "Failed for U+{:04X}", space.chars().next().map_or(0, u32::from));
        }
    }

    #[test]
    fn test_whitespace_never_fails() {
        for input in ["", "abc", "   "] {
            let ((), cursor) = whitespace().parse(Cursor::new(input)).unwrap();
            assert_eq!(cursor.rest(), input.trim_start());
        }
    }

    #[test]
    fn test_padded() {
        let cursor = Cursor::new("  let \n x");
        let parser = padded(literal("let"));

        let (keyword, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(keyword, "let");
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_padded_failure_is_inner_failure() {
        let error = padded(is_char('[')).parse(Cursor::new("   ]")).unwrap_err();
        assert_eq!(error.position, 3);
    }

    #[test]
    fn test_padded_delimiters() {
        let cursor = Cursor::new("[  hello  ]");
        let parser = between(padded(is_char('[')), literal("hello"), padded(is_char(']')));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "hello");
        assert!(cursor.is_at_end());
    }
}
