use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// A failure of any of the three is returned as is.
///
/// This does not handle whitespace automatically; wrap the delimiters in
/// [`crate::whitespace::padded`] for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"{data}"` → `"data"`
#[derive(Debug, Clone)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;

        Ok((content, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{char_where, is_char};
    use crate::error::ErrorKind;
    use crate::literal::literal;
    use crate::many1::many1;

    fn word<'code>() -> impl Parser<'code, Output = Vec<char>> {
        many1(char_where(char::is_alphanumeric, "letter or digit"))
    }

    #[test]
    fn test_brackets() {
        let cursor = Cursor::new("[42]");
        let parser = between(is_char('['), word(), is_char(']'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, vec!['4', '2']);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_parentheses_literal() {
        let cursor = Cursor::new("(hello)");
        let parser = between(is_char('('), literal("hello"), is_char(')'));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, "hello");
    }

    #[test]
    fn test_multi_character_delimiters() {
        let cursor = Cursor::new("<!--note-->");
        let parser = between(literal("<!--"), word(), literal("-->"));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value.into_iter().collect::<String>(), "note");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let parser = between(is_char('['), word(), is_char(']'));

        let error = parser.parse(Cursor::new("42]")).unwrap_err();
        assert_eq!(error.position, 0);
        assert!(matches!(error.kind, ErrorKind::UnexpectedChar { found: '4', .. }));
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let parser = between(is_char('['), word(), is_char(']'));

        let error = parser.parse(Cursor::new("[42")).unwrap_err();
        assert_eq!(error.kind, ErrorKind::EndOfInput);
        assert_eq!(error.position, 3);
    }

    #[test]
    fn test_with_remaining_content() {
        let cursor = Cursor::new("[42] extra");
        let parser = between(is_char('['), word(), is_char(']'));

        let (_, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(cursor.peek().unwrap(), ' ');
    }
}
