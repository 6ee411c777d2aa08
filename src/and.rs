use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that requires two parsers to succeed at the same
/// position
///
/// The first parser acts as a lookahead check: it must succeed at the
/// starting cursor, but its value and its advance are discarded. The second
/// parser then runs from that same starting cursor and its outcome is the
/// result. If the check fails its failure is returned and the second parser
/// never runs.
///
/// This is a positional conjunction, not sequencing; use [`crate::seq::seq`]
/// to run parsers one after another.
///
/// Example:
/// ```
/// use recomb::{Cursor, Parser, and::AndExt, chars::char_where, literal::literal};
///
/// // Only accept the keyword when it starts with a lowercase letter
/// let parser = char_where(|c| c.is_lowercase(), "lowercase letter").and(literal("let"));
/// let (keyword, cursor) = parser.parse(Cursor::new("let x")).unwrap();
/// assert_eq!(keyword, "let");
/// assert_eq!(cursor.position(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    check: P1,
    parser: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(check: P1, parser: P2) -> Self {
        And { check, parser }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.check.parse(cursor)?;
        self.parser.parse(cursor)
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(check: P1, parser: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(check, parser)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
