use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::parser::{Outcome, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails with `UnexpectedMatch` if the given parser succeeds.
/// Never consumes any input regardless of outcome. An abort from the run
/// guard is not a failure of the inner parser and is propagated.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            // Parser succeeded when we wanted it to fail
            Ok(_) => Err(cursor.error(
                ErrorKind::UnexpectedMatch,
                "negative lookahead failed: unexpected match",
            )),
            Err(error) if error.is_abort() => Err(error),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
