use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::many::repeat;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails with `InsufficientRepetition`, caused by the failure of the first
/// attempt, when nothing matches.
#[derive(Debug, Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        cursor.checkpoint()?;

        // First parse must succeed
        let (first, next_cursor) = match self.parser.parse(cursor) {
            Ok(result) => result,
            Err(error) if error.is_abort() => return Err(error),
            Err(error) => {
                let message = format!("expected at least one match: {}", error.message);
                return Err(cursor
                    .error(ErrorKind::InsufficientRepetition, message)
                    .with_cause(error));
            }
        };

        if next_cursor.position() == cursor.position() {
            return Ok((vec![first], next_cursor));
        }

        repeat(&self.parser, next_cursor, vec![first])
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
