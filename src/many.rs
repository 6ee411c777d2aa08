use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use tracing::trace;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Stops at the first failure and returns the matches so far together with
/// the cursor after the last match, so the failed attempt leaves no trace.
/// It never fails on its own; only an aborting run guard ends it with an
/// error. A match that consumes nothing is kept once and then ends the
/// repetition, as repeating it could never make progress.
#[derive(Debug, Clone)]
pub struct Many0<P> {
    parser: P,
}

impl<P> Many0<P> {
    pub fn new(parser: P) -> Self {
        Many0 { parser }
    }
}

impl<'code, P> Parser<'code> for Many0<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        repeat(&self.parser, cursor, Vec::new())
    }
}

/// Apply `parser` until it fails, appending to `results`
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code>,
    mut results: Vec<P::Output>,
) -> Outcome<'code, Vec<P::Output>>
where
    P: Parser<'code> + ?Sized,
{
    loop {
        cursor.checkpoint()?;

        match parser.parse(cursor) {
            Ok((value, next_cursor)) => {
                results.push(value);
                if next_cursor.position() == cursor.position() {
                    trace!(
                        position = cursor.position(),
                        "repetition matched without consuming input, stopping"
                    );
                    break;
                }
                cursor = next_cursor;
            }
            Err(error) if error.is_abort() => return Err(error),
            // Repetition ends at the first failure, which is not propagated
            Err(_) => break,
        }
    }

    Ok((results, cursor))
}

/// Convenience function to create a Many0 parser
pub fn many0<'code, P>(parser: P) -> Many0<P>
where
    P: Parser<'code>,
{
    Many0::new(parser)
}
