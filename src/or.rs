use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::{Outcome, Parser};
use tracing::trace;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser from the same starting cursor
///
/// When both branches fail the result is `AllAlternativesFailed` caused by
/// the deepest branch failure (the one with the largest position, the later
/// branch on ties). Nested choices are flattened, so `a.or(b).or(c)` and
/// `a.or(b.or(c))` fail identically.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) if error.is_abort() => return Err(error),
            Err(error) => error,
        };

        trace!(
            position = cursor.position(),
            failed_at = first.position,
            "first alternative failed, retrying"
        );

        match self.parser2.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) if error.is_abort() => Err(error),
            Err(second) => Err(all_alternatives_failed(first, second)),
        }
    }
}

fn all_alternatives_failed(first: ParseError, second: ParseError) -> ParseError {
    let deepest = if first.position > second.position {
        first
    } else {
        second
    };

    // Labelled choices keep their kind, so unwrap every level
    let mut branch = deepest;
    while branch.kind == ErrorKind::AllAlternativesFailed {
        match branch.cause.take() {
            Some(cause) => branch = *cause,
            None => return branch,
        }
    }

    ParseError::new(
        ErrorKind::AllAlternativesFailed,
        branch.position,
        format!("no alternative matched: {}", branch.message),
    )
    .with_cause(branch)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
