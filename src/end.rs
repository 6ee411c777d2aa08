use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::parser::{Outcome, Parser};

/// Parser that succeeds only at the end of the input
///
/// Fails with `TrailingInput` while input remains.
#[derive(Debug, Clone, Copy)]
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.rest().chars().next() {
            None => Ok(((), cursor)),
            Some(found) => Err(cursor.error(
                ErrorKind::TrailingInput,
                format!("expected end of input, found {:?}", found),
            )),
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End
}
