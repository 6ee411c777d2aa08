use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some(value)` with the advanced cursor when the inner parser
/// succeeds, and `None` with the original cursor when it fails. Only a run
/// guard abort fails an optional parser.
///
/// Example:
/// ```
/// use recomb::{Cursor, Parser, is_char, literal, seq, OptionalExt};
///
/// let number = seq((is_char('-').optional(), literal("12")));
///
/// let ((sign, digits), _) = number.parse(Cursor::new("-12")).unwrap();
/// assert_eq!((sign, digits), (Some('-'), "12"));
///
/// let ((sign, _), _) = number.parse(Cursor::new("12")).unwrap();
/// assert_eq!(sign, None);
/// ```
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(error) if error.is_abort() => Err(error),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
