use crate::cursor::Cursor;
use crate::error::ParseError;

/// Result of one parser invocation: the parsed value and the cursor after
/// it, or a failure
pub type Outcome<'code, T> = Result<(T, Cursor<'code>), ParseError>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures never consume input: the
    /// caller still holds the cursor it passed in.
    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;
}

/// A parser with its concrete type erased
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + Send + Sync + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::or::OrExt;

    #[test]
    fn test_reference_is_a_parser() {
        let parser = is_char('a');
        let by_ref = &parser;

        let (ch, cursor) = by_ref.parse(Cursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_boxed_parsers_share_a_type() {
        let parsers: Vec<BoxedParser<'_, char>> = vec![
            is_char('a').boxed(),
            is_char('b').or(is_char('c')).boxed(),
        ];

        let (ch, _) = parsers[1].parse(Cursor::new("c")).unwrap();
        assert_eq!(ch, 'c');
        assert!(parsers[0].parse(Cursor::new("c")).is_err());
    }
}
