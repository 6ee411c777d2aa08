use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that runs a tuple of parsers one after another
///
/// The output is the tuple of all parsed values, in order. Parsing stops at
/// the first failing element: its failure is wrapped as
/// `SequenceElementFailed { index }` and the remaining elements never run.
/// Since failures carry no cursor, nothing the earlier elements consumed is
/// observable after a failure.
///
/// Example:
/// ```
/// use recomb::{Cursor, Parser, seq, chars::is_char, literal::literal};
///
/// let (value, cursor) = seq((literal("let"), is_char(' '), literal("x")))
///     .parse(Cursor::new("let x"))
///     .unwrap();
/// assert_eq!(value, ("let", ' ', "x"));
/// assert!(cursor.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Seq<T> {
    parsers: T,
}

impl<T> Seq<T> {
    pub fn new(parsers: T) -> Self {
        Seq { parsers }
    }
}

/// Convenience function to create a Seq parser from a tuple of parsers
pub fn seq<T>(parsers: T) -> Seq<T> {
    Seq::new(parsers)
}

macro_rules! impl_seq {
    ($($parser:ident $value:ident $index:tt),+) => {
        impl<'code, $($parser),+> Parser<'code> for Seq<($($parser,)+)>
        where
            $($parser: Parser<'code>,)+
        {
            type Output = ($($parser::Output,)+);

            fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
                $(
                    let ($value, cursor) = self
                        .parsers
                        .$index
                        .parse(cursor)
                        .map_err(|error| error.in_sequence($index))?;
                )+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_seq!(P0 v0 0);
impl_seq!(P0 v0 0, P1 v1 1);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7);
impl_seq!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8);
impl_seq!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9
);
impl_seq!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9,
    P10 v10 10
);
impl_seq!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9,
    P10 v10 10, P11 v11 11
);
