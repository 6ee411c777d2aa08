use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element; see [`separated_list0`] for lists that
///   may be empty
/// - A separator that is not followed by an item is left unconsumed: the
///   list ends before it
/// - Does not handle whitespace automatically
#[derive(Debug, Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    allow_empty: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList {
            parser,
            separator,
            allow_empty: false,
        }
    }

    /// A list that also accepts zero items
    pub fn allowing_empty(parser: P, separator: PS) -> Self {
        SeparatedList {
            parser,
            separator,
            allow_empty: true,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();

        // The first element is required unless the list may be empty
        let mut cursor = match self.parser.parse(cursor) {
            Ok((first_value, next_cursor)) => {
                results.push(first_value);
                next_cursor
            }
            Err(error) if self.allow_empty && !error.is_abort() => return Ok((results, cursor)),
            Err(error) => return Err(error),
        };

        // Parse remaining elements preceded by separator
        loop {
            cursor.checkpoint()?;

            let after_separator = match self.separator.parse(cursor) {
                Ok((_, next_cursor)) => next_cursor,
                Err(error) if error.is_abort() => return Err(error),
                Err(_) => break,
            };

            match self.parser.parse(after_separator) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    if next_cursor.position() == cursor.position() {
                        break;
                    }
                    cursor = next_cursor;
                }
                Err(error) if error.is_abort() => return Err(error),
                // Trailing separator: the list ends before it
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of one or more items separated by
/// the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}

/// Creates a parser that matches a possibly empty list of items separated
/// by the given parser
pub fn separated_list0<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::allowing_empty(parser, separator)
}
