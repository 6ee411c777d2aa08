//! # recomb - Recursive-Descent Parser Combinators
//!
//! recomb builds parsers for text grammars by composing small parsers into
//! larger ones. Every parser reads from an immutable [`Cursor`] and returns
//! either the parsed value with the advanced cursor, or a [`ParseError`].
//! The library emphasizes:
//!
//! - **Backtracking by value**: cursors are `Copy`, so a combinator retries
//!   an alternative simply by reusing the cursor it started from
//! - **Rich error reporting**: failures carry a kind, a position, a message
//!   and the sub-failure that caused them, and render with line and column
//! - **Recursive grammars**: [`lazy`] and [`recursive`] build rules on first
//!   use, exactly once, even across threads
//! - **Bounded runs**: a [`Guard`] stops a parse on cancellation, deadline,
//!   step budget or nesting depth
//!
//! ```
//! use recomb::{OrExt, between, is_char, literal, run_to_end};
//!
//! let boolean = between(is_char('<'), literal("yes").or(literal("no")), is_char('>'));
//!
//! assert_eq!(run_to_end(&boolean, "<yes>").unwrap(), "yes");
//! assert!(run_to_end(&boolean, "<maybe>").is_err());
//! ```

pub mod and;
pub mod between;
pub mod chars;
pub mod cursor;
pub mod default;
pub mod end;
pub mod error;
pub mod filter;
pub mod guard;
pub mod label;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod many1;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod separated_list;
pub mod seq;
pub mod value;
pub mod whitespace;

pub use and::{And, AndExt, and};
pub use between::{Between, between};
pub use chars::{AnyChar, CharWhere, IsChar, any_char, char_where, is_char};
pub use cursor::Cursor;
pub use default::{DefaultParser, default};
pub use end::{End, end};
pub use error::{ErrorKind, Location, ParseError};
pub use filter::{FilterExt, FilterParser, filter};
pub use guard::{AbortReason, Guard};
pub use label::{Label, LabelExt, label};
pub use lazy::{Lazy, LazyRef, lazy, recursive};
pub use literal::{Literal, literal};
pub use many::{Many0, many0};
pub use many1::{Many1, many1};
pub use map::{Map, MapExt, map};
pub use not::{Not, NotExt, not};
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedExt, BoxedParser, Outcome, Parser};
pub use position::{Position, PositionExt, Span, position};
pub use separated_list::{SeparatedList, separated_list, separated_list0};
pub use seq::{Seq, seq};
pub use value::{Atom, Value, ValueExt};
pub use whitespace::{Padded, Whitespace, padded, whitespace};

use tracing::debug;

/// Run `parser` once from the start of `text`
///
/// Input left over after the parser finishes is allowed; see [`run_to_end`]
/// to reject it.
pub fn run<'code, P>(parser: &P, text: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    parse_from(parser, Cursor::new(text), false)
}

/// Run `parser` once and require it to consume all of `text`
///
/// Fails with `TrailingInput` at the first unconsumed character otherwise.
pub fn run_to_end<'code, P>(parser: &P, text: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    parse_from(parser, Cursor::new(text), true)
}

/// Like [`run_to_end`], with the limits and cancellation of `guard` in
/// effect for the whole run
///
/// `text` and `guard` are borrowed for the parser's own lifetime, so with a
/// [`Lazy`] or [`recursive`] grammar they must be declared before the
/// grammar is.
pub fn run_with<'code, P>(
    parser: &P,
    text: &'code str,
    guard: &'code Guard,
) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    parse_from(parser, Cursor::with_guard(text, guard), true)
}

fn parse_from<'code, P>(
    parser: &P,
    cursor: Cursor<'code>,
    to_end: bool,
) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    let outcome = parser.parse(cursor).and_then(|(value, cursor)| {
        if to_end {
            end().parse(cursor)?;
        }
        Ok(value)
    });

    if let Err(error) = &outcome {
        debug!(
            position = error.position,
            kind = ?error.kind,
            message = %error.message,
            "parse failed"
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_allows_trailing_input() {
        assert_eq!(run(&literal("ab"), "abc").unwrap(), "ab");
    }

    #[test]
    fn test_run_to_end_rejects_trailing_input() {
        let error = run_to_end(&literal("ab"), "abc").unwrap_err();
        assert_eq!(error.kind, ErrorKind::TrailingInput);
        assert_eq!(error.position, 2);
    }

    #[test]
    fn test_run_reports_parser_failure() {
        let error = run(&is_char('a'), "b").unwrap_err();
        assert!(matches!(error.kind, ErrorKind::UnexpectedChar { found: 'b', .. }));
    }

    #[test]
    fn test_run_with_guard() {
        let parser = many0(is_char('a'));

        let guard = Guard::new().with_max_steps(3);
        assert_eq!(run_with(&parser, "aa", &guard).unwrap().len(), 2);

        let guard = Guard::new().with_max_steps(3);
        let error = run_with(&parser, "aaaaa", &guard).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Aborted(AbortReason::StepLimitExceeded));
    }

    #[test]
    fn test_run_with_cancelled_guard() {
        let guard = Guard::new();
        guard.cancel();

        let error = run_with(&many0(any_char()), "abc", &guard).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Aborted(AbortReason::Cancelled));
        assert_eq!(error.position, 0);
    }

    #[test]
    fn test_error_report_through_run() {
        let source = "let x = 1;\nlet y = ?;\n";
        let digit = char_where(|c| c.is_ascii_digit(), "digit");
        let statement = seq((literal("let "), any_char(), literal(" = "), digit, is_char(';')));
        let program = many0(seq((statement, is_char('\n'))));

        let error = run_to_end(&program, source).unwrap_err();
        let report = error.report(source);
        assert!(report.starts_with("expected end of input, found 'l' at line 2, column 1"));
    }
}
