use crate::guard::AbortReason;
use thiserror::Error;

/// What went wrong in a failed parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input ended where more was required
    EndOfInput,
    UnexpectedChar {
        expected: String,
        found: char,
    },
    UnexpectedLiteral {
        expected: String,
        found: String,
    },
    /// A one-or-more repetition matched nothing
    InsufficientRepetition,
    /// Every branch of an ordered choice failed; the cause is the deepest
    /// branch failure
    AllAlternativesFailed,
    /// Element `index` (0-based) of a sequence failed; the cause is that
    /// element's failure
    SequenceElementFailed {
        index: usize,
    },
    /// A filter predicate rejected a parsed value
    Rejected,
    /// A negative lookahead matched
    UnexpectedMatch,
    /// Input remained after a parse that had to reach the end
    TrailingInput,
    /// A weak rule reference outlived the rule it points to
    DanglingReference,
    Aborted(AbortReason),
}

/// A parse failure
///
/// Failures are plain values: they record where and why a parser gave up
/// and, for combinators that wrap a sub-failure, the underlying `cause`.
/// They never carry a cursor; a caller that wants to retry does so from the
/// cursor it passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte offset into the input
    pub position: usize,
    pub message: String,
    #[source]
    pub cause: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            position,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: ParseError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Wrap the failure of sequence element `index`
    ///
    /// Aborts stay unwrapped so enclosing combinators still see them.
    pub(crate) fn in_sequence(self, index: usize) -> Self {
        if self.is_abort() {
            return self;
        }
        let message = format!("sequence element {index} failed: {}", self.message);
        ParseError::new(
            ErrorKind::SequenceElementFailed { index },
            self.position,
            message,
        )
        .with_cause(self)
    }

    /// The innermost failure in the cause chain
    pub fn deepest(&self) -> &ParseError {
        let mut error = self;
        while let Some(cause) = &error.cause {
            error = cause;
        }
        error
    }

    /// True if a run guard stopped the parse
    pub fn is_abort(&self) -> bool {
        matches!(self.kind, ErrorKind::Aborted(_))
    }

    pub fn location(&self, source: &str) -> Location {
        Location::of(source, self.position)
    }

    /// Render the failure with its line, column and surrounding source lines
    pub fn report(&self, source: &str) -> String {
        let location = self.location(source);
        let mut report = format!(
            "{} at line {}, column {} (position {})\n\n",
            self.message, location.line, location.column, self.position
        );
        for line in context_lines(source, location) {
            report.push_str(&line);
            report.push('\n');
        }
        report
    }
}

/// Human-readable position: 1-based line, and 1-based column counted in
/// characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn of(source: &str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }

        let before = &source[..position];
        let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
        Location {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

/// Up to two lines before and after the failing line, with a pointer under
/// the failing column
fn context_lines(source: &str, location: Location) -> Vec<String> {
    let first = location.line.saturating_sub(2).max(1);
    let last = location.line + 2;
    let mut lines = Vec::new();

    for (index, content) in source.split('\n').enumerate() {
        let number = index + 1;
        if number < first {
            continue;
        }
        if number > last {
            break;
        }

        let content = content.strip_suffix('\r').unwrap_or(content);
        let prefix = if number == location.line {
            format!("  > {number} | ")
        } else {
            format!("    {number} | ")
        };
        lines.push(format!("{prefix}{content}"));

        if number == location.line {
            let pointer_offset = prefix.len() + location.column - 1;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines
}
