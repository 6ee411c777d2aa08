use crate::error::{ErrorKind, ParseError};
use crate::guard::{AbortReason, DepthToken, Guard};

/// Immutable read position over the input text
///
/// A cursor is a `(text, offset)` pair: it never changes, every advance
/// returns a new cursor, so a combinator can always go back to a cursor it
/// saved before an attempt. Offsets are byte offsets that always sit on a
/// character boundary; the counting operations (`has_available`, `consume`,
/// `advance`) count characters.
///
/// A cursor may also carry a reference to the [`Guard`] of the current run.
/// The guard is not part of the cursor's identity.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'code> {
    text: &'code str,
    offset: usize,
    guard: Option<&'code Guard>,
}

impl<'code> Cursor<'code> {
    pub fn new(text: &'code str) -> Self {
        Cursor {
            text,
            offset: 0,
            guard: None,
        }
    }

    pub fn with_guard(text: &'code str, guard: &'code Guard) -> Self {
        Cursor {
            text,
            offset: 0,
            guard: Some(guard),
        }
    }

    /// The whole input, independent of the current position
    pub fn text(&self) -> &'code str {
        self.text
    }

    /// Byte offset of the cursor into the input
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The input from the cursor to the end
    pub fn rest(&self) -> &'code str {
        &self.text[self.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    pub fn guard(&self) -> Option<&'code Guard> {
        self.guard
    }

    /// True iff at least `n` characters remain
    pub fn has_available(&self, n: usize) -> bool {
        n == 0 || self.rest().chars().nth(n - 1).is_some()
    }

    /// The character under the cursor, without advancing
    pub fn peek(&self) -> Result<char, ParseError> {
        self.rest()
            .chars()
            .next()
            .ok_or_else(|| self.end_of_input(1))
    }

    /// The next `n` characters, without advancing
    pub fn consume(&self, n: usize) -> Result<&'code str, ParseError> {
        let rest = self.rest();
        match byte_len_of_chars(rest, n) {
            Some(len) => Ok(&rest[..len]),
            None => Err(self.end_of_input(n)),
        }
    }

    /// A cursor `n` characters further on, clamped to the end of the input
    pub fn advance(self, n: usize) -> Self {
        let rest = self.rest();
        let len = byte_len_of_chars(rest, n).unwrap_or(rest.len());
        self.advance_bytes(len)
    }

    /// Advance past `len` bytes of the remaining input.
    ///
    /// `len` must land on a character boundary, which holds whenever it is
    /// the length of a prefix previously taken from `rest()`.
    pub(crate) fn advance_bytes(self, len: usize) -> Self {
        Cursor {
            offset: (self.offset + len).min(self.text.len()),
            ..self
        }
    }

    /// Consult the run guard, if any, before another repetition step
    pub fn checkpoint(&self) -> Result<(), ParseError> {
        match self.guard {
            Some(guard) => guard.check().map_err(|reason| self.aborted(reason)),
            None => Ok(()),
        }
    }

    /// Enter one level of deferred-parser nesting
    pub fn descend(&self) -> Result<Option<DepthToken<'code>>, ParseError> {
        match self.guard {
            Some(guard) => guard
                .enter()
                .map(Some)
                .map_err(|reason| self.aborted(reason)),
            None => Ok(None),
        }
    }

    /// Build a failure located at this cursor
    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, self.offset, message)
    }

    fn end_of_input(&self, wanted: usize) -> ParseError {
        let message = if wanted == 1 {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected end of input, expected {wanted} characters")
        };
        self.error(ErrorKind::EndOfInput, message)
    }

    fn aborted(&self, reason: AbortReason) -> ParseError {
        self.error(ErrorKind::Aborted(reason), reason.to_string())
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.text == other.text
    }
}

impl Eq for Cursor<'_> {}

fn byte_len_of_chars(text: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    text.char_indices()
        .nth(n - 1)
        .map(|(index, ch)| index + ch.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = Cursor::new("hello\nworld");

        assert_eq!(cursor.peek().unwrap(), 'h');

        let cursor = cursor.advance(1);
        assert_eq!(cursor.peek().unwrap(), 'e');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_has_available() {
        let cursor = Cursor::new("abc");

        assert!(cursor.has_available(0));
        assert!(cursor.has_available(3));
        assert!(!cursor.has_available(4));
        assert!(!cursor.advance(3).has_available(1));
        assert!(cursor.advance(3).has_available(0));
    }

    #[test]
    fn test_peek_at_end() {
        let cursor = Cursor::new("");

        let error = cursor.peek().unwrap_err();
        assert_eq!(error.kind, ErrorKind::EndOfInput);
        assert_eq!(error.position, 0);
    }

    #[test]
    fn test_consume_does_not_advance() {
        let cursor = Cursor::new("hello world");

        assert_eq!(cursor.consume(5).unwrap(), "hello");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.consume(0).unwrap(), "");
    }

    #[test]
    fn test_consume_past_end() {
        let cursor = Cursor::new("hel");

        let error = cursor.consume(5).unwrap_err();
        assert_eq!(error.kind, ErrorKind::EndOfInput);
        assert!(error.message.contains("expected 5 characters"));
    }

    #[test]
    fn test_advance_clamps() {
        let cursor = Cursor::new("ab").advance(10);

        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.advance(1).position(), 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let cursor = Cursor::new("こんにちは世界");

        assert!(cursor.has_available(7));
        assert!(!cursor.has_available(8));
        assert_eq!(cursor.consume(5).unwrap(), "こんにちは");

        let cursor = cursor.advance(5);
        assert_eq!(cursor.peek().unwrap(), '世');
        assert_eq!(cursor.position(), 15);
        assert_eq!(cursor.rest(), "世界");
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::new("abcd");

        let saved_at_a = cursor;
        let cursor = cursor.advance(1);
        assert_eq!(cursor.peek().unwrap(), 'b');

        // Saved copies are unaffected
        assert_eq!(saved_at_a.peek().unwrap(), 'a');

        let saved_at_b = cursor;
        let cursor = cursor.advance(1);
        assert_eq!(cursor.peek().unwrap(), 'c');
        assert_eq!(saved_at_b.peek().unwrap(), 'b');
        assert_eq!(saved_at_a.advance(1), saved_at_b);
    }

    #[test]
    fn test_equality_ignores_guard() {
        let text = "abc";
        let guard = Guard::new();

        assert_eq!(Cursor::new(text), Cursor::with_guard(text, &guard));
        assert_ne!(Cursor::new(text), Cursor::new(text).advance(1));
    }

    #[test]
    fn test_checkpoint_without_guard() {
        let cursor = Cursor::new("abc");
        assert!(cursor.checkpoint().is_ok());
        assert!(cursor.descend().unwrap().is_none());
    }

    #[test]
    fn test_checkpoint_reports_abort() {
        let guard = Guard::new();
        guard.cancel();
        let cursor = Cursor::with_guard("abc", &guard).advance(2);

        let error = cursor.checkpoint().unwrap_err();
        assert_eq!(error.kind, ErrorKind::Aborted(AbortReason::Cancelled));
        assert_eq!(error.position, 2);
    }
}
