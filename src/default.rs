use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct DefaultParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> DefaultParser<T> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for DefaultParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DefaultParser<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DefaultParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultParser")
    }
}

impl<'code, T> Parser<'code> for DefaultParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((T::default(), cursor))
    }
}

/// Convenience function to create a default parser
pub fn default<T>() -> DefaultParser<T>
where
    T: Default,
{
    DefaultParser::new()
}
