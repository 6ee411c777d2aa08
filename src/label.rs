use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use std::borrow::Cow;

/// Parser combinator that names what a parser expects
///
/// On failure the message becomes `expected <name>`; kind and position are
/// those of the inner failure, which is kept as the cause. Aborts pass
/// through unchanged. Successes are untouched.
#[derive(Debug, Clone)]
pub struct Label<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|error| {
            if error.is_abort() {
                return error;
            }
            ParseError::new(
                error.kind.clone(),
                error.position,
                format!("expected {}", self.name),
            )
            .with_cause(error)
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, name: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, name)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, name: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, name)
}
