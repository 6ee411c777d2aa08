use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::parser::{BoxedParser, Outcome, Parser};
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};
use tracing::debug;

type Builder<'code, O> =
    Box<dyn Fn(&LazyRef<'code, O>) -> BoxedParser<'code, O> + Send + Sync + 'code>;

struct Shared<'code, O> {
    parser: OnceLock<BoxedParser<'code, O>>,
    builder: Builder<'code, O>,
}

/// A parser that defers the construction of the actual parser until it is
/// first used
///
/// The builder runs at most once, on the first parse, even when several
/// threads parse with the same rule at the same time; every later parse
/// reuses the built parser. A `Lazy` is a cheap handle: clones share the
/// same rule.
///
/// Each parse through a deferred rule counts as one level of nesting for the
/// run guard's depth limit.
///
/// The built parser is only dropped with the last `Lazy` handle, and it may
/// hold anything borrowed for `'code`. Declare the input text, the
/// [`Guard`](crate::guard::Guard) and any other borrowed state before the
/// rule so they outlive it:
///
/// ```
/// use recomb::{Guard, between, is_char, or, recursive, run_with};
///
/// let input = String::from("((x))");
/// let guard = Guard::new().with_max_depth(8);
/// let nested = recursive(|nested| or(between(is_char('('), nested, is_char(')')), is_char('x')));
///
/// assert_eq!(run_with(&nested, &input, &guard).unwrap(), 'x');
/// ```
pub struct Lazy<'code, O> {
    shared: Arc<Shared<'code, O>>,
}

/// Non-owning handle to a [`Lazy`] rule, handed to the builder of a
/// [`recursive`] rule so the rule can refer to itself
///
/// Parsing through a handle whose rule has been dropped fails with
/// `DanglingReference`.
pub struct LazyRef<'code, O> {
    shared: Weak<Shared<'code, O>>,
}

impl<'code, O> Lazy<'code, O> {
    /// Create a new lazy parser with the given factory function
    pub fn new<F, P>(factory: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'code,
        P: Parser<'code, Output = O> + Send + Sync + 'code,
    {
        Self::from_builder(Box::new(
            move |_: &LazyRef<'code, O>| -> BoxedParser<'code, O> { Box::new(factory()) },
        ))
    }

    /// Create a lazy parser whose factory receives a handle to the rule
    /// itself
    pub fn recursive<F, P>(factory: F) -> Self
    where
        F: Fn(LazyRef<'code, O>) -> P + Send + Sync + 'code,
        P: Parser<'code, Output = O> + Send + Sync + 'code,
    {
        Self::from_builder(Box::new(
            move |handle: &LazyRef<'code, O>| -> BoxedParser<'code, O> {
                Box::new(factory(handle.clone()))
            },
        ))
    }

    fn from_builder(builder: Builder<'code, O>) -> Self {
        Lazy {
            shared: Arc::new(Shared {
                parser: OnceLock::new(),
                builder,
            }),
        }
    }

    /// A non-owning handle to this rule
    pub fn handle(&self) -> LazyRef<'code, O> {
        LazyRef {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// True once the underlying parser has been built
    pub fn is_built(&self) -> bool {
        self.shared.parser.get().is_some()
    }
}

/// The built parser of a rule, building it first if needed.
///
/// The builder must only assemble parsers; parsing with the rule from
/// inside its own builder never finishes.
fn resolve<'a, 'code, O>(shared: &'a Arc<Shared<'code, O>>) -> &'a BoxedParser<'code, O> {
    shared.parser.get_or_init(|| {
        debug!("building deferred parser");
        let handle = LazyRef {
            shared: Arc::downgrade(shared),
        };
        (shared.builder)(&handle)
    })
}

impl<'code, O> Parser<'code> for Lazy<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let _depth = cursor.descend()?;
        resolve(&self.shared).parse(cursor)
    }
}

impl<'code, O> Parser<'code> for LazyRef<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let Some(shared) = self.shared.upgrade() else {
            return Err(cursor.error(
                ErrorKind::DanglingReference,
                "recursive rule was dropped before it was used",
            ));
        };

        let _depth = cursor.descend()?;
        resolve(&shared).parse(cursor)
    }
}

impl<O> Clone for Lazy<'_, O> {
    fn clone(&self) -> Self {
        Lazy {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<O> Clone for LazyRef<'_, O> {
    fn clone(&self) -> Self {
        LazyRef {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<O> fmt::Debug for Lazy<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("built", &self.is_built())
            .finish()
    }
}

impl<O> fmt::Debug for LazyRef<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyRef")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<'code, P::Output>
where
    F: Fn() -> P + Send + Sync + 'code,
    P: Parser<'code> + Send + Sync + 'code,
{
    Lazy::new(factory)
}

/// Create a self-referential rule
///
/// The factory receives a handle to the rule being defined and may use it
/// anywhere inside the parser it returns:
///
/// ```
/// use recomb::{between, is_char, or, recursive, run_to_end};
///
/// // x, (x), ((x)), ...
/// let nested = recursive(|nested| or(between(is_char('('), nested, is_char(')')), is_char('x')));
///
/// assert_eq!(run_to_end(&nested, "((x))").unwrap(), 'x');
/// assert!(run_to_end(&nested, "((x)").is_err());
/// ```
pub fn recursive<'code, O, F, P>(factory: F) -> Lazy<'code, O>
where
    F: Fn(LazyRef<'code, O>) -> P + Send + Sync + 'code,
    P: Parser<'code, Output = O> + Send + Sync + 'code,
{
    Lazy::recursive(factory)
}
