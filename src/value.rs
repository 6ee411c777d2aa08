use crate::map::{Map, MapExt};
use crate::parser::Parser;

/// A scalar parse result
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Char(char),
    Text(String),
}

/// Closed tagged union for grammars whose rules produce heterogeneous
/// payloads
///
/// Characters and matched text become [`Atom`]s, lists of results become
/// [`Value::List`], and anything a grammar computes itself (numbers, AST
/// nodes) travels as [`Value::Custom`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Atom(Atom),
    List(Vec<Value<T>>),
    Custom(T),
}

impl<T> Value<T> {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Atom(Atom::Char(ch)) => Some(*ch),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Atom(Atom::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value<T>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&T> {
        match self {
            Value::Custom(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

impl<T> From<char> for Value<T> {
    fn from(ch: char) -> Self {
        Value::Atom(Atom::Char(ch))
    }
}

impl<T> From<&str> for Value<T> {
    fn from(text: &str) -> Self {
        Value::Atom(Atom::Text(text.to_string()))
    }
}

impl<T> From<String> for Value<T> {
    fn from(text: String) -> Self {
        Value::Atom(Atom::Text(text))
    }
}

impl<T, V> From<Vec<V>> for Value<T>
where
    V: Into<Value<T>>,
{
    fn from(items: Vec<V>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Extension trait to add .to_value() method support for parsers
pub trait ValueExt<'code>: Parser<'code> + Sized {
    /// Lift this parser's output into a [`Value`]
    fn to_value<T>(self) -> Map<Self, fn(Self::Output) -> Value<T>>
    where
        Self::Output: Into<Value<T>>,
    {
        self.map(Into::into as fn(Self::Output) -> Value<T>)
    }
}

/// Implement ValueExt for all parsers
impl<'code, P> ValueExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::cursor::Cursor;
    use crate::literal::literal;
    use crate::many::many0;
    use crate::or::OrExt;

    #[test]
    fn test_from_conversions() {
        let ch: Value<()> = 'a'.into();
        assert_eq!(ch.as_char(), Some('a'));

        let text: Value<()> = "abc".into();
        assert_eq!(text.as_text(), Some("abc"));

        let list: Value<()> = vec!['a', 'b'].into();
        assert_eq!(list, Value::List(vec!['a'.into(), 'b'.into()]));
        assert!(list.is_list());
    }

    #[test]
    fn test_accessors_on_other_variants() {
        let custom: Value<i32> = Value::Custom(7);
        assert_eq!(custom.as_custom(), Some(&7));
        assert_eq!(custom.as_char(), None);
        assert_eq!(custom.as_text(), None);
        assert!(custom.as_list().is_none());
    }

    #[test]
    fn test_heterogeneous_alternatives() {
        // A character and a literal share one output type once lifted
        let parser = many0(literal("ab").to_value::<()>().or(is_char('c').to_value()));

        let (values, cursor) = parser.parse(Cursor::new("abcab")).unwrap();
        assert_eq!(values, vec![Value::from("ab"), Value::from('c'), Value::from("ab")]);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_list_output() {
        let parser = many0(is_char('x')).to_value::<()>();

        let (value, _) = parser.parse(Cursor::new("xx")).unwrap();
        assert_eq!(value.as_list().map(|items| items.len()), Some(2));
    }
}
