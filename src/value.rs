//! Payload capability and the bundled dynamic payload type.
//!
//! The container's contract depends on what its payload is: whether it is the
//! none-equivalent sentinel, whether it is itself an option, whether it is a
//! boolean, whether it can be iterated. [`Value`] lets a payload type answer
//! those questions. [`Dynamic`] is a small dynamically typed value that
//! implements it.

use core::fmt;
use std::collections::BTreeMap;

use crate::optional::Optional;

/// Capability a payload type provides to [`Optional`].
pub trait Value: Clone + PartialEq + Sized {
    /// Whether this is the default none-equivalent sentinel (a null).
    fn is_null(&self) -> bool;

    /// Borrows the option this value wraps, if it wraps one.
    fn as_optional(&self) -> Option<&Optional<Self>>;

    /// Unwraps an option-valued payload, handing any other value back.
    fn into_optional(self) -> Result<Optional<Self>, Self>;

    fn as_bool(&self) -> Option<bool>;

    /// Splits an iterable value into its elements, handing any other value
    /// back unchanged.
    fn into_elements(self) -> Result<Vec<Self>, Self>;

    /// Short type name used in diagnostics.
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Dynamic>),
    Map(BTreeMap<String, Dynamic>),
    Optional(Box<Optional<Dynamic>>),
}

impl Value for Dynamic {
    fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    fn as_optional(&self) -> Option<&Optional<Self>> {
        match self {
            Dynamic::Optional(option) => Some(&**option),
            _ => None,
        }
    }

    fn into_optional(self) -> Result<Optional<Self>, Self> {
        match self {
            Dynamic::Optional(option) => Ok(*option),
            other => Err(other),
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match *self {
            Dynamic::Bool(b) => Some(b),
            _ => None,
        }
    }

    fn into_elements(self) -> Result<Vec<Self>, Self> {
        match self {
            Dynamic::List(items) => Ok(items),
            Dynamic::Map(entries) => Ok(entries.into_values().collect()),
            Dynamic::Optional(option) => Ok((*option).into_iter().collect()),
            other => Err(other),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Dynamic::Null => "null",
            Dynamic::Bool(_) => "bool",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Str(_) => "string",
            Dynamic::List(_) => "list",
            Dynamic::Map(_) => "map",
            Dynamic::Optional(_) => "option",
        }
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Null => f.write_str("null"),
            Dynamic::Bool(b) => write!(f, "{b}"),
            Dynamic::Int(i) => write!(f, "{i}"),
            Dynamic::Float(x) => write!(f, "{x}"),
            Dynamic::Str(s) => f.write_str(s),
            Dynamic::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Dynamic::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
            Dynamic::Optional(option) => write!(f, "{option}"),
        }
    }
}

impl From<bool> for Dynamic {
    fn from(b: bool) -> Self {
        Dynamic::Bool(b)
    }
}

impl From<i32> for Dynamic {
    fn from(i: i32) -> Self {
        Dynamic::Int(i.into())
    }
}

impl From<i64> for Dynamic {
    fn from(i: i64) -> Self {
        Dynamic::Int(i)
    }
}

impl From<f64> for Dynamic {
    fn from(x: f64) -> Self {
        Dynamic::Float(x)
    }
}

impl From<&str> for Dynamic {
    fn from(s: &str) -> Self {
        Dynamic::Str(s.to_owned())
    }
}

impl From<String> for Dynamic {
    fn from(s: String) -> Self {
        Dynamic::Str(s)
    }
}

impl<T: Into<Dynamic>> From<Vec<T>> for Dynamic {
    fn from(items: Vec<T>) -> Self {
        Dynamic::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Dynamic>> for Dynamic {
    fn from(entries: BTreeMap<String, Dynamic>) -> Self {
        Dynamic::Map(entries)
    }
}

// native optionals only cross into the dynamic world here
impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(value: Option<T>) -> Self {
        value.map_or(Dynamic::Null, Into::into)
    }
}

impl From<Optional<Dynamic>> for Dynamic {
    fn from(option: Optional<Dynamic>) -> Self {
        Dynamic::Optional(Box::new(option))
    }
}

impl From<crate::some::Some<Dynamic>> for Dynamic {
    fn from(some: crate::some::Some<Dynamic>) -> Self {
        Optional::from(some).into()
    }
}

impl From<&'static crate::none::None> for Dynamic {
    fn from(none: &'static crate::none::None) -> Self {
        Optional::<Dynamic>::from(none).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_the_sentinel() {
        assert!(Dynamic::Null.is_null());
        assert!(!Dynamic::from(0).is_null());
        assert!(!Dynamic::from("").is_null());
        assert!(!Dynamic::from(false).is_null());
    }

    #[test]
    fn native_optional_conversion() {
        assert_eq!(Dynamic::from(None::<i32>), Dynamic::Null);
        assert_eq!(Dynamic::from(Some("x")), Dynamic::Str("x".to_owned()));
    }

    #[test]
    fn elements() {
        assert_eq!(
            Dynamic::from(vec![1, 2]).into_elements(),
            Ok(vec![Dynamic::Int(1), Dynamic::Int(2)])
        );
        let mut map = BTreeMap::new();
        map.insert("b".to_owned(), Dynamic::from(2));
        map.insert("a".to_owned(), Dynamic::from(1));
        assert_eq!(Dynamic::from(map).into_elements(), Ok(vec![Dynamic::Int(1), Dynamic::Int(2)]));
        assert_eq!(Dynamic::from("ab").into_elements(), Err(Dynamic::from("ab")));
    }

    #[test]
    fn display() {
        let list = Dynamic::from(vec![Dynamic::from(1), Dynamic::from("a"), Dynamic::Null]);
        assert_eq!(list.to_string(), "[1, a, null]");
        assert_eq!(Dynamic::from(Optional::create(Dynamic::from(true))).to_string(), "Some(true)");
    }
}
