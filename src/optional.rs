use core::fmt;
use core::option;

use crate::error::OptionError;
use crate::factory::Factory;
use crate::iter::IntoIter;
use crate::none::None;
use crate::some::Some;
use crate::value::Value;

/// A value that is either present ([`Some`]) or absent ([`None`]).
///
/// Every combinator consumes the receiver and hands back a new `Optional` or
/// a raw payload; a constructed instance is never mutated. The absent case
/// always carries the process-wide [`None`] singleton.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Optional<V> {
    Some(Some<V>),
    None(&'static None),
}

impl<V> Optional<V> {
    pub fn none() -> Self {
        Optional::None(None::new())
    }

    pub const fn is_some(&self) -> bool {
        matches!(*self, Optional::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_some(&self) -> option::Option<&Some<V>> {
        match self {
            Optional::Some(some) => option::Option::Some(some),
            Optional::None(_) => option::Option::None,
        }
    }

    /// Returns `other` if this is `Some`, otherwise `None` without looking at
    /// `other`.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(_) => other,
            Optional::None(none) => Optional::None(none),
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    ///
    /// `other` is evaluated eagerly; use [`Optional::or_else`] to defer it.
    pub fn or(self, other: Self) -> Self {
        match self {
            some @ Optional::Some(_) => some,
            Optional::None(_) => other,
        }
    }

    /// Returns whichever side is `Some` when exactly one of them is, and
    /// `None` otherwise.
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (a @ Optional::Some(_), Optional::None(_)) => a,
            (Optional::None(_), b @ Optional::Some(_)) => b,
            (Optional::Some(_), Optional::Some(_)) => Self::none(),
            (none @ Optional::None(_), Optional::None(_)) => none,
        }
    }

    pub fn map_or<U, F>(self, fallback: U, f: F) -> U
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Optional::Some(some) => f(some.into_inner()),
            Optional::None(_) => fallback,
        }
    }

    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(V) -> U,
    {
        match self {
            Optional::Some(some) => f(some.into_inner()),
            Optional::None(_) => fallback(),
        }
    }

    /// Returns the payload, or the caller's own `error` if this is `None`.
    ///
    /// ```
    /// use nullsafe_option::{Dynamic, Optional};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct MissingPort;
    ///
    /// let port = Optional::create(Dynamic::Null);
    /// assert_eq!(port.expect(MissingPort), Err(MissingPort));
    /// ```
    pub fn expect<E>(self, error: E) -> Result<V, E> {
        match self {
            Optional::Some(some) => Ok(some.into_inner()),
            Optional::None(_) => Err(error),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with the [`OptionError::AbsentValue`] message if this is `None`.
    /// [`Optional::try_unwrap`] reports the same failure as an error instead.
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self {
            Optional::Some(some) => some.into_inner(),
            Optional::None(_) => unwrap_failed(&OptionError::AbsentValue),
        }
    }

    pub fn try_unwrap(self) -> Result<V, OptionError> {
        self.expect(OptionError::AbsentValue)
    }

    pub fn unwrap_or(self, fallback: V) -> V {
        match self {
            Optional::Some(some) => some.into_inner(),
            Optional::None(_) => fallback,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Optional::Some(some) => some.into_inner(),
            Optional::None(_) => f(),
        }
    }

    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        match self {
            Optional::Some(some) => some.get() == value,
            Optional::None(_) => false,
        }
    }

    pub fn into_std(self) -> option::Option<V> {
        match self {
            Optional::Some(some) => option::Option::Some(some.into_inner()),
            Optional::None(_) => option::Option::None,
        }
    }
}

#[cfg(feature = "aliases")]
impl<V> Optional<V> {
    #[track_caller]
    pub fn get(self) -> V {
        self.unwrap()
    }

    pub fn get_or(self, fallback: V) -> V {
        self.unwrap_or(fallback)
    }

    pub fn get_or_else<F>(self, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.unwrap_or_else(f)
    }

    pub fn is(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.contains(value)
    }
}

impl<V: Value> Optional<V> {
    /// Wraps `value` in `Some`, failing if it is absent.
    pub fn some(value: V) -> Result<Self, OptionError> {
        Some::new(value).map(Optional::Some)
    }

    /// Coerces `value` into an option: an option-valued payload is returned
    /// unchanged, a null becomes `None`, anything else becomes `Some`.
    ///
    /// ```
    /// use nullsafe_option::{Dynamic, Optional};
    ///
    /// assert_eq!(Optional::create(Dynamic::from(42)).unwrap(), Dynamic::Int(42));
    /// assert!(Optional::create(Dynamic::Null).is_none());
    /// ```
    pub fn create(value: V) -> Self {
        Factory::new().create(value)
    }

    /// Like [`Optional::create`], but `none_value` is treated as absent too.
    pub fn of(value: V, none_value: V) -> Self {
        Factory::new().with_none_value(none_value).create(value)
    }

    #[cfg(feature = "aliases")]
    pub fn new(value: V) -> Self {
        Self::create(value)
    }

    pub fn nullable(value: option::Option<V>) -> Self {
        match value {
            option::Option::Some(value) => Self::create(value),
            option::Option::None => Self::none(),
        }
    }

    /// Calls `f` with the payload and returns its result, which must itself be
    /// an option.
    ///
    /// `f` is never called on `None`.
    ///
    /// # Errors
    ///
    /// [`OptionError::InvalidReturnType`] if `f` returns something other than
    /// an option.
    pub fn and_then<F, R>(self, f: F) -> Result<Self, OptionError>
    where
        F: FnOnce(V) -> R,
        R: Into<V>,
    {
        match self {
            Optional::Some(some) => {
                let result: V = f(some.into_inner()).into();
                result
                    .into_optional()
                    .map_err(|value| OptionError::invalid_return_type("and_then", "an option", value.kind()))
            }
            none @ Optional::None(_) => Ok(none),
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `f` coerced
    /// through [`Optional::create`].
    pub fn or_else<F, R>(self, f: F) -> Self
    where
        F: FnOnce() -> R,
        R: Into<V>,
    {
        match self {
            some @ Optional::Some(_) => some,
            Optional::None(_) => Self::create(f().into()),
        }
    }

    /// Maps the payload with `f` and coerces the result, so a null result
    /// becomes `None` and an option result is returned as is.
    pub fn map<F, R>(self, f: F) -> Self
    where
        F: FnOnce(V) -> R,
        R: Into<V>,
    {
        match self {
            Optional::Some(some) => Self::create(f(some.into_inner()).into()),
            none @ Optional::None(_) => none,
        }
    }

    /// Keeps the payload if `predicate` returns `true`.
    ///
    /// # Errors
    ///
    /// [`OptionError::InvalidReturnType`] if `predicate` returns something
    /// other than a boolean.
    pub fn filter<P, R>(self, predicate: P) -> Result<Self, OptionError>
    where
        P: FnOnce(&V) -> R,
        R: Into<V>,
    {
        match self {
            Optional::Some(some) => {
                let verdict: V = predicate(some.get()).into();
                match verdict.as_bool() {
                    option::Option::Some(true) => Ok(Optional::Some(some)),
                    option::Option::Some(false) => Ok(Self::none()),
                    option::Option::None => Err(OptionError::invalid_return_type("filter", "a bool", verdict.kind())),
                }
            }
            none @ Optional::None(_) => Ok(none),
        }
    }

    /// Removes one level of nesting.
    pub fn flatten(self) -> Self {
        match self {
            Optional::Some(some) => match some.into_inner().into_optional() {
                Ok(inner) => inner,
                Err(value) => Optional::Some(Some::wrap(value)),
            },
            none @ Optional::None(_) => none,
        }
    }

    /// Iterates over a copy of the payload, leaving `self` untouched.
    pub fn iter(&self) -> IntoIter<V> {
        IntoIter::new(self.clone())
    }
}

impl<V> Default for Optional<V> {
    fn default() -> Self {
        Self::none()
    }
}

impl<V> From<Some<V>> for Optional<V> {
    fn from(some: Some<V>) -> Self {
        Optional::Some(some)
    }
}

impl<V> From<&'static None> for Optional<V> {
    fn from(none: &'static None) -> Self {
        Optional::None(none)
    }
}

impl<V: Value> From<option::Option<V>> for Optional<V> {
    fn from(value: option::Option<V>) -> Self {
        Self::nullable(value)
    }
}

impl<V: fmt::Display> fmt::Display for Optional<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(some) => write!(f, "{some}"),
            Optional::None(none) => write!(f, "{none}"),
        }
    }
}

impl<V: Value> IntoIterator for Optional<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter::new(self)
    }
}

impl<V: Value> IntoIterator for &Optional<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        self.iter()
    }
}

#[cold]
#[track_caller]
fn unwrap_failed(error: &OptionError) -> ! {
    panic!("{error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Dynamic;

    fn some(value: impl Into<Dynamic>) -> Optional<Dynamic> {
        Optional::some(value.into()).unwrap()
    }

    #[test]
    fn variants_are_exclusive() {
        let present = some(1);
        let absent = Optional::<Dynamic>::none();
        assert!(present.is_some() && !present.is_none());
        assert!(absent.is_none() && !absent.is_some());
    }

    #[test]
    fn none_carries_the_singleton() {
        let Optional::None(none) = Optional::<Dynamic>::none() else {
            panic!("expected None");
        };
        assert!(core::ptr::eq(none, None::new()));
    }

    #[test]
    fn flatten_keeps_plain_payload() {
        let text = String::from("foo");
        let addr = text.as_ptr();
        let flat = some(text).flatten();
        let Dynamic::Str(text) = flat.unwrap() else {
            panic!("expected a string payload");
        };
        assert_eq!(text.as_ptr(), addr);
    }

    #[test]
    fn filter_on_none_skips_predicate() {
        let filtered = Optional::<Dynamic>::none()
            .filter(|_| -> bool { panic!("predicate must not run") })
            .unwrap();
        assert!(filtered.is_none());
    }

    #[test]
    fn unwrap_failed_message() {
        let result = std::panic::catch_unwind(|| Optional::<Dynamic>::none().unwrap());
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), option::Option::Some("called `unwrap` on a `None` value"));
    }
}
