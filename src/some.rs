use core::fmt;

use crate::error::OptionError;
use crate::optional::Optional;
use crate::value::Value;

/// The present variant: an immutable holder of exactly one payload.
///
/// A `Some` never holds an absent payload. [`Some::new`] rejects both the
/// none-equivalent sentinel and a payload that is itself an absent option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Some<V> {
    value: V,
}

impl<V: Value> Some<V> {
    pub fn new(value: V) -> Result<Self, OptionError> {
        let absent = value.is_null() || value.as_optional().is_some_and(Optional::is_none);
        if absent {
            let found = value.kind();
            tracing::debug!(found, "rejected an absent payload for `Some`");
            return Err(OptionError::AbsentPayload { found });
        }
        Ok(Self::wrap(value))
    }

    #[cfg(feature = "aliases")]
    pub fn create(value: V) -> Result<Self, OptionError> {
        Self::new(value)
    }
}

impl<V> Some<V> {
    // callers have already ruled out an absent payload
    pub(crate) const fn wrap(value: V) -> Self {
        Self { value }
    }

    pub const fn get(&self) -> &V {
        &self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V: fmt::Display> fmt::Display for Some<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Some({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Dynamic;

    #[test]
    fn rejects_null() {
        let err = Some::new(Dynamic::Null).unwrap_err();
        assert_eq!(err, OptionError::AbsentPayload { found: "null" });
        assert!(err.is_contract_violation());
    }

    #[test]
    fn rejects_wrapped_none() {
        let err = Some::new(Dynamic::from(Optional::<Dynamic>::none())).unwrap_err();
        assert_eq!(err, OptionError::AbsentPayload { found: "option" });
    }

    #[test]
    fn accepts_wrapped_some() {
        let inner = Optional::create(Dynamic::from("foo"));
        let outer = Some::new(Dynamic::from(inner.clone())).unwrap();
        assert_eq!(outer.get(), &Dynamic::from(inner));
    }

    #[test]
    fn payload_is_kept() {
        let some = Some::new(Dynamic::from(42)).unwrap();
        assert_eq!(some.get(), &Dynamic::Int(42));
        assert_eq!(some.to_string(), "Some(42)");
        assert_eq!(some.into_inner(), Dynamic::Int(42));
    }
}
