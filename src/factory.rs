use crate::optional::Optional;
use crate::some::Some as Present;
use crate::value::Value;

/// Coerces arbitrary payloads into [`Optional`]s.
///
/// A null is always treated as absent. [`Factory::with_none_value`]
/// designates one more value that coerces to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Factory<V> {
    none_value: Option<V>,
}

impl<V> Factory<V> {
    pub const fn new() -> Self {
        Self { none_value: None }
    }

    pub fn with_none_value(mut self, none_value: V) -> Self {
        self.none_value = Some(none_value);
        self
    }

    pub const fn none_value(&self) -> Option<&V> {
        self.none_value.as_ref()
    }
}

impl<V> Default for Factory<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> Factory<V> {
    pub fn create(&self, value: V) -> Optional<V> {
        let value = match value.into_optional() {
            Ok(option) => return option,
            Err(value) => value,
        };
        if value.is_null() || self.none_value.as_ref().is_some_and(|none_value| *none_value == value) {
            return Optional::none();
        }
        Optional::Some(Present::wrap(value))
    }

    pub fn create_all<I>(&self, values: I) -> Vec<Optional<V>>
    where
        I: IntoIterator<Item = V>,
    {
        values.into_iter().map(|value| self.create(value)).collect()
    }
}
