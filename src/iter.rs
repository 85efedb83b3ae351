use core::iter::FusedIterator;
use std::vec;

use crate::optional::Optional;
use crate::value::Value;

/// Iterator over the contents of an [`Optional`].
///
/// `None` yields nothing. `Some` yields the elements of an iterable payload,
/// or the payload itself when it is not iterable.
#[derive(Debug, Clone)]
pub struct IntoIter<V> {
    inner: vec::IntoIter<V>,
}

impl<V: Value> IntoIter<V> {
    pub(crate) fn new(option: Optional<V>) -> Self {
        let items = match option {
            Optional::Some(some) => some.into_inner().into_elements().unwrap_or_else(|value| vec![value]),
            Optional::None(_) => Vec::new(),
        };
        Self { inner: items.into_iter() }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    #[inline]
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
