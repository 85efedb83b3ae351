use core::fmt;
use std::sync::OnceLock;

static INSTANCE: OnceLock<None> = OnceLock::new();

/// The absent variant.
///
/// There is exactly one `None` per process. It cannot be constructed outside
/// this module; every call to [`None::new`] hands out a reference to the same
/// instance, so `core::ptr::eq(None::new(), None::new())` always holds. The
/// instance is built on first access and lives until the process exits.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct None {
    _private: (),
}

impl None {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> &'static None {
        INSTANCE.get_or_init(|| {
            tracing::trace!("initializing the None singleton");
            None { _private: () }
        })
    }

    #[cfg(feature = "aliases")]
    pub fn create() -> &'static None {
        Self::new()
    }
}

impl fmt::Display for None {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("None")
    }
}
