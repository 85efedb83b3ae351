//! A null-safe optional container.
//!
//! [`Optional`] is either [`Some`] or the process-wide [`None`] singleton.
//! Payloads implement [`Value`], which tells the container what counts as
//! null, what is itself an option and what can be iterated; [`Dynamic`] is a
//! ready-made payload type. Importing the crate's `Some` and `None` shadows the
//! prelude's, the same way the standard variants would.

mod error;
mod factory;
mod iter;
#[cfg(feature = "json")]
mod json;
mod none;
mod optional;
mod some;
mod value;

pub use error::{ErrorKind, OptionError};
pub use factory::Factory;
pub use iter::IntoIter;
pub use none::None;
pub use optional::Optional;
pub use some::Some;
pub use value::{Dynamic, Value};
