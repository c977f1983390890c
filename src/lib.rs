#![doc = include_str!("../README.md")]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]

#[macro_use]
mod macros;

pub mod error;
pub mod one_of;
pub mod result;
pub mod tag;

pub use self::error::{
    fault, Error, ErrorRef, Errors, ExceptionalError, Failed, Fault, MapErrorChainPolicy, Panicked,
};
pub use self::one_of::OneOf;
pub use self::result::{done, exceptional, failure, success, Result};

/// The extension traits carrying the result combinators.
///
/// ```rust
/// use tresult::prelude::*;
/// use tresult::{success, Result};
///
/// let r: Result<(i32, i32)> = success((1, 2));
/// assert_eq!(r.map(|(a, b)| a + b).value_or(0), 3);
/// ```
pub mod prelude {
    pub use crate::result::access::{Tap, ValueAccess};
    pub use crate::result::future::FutureResultExt;
    pub use crate::result::handling::HandleErrors;
    pub use crate::result::transform::{FlattenResult, Transform};
    pub use crate::result::zip::{Zip, ZipAsync};
    pub use crate::result::ResultExt;
}
