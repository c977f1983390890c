//! A result whose failure is a non-empty sequence of errors.
//!
//! [`Result<T>`] is plain [`core::result::Result`] with [`Errors`] on the
//! failure side, so everything the standard library offers (`map`,
//! `and_then`, `?`, ...) keeps working. The arity of the success is the
//! shape of `T`:
//!
//! | arity | success type      | built with                  |
//! |-------|-------------------|-----------------------------|
//! | 0     | `()`              | [`done()`]                  |
//! | 1     | `A`               | [`success(a)`](success)     |
//! | n     | `(A, B, ..)`      | [`success((a, b, ..))`](success) |
//!
//! Every combinator is written once against `T` and therefore covers every
//! arity. They are split by concern into extension traits, all re-exported
//! by [`prelude`](crate::prelude):
//!
//! - [`ResultExt`]: discriminant, borrowing access and total matching;
//! - [`transform::Transform`]: bind/then, try, ensure, flatten;
//! - [`handling::HandleErrors`]: error introspection and reshaping;
//! - [`access::ValueAccess`] and [`access::Tap`]: extraction and side effects;
//! - [`zip::Zip`]: positional combination;
//! - [`future::FutureResultExt`]: the async forms of all of the above.

use crate::error::{ErrorRef, Errors, ExceptionalError};

pub mod access;
pub mod future;
pub mod handling;
pub mod transform;
pub mod zip;

/// Success holding `T`, or failure holding one or more errors.
pub type Result<T = ()> = core::result::Result<T, Errors>;

/// A successful result holding `value`.
pub fn success<T>(value: T) -> Result<T> {
    Ok(value)
}

/// The value-less success.
pub fn done() -> Result {
    Ok(())
}

/// A failed result. Accepts a message, an [`Error`](crate::Error), an
/// [`ErrorRef`] or a whole [`Errors`] sequence.
pub fn failure<T>(errors: impl Into<Errors>) -> Result<T> {
    Err(errors.into())
}

/// A failed result whose single error wraps `exception`.
pub fn exceptional<T, X>(exception: X) -> Result<T>
where
    X: std::error::Error + Send + Sync + 'static,
{
    Err(ExceptionalError::new(exception).into())
}

/// Discriminant checks, borrowing access and total matching.
pub trait ResultExt<T>: Sized {
    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The error sequence of a failure.
    fn errors(&self) -> Option<&Errors>;

    /// The success value, or `None` for a failure.
    fn try_get(&self) -> Option<&T>;

    /// The failure's error sequence, or `None` for a success.
    fn try_get_errors(&self) -> Option<&Errors> {
        self.errors()
    }

    /// The failure's primary error, or `None` for a success.
    fn try_get_error(&self) -> Option<&ErrorRef> {
        self.errors().map(Errors::primary)
    }

    /// Runs `f` on the success value; returns `self` for chaining.
    fn if_success<F: FnOnce(&T)>(&self, f: F) -> &Self;

    /// Runs `f` on the errors of a failure; returns `self` for chaining.
    fn if_failure<F: FnOnce(&Errors)>(&self, f: F) -> &Self;

    /// Calls exactly one of the two functions.
    fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Errors) -> R;
}

impl<T> ResultExt<T> for Result<T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn errors(&self) -> Option<&Errors> {
        self.as_ref().err()
    }

    fn try_get(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    fn if_success<F: FnOnce(&T)>(&self, f: F) -> &Self {
        if let Ok(v) = self {
            f(v);
        }
        self
    }

    fn if_failure<F: FnOnce(&Errors)>(&self, f: F) -> &Self {
        if let Err(es) = self {
            f(es);
        }
        self
    }

    fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Errors) -> R,
    {
        match self {
            Ok(v) => on_success(v),
            Err(es) => on_failure(es),
        }
    }
}
