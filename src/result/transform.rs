//! Transformation and validation combinators.
//!
//! `map` is the standard library's [`Result::map`]: it never runs on a
//! failure and does not catch anything. A panicking projector passed to
//! `map`, `bind` or `ensure` unwinds through the caller. Only the `try_*`
//! combinators turn a projector's error or panic into an
//! [`ExceptionalError`].

use std::panic::{self, AssertUnwindSafe};

use super::Result;
use crate::error::{Errors, ExceptionalError, Panicked};

pub trait Transform<T>: Sized {
    /// Monadic bind: the projector's result becomes the new result. A
    /// failure short-circuits without calling `f`.
    fn bind<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>;

    /// Alias of [`bind`](Transform::bind).
    fn then<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        self.bind(f)
    }

    /// Like `map`, for a fallible projector. An `Err(x)` becomes a failure
    /// whose only error is an [`ExceptionalError`] wrapping `x`.
    fn try_map<U, X, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> core::result::Result<U, X>,
        X: std::error::Error + Send + Sync + 'static;

    /// Like [`bind`](Transform::bind), for a projector that may also fail
    /// outside the error model.
    fn try_bind<U, X, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> core::result::Result<Result<U>, X>,
        X: std::error::Error + Send + Sync + 'static,
    {
        self.try_map(f).flatten_result()
    }

    /// Like `map`, but a panic inside `f` is caught and becomes a failure
    /// whose only error is an [`ExceptionalError`] wrapping [`Panicked`].
    fn try_catch<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> U;

    /// Keeps a success only if `predicate` holds for its value; otherwise
    /// the failure is built from `error`. Failures pass through and the
    /// predicate is not evaluated.
    fn ensure<P, F, E>(self, predicate: P, error: F) -> Result<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
        E: Into<Errors>;
}

impl<T> Transform<T> for Result<T> {
    fn bind<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        self.and_then(f)
    }

    fn try_map<U, X, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> core::result::Result<U, X>,
        X: std::error::Error + Send + Sync + 'static,
    {
        f(self?).map_err(|x| {
            tracing::trace!(error = %x, "projector failed, converting to exceptional error");
            ExceptionalError::new(x).into()
        })
    }

    fn try_catch<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        let value = self?;
        panic::catch_unwind(AssertUnwindSafe(move || f(value))).map_err(|payload| {
            let p = Panicked::from_payload(&*payload);
            tracing::trace!(panic = p.message(), "projector panicked, converting to exceptional error");
            ExceptionalError::new(p).into()
        })
    }

    fn ensure<P, F, E>(self, predicate: P, error: F) -> Result<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
        E: Into<Errors>,
    {
        let value = self?;
        if predicate(&value) {
            Ok(value)
        } else {
            Err(error(&value).into())
        }
    }
}

/// Collapses a nested result. The outer failure wins; the inner result is
/// never looked at when the outer one already failed.
pub trait FlattenResult<T> {
    fn flatten_result(self) -> Result<T>;
}

impl<T> FlattenResult<T> for Result<Result<T>> {
    fn flatten_result(self) -> Result<T> {
        self.and_then(|inner| inner)
    }
}
