//! Async forms of the result combinators.
//!
//! Everything here works on any `Future<Output = Result<T>>`. Each
//! combinator awaits its antecedent first and then hands the settled result
//! to the synchronous combinator of the same name, so the branch behaviour
//! is exactly the synchronous one. Nothing is spawned. A value that is
//! already there is lifted with [`std::future::ready`].
//!
//! Names ending in `_async` take the same delegate as the synchronous
//! combinator. Names ending in `_await` take a delegate returning a future,
//! which is awaited in place of the synchronous call. [`then_async`] is the
//! async-projector bind.
//!
//! [`then_async`]: FutureResultExt::then_async
//!
//! # Examples
//!
//! ```rust
//! use std::future::ready;
//! use tresult::prelude::*;
//! use tresult::success;
//!
//! let r = tokio_test::block_on(
//!     ready(success(20))
//!         .map_async(|v| v + 1)
//!         .then_async(|v| async move { success(v * 2) }),
//! );
//! assert_eq!(r.unwrap(), 42);
//! ```

use core::future::Future;

use super::access::{Tap, ValueAccess};
use super::handling::{HandleErrors, Picked};
use super::transform::{FlattenResult, Transform};
use super::{success, Result, ResultExt};
use crate::error::{ErrorRef, Errors, Failed, Fault, MapErrorChainPolicy};

pub trait FutureResultExt<T>: Future<Output = Result<T>> + Sized {
    fn map_async<U, F>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// `map` with an async projector.
    fn map_await<U, F, Fut>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Ok(v) => Ok(f(v).await),
                Err(es) => Err(es),
            }
        }
    }

    fn bind_async<U, F>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Result<U>,
    {
        async move { self.await.bind(f) }
    }

    /// Async bind. `f` is not called, and its future never built, when the
    /// antecedent failed.
    fn then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U>>,
    {
        async move {
            match self.await {
                Ok(v) => f(v).await,
                Err(es) => Err(es),
            }
        }
    }

    fn try_map_async<U, X, F>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> core::result::Result<U, X>,
        X: std::error::Error + Send + Sync + 'static,
    {
        async move { self.await.try_map(f) }
    }

    /// `try_map` with an async projector; an `Err` it resolves to becomes an
    /// [`ExceptionalError`](crate::ExceptionalError).
    fn try_map_await<U, X, F, Fut>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = core::result::Result<U, X>>,
        X: std::error::Error + Send + Sync + 'static,
    {
        async move {
            let value = self.await?;
            success(f(value).await).try_map(|r| r)
        }
    }

    fn try_bind_async<U, X, F>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> core::result::Result<Result<U>, X>,
        X: std::error::Error + Send + Sync + 'static,
    {
        async move { self.await.try_bind(f) }
    }

    fn try_catch_async<U, F>(self, f: F) -> impl Future<Output = Result<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.try_catch(f) }
    }

    fn flatten_result_async<U>(self) -> impl Future<Output = Result<U>>
    where
        Result<T>: FlattenResult<U>,
    {
        async move { self.await.flatten_result() }
    }

    fn ensure_async<P, F, E>(self, predicate: P, error: F) -> impl Future<Output = Result<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
        E: Into<Errors>,
    {
        async move { self.await.ensure(predicate, error) }
    }

    /// `ensure` with an async predicate. The predicate is not called on a
    /// failure.
    fn ensure_await<P, PFut, F, E>(self, predicate: P, error: F) -> impl Future<Output = Result<T>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        F: FnOnce(&T) -> E,
        E: Into<Errors>,
    {
        async move {
            let value = self.await?;
            let holds = predicate(&value).await;
            success(value).ensure(|_| holds, error)
        }
    }

    fn recover_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Errors) -> T,
    {
        async move { self.await.recover(f) }
    }

    /// `recover` with an async fallback.
    fn recover_await<F, Fut>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Errors) -> Fut,
        Fut: Future<Output = T>,
    {
        async move {
            match self.await {
                Ok(v) => Ok(v),
                Err(es) => Ok(f(es).await),
            }
        }
    }

    fn recover_with_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Errors) -> Result<T>,
    {
        async move { self.await.recover_with(f) }
    }

    fn recover_with_await<F, Fut>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Errors) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        async move {
            match self.await {
                Ok(v) => Ok(v),
                Err(es) => f(es).await,
            }
        }
    }

    fn tap_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(f) }
    }

    /// `tap` with an async action, awaited before the result is passed on.
    fn tap_await<F, Fut>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let r = self.await;
            if let Ok(v) = &r {
                f(v).await;
            }
            r
        }
    }

    fn tap_error_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&Errors),
    {
        async move { self.await.tap_error(f) }
    }

    fn tap_error_await<F, Fut>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&Errors) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let r = self.await;
            if let Err(es) = &r {
                f(es).await;
            }
            r
        }
    }

    fn tap_both_async<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = Result<T>>
    where
        S: FnOnce(&T),
        F: FnOnce(&Errors),
    {
        async move { self.await.tap_both(on_success, on_failure) }
    }

    fn if_success_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&T),
    {
        async move {
            let r = self.await;
            r.if_success(f);
            r
        }
    }

    fn if_failure_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(&Errors),
    {
        async move {
            let r = self.await;
            r.if_failure(f);
            r
        }
    }

    fn map_error_async<F, E>(
        self,
        f: F,
        policy: MapErrorChainPolicy,
    ) -> impl Future<Output = Result<T>>
    where
        F: FnMut(&ErrorRef) -> E,
        E: Into<ErrorRef>,
    {
        async move { self.await.map_error(f, policy) }
    }

    fn map_errors_async<E, F>(self, f: F) -> impl Future<Output = core::result::Result<T, E>>
    where
        F: FnOnce(Errors) -> E,
    {
        async move { self.await.map_errors(f) }
    }

    fn shape_error_async<F>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Errors) -> Errors,
    {
        async move { self.await.shape_error(f) }
    }

    /// Replaces the error sequence by the output of an async transform.
    fn shape_error_await<F, Fut>(self, f: F) -> impl Future<Output = Result<T>>
    where
        F: FnOnce(Errors) -> Fut,
        Fut: Future<Output = Errors>,
    {
        async move {
            match self.await {
                Ok(v) => Ok(v),
                Err(es) => Err(f(es).await),
            }
        }
    }

    fn append_error_async<M>(self, message: M) -> impl Future<Output = Result<T>>
    where
        M: AsRef<str>,
    {
        async move { self.await.append_error(message) }
    }

    fn prepend_error_async<M>(self, message: M) -> impl Future<Output = Result<T>>
    where
        M: AsRef<str>,
    {
        async move { self.await.prepend_error(message) }
    }

    fn filter_error_async<P>(self, predicate: P) -> impl Future<Output = Result<T>>
    where
        P: FnMut(&ErrorRef) -> bool,
    {
        async move { self.await.filter_error(predicate) }
    }

    /// Owned counterpart of `find_error`; the result is gone once awaited.
    fn find_error_async<P>(self, predicate: P) -> impl Future<Output = Option<ErrorRef>>
    where
        P: FnMut(&ErrorRef) -> bool,
    {
        async move { self.await.find_error(predicate).cloned() }
    }

    fn try_pick_error_async<P>(self, predicate: P) -> impl Future<Output = Picked>
    where
        P: FnMut(&ErrorRef) -> bool,
    {
        async move { self.await.try_pick_error(predicate) }
    }

    fn has_error_async<E: Fault>(self) -> impl Future<Output = bool> {
        async move { self.await.has_error::<E>() }
    }

    fn has_exception_async<X>(self) -> impl Future<Output = bool>
    where
        X: std::error::Error + 'static,
    {
        async move { self.await.has_exception::<X>() }
    }

    fn match_error_async<E, R, F, G>(self, on_error: F, on_no_error: G) -> impl Future<Output = R>
    where
        E: Fault,
        F: FnOnce(&E) -> R,
        G: FnOnce() -> R,
    {
        async move { self.await.match_error::<E, R, F, G>(on_error, on_no_error) }
    }

    fn value_or_async(self, fallback: T) -> impl Future<Output = T> {
        async move { self.await.value_or(fallback) }
    }

    fn value_or_else_async<F>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(Errors) -> T,
    {
        async move { self.await.value_or_else(f) }
    }

    fn value_or_throw_async(self) -> impl Future<Output = core::result::Result<T, Failed>> {
        async move { self.await.value_or_throw() }
    }

    fn to_nullable_async(self) -> impl Future<Output = Option<T>> {
        async move { self.await.to_nullable() }
    }

    fn fold_async<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Errors) -> R,
    {
        async move { ResultExt::fold(self.await, on_success, on_failure) }
    }
}

impl<T, F> FutureResultExt<T> for F where F: Future<Output = Result<T>> {}
