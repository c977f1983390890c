//! Value extraction and side effects.

use super::Result;
use crate::error::{Errors, Failed};

pub trait ValueAccess<T>: Sized {
    /// The success value, or `fallback`.
    fn value_or(self, fallback: T) -> T;

    /// The success value, or `f(errors)`. `f` only runs on failure.
    fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Errors) -> T;

    /// The success value, or a [`Failed`] error to be propagated with `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tresult::prelude::*;
    /// use tresult::{failure, Failed, Result};
    ///
    /// fn load() -> core::result::Result<u32, Failed> {
    ///     let r: Result<u32> = failure("missing");
    ///     let v = r.value_or_throw()?;
    ///     Ok(v)
    /// }
    ///
    /// assert_eq!(load().unwrap_err().to_string(), "result is a failure: missing");
    /// ```
    fn value_or_throw(self) -> core::result::Result<T, Failed>;

    /// The success value, or the error built by `f`.
    fn value_or_throw_with<X, F>(self, f: F) -> core::result::Result<T, X>
    where
        F: FnOnce(Errors) -> X;

    /// The success value as an `Option`; failures become `None`.
    fn to_nullable(self) -> Option<T>;
}

impl<T> ValueAccess<T> for Result<T> {
    fn value_or(self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }

    fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Errors) -> T,
    {
        self.unwrap_or_else(f)
    }

    fn value_or_throw(self) -> core::result::Result<T, Failed> {
        self.map_err(Failed::from)
    }

    fn value_or_throw_with<X, F>(self, f: F) -> core::result::Result<T, X>
    where
        F: FnOnce(Errors) -> X,
    {
        self.map_err(f)
    }

    fn to_nullable(self) -> Option<T> {
        self.ok()
    }
}

/// Observing combinators. The result comes back unchanged, whatever the
/// callbacks do.
pub trait Tap<T>: Sized {
    fn tap<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(&T);

    fn tap_error<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(&Errors);

    /// Runs exactly one of the two callbacks.
    fn tap_both<S, F>(self, on_success: S, on_failure: F) -> Result<T>
    where
        S: FnOnce(&T),
        F: FnOnce(&Errors);
}

impl<T> Tap<T> for Result<T> {
    fn tap<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(&T),
    {
        self.inspect(f)
    }

    fn tap_error<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(&Errors),
    {
        self.inspect_err(f)
    }

    fn tap_both<S, F>(self, on_success: S, on_failure: F) -> Result<T>
    where
        S: FnOnce(&T),
        F: FnOnce(&Errors),
    {
        match &self {
            Ok(v) => on_success(v),
            Err(es) => on_failure(es),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::Fault;
    use crate::result::{failure, success};

    #[derive(Debug, PartialEq)]
    struct Missing(usize);

    #[test]
    fn value_or_uses_fallback_only_on_failure() {
        assert_eq!(success(1).value_or(9), 1);
        assert_eq!(failure::<i32>("e").value_or(9), 9);
    }

    #[test]
    fn value_or_else_is_lazy() {
        let called = Cell::new(false);
        let v = success((1, 'a')).value_or_else(|_| {
            called.set(true);
            (0, 'z')
        });
        assert_eq!(v, (1, 'a'));
        assert!(!called.get());
        assert_eq!(failure::<(i32, char)>("e").value_or_else(|_| (0, 'z')), (0, 'z'));
    }

    #[test]
    fn value_or_throw_reports_errors() {
        assert_eq!(success(3).value_or_throw().unwrap(), 3);
        let failed = failure::<i32>("nope").value_or_throw().unwrap_err();
        assert_eq!(failed.errors().primary().message(), "nope");
        assert_eq!(failed.to_string(), "result is a failure: nope");
    }

    #[test]
    fn value_or_throw_with_custom_error() {
        let r = failure::<i32>("a").value_or_throw_with(|es| Missing(es.len()));
        assert_eq!(r, Err(Missing(1)));
    }

    #[test]
    fn to_nullable() {
        assert_eq!(success("v").to_nullable(), Some("v"));
        assert_eq!(failure::<&str>("e").to_nullable(), None);
    }

    #[test]
    fn tap_never_alters_the_result() {
        let log = RefCell::new(vec![]);
        let r = success(4)
            .tap(|v| log.borrow_mut().push(format!("ok {v}")))
            .tap_error(|_| log.borrow_mut().push("err".into()));
        assert_eq!(r.unwrap(), 4);

        let r = failure::<i32>("bad")
            .tap(|_| log.borrow_mut().push("ok".into()))
            .tap_error(|es| log.borrow_mut().push(format!("err {es}")));
        assert_eq!(r.unwrap_err().primary().message(), "bad");
        assert_eq!(*log.borrow(), ["ok 4", "err bad"]);
    }

    #[test]
    fn tap_both_runs_exactly_one_side() {
        let hits = Cell::new((0, 0));
        let bump_ok = |_: &i32| hits.set((hits.get().0 + 1, hits.get().1));
        let bump_err = |_: &Errors| hits.set((hits.get().0, hits.get().1 + 1));
        let _ = success(1).tap_both(bump_ok, bump_err);
        let _ = failure::<i32>("e").tap_both(bump_ok, bump_err);
        assert_eq!(hits.get(), (1, 1));
    }
}
