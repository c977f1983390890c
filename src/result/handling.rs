//! Error introspection and reshaping.
//!
//! Every combinator here leaves a success untouched and never reorders the
//! errors of a failure.

use super::Result;
use crate::error::{Error, ErrorRef, Errors, ExceptionalError, Fault, MapErrorChainPolicy};

/// Outcome of [`try_pick_error`](HandleErrors::try_pick_error).
#[derive(Debug, Clone)]
pub struct Picked {
    pub found: bool,
    pub error: Option<ErrorRef>,
}

fn with_context(e: &ErrorRef, context: &str) -> ErrorRef {
    let message = format!("{context}: {}", e.message());
    let any = e.as_any();
    if let Some(plain) = any.downcast_ref::<Error>() {
        return plain.with_message(message).into();
    }
    match any.downcast_ref::<ExceptionalError>() {
        Some(caught) => caught.with_message(message).into(),
        None => {
            let mut fresh = Error::new(message);
            if let Some(code) = e.code() {
                fresh = fresh.with_code(code);
            }
            ContextError::wrap(fresh, e.clone())
        }
    }
}

/// A context message put in front of a caller-defined fault. The original
/// stays reachable through `inner`, and type queries such as
/// [`has_error`](HandleErrors::has_error) still see it.
#[derive(Debug)]
pub struct ContextError {
    outer: Error,
    inner: ErrorRef,
}

impl ContextError {
    fn wrap(outer: Error, inner: ErrorRef) -> ErrorRef {
        crate::error::fault(Self { outer, inner })
    }

    pub fn inner(&self) -> &ErrorRef {
        &self.inner
    }
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.outer, f)
    }
}

impl Fault for ContextError {
    fn message(&self) -> &str {
        self.outer.message()
    }

    fn code(&self) -> Option<&str> {
        self.outer.code()
    }

    fn exception(&self) -> Option<&crate::error::Exception> {
        self.inner.exception()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn wrapped(&self) -> Option<&ErrorRef> {
        Some(&self.inner)
    }
}

pub trait HandleErrors<T>: Sized {
    /// Puts `message` in front of the last error's message
    /// (`"{message}: {old}"`). The number of errors does not change.
    fn append_error(self, message: impl AsRef<str>) -> Result<T>;

    /// Puts `message` in front of the primary error's message.
    fn prepend_error(self, message: impl AsRef<str>) -> Result<T>;

    /// Maps each error. With [`MapErrorChainPolicy::ShortCircuit`] the
    /// mapped errors replace the originals; with
    /// [`MapErrorChainPolicy::Accumulate`] they are appended after them.
    fn map_error<F, E>(self, f: F, policy: MapErrorChainPolicy) -> Result<T>
    where
        F: FnMut(&ErrorRef) -> E,
        E: Into<ErrorRef>;

    /// Maps the whole error sequence into another error representation.
    fn map_errors<E, F>(self, f: F) -> core::result::Result<T, E>
    where
        F: FnOnce(Errors) -> E;

    /// Replaces the error sequence by `f(errors)`.
    fn shape_error<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(Errors) -> Errors;

    /// Keeps only the errors matching `predicate`. If none match, the
    /// original errors are kept: a failure cannot be emptied.
    fn filter_error<P>(self, predicate: P) -> Result<T>
    where
        P: FnMut(&ErrorRef) -> bool;

    /// First error matching `predicate`; `None` on success.
    fn find_error<P>(&self, predicate: P) -> Option<&ErrorRef>
    where
        P: FnMut(&ErrorRef) -> bool;

    fn try_pick_error<P>(&self, predicate: P) -> Picked
    where
        P: FnMut(&ErrorRef) -> bool,
    {
        let error = self.find_error(predicate).cloned();
        Picked {
            found: error.is_some(),
            error,
        }
    }

    /// True if this is a failure with at least one error of type `E`,
    /// context wrappers included.
    fn has_error<E: Fault>(&self) -> bool {
        self.find_error(|e| e.is::<E>()).is_some()
    }

    /// True if this is a failure with at least one error wrapping an
    /// exception of type `X`.
    fn has_exception<X>(&self) -> bool
    where
        X: std::error::Error + 'static,
    {
        self.find_error(|e| e.exception().is_some_and(|x| x.is::<X>()))
            .is_some()
    }

    /// Turns a failure into a success built from its errors.
    fn recover<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(Errors) -> T;

    /// Like [`recover`](HandleErrors::recover), but the fallback may fail too.
    fn recover_with<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(Errors) -> Result<T>;

    /// Calls `on_error` with the first error of type `E`; calls
    /// `on_no_error` on success or when no error has that type.
    fn match_error<E, R, F, G>(&self, on_error: F, on_no_error: G) -> R
    where
        E: Fault,
        F: FnOnce(&E) -> R,
        G: FnOnce() -> R;
}

impl<T> HandleErrors<T> for Result<T> {
    fn append_error(self, message: impl AsRef<str>) -> Result<T> {
        self.map_err(|es| es.replace_last(|e| with_context(e, message.as_ref())))
    }

    fn prepend_error(self, message: impl AsRef<str>) -> Result<T> {
        self.map_err(|es| es.replace_first(|e| with_context(e, message.as_ref())))
    }

    fn map_error<F, E>(self, mut f: F, policy: MapErrorChainPolicy) -> Result<T>
    where
        F: FnMut(&ErrorRef) -> E,
        E: Into<ErrorRef>,
    {
        self.map_err(|es| match policy {
            MapErrorChainPolicy::ShortCircuit => es.map_each(|e| f(&e).into()),
            MapErrorChainPolicy::Accumulate => {
                let mapped: Vec<ErrorRef> = es.iter().map(|e| f(e).into()).collect();
                let mut es = es;
                for e in mapped {
                    es.push(e);
                }
                es
            }
        })
    }

    fn map_errors<E, F>(self, f: F) -> core::result::Result<T, E>
    where
        F: FnOnce(Errors) -> E,
    {
        self.map_err(f)
    }

    fn shape_error<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(Errors) -> Errors,
    {
        self.map_err(f)
    }

    fn filter_error<P>(self, mut predicate: P) -> Result<T>
    where
        P: FnMut(&ErrorRef) -> bool,
    {
        self.map_err(|es| {
            let kept = es.iter().filter(|e| predicate(e)).cloned();
            match Errors::collect(kept) {
                Some(kept) => kept,
                None => {
                    tracing::debug!(
                        errors = es.len(),
                        "filter matched no error, keeping the original errors"
                    );
                    es
                }
            }
        })
    }

    fn find_error<P>(&self, mut predicate: P) -> Option<&ErrorRef>
    where
        P: FnMut(&ErrorRef) -> bool,
    {
        self.as_ref().err()?.iter().find(|e| predicate(e))
    }

    fn recover<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(Errors) -> T,
    {
        self.or_else(|es| Ok(f(es)))
    }

    fn recover_with<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(Errors) -> Result<T>,
    {
        self.or_else(f)
    }

    fn match_error<E, R, F, G>(&self, on_error: F, on_no_error: G) -> R
    where
        E: Fault,
        F: FnOnce(&E) -> R,
        G: FnOnce() -> R,
    {
        match self
            .as_ref()
            .err()
            .and_then(|es| es.iter().find_map(|e| e.downcast_ref::<E>()))
        {
            Some(e) => on_error(e),
            None => on_no_error(),
        }
    }
}
