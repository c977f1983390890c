//! Error values carried by a failed [`Result`](crate::Result).
//!
//! A failure is never a single error but a non-empty, ordered sequence of
//! them ([`Errors`]). The first one is the primary error; combinators that
//! need "the" error look there. Each entry is an [`ErrorRef`], a shared
//! pointer to something implementing [`Fault`]. The crate ships two such
//! types:
//!
//! - [`Error`]: a plain message with an optional code and optional cause;
//! - [`ExceptionalError`]: produced when a fallible or panicking projector
//!   is run through one of the `try_*` combinators.
//!
//! Callers may add their own `Fault` types and query for them with
//! [`has_error`](crate::result::handling::HandleErrors::has_error).
//!
//! All of these are immutable once built. "Modifying" an error, e.g. with
//! [`Error::with_message`], returns a new value.

use derive_more::{Deref, From, Into};
use derive_new::new;
use itertools::Itertools as _;
use nonempty::NonEmpty;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A wrapped cause, usually coming from code outside this crate.
pub type Exception = dyn std::error::Error + Send + Sync + 'static;

/// Shared handle to one error of a failure.
pub type ErrorRef = Arc<dyn Fault>;

/// Anything that can sit in the error sequence of a failed result.
pub trait Fault: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Human readable description.
    fn message(&self) -> &str;

    /// Optional machine readable code.
    fn code(&self) -> Option<&str> {
        None
    }

    /// The wrapped cause, if any.
    fn exception(&self) -> Option<&Exception> {
        None
    }

    /// Used for subtype queries; implement as `self`.
    fn as_any(&self) -> &dyn Any;

    /// The fault this one decorates, for wrappers that only add context.
    fn wrapped(&self) -> Option<&ErrorRef> {
        None
    }
}

impl dyn Fault {
    /// True if this fault, or a fault it wraps, has type `E`.
    pub fn is<E: Fault>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// The first fault of type `E` found by looking through wrappers,
    /// starting with this one.
    pub fn downcast_ref<E: Fault>(&self) -> Option<&E> {
        match self.as_any().downcast_ref::<E>() {
            Some(e) => Some(e),
            None => self.wrapped()?.downcast_ref::<E>(),
        }
    }
}

/// Wrap any [`Fault`] into a shared [`ErrorRef`].
pub fn fault<E: Fault>(e: E) -> ErrorRef {
    Arc::new(e)
}

/// The default error: a message, with optional code and cause.
#[derive(Debug, Clone, new)]
pub struct Error {
    #[new(into)]
    message: String,
    #[new(default)]
    code: Option<String>,
    #[new(default)]
    exception: Option<Arc<Exception>>,
}

impl Error {
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self.clone()
        }
    }

    pub fn with_code(&self, code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..self.clone()
        }
    }

    pub fn with_exception<X>(&self, exception: X) -> Self
    where
        X: std::error::Error + Send + Sync + 'static,
    {
        Self {
            exception: Some(Arc::new(exception)),
            ..self.clone()
        }
    }
}

impl Fault for Error {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn exception(&self) -> Option<&Exception> {
        self.exception.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(c) => write!(f, "[{c}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// An error produced by converting a caught error or panic into data.
///
/// Unlike [`Error`], the cause is always present.
#[derive(Debug, Clone)]
pub struct ExceptionalError {
    message: String,
    exception: Arc<Exception>,
}

impl ExceptionalError {
    pub fn new<X>(exception: X) -> Self
    where
        X: std::error::Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(exception))
    }

    pub fn from_shared(exception: Arc<Exception>) -> Self {
        Self {
            message: exception.to_string(),
            exception,
        }
    }

    /// A copy with another message and the same cause.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exception: Arc::clone(&self.exception),
        }
    }

    /// The caught cause.
    pub fn cause(&self) -> &Exception {
        &*self.exception
    }
}

impl Fault for ExceptionalError {
    fn message(&self) -> &str {
        &self.message
    }

    fn exception(&self) -> Option<&Exception> {
        Some(&*self.exception)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for ExceptionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A panic caught by [`try_catch`](crate::result::transform::Transform::try_catch).
#[derive(Debug, Error)]
#[error("projector panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_owned()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Returned by [`value_or_throw`] when the result was a failure.
///
/// [`value_or_throw`]: crate::result::access::ValueAccess::value_or_throw
#[derive(Debug, Error)]
#[error("result is a failure: {errors}")]
pub struct Failed {
    errors: Errors,
}

impl Failed {
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn into_errors(self) -> Errors {
        self.errors
    }
}

impl From<Errors> for Failed {
    fn from(errors: Errors) -> Self {
        Self { errors }
    }
}

/// How [`map_error`] treats the errors it started from.
///
/// [`map_error`]: crate::result::handling::HandleErrors::map_error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapErrorChainPolicy {
    /// Replace each error by its mapped form.
    #[default]
    ShortCircuit,
    /// Keep the original errors and append the mapped ones after them.
    Accumulate,
}

/// The non-empty, ordered error sequence of a failure.
#[derive(Debug, Clone, From, Into, Deref)]
pub struct Errors(NonEmpty<ErrorRef>);

impl Errors {
    pub fn new(primary: impl Into<ErrorRef>) -> Self {
        Self(NonEmpty::new(primary.into()))
    }

    /// Returns `None` for an empty vector.
    pub fn from_vec(errors: Vec<ErrorRef>) -> Option<Self> {
        NonEmpty::from_vec(errors).map(Self)
    }

    /// Returns `None` for an empty iterator.
    pub fn collect(errors: impl IntoIterator<Item = ErrorRef>) -> Option<Self> {
        NonEmpty::collect(errors).map(Self)
    }

    /// The first error; what single-error consumers look at.
    pub fn primary(&self) -> &ErrorRef {
        &self.0.head
    }

    pub fn push(&mut self, e: impl Into<ErrorRef>) {
        self.0.push(e.into());
    }

    pub fn insert_first(&mut self, e: impl Into<ErrorRef>) {
        let old = std::mem::replace(&mut self.0, NonEmpty::new(e.into()));
        self.0.extend(old);
    }

    /// Appends all of `other` after the errors of `self`.
    pub fn concat(mut self, other: Errors) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|e| e.message())
    }

    pub fn into_vec(self) -> Vec<ErrorRef> {
        self.0.into()
    }

    pub(crate) fn map_each<F>(self, f: F) -> Self
    where
        F: FnMut(ErrorRef) -> ErrorRef,
    {
        Self(self.0.map(f))
    }

    pub(crate) fn replace_first<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorRef) -> ErrorRef,
    {
        let NonEmpty { head, tail } = self.0;
        Self(NonEmpty {
            head: f(&head),
            tail,
        })
    }

    pub(crate) fn replace_last<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorRef) -> ErrorRef,
    {
        let NonEmpty { head, mut tail } = self.0;
        match tail.pop() {
            Some(last) => {
                tail.push(f(&last));
                Self(NonEmpty { head, tail })
            }
            None => Self(NonEmpty::new(f(&head))),
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("; "))
    }
}

impl Extend<ErrorRef> for Errors {
    fn extend<I: IntoIterator<Item = ErrorRef>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = ErrorRef;
    type IntoIter = <NonEmpty<ErrorRef> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ErrorRef;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a ErrorRef>, std::slice::Iter<'a, ErrorRef>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.0.head).chain(self.0.tail.iter())
    }
}

impl From<Error> for ErrorRef {
    fn from(value: Error) -> Self {
        Arc::new(value)
    }
}

impl From<ExceptionalError> for ErrorRef {
    fn from(value: ExceptionalError) -> Self {
        Arc::new(value)
    }
}

impl From<ErrorRef> for Errors {
    fn from(value: ErrorRef) -> Self {
        Self::new(value)
    }
}

impl From<Error> for Errors {
    fn from(value: Error) -> Self {
        Self::new(value)
    }
}

impl From<ExceptionalError> for Errors {
    fn from(value: ExceptionalError) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Errors {
    fn from(value: &str) -> Self {
        Self::new(Error::new(value))
    }
}

impl From<String> for Errors {
    fn from(value: String) -> Self {
        Self::new(Error::new(value))
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use super::{Error, Errors, Fault};
    use serde::{ser::SerializeSeq as _, ser::SerializeStruct as _, Serialize};

    struct Record<'a>(&'a dyn Fault);

    impl Serialize for Record<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let mut st = serializer.serialize_struct("Error", 2)?;
            st.serialize_field("message", self.0.message())?;
            st.serialize_field("code", &self.0.code())?;
            st.end()
        }
    }

    impl Serialize for Error {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Record(self).serialize(serializer)
        }
    }

    impl Serialize for Errors {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for e in self.iter() {
                seq.serialize_element(&Record(&**e))?;
            }
            seq.end()
        }
    }
}
