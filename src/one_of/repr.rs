//! The module dealing with the underlying representation of the [`OneOf`]
//! type.
//!
//! # Implementation details
//!
//! A type list `(T1, (T2, (T3, ())))` is represented by a chain of two-way
//! enums terminated by an uninhabited one:
//!
//! ```rust,no_run
//! enum Nil {}
//! enum Cons<T, Next> {
//!     Here(T),
//!     There(Next),
//! }
//!
//! // For example only. Not actually defined.
//! type Repr3<T1, T2, T3> = Cons<T1, Cons<T2, Cons<T3, Nil>>>;
//! ```
//!
//! Since `Nil` has no values, the active alternative is always one of the
//! listed types, and every operation below is a total recursive match.
//!
//! [`OneOf`]: crate::one_of::OneOf

use core::fmt;

use crate::tag::{Index, UInt, UTerm};

/// The terminator of the representation chain. It has no values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nil {}

/// One link of the representation chain: either the value of this slot or
/// a value of one of the following slots.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cons<T, U> {
    Here(T),
    There(U),
}

impl fmt::Debug for Nil {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Display for Nil {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl<T: fmt::Debug, U: fmt::Debug> fmt::Debug for Cons<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::Here(x) => fmt::Debug::fmt(x, f),
            Cons::There(x) => fmt::Debug::fmt(x, f),
        }
    }
}

impl<T: fmt::Display, U: fmt::Display> fmt::Display for Cons<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::Here(x) => fmt::Display::fmt(x, f),
            Cons::There(x) => fmt::Display::fmt(x, f),
        }
    }
}

/// The trait that type lists implement to have a [`OneOf`] representation.
///
/// [`OneOf`]: crate::one_of::OneOf
pub trait SumList {
    /// The underlying representation of the `OneOf` type.
    type Repr;

    /// The number of alternatives in the list.
    const LEN: u8;

    #[doc(hidden)]
    fn tag(this: &Self::Repr) -> u8;
}

impl SumList for () {
    type Repr = Nil;
    const LEN: u8 = 0;

    fn tag(this: &Nil) -> u8 {
        match *this {}
    }
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
{
    type Repr = Cons<Head, Tail::Repr>;
    const LEN: u8 = 1 + Tail::LEN;

    fn tag(this: &Self::Repr) -> u8 {
        match this {
            Cons::Here(_) => 0,
            Cons::There(next) => 1 + Tail::tag(next),
        }
    }
}

/// The trait that type lists implement to support manipulating the variant
/// of type `T` at slot `U`.
pub trait Split<T, U: Index>: SumList {
    /// The type list left after removing slot `U`.
    type Remainder: SumList;

    /// The type list with slot `U` replaced by `T2`.
    type Substitute<T2>: Split<T2, U>;

    #[doc(hidden)]
    fn from_data(data: T) -> Self::Repr;

    #[doc(hidden)]
    fn as_ref(this: &Self::Repr) -> Option<&T>;

    #[doc(hidden)]
    fn as_mut(this: &mut Self::Repr) -> Option<&mut T>;

    #[doc(hidden)]
    fn try_unwrap(
        this: Self::Repr,
    ) -> Result<T, <Self::Remainder as SumList>::Repr>;

    #[doc(hidden)]
    fn substitute<T2>(
        this: Self::Repr,
        f: impl FnOnce(T) -> T2,
    ) -> <Self::Substitute<T2> as SumList>::Repr;
}

impl<Head, Tail> Split<Head, UTerm> for (Head, Tail)
where
    Tail: SumList,
{
    type Remainder = Tail;
    type Substitute<T2> = (T2, Tail);

    fn from_data(data: Head) -> Self::Repr {
        Cons::Here(data)
    }

    fn as_ref(this: &Self::Repr) -> Option<&Head> {
        match this {
            Cons::Here(x) => Some(x),
            Cons::There(_) => None,
        }
    }

    fn as_mut(this: &mut Self::Repr) -> Option<&mut Head> {
        match this {
            Cons::Here(x) => Some(x),
            Cons::There(_) => None,
        }
    }

    fn try_unwrap(this: Self::Repr) -> Result<Head, Tail::Repr> {
        match this {
            Cons::Here(x) => Ok(x),
            Cons::There(rest) => Err(rest),
        }
    }

    fn substitute<T2>(this: Self::Repr, f: impl FnOnce(Head) -> T2) -> Cons<T2, Tail::Repr> {
        match this {
            Cons::Here(x) => Cons::Here(f(x)),
            Cons::There(rest) => Cons::There(rest),
        }
    }
}

impl<Head, Tail, T, U: Index> Split<T, UInt<U>> for (Head, Tail)
where
    Tail: Split<T, U>,
{
    type Remainder = (Head, <Tail as Split<T, U>>::Remainder);
    type Substitute<T2> = (Head, Tail::Substitute<T2>);

    fn from_data(data: T) -> Self::Repr {
        Cons::There(Tail::from_data(data))
    }

    fn as_ref(this: &Self::Repr) -> Option<&T> {
        match this {
            Cons::Here(_) => None,
            Cons::There(rest) => Tail::as_ref(rest),
        }
    }

    fn as_mut(this: &mut Self::Repr) -> Option<&mut T> {
        match this {
            Cons::Here(_) => None,
            Cons::There(rest) => Tail::as_mut(rest),
        }
    }

    fn try_unwrap(this: Self::Repr) -> Result<T, <Self::Remainder as SumList>::Repr> {
        match this {
            Cons::Here(x) => Err(Cons::Here(x)),
            Cons::There(rest) => Tail::try_unwrap(rest).map_err(Cons::There),
        }
    }

    fn substitute<T2>(
        this: Self::Repr,
        f: impl FnOnce(T) -> T2,
    ) -> <Self::Substitute<T2> as SumList>::Repr {
        match this {
            Cons::Here(x) => Cons::Here(x),
            Cons::There(rest) => Cons::There(Tail::substitute(rest, f)),
        }
    }
}

/// Exhaustive consuming dispatch: a list of handlers `(F1, (F2, ..))`, one
/// per alternative, all returning `R`.
pub trait Fold<Fs, R>: SumList {
    #[doc(hidden)]
    fn fold(this: Self::Repr, fs: Fs) -> R;
}

impl<R> Fold<(), R> for () {
    fn fold(this: Nil, _: ()) -> R {
        match this {}
    }
}

impl<Head, Tail, F, Fs, R> Fold<(F, Fs), R> for (Head, Tail)
where
    Tail: Fold<Fs, R>,
    F: FnOnce(Head) -> R,
{
    fn fold(this: Self::Repr, (f, fs): (F, Fs)) -> R {
        match this {
            Cons::Here(x) => f(x),
            Cons::There(rest) => Tail::fold(rest, fs),
        }
    }
}

/// Exhaustive borrowing dispatch, the by-reference analogue of [`Fold`].
pub trait FoldRef<'a, Fs, R>: SumList {
    #[doc(hidden)]
    fn fold_ref(this: &'a Self::Repr, fs: Fs) -> R;
}

impl<'a, R> FoldRef<'a, (), R> for () {
    fn fold_ref(this: &'a Nil, _: ()) -> R {
        match *this {}
    }
}

impl<'a, Head, Tail, F, Fs, R> FoldRef<'a, (F, Fs), R> for (Head, Tail)
where
    Head: 'a,
    Tail: FoldRef<'a, Fs, R>,
    F: FnOnce(&'a Head) -> R,
{
    fn fold_ref(this: &'a Self::Repr, (f, fs): (F, Fs)) -> R {
        match this {
            Cons::Here(x) => f(x),
            Cons::There(rest) => Tail::fold_ref(rest, fs),
        }
    }
}
