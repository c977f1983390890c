//! A closed tagged union over a type list.
//!
//! `OneOf<T![A, B, C]>` (spelled `OneOf![A, B, C]`) holds exactly one value
//! whose type is one of `A`, `B` or `C`. The alternatives are stored in a
//! chain of safe enums (see [`repr`]), so the compiler, not a runtime tag,
//! guarantees that one and only one slot is populated and that every match is
//! exhaustive.
//!
//! Slots can be addressed two ways:
//!
//! - generically by type plus [index tag](crate::tag), e.g.
//!   [`get::<String, _>()`](OneOf::get), which works for lists of any length;
//! - by ordinal name, e.g. [`from_second`](OneOf::from_second),
//!   [`is_second`](OneOf::is_second), [`second`](OneOf::second), available
//!   for the first eight slots of any list long enough to have them.

use core::fmt;

pub mod repr;

use self::repr::{Fold, FoldRef, Split, SumList};
use crate::tag::{Index, U0, U1, U2, U3, U4, U5, U6, U7};

/// The representation type of a type list.
pub type Repr<S> = <S as SumList>::Repr;

/// The type list left after removing slot `U` of type `T` from `S`.
pub type Rem<S, T, U> = <S as Split<T, U>>::Remainder;

/// The type list `S` with slot `U` of type `T` replaced by `T2`.
pub type Substitute<S, T, T2, U> = <S as Split<T, U>>::Substitute<T2>;

/// A value that is exactly one of the types in the list `S`.
pub struct OneOf<S: SumList> {
    repr: Repr<S>,
}

impl<S: SumList> OneOf<S> {
    /// Injects `value` into the slot `U` of type `T`.
    ///
    /// The index can usually be inferred when `T` occurs once in the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tresult::OneOf;
    ///
    /// let v = <OneOf![i32, String]>::new("text".to_string());
    /// assert!(v.is_second());
    /// ```
    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        OneOf {
            repr: S::from_data(value),
        }
    }

    /// Zero-based index of the active slot.
    pub fn tag(&self) -> u8 {
        S::tag(&self.repr)
    }

    /// Number of alternatives in the list.
    pub fn len(&self) -> usize {
        usize::from(S::LEN)
    }

    /// Always false: a `OneOf` that exists holds a value.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is<T, U>(&self) -> bool
    where
        S: Split<T, U>,
        U: Index,
    {
        self.tag() == U::TAG
    }

    /// Returns the value in slot `U` if that slot is the active one.
    pub fn get<T, U>(&self) -> Option<&T>
    where
        S: Split<T, U>,
        U: Index,
    {
        S::as_ref(&self.repr)
    }

    pub fn get_mut<T, U>(&mut self) -> Option<&mut T>
    where
        S: Split<T, U>,
        U: Index,
    {
        S::as_mut(&mut self.repr)
    }

    /// Runs `f` on the value of slot `U` if it is active.
    pub fn inspect<T, U, F>(self, f: F) -> Self
    where
        S: Split<T, U>,
        U: Index,
        F: FnOnce(&T),
    {
        if let Some(value) = self.get() {
            f(value);
        }
        self
    }

    /// Takes the value of slot `U` out, or narrows the union to the
    /// remaining alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tresult::OneOf;
    ///
    /// let v = <OneOf![i32, String, bool]>::from_third(true);
    /// let rest = v.try_unwrap::<i32, _>().unwrap_err();
    /// assert_eq!(rest.try_unwrap::<bool, _>().ok(), Some(true));
    /// ```
    pub fn try_unwrap<T, U>(self) -> Result<T, OneOf<Rem<S, T, U>>>
    where
        S: Split<T, U>,
        U: Index,
    {
        S::try_unwrap(self.repr).map_err(|repr| OneOf { repr })
    }

    /// Transforms the value of slot `U`, changing that slot's type to `T2`.
    /// Other slots pass through untouched.
    pub fn map<T, T2, U>(self, f: impl FnOnce(T) -> T2) -> OneOf<Substitute<S, T, T2, U>>
    where
        S: Split<T, U>,
        U: Index,
    {
        OneOf {
            repr: S::substitute(self.repr, f),
        }
    }

    /// Consumes the union and calls the handler of the active slot.
    ///
    /// The handlers form a type list built with [`t!`](crate::t), one per
    /// alternative, so a missing handler is a compile error. For lists of
    /// two to eight alternatives, [`match_with`](OneOf::match_with) takes the
    /// handlers as plain arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tresult::{t, OneOf};
    ///
    /// let v = <OneOf![i32, &str]>::from_first(2);
    /// let n = v.fold(t![|x: i32| x * 10, |s: &str| s.len() as i32]);
    /// assert_eq!(n, 20);
    /// ```
    pub fn fold<Fs, R>(self, fs: Fs) -> R
    where
        S: Fold<Fs, R>,
    {
        S::fold(self.repr, fs)
    }

    /// Borrowing analogue of [`fold`](OneOf::fold). With handlers returning
    /// `()` this is the side-effect match.
    pub fn fold_ref<'a, Fs, R>(&'a self, fs: Fs) -> R
    where
        S: FoldRef<'a, Fs, R>,
    {
        S::fold_ref(&self.repr, fs)
    }
}

impl<T> From<T> for OneOf![T] {
    fn from(value: T) -> Self {
        OneOf::new(value)
    }
}

impl<T> OneOf![T] {
    pub fn into_inner(self) -> T {
        match self.repr {
            repr::Cons::Here(x) => x,
            repr::Cons::There(nil) => match nil {},
        }
    }
}

impl OneOf![] {
    pub fn unreachable(self) -> ! {
        match self.repr {}
    }
}

macro_rules! impl_slot {
    (
        $index:ty, [$($g:ident),*], $list:ty, $t:ident,
        $from:ident, $is:ident, $get:ident, $get_mut:ident, $into:ident
    ) => {
        impl<$($g,)* $t, Tail: SumList> OneOf<$list> {
            #[doc = concat!("Constructs the union from its `", stringify!($t), "` slot.")]
            pub fn $from(value: $t) -> Self {
                Self::new::<$t, $index>(value)
            }

            #[doc = concat!("True iff the `", stringify!($t), "` slot is active.")]
            pub fn $is(&self) -> bool {
                self.is::<$t, $index>()
            }

            #[doc = concat!("The `", stringify!($t), "` value, if that slot is active.")]
            pub fn $get(&self) -> Option<&$t> {
                self.get::<$t, $index>()
            }

            pub fn $get_mut(&mut self) -> Option<&mut $t> {
                self.get_mut::<$t, $index>()
            }

            pub fn $into(self) -> Result<$t, OneOf<Rem<$list, $t, $index>>> {
                self.try_unwrap::<$t, $index>()
            }
        }
    };
}

impl_slot!(U0, [], (A, Tail), A, from_first, is_first, first, first_mut, into_first);
impl_slot!(U1, [A], (A, (B, Tail)), B, from_second, is_second, second, second_mut, into_second);
impl_slot!(
    U2, [A, B], (A, (B, (C, Tail))), C,
    from_third, is_third, third, third_mut, into_third
);
impl_slot!(
    U3, [A, B, C], (A, (B, (C, (D, Tail)))), D,
    from_fourth, is_fourth, fourth, fourth_mut, into_fourth
);
impl_slot!(
    U4, [A, B, C, D], (A, (B, (C, (D, (E, Tail))))), E,
    from_fifth, is_fifth, fifth, fifth_mut, into_fifth
);
impl_slot!(
    U5, [A, B, C, D, E], (A, (B, (C, (D, (E, (F, Tail)))))), F,
    from_sixth, is_sixth, sixth, sixth_mut, into_sixth
);
impl_slot!(
    U6, [A, B, C, D, E, F], (A, (B, (C, (D, (E, (F, (G, Tail))))))), G,
    from_seventh, is_seventh, seventh, seventh_mut, into_seventh
);
impl_slot!(
    U7, [A, B, C, D, E, F, G], (A, (B, (C, (D, (E, (F, (G, (H, Tail)))))))), H,
    from_eighth, is_eighth, eighth, eighth_mut, into_eighth
);

macro_rules! impl_match {
    ($($f:ident: $t:ident),+) => {
        impl<$($t),+> OneOf<crate::T![$($t),+]> {
            /// Consumes the union and calls the handler of the active slot.
            /// Exactly one handler runs.
            pub fn match_with<R>(self, $($f: impl FnOnce($t) -> R),+) -> R {
                self.fold(crate::t![$($f),+])
            }

            /// Calls the handler of the active slot with a reference to its
            /// value. Exactly one handler runs.
            pub fn match_ref<'a, R>(&'a self, $($f: impl FnOnce(&'a $t) -> R),+) -> R {
                self.fold_ref(crate::t![$($f),+])
            }
        }
    };
}

impl_match!(f1: A, f2: B);
impl_match!(f1: A, f2: B, f3: C);
impl_match!(f1: A, f2: B, f3: C, f4: D);
impl_match!(f1: A, f2: B, f3: C, f4: D, f5: E);
impl_match!(f1: A, f2: B, f3: C, f4: D, f5: E, f6: F);
impl_match!(f1: A, f2: B, f3: C, f4: D, f5: E, f6: F, f7: G);
impl_match!(f1: A, f2: B, f3: C, f4: D, f5: E, f6: F, f7: G, f8: H);

impl<S: SumList> fmt::Debug for OneOf<S>
where
    Repr<S>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.repr, f)
    }
}

impl<S: SumList> fmt::Display for OneOf<S>
where
    Repr<S>: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.repr, f)
    }
}

impl<S: SumList> Clone for OneOf<S>
where
    Repr<S>: Clone,
{
    fn clone(&self) -> Self {
        OneOf {
            repr: self.repr.clone(),
        }
    }
}

impl<S: SumList> Copy for OneOf<S> where Repr<S>: Copy {}

impl<S: SumList> PartialEq for OneOf<S>
where
    Repr<S>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<S: SumList> Eq for OneOf<S> where Repr<S>: Eq {}

impl<S: SumList> PartialOrd for OneOf<S>
where
    Repr<S>: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.repr.partial_cmp(&other.repr)
    }
}

impl<S: SumList> Ord for OneOf<S>
where
    Repr<S>: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl<S: SumList> core::hash::Hash for OneOf<S>
where
    Repr<S>: core::hash::Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::t;

    type Three = OneOf![u32, String, bool];

    #[test]
    fn basic() {
        let v = Three::from_second("Hello World!".to_string());
        assert_eq!(v.tag(), 1);
        assert_eq!(v.len(), 3);
        assert!(!v.is_first());
        assert!(v.is_second());
        assert!(!v.is_third());
        assert_eq!(v.first(), None);
        assert_eq!(v.second().map(String::as_str), Some("Hello World!"));
        assert_eq!(v.third(), None);
    }

    #[test]
    fn repeated_types_are_told_apart_by_index() {
        type Twice = OneOf![u32, u32];

        let v = Twice::from_second(7);
        assert!(v.is_second());
        assert_eq!(v.get::<u32, U1>(), Some(&7));
        assert_eq!(v.get::<u32, U0>(), None);
        assert_ne!(v, Twice::from_first(7));
    }

    #[test]
    fn generic_injection_matches_ordinal_injection() {
        let a = Three::new(5u32);
        let b = Three::from_first(5);
        assert_eq!(a, b);
        assert!(Three::new(false).is::<bool, _>());
    }

    #[test]
    fn match_invokes_only_the_active_handler() {
        let calls = Cell::new(0);
        let v = Three::from_third(true);
        let out = v.match_with(
            |_| {
                calls.set(calls.get() + 1);
                "first"
            },
            |_| {
                calls.set(calls.get() + 1);
                "second"
            },
            |b| {
                calls.set(calls.get() + 1);
                if b { "third" } else { "nope" }
            },
        );
        assert_eq!(out, "third");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn match_ref_for_side_effects() {
        let seen = Cell::new(None);
        let v = Three::from_first(9);
        v.match_ref(|x| seen.set(Some(*x)), |_| (), |_| ());
        assert_eq!(seen.get(), Some(9));
        // still usable afterwards
        assert_eq!(v.first(), Some(&9));
    }

    type Eight = OneOf![u8, u16, u32, u64, i8, i16, i32, char];

    fn eight_of_each() -> [Eight; 8] {
        [
            Eight::from_first(0),
            Eight::from_second(1),
            Eight::from_third(2),
            Eight::from_fourth(3),
            Eight::from_fifth(4),
            Eight::from_sixth(5),
            Eight::from_seventh(6),
            Eight::from_eighth('7'),
        ]
    }

    #[test]
    fn every_ordinal_of_an_eight_slot_union() {
        for (i, v) in eight_of_each().into_iter().enumerate() {
            let flags = [
                v.is_first(),
                v.is_second(),
                v.is_third(),
                v.is_fourth(),
                v.is_fifth(),
                v.is_sixth(),
                v.is_seventh(),
                v.is_eighth(),
            ];
            assert_eq!(usize::from(v.tag()), i);
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert!(flags[i]);

            let calls = Cell::new(0);
            let hit = |n: usize| {
                calls.set(calls.get() + 1);
                n
            };
            let by_ref = v.match_ref(
                |_| hit(0),
                |_| hit(1),
                |_| hit(2),
                |_| hit(3),
                |_| hit(4),
                |_| hit(5),
                |_| hit(6),
                |_| hit(7),
            );
            let by_value = v.match_with(
                |_| hit(0),
                |_| hit(1),
                |_| hit(2),
                |_| hit(3),
                |_| hit(4),
                |_| hit(5),
                |_| hit(6),
                |_| hit(7),
            );
            assert_eq!((by_ref, by_value), (i, i));
            assert_eq!(calls.get(), 2);
        }
    }

    #[test]
    fn ordinal_getters_of_an_eight_slot_union() {
        let [a, b, c, d, e, f, g, h] = eight_of_each();
        assert_eq!(a.first(), Some(&0));
        assert_eq!(b.second(), Some(&1));
        assert_eq!(c.third(), Some(&2));
        assert_eq!(d.fourth(), Some(&3));
        assert_eq!(e.fifth(), Some(&4));
        assert_eq!(f.sixth(), Some(&5));
        assert_eq!(g.seventh(), Some(&6));
        assert_eq!(h.eighth(), Some(&'7'));
        assert_eq!(h.fourth(), None);

        let mut e = e;
        if let Some(x) = e.fifth_mut() {
            *x -= 10;
        }
        assert_eq!(e.into_fifth().ok(), Some(-6));

        let rest = h.into_first().unwrap_err();
        assert_eq!(rest.len(), 7);
        assert_eq!(rest.seventh(), Some(&'7'));
        assert_eq!(d.into_eighth().unwrap_err().fourth(), Some(&3));
    }

    #[test]
    fn fold_over_a_long_list() {
        type Nine = OneOf![u8, u8, u8, u8, u8, u8, u8, u8, char];
        let v = Nine::new('z');
        assert_eq!(v.tag(), 8);
        assert_eq!(v.get::<char, crate::tag::U8>(), Some(&'z'));
        let s = v.fold(t![
            |_: u8| 0,
            |_: u8| 1,
            |_: u8| 2,
            |_: u8| 3,
            |_: u8| 4,
            |_: u8| 5,
            |_: u8| 6,
            |_: u8| 7,
            |c: char| c as u32,
        ]);
        assert_eq!(s, 'z' as u32);
    }

    #[test]
    fn narrowing_and_mapping() {
        let v = Three::from_first(41);
        let v = v.map::<u32, u64, _>(|x| u64::from(x) + 1);
        assert_eq!(v.first(), Some(&42u64));

        let rest = Three::from_second("s".to_string()).into_first().unwrap_err();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest.first().map(String::as_str), Some("s"));

        let single: OneOf![bool] = Three::from_third(true)
            .into_first()
            .unwrap_err()
            .into_first()
            .unwrap_err();
        assert!(single.into_inner());
    }

    #[test]
    fn mutation_through_slot_accessor() {
        let mut v = Three::from_second(String::from("a"));
        if let Some(s) = v.second_mut() {
            s.push('b');
        }
        assert!(v.first_mut().is_none());
        assert_eq!(v.second().map(String::as_str), Some("ab"));
    }

    #[test]
    fn ordering_follows_slot_then_value() {
        let a = Three::from_first(100);
        let b = Three::from_second(String::new());
        let c = Three::from_first(1);
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn debug_and_display_show_the_active_value() {
        let v = Three::from_second("x".to_string());
        assert_eq!(format!("{v:?}"), "\"x\"");
        assert_eq!(format!("{v}"), "x");
    }

    #[test]
    fn inspect_runs_on_active_slot_only() {
        let seen = Cell::new(0u32);
        let v = Three::from_first(3)
            .inspect::<u32, _, _>(|x| seen.set(*x))
            .inspect::<bool, _, _>(|_| seen.set(100));
        assert_eq!(seen.get(), 3);
        assert!(v.is_first());
    }
}
