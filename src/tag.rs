//! Type-level slot indices.
//!
//! A [`OneOf`] may list the same type in several slots, so slots are picked
//! by a Peano-style index rather than by type alone. In most calls the index
//! is inferred and can be left as `_`.
//!
//! [`OneOf`]: crate::one_of::OneOf

use core::marker::PhantomData;

/// The zero index.
pub struct UTerm;

/// The successor of index `U`.
pub struct UInt<U>(PhantomData<U>);

/// A type-level slot index with its runtime value.
pub trait Index {
    /// Zero-based position of the slot.
    const TAG: u8;
}

impl Index for UTerm {
    const TAG: u8 = 0;
}

impl<U: Index> Index for UInt<U> {
    const TAG: u8 = 1 + U::TAG;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;
pub type U4 = UInt<U3>;
pub type U5 = UInt<U4>;
pub type U6 = UInt<U5>;
pub type U7 = UInt<U6>;
pub type U8 = UInt<U7>;
pub type U9 = UInt<U8>;
pub type U10 = UInt<U9>;
pub type U11 = UInt<U10>;
pub type U12 = UInt<U11>;
