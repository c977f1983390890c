//! Positional combination of results.
//!
//! Operands are looked at strictly left to right and the first failure is
//! returned as is. Errors of later operands are not collected. For the lazy
//! form that does not even evaluate later operands, see [`zip!`](crate::zip).

use core::future::Future;

use super::Result;

/// A tuple of two to eight results.
pub trait Zip: Sized {
    /// The tuple of success values.
    type Output;

    /// All values if every operand succeeded, else the first failure.
    fn zip(self) -> Result<Self::Output>;

    /// [`zip`](Zip::zip), then project the tuple.
    fn zip_with<R, F>(self, f: F) -> Result<R>
    where
        F: FnOnce(Self::Output) -> R,
    {
        self.zip().map(f)
    }
}

/// A tuple of two to eight futures of results.
pub trait ZipAsync: Sized {
    type Output;

    /// Awaits the operands one after the other. The first failure ends the
    /// zip; the remaining futures are dropped without being polled.
    fn zip_async(self) -> impl Future<Output = Result<Self::Output>>;

    /// [`zip_async`](ZipAsync::zip_async), then project the tuple.
    fn zip_with_async<R, F>(self, f: F) -> impl Future<Output = Result<R>>
    where
        F: FnOnce(Self::Output) -> R,
    {
        let zipped = self.zip_async();
        async move { zipped.await.map(f) }
    }
}

macro_rules! impl_zip {
    ($($r:ident: $f:ident => $t:ident),+) => {
        impl<$($t),+> Zip for ($(Result<$t>,)+) {
            type Output = ($($t,)+);

            fn zip(self) -> Result<Self::Output> {
                let ($($r,)+) = self;
                Ok(($($r?,)+))
            }
        }

        impl<$($f,)+ $($t),+> ZipAsync for ($($f,)+)
        where
            $($f: Future<Output = Result<$t>>,)+
        {
            type Output = ($($t,)+);

            fn zip_async(self) -> impl Future<Output = Result<Self::Output>> {
                let ($($r,)+) = self;
                async move { Ok(($($r.await?,)+)) }
            }
        }
    };
}

impl_zip!(r1: F1 => A, r2: F2 => B);
impl_zip!(r1: F1 => A, r2: F2 => B, r3: F3 => C);
impl_zip!(r1: F1 => A, r2: F2 => B, r3: F3 => C, r4: F4 => D);
impl_zip!(r1: F1 => A, r2: F2 => B, r3: F3 => C, r4: F4 => D, r5: F5 => E);
impl_zip!(r1: F1 => A, r2: F2 => B, r3: F3 => C, r4: F4 => D, r5: F5 => E, r6: F6 => F);
impl_zip!(
    r1: F1 => A, r2: F2 => B, r3: F3 => C, r4: F4 => D, r5: F5 => E, r6: F6 => F, r7: F7 => G
);
impl_zip!(
    r1: F1 => A, r2: F2 => B, r3: F3 => C, r4: F4 => D, r5: F5 => E, r6: F6 => F, r7: F7 => G,
    r8: F8 => H
);
