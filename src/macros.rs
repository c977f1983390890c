/// Constructs a [`OneOf`] type from a list of alternative types.
///
/// # Examples
///
/// ```rust
/// use tresult::OneOf;
///
/// type Reply = OneOf![i32, String, bool];
/// let r = Reply::from_second("pong".to_string());
/// assert!(r.is_second());
/// ```
///
/// [`OneOf`]: crate::one_of::OneOf
#[macro_export]
macro_rules! OneOf {
    [$($t:ty),* $(,)?] => [$crate::one_of::OneOf::<$crate::T![$($t,)*]>];
}

/// Constructs a type list (heterogeneous list) type from a list of types.
///
/// The value version of the macro is [`t`].
///
/// # Examples
///
/// ```rust
/// use tresult::T;
///
/// type MyList = T![i32, u32, f64];
/// let list: MyList = (42i32, (42u32, (42.0f64, ())));
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Constructs a type list (heterogeneous list) value from a list of values.
///
/// This is how the handlers of [`OneOf::fold`] are passed.
///
/// # Examples
///
/// ```rust
/// use tresult::t;
///
/// let list: (i32, (u32, (f64, ()))) = t![42i32, 42u32, 42.0f64];
/// ```
///
/// [`OneOf::fold`]: crate::one_of::OneOf::fold
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}

/// Zips results positionally, evaluating the operands left to right and
/// stopping at the first failure.
///
/// Unlike [`Zip::zip`] on an already built tuple, operands after the first
/// failing one are never evaluated.
///
/// # Examples
///
/// ```rust
/// use tresult::{failure, success, zip, Result};
///
/// let r: Result<(i32, &str)> = zip!(success(1), success("two"));
/// assert_eq!(r.unwrap(), (1, "two"));
///
/// let mut reached = false;
/// let r: Result<(i32, i32)> = zip!(failure("first"), {
///     reached = true;
///     success(2)
/// });
/// assert!(r.is_err());
/// assert!(!reached);
/// ```
///
/// [`Zip::zip`]: crate::result::zip::Zip::zip
#[macro_export]
macro_rules! zip {
    ($($r:expr),+ $(,)?) => {
        (|| -> $crate::Result<_> { ::core::result::Result::Ok(($($r?,)+)) })()
    };
}
