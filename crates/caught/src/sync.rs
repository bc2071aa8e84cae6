//! Adapters for synchronous calls that may panic or return `Err`.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::outcome::Outcome;
use crate::thrown::Thrown;

/// A callable that can be applied to a tuple of arguments.
///
/// Implemented for every `FnOnce` taking up to six arguments, so a function
/// and its argument list can be handed over separately:
///
/// ```rust
/// use caught::Invoke;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// assert_eq!(add.invoke((1, 2)), 3);
/// assert_eq!((|| "no args").invoke(()), "no args");
/// ```
pub trait Invoke<Args> {
    /// Return type of the call.
    type Output;

    /// Calls `self` with the unpacked `args`.
    fn invoke(self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Invoke<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(self, ($($arg,)*): ($($arg,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A);
impl_invoke!(A, B);
impl_invoke!(A, B, C);
impl_invoke!(A, B, C, D);
impl_invoke!(A, B, C, D, E);
impl_invoke!(A, B, C, D, E, F);

/// Calls `callable(args...)` once and captures a panic as a failure.
///
/// A normal return becomes a success holding the return value. A panic
/// never propagates out of this function; its payload is normalized into
/// the failure message (see [`Thrown::from_panic`]):
///
/// ```rust
/// use caught::{Thrown, wrap_sync};
/// use std::io;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// assert_eq!(wrap_sync(add, (1, 2)).into_value(), Some(3));
///
/// let failed = wrap_sync(|| -> i32 { Thrown::error(io::Error::other("oops")).throw() }, ());
/// assert_eq!(failed.error().map(String::as_str), Some("oops"));
/// ```
///
/// To throw a native error through a panic and keep its message, raise it
/// with [`Thrown::throw`] or as a [`BoxError`](crate::BoxError) payload.
/// A concrete error type handed directly to `panic_any` is opaque to the
/// adapter and reported as `Box<dyn Any>`.
///
/// The callable is run under [`AssertUnwindSafe`]: if it panics halfway
/// through mutating state it borrowed, that state is left as the panic
/// found it.
pub fn wrap_sync<F, Args, T>(callable: F, args: Args) -> Outcome<T>
where
    F: Invoke<Args, Output = T>,
{
    match catch_unwind(AssertUnwindSafe(move || callable.invoke(args))) {
        Ok(value) => Outcome::success(value),
        Err(payload) => Thrown::from_panic(payload).into_failure("sync"),
    }
}

/// Like [`wrap_sync`], for callables that report failure by returning `Err`.
///
/// `Err(e)` is treated as a thrown `e`: native errors contribute their
/// message, [`Thrown::Value`] is prefixed as an unknown error. Panics are
/// captured exactly as in [`wrap_sync`].
pub fn try_wrap_sync<F, Args, T, E>(callable: F, args: Args) -> Outcome<T>
where
    F: Invoke<Args, Output = Result<T, E>>,
    E: Into<Thrown>,
{
    match catch_unwind(AssertUnwindSafe(move || callable.invoke(args))) {
        Ok(Ok(value)) => Outcome::success(value),
        Ok(Err(error)) => {
            let thrown: Thrown = error.into();
            thrown.into_failure("sync")
        }
        Err(payload) => Thrown::from_panic(payload).into_failure("sync"),
    }
}
