//! What a failed call threw, and how that becomes a message.
//!
//! Rust has two ways for a call to "throw": it can return an `Err`, or it
//! can panic with an arbitrary payload. Both end up as a [`Thrown`], which
//! records whether the thrown thing was a real error (something with a
//! message) or just some other value. The adapters normalize a `Thrown`
//! into the single `String` that a failed [`Outcome`](crate::Outcome)
//! carries.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic;

use tracing::debug;

use crate::outcome::Outcome;

/// Prefix put in front of thrown values that are not errors.
pub const UNKNOWN_ERROR_PREFIX: &str = "An unknown error occurred: ";

/// Rendering of a panic payload with no known string representation.
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Returns the `Display` rendering of `$payload` if it is one of `$ty`.
macro_rules! render_payload {
    ($payload:ident: $($ty:ty),+ $(,)?) => {
        $(
            if let Some(value) = $payload.downcast_ref::<$ty>() {
                return Self::Value(value.to_string());
            }
        )+
    };
}

/// Boxed, thread-safe error object.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A thrown or rejected value, tagged by whether it carries a message.
#[derive(Debug)]
pub enum Thrown {
    /// A native error object; its `Display` output is the message.
    Error(BoxError),
    /// Anything else, already rendered to its string representation.
    Value(String),
}

impl Thrown {
    /// Wraps a native error.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Box::new(error))
    }

    /// Wraps an already boxed error.
    pub fn boxed(error: BoxError) -> Self {
        Self::Error(error)
    }

    /// Wraps a non-error value by its string representation.
    pub fn value(value: impl fmt::Display) -> Self {
        Self::Value(value.to_string())
    }

    /// Classifies a panic payload as returned by `catch_unwind`.
    ///
    /// A payload that already is a `Thrown` (see [`Thrown::throw`]) or a
    /// [`BoxError`] keeps its tag. String payloads from `panic!` and std
    /// primitives (numbers, `bool`, `char`) become [`Thrown::Value`] with
    /// their `Display` text. Anything else is opaque and renders as
    /// `Box<dyn Any>`; that includes a concrete error type passed straight
    /// to `panic_any`, which cannot be recognized as an error once boxed.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(thrown) => return *thrown,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<BoxError>() {
            Ok(error) => return Self::Error(*error),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::Value(*message),
            Err(payload) => payload,
        };
        render_payload!(payload: &'static str, char, bool, f32, f64);
        render_payload!(payload: i8, i16, i32, i64, i128, isize);
        render_payload!(payload: u8, u16, u32, u64, u128, usize);
        Self::Value(OPAQUE_PAYLOAD.to_owned())
    }

    /// Panics with `self` as the payload.
    ///
    /// [`Thrown::from_panic`] recovers the value unchanged, so this is the
    /// way to throw a native error through the panic channel.
    pub fn throw(self) -> ! {
        panic::panic_any(self)
    }

    /// `true` for the native error variant.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Normalizes into the failure description.
    pub(crate) fn into_message(self) -> String {
        match self {
            Self::Error(error) => error.to_string(),
            Self::Value(value) => format!("{UNKNOWN_ERROR_PREFIX}{value}"),
        }
    }

    /// Normalizes into a failed outcome, logging it under `adapter`.
    pub(crate) fn into_failure<T>(self, adapter: &'static str) -> Outcome<T> {
        let message = self.into_message();
        debug!(adapter, error = %message, "call failed; captured as outcome");
        Outcome::failure(message)
    }
}

impl<E> From<E> for Thrown
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::error(error)
    }
}
