//! The two-field outcome record and its constructors and predicates.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, IntoDeserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Either a success carrying a value or a failure carrying an error.
///
/// The record has exactly two fields, `value` and `error`, and exactly one
/// of them is `None`. Fields are private: an `Outcome` is built through
/// [`success`], [`failure`], the adapters, `From<Result<T, E>>`, or
/// deserialization (which validates the shape).
///
/// The variant is decided by the `error` field alone, so a payload type
/// that is itself an `Option` stays unambiguous:
///
/// ```rust
/// use caught::{Outcome, success};
///
/// let nothing: Outcome<Option<u8>> = success(None);
/// assert!(nothing.is_success());
/// assert_eq!(nothing.value(), Some(&None));
/// ```
///
/// Serialized form is `{"value": <T or null>, "error": <E or null>}`.
/// Reading it back looks at `error` first: when it is `null`, `value` is
/// read as a `T`, so `null` is a valid payload for `()` or `Option<_>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOutcome<T, E>")]
pub struct Outcome<T, E = String> {
    value: Option<T>,
    error: Option<E>,
}

/// Unvalidated wire shape. Missing fields read as `null`.
#[derive(Deserialize)]
struct RawOutcome<T, E> {
    value: Slot<T>,
    error: Option<E>,
}

/// The `value` field as it appeared on the wire.
enum Slot<T> {
    /// `null` or missing; holds the `T` that `null` stands for, if `T` has one.
    Null(Option<T>),
    Present(T),
}

impl<'de, T> Deserialize<'de> for Slot<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(SlotVisitor(PhantomData))
    }
}

struct SlotVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for SlotVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Slot<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an outcome value or null")
    }

    fn visit_none<Er>(self) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        let unit: de::value::UnitDeserializer<Er> = ().into_deserializer();
        Ok(Slot::Null(T::deserialize(unit).ok()))
    }

    fn visit_unit<Er>(self) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Slot::Present)
    }
}

impl<T, E> TryFrom<RawOutcome<T, E>> for Outcome<T, E> {
    type Error = ShapeError;

    fn try_from(raw: RawOutcome<T, E>) -> Result<Self, Self::Error> {
        match (raw.error, raw.value) {
            (Some(_), Slot::Present(_)) => Err(ShapeError::Both),
            (Some(error), Slot::Null(_)) => Ok(Self::failure(error)),
            (None, Slot::Present(value) | Slot::Null(Some(value))) => Ok(Self::success(value)),
            (None, Slot::Null(None)) => Err(ShapeError::Neither),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Success with `value`; `error` is absent.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// Failure with `error`; `value` is absent.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self {
            value: None,
            error: Some(error),
        }
    }

    /// `true` iff no error is present.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// `true` iff an error is present.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, if any.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The failure description, if any.
    pub const fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Takes the success payload, discarding any error.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Takes the failure description, discarding any value.
    pub fn into_error(self) -> Option<E> {
        self.error
    }

    /// Splits into the raw `(value, error)` pair.
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        (self.value, self.error)
    }

    /// Converts into a std `Result`, keyed off the error field.
    pub fn into_result(self) -> Result<T, E> {
        match (self.value, self.error) {
            (_, Some(error)) => Err(error),
            (Some(value), None) => Ok(value),
            (None, None) => unreachable!("outcome holds neither a value nor an error"),
        }
    }
}

/// Builds a success outcome. See [`Outcome::success`].
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::success(value)
}

/// Builds a failure outcome. See [`Outcome::failure`].
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::failure(error)
}

/// Free-function form of [`Outcome::is_success`].
#[inline]
#[must_use]
pub const fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

/// Free-function form of [`Outcome::is_failure`].
#[inline]
#[must_use]
pub const fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let outcome: Outcome<i32> = success(7);

        assert!(is_success(&outcome));
        assert!(!is_failure(&outcome));
        assert_eq!(outcome.into_parts(), (Some(7), None));
    }

    #[test]
    fn test_failure_shape() {
        let outcome: Outcome<i32> = failure("bad input".to_string());

        assert!(is_failure(&outcome));
        assert!(!is_success(&outcome));
        assert_eq!(outcome.into_parts(), (None, Some("bad input".to_string())));
    }

    #[test]
    fn test_failure_error_need_not_be_a_string() {
        let outcome: Outcome<(), u16> = failure(404);

        assert!(outcome.is_failure());
        assert_eq!(outcome.error(), Some(&404));
    }

    #[test]
    fn test_none_payload_is_still_success() {
        let outcome: Outcome<Option<&str>> = success(None);

        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&None));
        assert_eq!(outcome.into_result(), Ok(None));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(success::<_, String>("x"), Outcome::success("x"));
        assert_ne!(success::<_, String>("x"), success("y"));
        assert_ne!(
            success::<String, String>("x".into()),
            failure("x".into())
        );
    }

    #[test]
    fn test_result_conversions() {
        let ok: Outcome<u8, &str> = Ok(1).into();
        let err: Outcome<u8, &str> = Err("nope").into();

        assert_eq!(ok, success(1));
        assert_eq!(err, failure("nope"));
        assert_eq!(Result::<u8, &str>::from(err), Err("nope"));
    }

    #[test]
    fn test_serializes_both_fields() {
        let ok: Outcome<i32> = success(3);
        let err: Outcome<i32> = failure("oops".to_string());

        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({ "value": 3, "error": null })
        );
        assert_eq!(
            serde_json::to_value(err).unwrap(),
            json!({ "value": null, "error": "oops" })
        );
    }

    #[test]
    fn test_deserialize_accepts_valid_shapes() {
        let ok: Outcome<i32> = serde_json::from_value(json!({ "value": 3, "error": null })).unwrap();
        let err: Outcome<i32> = serde_json::from_value(json!({ "error": "oops" })).unwrap();

        assert_eq!(ok, success(3));
        assert_eq!(err, failure("oops".to_string()));
    }

    #[test]
    fn test_deserialize_rejects_both_present() {
        let err = serde_json::from_value::<Outcome<i32>>(json!({ "value": 3, "error": "oops" }))
            .unwrap_err();

        assert!(err.to_string().contains("both a value and an error"));
    }

    #[test]
    fn test_deserialize_rejects_both_absent() {
        let err =
            serde_json::from_value::<Outcome<i32>>(json!({ "value": null, "error": null }))
                .unwrap_err();

        assert!(err.to_string().contains("neither a value nor an error"));
    }

    #[test]
    fn test_unit_success_round_trips() {
        let outcome: Outcome<()> = success(());
        let json = serde_json::to_string(&outcome).unwrap();

        assert_eq!(json, r#"{"value":null,"error":null}"#);
        assert_eq!(serde_json::from_str::<Outcome<()>>(&json).unwrap(), outcome);
    }

    #[test]
    fn test_optional_success_round_trips() {
        for outcome in [success(None), success(Some(3_u8))] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: Outcome<Option<u8>> = serde_json::from_str(&json).unwrap();

            assert!(back.is_success());
            assert_eq!(back, outcome);
        }
    }

    #[test]
    fn test_error_field_decides_variant_for_nullable_payload() {
        let failed: Outcome<()> =
            serde_json::from_value(json!({ "value": null, "error": "oops" })).unwrap();
        let missing_value: Outcome<Option<u8>> =
            serde_json::from_value(json!({ "error": null })).unwrap();

        assert_eq!(failed, failure("oops".to_string()));
        assert_eq!(missing_value, success(None));
    }
}
