//! Result-pair wrapper for fallible futures
//!
//! [`settle`] awaits a future and turns its outcome into an
//! `(error, value)` pair. Failure becomes data; nothing is logged, retried
//! or re-raised, and it is up to the caller to check the error slot.

use std::future::Future;

/// Outcome of a settled future: exactly one of error or value is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<T, E> {
    outcome: Result<T, E>,
}

impl<T, E> Settled<T, E> {
    /// A successful outcome
    pub fn fulfilled(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    /// A failed outcome
    pub fn rejected(error: E) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// Whether the future failed
    pub fn is_rejected(&self) -> bool {
        self.outcome.is_err()
    }

    /// The failure, if any
    pub fn error(&self) -> Option<&E> {
        self.outcome.as_ref().err()
    }

    /// The resolved value, if any
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// Split into the `(error, value)` pair
    pub fn into_pair(self) -> (Option<E>, Option<T>) {
        match self.outcome {
            Ok(value) => (None, Some(value)),
            Err(error) => (Some(error), None),
        }
    }

    /// Convert back into a `Result`
    pub fn into_result(self) -> Result<T, E> {
        self.outcome
    }
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        Self { outcome }
    }
}

/// Await `future` and capture its outcome as a [`Settled`] pair
pub async fn settle<F, T, E>(future: F) -> Settled<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    future.await.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_settle_success() {
        let settled = settle(async { Ok::<_, &str>("ok") }).await;
        assert!(!settled.is_rejected());
        assert_eq!(settled.value(), Some(&"ok"));
        assert_eq!(settled, Settled::fulfilled("ok"));
        assert_eq!(settled.into_pair(), (None, Some("ok")));
    }

    #[tokio::test]
    async fn test_settle_failure() {
        let settled = settle(async { Err::<&str, _>("boom") }).await;
        assert!(settled.is_rejected());
        assert_eq!(settled.error(), Some(&"boom"));
        assert_eq!(settled, Settled::rejected("boom"));
        assert_eq!(settled.into_pair(), (Some("boom"), None));
    }

    #[tokio::test]
    async fn test_settle_success_with_unit_value() {
        // A unit value still occupies the value slot
        let (error, value) = settle(async { Ok::<(), String>(()) }).await.into_pair();
        assert!(error.is_none());
        assert_eq!(value, Some(()));
    }

    #[test]
    fn test_constructors_fill_one_slot() {
        let fulfilled = Settled::<u8, String>::fulfilled(7);
        assert!(!fulfilled.is_rejected());
        assert_eq!(fulfilled.error(), None);
        assert_eq!(fulfilled.into_pair(), (None, Some(7)));

        let rejected = Settled::<u8, String>::rejected("nope".to_string());
        assert!(rejected.is_rejected());
        assert_eq!(rejected.value(), None);
        assert_eq!(rejected.into_pair(), (Some("nope".to_string()), None));
    }

    #[test]
    fn test_into_result_roundtrip() {
        let ok: Settled<u8, String> = Ok(3).into();
        assert_eq!(ok.into_result(), Ok(3));

        let err: Settled<u8, String> = Err("bad".to_string()).into();
        assert_eq!(err.into_result(), Err("bad".to_string()));
    }
}
