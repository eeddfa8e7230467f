//! Error types returned by [`BinaryMinHeap`](crate::BinaryMinHeap).

use thiserror::Error;

/// Error returned by heap operations that need at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// [`peek_min`](crate::BinaryMinHeap::peek_min) or
    /// [`extract_min`](crate::BinaryMinHeap::extract_min) was called on an empty heap.
    #[error("priority queue underflow")]
    Underflow,
}

/// Error returned by [`check_invariants`](crate::BinaryMinHeap::check_invariants)
/// when the heap's internal storage is inconsistent.
///
/// Carries a description of which check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("heap invariant violated: {0}")]
pub struct InvariantError(String);

impl InvariantError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the description of the failed check.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_display() {
        assert_eq!(HeapError::Underflow.to_string(), "priority queue underflow");
    }

    #[test]
    fn invariant_display_includes_message() {
        let err = InvariantError::new("slot 3 is empty");
        assert_eq!(err.message(), "slot 3 is empty");
        assert_eq!(err.to_string(), "heap invariant violated: slot 3 is empty");
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<HeapError>();
        assert_error::<InvariantError>();
    }
}
