//! Reducer trait for state that evolves through a closed set of operations.

/// Pure, deterministic state transition.
///
/// - **Decision + evolution**: `reduce(&self, op)` returns the next state or a rejection.
/// - The current state is never mutated; a rejected operation leaves the caller holding
///   exactly what it had.
///
/// Reducers must not perform IO or side effects.
pub trait Reducer: Sized {
    type Operation: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Apply a single operation, producing the next state.
    ///
    /// Given the same state and operation this must always produce the same result.
    fn reduce(&self, operation: &Self::Operation) -> Result<Self, Self::Error>;

    /// Fold a sequence of operations, stopping at the first rejection.
    fn reduce_all<'a, I>(&self, operations: I) -> Result<Self, Self::Error>
    where
        I: IntoIterator<Item = &'a Self::Operation>,
        Self: Clone,
        Self::Operation: 'a,
    {
        operations
            .into_iter()
            .try_fold(self.clone(), |state, op| state.reduce(op))
    }
}
