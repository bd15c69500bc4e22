//! Trait-based DP problem definition.

/// Dependency structure and combination rule of a DP problem.
///
/// - `I`: index type
/// - `K`: value type
pub trait DpProblem<I, K> {
    /// Indices this index depends on; empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value for `index` given the values of `deps(index)`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
