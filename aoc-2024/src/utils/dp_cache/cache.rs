//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A memoizing cache with lazy dependency resolution.
///
/// Values are computed on first access, after recursively resolving the
/// indices returned by [`DpProblem::deps`]; later accesses return a clone of
/// the stored value.
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computing it and its dependencies if necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow is held while dependencies recurse.
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();
        let value = self.problem.compute(index, dep_values);

        self.backend
            .borrow_mut()
            .insert(index.clone(), value)
            .clone()
    }
}
