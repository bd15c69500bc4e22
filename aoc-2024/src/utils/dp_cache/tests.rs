//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Simple problem with no dependencies
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_values_without_dependencies() {
    let cache = DpCache::with_problem(VecBackend::new(), NoDeps);

    assert_eq!(cache.get(&5), 10);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&100), 200);
}

#[test]
fn test_fibonacci_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_computes_shared_dependency_once() {
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 5,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        HashMapBackend::new(),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(cache.get(&0), 25);
    assert_eq!(count.get(), 4);
    assert_eq!(cache.get(&0), 25);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_sparse_indices_grow_vec_backend() {
    let cache = DpCache::with_problem(VecBackend::with_capacity(4), NoDeps);

    assert_eq!(cache.get(&1_000), 2_000);
    assert_eq!(cache.get(&3), 6);
}

#[test]
fn test_backends_keep_first_value() {
    let mut vec = VecBackend::new();
    assert_eq!(vec.get(&3), None);
    assert_eq!(*vec.insert(3, 'a'), 'a');
    assert_eq!(*vec.insert(3, 'b'), 'a');
    assert_eq!(vec.get(&0), None);

    let mut map = HashMapBackend::new();
    assert_eq!(*map.insert("k", 1), 1);
    assert_eq!(*map.insert("k", 2), 1);
    assert_eq!(map.get(&"k"), Some(&1));
}
