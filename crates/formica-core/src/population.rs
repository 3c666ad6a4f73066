//! Population access — what an update rule may read from an ant.

use crate::types::{AntPath, NodeId};

/// One candidate solution: the ordered path an ant walked and its fitness.
///
/// Solutions are owned by the host population and are read-only here.
pub trait Solution {
    /// Visited nodes, in walking order.
    fn path(&self) -> &[NodeId];

    /// Quality assigned by the evaluator. Only `AntCycle` reads it.
    fn fitness(&self) -> f64;

    fn path_len(&self) -> usize {
        self.path().len()
    }
}

impl Solution for AntPath {
    fn path(&self) -> &[NodeId] {
        &self.path
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }
}

impl<S: Solution + ?Sized> Solution for &S {
    fn path(&self) -> &[NodeId] {
        (**self).path()
    }

    fn fitness(&self) -> f64 {
        (**self).fitness()
    }
}
