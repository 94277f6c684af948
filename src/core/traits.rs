//! Core trait definitions for cardinal-rust.
//!
//! [`Pool`] abstracts over anything that holds candidate samples, and
//! [`QueryStrategy`] is the seam an active-learning loop uses to ask for the
//! next batch of positions to label.

use crate::core::error::Result;
use crate::core::types::*;
use crate::sampling::Selection;
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// A collection of candidate samples. Only its length is ever inspected.
pub trait Pool {
    /// Number of samples in the pool.
    fn pool_len(&self) -> usize;
}

impl Pool for PoolSize {
    fn pool_len(&self) -> usize {
        self.0
    }
}

impl<T> Pool for [T] {
    fn pool_len(&self) -> usize {
        self.len()
    }
}

impl<T> Pool for Vec<T> {
    fn pool_len(&self) -> usize {
        self.len()
    }
}

impl<S: Data> Pool for ArrayBase<S, Ix1> {
    fn pool_len(&self) -> usize {
        self.len()
    }
}

/// Rows are samples, columns are features.
impl<S: Data> Pool for ArrayBase<S, Ix2> {
    fn pool_len(&self) -> usize {
        self.nrows()
    }
}

/// Strategy that picks which pool positions should be labeled next.
pub trait QueryStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Select up to `n_instances` positions from a pool of `pool_len`
    /// samples, never returning a position listed in `labeled`.
    fn query(
        &mut self,
        pool_len: usize,
        labeled: Option<&[SampleIndex]>,
        n_instances: usize,
    ) -> Result<Selection>;
}
