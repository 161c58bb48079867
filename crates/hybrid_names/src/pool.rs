//! Non-empty sampling populations.

use crate::error::{Error, PoolKind, Result};
use rand::Rng;
use std::path::Path;

/// An ordered, non-empty sequence of validated names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    /// Fails with [`Error::EmptyResult`] if there is nothing to sample from.
    /// `kind` and `source` describe the pool for the error.
    pub fn new(items: Vec<T>, kind: PoolKind, source: impl AsRef<Path>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyResult {
                pool: kind,
                path: source.as_ref().to_path_buf(),
            });
        }
        Ok(Self { items })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Picks one item uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[rng.random_range(0..self.items.len())]
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
