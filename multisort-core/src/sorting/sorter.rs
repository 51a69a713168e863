//! One-shot sorting and partial application.

use super::{comparator::Comparator, criteria::Criteria};
use crate::error::Result;
use multisort_model::Inspect;
use std::fmt;

/// Compile `criteria`, sort `items` in place, and hand the slice back.
pub fn sort<'a, T: Inspect>(
    items: &'a mut [T],
    criteria: impl Into<Criteria<T>>,
) -> Result<&'a mut [T]> {
    Comparator::new(criteria).sort(items)?;
    Ok(items)
}

/// Bind criteria now, sort later.
pub fn sorter<T: ?Sized>(criteria: impl Into<Criteria<T>>) -> Sorter<T> {
    Sorter::new(criteria)
}

/// Criteria compiled once and applied to any number of sequences.
pub struct Sorter<T: ?Sized> {
    comparator: Comparator<T>,
}

impl<T: ?Sized> Sorter<T> {
    pub fn new(criteria: impl Into<Criteria<T>>) -> Self {
        Self {
            comparator: Comparator::new(criteria),
        }
    }

    /// The comparator, for use with other sort primitives.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    pub fn into_comparator(self) -> Comparator<T> {
        self.comparator
    }
}

impl<T: Inspect> Sorter<T> {
    pub fn sort<'a>(&self, items: &'a mut [T]) -> Result<&'a mut [T]> {
        self.comparator.sort(items)?;
        Ok(items)
    }
}

impl<T: ?Sized> Clone for Sorter<T> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Sorter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("comparator", &self.comparator)
            .finish()
    }
}

impl<T: ?Sized> From<Comparator<T>> for Sorter<T> {
    fn from(comparator: Comparator<T>) -> Self {
        Self { comparator }
    }
}
