//! Lexicographic composition of compiled criteria.

use super::{
    criteria::{Criteria, Evaluator},
    keys::{DirectedKey, SortKeys, compare_directed},
    utils::{apply_permutation, is_sorted_by},
};
use crate::error::Result;
use multisort_model::Inspect;
use std::{cmp::Ordering, fmt};
use tracing::{debug, warn};

/// Compile criteria into a comparator.
pub fn compile<T: ?Sized>(criteria: impl Into<Criteria<T>>) -> Comparator<T> {
    Comparator::new(criteria)
}

/// Compile configuration-sourced criteria (one entry or an array).
///
/// Entries that are neither numbers nor strings are a configuration error;
/// no comparator is produced.
pub fn compile_json<T: ?Sized>(
    criteria: &serde_json::Value,
) -> Result<Comparator<T>> {
    Criteria::try_from_json(criteria).map(Comparator::new)
}

/// A total order over items built from an ordered list of criteria.
///
/// The first criterion decides unless it ties, then the next one, and so
/// on; if every criterion ties the items are equivalent. Immutable once
/// built; clone it or share it across threads freely.
pub struct Comparator<T: ?Sized> {
    evaluators: Vec<Evaluator<T>>,
}

impl<T: ?Sized> Comparator<T> {
    pub fn new(criteria: impl Into<Criteria<T>>) -> Self {
        let criteria = criteria.into();
        let evaluators: Vec<_> =
            criteria.iter().map(|criterion| criterion.compile()).collect();
        debug!(criteria = evaluators.len(), "compiled comparator");
        Self { evaluators }
    }

    pub fn evaluators(&self) -> &[Evaluator<T>] {
        &self.evaluators
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}

impl<T: Inspect + ?Sized> Comparator<T> {
    /// Compare two items, re-evaluating every criterion for both.
    pub fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        for evaluator in &self.evaluators {
            let av = evaluator.extract(a)?;
            let bv = evaluator.extract(b)?;
            match compare_directed(&av, &bv, evaluator.is_inverted()) {
                Ordering::Equal => continue,
                decided => return Ok(decided),
            }
        }
        Ok(Ordering::Equal)
    }

    /// Evaluate every criterion for `item` once.
    ///
    /// Two rows from the same comparator order exactly as [`Self::compare`]
    /// orders their items.
    pub fn keys(&self, item: &T) -> Result<SortKeys> {
        self.evaluators
            .iter()
            .map(|evaluator| {
                evaluator
                    .extract(item)
                    .map(|value| DirectedKey::new(value, evaluator.is_inverted()))
            })
            .collect::<Result<Vec<_>>>()
            .map(SortKeys::new)
    }
}

impl<T: Inspect> Comparator<T> {
    /// Sort `items` in place.
    ///
    /// Every item's keys are extracted exactly once before any comparison,
    /// then the rows are stable-sorted and the permutation applied. If any
    /// extraction fails the slice is left untouched.
    pub fn sort(&self, items: &mut [T]) -> Result<()> {
        let mut rows = match items
            .iter()
            .enumerate()
            .map(|(idx, item)| self.keys(item).map(|keys| (idx, keys)))
            .collect::<Result<Vec<_>>>()
        {
            Ok(rows) => rows,
            Err(err) => {
                warn!(error = %err, items = items.len(), "sort aborted");
                return Err(err);
            }
        };

        if is_sorted_by(&rows, |a, b| a.1.cmp(&b.1)) {
            debug!(items = items.len(), "input already in order");
            return Ok(());
        }

        rows.sort_by(|a, b| a.1.cmp(&b.1));
        let order: Vec<usize> = rows.into_iter().map(|(idx, _)| idx).collect();
        apply_permutation(items, &order);

        debug!(
            items = items.len(),
            criteria = self.evaluators.len(),
            "sorted"
        );
        Ok(())
    }

    /// Owned variant of [`Self::sort`].
    pub fn sorted(&self, mut items: Vec<T>) -> Result<Vec<T>> {
        self.sort(&mut items)?;
        Ok(items)
    }
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            evaluators: self.evaluators.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("evaluators", &self.evaluators)
            .finish()
    }
}
