//! Sort keys extracted from items.
//!
//! A [`DirectedKey`] is one extracted value plus the direction of the
//! criterion that produced it; a [`SortKeys`] row holds one key per
//! criterion and orders lexicographically.

use multisort_model::Value;
use std::cmp::Ordering;

/// Compare two extracted values for one criterion.
///
/// Ties when both are equal or both are missing. Otherwise a value that is
/// greater, or present against a missing one, sorts after; `invert` flips
/// the result. Missing values therefore lead in ascending order and trail
/// when inverted, independently for each criterion.
pub fn compare_directed(a: &Value, b: &Value, invert: bool) -> Ordering {
    let natural = match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => a.cmp(b),
    };
    if invert { natural.reverse() } else { natural }
}

/// A value extracted by one criterion, carrying that criterion's direction.
#[derive(Clone, Debug)]
pub struct DirectedKey {
    value: Value,
    invert: bool,
}

impl DirectedKey {
    pub fn new(value: Value, invert: bool) -> Self {
        DirectedKey { value, invert }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_missing()
    }
}

impl Ord for DirectedKey {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(
            self.invert, other.invert,
            "keys from different criteria compared"
        );
        compare_directed(&self.value, &other.value, self.invert)
    }
}

impl PartialOrd for DirectedKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DirectedKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DirectedKey {}

/// Every key of one item, in criterion order.
///
/// Rows built by the same comparator compare exactly as the comparator
/// compares the items they came from, so they can drive any key-based
/// primitive (`sort_by_key`, `BinaryHeap`, `BTreeMap`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKeys(Vec<DirectedKey>);

impl SortKeys {
    pub fn new(keys: Vec<DirectedKey>) -> Self {
        SortKeys(keys)
    }

    pub fn keys(&self) -> &[DirectedKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_lead_ascending_and_trail_inverted() {
        let present = Value::from(1);
        for missing in [Value::Null, Value::Absent] {
            assert_eq!(
                compare_directed(&missing, &present, false),
                Ordering::Less
            );
            assert_eq!(
                compare_directed(&missing, &present, true),
                Ordering::Greater
            );
        }
        assert_eq!(
            compare_directed(&Value::Null, &Value::Absent, true),
            Ordering::Equal
        );
    }

    #[test]
    fn inversion_reverses_present_values() {
        let low = Value::from("apple");
        let high = Value::from("banana");
        assert_eq!(compare_directed(&low, &high, false), Ordering::Less);
        assert_eq!(compare_directed(&low, &high, true), Ordering::Greater);
        assert_eq!(compare_directed(&low, &low, true), Ordering::Equal);
    }

    #[test]
    fn rows_compare_lexicographically() {
        let row = |fame: i32, name: &str| {
            SortKeys::new(vec![
                DirectedKey::new(Value::from(fame), true),
                DirectedKey::new(Value::from(name), false),
            ])
        };

        assert!(row(3, "Trebek") < row(2, "Barker"));
        assert!(row(2, "Barker") < row(2, "Sajak"));
        assert_eq!(row(1, "x"), row(1, "x"));
    }
}
