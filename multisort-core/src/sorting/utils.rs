//! Helpers for reordering slices after a keyed sort.

/// Reorder `items` in place so that position `pos` receives the element
/// previously at `order[pos]`.
///
/// `order` must be a permutation of `0..items.len()`. Elements are moved
/// with swaps along each cycle, so `T` needs neither `Clone` nor `Default`.
pub fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    debug_assert_eq!(
        items.len(),
        order.len(),
        "order length must match items length"
    );

    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }
        let mut pos = start;
        loop {
            placed[pos] = true;
            let src = order[pos];
            debug_assert!(src < items.len(), "index out of bounds");
            if src == start {
                break;
            }
            items.swap(pos, src);
            pos = src;
        }
    }
}

/// Check whether a slice is already ordered according to `compare`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.windows(2).all(|w| {
        matches!(
            compare(&w[0], &w[1]),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_permutation() {
        let mut items = vec!["a", "b", "c", "d"];
        let order = vec![3, 1, 0, 2]; // d, b, a, c

        apply_permutation(&mut items, &order);

        assert_eq!(items, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_apply_permutation_multiple_cycles() {
        let mut items: Vec<String> =
            ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let order = vec![1, 0, 4, 2, 3];

        apply_permutation(&mut items, &order);

        assert_eq!(items, vec!["b", "a", "e", "c", "d"]);
    }

    #[test]
    fn test_apply_identity_permutation() {
        let mut items = vec![1, 2, 3];
        apply_permutation(&mut items, &[0, 1, 2]);
        assert_eq!(items, vec![1, 2, 3]);

        let mut empty: Vec<i32> = Vec::new();
        apply_permutation(&mut empty, &[]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_is_sorted_by() {
        let sorted = vec![1, 2, 3, 4, 5];
        let unsorted = vec![1, 3, 2, 4, 5];

        assert!(is_sorted_by(&sorted, |a, b| a.cmp(b)));
        assert!(!is_sorted_by(&unsorted, |a, b| a.cmp(b)));

        let reverse_sorted = vec![5, 4, 3, 2, 1];
        assert!(is_sorted_by(&reverse_sorted, |a, b| b.cmp(a)));
    }
}
