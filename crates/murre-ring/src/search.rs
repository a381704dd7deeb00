//! Ordered-slice placement search.

/// Find the element whose key is the largest not exceeding `target`.
///
/// `items` must be sorted ascending by `key`. An exact match returns
/// the matching element; a target past the last key saturates at the
/// last element rather than wrapping; a target below every key falls
/// back to the first element. An empty slice returns `None`.
pub fn floor_or_first<T, K, F>(items: &[T], target: K, mut key: F) -> Option<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    if items.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = items.len();
    // The midpoint stays in play on the low side whenever its key does
    // not exceed the target.
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if key(&items[mid]) > target {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Some(&items[lo])
}
