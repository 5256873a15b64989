//! Windowing helpers: means, recency ordering, thirds and halves.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of `f` over `items`; 0.0 for an empty slice.
pub fn mean_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(f).sum::<f64>() / items.len() as f64
}

/// Stable ascending sort by `key`. Absent keys (`None`) sort first.
pub fn oldest_first<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| key(item));
    sorted
}

/// Stable descending sort by `key`; ties keep their input order.
pub fn newest_first<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted
}

/// First and last third of `items`, each `len / 3` long.
/// `None` when a third would be empty.
pub fn thirds<T>(items: &[T]) -> Option<(&[T], &[T])> {
    let third = items.len() / 3;
    if third == 0 {
        return None;
    }
    Some((&items[..third], &items[items.len() - third..]))
}

/// Split at `ceil(len / 2)`: the front half is the larger one.
pub fn halves<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// First `n` and last `n` items; they overlap when `len < 2n`.
pub fn ends<T>(items: &[T], n: usize) -> (&[T], &[T]) {
    let n = n.min(items.len());
    (&items[..n], &items[items.len() - n..])
}
