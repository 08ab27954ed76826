//! Stable merge sort driven by a "keeps its place" predicate.
//!
//! `slice::sort_by` may panic when the comparator is not a total order, and a
//! combat predicate can contain cycles. This sort only ever asks whether the
//! head of the left run should stay ahead of the head of the right run, so an
//! inconsistent predicate yields a best-effort order instead of a panic.

/// Sorts `items` so that, where the predicate is consistent, `ahead(x, y)`
/// holds for every element `x` placed before `y`.
///
/// Ties (`ahead(left, right)` true) keep input order. Runs at most
/// `n * ceil(log2 n)` predicate calls.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut ahead: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_run(items, &mut ahead)
}

fn sort_run<T, F>(mut items: Vec<T>, ahead: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort_run(items, ahead);
    let right = sort_run(right, ahead);
    merge(left, right, ahead)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, ahead: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => ahead(l, r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged
}
