//! Sparse `order_index` allocation for authoring.
//!
//! Lessons are authored with indices spaced by [`ORDER_STEP`] so new items
//! can be slotted between neighbours. When a gap is exhausted the whole
//! lesson is renumbered back onto the step grid.

/// Spacing between consecutive authored indices.
pub const ORDER_STEP: i32 = 10;

/// Index for an item appended after `last`.
pub fn index_after(last: Option<i32>) -> i32 {
    match last {
        Some(last) => last.saturating_add(ORDER_STEP),
        None => ORDER_STEP,
    }
}

/// Free index strictly between `prev` and `next`, if one exists.
///
/// With no `prev` the item goes before `next`; with no `next` it is appended.
pub fn index_between(prev: Option<i32>, next: Option<i32>) -> Option<i32> {
    match (prev, next) {
        (None, None) => Some(ORDER_STEP),
        (Some(prev), None) => Some(index_after(Some(prev))),
        (None, Some(next)) => {
            let candidate = next.saturating_sub(ORDER_STEP);
            (candidate < next).then_some(candidate)
        }
        (Some(prev), Some(next)) => {
            let (prev, next) = (i64::from(prev), i64::from(next));
            if next - prev < 2 {
                return None;
            }
            i32::try_from(prev + (next - prev) / 2).ok()
        }
    }
}

/// Reassigns `10, 20, 30, ...` to items already in presentation order.
///
/// Returns `(item, new_index)` pairs for items whose index changes.
pub fn renumber<T: Copy>(ordered: &[(T, i32)]) -> Vec<(T, i32)> {
    ordered
        .iter()
        .enumerate()
        .filter_map(|(position, (item, current))| {
            let target = ORDER_STEP.saturating_mul(position as i32 + 1);
            (target != *current).then_some((*item, target))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appending_steps_by_ten() {
        assert_eq!(index_after(None), 10);
        assert_eq!(index_after(Some(40)), 50);
    }

    #[test]
    fn between_takes_midpoint() {
        assert_eq!(index_between(Some(10), Some(20)), Some(15));
        assert_eq!(index_between(Some(10), Some(13)), Some(11));
    }

    #[test]
    fn between_adjacent_indices_has_no_room() {
        assert_eq!(index_between(Some(10), Some(11)), None);
        assert_eq!(index_between(Some(10), Some(10)), None);
        assert_eq!(index_between(Some(12), Some(10)), None);
    }

    #[test]
    fn before_first_and_after_last() {
        assert_eq!(index_between(None, Some(10)), Some(0));
        assert_eq!(index_between(Some(30), None), Some(40));
        assert_eq!(index_between(None, None), Some(10));
    }

    #[test]
    fn between_handles_extreme_values() {
        assert_eq!(index_between(Some(i32::MIN), Some(i32::MAX)), Some(-1));
        assert_eq!(index_between(None, Some(i32::MIN)), None);
    }

    #[test]
    fn renumber_only_reports_changes() {
        let ordered = [('a', 10), ('b', 11), ('c', 12), ('d', 40)];
        assert_eq!(renumber(&ordered), vec![('b', 20), ('c', 30)]);
    }

    #[test]
    fn renumber_on_grid_is_empty() {
        let ordered = [(1, 10), (2, 20)];
        assert!(renumber(&ordered).is_empty());
    }
}
