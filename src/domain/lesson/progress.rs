//! Per-learner completion of interactive elements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ElementId, LessonId, Percentage, Timestamp, UserId};

/// Whether one learner has completed one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProgress {
    pub user_id: UserId,
    pub lesson_id: LessonId,
    pub element_id: ElementId,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
}

impl ElementProgress {
    /// Progress row marking the element complete at `at`.
    pub fn completed(user_id: UserId, lesson_id: LessonId, element_id: ElementId, at: Timestamp) -> Self {
        Self {
            user_id,
            lesson_id,
            element_id,
            completed: true,
            completed_at: Some(at),
        }
    }
}

/// A learner's completion of a lesson's active elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonProgress {
    pub lesson_id: LessonId,
    pub completed_elements: Vec<ElementId>,
    pub total_elements: usize,
    pub percent_complete: Percentage,
}

impl LessonProgress {
    /// Computes progress over `active`; completions for elements no longer
    /// active are ignored.
    pub fn compute(lesson_id: LessonId, active: &[ElementId], completed: &[ElementId]) -> Self {
        let mut completed_elements: Vec<ElementId> = active
            .iter()
            .copied()
            .filter(|id| completed.contains(id))
            .collect();
        completed_elements.sort();
        completed_elements.dedup();

        Self {
            lesson_id,
            percent_complete: Percentage::from_ratio(completed_elements.len(), active.len()),
            total_elements: active.len(),
            completed_elements,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total_elements > 0 && self.completed_elements.len() == self.total_elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<ElementId> {
        raw.iter().copied().map(ElementId::new).collect()
    }

    #[test]
    fn progress_counts_only_active_elements() {
        let progress = LessonProgress::compute(LessonId::new(1), &ids(&[1, 2, 3, 4]), &ids(&[2, 4, 9]));
        assert_eq!(progress.completed_elements, ids(&[2, 4]));
        assert_eq!(progress.percent_complete.value(), 50);
        assert!(!progress.is_complete());
    }

    #[test]
    fn empty_lesson_is_zero_percent_and_not_complete() {
        let progress = LessonProgress::compute(LessonId::new(1), &[], &ids(&[1]));
        assert_eq!(progress.percent_complete, Percentage::ZERO);
        assert!(!progress.is_complete());
    }

    #[test]
    fn all_completed_is_complete() {
        let progress = LessonProgress::compute(LessonId::new(1), &ids(&[5, 6]), &ids(&[6, 5]));
        assert!(progress.is_complete());
        assert_eq!(progress.percent_complete, Percentage::HUNDRED);
    }
}
