//! Grading for quiz-style elements.

use serde::Serialize;

use crate::domain::foundation::Percentage;

use super::{KnowledgeCheckConfig, ScenariosConfig, SequenceSorterConfig};

/// Result of grading a learner's answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percentage: Percentage,
}

impl QuizScore {
    pub fn new(correct: usize, total: usize) -> Self {
        let correct = correct.min(total);
        Self {
            correct,
            total,
            percentage: Percentage::from_ratio(correct, total),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl KnowledgeCheckConfig {
    /// Returns true when `selected` is the correct option.
    pub fn grade(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

impl ScenariosConfig {
    /// Scores one answer per scenario; missing answers count as wrong and
    /// extra answers are ignored.
    pub fn score(&self, answers: &[usize]) -> QuizScore {
        let correct = self
            .scenarios
            .iter()
            .zip(answers)
            .filter(|(scenario, answer)| scenario.correct_answer == **answer)
            .count();
        QuizScore::new(correct, self.scenarios.len())
    }
}

impl SequenceSorterConfig {
    /// Counts items the learner placed at their correct position.
    pub fn score(&self, submitted: &[String]) -> QuizScore {
        let correct = self
            .items
            .iter()
            .zip(submitted)
            .filter(|(expected, actual)| expected == actual)
            .count();
        QuizScore::new(correct, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lesson::ScenarioConfig;

    fn scenario(correct_answer: usize) -> ScenarioConfig {
        ScenarioConfig {
            prompt: "What next?".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct_answer,
            explanation: None,
        }
    }

    #[test]
    fn knowledge_check_grades_selected_option() {
        let kc = KnowledgeCheckConfig {
            question: "Pick".to_string(),
            options: vec!["yes".to_string(), "no".to_string()],
            correct_answer: 1,
            explanation: None,
        };
        assert!(kc.grade(1));
        assert!(!kc.grade(0));
    }

    #[test]
    fn scenarios_score_partial_answers() {
        let config = ScenariosConfig {
            scenarios: vec![scenario(0), scenario(2), scenario(1)],
        };
        let score = config.score(&[0, 1]);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 3);
        assert_eq!(score.percentage.value(), 33);
    }

    #[test]
    fn sorter_counts_positions() {
        let config = SequenceSorterConfig {
            items: vec!["draft".into(), "review".into(), "send".into()],
        };
        let score = config.score(&["draft".into(), "send".into(), "review".into()]);
        assert_eq!(score.correct, 1);

        let perfect = config.score(&config.items.clone());
        assert!(perfect.is_perfect());
    }
}
