// src/grading.rs

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{
        question::{ChoiceId, Question},
        result::{GradedResult, QuestionBreakdown, StoredAnswerRecord},
        submission::Submission,
    },
};

/// Rule deciding whether one question's selection earns the point.
///
/// Questions with no correct choice are credited under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerdictPolicy {
    /// Correct as long as no incorrect choice was picked. Picking nothing,
    /// or a strict subset of the correct choices, still earns the point.
    #[default]
    NoWrongSelection,

    /// Correct only when the selection equals the correct set.
    ExactMatch,
}

impl VerdictPolicy {
    pub fn is_correct(self, correct: &BTreeSet<ChoiceId>, selected: &BTreeSet<ChoiceId>) -> bool {
        if correct.is_empty() {
            return true;
        }
        match self {
            VerdictPolicy::NoWrongSelection => selected.is_subset(correct),
            VerdictPolicy::ExactMatch => selected == correct,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerdictPolicy::NoWrongSelection => "no-wrong-selection",
            VerdictPolicy::ExactMatch => "exact-match",
        }
    }
}

impl FromStr for VerdictPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no-wrong-selection" => Ok(VerdictPolicy::NoWrongSelection),
            "exact-match" => Ok(VerdictPolicy::ExactMatch),
            other => Err(AppError::Config(format!("unknown grading policy '{}'", other))),
        }
    }
}

/// Turns selections into a score.
///
/// Live grading and re-evaluation of stored answers go through the same
/// per-question verdict, so a result re-evaluated under the same policy
/// always reproduces its original score.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradingEngine {
    policy: VerdictPolicy,
}

impl GradingEngine {
    pub fn new(policy: VerdictPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> VerdictPolicy {
        self.policy
    }

    /// Grades one submission against the current answer key.
    ///
    /// * Submission entries for unknown questions are ignored.
    /// * A question missing from the submission counts as "nothing selected".
    /// * Every question gets a breakdown entry, whatever its verdict.
    pub fn grade(&self, questions: &[Question], submission: &Submission) -> GradedResult {
        let mut score = 0;
        let mut per_question = BTreeMap::new();

        for question in questions {
            let correct = question.correct_choice_ids();
            let selected = submission.selected(question.id);
            let is_correct = self.policy.is_correct(&correct, &selected);

            if is_correct {
                score += 1;
            }

            per_question.insert(
                question.id,
                QuestionBreakdown {
                    correct,
                    selected,
                    is_correct,
                },
            );
        }

        tracing::debug!(
            "Graded submission: {}/{} correct ({})",
            score,
            questions.len(),
            self.policy.as_str()
        );

        GradedResult {
            score,
            total: questions.len(),
            per_question,
        }
    }

    /// Rebuilds a past submission from its stored answer rows and grades it
    /// again, returning the full breakdown.
    ///
    /// Fails with `NotFound` when no rows were recorded: that cannot be told
    /// apart from a quiz that was never taken.
    pub fn review(
        &self,
        questions: &[Question],
        stored_answers: &[StoredAnswerRecord],
    ) -> Result<GradedResult, AppError> {
        if stored_answers.is_empty() {
            tracing::warn!("Re-evaluation requested for a result without stored answers");
            return Err(AppError::NotFound(
                "no stored answers to re-evaluate for this result".to_string(),
            ));
        }

        let submission = Submission::from_stored_answers(stored_answers);
        Ok(self.grade(questions, &submission))
    }

    /// Score-only form of [`GradingEngine::review`].
    pub fn reevaluate(
        &self,
        questions: &[Question],
        stored_answers: &[StoredAnswerRecord],
    ) -> Result<usize, AppError> {
        let result = self.review(questions, stored_answers)?;
        Ok(result.score)
    }
}

/// Grades with the default policy.
pub fn grade(questions: &[Question], submission: &Submission) -> GradedResult {
    GradingEngine::default().grade(questions, submission)
}

/// Re-evaluates stored answers with the default policy.
pub fn reevaluate(
    questions: &[Question],
    stored_answers: &[StoredAnswerRecord],
) -> Result<usize, AppError> {
    GradingEngine::default().reevaluate(questions, stored_answers)
}

/// Reviews stored answers with the default policy.
pub fn review(
    questions: &[Question],
    stored_answers: &[StoredAnswerRecord],
) -> Result<GradedResult, AppError> {
    GradingEngine::default().review(questions, stored_answers)
}
