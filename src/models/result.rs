// src/models/result.rs

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::question::{ChoiceId, QuestionId};

/// Identifier of a completed, persisted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub i64);

/// What was expected and what was picked for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBreakdown {
    pub correct: BTreeSet<ChoiceId>,
    pub selected: BTreeSet<ChoiceId>,

    /// Verdict the engine gave this question.
    pub is_correct: bool,
}

/// Output of one grading call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedResult {
    /// Number of questions judged correct.
    pub score: usize,

    /// Number of questions graded.
    pub total: usize,

    pub per_question: BTreeMap<QuestionId, QuestionBreakdown>,
}

impl GradedResult {
    /// Answer rows to persist for this result: one per selected choice of
    /// every question, ordered by question then choice.
    pub fn stored_answers(&self, result_id: ResultId) -> Vec<StoredAnswerRecord> {
        self.per_question
            .iter()
            .flat_map(|(question_id, breakdown)| {
                breakdown
                    .selected
                    .iter()
                    .map(move |choice_id| StoredAnswerRecord::new(result_id, *question_id, *choice_id))
            })
            .collect()
    }
}

/// Persisted link between a result, a question, and one selected choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAnswerRecord {
    pub result_id: ResultId,
    pub question_id: QuestionId,
    pub choice_id: ChoiceId,
}

impl StoredAnswerRecord {
    pub fn new(result_id: ResultId, question_id: QuestionId, choice_id: ChoiceId) -> Self {
        Self {
            result_id,
            question_id,
            choice_id,
        }
    }
}
