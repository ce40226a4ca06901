// src/models/submission.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::question::{ChoiceId, QuestionId};
use crate::models::result::StoredAnswerRecord;

/// The choices a submitter picked, per question, for one attempt.
///
/// A question missing from the map counts as "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    selections: BTreeMap<QuestionId, BTreeSet<ChoiceId>>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `choices` to whatever was already selected for `question`.
    pub fn select<I>(&mut self, question: QuestionId, choices: I)
    where
        I: IntoIterator<Item = ChoiceId>,
    {
        self.selections.entry(question).or_default().extend(choices);
    }

    /// Builder form of [`Submission::select`].
    pub fn with<I>(mut self, question: i64, choices: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.select(QuestionId(question), choices.into_iter().map(ChoiceId));
        self
    }

    /// Selected choices for `question`, empty when the question was skipped.
    pub fn selected(&self, question: QuestionId) -> BTreeSet<ChoiceId> {
        self.selections.get(&question).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Groups persisted answer rows back into a submission.
    pub fn from_stored_answers<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a StoredAnswerRecord>,
    {
        let mut submission = Self::new();
        for record in records {
            submission.select(record.question_id, [record.choice_id]);
        }
        submission
    }
}

/// Raw selections as they arrive from a form or JSON payload.
///
/// Key: Question ID (i64)
/// Value: every Choice ID ticked for that question, duplicates allowed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: HashMap<i64, Vec<i64>>,
}

impl SubmitQuizRequest {
    pub fn into_submission(self) -> Submission {
        let mut submission = Submission::new();
        for (question, choices) in self.answers {
            submission.select(QuestionId(question), choices.into_iter().map(ChoiceId));
        }
        submission
    }
}
