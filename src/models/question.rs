// src/models/question.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

/// Opaque identifier of a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub i64);

/// One selectable answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,

    /// Display text. Irrelevant for grading.
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub is_correct: bool,
}

impl Choice {
    pub fn new(id: i64, is_correct: bool) -> Self {
        Self {
            id: ChoiceId(id),
            text: String::new(),
            is_correct,
        }
    }
}

/// A question together with every choice it offers.
///
/// Any number of choices may be flagged correct, including none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn new(id: i64, choices: Vec<Choice>) -> Self {
        Self {
            id: QuestionId(id),
            text: String::new(),
            choices,
        }
    }

    /// Ids of the choices flagged correct.
    pub fn correct_choice_ids(&self) -> BTreeSet<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }
}
