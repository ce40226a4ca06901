// tests/grading_tests.rs

use quiz_grader::{
    AppError, GradingEngine, VerdictPolicy, grade, reevaluate, review,
    models::{
        question::{Choice, ChoiceId, Question, QuestionId},
        result::{ResultId, StoredAnswerRecord},
        submission::{SubmitQuizRequest, Submission},
    },
};

/// One question with choices A(1), B(2), C(3), D(4); only the listed ones are correct.
fn abcd_question(id: i64, correct: &[i64]) -> Question {
    let choices = (1..=4)
        .map(|c| Choice::new(c, correct.contains(&c)))
        .collect();
    Question::new(id, choices)
}

#[test]
fn single_correct_pick_scores() {
    let questions = vec![abcd_question(1, &[1])];

    let result = grade(&questions, &Submission::new().with(1, [1]));

    assert_eq!(result.score, 1);
    assert!(result.per_question[&QuestionId(1)].is_correct);
}

#[test]
fn extra_wrong_pick_fails() {
    let questions = vec![abcd_question(1, &[1])];

    let result = grade(&questions, &Submission::new().with(1, [1, 2]));

    assert_eq!(result.score, 0);
    assert!(!result.per_question[&QuestionId(1)].is_correct);
}

#[test]
fn empty_selection_is_credited() {
    let questions = vec![abcd_question(1, &[1])];

    let explicit = grade(&questions, &Submission::new().with(1, Vec::<i64>::new()));
    let skipped = grade(&questions, &Submission::new());

    assert_eq!(explicit.score, 1);
    assert_eq!(skipped.score, 1);
}

#[test]
fn question_without_correct_choice_always_credited() {
    let questions = vec![abcd_question(1, &[])];

    for picks in [vec![], vec![1], vec![1, 2, 3, 4]] {
        let result = grade(&questions, &Submission::new().with(1, picks));
        assert_eq!(result.score, 1);
    }
}

#[test]
fn question_without_any_choices_credited() {
    let questions = vec![Question::new(1, vec![])];
    assert_eq!(grade(&questions, &Submission::new().with(1, [5])).score, 1);
}

#[test]
fn partial_pick_of_multi_correct_question_scores() {
    // Q1 correct = {A}, Q2 correct = {C, D}
    let questions = vec![abcd_question(1, &[1]), abcd_question(2, &[3, 4])];
    let submission = Submission::new().with(1, [1]).with(2, [3]);

    let result = grade(&questions, &submission);

    assert_eq!(result.score, 2);
    assert_eq!(result.total, 2);
}

#[test]
fn all_correct_plus_one_wrong_fails() {
    let questions = vec![abcd_question(1, &[3, 4])];
    let result = grade(&questions, &Submission::new().with(1, [2, 3, 4]));
    assert_eq!(result.score, 0);
}

#[test]
fn score_stays_within_bounds() {
    let questions: Vec<Question> = (1..=6).map(|q| abcd_question(q, &[1, 2])).collect();
    let submissions = [
        Submission::new(),
        (1..=6).fold(Submission::new(), |s, q| s.with(q, [3])),
        (1..=6).fold(Submission::new(), |s, q| s.with(q, [1, 2])),
        Submission::new().with(2, [4]).with(5, [1]).with(42, [1]),
    ];

    for submission in &submissions {
        let result = grade(&questions, submission);
        assert!(result.score <= questions.len());
        assert_eq!(result.per_question.len(), questions.len());
    }
}

#[test]
fn reevaluate_without_stored_answers_is_not_found() {
    let questions = vec![abcd_question(1, &[1])];

    let err = reevaluate(&questions, &[]).unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn reevaluate_agrees_with_grade() {
    let questions = vec![
        abcd_question(1, &[1]),
        abcd_question(2, &[3, 4]),
        abcd_question(3, &[]),
        abcd_question(4, &[2]),
    ];
    let submissions = [
        Submission::new().with(1, [1]).with(2, [3]),
        Submission::new().with(1, [1, 2]).with(2, [3, 4]).with(3, [1]),
        Submission::new().with(4, [1]),
        Submission::new().with(1, [4]).with(2, [1]).with(3, [2]).with(4, [3]),
    ];

    for (i, submission) in submissions.iter().enumerate() {
        let graded = grade(&questions, submission);
        let rows = graded.stored_answers(ResultId(i as i64));

        assert_eq!(reevaluate(&questions, &rows).unwrap(), graded.score);
        assert_eq!(review(&questions, &rows).unwrap(), graded);
    }
}

#[test]
fn reevaluate_uses_current_answer_key() {
    let rows = vec![StoredAnswerRecord::new(ResultId(1), QuestionId(1), ChoiceId(2))];

    let before = vec![abcd_question(1, &[1])];
    let after = vec![abcd_question(1, &[1, 2])];

    assert_eq!(reevaluate(&before, &rows).unwrap(), 0);
    assert_eq!(reevaluate(&after, &rows).unwrap(), 1);
}

#[test]
fn submission_without_selections_leaves_nothing_to_reevaluate() {
    let questions = vec![abcd_question(1, &[1]), abcd_question(2, &[2])];

    let graded = grade(&questions, &Submission::new());
    let rows = graded.stored_answers(ResultId(1));

    assert_eq!(graded.score, 2);
    assert!(rows.is_empty());
    assert!(reevaluate(&questions, &rows).unwrap_err().is_not_found());
}

#[test]
fn json_payload_grades_like_built_submission() {
    let questions = vec![abcd_question(1, &[1]), abcd_question(2, &[3, 4])];
    let req: SubmitQuizRequest =
        serde_json::from_str(r#"{"answers": {"1": [1], "2": [3, 3, 2], "7": [1]}}"#).unwrap();

    let result = grade(&questions, &req.into_submission());

    assert_eq!(result.score, 1);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["per_question"]["2"]["selected"], serde_json::json!([2, 3]));
    assert_eq!(value["per_question"]["2"]["is_correct"], false);
}

#[test]
fn exact_match_engine_rejects_partial_picks() {
    let engine = GradingEngine::new(VerdictPolicy::ExactMatch);
    let questions = vec![abcd_question(1, &[1]), abcd_question(2, &[3, 4]), abcd_question(3, &[])];
    let submission = Submission::new().with(1, [1]).with(2, [3]);

    let graded = engine.grade(&questions, &submission);

    assert_eq!(graded.score, 2);
    assert!(!graded.per_question[&QuestionId(2)].is_correct);
    assert_eq!(
        engine.reevaluate(&questions, &graded.stored_answers(ResultId(3))).unwrap(),
        graded.score
    );
}
