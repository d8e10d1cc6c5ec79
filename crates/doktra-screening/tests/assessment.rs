use doktra_core::models::WellnessStatus;
use doktra_screening::assessment::{AnswerMap, QUESTIONS, find_question, score};
use doktra_screening::error::ScreeningError;

fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(q, v)| (q.to_string(), v.to_string()))
        .collect()
}

fn best_answers() -> AnswerMap {
    answers(&[
        ("general", "excellent"),
        ("sleep", "7-8"),
        ("exercise", "daily"),
        ("diet", "very-healthy"),
        ("stress", "very-low"),
        ("chronic", "none"),
        ("medication", "none"),
        ("checkup", "within-6-months"),
        ("mental", "excellent"),
        ("energy", "high"),
    ])
}

#[test]
fn table_has_ten_questions_with_four_options_each() {
    assert_eq!(QUESTIONS.len(), 10);
    for question in QUESTIONS {
        assert_eq!(question.options.len(), 4, "question {}", question.id);
        for option in question.options {
            assert!((1..=10).contains(&option.score), "question {}", question.id);
        }
    }
}

#[test]
fn questions_are_found_by_id() {
    let sleep = find_question("sleep").unwrap();
    assert_eq!(sleep.prompt, "How many hours of sleep do you get on average per night?");
    assert!(find_question("astrology").is_none());
}

#[test]
fn all_best_answers_score_ten() {
    let report = score(&best_answers()).unwrap();
    assert_eq!(report.status, WellnessStatus::Good);
    assert_eq!(report.score, 10.0);
}

#[test]
fn mean_of_exactly_eight_is_good() {
    // 5 + 10 + 5 + 5 + 5 + 10 + 10 + 10 + 10 + 10 = 80
    let report = score(&answers(&[
        ("general", "fair"),
        ("sleep", "7-8"),
        ("exercise", "once-week"),
        ("diet", "somewhat-healthy"),
        ("stress", "moderate"),
        ("chronic", "none"),
        ("medication", "none"),
        ("checkup", "within-6-months"),
        ("mental", "excellent"),
        ("energy", "high"),
    ]))
    .unwrap();

    assert_eq!(report.status, WellnessStatus::Good);
    assert_eq!(report.score, 8.0);
}

#[test]
fn just_below_eight_is_fair() {
    // Same as above with checkup dropped to 8: total 78.
    let report = score(&answers(&[
        ("general", "fair"),
        ("sleep", "7-8"),
        ("exercise", "once-week"),
        ("diet", "somewhat-healthy"),
        ("stress", "moderate"),
        ("chronic", "none"),
        ("medication", "none"),
        ("checkup", "within-year"),
        ("mental", "excellent"),
        ("energy", "high"),
    ]))
    .unwrap();

    assert_eq!(report.status, WellnessStatus::Fair);
    assert_eq!(report.score, 7.8);
}

#[test]
fn mean_of_exactly_five_is_fair() {
    // 5 * 6 + 3 + 2 + 8 + 7 = 50
    let report = score(&answers(&[
        ("general", "fair"),
        ("sleep", "5-6"),
        ("exercise", "once-week"),
        ("diet", "somewhat-healthy"),
        ("stress", "moderate"),
        ("chronic", "multiple-managed"),
        ("medication", "more-than-5"),
        ("checkup", "more-than-2-years"),
        ("mental", "good"),
        ("energy", "moderate"),
    ]))
    .unwrap();

    assert_eq!(report.status, WellnessStatus::Fair);
    assert_eq!(report.score, 5.0);
}

#[test]
fn just_below_five_needs_attention() {
    // 5 * 6 + 5 + 5 + 8 + 1 = 49
    let report = score(&answers(&[
        ("general", "fair"),
        ("sleep", "5-6"),
        ("exercise", "once-week"),
        ("diet", "somewhat-healthy"),
        ("stress", "moderate"),
        ("chronic", "multiple-managed"),
        ("medication", "3-5"),
        ("checkup", "1-2-years"),
        ("mental", "good"),
        ("energy", "very-low"),
    ]))
    .unwrap();

    assert_eq!(report.status, WellnessStatus::Attention);
    assert_eq!(report.score, 4.9);
}

#[test]
fn mean_of_four_needs_attention() {
    // 5 * 7 + 2 + 2 + 1 = 40
    let report = score(&answers(&[
        ("general", "fair"),
        ("sleep", "5-6"),
        ("exercise", "once-week"),
        ("diet", "somewhat-healthy"),
        ("stress", "moderate"),
        ("chronic", "multiple-managed"),
        ("medication", "3-5"),
        ("checkup", "more-than-2-years"),
        ("mental", "poor"),
        ("energy", "very-low"),
    ]))
    .unwrap();

    assert_eq!(report.status, WellnessStatus::Attention);
    assert_eq!(report.score, 4.0);
}

#[test]
fn incomplete_answers_are_rejected() {
    let mut incomplete = best_answers();
    incomplete.remove("energy");

    match score(&incomplete) {
        Err(ScreeningError::IncompleteAssessment { missing }) => {
            assert_eq!(missing, ["energy"]);
        }
        other => panic!("expected IncompleteAssessment, got {other:?}"),
    }
}

#[test]
fn empty_map_reports_every_question_missing() {
    match score(&AnswerMap::new()) {
        Err(ScreeningError::IncompleteAssessment { missing }) => {
            assert_eq!(missing.len(), QUESTIONS.len());
        }
        other => panic!("expected IncompleteAssessment, got {other:?}"),
    }
}

#[test]
fn unknown_option_is_rejected() {
    let mut bad = best_answers();
    bad.insert("general".to_string(), "amazing".to_string());

    assert!(matches!(
        score(&bad),
        Err(ScreeningError::UnknownOption { .. })
    ));
}

#[test]
fn stray_keys_are_ignored() {
    let mut with_stray = best_answers();
    with_stray.insert("horoscope".to_string(), "aquarius".to_string());

    let a = score(&best_answers()).unwrap();
    let b = score(&with_stray).unwrap();
    assert_eq!(a.status, b.status);
    assert_eq!(a.score, b.score);
}

#[test]
fn scoring_is_deterministic() {
    let map = best_answers();
    let a = score(&map).unwrap();
    let b = score(&map).unwrap();
    assert_eq!(a.status, b.status);
    assert_eq!(a.score, b.score);
    assert_eq!(a.message, b.message);
}
