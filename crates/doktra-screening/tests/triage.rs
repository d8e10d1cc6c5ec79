use doktra_screening::triage::{DISCLAIMER, evaluate};

#[test]
fn empty_symptoms_yield_insufficient_information() {
    let report = evaluate::<&str>(&[]);

    assert_eq!(report.conditions.len(), 1);
    assert_eq!(report.conditions[0].name, "Insufficient Information");
    assert_eq!(report.conditions[0].probability, 0.5);
    assert_eq!(report.advice, DISCLAIMER);
}

#[test]
fn unrecognized_symptoms_yield_fallback() {
    let report = evaluate(&["Unicorn pox", "Glitter rash"]);

    assert_eq!(report.conditions.len(), 1);
    assert_eq!(report.conditions[0].name, "Insufficient Information");
}

#[test]
fn fever_cough_sore_throat_ranks_cold_flu_above_allergies() {
    let report = evaluate(&["Fever", "Cough", "Sore throat"]);

    let names: Vec<&str> = report.conditions.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Common Cold or Flu", "Seasonal Allergies"]);

    // cold/flu: 3 matches -> min(0.30 + 3 * 0.15, 0.95)
    assert!((report.conditions[0].probability - 0.75).abs() < 1e-12);
    // allergies: 2 matches -> min(0.20 + 2 * 0.15, 0.90)
    assert!((report.conditions[1].probability - 0.50).abs() < 1e-12);
}

#[test]
fn shared_symptoms_count_toward_every_category() {
    // Headache and Fatigue appear in both the cold/flu and migraine lists.
    let report = evaluate(&["Headache", "Fatigue"]);

    let names: Vec<&str> = report.conditions.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Migraine", "Common Cold or Flu"]);
    assert!((report.conditions[0].probability - 0.70).abs() < 1e-12);
    assert!((report.conditions[1].probability - 0.60).abs() < 1e-12);
}

#[test]
fn covid_and_anxiety_need_three_matches() {
    // Two COVID-list symptoms are not enough for the COVID category.
    let report = evaluate(&["Muscle pain", "Loss of appetite"]);
    assert!(report.conditions.iter().all(|c| c.name != "Possible COVID-19"));

    // A third pushes it over the threshold.
    let report = evaluate(&["Muscle pain", "Loss of appetite", "Shortness of breath"]);
    assert!(report.conditions.iter().any(|c| c.name == "Possible COVID-19"));
}

#[test]
fn ties_keep_category_order() {
    // cold/flu and gastroenteritis share base, weight, and cap; two
    // matches each is an exact tie, and the table order breaks it.
    let report = evaluate(&["Sore throat", "Chills", "Vomiting", "Abdominal pain"]);

    let names: Vec<&str> = report.conditions.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Common Cold or Flu", "Gastroenteritis"]);
    assert_eq!(
        report.conditions[0].probability,
        report.conditions[1].probability
    );
}

#[test]
fn duplicate_symptoms_count_once() {
    let once = evaluate(&["Fever", "Cough"]);
    let twice = evaluate(&["Fever", "Fever", "Cough", "Cough"]);

    assert_eq!(once.conditions.len(), twice.conditions.len());
    for (a, b) in once.conditions.iter().zip(&twice.conditions) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.probability, b.probability);
    }
}

#[test]
fn probabilities_stay_in_unit_interval_and_sorted() {
    use doktra_screening::symptoms::COMMON_SYMPTOMS;

    // The whole vocabulary at once saturates every category at its cap.
    let report = evaluate(COMMON_SYMPTOMS);

    assert!(!report.conditions.is_empty());
    for pair in report.conditions.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }
    for condition in &report.conditions {
        assert!((0.0..=1.0).contains(&condition.probability));
    }

    // Every category qualifies on the full vocabulary.
    assert_eq!(report.conditions.len(), 7);
    assert_eq!(report.conditions[0].name, "Common Cold or Flu");
    assert_eq!(report.conditions[0].probability, 0.95);
}

#[test]
fn identical_input_yields_identical_output() {
    let symptoms = ["Headache", "Nausea", "Fever", "Cough"];
    let a = serde_json::to_string(&evaluate(&symptoms)).unwrap();
    let b = serde_json::to_string(&evaluate(&symptoms)).unwrap();
    assert_eq!(a, b);
}
