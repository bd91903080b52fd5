use cheongyak::subscription::{
    calculate_points, point_explanation, point_grade, ApplicantInput, GradeLevel, HouseholdType,
    SimulationEngine, StrategyCatalog, NATIONWIDE_REGION,
};

fn applicant(
    age: i32,
    homeless_period: i32,
    dependents: i32,
    subscription_account_period: i32,
    income: i32,
    household_type: HouseholdType,
    region: &str,
) -> ApplicantInput {
    ApplicantInput {
        age,
        homeless_period,
        dependents,
        subscription_account_period,
        income,
        household_type,
        region: region.to_string(),
    }
}

#[test]
fn walkthrough_applicant_scores_low_and_sees_only_alternatives() {
    let input = applicant(25, 12, 0, 6, 2500, HouseholdType::Single, "서울");

    let breakdown = calculate_points(&input);
    assert_eq!(breakdown.age_points, 20.0);
    assert_eq!(breakdown.homeless_points, 6.0);
    assert_eq!(breakdown.dependents_points, 0.0);
    assert!((breakdown.subscription_account_points - 1.8).abs() < 1e-9);
    assert_eq!(breakdown.income_points, 10.0);
    assert_eq!(breakdown.total_points, 37.8);

    let grade = point_grade(breakdown.total_points);
    assert_eq!(grade.grade, GradeLevel::Low);

    let engine = SimulationEngine::new(StrategyCatalog::standard());
    let result = engine.run(breakdown.total_points, &input);
    assert!(result.recommended_strategies.is_empty());
    assert_eq!(result.success_probability, 0.0);
    assert_eq!(result.alternative_strategies.len(), 1);
    assert_eq!(result.alternative_strategies[0].id, "local-public");
}

#[test]
fn seasoned_family_applicant_reaches_high_grade() {
    let input = applicant(45, 120, 3, 80, 4200, HouseholdType::Family, "서울");

    let breakdown = calculate_points(&input);
    assert_eq!(breakdown.age_points, 10.0);
    assert_eq!(breakdown.homeless_points, 30.0);
    assert_eq!(breakdown.dependents_points, 15.0);
    assert_eq!(breakdown.subscription_account_points, 20.0);
    assert_eq!(breakdown.income_points, 5.0);
    assert_eq!(breakdown.total_points, 80.0);
    assert_eq!(point_grade(breakdown.total_points).grade, GradeLevel::High);

    let engine = SimulationEngine::default();
    let assessment = engine.assess(input);
    let recommended: Vec<&str> = assessment
        .simulation
        .recommended_strategies
        .iter()
        .map(|strategy| strategy.id)
        .collect();
    assert_eq!(
        recommended,
        vec!["public-small", "youth-special", "private-special"]
    );
    assert_eq!(assessment.explanation, point_explanation(&assessment.breakdown));
}

#[test]
fn applicant_input_round_trips_wire_format() {
    let payload = r#"{
        "age": 31,
        "homelessPeriod": 36,
        "dependents": 1,
        "subscriptionAccountPeriod": 24,
        "income": 2900,
        "householdType": "couple",
        "region": "전국"
    }"#;

    let input: ApplicantInput = serde_json::from_str(payload).expect("valid payload");
    assert_eq!(input.household_type, HouseholdType::Couple);
    assert_eq!(input.region, NATIONWIDE_REGION);

    let breakdown = calculate_points(&input);
    // 20 + 18 + 5 + 7.2 + 10, summed in category order.
    assert_eq!(breakdown.total_points, 20.0 + 18.0 + 5.0 + 24.0 * 0.3 + 10.0);
    assert_eq!(point_grade(breakdown.total_points).grade, GradeLevel::Medium);
}

#[test]
fn unknown_household_type_is_rejected_at_the_wire() {
    let payload = r#"{
        "age": 31,
        "homelessPeriod": 36,
        "dependents": 1,
        "subscriptionAccountPeriod": 24,
        "income": 2900,
        "householdType": "roommates",
        "region": "서울"
    }"#;

    assert!(serde_json::from_str::<ApplicantInput>(payload).is_err());
}
