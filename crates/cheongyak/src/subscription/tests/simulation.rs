use super::common::*;
use crate::subscription::catalog::{Strategy, StrategyCatalog};
use crate::subscription::domain::{ApplicantInput, HouseholdType, NATIONWIDE_REGION};
use crate::subscription::{calculate_points, GradeLevel, SimulationEngine};

#[test]
fn zero_points_yield_no_recommendations() {
    let engine = engine();

    for household in HouseholdType::ordered() {
        let result = engine.run(0.0, &applicant(household, NATIONWIDE_REGION));
        assert!(result.recommended_strategies.is_empty());
        assert!(result.alternative_strategies.is_empty());
        assert_eq!(result.success_probability, 0.0);
        assert_eq!(result.user_points, 0.0);
    }
}

#[test]
fn single_applicant_only_sees_wildcard_strategies() {
    let engine = engine();
    let input = applicant(HouseholdType::Single, NATIONWIDE_REGION);

    let eligible = engine.eligible_strategies(100.0, &input);
    assert_eq!(
        ids(eligible.iter().copied()),
        vec!["public-small", "youth-special"]
    );

    let result = engine.run(100.0, &input);
    assert_eq!(
        ids(&result.recommended_strategies),
        vec!["public-small", "youth-special"]
    );
    assert_eq!(result.success_probability, 70.0);
}

#[test]
fn couple_in_provinces_gets_top_three_by_success_rate() {
    let engine = engine();
    let input = applicant(HouseholdType::Couple, "지방");

    let eligible = engine.eligible_strategies(100.0, &input);
    assert_eq!(eligible.len(), 5);

    let result = engine.run(100.0, &input);
    assert_eq!(
        ids(&result.recommended_strategies),
        vec!["local-public", "public-small", "newlywed"]
    );
    assert_eq!(result.success_probability, 71.0);
}

#[test]
fn family_in_seoul_matches_region_specific_strategy() {
    let engine = engine();
    let input = applicant(HouseholdType::Family, "서울");

    let result = engine.run(100.0, &input);

    assert_eq!(
        ids(&result.recommended_strategies),
        vec!["public-small", "youth-special", "private-special"]
    );
    assert!((result.success_probability - 185.0 / 3.0).abs() < 1e-9);
}

#[test]
fn couple_strategies_never_match_single_applicants() {
    let engine = engine();
    let single = applicant(HouseholdType::Single, NATIONWIDE_REGION);
    let couple = applicant(HouseholdType::Couple, NATIONWIDE_REGION);

    let single_ids = ids(engine.eligible_strategies(80.0, &single));
    let couple_ids = ids(engine.eligible_strategies(80.0, &couple));

    assert!(!single_ids.contains(&"newlywed"));
    assert!(couple_ids.contains(&"newlywed"));
    assert!(couple_ids.contains(&"public-small"));
}

#[test]
fn points_band_is_inclusive_on_both_ends() {
    let engine = engine();
    let input = applicant(HouseholdType::Single, "지방");

    let at_floor = engine.run(30.0, &input);
    assert_eq!(ids(&at_floor.recommended_strategies), vec!["local-public"]);
    assert_eq!(at_floor.success_probability, 85.0);

    let below_floor = engine.run(29.9, &input);
    assert!(below_floor.recommended_strategies.is_empty());

    let above_ceiling = engine.run(100.5, &input);
    assert!(above_ceiling.recommended_strategies.is_empty());
    assert_eq!(above_ceiling.success_probability, 0.0);
}

#[test]
fn alternatives_ignore_household_and_region() {
    let engine = engine();

    for input in [
        applicant(HouseholdType::Single, "서울"),
        applicant(HouseholdType::Family, "부산"),
    ] {
        let result = engine.run(50.0, &input);
        assert_eq!(
            ids(&result.alternative_strategies),
            vec!["local-public", "public-small", "youth-special"]
        );
    }
}

#[test]
fn alternatives_require_strictly_lower_minimum() {
    let engine = engine();
    let input = reference_input();

    let at_forty = engine.run(40.0, &input);
    assert_eq!(ids(&at_forty.alternative_strategies), vec!["local-public"]);

    let at_forty_two = engine.run(42.0, &input);
    assert_eq!(
        ids(&at_forty_two.alternative_strategies),
        vec!["local-public", "public-small"]
    );
}

#[test]
fn reference_applicant_has_no_eligible_strategies() {
    let engine = engine();
    let input = reference_input();
    let total = calculate_points(&input).total_points;

    let result = engine.run(total, &input);

    assert_eq!(result.user_points, 37.8);
    assert!(result.recommended_strategies.is_empty());
    assert_eq!(ids(&result.alternative_strategies), vec!["local-public"]);
    assert_eq!(result.success_probability, 0.0);
}

#[test]
fn ties_keep_catalog_order() {
    let template = StrategyCatalog::standard().strategies()[0].clone();
    let tied = |id: &'static str, min_points: f64| Strategy {
        id,
        min_points,
        success_rate: 50,
        ..template.clone()
    };
    let engine = SimulationEngine::new(StrategyCatalog::from_strategies(vec![
        tied("first", 10.0),
        tied("second", 10.0),
        tied("third", 5.0),
        tied("fourth", 10.0),
    ]));

    let result = engine.run(60.0, &applicant(HouseholdType::Couple, "대구"));

    assert_eq!(
        ids(&result.recommended_strategies),
        vec!["first", "second", "third"]
    );
    assert_eq!(
        ids(&result.alternative_strategies),
        vec!["third", "first", "second"]
    );
    assert_eq!(result.success_probability, 50.0);
}

#[test]
fn repeated_runs_are_identical() {
    let engine = engine();
    let input = applicant(HouseholdType::Couple, "지방");

    let first = engine.run(77.5, &input);
    let second = engine.run(77.5, &input);

    assert_eq!(first, second);
    assert_eq!(
        first.success_probability.to_bits(),
        second.success_probability.to_bits()
    );
}

#[test]
fn assessment_chains_breakdown_grade_and_simulation() {
    let engine = engine();
    let input = high_scoring_couple();

    let assessment = engine.assess(input.clone());

    assert_eq!(assessment.breakdown.total_points, 100.0);
    assert_eq!(assessment.grade.grade, GradeLevel::High);
    assert_eq!(assessment.simulation, engine.run(100.0, &input));
    assert_eq!(
        ids(&assessment.simulation.recommended_strategies),
        vec!["local-public", "public-small", "newlywed"]
    );
}

#[test]
fn simulation_result_serializes_with_camel_case_fields() {
    let engine = engine();
    let result = engine.run(50.0, &reference_input());
    let value = serde_json::to_value(&result).expect("serializes");

    assert_eq!(value["userPoints"], 50.0);
    assert!(value["recommendedStrategies"].is_array());
    assert_eq!(value["alternativeStrategies"][0]["id"], "local-public");
    assert!(value.get("successProbability").is_some());
}

fn high_scoring_couple() -> ApplicantInput {
    ApplicantInput {
        age: 32,
        homeless_period: 84,
        dependents: 4,
        subscription_account_period: 96,
        income: 2800,
        household_type: HouseholdType::Couple,
        region: "지방".to_string(),
    }
}
