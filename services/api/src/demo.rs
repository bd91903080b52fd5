use crate::infra::ApplicantArgs;
use cheongyak::error::AppError;
use cheongyak::subscription::{
    calculate_points, point_explanation, point_grade, success_rate_color, ApplicantInput,
    HouseholdType, PointBreakdown, PointGrade, SimulationEngine, SimulationResult, Strategy,
    StrategyCatalog,
};
use clap::{Args, ValueEnum};
use std::io;

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    #[command(flatten)]
    pub(crate) applicant: ApplicantArgs,
    /// Simulate with this point total instead of the calculated one
    #[arg(long)]
    pub(crate) points: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StrategiesArgs {
    /// Output format for the catalog listing
    #[arg(long, value_enum, default_value_t = CatalogFormat::Table)]
    pub(crate) format: CatalogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum CatalogFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub(crate) fn run_points(args: ApplicantArgs) -> Result<(), AppError> {
    let input = ApplicantInput::from(args);
    let breakdown = calculate_points(&input);
    let grade = point_grade(breakdown.total_points);
    render_breakdown(&breakdown, &grade);
    Ok(())
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let SimulateArgs { applicant, points } = args;
    let input = ApplicantInput::from(applicant);
    let user_points = points.unwrap_or_else(|| calculate_points(&input).total_points);

    let engine = SimulationEngine::new(StrategyCatalog::standard());
    let result = engine.run(user_points, &input);
    render_simulation(&input, &result);
    Ok(())
}

pub(crate) fn run_strategies(args: StrategiesArgs) -> Result<(), AppError> {
    let catalog = StrategyCatalog::standard();

    match args.format {
        CatalogFormat::Table => {
            println!("Strategy catalog ({} entries)", catalog.len());
            for strategy in catalog.strategies() {
                render_strategy(strategy);
            }
        }
        CatalogFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.strategies())?);
        }
        CatalogFormat::Csv => catalog.write_csv(io::stdout().lock())?,
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let input = demo_applicant();
    let engine = SimulationEngine::new(StrategyCatalog::standard());
    let assessment = engine.assess(input);

    println!("Housing-subscription walkthrough");
    println!(
        "Applicant: age {}, {} months homeless, {} dependents, {} months account, income {} x 10k KRW, {}, {}",
        assessment.input.age,
        assessment.input.homeless_period,
        assessment.input.dependents,
        assessment.input.subscription_account_period,
        assessment.input.income,
        assessment.input.household_type.label(),
        assessment.input.region
    );

    println!();
    render_breakdown(&assessment.breakdown, &assessment.grade);
    println!();
    render_simulation(&assessment.input, &assessment.simulation);

    Ok(())
}

fn demo_applicant() -> ApplicantInput {
    ApplicantInput {
        age: 25,
        homeless_period: 12,
        dependents: 0,
        subscription_account_period: 6,
        income: 2500,
        household_type: HouseholdType::Single,
        region: "서울".to_string(),
    }
}

pub(crate) fn render_breakdown(breakdown: &PointBreakdown, grade: &PointGrade) {
    println!("Point breakdown");
    for entry in breakdown.categories() {
        println!(
            "- {}: {} / {} points",
            entry.label, entry.points, entry.max_points
        );
    }
    println!(
        "Total: {} / {} points",
        breakdown.total_points,
        PointBreakdown::MAX_TOTAL
    );
    println!(
        "Grade: {} - {} [{}]",
        grade.grade.label(),
        grade.description,
        grade.color
    );

    println!("\nHow the points were earned");
    for line in point_explanation(breakdown).lines() {
        println!("- {}", line);
    }
}

pub(crate) fn render_simulation(input: &ApplicantInput, result: &SimulationResult) {
    println!(
        "Strategy simulation at {} points ({}, {})",
        result.user_points,
        input.household_type.label(),
        input.region
    );
    println!(
        "Success probability: {:.1}% [{}]",
        result.success_probability,
        success_rate_color(result.success_probability)
    );

    if result.recommended_strategies.is_empty() {
        println!("\nRecommended strategies: none eligible");
    } else {
        println!("\nRecommended strategies");
        for strategy in &result.recommended_strategies {
            render_strategy(strategy);
        }
    }

    if result.alternative_strategies.is_empty() {
        println!("\nAlternative strategies: none");
    } else {
        println!("\nAlternative strategies");
        for strategy in &result.alternative_strategies {
            render_strategy(strategy);
        }
    }
}

fn render_strategy(strategy: &Strategy) {
    println!(
        "- {} ({}) | {} | {}-{} points | {}% success | {} | {} | difficulty {}",
        strategy.name,
        strategy.id,
        strategy.category.label(),
        strategy.min_points,
        strategy.max_points,
        strategy.success_rate,
        strategy.region,
        strategy.household_type.label(),
        strategy.difficulty.label()
    );
    println!("  {}", strategy.description);
}
