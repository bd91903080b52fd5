use cheongyak::subscription::{limits, ApplicantInput, HouseholdType, APPLICANT_REGIONS};
use clap::builder::PossibleValuesParser;
use clap::Args;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Applicant attributes collected on the command line. Ranges and defaults mirror the input form.
#[derive(Args, Debug, Clone)]
pub(crate) struct ApplicantArgs {
    /// Applicant age in years
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(i32).range(age_range()))]
    pub(crate) age: i32,
    /// Months without owning a home
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(i32).range(homeless_range()))]
    pub(crate) homeless_period: i32,
    /// Number of dependents
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i32).range(dependents_range()))]
    pub(crate) dependents: i32,
    /// Months since the subscription account was opened
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(i32).range(account_range()))]
    pub(crate) account_period: i32,
    /// Annual income in units of 10,000 KRW
    #[arg(long, default_value_t = 2500, value_parser = clap::value_parser!(i32).range(income_range()))]
    pub(crate) income: i32,
    /// Household type: single, couple, or family
    #[arg(long, default_value = "single", value_parser = parse_household)]
    pub(crate) household: HouseholdType,
    /// Preferred region
    #[arg(long, default_value = "서울", value_parser = PossibleValuesParser::new(APPLICANT_REGIONS))]
    pub(crate) region: String,
}

impl From<ApplicantArgs> for ApplicantInput {
    fn from(args: ApplicantArgs) -> Self {
        ApplicantInput {
            age: args.age,
            homeless_period: args.homeless_period,
            dependents: args.dependents,
            subscription_account_period: args.account_period,
            income: args.income,
            household_type: args.household,
            region: args.region,
        }
    }
}

fn bounds((low, high): (i32, i32)) -> std::ops::RangeInclusive<i64> {
    i64::from(low)..=i64::from(high)
}

fn age_range() -> std::ops::RangeInclusive<i64> {
    bounds(limits::AGE)
}

fn homeless_range() -> std::ops::RangeInclusive<i64> {
    bounds(limits::HOMELESS_PERIOD)
}

fn dependents_range() -> std::ops::RangeInclusive<i64> {
    bounds(limits::DEPENDENTS)
}

fn account_range() -> std::ops::RangeInclusive<i64> {
    bounds(limits::SUBSCRIPTION_ACCOUNT_PERIOD)
}

fn income_range() -> std::ops::RangeInclusive<i64> {
    bounds(limits::INCOME)
}

pub(crate) fn parse_household(raw: &str) -> Result<HouseholdType, String> {
    raw.parse()
}
