use crate::demo::{
    run_demo, run_points, run_simulation, run_strategies, SimulateArgs, StrategiesArgs,
};
use crate::infra::ApplicantArgs;
use crate::server;
use cheongyak::config::AppConfig;
use cheongyak::error::AppError;
use cheongyak::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Cheongyak Simulator",
    about = "Score housing-subscription applicants and simulate strategy outcomes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the point breakdown and grade for an applicant
    Points(ApplicantArgs),
    /// Rank strategies for an applicant and estimate the success probability
    Simulate(SimulateArgs),
    /// List the strategy catalog
    Strategies(StrategiesArgs),
    /// Walk through calculation, grading, and simulation for a sample applicant
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Points(args) => run_points(args),
        Command::Simulate(args) => run_simulation(args),
        Command::Strategies(args) => run_strategies(args),
        Command::Demo => run_demo(),
    }
}
