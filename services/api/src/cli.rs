use crate::demo::{run_demo, run_emi_score, DemoArgs, EmiScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use paisa_planner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Paisa Planner",
    about = "Run the EMI planning service or exercise the engine from the command line",
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
    /// Inspect the EMI engine directly
    Emi {
        #[command(subcommand)]
        command: EmiCommand,
    },
    /// Run an end-to-end CLI demo covering intake, optimization, and advice
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EmiCommand {
    /// Compute the monthly payment and score for a single prospective loan
    Score(EmiScoreArgs),
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

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Emi {
            command: EmiCommand::Score(args),
        } => run_emi_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
