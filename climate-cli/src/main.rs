//! Climate CLI - summaries, exports and slot renders of the dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "climate-cli",
    version,
    about = "City climate dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: climate_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    climate_cmd::run(cli.command).await
}
