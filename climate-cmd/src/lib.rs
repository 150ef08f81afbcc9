//! Command implementations for the climate dashboard CLI.
//!
//! Every command loads the datasets from a data directory, derives the
//! dashboard aggregates once and then works on the loaded data only.

use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod export;
pub mod load;
pub mod render;
pub mod simulate;
pub mod summary;

/// Where the datasets and the optional config file live.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory holding the four dataset CSVs
    #[arg(short = 'd', long, default_value = "fixtures")]
    pub data_dir: PathBuf,

    /// JSON dashboard config (snapshot date, default city, download filename)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print mean temperatures of the monthly table grouped by one or more columns
    Summary {
        #[command(flatten)]
        data: DataArgs,

        /// Grouping column; repeat to group by several
        #[arg(long = "by", default_value = "city")]
        by: Vec<String>,
    },

    /// Write the monthly aggregate download to a directory
    Export {
        #[command(flatten)]
        data: DataArgs,

        /// Output directory
        #[arg(short = 'o', long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print one output slot as JSON
    Render {
        #[command(flatten)]
        data: DataArgs,

        /// Output slot id, e.g. bar-chart
        #[arg(short = 's', long)]
        slot: String,

        /// City for the filtered slots (defaults to the configured city)
        #[arg(long)]
        city: Option<String>,
    },

    /// Replay selector events (`session:input=value`) and report recomputed slots
    Simulate {
        #[command(flatten)]
        data: DataArgs,

        /// Events in order, e.g. alice:dropdown1=Madrid
        #[arg(required = true)]
        events: Vec<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data, by } => {
            let data = load::load(&data)?;
            let keys: Vec<&str> = by.iter().map(String::as_str).collect();
            print!("{}", summary::run_summary(&data, &keys)?);
        }
        Command::Export { data, out_dir } => {
            let data = load::load(&data)?;
            let path = export::run_export(&data, &out_dir)?;
            println!("{}", path.display());
        }
        Command::Render { data, slot, city } => {
            let data = load::load(&data)?;
            println!("{}", render::run_render(data, &slot, city.as_deref())?);
        }
        Command::Simulate { data, events } => {
            let data = load::load(&data)?;
            let events = events
                .iter()
                .map(|e| e.parse())
                .collect::<anyhow::Result<Vec<simulate::SelectEvent>>>()?;
            for line in simulate::run_simulate(data, &events).await? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
