use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadtrip_cli::interactive::run_session;
use roadtrip_cli::output::OutputFormat;
use roadtrip_lib::{load_atlas, resolve_data_dir, Atlas, DatasetPaths, RouteAlgorithm};

mod commands;

use commands::countries::handle_countries_command;
use commands::distance::handle_distance_command;
use commands::route::handle_route_command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Capital distances and border-crossing routes between countries"
)]
struct Cli {
    /// Directory holding borders.txt, capdist.csv and state_name.tsv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the land-border listing.
    #[arg(long, global = true)]
    borders: Option<PathBuf>,

    /// Override the capital distance CSV.
    #[arg(long, global = true)]
    capdist: Option<PathBuf>,

    /// Override the country name TSV.
    #[arg(long, global = true)]
    state_names: Option<PathBuf>,

    /// Output format for query results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Capital-to-capital distance between two bordering countries.
    Distance {
        /// First country name.
        #[arg(long = "from")]
        from: String,
        /// Second country name.
        #[arg(long = "to")]
        to: String,
    },
    /// Compute the shortest route between two countries across land borders.
    Route {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
        /// Algorithm to use when planning the route.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// List every country with a border record.
    Countries,
    /// Prompt for pairs of countries until EXIT (the default).
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Lowest total capital-to-capital distance.
    Dijkstra,
    /// Fewest border crossings.
    Bfs,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
        }
    }
}

impl Cli {
    fn dataset_paths(&self) -> DatasetPaths {
        let mut paths = DatasetPaths::in_dir(&resolve_data_dir(self.data_dir.as_deref()));
        if let Some(borders) = &self.borders {
            paths.borders = borders.clone();
        }
        if let Some(capdist) = &self.capdist {
            paths.capitals = capdist.clone();
        }
        if let Some(state_names) = &self.state_names {
            paths.state_names = state_names.clone();
        }
        paths
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let atlas = load(&cli)?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Distance { from, to } => handle_distance_command(&atlas, cli.format, &from, &to),
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(&atlas, cli.format, &from, &to, algorithm.into()),
        Command::Countries => handle_countries_command(&atlas, cli.format),
        Command::Interactive => run_session(&atlas, io::stdin().lock(), io::stdout().lock())
            .context("interactive session failed"),
    }
}

fn load(cli: &Cli) -> Result<Atlas> {
    let paths = cli.dataset_paths();
    load_atlas(&paths).with_context(|| {
        format!(
            "failed to load country datasets ({}, {}, {})",
            paths.borders.display(),
            paths.capitals.display(),
            paths.state_names.display()
        )
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
