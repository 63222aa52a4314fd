use std::path::PathBuf;

use carte_inscriptions::pipeline;
use carte_inscriptions::{CarteError, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    match cli.command {
        Command::Render(args) => execute_render(args),
    }
}

fn execute_render(args: RenderArgs) -> Result<()> {
    if !args.communes.exists() {
        return Err(CarteError::MissingInput(args.communes));
    }
    if !args.participants.exists() {
        return Err(CarteError::MissingInput(args.participants));
    }
    if let Some(basemap) = &args.basemap {
        if !basemap.exists() {
            return Err(CarteError::MissingInput(basemap.clone()));
        }
    }

    pipeline::generate_map(
        &args.communes,
        &args.participants,
        args.basemap.as_deref(),
        &args.output,
    )
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| CarteError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Geocode a participant roster against the French commune table and map it."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the roster and render the map.
    Render(RenderArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Commune reference table (code_insee, code_postal, nom_commune,
    /// latitude, longitude).
    #[arg(long, default_value = "communesdefrancev2.csv")]
    communes: PathBuf,

    /// Participant roster (code_postal, commune).
    #[arg(long, default_value = "code-ville.csv")]
    participants: PathBuf,

    /// Optional GeoJSON FeatureCollection of base-map layers.
    #[arg(long)]
    basemap: Option<PathBuf>,

    /// Output image path.
    #[arg(long, default_value = "carte_codes_postaux.png")]
    output: PathBuf,
}
