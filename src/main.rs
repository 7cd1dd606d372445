use anyhow::Context;
use clap::{Parser, Subcommand};
use geotagger::category::{suggest_category, suggest_for_photo, CoordinateSource, PhotoSuggestion};
use geotagger::gazetteer::loader;
use geotagger::geo::Coordinate;
use geotagger::resolver::Resolver;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// geotag: where was this photo taken, and what kind of photo is it?
///
/// Resolves a GPS coordinate against the Costa Rica gazetteer and suggests
/// a gallery category.
///
/// Examples:
///   geotag resolve --lat 9.9189 --lng -84.1370
///   geotag suggest --file IMG_tamarindo_042.jpg
///   geotag regions --full
///   geotag serve --port 8080
#[derive(Parser)]
#[command(name = "geotag", version, about, long_about = None)]
struct Cli {
    /// Gazetteer override file (JSON array of regions).
    /// Defaults to <config_dir>/geotagger/gazetteer.json if present.
    #[arg(long, global = true)]
    gazetteer: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a coordinate to a place and category.
    Resolve {
        /// Latitude (-90 to 90).
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude (-180 to 180).
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },

    /// Suggest a category for a photo, using GPS if given, else its file name.
    Suggest {
        /// Photo file name.
        #[arg(long)]
        file: Option<String>,

        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
    },

    /// List the gazetteer regions.
    Regions {
        /// Print every region with its POIs instead of the summary.
        #[arg(long)]
        full: bool,

        /// Write the active gazetteer to this path as an override file.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Start the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, short = 'p', default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geotagger=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Load gazetteer ──────────────────────────────────────────

    let gazetteer = loader::load(cli.gazetteer.as_deref()).context("Cannot load gazetteer")?;
    tracing::debug!(
        regions = gazetteer.len(),
        pois = gazetteer.poi_count(),
        "gazetteer ready"
    );
    let resolver = Resolver::new(Arc::new(gazetteer));

    match cli.command {
        Command::Resolve { lat, lng } => {
            let resolution = resolver.resolve_lat_lng(lat, lng)?;
            eprintln!("  {}", resolution.summary_line());

            let output = PhotoSuggestion {
                category: suggest_category(&resolution),
                resolution: Some(resolution),
                source: CoordinateSource::Gps,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Suggest { file, lat, lng } => {
            let coordinate = lat.zip(lng).map(|(lat, lng)| Coordinate::new(lat, lng));
            let output = suggest_for_photo(&resolver, coordinate, file.as_deref());
            if let Some(ref resolution) = output.resolution {
                eprintln!("  {}", resolution.summary_line());
            }
            eprintln!("  Category: {} ({})", output.category, output.category.english_name());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Regions { full, export } => {
            let gazetteer = resolver.gazetteer();
            if let Some(path) = export {
                loader::write_to(&path, gazetteer.all_regions())
                    .with_context(|| format!("Cannot export gazetteer to {}", path.display()))?;
                eprintln!("  Wrote {} regions to {}", gazetteer.len(), path.display());
            } else if full {
                println!("{}", serde_json::to_string_pretty(gazetteer)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&gazetteer.summary())?);
            }
        }

        Command::Serve { host, port } => {
            geotagger::server::start(resolver, &host, port)
                .await
                .with_context(|| format!("Server error on {}:{}", host, port))?;
        }
    }

    Ok(())
}
