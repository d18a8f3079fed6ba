//! Verdant CLI - spectral index and color-scale inspection

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use verdant_algorithms::imagery::{classify, compute_index, evaluate, try_compute_index};
use verdant_colormap::{color_for_value, css_linear_gradient, scale_gradient_descriptor};
use verdant_core::{
    band_composites, get_index_definition, index_definitions, source_display_name, Band,
    BandSample, IndexKind, Rgb,
};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "verdant")]
#[command(author, version, about = "Spectral index and color-scale toolkit", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the index catalog
    List,
    /// Compute an index value from band reflectances
    Compute {
        /// Index id (ndvi, evi, ndwi, savi, msi, nbr, lai, gndvi)
        index: String,
        #[arg(long)]
        red: Option<f64>,
        #[arg(long)]
        green: Option<f64>,
        #[arg(long)]
        blue: Option<f64>,
        #[arg(long)]
        nir: Option<f64>,
        #[arg(long)]
        swir: Option<f64>,
        /// Additional readings as BAND=VALUE (e.g. NIR=0.5)
        #[arg(short, long = "band", value_parser = parse_band_reading)]
        bands: Vec<(Band, f64)>,
        /// Fail on unknown index ids instead of printing 0
        #[arg(long)]
        strict: bool,
    },
    /// Map an index value to its display color and category
    Color {
        /// Index id
        index: String,
        /// Index value
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Show the legend gradient of an index
    Gradient {
        /// Index id
        index: String,
        /// Print as a CSS linear-gradient value
        #[arg(long)]
        css: bool,
    },
    /// List false-color band composites
    Composites,
    /// Show the display name of a satellite source id
    Source {
        /// Source id (modis, sentinel-1, sentinel-2, landsat, planet)
        id: String,
    },
}

// ─── Output records ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct ComputeOutput<'a> {
    index: &'a str,
    value: f64,
    degenerate: bool,
    color: Rgb,
    category: Option<&'static str>,
}

#[derive(Serialize)]
struct ColorOutput<'a> {
    index: &'a str,
    value: f64,
    color: Rgb,
    category: Option<&'static str>,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a global tracing subscriber was already installed");
    }
}

fn parse_band_reading(s: &str) -> Result<(Band, f64)> {
    let (name, value) = s
        .split_once('=')
        .with_context(|| format!("Band reading must be BAND=VALUE, got: {}", s))?;
    let band: Band = name.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid reflectance for {}: {}", band, value))?;
    Ok((band, value))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn warn_unknown(index: &str) {
    if get_index_definition(index).is_none() {
        info!("Unknown index '{}', falling back to display defaults", index);
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            if cli.json {
                return print_json(&index_definitions());
            }
            println!("{:<6} {:<6} {:>12} {:<6} FORMULA", "ID", "NAME", "RANGE", "UNIT");
            for def in index_definitions() {
                let (min, max) = def.valid_range;
                println!(
                    "{:<6} {:<6} {:>12} {:<6} {}",
                    def.id,
                    def.name,
                    format!("[{}, {}]", min, max),
                    def.unit,
                    def.formula
                );
            }
        }

        Commands::Compute {
            index,
            red,
            green,
            blue,
            nir,
            swir,
            bands,
            strict,
        } => {
            let mut sample: BandSample = bands.into_iter().collect();
            for (band, value) in [
                (Band::Red, red),
                (Band::Green, green),
                (Band::Blue, blue),
                (Band::Nir, nir),
                (Band::Swir, swir),
            ] {
                if let Some(v) = value {
                    sample.set(band, v);
                }
            }
            debug!(?sample, "band sample");

            let value = if strict {
                try_compute_index(&index, &sample)
                    .with_context(|| format!("Failed to compute {}", index))?
            } else {
                warn_unknown(&index);
                compute_index(&index, &sample)
            };
            let degenerate = IndexKind::from_id(&index)
                .map(|kind| evaluate(kind, &sample).degenerate)
                .unwrap_or(false);
            let color = color_for_value(&index, value);
            let category = classify(&index, value);

            if cli.json {
                return print_json(&ComputeOutput {
                    index: &index,
                    value,
                    degenerate,
                    color,
                    category,
                });
            }
            println!("{} = {:.4}", index, value);
            if degenerate {
                println!("  (zero denominator, fallback value)");
            }
            match category {
                Some(c) => println!("  color: {}  category: {}", color, c),
                None => println!("  color: {}", color),
            }
        }

        Commands::Color { index, value } => {
            warn_unknown(&index);
            let color = color_for_value(&index, value);
            let category = classify(&index, value);
            if cli.json {
                return print_json(&ColorOutput {
                    index: &index,
                    value,
                    color,
                    category,
                });
            }
            match category {
                Some(c) => println!("{} ({})", color, c),
                None => println!("{}", color),
            }
        }

        Commands::Gradient { index, css } => {
            warn_unknown(&index);
            if css {
                println!("{}", css_linear_gradient(&index));
            } else if cli.json {
                return print_json(&scale_gradient_descriptor(&index));
            } else {
                for stop in scale_gradient_descriptor(&index) {
                    println!("{} {:>7.2}%", stop.color, stop.percent);
                }
            }
        }

        Commands::Composites => {
            if cli.json {
                return print_json(&band_composites());
            }
            for c in band_composites() {
                println!(
                    "{:<12} R={:<6} G={:<6} B={:<6} {}",
                    c.id, c.red_band, c.green_band, c.blue_band, c.name
                );
            }
        }

        Commands::Source { id } => {
            println!("{}", source_display_name(&id));
        }
    }

    Ok(())
}
