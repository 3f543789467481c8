//! solidcalc CLI - volume and surface area of 3D solids
//!
//! Compute a single shape from the command line, print the formula table, or
//! fill in shapes through an interactive prompt.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use solidcalc::{ShapeKind, Solid, TessellationParams};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod interactive;
mod render;

use config::Config;

#[derive(Parser)]
#[command(name = "solidcalc")]
#[command(about = "Volume and surface area of 3D solids", long_about = None)]
struct Cli {
    /// TOML file with display defaults (precision, unit, segments)
    #[arg(long, global = true, env = "SOLIDCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute volume and surface area of one shape
    Compute(ComputeArgs),
    /// Print the formula used for each shape, or for one shape
    Formulas {
        /// Only show this shape
        shape: Option<ShapeKind>,
    },
    /// List the supported shapes and their parameters
    Shapes,
    /// Enter shapes and dimensions at a prompt
    Interactive,
}

#[derive(Args)]
struct ComputeArgs {
    /// Shape name (see `solidcalc shapes`)
    shape: ShapeKind,

    /// Lengths in the order listed by `solidcalc shapes`
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Decimal places in the printed result
    #[arg(short, long)]
    precision: Option<usize>,

    /// Unit label for the printed result, e.g. `cm`
    #[arg(short, long)]
    unit: Option<String>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also write a binary STL mesh of the shape to this path
    #[arg(long)]
    stl: Option<PathBuf>,

    /// Segments around circular features in the STL mesh
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=TessellationParams::MAX_SEGMENTS as i64))]
    segments: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Compute(args)) => {
            compute(args, &config)?;
        }
        Some(Commands::Formulas { shape }) => {
            print!("{}", render::formula_table(shape));
        }
        Some(Commands::Shapes) => {
            print!("{}", render::shape_menu());
        }
        Some(Commands::Interactive) | None => {
            let stdin = io::stdin();
            interactive::run(&mut stdin.lock(), &mut io::stdout(), &config)?;
        }
    }

    Ok(())
}

/// Log to stderr so results and JSON on stdout stay clean.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn compute(args: ComputeArgs, config: &Config) -> Result<()> {
    let solid = Solid::from_values(args.shape, &args.values)?;
    let precision = args.precision.unwrap_or(config.precision);
    let unit = args.unit.as_deref().unwrap_or(&config.unit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solid)?);
    } else {
        print!("{}", render::report(&solid, precision, unit));
    }

    if let Some(path) = args.stl {
        let segments = args.segments.unwrap_or(config.segments);
        solid
            .write_stl(&path, segments)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), segments, "exported STL");
        if !args.json {
            println!("Exported STL to {}", path.display());
        }
    }

    Ok(())
}
