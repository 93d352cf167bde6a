mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliResult;
use pf_catalog::{BuiltinCatalog, Catalog, CatalogFile, CatalogSource, FileCatalog};
use pf_hydraulics::{PumpingResults, SuctionLine, calculate};
use pf_project::{build_system, suction_line};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PumpFlow CLI - pump head, NPSH and power for single-line piping systems", long_about = None)]
struct Cli {
    /// Reference-data file (YAML or JSON); the built-in catalog is used when omitted
    #[arg(long, global = true, env = "PF_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a system description and resolve it against the catalog
    Validate {
        /// Path to the system YAML/JSON file
        system_path: PathBuf,
    },
    /// Compute the operating point of a system
    Run {
        /// Path to the system YAML/JSON file
        system_path: PathBuf,
        /// Suction line length in metres (overrides the file)
        #[arg(long)]
        suction_length: Option<f64>,
        /// Suction free-surface elevation above the pump in metres (overrides the file)
        #[arg(long)]
        suction_elevation: Option<f64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List catalog fluids
    Fluids,
    /// List catalog fittings
    Fittings,
    /// Write the active catalog to a YAML/JSON file
    ExportCatalog {
        /// Output path (.yaml, .yml or .json)
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Validate { system_path } => cmd_validate(&catalog, &system_path),
        Commands::Run {
            system_path,
            suction_length,
            suction_elevation,
            format,
        } => cmd_run(
            &catalog,
            &system_path,
            suction_length,
            suction_elevation,
            format,
        ),
        Commands::Fluids => {
            cmd_fluids(&catalog);
            Ok(())
        }
        Commands::Fittings => {
            cmd_fittings(&catalog);
            Ok(())
        }
        Commands::ExportCatalog { output } => {
            CatalogFile::from_catalog(&catalog).save(&output)?;
            println!("✓ Catalog written to {}", output.display());
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&Path>) -> CliResult<Catalog> {
    let catalog = match path {
        Some(path) => {
            info!(path = %path.display(), "using catalog file");
            FileCatalog::new(path).load()?
        }
        None => BuiltinCatalog.load()?,
    };
    Ok(catalog)
}

fn cmd_validate(catalog: &Catalog, system_path: &Path) -> CliResult<()> {
    println!("Validating system: {}", system_path.display());
    let def = pf_project::load(system_path)?;
    let system = build_system(&def, catalog)?;
    suction_line(&def)?;
    println!(
        "✓ '{}' is valid ({} segments, {} fitting kinds)",
        def.name,
        system.segments().len(),
        system.fittings().count()
    );
    Ok(())
}

fn cmd_run(
    catalog: &Catalog,
    system_path: &Path,
    suction_length: Option<f64>,
    suction_elevation: Option<f64>,
    format: OutputFormat,
) -> CliResult<()> {
    let def = pf_project::load(system_path)?;
    let system = build_system(&def, catalog)?;

    let from_file = suction_line(&def)?;
    let suction = SuctionLine::new(
        suction_length.unwrap_or(from_file.length_m()),
        suction_elevation.unwrap_or(from_file.fluid_elevation_m()),
    )?;

    let results = calculate(&system, catalog.constants(), &suction);
    match format {
        OutputFormat::Text => print_results(&def.name, &results),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&results)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}

fn print_results(name: &str, results: &PumpingResults) {
    println!("Results for {name}:");
    for (key, value, unit) in results.rows() {
        println!("  {key:<24} {value:>14.4} {unit}");
    }
}

fn cmd_fluids(catalog: &Catalog) {
    println!(
        "  {:<22} {:>10} {:>12} {:>12}",
        "name", "rho kg/m3", "mu Pa.s", "pv Pa"
    );
    for fluid in catalog.fluids() {
        println!(
            "  {:<22} {:>10.1} {:>12.3e} {:>12.1}",
            fluid.name(),
            fluid.density().value,
            fluid.viscosity().value,
            fluid.vapor_pressure().value
        );
    }
}

fn cmd_fittings(catalog: &Catalog) {
    println!(
        "  {:<24} {:>6} {:>8}  {:<14} {}",
        "kind", "K", "Leq m", "standard", "description"
    );
    for fitting in catalog.fittings() {
        println!(
            "  {:<24} {:>6.2} {:>8.2}  {:<14} {}",
            fitting.kind().as_str(),
            fitting.coefficient_k(),
            fitting.equivalent_length().value,
            fitting.standard(),
            fitting.kind().display_name()
        );
    }
}
