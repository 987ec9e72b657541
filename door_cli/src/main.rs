//! # Doorcalc CLI
//!
//! Prints a cut sheet and lumber order for one door installation.
//!
//! ## Usage
//!
//! ```bash
//! # Measurements as flags
//! doorcalc calc --door-type bi-fold --rough-width 34 --rough-height 82 --door-width 30
//!
//! # Measurements from a JSON file, results as JSON
//! doorcalc calc --input closet.json --json
//!
//! # Print a sample input file
//! doorcalc example > closet.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use door_core::{calculate, CalcError, CalcResult, InstallationReport, InstallationSpec};

/// Door frame and casing calculator
///
/// Works out whether a door fits its rough opening, the frame and casing
/// cut lengths, and which stock lengths to buy.
#[derive(Parser, Debug)]
#[command(name = "doorcalc")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Log derivation details to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate cut and order lengths for one installation
    Calc(CalcArgs),
    /// Print a sample JSON input file
    Example,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Read the installation from a JSON file instead of flags
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with_all = [
        "door_type", "rough_width", "rough_height", "door_width",
    ])]
    input: Option<PathBuf>,

    /// Door type tag ("bi-fold" gets a site-built frame)
    #[arg(long)]
    door_type: Option<String>,

    /// Rough opening width (in)
    #[arg(long)]
    rough_width: Option<f64>,

    /// Rough opening height (in)
    #[arg(long)]
    rough_height: Option<f64>,

    /// Door width (in)
    #[arg(long)]
    door_width: Option<f64>,

    /// Door height (in) [default: 80]
    #[arg(long, env = "DOORCALC_DOOR_HEIGHT")]
    door_height: Option<f64>,

    /// Finished wall thickness (in) [default: 4.5]
    #[arg(long, env = "DOORCALC_WALL_THICKNESS")]
    wall_thickness: Option<f64>,

    /// Jamb board thickness (in) [default: 0.75]
    #[arg(long, env = "DOORCALC_FRAME_THICKNESS")]
    frame_thickness: Option<f64>,

    /// Casing face width (in) [default: 2.25]
    #[arg(long, env = "DOORCALC_CASING_WIDTH")]
    casing_width: Option<f64>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    /// Build the spec from the input file or the flags. Missing required
    /// flags become zero so validation names them. Optional measurements
    /// given as flags or env vars override the file.
    fn to_spec(&self) -> anyhow::Result<InstallationSpec> {
        let base = match &self.input {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                InstallationSpec::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => InstallationSpec::new(
                self.door_type.clone().unwrap_or_default(),
                finite_or_zero("rough_opening_width_in", self.rough_width)?,
                finite_or_zero("rough_opening_height_in", self.rough_height)?,
                finite_or_zero("door_width_in", self.door_width)?,
            ),
        };
        Ok(self.apply_overrides(base)?)
    }

    fn apply_overrides(&self, mut spec: InstallationSpec) -> CalcResult<InstallationSpec> {
        if let Some(value) = self.door_height {
            spec = spec.with_door_height(finite("door_height_in", value)?);
        }
        if let Some(value) = self.wall_thickness {
            spec = spec.with_wall_thickness(finite("wall_thickness_in", value)?);
        }
        if let Some(value) = self.frame_thickness {
            spec = spec.with_frame_thickness(finite("frame_thickness_in", value)?);
        }
        if let Some(value) = self.casing_width {
            spec = spec.with_casing_width(finite("casing_width_in", value)?);
        }
        Ok(spec)
    }
}

/// Reject NaN and infinities from the command line
fn finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "must be a finite number"))
    }
}

fn finite_or_zero(field: &str, value: Option<f64>) -> CalcResult<f64> {
    value.map(|v| finite(field, v)).transpose().map(Option::unwrap_or_default)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match &cli.command {
        Commands::Calc(args) => run_calc(args),
        Commands::Example => print_example(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run_calc(args: &CalcArgs) -> anyhow::Result<()> {
    let spec = args.to_spec()?;
    tracing::debug!(?spec, "calculating installation");

    let report = calculate(&spec)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_cut_sheet(&spec, &report);
    }
    Ok(())
}

fn print_example() -> anyhow::Result<()> {
    let spec = InstallationSpec::new("bi-fold", 34.0, 82.0, 30.0);
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn print_cut_sheet(spec: &InstallationSpec, report: &InstallationReport) {
    println!("═══════════════════════════════════════");
    println!("  DOOR INSTALLATION CUT SHEET");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Door type:     {}", spec.door_type);
    println!(
        "  Rough opening: {}\" x {}\"",
        spec.rough_opening_width_in, spec.rough_opening_height_in
    );
    println!("  Door:          {}\" x {}\"", spec.door_width_in, spec.door_height_in);
    println!("  Wall:          {}\"", spec.wall_thickness_in);
    println!("  Casing width:  {}\"", spec.casing_width_in);
    println!();
    println!("Fit:");
    println!(
        "  Max door:      {}\" x {}\" {}",
        report.max_door_size.width_in,
        report.max_door_size.height_in,
        status_icon(report.fits_in_rough_opening)
    );
    println!("  {}", report.advice);
    println!();
    println!("Frame ({}):", report.frame_material);
    match &report.frame_dimensions {
        Some(frame) => {
            println!("  Head:  1 @ {}\"", frame.top_frame_length_in);
            println!("  Legs:  2 @ {}\"", frame.side_frame_length_in);
        }
        None => println!("  No frame for this door type"),
    }
    println!();
    println!("Casing ({}):", report.casing_material);
    println!("  Head:  {}\"", report.casing_cut_lengths.top_length_in);
    println!("  Legs:  {}\"", report.casing_cut_lengths.side_length_in);
    println!();
    println!("═══════════════════════════════════════");
    println!("  ORDER ({} boards)", report.board_count());
    println!("═══════════════════════════════════════");
    for line in report.purchase_summary() {
        println!("  {} x {} {}", line.count, line.length, line.item);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[TOO LARGE]" }
}
