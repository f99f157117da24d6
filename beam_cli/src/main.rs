//! # Beam CLI
//!
//! Command-line front end for beam_core. Reads a beam from a JSON file (or
//! asks for it field by field), runs the analysis and prints the reactions,
//! diagram extremes and sampled curve as a table, a JSON report or CSV.
//!
//! ```text
//! beam_cli beam.json
//! beam_cli beam.json --format csv --output curve.csv
//! beam_cli --samples 101 --centroid triangle-fraction
//! RUST_LOG=beam_core=debug beam_cli beam.json
//! ```

mod output;

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use beam_core::beam::BeamSpec;
use beam_core::errors::BeamError;
use beam_core::loads::{CentroidRule, DistributedLoad, PointLoad, VaryingLoad};
use beam_core::report::AnalysisReport;
use beam_core::settings::{AnalysisSettings, PartialProfile};

#[derive(Parser, Debug)]
#[command(
    name = "beam_cli",
    version,
    about = "Shear force and bending moment diagrams for simply-supported beams"
)]
struct Cli {
    /// Beam specification as JSON. Prompts for each value when omitted.
    input: Option<PathBuf>,

    /// Analysis settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of evenly spaced samples, both supports included
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Centroid rule for trapezoidal loads
    #[arg(long, value_enum)]
    centroid: Option<CentroidArg>,

    /// Intensity profile of partly covered varying loads
    #[arg(long, value_enum)]
    partial: Option<PartialArg>,

    /// Add load positions and span ends to the sample grid
    #[arg(long)]
    critical_points: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CentroidArg {
    Exact,
    TriangleFraction,
}

impl From<CentroidArg> for CentroidRule {
    fn from(arg: CentroidArg) -> Self {
        match arg {
            CentroidArg::Exact => CentroidRule::Exact,
            CentroidArg::TriangleFraction => CentroidRule::TriangleFraction,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PartialArg {
    SpanEnds,
    Interpolated,
}

impl From<PartialArg> for PartialProfile {
    fn from(arg: PartialArg) -> Self {
        match arg {
            PartialArg::SpanEnds => PartialProfile::SpanEnds,
            PartialArg::Interpolated => PartialProfile::Interpolated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_f64(&mut io::stdin().lock(), &mut io::stdout(), prompt, default)
}

/// Ask until the answer parses. Empty input, end of input or an I/O error
/// give `default`.
fn read_f64<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str, default: f64) -> f64 {
    loop {
        if write!(out, "{prompt} [{default}]: ").and_then(|()| out.flush()).is_err() {
            return default;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return default,
            Ok(_) => {}
        }

        let text = line.trim();
        if text.is_empty() {
            return default;
        }
        match text.parse() {
            Ok(value) => return value,
            Err(_) => {
                warn!(input = text, field = prompt, "not a number, asking again");
                let _ = writeln!(out, "  '{text}' is not a number");
            }
        }
    }
}

/// Ask for every field of the beam, one line each
fn prompt_spec() -> BeamSpec {
    println!("Beam analysis - enter values, or press Enter for the default");
    println!();

    let length = prompt_f64("Beam length", 10.0);
    let point_load = PointLoad::new(
        prompt_f64("Point load magnitude", 0.0),
        prompt_f64("Point load position", 0.0),
    );
    let udl = DistributedLoad::new(
        prompt_f64("UDL intensity", 0.0),
        prompt_f64("UDL start", 0.0),
        prompt_f64("UDL end", 0.0),
    );

    let mut spec = BeamSpec::new(length)
        .with_point_load(point_load)
        .with_udl(udl);
    for i in 0..spec.uvls.len() {
        let n = i + 1;
        let uvl = VaryingLoad::new(
            prompt_f64(&format!("UVL {n} start intensity"), 0.0),
            prompt_f64(&format!("UVL {n} end intensity"), 0.0),
            prompt_f64(&format!("UVL {n} start"), 0.0),
            prompt_f64(&format!("UVL {n} end"), 0.0),
        );
        spec = spec.with_uvl(i, uvl);
    }
    println!();
    spec
}

fn load_spec(path: &Path) -> anyhow::Result<BeamSpec> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading beam specification {}", path.display()))?;
    let spec: BeamSpec = serde_json::from_str(&text)
        .map_err(BeamError::from)
        .with_context(|| format!("parsing beam specification {}", path.display()))?;
    Ok(spec)
}

fn resolve_settings(cli: &Cli) -> anyhow::Result<AnalysisSettings> {
    let mut settings = match &cli.config {
        Some(path) => AnalysisSettings::load(path)?,
        None => AnalysisSettings::default(),
    };
    if let Some(samples) = cli.samples {
        settings.sample_count = samples;
    }
    if let Some(centroid) = cli.centroid {
        settings.centroid_rule = centroid.into();
    }
    if let Some(partial) = cli.partial {
        settings.partial_profile = partial.into();
    }
    if cli.critical_points {
        settings.include_critical_points = true;
    }
    settings.validate()?;
    Ok(settings)
}

fn try_run(cli: &Cli) -> anyhow::Result<()> {
    let settings = resolve_settings(cli)?;
    let spec = match &cli.input {
        Some(path) => load_spec(path)?,
        None => prompt_spec(),
    };

    let report = AnalysisReport::generate(spec, settings)?;
    info!(
        samples = report.results.curve.len(),
        left = report.results.reactions.left,
        right = report.results.reactions.right,
        "analysis complete"
    );

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        Format::Table => output::write_table(&report, &mut out)?,
        Format::Json => output::write_json(&report, &mut out)?,
        Format::Csv => output::write_csv(&report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(beam_error) = e.downcast_ref::<BeamError>() {
                if let Ok(json) = serde_json::to_string_pretty(beam_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{json}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "beam_cli",
            "beam.json",
            "-n",
            "51",
            "--centroid",
            "triangle-fraction",
            "--partial",
            "interpolated",
            "--critical-points",
            "--format",
            "csv",
        ]);
        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.sample_count, 51);
        assert_eq!(settings.centroid_rule, CentroidRule::TriangleFraction);
        assert_eq!(settings.partial_profile, PartialProfile::Interpolated);
        assert!(settings.include_critical_points);
        assert_eq!(cli.format, Format::Csv);
    }

    #[test]
    fn test_read_f64_asks_again_on_typo() {
        let mut input = io::Cursor::new("12,5\n12.5\n");
        let mut out = Vec::new();
        let value = read_f64(&mut input, &mut out, "UDL intensity", 0.0);
        assert_eq!(value, 12.5);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("UDL intensity [0]: ").count(), 2);
        assert!(text.contains("'12,5' is not a number"));
    }

    #[test]
    fn test_read_f64_defaults() {
        let mut out = Vec::new();
        let mut empty_line = io::Cursor::new("\n");
        assert_eq!(read_f64(&mut empty_line, &mut out, "Beam length", 10.0), 10.0);
        // End of input after a typo falls back instead of looping
        let mut eof = io::Cursor::new("abc\n");
        assert_eq!(read_f64(&mut eof, &mut out, "Beam length", 10.0), 10.0);
    }

    #[test]
    fn test_bad_sample_count_rejected() {
        let cli = Cli::parse_from(["beam_cli", "-n", "1"]);
        let err = resolve_settings(&cli).unwrap_err();
        let beam_error = err.downcast_ref::<BeamError>().unwrap();
        assert_eq!(beam_error.error_code(), "INVALID_INPUT");
    }
}
