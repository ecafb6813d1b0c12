//! Wellpulse CLI - command-line interface for the wellness analytics engine
//!
//! Commands:
//! - report: Compute the five-pillar report from raw daily records
//! - coach: Compute the report plus the coaching recommendation

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wellpulse::normalizer::parse_window_end;
use wellpulse::pipeline::{analyze, analyze_ending, Analysis};
use wellpulse::report::ReportEncoder;
use wellpulse::types::{Goals, RawDailyRecord};
use wellpulse::{EngineError, ENGINE_VERSION};

/// Wellpulse - analytics engine for sparse daily wellness logs
#[derive(Parser)]
#[command(name = "wellpulse")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Turn daily wellness logs into pillar scores, trends, and a coaching lever", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the five-pillar report
    Report {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Compute the report plus the coaching recommendation
    Coach {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Input file with raw daily records (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Input format
    #[arg(long, default_value = "json")]
    input_format: InputFormat,

    /// Output format (auto pretty-prints on a TTY)
    #[arg(long, default_value = "auto")]
    output_format: OutputFormat,

    /// Window length in days
    #[arg(long, default_value = "30")]
    window: usize,

    /// End the window at this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    end_date: Option<String>,

    /// Daily step target
    #[arg(long, default_value = "10000")]
    step_goal: f64,

    /// Daily calorie target
    #[arg(long, default_value = "2200")]
    calorie_goal: f64,

    /// Daily water target (litres)
    #[arg(long, default_value = "2.5")]
    water_goal: f64,

    /// Daily protein target (grams)
    #[arg(long, default_value = "120")]
    protein_goal: f64,
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// JSON array of records
    Json,
    /// Newline-delimited JSON (one record per line)
    Ndjson,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Pretty-print when stdout is a TTY, compact otherwise
    Auto,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WellpulseCliError> {
    match cli.command {
        Commands::Report { common } => {
            let analysis = run_analysis(&common)?;
            let payload = ReportEncoder::new().encode(&analysis.days, &analysis.report, None);
            print_payload(&payload, &common.output_format)
        }
        Commands::Coach { common } => {
            let analysis = run_analysis(&common)?;
            let summary = analysis.coach_summary(&goals_from(&common));
            let payload =
                ReportEncoder::new().encode(&analysis.days, &analysis.report, Some(&summary));
            print_payload(&payload, &common.output_format)
        }
    }
}

fn run_analysis(args: &CommonArgs) -> Result<Analysis, WellpulseCliError> {
    let records = read_records(&args.input, &args.input_format)?;
    let goals = goals_from(args);

    match &args.end_date {
        Some(raw) => {
            let end = parse_window_end(raw)?;
            Ok(analyze_ending(&records, &goals, end, args.window))
        }
        None => Ok(analyze(&records, &goals, args.window)),
    }
}

fn goals_from(args: &CommonArgs) -> Goals {
    Goals {
        step_goal: args.step_goal,
        calorie_goal: args.calorie_goal,
        water_goal: args.water_goal,
        protein_goal: args.protein_goal,
    }
}

fn read_records(
    input: &Path,
    format: &InputFormat,
) -> Result<Vec<RawDailyRecord>, WellpulseCliError> {
    let data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let records = match format {
        InputFormat::Json => RawDailyRecord::parse_array(&data)?,
        InputFormat::Ndjson => RawDailyRecord::parse_ndjson(&data)?,
    };
    Ok(records)
}

fn print_payload(
    payload: &wellpulse::ReportPayload,
    format: &OutputFormat,
) -> Result<(), WellpulseCliError> {
    let pretty = match format {
        OutputFormat::Auto => atty::is(atty::Stream::Stdout),
        OutputFormat::Json => false,
        OutputFormat::JsonPretty => true,
    };

    let output = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{output}");
    Ok(())
}

// Error types

#[derive(Debug)]
enum WellpulseCliError {
    Io(io::Error),
    Engine(EngineError),
    Json(serde_json::Error),
}

impl From<io::Error> for WellpulseCliError {
    fn from(e: io::Error) -> Self {
        WellpulseCliError::Io(e)
    }
}

impl From<EngineError> for WellpulseCliError {
    fn from(e: EngineError) -> Self {
        WellpulseCliError::Engine(e)
    }
}

impl From<serde_json::Error> for WellpulseCliError {
    fn from(e: serde_json::Error) -> Self {
        WellpulseCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WellpulseCliError> for CliError {
    fn from(e: WellpulseCliError) -> Self {
        match e {
            WellpulseCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WellpulseCliError::Engine(e @ EngineError::DateParseError(_)) => CliError {
                code: "BAD_END_DATE".to_string(),
                message: e.to_string(),
                hint: Some("Use YYYY-MM-DD".to_string()),
            },
            WellpulseCliError::Engine(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure records are daily-log objects with a date field".to_string()),
            },
            WellpulseCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
        }
    }
}
