use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use trunccol::cmd::{CommandResponse, avalanche, collide, digest, sweep, truncate};
use trunccol::domain::report::{PipelineParameter, PipelineReport};
use trunccol::io::Format;
use trunccol::logging;

#[derive(Debug, Parser)]
#[command(
    name = "trunccol",
    version,
    about = "Birthday collision search over truncated SHA-256 digests"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    /// Log filter directive, e.g. `debug` or `trunccol=trace`. Overrides TRUNCCOL_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the SHA-256 digest of a text.
    Digest(DigestArgs),
    /// Print the leading bits of a text's SHA-256 digest.
    Truncate(TruncateArgs),
    /// Compare chained digests of two texts one bit apart.
    Avalanche(AvalancheArgs),
    /// Find one collision at a digest width.
    Collide(CollideArgs),
    /// Find one collision per digest width and emit the measurement table.
    Sweep(SweepArgs),
}

#[derive(Debug, clap::Args)]
struct DigestArgs {
    /// Text to hash; read from stdin when omitted.
    #[arg(long)]
    text: Option<String>,
}

#[derive(Debug, clap::Args)]
struct TruncateArgs {
    #[arg(long)]
    text: Option<String>,

    #[arg(long)]
    bits: u32,
}

#[derive(Debug, clap::Args)]
struct AvalancheArgs {
    #[arg(long)]
    text: Option<String>,

    #[arg(long, default_value_t = trunccol::engine::avalanche::DEFAULT_ROUNDS)]
    rounds: u32,
}

#[derive(Debug, clap::Args)]
struct SearchArgs {
    /// Seed for reproducible draws; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    alphabet: Option<String>,

    #[arg(long)]
    input_length: Option<usize>,

    /// Stop a search after this many draws.
    #[arg(long)]
    max_draws: Option<u64>,

    /// Stop a search after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Debug, clap::Args)]
struct CollideArgs {
    #[arg(long)]
    bits: u32,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Debug, clap::Args)]
struct SweepArgs {
    /// Comma-separated digest widths; defaults to 8,10,...,50.
    #[arg(long, value_delimiter = ',')]
    bits: Option<Vec<u32>>,

    /// TOML file with sweep settings; flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the table to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    to: Option<CliOutputFormat>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Json,
    Jsonl,
    Csv,
    Yaml,
}

impl From<CliOutputFormat> for Format {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Jsonl => Self::Jsonl,
            CliOutputFormat::Csv => Self::Csv,
            CliOutputFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    if let Err(error) = logging::init_logging(cli.log_level.as_deref()) {
        emit_error(
            "input_usage_error",
            format!("invalid log filter: {error}"),
            json!({"kind": "log_filter"}),
            3,
        );
        return 3;
    }

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Digest(args) => run_digest(args, emit_pipeline),
        Commands::Truncate(args) => run_truncate(args, emit_pipeline),
        Commands::Avalanche(args) => run_avalanche(args, emit_pipeline),
        Commands::Collide(args) => run_collide(args, emit_pipeline),
        Commands::Sweep(args) => run_sweep(args, emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_digest(args: DigestArgs, emit_pipeline: bool) -> i32 {
    let pipeline_report = PipelineReport::new(
        "digest",
        vec![text_source(args.text.as_deref())],
        digest::pipeline_steps(),
        digest::deterministic_guards(),
    );
    let command_args = digest::DigestCommandArgs { text: args.text };
    let response = digest::run_with_stdin(&command_args, io::stdin().lock());
    finish(response, "digest", emit_pipeline.then_some(&pipeline_report))
}

fn run_truncate(args: TruncateArgs, emit_pipeline: bool) -> i32 {
    let pipeline_report = PipelineReport::new(
        "truncate",
        vec![
            text_source(args.text.as_deref()),
            PipelineParameter::new("bits", args.bits, "flag"),
        ],
        truncate::pipeline_steps(),
        truncate::deterministic_guards(),
    );
    let command_args = truncate::TruncateCommandArgs {
        text: args.text,
        bits: args.bits,
    };
    let response = truncate::run_with_stdin(&command_args, io::stdin().lock());
    finish(response, "truncate", emit_pipeline.then_some(&pipeline_report))
}

fn run_avalanche(args: AvalancheArgs, emit_pipeline: bool) -> i32 {
    let pipeline_report = PipelineReport::new(
        "avalanche",
        vec![
            text_source(args.text.as_deref()),
            PipelineParameter::new("rounds", args.rounds, "flag"),
        ],
        avalanche::pipeline_steps(),
        avalanche::deterministic_guards(),
    );
    let command_args = avalanche::AvalancheCommandArgs {
        text: args.text,
        rounds: args.rounds,
    };
    let response = avalanche::run_with_stdin(&command_args, io::stdin().lock());
    finish(response, "avalanche", emit_pipeline.then_some(&pipeline_report))
}

fn run_collide(args: CollideArgs, emit_pipeline: bool) -> i32 {
    let command_args = collide::CollideCommandArgs {
        bits: args.bits,
        seed: args.search.seed,
        alphabet: args.search.alphabet,
        input_length: args.search.input_length,
        max_draws: args.search.max_draws,
        timeout_ms: args.search.timeout_ms,
    };
    let mut parameters = vec![PipelineParameter::new("bits", command_args.bits, "flag")];
    if let Some(seed) = command_args.seed {
        parameters.push(PipelineParameter::new("seed", seed, "flag"));
    }
    let pipeline_report = PipelineReport::new(
        "collide",
        parameters,
        collide::pipeline_steps(),
        collide::deterministic_guards(command_args.seed.is_some()),
    );
    let response = collide::run(&command_args);
    finish(response, "collide", emit_pipeline.then_some(&pipeline_report))
}

fn run_sweep(args: SweepArgs, emit_pipeline: bool) -> i32 {
    let command_args = sweep::SweepCommandArgs {
        bits: args.bits,
        config: args.config,
        seed: args.search.seed,
        alphabet: args.search.alphabet,
        input_length: args.search.input_length,
        max_draws: args.search.max_draws,
        timeout_ms: args.search.timeout_ms,
        output: args.output,
        to: args.to.map(Into::into),
    };

    let resolved = match sweep::resolve(&command_args) {
        Ok(resolved) => resolved,
        Err(error) => {
            let (exit_code, error_kind) = error.classify();
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "sweep"}),
                exit_code,
            );
            return exit_code;
        }
    };

    let stdout = io::stdout();
    let exit_code = match sweep::run(&resolved, stdout.lock()) {
        Ok(_) => 0,
        Err(error) => {
            let (exit_code, error_kind) = error.classify();
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "sweep"}),
                exit_code,
            );
            exit_code
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&PipelineReport::new(
            "sweep",
            resolved.parameters.clone(),
            sweep::pipeline_steps(),
            sweep::deterministic_guards(&resolved),
        ));
    }
    exit_code
}

fn text_source(text: Option<&str>) -> PipelineParameter {
    match text {
        Some(text) => PipelineParameter::new("text", text, "flag"),
        None => PipelineParameter::new("text", "", "stdin"),
    }
}

fn finish(response: CommandResponse, command: &str, pipeline: Option<&PipelineReport>) -> i32 {
    let response = response.with_command(command);
    let emitted = if response.writes_to_stdout() {
        emit_json_stdout(&response.payload)
    } else {
        emit_json_stderr(&response.payload)
    };
    let exit_code = if emitted {
        response.exit_code
    } else {
        emit_error(
            "internal_error",
            format!("failed to serialize {command} response"),
            json!({"command": command}),
            1,
        );
        1
    };

    if let Some(report) = pipeline {
        emit_pipeline_report(report);
    }
    exit_code
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
