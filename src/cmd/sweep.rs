use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::config::SweepConfig;
use crate::domain::error::SweepCommandError;
use crate::domain::input::InputSpace;
use crate::domain::report::{PipelineParameter, SweepResult};
use crate::engine::collision::SearchLimits;
use crate::engine::sweep::{SweepOptions, default_bits, expected_draws, plan_widths, sweep_bits};
use crate::io::{self, Format, writer};

/// Input arguments for sweep command execution API.
#[derive(Debug, Clone, Default)]
pub struct SweepCommandArgs {
    pub bits: Option<Vec<u32>>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub alphabet: Option<String>,
    pub input_length: Option<usize>,
    pub max_draws: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub output: Option<PathBuf>,
    pub to: Option<Format>,
}

/// Flags merged over the config file, validated.
#[derive(Debug, Clone)]
pub struct ResolvedSweep {
    pub bits: Vec<u32>,
    pub options: SweepOptions,
    pub output: Option<PathBuf>,
    pub format: Format,
    pub parameters: Vec<PipelineParameter>,
}

/// One table row handed to the reporting side.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SweepRow {
    pub bits: u32,
    pub inputs_examined: u64,
    pub elapsed_seconds: f64,
    pub collided: bool,
    pub expected_inputs: f64,
}

pub fn resolve(args: &SweepCommandArgs) -> Result<ResolvedSweep, SweepCommandError> {
    let config = match &args.config {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };
    let mut parameters = Vec::new();

    let bits = pick(args.bits.clone(), config.bits, default_bits);
    parameters.push(PipelineParameter::new(
        "bits",
        join_bits(&bits.value),
        bits.source,
    ));
    let bits = plan_widths(&bits.value)?;

    let alphabet = pick_opt(args.alphabet.clone(), config.alphabet);
    let input_length = pick_opt(args.input_length, config.input_length);
    let space = InputSpace::with_overrides(alphabet.value.as_deref(), input_length.value)?;
    parameters.push(PipelineParameter::new(
        "alphabet",
        space.alphabet(),
        alphabet.source,
    ));
    parameters.push(PipelineParameter::new(
        "input_length",
        space.length(),
        input_length.source,
    ));

    let seed = pick_opt(args.seed, config.seed);
    if let Some(value) = seed.value {
        parameters.push(PipelineParameter::new("seed", value, seed.source));
    }
    let max_draws = pick_opt(args.max_draws, config.max_draws);
    if let Some(value) = max_draws.value {
        parameters.push(PipelineParameter::new("max_draws", value, max_draws.source));
    }
    let timeout_ms = pick_opt(args.timeout_ms, config.timeout_ms);
    if let Some(value) = timeout_ms.value {
        parameters.push(PipelineParameter::new("timeout_ms", value, timeout_ms.source));
    }

    let format = io::resolve_output_format(args.to, args.output.as_deref())
        .map_err(|source| SweepCommandError::ResolveOutput { source })?;
    parameters.push(PipelineParameter::new(
        "format",
        format,
        match (args.to, &args.output) {
            (Some(_), _) => "flag",
            (None, Some(_)) => "output_extension",
            (None, None) => "default",
        },
    ));

    Ok(ResolvedSweep {
        bits,
        options: SweepOptions {
            space,
            limits: SearchLimits::from_parts(max_draws.value, timeout_ms.value),
            seed: seed.value,
        },
        output: args.output.clone(),
        format,
        parameters,
    })
}

/// Runs the sweep and writes the table to `--output` or `stdout`.
pub fn run<W: Write>(resolved: &ResolvedSweep, stdout: W) -> Result<SweepResult, SweepCommandError> {
    let result = sweep_bits(&resolved.bits, &resolved.options)?;
    let table = rows(&result);
    let written = match &resolved.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| SweepCommandError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            writer::write_rows(&mut out, resolved.format, &table)
                .and_then(|()| out.flush().map_err(Into::into))
        }
        None => writer::write_rows(stdout, resolved.format, &table),
    };
    written.map_err(|source| SweepCommandError::WriteOutput {
        format: resolved.format,
        source,
    })?;
    Ok(result)
}

pub fn rows(result: &SweepResult) -> Vec<SweepRow> {
    result
        .records()
        .iter()
        .map(|record| SweepRow {
            bits: record.bits,
            inputs_examined: record.inputs_examined,
            elapsed_seconds: record.elapsed_seconds,
            collided: record.collided,
            expected_inputs: expected_draws(record.bits),
        })
        .collect()
}

pub fn pipeline_steps() -> Vec<String> {
    vec![
        "load_sweep_config".to_string(),
        "resolve_sweep_parameters".to_string(),
        "validate_all_widths".to_string(),
        "run_points_sequentially".to_string(),
        "write_sweep_table".to_string(),
    ]
}

pub fn deterministic_guards(resolved: &ResolvedSweep) -> Vec<String> {
    let mut guards = vec![
        "rust_native_execution".to_string(),
        "sequential_sweep_points".to_string(),
        "ascending_bit_order".to_string(),
        "per_point_collision_table".to_string(),
    ];
    if resolved.options.seed.is_some() {
        guards.push("per_point_derived_seeds".to_string());
    }
    guards
}

struct Picked<T> {
    value: T,
    source: &'static str,
}

fn pick<T>(flag: Option<T>, file: Option<T>, default: impl FnOnce() -> T) -> Picked<T> {
    match (flag, file) {
        (Some(value), _) => Picked {
            value,
            source: "flag",
        },
        (None, Some(value)) => Picked {
            value,
            source: "config",
        },
        (None, None) => Picked {
            value: default(),
            source: "default",
        },
    }
}

fn pick_opt<T>(flag: Option<T>, file: Option<T>) -> Picked<Option<T>> {
    pick(flag.map(Some), file.map(Some), || None)
}

fn join_bits(bits: &[u32]) -> String {
    bits.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
