use serde::Serialize;

use crate::domain::digest::{Digest, TruncatedValue};

/// First pair of distinct inputs found sharing a truncated digest.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Collision {
    pub bits: u32,
    pub first_input: String,
    pub second_input: String,
    pub first_digest: Digest,
    pub second_digest: Digest,
    pub truncated: TruncatedValue,
    pub inputs_examined: u64,
    pub elapsed_seconds: f64,
}

/// Result of a search that may stop before finding a collision.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Collision),
    /// A draw or time limit was reached first.
    Expired {
        bits: u32,
        inputs_examined: u64,
        elapsed_seconds: f64,
    },
}

impl SearchOutcome {
    pub fn collision(&self) -> Option<&Collision> {
        match self {
            Self::Found(collision) => Some(collision),
            Self::Expired { .. } => None,
        }
    }

    pub fn into_record(self) -> SweepRecord {
        match self {
            Self::Found(collision) => SweepRecord {
                bits: collision.bits,
                inputs_examined: collision.inputs_examined,
                elapsed_seconds: collision.elapsed_seconds,
                collided: true,
            },
            Self::Expired {
                bits,
                inputs_examined,
                elapsed_seconds,
            } => SweepRecord {
                bits,
                inputs_examined,
                elapsed_seconds,
                collided: false,
            },
        }
    }
}

/// One sweep point.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SweepRecord {
    pub bits: u32,
    pub inputs_examined: u64,
    pub elapsed_seconds: f64,
    /// False only when a search limit expired before a collision.
    pub collided: bool,
}

/// Sweep records in ascending bit order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct SweepResult {
    records: Vec<SweepRecord>,
}

impl SweepResult {
    /// Sorts by width; the driver already produces ascending order.
    pub fn new(mut records: Vec<SweepRecord>) -> Self {
        records.sort_by_key(|record| record.bits);
        Self { records }
    }

    pub fn records(&self) -> &[SweepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parallel `(bits, inputs_examined, elapsed_seconds)` series for charting.
    pub fn series(&self) -> (Vec<u32>, Vec<u64>, Vec<f64>) {
        let bits = self.records.iter().map(|record| record.bits).collect();
        let inputs = self
            .records
            .iter()
            .map(|record| record.inputs_examined)
            .collect();
        let elapsed = self
            .records
            .iter()
            .map(|record| record.elapsed_seconds)
            .collect();
        (bits, inputs, elapsed)
    }
}

/// Diagnostics report emitted when `--emit-pipeline` is enabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineReport {
    pub command: String,
    pub parameters: Vec<PipelineParameter>,
    pub steps: Vec<String>,
    pub deterministic_guards: Vec<String>,
}

impl PipelineReport {
    pub fn new(
        command: impl Into<String>,
        parameters: Vec<PipelineParameter>,
        steps: Vec<String>,
        deterministic_guards: Vec<String>,
    ) -> Self {
        Self {
            command: command.into(),
            parameters,
            steps,
            deterministic_guards,
        }
    }
}

/// Named parameter value as the command resolved it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineParameter {
    pub name: String,
    pub value: String,
    pub source: String,
}

impl PipelineParameter {
    pub fn new(
        name: impl Into<String>,
        value: impl ToString,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
            source: source.into(),
        }
    }
}
