use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::cmd::CommandResponse;
use crate::domain::input::InputSpace;
use crate::domain::report::SearchOutcome;
use crate::engine::collision::{SearchLimits, find_collision_within};

/// Input arguments for collide command execution API.
#[derive(Debug, Clone, Default)]
pub struct CollideCommandArgs {
    pub bits: u32,
    pub seed: Option<u64>,
    pub alphabet: Option<String>,
    pub input_length: Option<usize>,
    pub max_draws: Option<u64>,
    pub timeout_ms: Option<u64>,
}

/// Runs one search. Exit 0 with the collision, 2 when a limit expired first,
/// 3 for bad parameters.
pub fn run(args: &CollideCommandArgs) -> CommandResponse {
    let space = match InputSpace::with_overrides(args.alphabet.as_deref(), args.input_length) {
        Ok(space) => space,
        Err(error) => return CommandResponse::input_usage(error.to_string()),
    };
    let limits = SearchLimits::from_parts(args.max_draws, args.timeout_ms);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match find_collision_within(args.bits, &space, limits, &mut rng) {
        Ok(SearchOutcome::Found(collision)) => CommandResponse::success(&collision),
        Ok(SearchOutcome::Expired {
            bits,
            inputs_examined,
            elapsed_seconds,
        }) => CommandResponse {
            exit_code: 2,
            payload: json!({
                "bits": bits,
                "collided": false,
                "inputs_examined": inputs_examined,
                "elapsed_seconds": elapsed_seconds,
            }),
        },
        Err(error) => CommandResponse::input_usage(error.to_string()),
    }
}

pub fn pipeline_steps() -> Vec<String> {
    vec![
        "validate_search_parameters".to_string(),
        "seed_input_generator".to_string(),
        "draw_hash_truncate_until_collision".to_string(),
        "write_collision_report".to_string(),
    ]
}

pub fn deterministic_guards(seeded: bool) -> Vec<String> {
    let mut guards = vec![
        "rust_native_execution".to_string(),
        "function_local_collision_table".to_string(),
    ];
    if seeded {
        guards.push("seeded_input_generator".to_string());
    }
    guards
}
