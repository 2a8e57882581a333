use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::domain::error::SearchError;
use crate::domain::input::InputSpace;
use crate::domain::report::SweepResult;
use crate::engine::collision::{SearchLimits, ensure_collision_reachable, find_collision_within};
use crate::engine::truncate::validate_bits;
use crate::util::seed::derive_point_seed;

pub const DEFAULT_MIN_BITS: u32 = 8;
pub const DEFAULT_MAX_BITS: u32 = 50;
pub const DEFAULT_STEP_BITS: u32 = 2;

/// Digest widths 8, 10, ..., 50.
pub fn default_bits() -> Vec<u32> {
    (DEFAULT_MIN_BITS..=DEFAULT_MAX_BITS)
        .step_by(DEFAULT_STEP_BITS as usize)
        .collect()
}

/// Everything a sweep needs besides the widths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepOptions {
    pub space: InputSpace,
    pub limits: SearchLimits,
    /// Base seed; each point derives its own. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Runs the default sweep over 8..=50 bits with unbounded searches.
pub fn sweep() -> Result<SweepResult, SearchError> {
    sweep_bits(&default_bits(), &SweepOptions::default())
}

/// Runs one collision search per width, sequentially in ascending order.
///
/// Widths are sorted and deduplicated. All widths and the input space are
/// validated before the first search starts, so a bad width never leaves a
/// partial result behind. Without limits, every width must be able to
/// collide within the input space.
pub fn sweep_bits(bits: &[u32], options: &SweepOptions) -> Result<SweepResult, SearchError> {
    let plan = plan_widths(bits)?;
    if options.limits.is_unbounded() {
        for bits in &plan {
            ensure_collision_reachable(*bits, &options.space)?;
        }
    }
    info!(points = plan.len(), seeded = options.seed.is_some(), "starting sweep");

    let mut records = Vec::with_capacity(plan.len());
    for bits in plan {
        let mut rng = match options.seed {
            Some(base) => StdRng::seed_from_u64(derive_point_seed(base, bits)),
            None => StdRng::from_entropy(),
        };
        debug!(bits, "sweep point started");
        let outcome = find_collision_within(bits, &options.space, options.limits, &mut rng)?;
        let record = outcome.into_record();
        info!(
            bits = record.bits,
            inputs_examined = record.inputs_examined,
            elapsed_seconds = record.elapsed_seconds,
            collided = record.collided,
            "sweep point finished"
        );
        records.push(record);
    }

    Ok(SweepResult::new(records))
}

/// Sorted, deduplicated, validated widths.
pub fn plan_widths(bits: &[u32]) -> Result<Vec<u32>, SearchError> {
    if bits.is_empty() {
        return Err(SearchError::EmptySweep);
    }
    let mut plan = bits.to_vec();
    plan.sort_unstable();
    plan.dedup();
    for width in &plan {
        validate_bits(*width)?;
    }
    Ok(plan)
}

/// Expected draws until the first collision in a domain of `2^bits` values,
/// `sqrt(pi / 2 * 2^bits)`.
pub fn expected_draws(bits: u32) -> f64 {
    (PI / 2.0 * 2f64.powi(bits as i32)).sqrt()
}
