pub mod table;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::domain::digest::TruncatedValue;
use crate::domain::error::SearchError;
use crate::domain::input::InputSpace;
use crate::domain::report::{Collision, SearchOutcome};
use crate::engine::digest::digest;
use crate::engine::truncate::{record, validate_bits};
use crate::util::time::Stopwatch;

use self::table::{CollisionTable, Observation};

/// Draws between wall-clock checks when a timeout is set.
const TIMEOUT_CHECK_INTERVAL: u64 = 1024;

/// Spaces this small are hashed in full before an unbounded search.
const EXHAUSTIVE_CHECK_SIZE: u64 = 1 << 16;

/// Larger spaces need `size^2 >= 2^(bits + 1 + margin)`, which puts the
/// chance that no two inputs share a prefix below `e^-64`.
const UNBOUNDED_MARGIN_BITS: u32 = 6;

/// Optional bounds on a single search. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_draws: Option<u64>,
    pub timeout: Option<Duration>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from_parts(max_draws: Option<u64>, timeout_ms: Option<u64>) -> Self {
        Self {
            max_draws,
            timeout: timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_draws.is_none() && self.timeout.is_none()
    }

    fn draws_exhausted(&self, inputs_examined: u64) -> bool {
        self.max_draws.is_some_and(|max| inputs_examined >= max)
    }

    fn timed_out(&self, inputs_examined: u64, stopwatch: &Stopwatch) -> bool {
        match self.timeout {
            Some(timeout) => {
                inputs_examined % TIMEOUT_CHECK_INTERVAL == 0 && stopwatch.elapsed() >= timeout
            }
            None => false,
        }
    }
}

/// Finds a collision at `bits` over the default input space with an
/// entropy-seeded generator.
pub fn find_collision(bits: u32) -> Result<Collision, SearchError> {
    let mut rng = StdRng::from_entropy();
    find_collision_with(bits, &InputSpace::default(), &mut rng)
}

/// Finds a collision at `bits`, drawing inputs from `space` with `rng`.
///
/// Runs until a collision is found.
pub fn find_collision_with<R: Rng + ?Sized>(
    bits: u32,
    space: &InputSpace,
    rng: &mut R,
) -> Result<Collision, SearchError> {
    match find_collision_within(bits, space, SearchLimits::unbounded(), rng)? {
        SearchOutcome::Found(collision) => Ok(collision),
        SearchOutcome::Expired { .. } => unreachable!("unbounded search cannot expire"),
    }
}

/// Birthday search that gives up once `limits` are reached.
///
/// `inputs_examined` counts every draw, including redraws of an input that
/// is already stored and the draw that completes the collision.
pub fn find_collision_within<R: Rng + ?Sized>(
    bits: u32,
    space: &InputSpace,
    limits: SearchLimits,
    rng: &mut R,
) -> Result<SearchOutcome, SearchError> {
    validate_bits(bits)?;
    if limits.is_unbounded() {
        ensure_collision_reachable(bits, space)?;
    }

    let mut table = CollisionTable::for_bits(bits);
    let mut buffer = Vec::with_capacity(space.length());
    let mut inputs_examined = 0u64;
    let stopwatch = Stopwatch::start();

    loop {
        if limits.draws_exhausted(inputs_examined) || limits.timed_out(inputs_examined, &stopwatch)
        {
            let elapsed_seconds = stopwatch.elapsed_seconds();
            debug!(
                bits,
                inputs_examined,
                elapsed_seconds,
                stored = table.len(),
                "search limit reached"
            );
            return Ok(SearchOutcome::Expired {
                bits,
                inputs_examined,
                elapsed_seconds,
            });
        }

        let index = rng.gen_range(0..space.size());
        space.decode_into(index, &mut buffer);
        let key = TruncatedValue::from_digest_unchecked(&digest(&buffer), bits);
        inputs_examined += 1;

        match table.observe(&key, index) {
            Observation::Inserted => {}
            Observation::Redrawn => trace!(bits, index, "input redrawn"),
            Observation::Collided { first } => {
                let elapsed_seconds = stopwatch.elapsed_seconds();
                debug!(bits, inputs_examined, elapsed_seconds, "collision found");
                return Ok(SearchOutcome::Found(build_collision(
                    bits,
                    space,
                    first,
                    index,
                    inputs_examined,
                    elapsed_seconds,
                )?));
            }
        }
    }
}

/// Fails when an unbounded search at `bits` over `space` might never end.
///
/// Passes when pigeonhole guarantees a collision. Small spaces are hashed in
/// full and pass only if two inputs share a prefix. Larger spaces must make a
/// collision overwhelmingly likely.
pub fn ensure_collision_reachable(bits: u32, space: &InputSpace) -> Result<(), SearchError> {
    validate_bits(bits)?;
    let size = space.size();
    if bits < 64 && size > 1u64 << bits {
        return Ok(());
    }

    let reachable = if size <= EXHAUSTIVE_CHECK_SIZE {
        let mut table = CollisionTable::for_bits(bits);
        let mut buffer = Vec::with_capacity(space.length());
        (0..size).any(|index| {
            space.decode_into(index, &mut buffer);
            let key = TruncatedValue::from_digest_unchecked(&digest(&buffer), bits);
            matches!(table.observe(&key, index), Observation::Collided { .. })
        })
    } else {
        2.0 * (size as f64).log2() >= f64::from(bits + 1 + UNBOUNDED_MARGIN_BITS)
    };

    if reachable {
        Ok(())
    } else {
        Err(SearchError::UnreachableCollision { bits, size })
    }
}

fn build_collision(
    bits: u32,
    space: &InputSpace,
    first: u64,
    second: u64,
    inputs_examined: u64,
    elapsed_seconds: f64,
) -> Result<Collision, SearchError> {
    let first = record(space.decode(first), bits)?;
    let second = record(space.decode(second), bits)?;
    debug_assert_eq!(first.truncated, second.truncated);
    Ok(Collision {
        bits,
        first_input: first.input,
        second_input: second.input,
        first_digest: first.digest,
        second_digest: second.digest,
        truncated: second.truncated,
        inputs_examined,
        elapsed_seconds,
    })
}
