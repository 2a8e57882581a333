use rand::SeedableRng;
use rand::rngs::StdRng;
use trunccol::domain::input::InputSpace;
use trunccol::engine::collision::{find_collision, find_collision_with};
use trunccol::engine::sweep::expected_draws;
use trunccol::engine::truncate::record;

fn median_draws(bits: u32, trials: u64) -> u64 {
    let space = InputSpace::default();
    let mut draws: Vec<u64> = (0..trials)
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(1_000 * u64::from(bits) + trial);
            find_collision_with(bits, &space, &mut rng)
                .expect("collision")
                .inputs_examined
        })
        .collect();
    draws.sort_unstable();
    draws[draws.len() / 2]
}

#[test]
fn collision_pair_is_distinct_and_shares_prefix() {
    for bits in [8, 10, 14, 20] {
        let mut rng = StdRng::seed_from_u64(u64::from(bits));
        let collision =
            find_collision_with(bits, &InputSpace::default(), &mut rng).expect("collision");
        assert_ne!(collision.first_input, collision.second_input);
        assert!(collision.inputs_examined >= 2);
        assert!(collision.elapsed_seconds >= 0.0);
        assert_eq!(
            record(collision.first_input.as_str(), bits)
                .expect("first")
                .truncated,
            record(collision.second_input.as_str(), bits)
                .expect("second")
                .truncated
        );
    }
}

#[test]
fn eight_bit_search_ends_within_ten_thousand_draws() {
    let collision = find_collision(8).expect("collision");
    assert!(collision.inputs_examined >= 2);
    assert!(collision.inputs_examined <= 10_000);
}

#[test]
fn median_draws_follow_birthday_growth() {
    let widths = [8, 12, 16];
    let medians: Vec<u64> = widths.iter().map(|bits| median_draws(*bits, 21)).collect();

    for (bits, median) in widths.iter().zip(&medians) {
        let expected = expected_draws(*bits);
        let median = *median as f64;
        assert!(
            median > expected / 4.0 && median < expected * 4.0,
            "bits={bits} median={median} expected={expected}"
        );
    }
    assert!(
        medians.windows(2).all(|pair| pair[0] < pair[1]),
        "{medians:?}"
    );
}

#[test]
fn reduced_alphabet_still_yields_distinct_pairs() {
    let space = InputSpace::new("xyz", 12).expect("space");
    let mut rng = StdRng::seed_from_u64(42);
    let collision = find_collision_with(12, &space, &mut rng).expect("collision");
    assert_ne!(collision.first_input, collision.second_input);
    assert!(collision.first_input.bytes().all(|b| b"xyz".contains(&b)));
    assert_eq!(collision.first_input.len(), 12);
}
