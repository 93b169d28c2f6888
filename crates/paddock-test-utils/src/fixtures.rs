//! Reusable horse and round fixtures.
//!
//! - [`horse`]: one horse with a chosen id and condition.
//! - [`numbered_roster`]: `n` horses `h0..h{n-1}` with spread-out conditions.
//! - [`round`]: a round with copies of the given horses.
//! - [`assert_ranked`]: panics unless a result is a sorted permutation of its entrants.

use std::collections::HashMap;

use paddock_core::{Horse, HorseId, RaceRound};

/// A horse named after its id, coloured white, at position 0.
pub fn horse(id: &str, condition: u8) -> Horse {
    Horse::new(id, format!("Horse {id}"), "#FFFFFF", condition)
}

/// `n` horses with ids `h0..`, conditions cycling through `50..=99`.
pub fn numbered_roster(n: usize) -> Vec<Horse> {
    (0..n)
        .map(|i| horse(&format!("h{i}"), 50 + (i * 7 % 50) as u8))
        .collect()
}

/// A round over clones of `horses`.
pub fn round(round_number: u32, distance: u32, horses: &[Horse]) -> RaceRound {
    RaceRound {
        round_number,
        distance,
        horses: horses.to_vec(),
    }
}

/// Assert that `results` is a permutation of `entrants` (by id) and that
/// every result carries a finish time in non-decreasing order.
pub fn assert_ranked(entrants: &[Horse], results: &[Horse]) {
    assert_eq!(
        entrants.len(),
        results.len(),
        "result count differs from entrant count"
    );

    let mut counts: HashMap<&HorseId, i32> = HashMap::new();
    for h in entrants {
        *counts.entry(&h.id).or_default() += 1;
    }
    for h in results {
        *counts.entry(&h.id).or_default() -= 1;
    }
    assert!(
        counts.values().all(|&c| c == 0),
        "results are not a permutation of entrants: {counts:?}"
    );

    let times: Vec<f64> = results
        .iter()
        .map(|h| {
            h.finish_time
                .unwrap_or_else(|| panic!("horse {} has no finish time", h.id))
        })
        .collect();
    for pair in times.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "finish times out of order: {} then {}",
            pair[0],
            pair[1]
        );
    }
}
