//! Schedule building.
//!
//! A schedule is one [`RaceRound`] per configured distance. Every round
//! samples its entrants independently from the full roster, so a horse
//! may run in several rounds but never twice in the same one.

use paddock_core::{ConfigError, Horse, RaceRound};
use rand::seq::SliceRandom;
use rand::Rng;

/// Round distances of the classic six-round card, in metres.
pub const DEFAULT_DISTANCES: [u32; 6] = [1200, 1400, 1600, 1800, 2000, 2200];

/// How entrants are sampled from the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Sort the roster with a coin-flip comparator, then take the first
    /// `horses_per_round`.
    ///
    /// The sort follows V8's TimSort on short arrays: find the leading
    /// run (reversing it when descending), then binary-insert the rest.
    /// Every comparison is a fair coin, so the selection odds match a
    /// browser's `sort(() => 0.5 - Math.random())`. Not a uniform shuffle.
    #[default]
    LegacyShuffle,
    /// Unbiased partial Fisher-Yates shuffle.
    Uniform,
}

/// Configuration for [`build_schedule`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// One round per entry, in order. Default: [`DEFAULT_DISTANCES`].
    pub distances: Vec<u32>,
    /// Entrants per round, capped by roster size. Default: 10.
    pub horses_per_round: usize,
    /// Sampling strategy. Default: [`SelectionStrategy::LegacyShuffle`].
    pub selection: SelectionStrategy,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            distances: DEFAULT_DISTANCES.to_vec(),
            horses_per_round: 10,
            selection: SelectionStrategy::default(),
        }
    }
}

impl ScheduleConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distances.is_empty() {
            return Err(ConfigError::NoRounds);
        }
        if let Some(i) = self.distances.iter().position(|&d| d == 0) {
            return Err(ConfigError::ZeroDistance {
                round_number: i as u32 + 1,
            });
        }
        if self.horses_per_round == 0 {
            return Err(ConfigError::ZeroHorsesPerRound);
        }
        Ok(())
    }

    /// Number of rounds a schedule built from this config contains.
    pub fn round_count(&self) -> usize {
        self.distances.len()
    }
}

/// Build a schedule over `roster`.
///
/// Returns an empty schedule for an empty roster. Entrants are fresh
/// copies: position 0, no finish time.
pub fn build_schedule<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &[Horse],
    config: &ScheduleConfig,
) -> Result<Vec<RaceRound>, ConfigError> {
    config.validate()?;
    if roster.is_empty() {
        return Ok(Vec::new());
    }

    Ok(config
        .distances
        .iter()
        .enumerate()
        .map(|(i, &distance)| RaceRound {
            round_number: i as u32 + 1,
            distance,
            horses: select_entrants(rng, roster, config.horses_per_round, config.selection),
        })
        .collect())
}

/// Pick `min(count, roster.len())` distinct horses from `roster` and
/// return fresh copies of them.
pub fn select_entrants<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &[Horse],
    count: usize,
    strategy: SelectionStrategy,
) -> Vec<Horse> {
    let take = count.min(roster.len());
    let mut order: Vec<usize> = (0..roster.len()).collect();

    let picked: &[usize] = match strategy {
        SelectionStrategy::LegacyShuffle => {
            coin_flip_sort(&mut order, || rng.gen::<f64>() > 0.5);
            &order[..take]
        }
        SelectionStrategy::Uniform => &*order.partial_shuffle(rng, take).0,
    };

    picked.iter().map(|&i| roster[i].fresh_entry()).collect()
}

/// Short-array TimSort driven by a comparator that ignores its inputs.
///
/// `before()` answers "does the element being placed go before the one it
/// is compared with?".
fn coin_flip_sort<T>(items: &mut [T], mut before: impl FnMut() -> bool) {
    let n = items.len();
    if n < 2 {
        return;
    }

    // Leading run: extends while comparisons keep the first direction.
    let descending = before();
    let mut run = 2;
    while run < n && before() == descending {
        run += 1;
    }
    if descending {
        items[..run].reverse();
    }

    for i in run..n {
        let (mut left, mut right) = (0, i);
        while left < right {
            let mid = left + (right - left) / 2;
            if before() {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        items[left..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_test_utils::numbered_roster;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn arb_strategy() -> impl Strategy<Value = SelectionStrategy> {
        prop_oneof![
            Just(SelectionStrategy::LegacyShuffle),
            Just(SelectionStrategy::Uniform),
        ]
    }

    // ── Config validation ───────────────────────────────────────

    #[test]
    fn default_config_is_six_rounds() {
        let cfg = ScheduleConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.round_count(), 6);
        assert_eq!(cfg.horses_per_round, 10);
    }

    #[test]
    fn rejects_degenerate_configs() {
        let no_rounds = ScheduleConfig {
            distances: vec![],
            ..Default::default()
        };
        assert_eq!(no_rounds.validate(), Err(ConfigError::NoRounds));

        let zero_distance = ScheduleConfig {
            distances: vec![1200, 0],
            ..Default::default()
        };
        assert_eq!(
            zero_distance.validate(),
            Err(ConfigError::ZeroDistance { round_number: 2 })
        );

        let zero_horses = ScheduleConfig {
            horses_per_round: 0,
            ..Default::default()
        };
        assert_eq!(zero_horses.validate(), Err(ConfigError::ZeroHorsesPerRound));
    }

    // ── Building ────────────────────────────────────────────────

    #[test]
    fn empty_roster_yields_empty_schedule() {
        let schedule = build_schedule(&mut rng(0), &[], &ScheduleConfig::default()).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn builds_numbered_rounds_with_fixed_distances() {
        let roster = numbered_roster(20);
        let schedule = build_schedule(&mut rng(1), &roster, &ScheduleConfig::default()).unwrap();
        assert_eq!(schedule.len(), 6);
        for (i, round) in schedule.iter().enumerate() {
            assert_eq!(round.round_number, i as u32 + 1);
            assert_eq!(round.distance, DEFAULT_DISTANCES[i]);
            assert_eq!(round.horses.len(), 10);
        }
    }

    #[test]
    fn entrants_are_reset_copies() {
        let mut roster = numbered_roster(20);
        for h in &mut roster {
            h.position = Some(9);
            h.finish_time = Some(1.0);
        }
        let schedule = build_schedule(&mut rng(2), &roster, &ScheduleConfig::default()).unwrap();
        for h in schedule.iter().flat_map(|r| &r.horses) {
            assert_eq!(h.position, Some(0));
            assert_eq!(h.finish_time, None);
        }
        // The roster itself is untouched.
        assert!(roster.iter().all(|h| h.position == Some(9)));
    }

    #[test]
    fn small_roster_caps_round_size() {
        let roster = numbered_roster(4);
        let schedule = build_schedule(&mut rng(3), &roster, &ScheduleConfig::default()).unwrap();
        assert!(schedule.iter().all(|r| r.horses.len() == 4));
    }

    #[test]
    fn invalid_config_is_reported_before_roster_check() {
        let cfg = ScheduleConfig {
            distances: vec![],
            ..Default::default()
        };
        assert_eq!(
            build_schedule(&mut rng(4), &[], &cfg),
            Err(ConfigError::NoRounds)
        );
    }

    #[test]
    fn full_round_takes_whole_roster() {
        let roster = numbered_roster(10);
        let picked = select_entrants(&mut rng(5), &roster, 10, SelectionStrategy::LegacyShuffle);
        let mut ids: Vec<_> = picked.iter().map(|h| h.id.clone()).collect();
        ids.sort();
        let mut expected: Vec<_> = roster.iter().map(|h| h.id.clone()).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn coin_flip_sort_is_a_permutation() {
        let mut g = rng(7);
        let mut items: Vec<usize> = (0..20).collect();
        coin_flip_sort(&mut items, || g.gen::<f64>() > 0.5);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    fn scripted_sort(n: usize, coins: &[bool]) -> (Vec<usize>, usize) {
        let mut items: Vec<usize> = (0..n).collect();
        let mut used = 0;
        coin_flip_sort(&mut items, || {
            let c = coins[used];
            used += 1;
            c
        });
        (items, used)
    }

    #[test]
    fn leading_run_is_detected_then_reversed() {
        // Descending pair, run breaks at index 2, then two insertions.
        let (items, used) = scripted_sort(4, &[true, false, false, true, true]);
        assert_eq!(items, [3, 1, 0, 2]);
        assert_eq!(used, 5);
    }

    #[test]
    fn monotone_coins_consume_one_run() {
        assert_eq!(scripted_sort(5, &[true; 4]), (vec![4, 3, 2, 1, 0], 4));
        assert_eq!(scripted_sort(5, &[false; 4]), (vec![0, 1, 2, 3, 4], 4));
    }

    #[test]
    fn short_inputs_flip_at_most_once() {
        assert_eq!(scripted_sort(0, &[]), (vec![], 0));
        assert_eq!(scripted_sort(1, &[]), (vec![0], 0));
        assert_eq!(scripted_sort(2, &[true]), (vec![1, 0], 1));
    }

    #[test]
    fn legacy_selection_odds_match_browser_sort() {
        // Reference frequencies from `sort(() => 0.5 - Math.random())` in
        // V8 over 200k trials, n = 20, first 10 kept.
        const TRIALS: usize = 20_000;
        let roster = numbered_roster(20);
        let mut g = rng(2024);
        let mut picked = [0usize; 20];
        let mut first = [0usize; 20];
        for _ in 0..TRIALS {
            let entrants = select_entrants(&mut g, &roster, 10, SelectionStrategy::LegacyShuffle);
            first[roster.iter().position(|h| h.id == entrants[0].id).unwrap()] += 1;
            for h in &entrants {
                picked[roster.iter().position(|r| r.id == h.id).unwrap()] += 1;
            }
        }
        let freq = |count: usize| count as f64 / TRIALS as f64;

        for (index, expected) in [(0, 0.585), (1, 0.613), (2, 0.525), (3, 0.570)] {
            let got = freq(picked[index]);
            assert!((got - expected).abs() < 0.02, "index {index} picked {got}, want {expected}");
        }
        let (first0, first1) = (freq(first[0]), freq(first[1]));
        assert!((first0 - 0.118).abs() < 0.015, "index 0 first {first0}");
        assert!((first1 - 0.043).abs() < 0.015, "index 1 first {first1}");
    }

    proptest! {
        #[test]
        fn entrants_are_distinct_roster_members(
            seed in any::<u64>(),
            roster_size in 1usize..30,
            count in 1usize..15,
            strategy in arb_strategy(),
        ) {
            let roster = numbered_roster(roster_size);
            let picked = select_entrants(&mut rng(seed), &roster, count, strategy);
            prop_assert_eq!(picked.len(), count.min(roster_size));
            let ids: HashSet<_> = picked.iter().map(|h| h.id.clone()).collect();
            prop_assert_eq!(ids.len(), picked.len());
            for h in &picked {
                prop_assert!(roster.iter().any(|r| r.id == h.id));
            }
        }

        #[test]
        fn same_seed_same_schedule(seed in any::<u64>(), strategy in arb_strategy()) {
            let roster = numbered_roster(20);
            let cfg = ScheduleConfig { selection: strategy, ..Default::default() };
            let a = build_schedule(&mut rng(seed), &roster, &cfg).unwrap();
            let b = build_schedule(&mut rng(seed), &roster, &cfg).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
