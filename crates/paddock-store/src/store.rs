//! The race store: state, RNG and race timers behind one lock.
//!
//! # Ownership model
//!
//! [`RaceStore`] is a cheap, cloneable handle. All clones share one
//! `Arc<Mutex<_>>` holding the [`RaceState`] and the session RNG. Every
//! mutation, action and getter takes the lock for a single synchronous
//! step, so callers always observe whole mutations.
//!
//! The one asynchronous edge is a running round: a named timer thread
//! sleeps for the race duration, then takes the lock, simulates the
//! round, commits `AddRaceResult`, and only then reports to the
//! [`PendingRound`]. Mutations never leave state half-written, so a
//! poisoned lock is recovered rather than propagated.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread;

use paddock_core::{ConfigError, RaceResult, RaceRound, StoreError};
use paddock_sim::{build_schedule, generate_roster, run_round};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, trace, warn};

use crate::action::{Action, Dispatched};
use crate::config::StoreConfig;
use crate::mutation::Mutation;
use crate::pending::PendingRound;
use crate::state::RaceState;

struct Shared {
    state: RaceState,
    rng: ChaCha8Rng,
}

/// Shared handle to a race session.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use paddock_store::{RaceStore, StoreConfig};
///
/// let store = RaceStore::new(StoreConfig {
///     seed: Some(7),
///     race_duration: Duration::ZERO,
///     ..Default::default()
/// })
/// .unwrap();
///
/// store.generate_horses().unwrap();
/// store.generate_race_schedule().unwrap();
/// let outcome = store.start_next_round().unwrap().wait().unwrap();
///
/// assert_eq!(outcome.results().map(|r| r.len()), Some(10));
/// assert_eq!(store.with_state(|s| s.race_results().len()), 1);
/// ```
#[derive(Clone)]
pub struct RaceStore {
    shared: Arc<Mutex<Shared>>,
    config: Arc<StoreConfig>,
    seed: u64,
}

impl RaceStore {
    /// Create a store with an empty state.
    ///
    /// Validates `config` and seeds the session RNG from `config.seed`,
    /// or from a fresh random seed when none is given.
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: StoreConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, "race store created");
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: RaceState::new(config.palette.clone()),
                rng: ChaCha8Rng::seed_from_u64(seed),
            })),
            config: Arc::new(config),
            seed,
        }
    }

    /// The seed the session RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Reads ───────────────────────────────────────────────────

    /// Cloned snapshot of the current state.
    pub fn state(&self) -> RaceState {
        self.lock().state.clone()
    }

    /// Run `f` against the current state under the lock.
    ///
    /// Keep `f` short: a round finishing in the background waits for it.
    pub fn with_state<T>(&self, f: impl FnOnce(&RaceState) -> T) -> T {
        f(&self.lock().state)
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Apply one named mutation.
    pub fn commit(&self, mutation: Mutation) {
        self.lock().state.apply(mutation);
    }

    // ── Actions ─────────────────────────────────────────────────

    /// Run a named action.
    pub fn dispatch(&self, action: Action) -> Result<Dispatched, StoreError> {
        debug!(action = action.name(), "dispatch");
        match action {
            Action::GenerateHorses => self.generate_horses().map(|()| Dispatched::Done),
            Action::GenerateRaceSchedule => {
                self.generate_race_schedule().map(|()| Dispatched::Done)
            }
            Action::StartNextRound => self.start_next_round().map(Dispatched::Round),
        }
    }

    /// Replace the roster with a freshly generated one and reset positions.
    pub fn generate_horses(&self) -> Result<(), StoreError> {
        let mut guard = self.lock();
        let Shared { state, rng } = &mut *guard;
        let horses = generate_roster(rng, &self.config.roster, &state.available_colors)?;
        info!(count = horses.len(), "roster generated");
        state.apply(Mutation::SetHorses(horses));
        state.apply(Mutation::ResetHorsePositions);
        Ok(())
    }

    /// Build a schedule from the current roster, rewind to round 0 and
    /// reset positions.
    ///
    /// Without a roster this logs a warning, clears the schedule and
    /// rewinds to round 0.
    pub fn generate_race_schedule(&self) -> Result<(), StoreError> {
        let mut guard = self.lock();
        let Shared { state, rng } = &mut *guard;
        if state.horses.is_empty() {
            warn!("no roster to schedule; generate horses first");
            state.apply(Mutation::SetRaceSchedule(Vec::new()));
            state.apply(Mutation::SetCurrentRoundNumber(0));
            return Ok(());
        }
        let schedule = build_schedule(rng, &state.horses, &self.config.schedule)?;
        info!(rounds = schedule.len(), "race schedule generated");
        state.apply(Mutation::SetRaceSchedule(schedule));
        state.apply(Mutation::SetCurrentRoundNumber(0));
        state.apply(Mutation::ResetHorsePositions);
        Ok(())
    }

    /// Start the next round.
    ///
    /// Marks the race in progress, advances the round number, and spawns
    /// the round's timer. Once every scheduled round has been started,
    /// clears the in-progress flag and returns an already-settled
    /// [`RoundOutcome::SessionComplete`](crate::RoundOutcome::SessionComplete).
    ///
    /// # Errors
    ///
    /// [`StoreError::RoundNotFound`] if the schedule has no round with the
    /// advanced number, and [`StoreError::TimerSpawnFailed`] if the timer
    /// thread cannot start. Both clear the in-progress flag.
    pub fn start_next_round(&self) -> Result<PendingRound, StoreError> {
        let round = {
            let mut guard = self.lock();
            let state = &mut guard.state;
            let total = state.race_schedule.len();

            if state.current_round_number as usize >= total {
                state.apply(Mutation::SetRaceInProgress(false));
                info!(rounds = total, "all rounds completed");
                return Ok(PendingRound::session_complete());
            }

            state.apply(Mutation::SetRaceInProgress(true));
            let next = state.current_round_number + 1;
            state.apply(Mutation::SetCurrentRoundNumber(next));
            info!(round = next, rounds = total, "starting round");

            match state.race_schedule.iter().find(|r| r.round_number == next) {
                Some(round) => round.clone(),
                None => {
                    error!(round = next, "current round not found");
                    state.apply(Mutation::SetRaceInProgress(false));
                    return Err(StoreError::RoundNotFound { round_number: next });
                }
            }
        };

        self.spawn_race_timer(round).inspect_err(|e| {
            error!(error = %e, "race timer failed to start");
            self.commit(Mutation::SetRaceInProgress(false));
        })
    }

    fn spawn_race_timer(&self, round: RaceRound) -> Result<PendingRound, StoreError> {
        let round_number = round.round_number;
        let (tx, rx) = crossbeam_channel::bounded(1);
        let shared = Arc::clone(&self.shared);
        let config = Arc::clone(&self.config);

        thread::Builder::new()
            .name(format!("paddock-round-{round_number}"))
            .spawn(move || {
                if !config.race_duration.is_zero() {
                    thread::sleep(config.race_duration);
                }

                let (results, last) = {
                    let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    let Shared { state, rng } = &mut *guard;
                    let results = run_round(rng, &round, &config.sim);
                    state.apply(Mutation::AddRaceResult(RaceResult {
                        round,
                        results: results.clone(),
                    }));
                    (results, round_number as usize >= state.race_schedule.len())
                };

                info!(
                    round = round_number,
                    winner = results.first().map(|h| h.name.as_str()).unwrap_or("-"),
                    "round finished"
                );
                if last {
                    info!("all races have been completed");
                }

                if tx.send(results).is_err() {
                    trace!(round = round_number, "round handle dropped before finish");
                }
            })
            .map_err(|e| StoreError::TimerSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(PendingRound::running(round_number, rx))
    }
}

impl Default for RaceStore {
    /// A store with [`StoreConfig::default`], which always validates.
    fn default() -> Self {
        Self::from_validated(StoreConfig::default())
    }
}

impl std::fmt::Debug for RaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("RaceStore");
        d.field("seed", &self.seed);
        let guard = match self.shared.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(p)) => p.into_inner(),
            Err(TryLockError::WouldBlock) => {
                return d.field("state", &format_args!("<locked>")).finish();
            }
        };
        d.field("horses", &guard.state.horses.len())
            .field("rounds", &guard.state.race_schedule.len())
            .field("current_round", &guard.state.current_round_number)
            .field("in_progress", &guard.state.is_race_in_progress)
            .finish()
    }
}
