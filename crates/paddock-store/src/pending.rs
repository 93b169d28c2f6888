//! Handle for a round that is still running.
//!
//! [`RaceStore::start_next_round`](crate::RaceStore::start_next_round)
//! returns a [`PendingRound`] straight away. The round's timer thread
//! commits the result to the store and then reports it here, so by the
//! time a [`RoundOutcome::Finished`] is observed the store already holds
//! the matching [`RaceResult`](paddock_core::RaceResult).
//!
//! Dropping a `PendingRound` does not cancel the round.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use paddock_core::{Horse, StoreError};

/// How a started round resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundOutcome {
    /// The round ran.
    Finished {
        /// The round that finished.
        round_number: u32,
        /// Entrants ordered by ascending finish time.
        results: Vec<Horse>,
    },
    /// Every scheduled round had already run; nothing was started.
    SessionComplete,
}

impl RoundOutcome {
    /// Ranked results, or `None` when the session was already complete.
    pub fn results(&self) -> Option<&[Horse]> {
        match self {
            Self::Finished { results, .. } => Some(results),
            Self::SessionComplete => None,
        }
    }

    /// Owned ranked results, or `None` when the session was already complete.
    pub fn into_results(self) -> Option<Vec<Horse>> {
        match self {
            Self::Finished { results, .. } => Some(results),
            Self::SessionComplete => None,
        }
    }
}

enum Pending {
    Settled(RoundOutcome),
    Running {
        round_number: u32,
        rx: Receiver<Vec<Horse>>,
    },
}

/// A started round whose outcome may not be known yet.
pub struct PendingRound {
    inner: Pending,
}

impl PendingRound {
    pub(crate) fn running(round_number: u32, rx: Receiver<Vec<Horse>>) -> Self {
        Self {
            inner: Pending::Running { round_number, rx },
        }
    }

    pub(crate) fn session_complete() -> Self {
        Self {
            inner: Pending::Settled(RoundOutcome::SessionComplete),
        }
    }

    /// The round this handle tracks. `None` if the session was complete.
    pub fn round_number(&self) -> Option<u32> {
        match &self.inner {
            Pending::Running { round_number, .. } => Some(*round_number),
            Pending::Settled(RoundOutcome::Finished { round_number, .. }) => Some(*round_number),
            Pending::Settled(RoundOutcome::SessionComplete) => None,
        }
    }

    /// Whether the outcome is already known without blocking.
    pub fn is_settled(&self) -> bool {
        matches!(self.inner, Pending::Settled(_))
    }

    /// Block until the round resolves.
    pub fn wait(self) -> Result<RoundOutcome, StoreError> {
        match self.inner {
            Pending::Settled(outcome) => Ok(outcome),
            Pending::Running { round_number, rx } => rx
                .recv()
                .map(|results| RoundOutcome::Finished {
                    round_number,
                    results,
                })
                .map_err(|_| StoreError::RaceAbandoned { round_number }),
        }
    }

    /// Block for at most `timeout`. `Ok(None)` means still running.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Result<Option<RoundOutcome>, StoreError> {
        let (round_number, polled) = match &self.inner {
            Pending::Settled(outcome) => return Ok(Some(outcome.clone())),
            Pending::Running { round_number, rx } => (*round_number, rx.recv_timeout(timeout)),
        };
        match polled {
            Ok(results) => Ok(Some(self.settle(round_number, results))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(StoreError::RaceAbandoned { round_number }),
        }
    }

    /// Poll without blocking. `Ok(None)` means still running.
    pub fn try_result(&mut self) -> Result<Option<RoundOutcome>, StoreError> {
        let (round_number, polled) = match &self.inner {
            Pending::Settled(outcome) => return Ok(Some(outcome.clone())),
            Pending::Running { round_number, rx } => (*round_number, rx.try_recv()),
        };
        match polled {
            Ok(results) => Ok(Some(self.settle(round_number, results))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(StoreError::RaceAbandoned { round_number }),
        }
    }

    fn settle(&mut self, round_number: u32, results: Vec<Horse>) -> RoundOutcome {
        let outcome = RoundOutcome::Finished {
            round_number,
            results,
        };
        self.inner = Pending::Settled(outcome.clone());
        outcome
    }
}

impl std::fmt::Debug for PendingRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRound")
            .field("round_number", &self.round_number())
            .field("settled", &self.is_settled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_test_utils::horse;

    #[test]
    fn session_complete_resolves_immediately() {
        let mut p = PendingRound::session_complete();
        assert!(p.is_settled());
        assert_eq!(p.round_number(), None);
        assert_eq!(p.try_result(), Ok(Some(RoundOutcome::SessionComplete)));
        let outcome = p.wait().unwrap();
        assert!(outcome.results().is_none());
        assert!(outcome.into_results().is_none());
    }

    #[test]
    fn running_round_settles_once_and_caches() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let mut p = PendingRound::running(3, rx);
        assert_eq!(p.try_result(), Ok(None));
        assert_eq!(p.wait_timeout(Duration::from_millis(1)), Ok(None));

        tx.send(vec![horse("a", 70)]).unwrap();
        drop(tx);

        let first = p.try_result().unwrap().unwrap();
        assert_eq!(first.results().map(|r| r.len()), Some(1));
        // The channel is now closed; the cached outcome is still served.
        assert_eq!(p.try_result().unwrap(), Some(first.clone()));
        assert_eq!(p.round_number(), Some(3));
        assert_eq!(p.wait().unwrap(), first);
    }

    #[test]
    fn dropped_sender_is_abandoned() {
        let (tx, rx) = crossbeam_channel::bounded::<Vec<Horse>>(1);
        drop(tx);
        let mut p = PendingRound::running(2, rx);
        assert_eq!(
            p.try_result(),
            Err(StoreError::RaceAbandoned { round_number: 2 })
        );
        assert_eq!(
            p.wait(),
            Err(StoreError::RaceAbandoned { round_number: 2 })
        );
    }
}
