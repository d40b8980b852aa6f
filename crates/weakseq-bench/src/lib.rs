//! Benchmark profiles for weakseq.
//!
//! - [`observer_profile`]: a sequence of `n` listeners where a
//!   deterministic share of the referents have already been dropped.
//! - [`survivors`]: the deterministic keep/drop pattern behind it.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use weakseq::RcWeakSequence;
use weakseq_test_utils::{listeners, DropCounter, Listener};

/// A populated sequence together with the owners keeping its live slots
/// alive. Dropping `owners` turns every slot absent.
pub struct ObserverProfile {
    pub sequence: RcWeakSequence<Listener>,
    pub owners: Vec<Rc<Listener>>,
    pub counter: DropCounter,
}

/// Build a sequence of `n` listeners with roughly `live_percent`% still
/// owned.
pub fn observer_profile(n: usize, live_percent: u8, seed: u64) -> ObserverProfile {
    let counter = DropCounter::new();
    let all = listeners(n, &counter);
    let sequence: RcWeakSequence<Listener> = all.iter().map(Some).collect();
    let keep = survivors(n, live_percent, seed);
    let owners = all
        .into_iter()
        .zip(keep)
        .filter_map(|(owner, k)| k.then_some(owner))
        .collect();
    ObserverProfile {
        sequence,
        owners,
        counter,
    }
}

/// Deterministic keep/drop pattern: `true` keeps slot `i` live.
///
/// Uses a simple multiplicative hash of the seed so profiles are
/// reproducible across runs.
pub fn survivors(n: usize, live_percent: u8, seed: u64) -> Vec<bool> {
    let live_percent = u64::from(live_percent.min(100));
    (0..n as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            (h >> 33) % 100 < live_percent
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survivors_deterministic() {
        assert_eq!(survivors(500, 40, 7), survivors(500, 40, 7));
    }

    #[test]
    fn survivors_respect_extremes() {
        assert!(survivors(100, 100, 1).iter().all(|&k| k));
        assert!(survivors(100, 0, 1).iter().all(|&k| !k));
    }

    #[test]
    fn profile_live_count_matches_owners() {
        let profile = observer_profile(200, 50, 42);
        assert_eq!(profile.sequence.len(), 200);
        assert_eq!(profile.sequence.live_count(), profile.owners.len());
        assert_eq!(profile.counter.count(), 200 - profile.owners.len());
    }
}
