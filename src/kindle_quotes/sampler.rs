//! Non-repeating random draws over the history ledger.
//!
//! Rejection sampling avoids an explicit shuffle structure: the retry bound
//! is small relative to the collection size in practice, and termination is
//! structurally bounded by the retry cap.

use std::collections::HashSet;

use rand::Rng;

use crate::error::Result;
use crate::store::DataStore;

/// Outcome of one draw attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Index into the quote collection, or `None` when nothing could be
    /// drawn (empty collection, or the defensive retry bound ran out).
    pub index: Option<usize>,
    /// True when this draw completed a cycle and reset the ledger first.
    pub cycle_reset: bool,
}

/// Pick an index in `[0, total)` that has not been drawn in the current
/// cycle, recording it in the ledger.
///
/// Cycle completion is checked against the *distinct* drawn-index set, not
/// the raw ledger length, so an externally edited ledger with duplicate
/// indices cannot under-trigger the reset. When the set covers every index,
/// the ledger is reset (with backup) before drawing.
pub fn draw<S: DataStore, R: Rng>(store: &mut S, total: usize, rng: &mut R) -> Result<Draw> {
    if total == 0 {
        return Ok(Draw {
            index: None,
            cycle_reset: false,
        });
    }

    let history = store.load_history()?;
    let mut drawn: HashSet<usize> = history.iter().map(|entry| entry.index).collect();
    let mut cycle_reset = false;
    if drawn.len() >= total {
        store.reset_history()?;
        drawn.clear();
        cycle_reset = true;
    }

    for _ in 0..total {
        let index = rng.random_range(0..total);
        if drawn.contains(&index) {
            continue;
        }
        store.append_history(index)?;
        return Ok(Draw {
            index: Some(index),
            cycle_reset,
        });
    }

    // Defensive bound; unreachable after the reset check above.
    Ok(Draw {
        index: None,
        cycle_reset,
    })
}
