use rand::Rng;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sampler;
use crate::store::DataStore;

/// Draw one quote at random, never repeating within a cycle.
pub fn run<S: DataStore, R: Rng>(store: &mut S, rng: &mut R) -> Result<CmdResult> {
    let quotes = store.load_quotes()?;

    let mut result = CmdResult::default();
    if quotes.is_empty() {
        // Quiet success: an empty store is reported, not an error.
        result.add_message(CmdMessage::warning("No quotes found."));
        return Ok(result);
    }

    let draw = sampler::draw(store, quotes.len(), rng)?;
    if draw.cycle_reset {
        result.add_message(CmdMessage::info(
            "All quotes have been shown. History reset.",
        ));
    }
    match draw.index {
        Some(index) => Ok(result.with_quotes(vec![quotes[index].clone()])),
        None => {
            result.add_message(CmdMessage::warning("No quote could be drawn."));
            Ok(result)
        }
    }
}
