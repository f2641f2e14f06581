// Buffer adapter seam - per-widget glue between a live text buffer and the
// expansion engine. One implementation exists per widget technology; all
// obey the same two-capability contract.

use super::engine::{self, Replacement};
use super::table::AbbreviationTable;

/// Host-side glue for one text-widget technology.
///
/// `text_up_to_caret` snapshots the buffer from its start (or the current
/// line start) to the caret. `queue_replacement` must schedule the
/// delete-then-insert as ONE logical edit on the host's next event-loop
/// turn - never synchronously inside the key handler that asked for the
/// decision, which would mutate the very buffer whose event is being
/// processed. A widget-side application failure (e.g. the position went
/// stale) is swallowed inside the adapter: the user simply does not get
/// the expansion that cycle.
pub trait BufferAdapter {
    /// Buffer text up to the caret position.
    fn text_up_to_caret(&self) -> String;

    /// Schedule replacement of `len` bytes starting at `start` with `text`.
    fn queue_replacement(&mut self, start: usize, len: usize, text: String);
}

/// Run the engine against the adapter's caret snapshot.
///
/// Called by the adapter on receipt of the trigger key (space). On a hit
/// the replacement is queued and `true` is returned so the host suppresses
/// the trigger key's own insertion - the typed space is absorbed into the
/// replacement's single trailing space, not inserted twice.
pub fn expand_at_caret<A: BufferAdapter>(adapter: &mut A, table: &AbbreviationTable) -> bool {
    let snapshot = adapter.text_up_to_caret();
    match engine::decide(&snapshot, table) {
        Some(Replacement { start, text }) => {
            adapter.queue_replacement(start, snapshot.len() - start, text);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
