// Tests for the buffer adapter orchestration
// Test cases:
// - Hit: replacement queued, trigger key consumed, buffer correct once the
//   queued edit is flushed on the "next event-loop turn"
// - Re-triggering over the expanded text is a no-op (idempotence end-to-end)
// - Miss: nothing queued, trigger key not consumed
// - An adapter that drops the edit (stale position) still consumes the key
//   and never surfaces a failure

use super::*;

/// Scripted in-memory buffer standing in for a live widget. Edits are
/// queued and only applied by an explicit flush, mirroring the deferral to
/// the host's next event-loop iteration.
struct ScriptedBuffer {
    text: String,
    queued: Vec<(usize, usize, String)>,
    /// Simulates a widget whose positions went stale between decision and
    /// application: queued edits are silently discarded on flush.
    drop_edits: bool,
}

impl ScriptedBuffer {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            queued: Vec::new(),
            drop_edits: false,
        }
    }

    fn flush(&mut self) {
        for (start, len, replacement) in self.queued.drain(..) {
            if self.drop_edits {
                continue;
            }
            self.text.replace_range(start..start + len, &replacement);
        }
    }
}

impl BufferAdapter for ScriptedBuffer {
    fn text_up_to_caret(&self) -> String {
        // Caret sits at the end of the scripted buffer
        self.text.clone()
    }

    fn queue_replacement(&mut self, start: usize, len: usize, text: String) {
        self.queued.push((start, len, text));
    }
}

fn table() -> AbbreviationTable {
    AbbreviationTable::from_iter([("cd", "2024-01-01")])
}

#[test]
fn test_hit_queues_edit_and_consumes_trigger() {
    let mut buffer = ScriptedBuffer::new("Onset :cd");

    let consumed = expand_at_caret(&mut buffer, &table());
    assert!(consumed);

    // Nothing applied yet inside the "key handler"
    assert_eq!(buffer.text, "Onset :cd");

    buffer.flush();
    assert_eq!(buffer.text, "Onset 2024-01-01 ");
}

#[test]
fn test_retrigger_after_expansion_is_noop() {
    let mut buffer = ScriptedBuffer::new("Onset :cd");
    expand_at_caret(&mut buffer, &table());
    buffer.flush();

    let consumed = expand_at_caret(&mut buffer, &table());
    assert!(!consumed);
    assert!(buffer.queued.is_empty());
    assert_eq!(buffer.text, "Onset 2024-01-01 ");
}

#[test]
fn test_miss_queues_nothing() {
    let mut buffer = ScriptedBuffer::new("plain text");

    assert!(!expand_at_caret(&mut buffer, &table()));
    assert!(buffer.queued.is_empty());

    let mut marked = ScriptedBuffer::new("note :zz");
    assert!(!expand_at_caret(&mut marked, &table()));
    assert!(marked.queued.is_empty());
}

#[test]
fn test_dropped_edit_is_swallowed() {
    let mut buffer = ScriptedBuffer::new("Onset :cd");
    buffer.drop_edits = true;

    // The decision was a hit, so the key is consumed either way
    assert!(expand_at_caret(&mut buffer, &table()));
    buffer.flush();

    // The user just doesn't get the expansion this cycle
    assert_eq!(buffer.text, "Onset :cd");
}
