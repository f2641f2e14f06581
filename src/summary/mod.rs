// Summary composition module - pure text assembly for the history forms.
// All widget reading/writing stays in the host; these functions take plain
// values and return the report fragments verbatim.

mod family_history;
mod past_history;

pub use family_history::{compose_family_entry, ConditionSelection, FamilyEntryError};
pub use past_history::{compose_past_history, ConditionEntry, SummaryMode, DENY_ALL_ALLERGIES};
