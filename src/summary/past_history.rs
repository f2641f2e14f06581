// Past-history summary composition - turns the PMH form's checkbox/note
// rows into the bulleted report block

use chrono::NaiveDate;

/// Label of the deny-all-allergies entry. When it is checked, the save
/// pass replaces it with a dated denial sentence and the individual
/// allergy lines are suppressed.
pub const DENY_ALL_ALLERGIES: &str = "All denied allergies...Food, Medication, Injection";

const HEADER: &str = "Past Medical History-----------\n";
const EMPTY_PLACEHOLDER: &str = "PMH>\n(No items selected)";

/// One condition row from the past-history form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionEntry {
    pub name: String,
    pub checked: bool,
    pub note: String,
}

impl ConditionEntry {
    pub fn new(name: impl Into<String>, checked: bool, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked,
            note: note.into(),
        }
    }
}

/// Which rendering of the summary is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Live preview while the form is being edited
    Preview,
    /// Final text on save; applies the allergy-denial rewrite
    Save,
}

/// Compose the past-history report from the form rows, in row order.
///
/// Rows with neither a check nor a note are skipped. Notes have line breaks
/// flattened to " | ". When the deny-all entry is checked, the other
/// allergy rows are suppressed in both modes; in `Save` mode the deny-all
/// row itself becomes the dated denial sentence. `today` is passed in so
/// the caller (and tests) control the date.
pub fn compose_past_history(
    entries: &[ConditionEntry],
    mode: SummaryMode,
    today: NaiveDate,
) -> String {
    let all_denied = entries
        .iter()
        .any(|e| e.name == DENY_ALL_ALLERGIES && e.checked);

    let mut out = String::from(HEADER);
    let mut has_content = false;

    for entry in entries {
        let note = entry.note.trim();
        if !entry.checked && note.is_empty() {
            continue;
        }
        has_content = true;

        if mode == SummaryMode::Save && entry.name == DENY_ALL_ALLERGIES && entry.checked {
            out.push_str(&format!(
                "• Allergy: As of {}, the patient denies any known allergies to food, injections, or medications.\n",
                today.format("%Y-%m-%d")
            ));
            continue;
        }

        // Individual allergy rows are redundant once everything is denied
        if all_denied && entry.name.contains("Allergy") && entry.name != DENY_ALL_ALLERGIES {
            continue;
        }

        out.push_str("• ");
        out.push_str(if entry.checked { "▣ " } else { "□ " });
        out.push_str(&entry.name);
        if !note.is_empty() {
            out.push_str(": ");
            out.push_str(&note.replace('\n', " | "));
        }
        out.push('\n');
    }

    if !has_content {
        return EMPTY_PLACEHOLDER.to_string();
    }
    out
}

#[cfg(test)]
#[path = "past_history_test.rs"]
mod tests;
