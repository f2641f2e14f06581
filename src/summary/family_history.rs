// Family-history entry composition - one relative's entry for the FMH
// report, assembled from the form's relationship, notes, and per-category
// condition selections

use thiserror::Error;

/// Conditions selected under one catalog category column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSelection {
    /// Category title, e.g. "Endocrine"
    pub category: String,
    /// Selected condition names in display order
    pub conditions: Vec<String>,
}

impl ConditionSelection {
    pub fn new(category: impl Into<String>, conditions: Vec<String>) -> Self {
        Self {
            category: category.into(),
            conditions,
        }
    }
}

/// Validation errors the host surfaces in its own dialog. The only
/// host-visible validation in the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FamilyEntryError {
    #[error("A relationship must be selected")]
    MissingRelationship,
    #[error("Select at least one condition or add notes")]
    Empty,
}

/// Compose one relative's entry for the family-history report.
///
/// Shape:
/// ```text
/// Mother:
///   Notes: early onset, treated
///   Endocrine: Type 2 Diabetes; Hypothyroidism
///   Cardiovascular: Stroke
/// ```
/// Categories with no selected conditions are omitted. Requires a non-blank
/// relationship and at least one condition or a note.
pub fn compose_family_entry(
    relationship: &str,
    notes: &str,
    selections: &[ConditionSelection],
) -> Result<String, FamilyEntryError> {
    let relationship = relationship.trim();
    if relationship.is_empty() {
        return Err(FamilyEntryError::MissingRelationship);
    }

    let notes = notes.trim();
    let has_condition = selections.iter().any(|s| !s.conditions.is_empty());
    if !has_condition && notes.is_empty() {
        return Err(FamilyEntryError::Empty);
    }

    let mut entry = format!("{}:\n", relationship);
    if !notes.is_empty() {
        entry.push_str(&format!("  Notes: {}\n", notes));
    }
    for selection in selections {
        if selection.conditions.is_empty() {
            continue;
        }
        entry.push_str(&format!(
            "  {}: {}\n",
            selection.category,
            selection.conditions.join("; ")
        ));
    }

    Ok(entry.trim_end().to_string())
}

#[cfg(test)]
#[path = "family_history_test.rs"]
mod tests;
