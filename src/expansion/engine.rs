// Expansion engine - pure decision logic over a caret snapshot
// The engine never touches a widget and keeps no state between calls;
// adapters extract the snapshot and apply what the engine reports.

use std::sync::OnceLock;

use chrono::Local;
use regex::Regex;

use super::table::AbbreviationTable;

/// Marker character identifying an abbreviation token.
pub const MARKER: char = ':';

/// Built-in key the whole-text pass expands to the current date.
const CURRENT_DATE_KEY: &str = "cd";

/// Replacement reported for a recognized abbreviation.
///
/// `start` is a byte offset into the caret snapshot; the span to replace is
/// `[start, snapshot.len())` - everything from the token start to the
/// caret. `text` already carries the single trailing space that absorbs the
/// trigger key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub text: String,
}

/// Decide whether the token immediately before the caret is a known
/// abbreviation.
///
/// `up_to_caret` is the buffer text from its start (or at minimum from the
/// start of the current line) up to the caret. The current token runs from
/// one past the nearest preceding space or line break to the caret; it must
/// start with the marker and its key must resolve in the table, otherwise
/// there is nothing to do. Re-running over already-expanded text reports no
/// match, since the expansion no longer starts with the marker.
pub fn decide(up_to_caret: &str, table: &AbbreviationTable) -> Option<Replacement> {
    let start = up_to_caret
        .rfind([' ', '\n'])
        .map(|pos| pos + 1)
        .unwrap_or(0);

    let token = up_to_caret[start..].trim();
    let key = token.strip_prefix(MARKER)?;
    let expansion = table.get(key)?;

    Some(Replacement {
        start,
        text: format!("{} ", expansion),
    })
}

/// Expand every marker token in `text` in one pass.
///
/// Used for preview panes that render a whole buffer expanded. Unknown keys
/// are left untouched; the `:cd` built-in resolves to the current local
/// date before the table is consulted.
pub fn expand_all(text: &str, table: &AbbreviationTable) -> String {
    let Some(re) = token_regex() else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex::Captures| {
        let key = &caps[1];
        if key == CURRENT_DATE_KEY {
            return Local::now().date_naive().format("%Y-%m-%d").to_string();
        }
        match table.get(key) {
            Some(expansion) => expansion.to_string(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// One marker followed by a run of non-space, non-marker characters
fn token_regex() -> Option<&'static Regex> {
    static TOKEN_RE: OnceLock<Option<Regex>> = OnceLock::new();
    TOKEN_RE
        .get_or_init(|| match Regex::new(r":([^\s:]+)") {
            Ok(re) => Some(re),
            Err(e) => {
                crate::warn!("Failed to compile token pattern: {}", e);
                None
            }
        })
        .as_ref()
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
