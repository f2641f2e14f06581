// Abbreviation expansion module - marker-token recognition and replacement,
// shared by every text widget through the BufferAdapter seam

mod adapter;
mod engine;
mod table;

pub use adapter::{expand_at_caret, BufferAdapter};
pub use engine::{decide, expand_all, Replacement, MARKER};
pub use table::{AbbreviationEntry, AbbreviationStore, AbbreviationStoreError, AbbreviationTable};
