// Catalog data model - categories own groups, groups own items
// Item identity is a generated id; two items may carry identical text

use uuid::Uuid;

/// Identity handle for a single catalog item.
///
/// Removal targets an exact item instance, never "any item with this text",
/// so every item receives a generated id at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A leaf catalog entry, e.g. a single medication name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    /// Display text, editable in place. Hosts that edit it directly must
    /// follow up with `CatalogCache::mark_dirty`.
    pub text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// A named subdivision of a category holding ordered items.
///
/// The title is an immutable key once the catalog is loaded; only the item
/// set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    title: String,
    items: Vec<Item>,
}

impl Group {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
