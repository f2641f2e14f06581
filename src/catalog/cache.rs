// Catalog cache - memoized in-memory view of the reference catalog with a
// dirty/clean lifecycle. Load failures are absorbed into an empty but
// usable state; mutations with unmet preconditions degrade to tagged
// no-ops so form-filling flows are never interrupted.

use std::collections::HashMap;

use super::model::{Group, Item, ItemId};
use super::source::CatalogSource;

/// Outcome of a targeted catalog mutation.
///
/// The cache never fails visibly; hosts that only want the legacy silent
/// behavior can drop the value, tests and careful callers can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The mutation was applied and the cache marked dirty
    Applied,
    /// The named category, group, or item is not present; nothing changed
    NotFound,
    /// The cache has never been read; nothing changed
    NotLoaded,
}

/// Parsed catalog contents, built exactly once per cache lifetime.
#[derive(Debug, Default)]
struct LoadedCatalog {
    /// Category names in document order
    categories: Vec<String>,
    /// Ordered groups per category name
    groups: HashMap<String, Vec<Group>>,
}

impl LoadedCatalog {
    fn from_source<S: CatalogSource>(source: &S) -> Self {
        let doc = match source.read() {
            Ok(doc) => doc,
            Err(err) => {
                crate::warn!("Catalog source unavailable, starting empty: {}", err);
                return Self::default();
            }
        };

        let mut categories = Vec::with_capacity(doc.categories.len());
        let mut groups = HashMap::with_capacity(doc.categories.len());

        for category in doc.categories {
            let category_groups: Vec<Group> = category
                .groups
                .into_iter()
                .map(|group| {
                    let items = group
                        .items
                        .into_iter()
                        // Trim only; empty-after-trim items are preserved
                        .map(|text| Item::new(text.trim()))
                        .collect();
                    Group::new(group.title, items)
                })
                .collect();

            categories.push(category.name.clone());
            groups.insert(category.name, category_groups);
        }

        crate::info!("Loaded catalog: {} categories", categories.len());
        Self { categories, groups }
    }
}

/// Lazily loaded, memoized reference catalog.
///
/// Created once per host session. Reads trigger the single load pass;
/// every later read returns the same in-memory data without touching the
/// source again. Hosts with multiple UI surfaces sharing one cache wrap it
/// in `Arc<Mutex<_>>`; the API itself assumes the event-dispatch thread.
#[derive(Debug)]
pub struct CatalogCache<S> {
    source: S,
    loaded: Option<LoadedCatalog>,
    pending_changes: bool,
}

impl<S: CatalogSource> CatalogCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: None,
            pending_changes: false,
        }
    }

    fn ensure_loaded(&mut self) -> &mut LoadedCatalog {
        if self.loaded.is_none() {
            self.loaded = Some(LoadedCatalog::from_source(&self.source));
        }
        // Populated just above; the closure never runs
        self.loaded.get_or_insert_with(LoadedCatalog::default)
    }

    /// Category names in document order. Triggers the load on first call;
    /// empty if the source was unavailable or malformed.
    pub fn ordered_categories(&mut self) -> &[String] {
        &self.ensure_loaded().categories
    }

    /// Full catalog keyed by category name, groups in document order.
    /// Empty together with `ordered_categories` on load failure, never
    /// partially populated.
    pub fn catalog(&mut self) -> &HashMap<String, Vec<Group>> {
        &self.ensure_loaded().groups
    }

    /// Append `item` to the first group of `category` titled `group_title`.
    ///
    /// No-op (with the reason tagged) when the cache was never read or the
    /// category/group is absent.
    pub fn add_item(&mut self, category: &str, group_title: &str, item: Item) -> MutationOutcome {
        let Some(loaded) = self.loaded.as_mut() else {
            return MutationOutcome::NotLoaded;
        };
        let Some(groups) = loaded.groups.get_mut(category) else {
            return MutationOutcome::NotFound;
        };

        for group in groups.iter_mut() {
            if group.title() == group_title {
                group.items_mut().push(item);
                self.pending_changes = true;
                return MutationOutcome::Applied;
            }
        }
        MutationOutcome::NotFound
    }

    /// Remove the first item with this id found anywhere in the catalog.
    ///
    /// The scan follows stored category order, then group order within each
    /// category, and stops at the first match: at most one removal per
    /// call, even when equal-text items exist elsewhere. Remaining siblings
    /// keep their order.
    pub fn remove_item(&mut self, id: ItemId) -> MutationOutcome {
        let Some(loaded) = self.loaded.as_mut() else {
            return MutationOutcome::NotLoaded;
        };

        let LoadedCatalog { categories, groups } = loaded;
        for name in categories.iter() {
            let Some(category_groups) = groups.get_mut(name) else {
                continue;
            };
            for group in category_groups.iter_mut() {
                if let Some(pos) = group.items().iter().position(|item| item.id() == id) {
                    group.items_mut().remove(pos);
                    self.pending_changes = true;
                    return MutationOutcome::Applied;
                }
            }
        }
        MutationOutcome::NotFound
    }

    /// Current dirty flag; no side effects.
    pub fn has_pending_changes(&self) -> bool {
        self.pending_changes
    }

    /// Unconditionally mark the cache dirty. For collaborators that mutate
    /// catalog contents through channels other than `add_item`/`remove_item`
    /// (e.g. in-place edits to an item's text).
    pub fn mark_dirty(&mut self) {
        self.pending_changes = true;
    }

    /// Clear the dirty flag: the host has persisted or otherwise accepted
    /// the current state.
    pub fn commit_pending(&mut self) {
        self.pending_changes = false;
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
