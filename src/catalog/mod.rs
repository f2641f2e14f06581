// Reference catalog module - the hierarchical category/group/item cache
// shared by the structured-entry forms

mod cache;
mod model;
mod source;

pub use cache::{CatalogCache, MutationOutcome};
pub use model::{Group, Item, ItemId};
pub use source::{
    CatalogDoc, CatalogSource, CatalogSourceError, CategoryDoc, FileCatalogSource, GroupDoc,
    StaticCatalogSource,
};
