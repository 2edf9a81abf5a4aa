// The UI only drives part of the view-model API; the rest is exercised by tests.
#![allow(dead_code, unused_imports)]

mod catalog;
mod entry;
mod selection;

pub use catalog::{CatalogError, MenuCatalog};
pub use entry::{EntryId, MenuEntry, Price};
pub use selection::{FULL_TURN, SelectionState, SubscriptionId};
