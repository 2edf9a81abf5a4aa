//! Selection and rotation state observed by the renderer.

use std::fmt;
use std::rc::Rc;

use super::catalog::MenuCatalog;
use super::entry::{EntryId, MenuEntry};

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Handle returned by [`SelectionState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&MenuEntry)>;

/// Which entry is selected and how far the display model has turned.
pub struct SelectionState {
    catalog: Rc<MenuCatalog>,
    selected: Option<EntryId>,
    rotation_phase: f64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl SelectionState {
    pub fn new(catalog: Rc<MenuCatalog>) -> Self {
        Self {
            catalog,
            selected: None,
            rotation_phase: 0.0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Select `entry`, replacing any previous selection.
    ///
    /// Entries that are not part of the catalog are ignored. Returns whether
    /// the selection was applied.
    pub fn select(&mut self, entry: &MenuEntry) -> bool {
        let Some(entry) = self.catalog.get(entry.id) else {
            return false;
        };

        self.selected = Some(entry.id);
        for (_, listener) in &mut self.listeners {
            listener(entry);
        }
        true
    }

    /// The selected entry, if any.
    pub fn current_selection(&self) -> Option<&MenuEntry> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    /// Advance the rotation by `delta_degrees`, wrapping at a full turn.
    pub fn advance_rotation(&mut self, delta_degrees: f64) {
        if !delta_degrees.is_finite() {
            return;
        }
        let phase = (self.rotation_phase + delta_degrees).rem_euclid(FULL_TURN);
        // rem_euclid can round up to exactly 360 for tiny negative inputs.
        self.rotation_phase = if phase >= FULL_TURN { 0.0 } else { phase };
    }

    /// Current angle in degrees, always in `[0, 360)`.
    pub fn rotation_phase(&self) -> f64 {
        self.rotation_phase
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Register a callback invoked with the newly selected entry.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&MenuEntry) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected", &self.selected)
            .field("rotation_phase", &self.rotation_phase)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::menu::Price;

    fn state() -> SelectionState {
        SelectionState::new(Rc::new(MenuCatalog::seed()))
    }

    #[test]
    fn test_no_selection_initially() {
        let state = state();
        assert!(state.current_selection().is_none());
        assert!(state.selected_id().is_none());
        assert_eq!(state.rotation_phase(), 0.0);
    }

    #[test]
    fn test_select_sets_current_selection() {
        let mut state = state();
        let entry = state.catalog().entries()[2].clone();

        assert!(state.select(&entry));
        assert_eq!(state.current_selection().map(|e| e.id), Some(entry.id));
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut state = state();
        let first = state.catalog().entries()[0].clone();
        let second = state.catalog().entries()[1].clone();

        state.select(&first);
        state.select(&second);
        assert_eq!(state.current_selection().map(|e| e.id), Some(second.id));
    }

    #[test]
    fn test_select_foreign_entry_is_noop() {
        let mut state = state();
        let first = state.catalog().entries()[0].clone();
        state.select(&first);

        let stranger = MenuEntry::new("Ghost", Price::from_cents(100), "ghost", "Category A");
        assert!(!state.select(&stranger));
        assert_eq!(state.current_selection().map(|e| e.id), Some(first.id));
    }

    #[test]
    fn test_advance_rotation_wraps() {
        let mut state = state();
        state.advance_rotation(370.0);
        assert!((state.rotation_phase() - 10.0).abs() < 1e-9);

        state.advance_rotation(350.0);
        assert!(state.rotation_phase().abs() < 1e-9);
    }

    #[test]
    fn test_advance_rotation_accumulates() {
        let mut state = state();
        for _ in 0..7 {
            state.advance_rotation(100.0);
        }
        assert!((state.rotation_phase() - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_rotation_negative_and_non_finite() {
        let mut state = state();
        state.advance_rotation(-30.0);
        assert!((state.rotation_phase() - 330.0).abs() < 1e-9);

        state.advance_rotation(f64::NAN);
        state.advance_rotation(f64::INFINITY);
        assert!((state.rotation_phase() - 330.0).abs() < 1e-9);

        state.advance_rotation(-1e-20);
        assert!(state.rotation_phase() < FULL_TURN);
    }

    #[test]
    fn test_subscribers_notified_on_select() {
        let mut state = state();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&seen);
        state.subscribe(move |entry| sink.borrow_mut().push(entry.name.clone()));

        let burger = state.catalog().entries()[0].clone();
        let item4 = state.catalog().entries()[3].clone();
        state.select(&burger);
        state.select(&item4);
        state.advance_rotation(45.0);

        assert_eq!(*seen.borrow(), vec!["Burger", "Item 4"]);
    }

    #[test]
    fn test_foreign_select_does_not_notify() {
        let mut state = state();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        let stranger = MenuEntry::new("Ghost", Price::from_cents(100), "ghost", "Category A");
        state.select(&stranger);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = state();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        let burger = state.catalog().entries()[0].clone();
        state.select(&burger);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.select(&burger);

        assert_eq!(*count.borrow(), 1);
    }
}
