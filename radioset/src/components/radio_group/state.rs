//! Radio group component state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::components::traits::Selectable;

/// Unique identifier for a RadioGroup component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioGroupId(usize);

impl RadioGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for RadioGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__radio_group_{}", self.0)
    }
}

/// Internal state for a RadioGroup component
#[derive(Debug)]
struct RadioGroupInner<T: Selectable> {
    /// Member items, in insertion order (insertion order = index order)
    items: Vec<T>,
}

impl<T: Selectable> Default for RadioGroupInner<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// A radio group coordinating mutually exclusive selection.
///
/// `RadioGroup` holds an ordered collection of [`Selectable`] handles
/// and guarantees that at most one of them reports itself selected at a
/// time. Members are matched by identity (`id_string`), never by value.
/// Membership is append-only.
///
/// The group is a cheap handle: clones share the same underlying state.
///
/// # Example
///
/// ```
/// use radioset::{Radio, RadioGroup};
///
/// let group = RadioGroup::new();
/// let light = Radio::new("Light");
/// let dark = Radio::new("Dark");
/// group.add_item(light.clone());
/// group.add_item(dark.clone());
///
/// assert!(group.set_selected_by_index(1));
/// assert_eq!(group.selected_index(), Some(1));
/// assert!(dark.is_selected());
/// assert!(!light.is_selected());
/// ```
#[derive(Debug)]
pub struct RadioGroup<T: Selectable> {
    /// Unique identifier for this radio group instance
    id: RadioGroupId,
    /// Internal state
    inner: Arc<RwLock<RadioGroupInner<T>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl<T: Selectable> RadioGroup<T> {
    /// Create a new empty radio group
    pub fn new() -> Self {
        Self {
            id: RadioGroupId::new(),
            inner: Arc::new(RwLock::new(RadioGroupInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this radio group
    pub fn id(&self) -> RadioGroupId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the index of the first member that reports itself selected.
    ///
    /// Returns `None` if no member is selected. If more than one member
    /// claims selection (a caller mutated items behind the group's
    /// back), only the first is reported.
    pub fn selected_index(&self) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.items.iter().position(|item| item.is_selected()))
    }

    /// Get the member at `index`, or `None` if the index is out of range
    pub fn item(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.items.get(index).cloned())
    }

    /// Get the currently selected member.
    ///
    /// Returns `None` if the group is empty or nothing is selected.
    pub fn selected_item(&self) -> Option<T> {
        self.selected_index().and_then(|index| self.item(index))
    }

    /// Get the number of members
    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.items.len()).unwrap_or(0)
    }

    /// Check if the group has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if any member holds the active state
    pub fn is_active(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.items.iter().any(|item| item.is_active()))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Append an item to the group and install its group back-reference.
    ///
    /// No uniqueness check: adding the same handle twice yields two
    /// members sharing one state. There is no removal operation.
    pub fn add_item(&self, item: T) {
        item.set_group(self.id);
        if let Ok(mut guard) = self.inner.write() {
            log::trace!("{} added {}", self.id, item.id_string());
            guard.items.push(item);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Make `item` the single selected member.
    ///
    /// Scans every member: the one matching `item` by identity is
    /// selected, every other one is unconditionally deselected (not a
    /// toggle). Returns whether `item` was found as a member. The
    /// deselection pass over the members still happens when the lookup
    /// fails, so a miss clears the group's selection.
    pub fn select_item(&self, item: &T) -> bool {
        let mut found = false;
        if let Ok(guard) = self.inner.read() {
            for member in &guard.items {
                if member.id_string() == item.id_string() {
                    found = true;
                    member.set_selected(true);
                } else {
                    member.set_selected(false);
                }
            }
            if !guard.items.is_empty() {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if found {
            log::trace!("{} selected {}", self.id, item.id_string());
        } else {
            log::debug!("{} cleared: {} is not a member", self.id, item.id_string());
        }
        found
    }

    /// Select the member at `index`.
    ///
    /// Returns false and leaves selection untouched when `index` is out
    /// of range; otherwise delegates to [`select_item`].
    ///
    /// [`select_item`]: RadioGroup::select_item
    pub fn set_selected_by_index(&self, index: usize) -> bool {
        match self.item(index) {
            Some(item) => self.select_item(&item),
            None => false,
        }
    }

    /// Set the active state of the currently selected member.
    ///
    /// A no-op when nothing is selected.
    pub fn set_active(&self, active: bool) {
        if let Some(item) = self.selected_item() {
            item.set_active(active);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the group state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Selectable> Clone for RadioGroup<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Selectable> Default for RadioGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}
