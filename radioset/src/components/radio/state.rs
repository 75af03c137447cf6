//! Radio component state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::components::radio_group::RadioGroupId;
use crate::components::traits::Selectable;

/// Unique identifier for a Radio component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioId(usize);

impl RadioId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for RadioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__radio_{}", self.0)
    }
}

/// Internal state for a Radio component
#[derive(Debug, Default)]
struct RadioInner {
    /// Label shown next to the indicator
    title: String,
    /// Whether this radio is the selected member of its group
    selected: bool,
    /// Whether this radio holds the active state
    active: bool,
    /// Back-reference to the owning group, if any
    group: Option<RadioGroupId>,
}

/// The selectable state of a radio button.
///
/// `Radio` carries a title, the selected and active flags, and a
/// back-reference to the owning group. Selection is coordinated by
/// [`RadioGroup`]: calling [`set_selected`] directly stores the flag
/// without notifying the group, bypassing mutual exclusion.
///
/// Handles are cheap to clone and share one underlying state.
///
/// [`RadioGroup`]: crate::components::RadioGroup
/// [`set_selected`]: Radio::set_selected
#[derive(Debug)]
pub struct Radio {
    /// Unique identifier for this radio instance
    id: RadioId,
    /// Internal state
    inner: Arc<RwLock<RadioInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Radio {
    /// Create a new radio with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: RadioId::new(),
            inner: Arc::new(RwLock::new(RadioInner {
                title: title.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this radio
    pub fn id(&self) -> RadioId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the title
    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    /// Check if this radio is selected
    pub fn is_selected(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected)
            .unwrap_or(false)
    }

    /// Check if this radio holds the active state
    pub fn is_active(&self) -> bool {
        self.inner.read().map(|guard| guard.active).unwrap_or(false)
    }

    /// Get the owning group's id, or `None` before the radio is added
    /// to a group
    pub fn group(&self) -> Option<RadioGroupId> {
        self.inner.read().ok().and_then(|guard| guard.group)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the title
    pub fn set_title(&self, title: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the selected flag.
    ///
    /// Called by the owning group during its selection scan; calling it
    /// directly does not deselect the group's other members.
    pub fn set_selected(&self, selected: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.selected != selected {
                guard.selected = selected;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Set the active flag
    pub fn set_active(&self, active: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.active != active {
                guard.active = active;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Install the back-reference to the owning group
    pub fn set_group(&self, group: RadioGroupId) {
        if let Ok(mut guard) = self.inner.write() {
            guard.group = Some(group);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the radio state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Selectable for Radio {
    fn id_string(&self) -> String {
        Radio::id_string(self)
    }

    fn is_selected(&self) -> bool {
        Radio::is_selected(self)
    }

    fn set_selected(&self, selected: bool) {
        Radio::set_selected(self, selected);
    }

    fn set_group(&self, group: RadioGroupId) {
        Radio::set_group(self, group);
    }

    fn is_active(&self) -> bool {
        Radio::is_active(self)
    }

    fn set_active(&self, active: bool) {
        Radio::set_active(self, active);
    }
}

impl Clone for Radio {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new("")
    }
}
