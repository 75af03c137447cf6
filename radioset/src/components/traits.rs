//! Shared traits for selectable components.
//!
//! These traits define the common interface for widgets that take part
//! in group-coordinated selection and share the same state management
//! patterns.

use crate::components::radio_group::RadioGroupId;

/// Trait for widgets that can be members of a [`RadioGroup`].
///
/// This is a capability interface only: selection and activation state
/// plus the group back-reference. Rendering, layout, and input handling
/// stay with the widget's other halves.
///
/// Implementors are expected to be cheap handles over shared interior
/// state, so all mutators take `&self` and clones of one handle report
/// the same `id_string`.
///
/// # Implementors
///
/// - `Radio` - the state half of a radio button
///
/// [`RadioGroup`]: crate::components::RadioGroup
pub trait Selectable: Send + Sync + Clone + 'static {
    /// Get the unique ID as a string (stable across clones of a handle).
    ///
    /// Group membership is matched on this, never on value equality.
    fn id_string(&self) -> String;

    /// Check if this item currently reports itself selected.
    fn is_selected(&self) -> bool;

    /// Store the selected flag. An unconditional store, not a toggle.
    fn set_selected(&self, selected: bool);

    /// Install the back-reference to the owning group.
    ///
    /// The id is a lookup-only link; it never keeps the group alive.
    fn set_group(&self, group: RadioGroupId);

    /// Check if this item holds the active state.
    fn is_active(&self) -> bool;

    /// Store the active flag.
    fn set_active(&self, active: bool);
}
