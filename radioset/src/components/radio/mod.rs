//! Radio component - the selectable state of a radio button.

mod state;

pub use state::{Radio, RadioId};
