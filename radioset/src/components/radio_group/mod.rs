//! RadioGroup component - mutually exclusive selection over radio buttons.

mod state;

pub use state::{RadioGroup, RadioGroupId};
