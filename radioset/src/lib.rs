pub mod components;

pub use components::{Radio, RadioGroup, RadioGroupId, RadioId, Selectable};
