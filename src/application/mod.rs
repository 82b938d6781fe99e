//! Application layer: the custom actions and the executor that dispatches
//! action calls to them by name.

pub mod actions;
pub mod executor;
