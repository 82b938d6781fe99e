//! Domain types: the funds check itself, the host's tracker and event
//! shapes, and the `Action` port that ties them together.

pub mod funds;
pub mod ports;
pub mod tracker;
