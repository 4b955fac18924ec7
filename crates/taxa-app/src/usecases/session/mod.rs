//! Session gating.

pub mod gate;

pub use gate::{Gate, SessionGate};
