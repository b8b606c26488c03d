//! Settlement Module
//!
//! Pure debt netting: reduces per-expense obligations between N participants
//! into a minimal set of net pairwise transfers. No I/O, no shared state.

mod calculator;

pub use calculator::{calculate, SETTLEMENT_TOLERANCE};
