//! Repository Module
//!
//! Cache-first orchestration over the remote and local data sources.

mod expenses;

pub use expenses::ExpenseRepository;
