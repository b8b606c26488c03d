//! Domain models for the expense data layer
//!
//! DTOs shared between the repository, the data sources and the settlement
//! calculator. All of them serialize with serde; in the full application
//! they cross the process boundary to the backing document store.

pub mod debt;
pub mod expense;
pub mod user;

// Re-export commonly used types
pub use debt::DebtSummary;
pub use expense::{Expense, ExpenseCategory, SplitDetail};
pub use user::User;
