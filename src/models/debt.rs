//! Debt summary model
//!
//! The output row of the settlement calculator: one net pairwise transfer.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// One net pairwise transfer: `from_user` owes `to_user` `amount`.
///
/// Always `amount > 0` and `from_user != to_user`. Created fresh on every
/// calculator invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    /// The debtor
    pub from_user: User,
    /// The creditor
    pub to_user: User,
    /// Net amount owed, strictly positive
    pub amount: f64,
}

impl DebtSummary {
    pub fn new(from_user: User, to_user: User, amount: f64) -> Self {
        debug_assert!(amount > 0.0);
        debug_assert!(from_user.user_id != to_user.user_id);
        Self {
            from_user,
            to_user,
            amount,
        }
    }
}
