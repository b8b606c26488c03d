//! Expense model
//!
//! An expense paid by one user and split across several, plus the split
//! detail rows enumerating who owes what portion of the total.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// How far `sum(split amounts)` may drift from `price` before the split is
/// considered inconsistent. Matches the settlement tolerance.
pub const SPLIT_TOLERANCE: f64 = 0.01;

// == Split Detail ==
/// One participant's share of an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDetail {
    /// Who owes this share
    pub user: User,
    /// Share amount, in the expense's currency
    pub amount: f64,
}

impl SplitDetail {
    pub fn new(user: User, amount: f64) -> Self {
        Self { user, amount }
    }
}

// == Expense Category ==
/// Coarse expense categorisation used by the app's category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Travel,
    Utilities,
    Entertainment,
    Shopping,
    #[default]
    Other,
}

// == Expense ==
/// An expense paid by one user and split across several.
///
/// `price` is the total amount; `split_details` enumerates who owes what
/// portion of it. The split rows are expected to sum to `price`, but this is
/// not enforced: the calculator trusts its input (see `splits_cover_price`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Document identifier assigned by the backing store
    pub document_id: String,
    /// Short title
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Total amount paid
    pub price: f64,
    /// Date as recorded by the client (opaque to this layer)
    pub date: String,
    /// Expense category
    #[serde(default)]
    pub category: ExpenseCategory,
    /// Who paid the full amount up front
    pub paid_by: User,
    /// Who owes which portion of `price`
    pub split_details: Vec<SplitDetail>,
}

impl Expense {
    /// Sum of all split amounts.
    pub fn split_total(&self) -> f64 {
        self.split_details.iter().map(|split| split.amount).sum()
    }

    /// Whether the split rows account for the full price, within tolerance.
    pub fn splits_cover_price(&self) -> bool {
        (self.split_total() - self.price).abs() <= SPLIT_TOLERANCE
    }
}
