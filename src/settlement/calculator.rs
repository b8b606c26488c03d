//! Debt Calculator
//!
//! Nets a snapshot of expenses into pairwise transfers. The function trusts
//! its input: split rows that do not sum to the expense price are tolerated
//! and flow proportionally into the result.

use std::collections::{BTreeMap, HashMap};

use crate::models::{DebtSummary, Expense};

/// Absolute tolerance below which a net pairwise balance counts as settled.
///
/// Amounts are floating currency values; accumulated rounding residue would
/// otherwise surface as spurious sub-cent debts. The band is a fixed
/// absolute threshold, not relative, and the comparison is strict: a net of
/// exactly 0.01 is still settled.
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

// == Calculate ==
/// Nets all obligations in `expenses` into pairwise transfers.
///
/// For every expense, each split row whose user is not the payer owes the
/// payer that row's amount. Debts between each pair of users are then netted
/// into at most one transfer, and the result is sorted by amount descending
/// with a deterministic tie-break, so repeated calls on the same input agree
/// exactly.
///
/// Complexity: O(E·S) accumulation plus O(U²) pair enumeration, where E is
/// the expense count, S the average split size and U the distinct user
/// count. U is a social expense-sharing group, so the quadratic term is
/// harmless.
pub fn calculate(expenses: &[Expense]) -> Vec<DebtSummary> {
    if expenses.is_empty() {
        return Vec::new();
    }

    // Directed accumulator: (debtor, creditor) -> total owed.
    let mut owed: HashMap<(&str, &str), f64> = HashMap::new();
    // Every user seen as payer or split participant, ordered by id so the
    // pair enumeration below is deterministic.
    let mut users: BTreeMap<&str, &crate::models::User> = BTreeMap::new();

    for expense in expenses {
        users.insert(expense.paid_by.user_id.as_str(), &expense.paid_by);
        for split in &expense.split_details {
            users.insert(split.user.user_id.as_str(), &split.user);
        }

        if expense.price <= 0.0 || expense.split_details.is_empty() {
            continue;
        }
        for split in &expense.split_details {
            if split.user.user_id == expense.paid_by.user_id {
                continue;
            }
            *owed
                .entry((split.user.user_id.as_str(), expense.paid_by.user_id.as_str()))
                .or_insert(0.0) += split.amount;
        }
    }

    let ids: Vec<&str> = users.keys().copied().collect();
    let mut summaries = Vec::new();

    // Visit each unordered pair exactly once and net the two directions.
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            let a_owes_b = owed.get(&(a, b)).copied().unwrap_or(0.0);
            let b_owes_a = owed.get(&(b, a)).copied().unwrap_or(0.0);
            let net = a_owes_b - b_owes_a;

            if net > SETTLEMENT_TOLERANCE {
                summaries.push(DebtSummary::new(users[a].clone(), users[b].clone(), net));
            } else if net < -SETTLEMENT_TOLERANCE {
                summaries.push(DebtSummary::new(users[b].clone(), users[a].clone(), -net));
            }
        }
    }

    summaries.sort_by(|x, y| {
        y.amount
            .total_cmp(&x.amount)
            .then_with(|| x.from_user.user_id.cmp(&y.from_user.user_id))
            .then_with(|| x.to_user.user_id.cmp(&y.to_user.user_id))
    });
    summaries
}
