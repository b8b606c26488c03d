//! Data Source Module
//!
//! Abstract collaborator contracts the repository depends on, plus the
//! in-crate local source backed by the cache store. The remote side is an
//! interface only; actual network mechanics live outside this crate.

mod local;

pub use local::{CachedLocalDataSource, ExpenseCache};

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::models::Expense;

// == Remote Data Source ==
/// The authoritative store for expenses, reached over the network.
///
/// Write operations return the stored document so callers observe any
/// server-assigned fields (notably `document_id`).
#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    /// Fetches all expenses involving the given user.
    async fn get_expenses(&self, user_id: &str) -> SourceResult<Vec<Expense>>;

    /// Creates an expense under the given user.
    async fn add_expense(&self, user_id: &str, expense: Expense) -> SourceResult<Expense>;

    /// Replaces an existing expense, matched by `document_id`.
    async fn update_expense(&self, user_id: &str, expense: Expense) -> SourceResult<Expense>;

    /// Deletes an expense by document id.
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> SourceResult<()>;

    /// Fetches all expenses belonging to a shared expense list.
    async fn get_expenses_by_list(&self, list_id: &str) -> SourceResult<Vec<Expense>>;

    /// Creates an expense inside a shared expense list.
    async fn add_expense_to_list(&self, list_id: &str, expense: Expense) -> SourceResult<Expense>;

    /// Replaces an expense inside a shared expense list.
    async fn update_expense_in_list(
        &self,
        list_id: &str,
        expense: Expense,
    ) -> SourceResult<Expense>;

    /// Deletes an expense from a shared expense list.
    async fn delete_expense_from_list(
        &self,
        list_id: &str,
        expense_id: &str,
    ) -> SourceResult<()>;
}

// == Local Data Source ==
/// The device-local view of expenses, derived and rebuildable.
///
/// Reads report "nothing cached" as an empty list rather than an error;
/// mutations against uncached scopes are silent no-ops since the full list
/// cannot be reconstructed locally.
#[async_trait]
pub trait LocalDataSource: Send + Sync {
    /// Returns the cached expenses for a user, or an empty list on a miss.
    async fn get_expenses(&self, user_id: &str) -> SourceResult<Vec<Expense>>;

    /// Replaces the cached expense list for a user.
    async fn cache_expenses(&self, user_id: &str, expenses: Vec<Expense>) -> SourceResult<()>;

    /// Appends an expense to the user's cached list, if one is cached.
    async fn add_expense(&self, user_id: &str, expense: Expense) -> SourceResult<()>;

    /// Replaces an expense in the user's cached list, matched by document id.
    async fn update_expense(&self, user_id: &str, expense: Expense) -> SourceResult<()>;

    /// Removes an expense from the user's cached list.
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> SourceResult<()>;

    /// Returns the cached expenses for a list, or an empty list on a miss.
    async fn get_list_expenses(&self, list_id: &str) -> SourceResult<Vec<Expense>>;

    /// Replaces the cached expense list for a shared list.
    async fn cache_list_expenses(&self, list_id: &str, expenses: Vec<Expense>)
        -> SourceResult<()>;

    /// Appends an expense to a shared list's cached expenses.
    async fn add_list_expense(&self, list_id: &str, expense: Expense) -> SourceResult<()>;

    /// Replaces an expense in a shared list's cached expenses.
    async fn update_list_expense(&self, list_id: &str, expense: Expense) -> SourceResult<()>;

    /// Removes an expense from a shared list's cached expenses.
    async fn delete_list_expense(&self, list_id: &str, expense_id: &str) -> SourceResult<()>;

    /// Drops every cached entry.
    async fn clear_all(&self) -> SourceResult<()>;

    /// Whether stale cached data may be served when the remote source fails.
    fn offline_access_enabled(&self) -> bool;
}
