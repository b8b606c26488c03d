//! Cache-Backed Local Data Source
//!
//! Implements `LocalDataSource` on top of the generic cache store. Each
//! cached value is a whole expense list keyed by a namespaced scope key, so
//! user-scoped and list-scoped entries never collide.
//!
//! Mutations here are read-modify-write sequences over the cache and are
//! not atomic on their own; the repository serializes them behind its write
//! lock. Mutating a scope with no valid cached entry is a deliberate no-op:
//! the local side cannot invent the rest of the list.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::CacheStore;
use crate::config::CacheStrategy;
use crate::datasource::LocalDataSource;
use crate::error::SourceResult;
use crate::models::Expense;

/// Cache specialisation used for expense lists.
pub type ExpenseCache = CacheStore<String, Vec<Expense>>;

fn user_key(user_id: &str) -> String {
    format!("user:{user_id}")
}

fn list_key(list_id: &str) -> String {
    format!("list:{list_id}")
}

// == Cached Local Data Source ==
/// Local data source backed by an in-memory TTL cache.
pub struct CachedLocalDataSource {
    cache: Arc<ExpenseCache>,
}

impl CachedLocalDataSource {
    /// Creates a local source with a fresh cache governed by `strategy`.
    pub fn new(strategy: CacheStrategy) -> Self {
        Self {
            cache: Arc::new(CacheStore::new(strategy)),
        }
    }

    /// Shares the underlying cache, e.g. with the periodic purge task.
    pub fn cache(&self) -> Arc<ExpenseCache> {
        Arc::clone(&self.cache)
    }

    fn read(&self, key: &String) -> Vec<Expense> {
        self.cache.get(key).unwrap_or_default()
    }

    fn append(&self, key: String, expense: Expense) {
        // Only extend a still-valid entry; a stale or missing list stays
        // missing until the next full cache write.
        if !self.cache.is_valid(&key) {
            return;
        }
        let mut expenses = self.read(&key);
        expenses.push(expense);
        self.cache.put(key, expenses);
    }

    fn replace(&self, key: String, expense: Expense) {
        if !self.cache.is_valid(&key) {
            return;
        }
        let mut expenses = self.read(&key);
        if let Some(slot) = expenses
            .iter_mut()
            .find(|candidate| candidate.document_id == expense.document_id)
        {
            *slot = expense;
            self.cache.put(key, expenses);
        }
    }

    fn remove(&self, key: String, expense_id: &str) {
        if !self.cache.is_valid(&key) {
            return;
        }
        let mut expenses = self.read(&key);
        expenses.retain(|candidate| candidate.document_id != expense_id);
        self.cache.put(key, expenses);
    }
}

#[async_trait]
impl LocalDataSource for CachedLocalDataSource {
    async fn get_expenses(&self, user_id: &str) -> SourceResult<Vec<Expense>> {
        Ok(self.read(&user_key(user_id)))
    }

    async fn cache_expenses(&self, user_id: &str, expenses: Vec<Expense>) -> SourceResult<()> {
        self.cache.put(user_key(user_id), expenses);
        Ok(())
    }

    async fn add_expense(&self, user_id: &str, expense: Expense) -> SourceResult<()> {
        self.append(user_key(user_id), expense);
        Ok(())
    }

    async fn update_expense(&self, user_id: &str, expense: Expense) -> SourceResult<()> {
        self.replace(user_key(user_id), expense);
        Ok(())
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> SourceResult<()> {
        self.remove(user_key(user_id), expense_id);
        Ok(())
    }

    async fn get_list_expenses(&self, list_id: &str) -> SourceResult<Vec<Expense>> {
        Ok(self.read(&list_key(list_id)))
    }

    async fn cache_list_expenses(
        &self,
        list_id: &str,
        expenses: Vec<Expense>,
    ) -> SourceResult<()> {
        self.cache.put(list_key(list_id), expenses);
        Ok(())
    }

    async fn add_list_expense(&self, list_id: &str, expense: Expense) -> SourceResult<()> {
        self.append(list_key(list_id), expense);
        Ok(())
    }

    async fn update_list_expense(&self, list_id: &str, expense: Expense) -> SourceResult<()> {
        self.replace(list_key(list_id), expense);
        Ok(())
    }

    async fn delete_list_expense(&self, list_id: &str, expense_id: &str) -> SourceResult<()> {
        self.remove(list_key(list_id), expense_id);
        Ok(())
    }

    async fn clear_all(&self) -> SourceResult<()> {
        self.cache.clear();
        Ok(())
    }

    fn offline_access_enabled(&self) -> bool {
        self.cache.strategy().offline_access
    }
}
