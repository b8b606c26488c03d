//! Expense Repository
//!
//! Single source-of-truth view over expenses: reads prefer the local cache
//! and fall back to the remote source, writes go remote-first with a
//! best-effort background cache sync.
//!
//! Concurrency discipline: all mutating operations on one repository
//! instance are serialized through `write_lock`; reads run unserialized and
//! may observe cache state from before or after a concurrent write's
//! background sync. That staleness window is accepted. The cache has its own
//! internal lock, and no code path holds both locks at once.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::datasource::{LocalDataSource, RemoteDataSource};
use crate::error::{DomainResult, SourceResult};
use crate::models::Expense;

/// The read/write scope a repository operation targets: a user's own
/// expense feed or a shared expense list.
#[derive(Debug, Clone, Copy)]
enum Scope<'a> {
    User(&'a str),
    List(&'a str),
}

// == Expense Repository ==
/// Cache-first repository over an abstract remote/local source pair.
///
/// The remote source is authoritative; the cache is a derived, rebuildable
/// artifact. Cache writes after a successful remote operation are
/// fire-and-forget: their failure is logged and never turns a successful
/// remote call into a reported error.
pub struct ExpenseRepository {
    remote: Arc<dyn RemoteDataSource>,
    local: Arc<dyn LocalDataSource>,
    /// Serializes add/update/delete; never held during reads
    write_lock: Mutex<()>,
}

impl ExpenseRepository {
    // == Constructor ==
    /// Creates a repository over the given source pair.
    ///
    /// Both sources are injected so tests can substitute isolated instances;
    /// nothing here is process-global.
    pub fn new(remote: Arc<dyn RemoteDataSource>, local: Arc<dyn LocalDataSource>) -> Self {
        Self {
            remote,
            local,
            write_lock: Mutex::new(()),
        }
    }

    // == Reads ==

    /// Returns the expenses for a user, cache-first.
    ///
    /// A warm non-empty cache answers immediately with no remote call. An
    /// empty cached list is indistinguishable from "never cached" and falls
    /// through to the remote source, so zero-expense users re-fetch on every
    /// read. Known quirk, kept from the original behavior.
    pub async fn get_expenses(&self, user_id: &str) -> DomainResult<Vec<Expense>> {
        self.read(Scope::User(user_id)).await
    }

    /// Returns the expenses of a shared list, cache-first.
    pub async fn get_expenses_by_list(&self, list_id: &str) -> DomainResult<Vec<Expense>> {
        self.read(Scope::List(list_id)).await
    }

    /// Fetches fresh expenses from the remote source, bypassing the cache
    /// read. The fresh data is returned regardless of whether the
    /// best-effort cache write behind it lands.
    pub async fn refresh_expenses(&self, user_id: &str) -> DomainResult<Vec<Expense>> {
        let expenses = self.remote.get_expenses(user_id).await?;
        self.spawn_cache_fill(Scope::User(user_id), expenses.clone());
        Ok(expenses)
    }

    async fn read(&self, scope: Scope<'_>) -> DomainResult<Vec<Expense>> {
        if let Ok(cached) = self.read_local(scope).await {
            if !cached.is_empty() {
                debug!(?scope, count = cached.len(), "cache hit");
                return Ok(cached);
            }
        }
        self.fetch_with_fallback(scope).await
    }

    /// Remote fetch with a stale-cache fallback.
    ///
    /// On remote success the result is returned immediately and written to
    /// the cache in the background. On remote failure, one cache read is
    /// attempted (when offline access is enabled); a non-empty cached list
    /// is served stale, otherwise the translated domain error surfaces.
    async fn fetch_with_fallback(&self, scope: Scope<'_>) -> DomainResult<Vec<Expense>> {
        match self.read_remote(scope).await {
            Ok(expenses) => {
                self.spawn_cache_fill(scope, expenses.clone());
                Ok(expenses)
            }
            Err(remote_err) => {
                if self.local.offline_access_enabled() {
                    if let Ok(cached) = self.read_local(scope).await {
                        if !cached.is_empty() {
                            warn!(
                                ?scope,
                                error = %remote_err,
                                "remote fetch failed, serving stale cached expenses"
                            );
                            return Ok(cached);
                        }
                    }
                }
                Err(remote_err.into())
            }
        }
    }

    async fn read_local(&self, scope: Scope<'_>) -> SourceResult<Vec<Expense>> {
        match scope {
            Scope::User(user_id) => self.local.get_expenses(user_id).await,
            Scope::List(list_id) => self.local.get_list_expenses(list_id).await,
        }
    }

    async fn read_remote(&self, scope: Scope<'_>) -> SourceResult<Vec<Expense>> {
        match scope {
            Scope::User(user_id) => self.remote.get_expenses(user_id).await,
            Scope::List(list_id) => self.remote.get_expenses_by_list(list_id).await,
        }
    }

    // == Writes ==
    // Each write holds `write_lock` across the remote call and the spawn of
    // its cache sync, so two writers never interleave their remote-then-sync
    // sequences. The sync itself runs detached.

    /// Creates an expense. Remote-first; the cache mirror is best-effort.
    pub async fn add_expense(&self, user_id: &str, expense: Expense) -> DomainResult<Expense> {
        let _guard = self.write_lock.lock().await;
        let stored = self.remote.add_expense(user_id, expense).await?;

        let local = Arc::clone(&self.local);
        let user_id = user_id.to_owned();
        let mirrored = stored.clone();
        spawn_cache_sync("add_expense", async move {
            local.add_expense(&user_id, mirrored).await
        });

        Ok(stored)
    }

    /// Updates an expense, matched by `document_id`.
    pub async fn update_expense(&self, user_id: &str, expense: Expense) -> DomainResult<Expense> {
        let _guard = self.write_lock.lock().await;
        let stored = self.remote.update_expense(user_id, expense).await?;

        let local = Arc::clone(&self.local);
        let user_id = user_id.to_owned();
        let mirrored = stored.clone();
        spawn_cache_sync("update_expense", async move {
            local.update_expense(&user_id, mirrored).await
        });

        Ok(stored)
    }

    /// Deletes an expense by document id.
    pub async fn delete_expense(&self, user_id: &str, expense_id: &str) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        self.remote.delete_expense(user_id, expense_id).await?;

        let local = Arc::clone(&self.local);
        let user_id = user_id.to_owned();
        let expense_id = expense_id.to_owned();
        spawn_cache_sync("delete_expense", async move {
            local.delete_expense(&user_id, &expense_id).await
        });

        Ok(())
    }

    /// Creates an expense inside a shared list.
    pub async fn add_expense_to_list(
        &self,
        list_id: &str,
        expense: Expense,
    ) -> DomainResult<Expense> {
        let _guard = self.write_lock.lock().await;
        let stored = self.remote.add_expense_to_list(list_id, expense).await?;

        let local = Arc::clone(&self.local);
        let list_id = list_id.to_owned();
        let mirrored = stored.clone();
        spawn_cache_sync("add_list_expense", async move {
            local.add_list_expense(&list_id, mirrored).await
        });

        Ok(stored)
    }

    /// Updates an expense inside a shared list.
    pub async fn update_expense_in_list(
        &self,
        list_id: &str,
        expense: Expense,
    ) -> DomainResult<Expense> {
        let _guard = self.write_lock.lock().await;
        let stored = self.remote.update_expense_in_list(list_id, expense).await?;

        let local = Arc::clone(&self.local);
        let list_id = list_id.to_owned();
        let mirrored = stored.clone();
        spawn_cache_sync("update_list_expense", async move {
            local.update_list_expense(&list_id, mirrored).await
        });

        Ok(stored)
    }

    /// Deletes an expense from a shared list.
    pub async fn delete_expense_from_list(
        &self,
        list_id: &str,
        expense_id: &str,
    ) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        self.remote
            .delete_expense_from_list(list_id, expense_id)
            .await?;

        let local = Arc::clone(&self.local);
        let list_id = list_id.to_owned();
        let expense_id = expense_id.to_owned();
        spawn_cache_sync("delete_list_expense", async move {
            local.delete_list_expense(&list_id, &expense_id).await
        });

        Ok(())
    }

    // == Cache Maintenance ==

    /// Drops the whole local cache, best-effort and non-blocking.
    ///
    /// Touches no remote state, so it does not take `write_lock`.
    pub fn clear_cache(&self) {
        let local = Arc::clone(&self.local);
        spawn_cache_sync("clear_all", async move { local.clear_all().await });
    }

    fn spawn_cache_fill(&self, scope: Scope<'_>, expenses: Vec<Expense>) {
        let local = Arc::clone(&self.local);
        match scope {
            Scope::User(user_id) => {
                let user_id = user_id.to_owned();
                spawn_cache_sync("cache_expenses", async move {
                    local.cache_expenses(&user_id, expenses).await
                });
            }
            Scope::List(list_id) => {
                let list_id = list_id.to_owned();
                spawn_cache_sync("cache_list_expenses", async move {
                    local.cache_list_expenses(&list_id, expenses).await
                });
            }
        }
    }
}

// == Fire-And-Forget Cache Sync ==
/// Spawns a detached cache-sync task.
///
/// The caller has already returned (or is about to return) its result, so
/// the task's outcome is deliberately not attached to anything: a failure is
/// logged locally and swallowed.
fn spawn_cache_sync<F>(operation: &'static str, fut: F)
where
    F: Future<Output = SourceResult<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(error) = fut.await {
            warn!(operation, %error, "best-effort cache sync failed");
        }
    });
}
