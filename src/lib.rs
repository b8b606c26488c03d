//! Split Core - the data and settlement core of an expense-splitting app
//!
//! Provides a cache-first expense repository over abstract remote/local data
//! sources, the thread-safe TTL cache backing the local source, and the pure
//! debt-settlement (netting) calculator.

pub mod cache;
pub mod config;
pub mod datasource;
pub mod error;
pub mod models;
pub mod repository;
pub mod settlement;
pub mod tasks;

pub use config::CacheStrategy;
pub use datasource::{CachedLocalDataSource, LocalDataSource, RemoteDataSource};
pub use error::{DataSourceError, DomainError};
pub use repository::ExpenseRepository;
pub use settlement::calculate;
pub use tasks::spawn_purge_task;
