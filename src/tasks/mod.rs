//! Background Tasks Module
//!
//! Periodic maintenance work running alongside the repository.
//!
//! # Tasks
//! - Cache purge: removes expired cache entries at configured intervals

mod purge;

pub use purge::spawn_purge_task;
