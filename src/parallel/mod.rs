//! Fork-join execution of statically partitioned work.
//!
//! - [`partition`]: splits a list of work items round-robin into disjoint `Partition`s.
//! - [`pool`]: runs one worker per partition and joins them all before returning.
//!
//! With the `rayon` feature the workers run on a fresh `rayon::ThreadPool` built for the
//! call; without it they are scoped OS threads. Neither path shares a pool across calls.

pub mod partition;
pub use partition::Partition;

pub mod pool;
pub use pool::run_on_pool;
