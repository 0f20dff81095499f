//! Execution strategy for per-file work
//!
//! This module only decides *how* work runs (sequentially or on a sized rayon
//! pool); callers decide what the work is. Results always come back in input
//! order, so output never depends on the chosen strategy.
//!
//! ```rust
//! use docsift::parallel::ExecutionStrategy;
//!
//! // 100 items, parallel from 50 items on, 8 workers available
//! let strategy = ExecutionStrategy::auto(100, 50, 8);
//! assert_eq!(strategy, ExecutionStrategy::Parallel { workers: 8 });
//!
//! let doubled = strategy.execute(&[1, 2, 3], |n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use rayon::prelude::*;

use crate::config::{ParallelConfig, ParallelMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    /// Workers allowed by the machine and the user's limits
    ///
    /// `thread_percentage` of the CPU cores (at least one), capped by
    /// `max_threads` when that is non-zero.
    pub fn calculate_optimal_workers(max_threads: usize, thread_percentage: u8) -> usize {
        let cpu_cores = num_cpus::get();
        let by_percentage = std::cmp::max(1, cpu_cores * thread_percentage as usize / 100);

        if max_threads > 0 {
            std::cmp::min(max_threads, by_percentage)
        } else {
            by_percentage
        }
    }

    /// Parallel only when there is enough work and more than one worker
    pub fn auto(work_item_count: usize, min_threshold: usize, optimal_workers: usize) -> Self {
        if work_item_count < min_threshold || optimal_workers <= 1 {
            ExecutionStrategy::Sequential
        } else {
            ExecutionStrategy::Parallel {
                workers: optimal_workers,
            }
        }
    }

    /// Resolve the configured mode for a concrete workload
    pub fn from_config(config: &ParallelConfig, work_item_count: usize) -> Self {
        let strategy = match config.mode {
            ParallelMode::Sequential => ExecutionStrategy::Sequential,
            ParallelMode::Parallel => ExecutionStrategy::Parallel {
                workers: Self::calculate_optimal_workers(
                    config.max_threads,
                    config.thread_percentage,
                ),
            },
            ParallelMode::Auto => Self::auto(
                work_item_count,
                config.min_files_for_parallel,
                Self::calculate_optimal_workers(config.max_threads, config.thread_percentage),
            ),
        };

        tracing::debug!(
            "Execution strategy for {} items: {:?}",
            work_item_count,
            strategy
        );
        strategy
    }

    /// Map every item through `f`, returning results in input order
    pub fn execute<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match *self {
            ExecutionStrategy::Sequential => items.iter().map(f).collect(),
            ExecutionStrategy::Parallel { workers } => {
                match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                    Ok(pool) => pool.install(|| items.par_iter().map(&f).collect()),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to build a {}-thread pool, running sequentially: {}",
                            workers,
                            e
                        );
                        items.iter().map(f).collect()
                    }
                }
            }
        }
    }
}
