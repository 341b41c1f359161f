//! Bounded worker pool with order-preserving results
//!
//! Workers pull indices from one shared claim counter. Each index is claimed
//! exactly once and its result lands in the slot with the same index, so the
//! output order is the input order whatever order work completes in.

use crate::{Result, ScoutError};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Runs `work` over every item with at most `concurrency` workers
///
/// `work` receives the item's index and a clone of the item. `min(concurrency,
/// items.len())` workers are spawned (at least one when there is work); each
/// loops claiming the next unclaimed index until the counter passes the end.
///
/// # Returns
///
/// * `Ok(Vec<R>)` - One result per item, in input order
/// * `Err(ScoutError::Worker)` - A worker task panicked or was cancelled
///
/// # Example
///
/// ```
/// use skill_scout::enrich::run_all;
///
/// # #[tokio::main]
/// # async fn main() {
/// let doubled = run_all(vec![1, 2, 3], 2, |_, n| async move { n * 2 })
///     .await
///     .unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # }
/// ```
pub async fn run_all<T, R, F, Fut>(
    items: Vec<T>,
    concurrency: usize,
    work: F,
) -> Result<Vec<R>>
where
    T: Clone + Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(usize, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    let total = items.len();
    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(total).collect();
    if total == 0 {
        return Ok(Vec::new());
    }

    let worker_count = concurrency.max(1).min(total);
    tracing::debug!("Running {} items on {} workers", total, worker_count);

    let items = Arc::new(items);
    let work = Arc::new(work);
    let next_index = Arc::new(AtomicUsize::new(0));

    let mut workers = JoinSet::new();
    for worker_id in 0..worker_count {
        let items = Arc::clone(&items);
        let work = Arc::clone(&work);
        let next_index = Arc::clone(&next_index);

        workers.spawn(async move {
            let mut completed = Vec::new();
            loop {
                // Claim and advance in one step
                let index = next_index.fetch_add(1, Ordering::Relaxed);
                let Some(item) = items.get(index) else {
                    break;
                };
                let result = (*work)(index, item.clone()).await;
                completed.push((index, result));
            }
            tracing::trace!("Worker {} finished {} items", worker_id, completed.len());
            completed
        });
    }

    while let Some(joined) = workers.join_next().await {
        let completed = joined.map_err(|e| ScoutError::Worker(e.to_string()))?;
        for (index, result) in completed {
            slots[index] = Some(result);
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| ScoutError::Worker(format!("no result for item {}", index)))
        })
        .collect()
}
