//! Bounded-concurrency batch execution.
//!
//! [`run_batches`] partitions work items into fixed-size groups and runs each
//! group's items concurrently, waiting for the whole group to settle before
//! the next one starts. A failed item never cancels its siblings and never
//! aborts the run; failures are collected into the returned [`BatchReport`].

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::error::SdkError;

/// Configuration for batch execution.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Number of items dispatched concurrently per group (must be >= 1).
    pub group_size: usize,
    /// Optional pause between consecutive groups, to stay under backend
    /// rate limits.
    pub pause_between_groups: Option<Duration>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            group_size: 4,
            pause_between_groups: None,
        }
    }
}

impl BatchConfig {
    /// Create a config with the given group size.
    pub fn new(group_size: usize) -> Self {
        Self {
            group_size,
            ..Self::default()
        }
    }

    /// Set the pause inserted between consecutive groups.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_between_groups = Some(pause);
        self
    }

    /// Reject configs that could never dispatch an item.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.group_size == 0 {
            return Err(SdkError::Validation(
                "batch group_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of one work item.
#[derive(Debug)]
pub struct ItemOutcome<R> {
    /// Position of the item in the input sequence.
    pub index: usize,
    /// Display key of the item — an IMEI for the provisioning flows.
    pub key: String,
    pub result: Result<R, SdkError>,
}

/// Per-item outcomes plus counters for one [`run_batches`] call.
///
/// Outcomes keep the input order regardless of how items interleaved inside
/// their group.
#[derive(Debug)]
pub struct BatchReport<R> {
    pub outcomes: Vec<ItemOutcome<R>>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl<R> BatchReport<R> {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_all_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Iterate over the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome<R>> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Run `operation` over `items` in groups of `config.group_size`.
///
/// Groups run strictly one after another: every item of a group must settle,
/// successfully or not, before the next group is dispatched. Validation
/// failures (a `group_size` of zero, an empty item list) abort before any
/// operation runs.
pub async fn run_batches<T, R, F, Fut>(
    items: Vec<T>,
    config: &BatchConfig,
    operation: F,
) -> Result<BatchReport<R>, SdkError>
where
    T: Display,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, SdkError>>,
{
    config.validate()?;
    if items.is_empty() {
        return Err(SdkError::Validation(
            "batch contains no work items".to_string(),
        ));
    }

    let started_at = Utc::now();
    let total = items.len();
    let mut outcomes = Vec::with_capacity(total);

    let mut queue = items.into_iter().enumerate().peekable();
    while queue.peek().is_some() {
        let group: Vec<(usize, T)> = queue.by_ref().take(config.group_size).collect();
        let futures = group.into_iter().map(|(index, item)| {
            let key = item.to_string();
            let fut = operation(item);
            async move { (index, key, fut.await) }
        });

        for (index, key, result) in join_all(futures).await {
            if let Err(e) = &result {
                tracing::warn!(key = %key, error = %e, "Batch item failed");
            }
            outcomes.push(ItemOutcome { index, key, result });
        }

        if queue.peek().is_some() {
            if let Some(pause) = config.pause_between_groups {
                futures_timer::Delay::new(pause).await;
            }
        }
    }

    let report = BatchReport {
        outcomes,
        started_at,
        finished_at: Utc::now(),
    };
    tracing::info!(
        total,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Batch processing completed"
    );
    Ok(report)
}
