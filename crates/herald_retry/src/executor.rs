//! Retry and timeout execution.

use herald_error::{HeraldError, HeraldResult, RetryError, RetryableError, TimeoutError};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::Retry;
use tracing::{debug, warn};

use crate::RetryPolicy;

/// Runs `operation` until it succeeds, fails permanently, or the policy's
/// attempts are used up.
///
/// Permanent errors are returned unchanged after the first attempt. When a
/// transient error survives every attempt it is wrapped in [`RetryError`]
/// carrying the attempt count and the last underlying error.
#[tracing::instrument(skip(policy, operation), fields(max_attempts = policy.attempts()))]
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, label: &str, mut operation: F) -> HeraldResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = HeraldResult<T>>,
{
    let attempts = AtomicUsize::new(0);
    let max_attempts = policy.attempts();

    let result = Retry::spawn(policy.delays(), || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let pending = operation();
        async move {
            match pending.await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(attempt, "{} succeeded after retry", label);
                    }
                    Ok(value)
                }
                Err(e) if e.is_retryable() => {
                    if attempt < max_attempts {
                        warn!(
                            attempt,
                            max_attempts,
                            delay_ms = policy.delay_after(attempt).as_millis() as u64,
                            "{} failed, retrying: {}",
                            label,
                            e
                        );
                    }
                    Err(tokio_retry2::RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(attempt, "{} failed permanently: {}", label, e);
                    Err(tokio_retry2::RetryError::Permanent(e))
                }
            }
        }
    })
    .await;

    result.map_err(|e: HeraldError| {
        if e.is_retryable() {
            let made = attempts.load(Ordering::SeqCst);
            warn!(attempts = made, "{} gave up: {}", label, e);
            RetryError::new(label, made, e).into()
        } else {
            e
        }
    })
}

/// Bounds `future` by `deadline`, failing with [`TimeoutError`] when it elapses.
pub async fn with_timeout<T, Fut>(deadline: Duration, label: &str, future: Fut) -> HeraldResult<T>
where
    Fut: Future<Output = HeraldResult<T>>,
{
    match tokio::time::timeout(deadline, future).await {
        Ok(result) => result,
        Err(_) => {
            warn!(deadline_ms = deadline.as_millis() as u64, "{} timed out", label);
            Err(TimeoutError::new(label, deadline.as_millis() as u64).into())
        }
    }
}
