//! Tests for bounded retry and deadlines.

use herald_error::{
    ConfigError, DistributionError, DistributionErrorKind, HeraldError, HeraldErrorKind,
    HeraldResult,
};
use herald_retry::{RetryPolicy, with_retry, with_timeout};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

fn rejected() -> HeraldError {
    DistributionError::new(DistributionErrorKind::Rejected {
        status: 503,
        body: "Service unavailable".to_string(),
    })
    .into()
}

#[tokio::test(start_paused = true)]
async fn test_first_attempt_success_makes_one_call() -> anyhow::Result<()> {
    let calls = &AtomicUsize::new(0);
    let value = with_retry(&RetryPolicy::default(), "op", || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<_, HeraldError>(7)
    })
    .await?;

    assert_eq!(value, 7);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_then_success() -> anyhow::Result<()> {
    let calls = &AtomicUsize::new(0);
    let started = Instant::now();

    let value = with_retry(&RetryPolicy::default(), "X API", || async move {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n < 3 {
            Err(rejected())
        } else {
            Ok("1234567890".to_string())
        }
    })
    .await?;

    assert_eq!(value, "1234567890");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    // 1s after the first failure, 2s after the second
    assert!(started.elapsed() >= Duration::from_secs(3));
    assert!(started.elapsed() < Duration::from_secs(4));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_reports_attempts_and_last_error() {
    let calls = &AtomicUsize::new(0);
    let result: HeraldResult<()> = with_retry(&RetryPolicy::default(), "X API", || async move {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        Err(DistributionError::new(DistributionErrorKind::Request(format!("connection reset #{n}"))).into())
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let err = result.expect_err("should exhaust");
    match err.kind() {
        HeraldErrorKind::Retry(retry) => {
            assert_eq!(retry.attempts, 3);
            assert!(retry.last_error.to_string().contains("connection reset #3"));
        }
        other => panic!("expected retry exhaustion, got {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_permanent_error_is_not_retried() {
    let calls = &AtomicUsize::new(0);
    let result: HeraldResult<()> = with_retry(&RetryPolicy::default(), "op", || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(ConfigError::new("X_CONSUMER_KEY is not set").into())
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let err = result.expect_err("should fail");
    assert!(matches!(err.kind(), HeraldErrorKind::Config(_)));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_is_transient_inside_retry() {
    let calls = &AtomicUsize::new(0);
    let policy = RetryPolicy::new(2, Duration::from_millis(10));

    let result: HeraldResult<()> = with_retry(&policy, "generation", || {
        calls.fetch_add(1, Ordering::SeqCst);
        with_timeout(Duration::from_secs(30), "generation", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    match result.expect_err("should time out").kind() {
        HeraldErrorKind::Retry(retry) => {
            assert!(matches!(retry.last_error.kind(), HeraldErrorKind::Timeout(_)));
        }
        other => panic!("expected retry exhaustion, got {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_timeout_passes_fast_results_through() -> anyhow::Result<()> {
    let value = with_timeout(Duration::from_secs(30), "op", async { Ok::<_, HeraldError>(5) }).await?;
    assert_eq!(value, 5);
    Ok(())
}
