//! Retry with exponential backoff.

use std::future::Future;
use std::time::Duration;
use tracing::warn;
use vermeer_error::VermeerResult;

/// Run `operation` up to `max_retries + 1` times, sleeping
/// `base_delay * 2^attempt` between attempts.
///
/// The delay applies only between attempts, never after the final failure,
/// and the last observed error is returned unchanged so callers keep the
/// original taxonomy kind. Each attempt re-executes the whole operation;
/// there is no partial-state carry-over.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use vermeer_core::with_retry;
/// use vermeer_error::{ApiError, VermeerResult};
///
/// # async fn call_api() -> VermeerResult<String> { Ok(String::new()) }
/// # async fn demo() -> VermeerResult<String> {
/// with_retry(|| call_api(), 2, Duration::from_millis(1000)).await
/// # }
/// ```
pub async fn with_retry<T, F, Fut>(
    mut operation: F,
    max_retries: u32,
    base_delay: Duration,
) -> VermeerResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = VermeerResult<T>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_retries => {
                // Cap the exponent so the doubling cannot overflow on an
                // absurd configured retry count.
                let wait = base_delay.saturating_mul(2u32.pow(attempt.min(31)));
                warn!(
                    attempt = attempt + 1,
                    max_retries,
                    wait_ms = wait.as_millis() as u64,
                    error = %err,
                    "Attempt failed, retrying after backoff"
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
