//! Condition polling

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::error::E2eResult;

/// Result of [`poll_until`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// Whether the condition held before the deadline
    pub satisfied: bool,
    pub attempts: usize,
    pub elapsed: Duration,
}

/// Poll `condition` every `interval` until it returns `Ok(true)` or `timeout`
/// elapses. The condition runs at least once. Errors abort the poll.
pub async fn poll_until<F, Fut>(timeout: Duration, interval: Duration, mut condition: F) -> E2eResult<PollOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = E2eResult<bool>>,
{
    let start = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;
        if condition().await? {
            return Ok(PollOutcome {
                satisfied: true,
                attempts,
                elapsed: start.elapsed(),
            });
        }

        if start.elapsed() + interval > timeout {
            return Ok(PollOutcome {
                satisfied: false,
                attempts,
                elapsed: start.elapsed(),
            });
        }

        sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::E2eError;

    #[tokio::test]
    async fn test_poll_succeeds_after_retries() {
        let mut calls = 0;
        let outcome = poll_until(Duration::from_secs(1), Duration::from_millis(5), || {
            calls += 1;
            let ready = calls >= 3;
            async move { Ok::<_, E2eError>(ready) }
        })
        .await
        .unwrap();

        assert!(outcome.satisfied);
        assert_eq!(outcome.attempts, 3);
    }

    #[tokio::test]
    async fn test_poll_gives_up_at_timeout() {
        let outcome = poll_until(Duration::from_millis(30), Duration::from_millis(10), || async { Ok::<_, E2eError>(false) })
            .await
            .unwrap();

        assert!(!outcome.satisfied);
        assert!(outcome.attempts >= 1);
        assert!(outcome.elapsed < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_poll_runs_once_with_zero_timeout() {
        let outcome = poll_until(Duration::ZERO, Duration::from_millis(10), || async { Ok::<_, E2eError>(false) })
            .await
            .unwrap();

        assert_eq!(outcome.attempts, 1);
    }

    #[tokio::test]
    async fn test_poll_propagates_errors() {
        let result = poll_until(Duration::from_secs(1), Duration::from_millis(5), || async {
            Err::<bool, _>(E2eError::Timeout("probe".to_string()))
        })
        .await;

        assert!(result.is_err());
    }
}
