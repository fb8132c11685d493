//! Reachability check for the app under test

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{E2eError, E2eResult};

const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(2);
const RETRY_INTERVAL: Duration = Duration::from_millis(250);

/// Poll `base_url` until the server answers or `timeout_duration` runs out.
///
/// Any HTTP response counts, error statuses included: the goal is to tell a
/// dead target apart from a broken page before a browser is launched.
/// Returns the number of attempts made.
pub async fn wait_until_reachable(base_url: &str, timeout_duration: Duration) -> E2eResult<usize> {
    let client = reqwest::Client::builder().timeout(ATTEMPT_TIMEOUT).build()?;

    let start = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;

        match client.get(base_url).send().await {
            Ok(resp) => {
                if !resp.status().is_success() {
                    warn!("{} answered with {}", base_url, resp.status());
                }
                info!("Target reachable at {} after {} attempt(s)", base_url, attempts);
                return Ok(attempts);
            }
            Err(e) => {
                if attempts == 1 {
                    info!("Waiting for {} to respond...", base_url);
                }
                // Connection refused is expected while the app is starting
                if !e.is_connect() {
                    warn!("Reachability check error: {}", e);
                }
            }
        }

        if start.elapsed() + RETRY_INTERVAL >= timeout_duration {
            break;
        }
        sleep(RETRY_INTERVAL).await;
    }

    Err(E2eError::TargetUnreachable {
        url: base_url.to_string(),
        attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        // Bind then drop to get a port nobody listens on
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{}", port);

        let err = wait_until_reachable(&url, Duration::from_millis(300)).await.unwrap_err();
        match err {
            E2eError::TargetUnreachable { url: reported, attempts } => {
                assert_eq!(reported, url);
                assert!(attempts >= 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
