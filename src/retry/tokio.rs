use std::future::Future;

use tokio::time::sleep;

use super::{Retry, RetryConfig};

impl<S> Retry<S> {
    /// Async version of [`run`](Retry::run).
    ///
    /// Attempts follow the same rules, but the delay is awaited with
    /// [`tokio::time::sleep`] instead of going through the sleeper.
    pub async fn run_async<T, E, O, F>(&self, mut work: O) -> Result<T, E>
    where
        O: FnMut() -> F,
        F: Future<Output = Result<T, E>>,
    {
        let RetryConfig { retries, delay } = self.config;

        for attempt in 1..=retries {
            match work().await {
                Ok(value) => {
                    tracing::trace!(attempt, "attempt succeeded");

                    return Ok(value);
                }
                Err(_) => {
                    tracing::debug!(
                        attempt,
                        remaining = retries - attempt + 1,
                        "attempt failed, retrying"
                    );

                    if !delay.is_zero() {
                        sleep(delay).await;
                    }
                }
            }
        }

        tracing::debug!(attempt = retries + 1, "running final attempt");

        work().await
    }
}
