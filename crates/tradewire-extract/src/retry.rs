use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

/// Retry-with-backoff policy: fixed attempt ceiling, doubling delay with a cap.
///
/// The sleep between attempts suspends only the current unit of work; other
/// tasks on the runtime keep running.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    /// 5 attempts, delays 1s → 2s → 4s → 8s (capped).
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(8),
        }
    }
}

/// Terminal failure: every attempt failed; carries the last error observed.
#[derive(Debug)]
pub struct Exhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

impl<E: fmt::Display> fmt::Display for Exhausted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gave up after {} attempts: {}",
            self.attempts, self.last_error
        )
    }
}

impl<E: fmt::Display + fmt::Debug> std::error::Error for Exhausted<E> {}

impl RetryPolicy {
    /// Run `op` until it succeeds or the attempt ceiling is reached.
    /// A ceiling of 0 still makes one attempt.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, Exhausted<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let mut delay = self.initial_delay;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match op().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(attempt, "succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) => {
                    warn!(attempt, max = self.max_attempts, error = %e, "attempt failed");

                    if attempt >= self.max_attempts {
                        return Err(Exhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }

                    sleep(delay).await;
                    delay = (delay * 2).min(self.max_delay);
                }
            }
        }
    }
}
