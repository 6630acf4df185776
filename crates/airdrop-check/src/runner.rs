//! Windowed batch execution.
//!
//! Inputs are processed in fixed-size windows: every wallet in a window
//! runs concurrently, the runner waits for the whole window (a barrier),
//! then pauses before starting the next one. The pause is a throttle for
//! the remote service, not a correctness requirement. Results are placed
//! at the index of their input line, so output order always matches
//! input order.

use std::future::Future;
use std::time::Duration;

use futures::future;

use crate::report::WalletCheckResult;

/// Wallets checked concurrently per window.
pub const WINDOW_SIZE: usize = 5;

/// Pause between windows (skipped after the last one).
pub const WINDOW_PAUSE: Duration = Duration::from_secs(1);

/// Batch pacing knobs, overridable in tests.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub window_size: usize,
    pub pause: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            pause: WINDOW_PAUSE,
        }
    }
}

/// Drive `check` over every input, windowed and paced.
///
/// `check` receives the 1-based input line number and the raw line; it
/// must be infallible — per-wallet failures are its job to convert into
/// an `Error` result, so one bad wallet never disturbs its siblings.
pub async fn run_windows<F, Fut>(
    inputs: Vec<String>,
    options: &BatchOptions,
    check: F,
) -> Vec<WalletCheckResult>
where
    F: Fn(usize, String) -> Fut,
    Fut: Future<Output = WalletCheckResult>,
{
    let total = inputs.len();
    let window_size = options.window_size.max(1);

    let mut results = Vec::with_capacity(total);
    let mut lines = inputs.into_iter().enumerate();

    loop {
        let window: Vec<(usize, String)> = lines.by_ref().take(window_size).collect();
        if window.is_empty() {
            break;
        }

        let pipelines: Vec<Fut> = window
            .into_iter()
            .map(|(index, raw)| check(index + 1, raw))
            .collect();

        // join_all yields outputs in the order the futures were given,
        // whatever order they complete in.
        let mut window_results = future::join_all(pipelines).await;
        results.append(&mut window_results);

        if results.len() < total {
            tokio::time::sleep(options.pause).await;
        }
    }

    results
}
