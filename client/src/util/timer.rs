//! Async delays for debounced inputs.

use std::time::Duration;

/// Resolve after `delay` in the browser; immediately elsewhere.
pub async fn sleep(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
