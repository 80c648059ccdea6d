//! Fixed-count retry with a constant pause.

use std::future::Future;
use std::time::Duration;

use log::warn;

use crate::error::Result;

/// Run `op` up to `attempts` times (at least once), sleeping `delay` after
/// each failure except the last. Returns the last error.
pub(crate) async fn retry_fixed<T, F, Fut>(
    attempts: u32,
    delay: Duration,
    what: &str,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                warn!("{what}: attempt {attempt}/{attempts} failed: {e}");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                warn!("{what}: giving up after {attempts} attempt(s): {e}");
                return Err(e);
            }
        }
    }
}
