//! Cooperative cancellation of store calls
//!
//! A cancelled call drops the in-flight store future. Mutations the store has
//! already committed are not undone.

use keylock_domain::error::{Error, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Run `future` unless `cancel` fires first
///
/// The store branch is polled first, so a result that is already available
/// when cancellation is observed is returned as-is.
pub async fn run_cancellable<F, T>(
    operation: &'static str,
    cancel: &CancellationToken,
    future: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if cancel.is_cancelled() {
        return Err(Error::cancelled(operation));
    }

    tokio::select! {
        biased;
        result = future => result,
        () = cancel.cancelled() => {
            debug!(operation, "store call cancelled before completion");
            Err(Error::cancelled(operation))
        }
    }
}
