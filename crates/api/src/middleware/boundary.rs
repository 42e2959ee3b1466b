//! Async error boundary for data-access steps.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::error::{AppError, AppResult};

/// Run one suspending chain step and funnel any failure into [`AppError`].
///
/// Step errors are converted with `Into<AppError>`; a panic inside the step is
/// caught and becomes [`AppError::InternalError`], so it reaches the shared
/// JSON error response instead of tearing down the connection. `step` names
/// the failing step in the log.
pub async fn boundary<T, E, F>(step: &'static str, fut: F) -> AppResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            let err = err.into();
            tracing::debug!(step, error = %err, "Chain step failed");
            Err(err)
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            tracing::error!(step, panic = %message, "Chain step panicked");
            Err(AppError::InternalError(format!(
                "step `{step}` panicked: {message}"
            )))
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
