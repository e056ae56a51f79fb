use std::time::Duration;

/// Wait for `duration` using the browser's `setTimeout`
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
