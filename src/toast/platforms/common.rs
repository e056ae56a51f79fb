use futures_timer::Delay;
use std::time::Duration;

/// Wait for `duration` on native targets
pub async fn sleep(duration: Duration) {
    Delay::new(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn sleep_waits_at_least_the_duration() {
        let start = Instant::now();
        futures::executor::block_on(sleep(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
