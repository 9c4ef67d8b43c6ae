use rand::Rng;
use std::time::Duration;

/// `base_ms` plus a random extra of at most `jitter_ms`, saturating at
/// `u64::MAX` milliseconds.
pub fn jittered_delay(base_ms: u64, jitter_ms: u64) -> Duration {
    let jitter = rand::rng().random_range(0..=jitter_ms);
    Duration::from_millis(base_ms.saturating_add(jitter))
}

/// Sleeps for `base_ms` plus a random extra of at most `jitter_ms`.
pub async fn sleep_with_jitter(base_ms: u64, jitter_ms: u64) {
    tokio::time::sleep(jittered_delay(base_ms, jitter_ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn zero_jitter_sleeps_exactly_base() {
        let started = Instant::now();
        sleep_with_jitter(250, 0).await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(250));
        assert!(elapsed < Duration::from_millis(260));
    }

    #[test]
    fn large_delays_saturate_instead_of_overflowing() {
        assert_eq!(jittered_delay(u64::MAX, u64::MAX), Duration::from_millis(u64::MAX));
        assert_eq!(jittered_delay(u64::MAX - 1, 0), Duration::from_millis(u64::MAX - 1));
    }

    #[test]
    fn jitter_is_bounded() {
        for _ in 0..100 {
            let delay = jittered_delay(100, 10);
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(110));
        }
    }
}
