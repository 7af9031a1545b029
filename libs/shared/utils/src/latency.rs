use std::time::Duration;
use tracing::debug;

use shared_config::AppConfig;

/// Sleeps for the configured artificial latency. A zero setting returns immediately.
pub async fn simulate_latency(config: &AppConfig, action: &str) {
    if config.simulated_latency_ms == 0 {
        return;
    }

    debug!("Simulating {}ms latency for {}", config.simulated_latency_ms, action);
    tokio::time::sleep(Duration::from_millis(config.simulated_latency_ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_configured_latency() {
        let config = AppConfig {
            simulated_latency_ms: 1500,
            ..AppConfig::default()
        };

        let started = Instant::now();
        simulate_latency(&config, "join").await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_latency_is_a_no_op() {
        let config = AppConfig::default();

        let started = Instant::now();
        simulate_latency(&config, "schedule").await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
