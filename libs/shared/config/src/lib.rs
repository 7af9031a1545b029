use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub meeting_base_url: String,
    pub join_window_before_minutes: i64,
    pub join_window_after_minutes: i64,
    pub clinic_utc_offset_minutes: i32,
    pub simulated_latency_ms: u64,
    pub header_consolidation_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            meeting_base_url: "https://zoom.us".to_string(),
            join_window_before_minutes: 15,
            join_window_after_minutes: 30,
            clinic_utc_offset_minutes: 0,
            simulated_latency_ms: 0,
            header_consolidation_delay_ms: 500,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            meeting_base_url: env::var("MEETING_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("MEETING_BASE_URL not set, using default");
                    defaults.meeting_base_url.clone()
                }),
            join_window_before_minutes: parse_var(
                "JOIN_WINDOW_BEFORE_MINUTES",
                defaults.join_window_before_minutes,
            ),
            join_window_after_minutes: parse_var(
                "JOIN_WINDOW_AFTER_MINUTES",
                defaults.join_window_after_minutes,
            ),
            clinic_utc_offset_minutes: parse_var(
                "CLINIC_UTC_OFFSET_MINUTES",
                defaults.clinic_utc_offset_minutes,
            ),
            simulated_latency_ms: parse_var("SIMULATED_LATENCY_MS", defaults.simulated_latency_ms),
            header_consolidation_delay_ms: parse_var(
                "HEADER_CONSOLIDATION_DELAY_MS",
                defaults.header_consolidation_delay_ms,
            ),
        };

        if !config.is_join_window_valid() {
            warn!(
                "Join window offsets are negative (before={}, after={}), joins will never be allowed",
                config.join_window_before_minutes, config.join_window_after_minutes
            );
        }

        config
    }

    pub fn is_join_window_valid(&self) -> bool {
        self.join_window_before_minutes >= 0 && self.join_window_after_minutes >= 0
    }

    /// Seconds east of UTC used to interpret appointment date + time-of-day pairs.
    pub fn clinic_utc_offset_seconds(&self) -> i32 {
        self.clinic_utc_offset_minutes.checked_mul(60).unwrap_or_else(|| {
            warn!(
                "CLINIC_UTC_OFFSET_MINUTES={} is out of range, using UTC",
                self.clinic_utc_offset_minutes
            );
            0
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
