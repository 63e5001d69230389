use std::{env, time::Duration};

// Client runtime settings resolved from the environment.

pub fn api_base_url() -> String {
    env::var("AUTH_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("AUTH_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

pub fn connectivity_probe_addr() -> String {
    env::var("CONNECTIVITY_PROBE_ADDR").unwrap_or_else(|_| "1.1.1.1:53".to_string())
}

pub fn connectivity_probe_timeout() -> Duration {
    let millis = env::var("CONNECTIVITY_PROBE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1_500);
    Duration::from_millis(millis)
}

// One pending unauthorized event at most; a newer one replaces it.
pub const UNAUTHORIZED_CHANNEL_CAPACITY: usize = 1;

// Password length bounds enforced at the input fields.
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 20;
