use chrono::Utc;

/// Current time as a Unix timestamp in seconds, the unit stored in `create_time`.
pub fn now_epoch_seconds() -> i64 {
    Utc::now().timestamp()
}
