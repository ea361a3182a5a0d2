//! Timestamp source
//!
//! Commits carry a formatted local timestamp. Tests pin time through the
//! `MINIGIT_TIMESTAMP` environment variable; an override that does not parse
//! as a valid timestamp is ignored rather than propagated into commits.

use chrono::NaiveDateTime;

/// Format used everywhere a timestamp is stored or displayed
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment override for deterministic commit timestamps
pub const TIMESTAMP_ENV: &str = "MINIGIT_TIMESTAMP";

/// Local-time clock
#[derive(Debug, Default)]
pub struct Clock;

impl Clock {
    /// The current local time, formatted `YYYY-MM-DD HH:MM:SS`
    pub fn now(&self) -> String {
        if let Ok(pinned) = std::env::var(TIMESTAMP_ENV)
            && NaiveDateTime::parse_from_str(&pinned, TIMESTAMP_FORMAT).is_ok()
        {
            return pinned;
        }

        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
