//! Gateway timestamp format.
//!
//! The gateway exchanges local times as `"HH:mm:SS dd.MM.yyyy"` strings, both
//! in requests (`agentTime`, `limitTime`) and notifications (`paymentDate`).
//! Signing treats them as opaque text; these helpers only build and read them.

use chrono::{Local, NaiveDateTime};

/// `chrono` pattern for the gateway timestamp.
pub const AGENT_TIME_FORMAT: &str = "%H:%M:%S %d.%m.%Y";

/// Renders `time` as a gateway timestamp.
pub fn format_agent_time(time: &NaiveDateTime) -> String {
    time.format(AGENT_TIME_FORMAT).to_string()
}

/// Current local time as a gateway timestamp.
pub fn agent_time_now() -> String {
    format_agent_time(&Local::now().naive_local())
}

/// Reads a gateway timestamp. Returns `None` if it is not in the gateway format.
pub fn parse_agent_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), AGENT_TIME_FORMAT).ok()
}
