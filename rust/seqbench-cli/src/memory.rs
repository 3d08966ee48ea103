//! Resident set size from `/proc/self/status`.
//!
//! Both readers return `None` on non-Linux targets or when the file cannot
//! be parsed.

#[cfg(target_os = "linux")]
use std::fs;

/// Peak resident set size in kB (`VmHWM`).
pub fn peak_rss_kb() -> Option<u64> {
    status_field("VmHWM:")
}

/// Current resident set size in kB (`VmRSS`).
pub fn current_rss_kb() -> Option<u64> {
    status_field("VmRSS:")
}

#[cfg(target_os = "linux")]
fn status_field(key: &str) -> Option<u64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    parse_status_field(&status, key)
}

#[cfg(not(target_os = "linux"))]
fn status_field(_key: &str) -> Option<u64> {
    None
}

// Format: "VmHWM:   123456 kB"
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_status_field(status: &str, key: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with(key))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse::<u64>().ok())
}
