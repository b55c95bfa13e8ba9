//! Skip decision for request logging.
//!
//! # Design Decisions
//! - Health-check paths are always exempt; configuration cannot override
//! - The configured rule matches by literal equality, never by prefix
//! - Pure function of (path, rule): same input, same decision

/// Paths always exempt from logging, regardless of configuration.
const HEALTH_CHECK_PATHS: &[&str] = &["/health/live", "/health/ready"];

/// Returns true when logging is suppressed for this request path.
pub fn should_skip(path: &str, rule: Option<&str>) -> bool {
    if HEALTH_CHECK_PATHS.contains(&path) {
        return true;
    }
    match rule {
        Some(rule) => path == rule,
        None => false,
    }
}
