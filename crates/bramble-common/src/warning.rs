//! Engine warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the HTML, CSS, and DOM components to report unsupported features
//! and recoverable parse errors. Installing a logger (for example
//! `env_logger` in the CLI) is left to the binary.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already reported (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature or recoverable problem.
///
/// Reported once per unique `(component, message)` pair at `warn` level,
/// with `component` used as the log target.
///
/// # Example
/// ```ignore
/// warn_once("HTML Parser", "script execution is not supported");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        log::warn!(target: component, "[Bramble {component}] {message}");
    }
}

/// Report a recoverable parse error.
///
/// Parse errors are expected on real-world input, so they are not
/// de-duplicated and are logged at `debug` level only.
pub fn log_parse_error(component: &str, code: &str, position: usize) {
    log::debug!(target: component, "parse error `{code}` at position {position}");
}

/// Whether `warn_once` has already reported this message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before parsing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
