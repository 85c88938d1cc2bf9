//! Tokenizer warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times,
//! e.g. one warning per unterminated tag position rather than one per retry.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set intact, so keep using it.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a recoverable problem (prints once per unique message)
///
/// # Example
/// ```
/// use htmlp_common::warning::{has_warned, warn_once};
///
/// warn_once("Doc", "unterminated tag at byte 12");
/// assert!(has_warned("Doc", "unterminated tag at byte 12"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[htmlp {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if the given warning has been reported since the last
/// [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call when starting a new document)
pub fn clear_warnings() {
    let mut guard = warned();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
