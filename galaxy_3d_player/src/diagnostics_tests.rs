//! Unit tests for the Diagnostics logger registry
//!
//! IMPORTANT: LOGGER is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::galaxy3d::Diagnostics;
use crate::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Entries logged by this module only
///
/// Unit tests elsewhere in the crate may log concurrently through the
/// same global registry.
fn captured(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries.lock().unwrap()
        .iter()
        .filter(|e| e.source == "galaxy3d::Test")
        .cloned()
        .collect()
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_log_reaches_custom_logger() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    Diagnostics::log(LogSeverity::Info, "galaxy3d::Test", "hello".to_string());

    {
        let captured = captured(&entries);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "galaxy3d::Test");
        assert_eq!(captured[0].message, "hello");
        assert!(captured[0].file.is_none());
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    Diagnostics::log_detailed(
        LogSeverity::Error,
        "galaxy3d::Test",
        "boom".to_string(),
        "player.rs",
        12,
    );

    {
        let captured = captured(&entries);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("player.rs"));
        assert_eq!(captured[0].line, Some(12));
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_registry() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    crate::g3d_trace!("galaxy3d::Test", "t {}", 1);
    crate::g3d_debug!("galaxy3d::Test", "d {}", 2);
    crate::g3d_info!("galaxy3d::Test", "i {}", 3);
    crate::g3d_warn!("galaxy3d::Test", "w {}", 4);
    crate::g3d_error!("galaxy3d::Test", "e {}", 5);

    {
        let captured = captured(&entries);
        let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![
                LogSeverity::Trace,
                LogSeverity::Debug,
                LogSeverity::Info,
                LogSeverity::Warn,
                LogSeverity::Error,
            ]
        );
        assert_eq!(captured[2].message, "i 3");
        // Only errors record the call site
        assert!(captured[3].file.is_none());
        assert!(captured[4].file.unwrap().ends_with("diagnostics_tests.rs"));
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);
    Diagnostics::reset_logger();

    Diagnostics::log(LogSeverity::Info, "galaxy3d::Test", "to console".to_string());

    assert!(captured(&entries).is_empty());
}

#[test]
#[serial]
fn test_err_macro_logs_and_returns_error() {
    use crate::galaxy3d::Error;

    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    let err = crate::g3d_err!("galaxy3d::Test", Error::InvalidConfig("friction".to_string()));

    assert_eq!(err, Error::InvalidConfig("friction".to_string()));
    {
        let captured = captured(&entries);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert_eq!(captured[0].message, "Invalid config: friction");
    }

    Diagnostics::reset_logger();
}
