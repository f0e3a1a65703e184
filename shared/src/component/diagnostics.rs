use std::backtrace::{Backtrace, BacktraceStatus};

use log::{debug, warn};

use crate::component::{component_config::ComponentConfig, error::ComponentError};

cfg_if! {
    if #[cfg(feature = "trace_capture")] {
        fn capture_backtrace() -> Backtrace {
            Backtrace::force_capture()
        }
    } else {
        fn capture_backtrace() -> Backtrace {
            Backtrace::capture()
        }
    }
}

fn capture_trace(config: &ComponentConfig) -> Option<String> {
    if !config.capture_trace {
        return None;
    }
    let backtrace = capture_backtrace();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}

/// Emits a warning for a conflict found while running `operation`
pub(crate) fn warn_conflict(config: &ComponentConfig, operation: &str, error: &ComponentError) {
    let target = config.log_target.as_str();
    match capture_trace(config) {
        Some(trace) => warn!(target: target, "{}(): {}\n{}", operation, error, trace),
        None => warn!(target: target, "{}(): {}", operation, error),
    }
}

pub(crate) fn debug_rejected(config: &ComponentConfig, operation: &str, error: &ComponentError) {
    debug!(target: config.log_target.as_str(), "{}() rejected: {}", operation, error);
}
