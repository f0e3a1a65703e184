use std::default::Default;

/// Contains Config properties which will be used by a Component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentConfig {
    /// Log target that diagnostics emitted by the Component are tagged with,
    /// so a host can route or filter them per call site
    pub log_target: String,
    /// Determines whether conflict warnings carry a captured call-stack trace.
    /// Without the `trace_capture` feature the trace honors `RUST_BACKTRACE`.
    pub capture_trace: bool,
}

impl ComponentConfig {
    pub fn tagged(log_target: &str) -> Self {
        Self {
            log_target: log_target.to_string(),
            ..Self::default()
        }
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            log_target: "statekit::component".to_string(),
            capture_trace: true,
        }
    }
}
