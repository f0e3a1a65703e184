//! Conflict diagnostics are emitted as warnings tagged with the component's
//! configured log target.
//!
//! Installs its own recording logger, so it lives in a test binary of its own.

use std::sync::{Mutex, Once};

use log::{Level, Log, Metadata, Record};
use statekit_shared::{state_table, BaseComponent, Component, ComponentConfig, StateValue};
use statekit_test::TestComponentBuilder;

struct RecordingLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(log::LevelFilter::Trace);
    });
}

fn warnings_for(target: &str) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(level, record_target, _)| {
                    *level == Level::Warn && record_target == target
                })
                .map(|(_, _, message)| message.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn config_for(target: &str, capture_trace: bool) -> ComponentConfig {
    ComponentConfig {
        log_target: target.to_string(),
        capture_trace,
    }
}

fn conflicted_component(target: &str, capture_trace: bool) -> Component {
    let mut full = TestComponentBuilder::new()
        .config(config_for(target, capture_trace))
        .inherited("armor", 1)
        .build();
    full.get_raw_state_mut()
        .insert("armor".to_string(), StateValue::from(2));
    full
}

// A wholesale replace is not checked against inherited keys
fn conflicted_base(target: &str, capture_trace: bool) -> BaseComponent {
    let mut base = TestComponentBuilder::new()
        .config(config_for(target, capture_trace))
        .inherited("armor", 1)
        .build_base();
    base.set_state(state_table! { "armor" => 2 }).unwrap();
    base
}

#[test]
fn get_state_conflict_warns_with_target() {
    install_logger();
    let full = conflicted_component("diag::get_state", false);

    assert!(full.get_state().is_err());

    let warnings = warnings_for("diag::get_state");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("get_state():"));
    assert!(warnings[0].contains("'armor'"));
}

#[test]
fn reconcile_state_warns_once_per_skipped_key() {
    install_logger();
    let mut full = conflicted_component("diag::reconcile", false);

    let skipped = full
        .reconcile_state(state_table! { "armor" => 5, "hp" => 3 })
        .unwrap();

    assert_eq!(skipped.len(), 1);
    let warnings = warnings_for("diag::reconcile");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("reconcile_state():"));
}

#[test]
fn clean_operations_do_not_warn() {
    install_logger();
    let config = ComponentConfig::tagged("diag::clean");
    let mut full = TestComponentBuilder::new()
        .config(config)
        .raw("hp", 1)
        .build();

    full.set_state(state_table! { "hp" => 2 }).unwrap();
    assert!(full.get_state().is_ok());

    assert!(warnings_for("diag::clean").is_empty());
}

#[test]
fn base_get_state_conflict_warns_with_target() {
    install_logger();
    let base = conflicted_base("diag::base_get_state", false);

    assert!(base.get_state().is_err());

    let warnings = warnings_for("diag::base_get_state");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("get_state():"));
    assert!(warnings[0].contains("'armor'"));
}

#[test]
fn disabled_trace_is_never_attached() {
    install_logger();
    let full = conflicted_component("diag::no_trace", false);
    let base = conflicted_base("diag::no_trace", false);

    assert!(full.get_state().is_err());
    assert!(base.get_state().is_err());

    let warnings = warnings_for("diag::no_trace");
    assert_eq!(warnings.len(), 2);
    for warning in &warnings {
        assert_eq!(warning.lines().count(), 1, "unexpected trace in {:?}", warning);
    }
}

#[cfg(feature = "trace_capture")]
#[test]
fn enabled_trace_follows_the_warning() {
    install_logger();
    let full = conflicted_component("diag::trace", true);
    let base = conflicted_base("diag::trace", true);

    assert!(full.get_state().is_err());
    assert!(base.get_state().is_err());

    let warnings = warnings_for("diag::trace");
    assert_eq!(warnings.len(), 2);
    for warning in &warnings {
        let mut lines = warning.lines();
        assert!(lines.next().is_some_and(|line| line.starts_with("get_state():")));
        assert!(lines.next().is_some(), "no trace attached to {:?}", warning);
    }
}
