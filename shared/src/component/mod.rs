pub mod base_component;
#[allow(clippy::module_inception)]
pub mod component;
pub mod component_config;
pub mod component_id;
pub mod error;
pub mod inheritable;

mod diagnostics;
mod state_buckets;
