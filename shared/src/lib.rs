//! # Statekit Shared
//! Component state containers shared between statekit's client & server
//! scripting hosts.
//!
//! A component holds a flat key-value state table and can compose
//! ("inherit") the resolved state of other components into its own.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod component;
mod state;

pub use component::{
    base_component::BaseComponent,
    component::Component,
    component_config::ComponentConfig,
    component_id::ComponentId,
    error::ComponentError,
    inheritable::Inheritable,
};
pub use state::state_value::{StateTable, StateValue};
