use crate::{
    component::{component_id::ComponentId, error::ComponentError},
    state::state_value::StateTable,
};

/// A component whose resolved state can be composed into another component
/// through `inherit()`.
///
/// Only pure components implement this, so a full `Component` can never be
/// passed as an inheritance source.
pub trait Inheritable {
    /// Identity used to reject self-inheritance
    fn component_id(&self) -> ComponentId;

    /// A fresh copy of the merged raw and inherited state
    fn resolved_state(&self) -> Result<StateTable, ComponentError>;
}
