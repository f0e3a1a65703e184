use crate::{
    component::{component_id::ComponentId, error::ComponentError, inheritable::Inheritable},
    state::state_value::{StateTable, StateValue},
};

/// The raw and inherited state tables every component variant owns
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct StateBuckets {
    pub raw: StateTable,
    pub inherited: StateTable,
}

impl StateBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep copy of the raw state with the inherited state merged over it.
    /// Fails on the first key (in sorted order) found in both buckets.
    pub fn resolve(&self) -> Result<StateTable, ComponentError> {
        let mut resolved = self.raw.clone();
        for (key, value) in &self.inherited {
            if resolved.contains_key(key) {
                return Err(ComponentError::StateConflict { key: key.clone() });
            }
            resolved.insert(key.clone(), value.clone());
        }
        Ok(resolved)
    }

    /// Pulls the resolved state of every source into the inherited bucket.
    ///
    /// Sources are processed in order and processing stops at the first
    /// failure. Nothing is committed unless every source succeeds.
    pub fn inherit(
        &mut self,
        receiver: ComponentId,
        sources: &[&dyn Inheritable],
    ) -> Result<(), ComponentError> {
        let mut staged = self.inherited.clone();

        for source in sources {
            if source.component_id() == receiver {
                return Err(ComponentError::SelfInherit { id: receiver });
            }

            for (key, value) in source.resolved_state()? {
                if self.raw.contains_key(&key) || staged.contains_key(&key) {
                    return Err(ComponentError::KeyConflict { key });
                }
                staged.insert(key, value);
            }
        }

        self.inherited = staged;
        Ok(())
    }
}

/// Unwraps a table argument, rejecting `Nil` and non-table values
pub(crate) fn table_argument(
    operation: &'static str,
    value: StateValue,
) -> Result<StateTable, ComponentError> {
    match value {
        StateValue::Table(table) => Ok(table),
        other => Err(ComponentError::invalid_table(operation, other.type_name())),
    }
}
