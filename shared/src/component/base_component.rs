use crate::{
    component::{
        component_config::ComponentConfig,
        component_id::ComponentId,
        diagnostics::{debug_rejected, warn_conflict},
        error::ComponentError,
        inheritable::Inheritable,
        state_buckets::{table_argument, StateBuckets},
    },
    state::state_value::{StateTable, StateValue},
};

/// The pure component: a raw state table that is replaced wholesale, plus
/// an inherited state table filled by composing other pure components.
///
/// A clone stays an alias of its source for inheritance purposes: it keeps
/// the source's id, so inheriting from a clone is rejected as
/// self-inheritance even after the two have diverged. Use [`fork`] for an
/// independent copy with an id of its own.
///
/// [`fork`]: BaseComponent::fork
#[derive(Clone, Debug)]
pub struct BaseComponent {
    id: ComponentId,
    config: ComponentConfig,
    buckets: StateBuckets,
}

impl BaseComponent {
    /// Create a new BaseComponent with both buckets empty
    pub fn new() -> Self {
        Self::with_config(ComponentConfig::default())
    }

    pub fn with_config(config: ComponentConfig) -> Self {
        Self {
            id: ComponentId::generate(),
            config,
            buckets: StateBuckets::new(),
        }
    }

    /// Copy both buckets and the config into a new component with a fresh id
    pub fn fork(&self) -> Self {
        Self {
            id: ComponentId::generate(),
            config: self.config.clone(),
            buckets: self.buckets.clone(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    /// Replace the raw state wholesale. Inherited state is left as is.
    pub fn set_state<V: Into<StateValue>>(&mut self, state: V) -> Result<(), ComponentError> {
        let table = table_argument("set_state", state.into())
            .inspect_err(|error| debug_rejected(&self.config, "set_state", error))?;
        self.buckets.raw = table;
        Ok(())
    }

    /// Returns a fresh copy of the raw state merged with the inherited state.
    ///
    /// Returns `ComponentError::StateConflict` if a key is held by both
    /// buckets, after emitting a warning.
    pub fn get_state(&self) -> Result<StateTable, ComponentError> {
        self.buckets
            .resolve()
            .inspect_err(|error| warn_conflict(&self.config, "get_state", error))
    }

    /// Compose the resolved state of each source into the inherited bucket.
    ///
    /// Sources are processed in order, stopping at the first that fails.
    /// A failed call leaves the component unchanged.
    pub fn inherit(&mut self, sources: &[&dyn Inheritable]) -> Result<(), ComponentError> {
        self.buckets
            .inherit(self.id, sources)
            .inspect_err(|error| debug_rejected(&self.config, "inherit", error))
    }

    pub fn raw_state(&self) -> &StateTable {
        &self.buckets.raw
    }

    pub fn inherited_state(&self) -> &StateTable {
        &self.buckets.inherited
    }

    pub(crate) fn into_parts(self) -> (ComponentConfig, StateBuckets) {
        (self.config, self.buckets)
    }

    pub(crate) fn buckets(&self) -> &StateBuckets {
        &self.buckets
    }
}

impl Default for BaseComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Inheritable for BaseComponent {
    fn component_id(&self) -> ComponentId {
        self.id
    }

    fn resolved_state(&self) -> Result<StateTable, ComponentError> {
        self.get_state()
    }
}
