use crate::{
    component::{
        base_component::BaseComponent,
        component_config::ComponentConfig,
        component_id::ComponentId,
        diagnostics::{debug_rejected, warn_conflict},
        error::ComponentError,
        inheritable::Inheritable,
        state_buckets::{table_argument, StateBuckets},
    },
    state::state_value::{StateTable, StateValue},
};

/// The full component, built from a snapshot of a [`BaseComponent`].
///
/// Adds partial updates and reconciliation on top of the pure component's
/// replace/inherit/resolve operations. Every write checks which bucket a key
/// lives in, so inherited keys are never shadowed by a raw copy.
///
/// A full Component cannot itself be an inheritance source.
#[derive(Clone, Debug)]
pub struct Component {
    id: ComponentId,
    config: ComponentConfig,
    buckets: StateBuckets,
}

impl Component {
    /// Snapshot both buckets of `base`. The two components are independent
    /// afterwards.
    pub fn new(base: &BaseComponent) -> Self {
        Self {
            id: ComponentId::generate(),
            config: base.config().clone(),
            buckets: base.buckets().clone(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    /// Replace the raw state wholesale
    pub fn set_raw_state<V: Into<StateValue>>(&mut self, state: V) -> Result<(), ComponentError> {
        let table = table_argument("set_raw_state", state.into())
            .inspect_err(|error| debug_rejected(&self.config, "set_raw_state", error))?;
        self.buckets.raw = table;
        Ok(())
    }

    /// Assign each key of `state` to whichever bucket already holds it, or
    /// to the raw bucket if neither does.
    ///
    /// Keys are applied in sorted order. A key held by both buckets stops
    /// processing with `ComponentError::StateConflict`; keys before it stay
    /// applied.
    pub fn set_state<V: Into<StateValue>>(&mut self, state: V) -> Result<(), ComponentError> {
        let table = table_argument("set_state", state.into())
            .inspect_err(|error| debug_rejected(&self.config, "set_state", error))?;

        for (key, value) in table {
            self.assign(key, value)
                .inspect_err(|error| debug_rejected(&self.config, "set_state", error))?;
        }
        Ok(())
    }

    fn assign(&mut self, key: String, value: StateValue) -> Result<(), ComponentError> {
        let in_raw = self.buckets.raw.contains_key(&key);
        let in_inherited = self.buckets.inherited.contains_key(&key);

        match (in_raw, in_inherited) {
            (true, true) => return Err(ComponentError::StateConflict { key }),
            (false, true) => {
                self.buckets.inherited.insert(key, value);
            }
            _ => {
                self.buckets.raw.insert(key, value);
            }
        }
        Ok(())
    }

    /// Overlay every key of `state` onto a copy of the raw state and commit
    /// it. Existing keys absent from `state` are kept.
    pub fn reconcile_raw_state<V: Into<StateValue>>(
        &mut self,
        state: V,
    ) -> Result<(), ComponentError> {
        let table = table_argument("reconcile_raw_state", state.into())
            .inspect_err(|error| debug_rejected(&self.config, "reconcile_raw_state", error))?;

        let mut raw = self.buckets.raw.clone();
        raw.extend(table);
        self.buckets.raw = raw;
        Ok(())
    }

    /// Merge `state` key by key into copies of both buckets, then commit both.
    ///
    /// A key held by both buckets is reported with a warning and skipped, and
    /// the remaining keys are still applied. Returns the skipped keys in
    /// sorted order; an empty list means every key was applied.
    pub fn reconcile_state<V: Into<StateValue>>(
        &mut self,
        state: V,
    ) -> Result<Vec<String>, ComponentError> {
        let table = table_argument("reconcile_state", state.into())
            .inspect_err(|error| debug_rejected(&self.config, "reconcile_state", error))?;

        let mut raw = self.buckets.raw.clone();
        let mut inherited = self.buckets.inherited.clone();
        let mut skipped = Vec::new();

        for (key, value) in table {
            match (raw.contains_key(&key), inherited.contains_key(&key)) {
                (true, true) => {
                    skipped.push(key.clone());
                    warn_conflict(
                        &self.config,
                        "reconcile_state",
                        &ComponentError::StateConflict { key },
                    );
                }
                (false, true) => {
                    inherited.insert(key, value);
                }
                _ => {
                    raw.insert(key, value);
                }
            }
        }

        self.buckets.raw = raw;
        self.buckets.inherited = inherited;
        Ok(skipped)
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

    /// The live raw bucket, without copying
    pub fn get_raw_state(&self) -> &StateTable {
        &self.buckets.raw
    }

    /// Mutable access to the live raw bucket. Writes here skip every
    /// provenance check, so they can introduce conflicts with inherited keys.
    pub fn get_raw_state_mut(&mut self) -> &mut StateTable {
        &mut self.buckets.raw
    }

    pub fn inherited_state(&self) -> &StateTable {
        &self.buckets.inherited
    }

    /// Compose the resolved state of each pure source into the inherited
    /// bucket. Same contract as [`BaseComponent::inherit`].
    pub fn inherit(&mut self, sources: &[&dyn Inheritable]) -> Result<(), ComponentError> {
        self.buckets
            .inherit(self.id, sources)
            .inspect_err(|error| debug_rejected(&self.config, "inherit", error))
    }
}

impl From<BaseComponent> for Component {
    /// Take over the buckets of `base` without copying them
    fn from(base: BaseComponent) -> Self {
        let (config, buckets) = base.into_parts();
        Self {
            id: ComponentId::generate(),
            config,
            buckets,
        }
    }
}
