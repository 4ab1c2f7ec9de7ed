//! Ordered, id-keyed collections of states.
//!
//! A [`StateRegistry`] is the node set of a machine definition. It is built
//! once, either directly from entities or through the
//! [`EnumerationAdapter`](crate::builder::EnumerationAdapter), and then read
//! by the machine assembler in insertion order.
//!
//! # Shadowed names
//!
//! [`StateRegistry::lookup`] is the name-style accessor. A state whose id is
//! also the name of a registry operation (see [`RESERVED_NAMES`]) cannot be
//! reached through it and yields [`RegistryError::Shadowed`]. Such states are
//! still stored and are reachable through [`StateRegistry::get`],
//! [`StateRegistry::get_index`], [`StateRegistry::iter`] and
//! [`StateRegistry::items`].

pub mod error;

pub use error::{ErrorKind, RegistryError};

use crate::core::{Constant, EnumConstant, StateEntity, StateValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Registry operation names that shadow state ids in [`StateRegistry::lookup`].
///
/// Covers the registry's constructors, conversions, queries and mutations,
/// plus the enumeration constructor `from_enum`.
pub const RESERVED_NAMES: &[&str] = &[
    "append",
    "contains",
    "default",
    "extend",
    "final_states",
    "find_by_value",
    "from_enum",
    "from_iter",
    "from_map",
    "get",
    "get_index",
    "ids",
    "initial_states",
    "into_iter",
    "is_empty",
    "items",
    "iter",
    "len",
    "lookup",
    "new",
    "position",
    "state",
];

/// Ordered mapping from state id to [`StateEntity`].
///
/// Insertion order is preserved and at most one entry exists per id.
/// Appending an entity whose id is already present replaces the earlier
/// entity at its original position.
///
/// # Example
///
/// ```rust
/// use mindset_registry::core::StateEntity;
/// use mindset_registry::StateRegistry;
///
/// let mut states: StateRegistry = StateRegistry::new();
/// states.append(StateEntity::new("open")?.initial());
/// states.append(StateEntity::new("closed")?.final_state());
///
/// let ids: Vec<_> = states.ids().collect();
/// assert_eq!(ids, vec!["open", "closed"]);
/// assert!(states.lookup("open")?.is_initial());
/// assert!(states.lookup("missing").is_err());
/// # Ok::<(), mindset_registry::RegistryError>(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    bound = "",
    from = "Vec<StateEntity<C>>",
    into = "Vec<StateEntity<C>>"
)]
pub struct StateRegistry<C: EnumConstant = Constant> {
    states: Vec<StateEntity<C>>,
    index: HashMap<String, usize>,
}

impl<C: EnumConstant> StateRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a registry from an ordered `id -> entity` mapping.
    ///
    /// Every key must equal its entity's id. Duplicate keys follow
    /// [`append`](Self::append) semantics. On error no registry is returned.
    pub fn from_map<I, K>(map: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, StateEntity<C>)>,
        K: Into<String>,
    {
        let mut registry = Self::new();
        for (key, entity) in map {
            let key = key.into();
            if key != entity.id() {
                return Err(RegistryError::KeyMismatch {
                    key,
                    id: entity.id().to_string(),
                });
            }
            registry.append(entity);
        }
        Ok(registry)
    }

    /// Insert `entity` keyed by its id.
    ///
    /// An existing entity with the same id is replaced in place, keeping its
    /// position in the iteration order.
    pub fn append(&mut self, entity: StateEntity<C>) {
        match self.index.get(entity.id()) {
            Some(&position) => {
                trace!(id = entity.id(), position, "Replacing state in place");
                self.states[position] = entity;
            }
            None => {
                self.index
                    .insert(entity.id().to_string(), self.states.len());
                self.states.push(entity);
            }
        }
    }

    /// Name-style lookup.
    ///
    /// Fails with [`RegistryError::NotFound`] for unknown ids and with
    /// [`RegistryError::Shadowed`] for ids listed in [`RESERVED_NAMES`].
    pub fn lookup(&self, name: &str) -> Result<&StateEntity<C>, RegistryError> {
        if RESERVED_NAMES.contains(&name) {
            return Err(RegistryError::Shadowed {
                name: name.to_string(),
            });
        }
        self.get(name).ok_or_else(|| RegistryError::NotFound {
            id: name.to_string(),
        })
    }

    /// Get a state by id. Never shadowed.
    pub fn get(&self, id: &str) -> Option<&StateEntity<C>> {
        self.index.get(id).map(|&position| &self.states[position])
    }

    /// Get the state built from `constant`, matched by the constant's name.
    pub fn state(&self, constant: &C) -> Option<&StateEntity<C>> {
        self.get(constant.name())
    }

    /// Get a state by its position in iteration order.
    pub fn get_index(&self, position: usize) -> Option<&StateEntity<C>> {
        self.states.get(position)
    }

    /// Position of `id` in iteration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate states in insertion order. Each call starts a fresh traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, StateEntity<C>> {
        self.states.iter()
    }

    /// Iterate `(id, state)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &StateEntity<C>)> + '_ {
        self.states.iter().map(|state| (state.id(), state))
    }

    /// Iterate ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter().map(StateEntity::id)
    }

    /// States marked initial. A well-formed definition has exactly one;
    /// the registry does not enforce it.
    pub fn initial_states(&self) -> impl Iterator<Item = &StateEntity<C>> + '_ {
        self.states.iter().filter(|state| state.is_initial())
    }

    pub fn final_states(&self) -> impl Iterator<Item = &StateEntity<C>> + '_ {
        self.states.iter().filter(|state| state.is_final())
    }

    /// First state carrying `value`, for reporting a machine's current value.
    pub fn find_by_value(&self, value: &StateValue<C>) -> Option<&StateEntity<C>> {
        self.states.iter().find(|state| state.value() == value)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<C: EnumConstant> Default for StateRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registries are equal when their ordered state sequences are equal.
impl<C: EnumConstant> PartialEq for StateRegistry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states
    }
}

impl<C: EnumConstant> fmt::Debug for StateRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}

impl<C: EnumConstant> FromIterator<StateEntity<C>> for StateRegistry<C> {
    fn from_iter<I: IntoIterator<Item = StateEntity<C>>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<C: EnumConstant> Extend<StateEntity<C>> for StateRegistry<C> {
    fn extend<I: IntoIterator<Item = StateEntity<C>>>(&mut self, iter: I) {
        for entity in iter {
            self.append(entity);
        }
    }
}

impl<'a, C: EnumConstant> IntoIterator for &'a StateRegistry<C> {
    type Item = &'a StateEntity<C>;
    type IntoIter = std::slice::Iter<'a, StateEntity<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<C: EnumConstant> IntoIterator for StateRegistry<C> {
    type Item = StateEntity<C>;
    type IntoIter = std::vec::IntoIter<StateEntity<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<C: EnumConstant> From<Vec<StateEntity<C>>> for StateRegistry<C> {
    fn from(states: Vec<StateEntity<C>>) -> Self {
        states.into_iter().collect()
    }
}

impl<C: EnumConstant> From<StateRegistry<C>> for Vec<StateEntity<C>> {
    fn from(registry: StateRegistry<C>) -> Self {
        registry.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scalar;

    fn state(id: &str) -> StateEntity {
        StateEntity::new(id).unwrap()
    }

    fn abc() -> StateRegistry {
        [state("A").initial(), state("B"), state("C").final_state()]
            .into_iter()
            .collect()
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: StateRegistry = StateRegistry::new();

        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let registry = abc();
        let ids: Vec<_> = registry.iter().map(|s| s.id()).collect();

        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let registry = abc();

        assert_eq!(registry.iter().count(), 3);
        assert_eq!(registry.iter().count(), 3);
        assert_eq!((&registry).into_iter().count(), 3);
    }

    #[test]
    fn items_pair_ids_with_states() {
        let registry = abc();
        let items: Vec<_> = registry.items().collect();

        assert_eq!(items.len(), 3);
        for (id, entity) in items {
            assert_eq!(id, entity.id());
        }
    }

    #[test]
    fn append_replaces_in_place() {
        let mut registry = abc();
        let replacement = state("B").with_value(Scalar::Int(42));
        registry.append(replacement.clone());

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("B"), Some(&replacement));
        assert_eq!(registry.position("B"), Some(1));
    }

    #[test]
    fn append_new_id_goes_last() {
        let mut registry = abc();
        registry.append(state("D"));

        assert_eq!(registry.position("D"), Some(3));
        assert_eq!(registry.get_index(3).map(|s| s.id()), Some("D"));
    }

    #[test]
    fn lookup_missing_is_not_found() {
        let registry = abc();
        let err = registry.lookup("missing").unwrap_err();

        assert_eq!(
            err,
            RegistryError::NotFound {
                id: "missing".to_string()
            }
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn reserved_ids_are_shadowed_in_lookup() {
        let mut registry = abc();
        registry.append(state("append"));

        let err = registry.lookup("append").unwrap_err();
        assert!(matches!(err, RegistryError::Shadowed { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert!(registry.get("append").is_some());
        assert!(registry.items().any(|(id, _)| id == "append"));
    }

    #[test]
    fn from_map_preserves_order() {
        let registry: StateRegistry =
            StateRegistry::from_map(vec![("open", state("open")), ("closed", state("closed"))])
                .unwrap();

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["open", "closed"]);
    }

    #[test]
    fn from_map_duplicate_key_keeps_first_position() {
        let registry: StateRegistry = StateRegistry::from_map(vec![
            ("open", state("open")),
            ("closed", state("closed")),
            ("open", state("open").with_value(Scalar::Int(7))),
        ])
        .unwrap();

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["open", "closed"]);
        assert_eq!(
            registry.get("open").unwrap().value(),
            &StateValue::Scalar(Scalar::Int(7))
        );
    }

    #[test]
    fn from_map_rejects_mismatched_keys() {
        let result: Result<StateRegistry, _> =
            StateRegistry::from_map(vec![("open", state("open")), ("shut", state("closed"))]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::KeyMismatch {
                key: "shut".to_string(),
                id: "closed".to_string(),
            }
        );
    }

    #[test]
    fn equality_depends_on_order() {
        let forward = abc();
        let same = abc();
        let reversed: StateRegistry = abc().into_iter().rev().collect();

        assert_eq!(forward, same);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn flag_helpers() {
        let registry = abc();

        let initial: Vec<_> = registry.initial_states().map(|s| s.id()).collect();
        let finals: Vec<_> = registry.final_states().map(|s| s.id()).collect();
        assert_eq!(initial, vec!["A"]);
        assert_eq!(finals, vec!["C"]);
    }

    #[test]
    fn find_by_value_returns_first_match() {
        let registry = abc();
        let value = StateValue::Scalar(Scalar::from("B"));

        assert_eq!(registry.find_by_value(&value).map(|s| s.id()), Some("B"));
        assert!(registry
            .find_by_value(&StateValue::Scalar(Scalar::Int(9)))
            .is_none());
    }

    #[test]
    fn debug_renders_as_list() {
        let registry: StateRegistry = StateRegistry::new();
        assert_eq!(format!("{registry:?}"), "[]");
    }

    #[test]
    fn debug_lists_states_in_order() {
        let registry = abc();
        let rendered = format!("{registry:?}");
        let expected = format!(
            "[{:?}, {:?}, {:?}]",
            registry.get("A").unwrap(),
            registry.get("B").unwrap(),
            registry.get("C").unwrap()
        );

        assert_eq!(rendered, expected);
        assert!(rendered.starts_with("[StateEntity { id: \"A\""));
    }

    #[test]
    fn deserializing_empty_id_is_rejected() {
        let json = r#"[{"id":"","name":"","value":{"Scalar":""},"initial":false,"final":false}]"#;
        let result: Result<StateRegistry, _> = serde_json::from_str(json);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("State id must not be empty"));
    }

    #[test]
    fn registry_serializes_as_ordered_sequence() {
        let registry = abc();
        let json = serde_json::to_string(&registry).unwrap();
        let deserialized: StateRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(registry, deserialized);
        assert_eq!(deserialized.position("C"), Some(2));
    }
}
