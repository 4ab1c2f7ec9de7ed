//! Immutable state descriptions.

use super::constant::{Constant, EnumConstant};
use super::value::{Scalar, StateValue};
use crate::registry::RegistryError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A named node of a state machine definition.
///
/// Entities are built once with [`StateEntity::new`] and the consuming
/// modifiers, then only read. The value defaults to the id as a string
/// scalar and the display name is derived from the id.
///
/// # Example
///
/// ```rust
/// use mindset_registry::core::{Scalar, StateEntity, StateValue};
///
/// let open: StateEntity = StateEntity::new("open")?.initial();
/// assert_eq!(open.id(), "open");
/// assert_eq!(open.name(), "Open");
/// assert_eq!(open.value(), &StateValue::Scalar(Scalar::from("open")));
/// assert!(open.is_initial());
/// assert!(!open.is_final());
/// # Ok::<(), mindset_registry::RegistryError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct StateEntity<C: EnumConstant = Constant> {
    id: String,
    name: String,
    value: StateValue<C>,
    initial: bool,
    #[serde(rename = "final")]
    is_final: bool,
}

/// Wire shape of [`StateEntity`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(bound = "")]
struct StateEntityFields<C: EnumConstant> {
    id: String,
    name: String,
    value: StateValue<C>,
    initial: bool,
    #[serde(rename = "final")]
    is_final: bool,
}

impl<'de, C: EnumConstant> Deserialize<'de> for StateEntity<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = StateEntityFields::<C>::deserialize(deserializer)?;
        if fields.id.is_empty() {
            return Err(D::Error::custom(RegistryError::EmptyId));
        }

        Ok(Self {
            id: fields.id,
            name: fields.name,
            value: fields.value,
            initial: fields.initial,
            is_final: fields.is_final,
        })
    }
}

impl<C: EnumConstant> StateEntity<C> {
    /// Create a non-initial, non-final state whose value is its id.
    ///
    /// Fails with [`RegistryError::EmptyId`] for an empty id.
    pub fn new(id: impl Into<String>) -> Result<Self, RegistryError> {
        let id = id.into();
        if id.is_empty() {
            return Err(RegistryError::EmptyId);
        }

        Ok(Self {
            name: display_name(&id),
            value: StateValue::Scalar(Scalar::Str(id.clone())),
            id,
            initial: false,
            is_final: false,
        })
    }

    /// Replace the value.
    pub fn with_value(mut self, value: impl Into<StateValue<C>>) -> Self {
        self.value = value.into();
        self
    }

    /// Replace the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark as the initial state.
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }

    /// Mark as a final state.
    pub fn final_state(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub(crate) fn with_flags(mut self, initial: bool, is_final: bool) -> Self {
        self.initial = initial;
        self.is_final = is_final;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &StateValue<C> {
        &self.value
    }

    pub fn is_initial(&self) -> bool {
        self.initial
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// `waiting_payment` -> `Waiting payment`
fn display_name(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
