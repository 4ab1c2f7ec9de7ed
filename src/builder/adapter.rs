//! Builder that turns an enumeration into a state registry.

use crate::core::{EnumConstant, Scalar, StateEntity, StateValue, ValueMode};
use crate::registry::{RegistryError, StateRegistry};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Builder for constructing a [`StateRegistry`] from an ordered enumeration
/// of constants.
///
/// Each constant becomes one state, in declaration order: the id is the
/// constant's name, the value is its scalar (or the constant itself in
/// [`ValueMode::Constant`]), and the initial and final flags follow the
/// selectors, compared by constant identity ([`EnumConstant::is`]).
///
/// # Example
///
/// ```rust
/// use mindset_registry::builder::EnumerationAdapter;
/// use mindset_registry::core::{Constant, Scalar, StateValue};
///
/// let pending = Constant::new("pending", 1);
/// let completed = Constant::new("completed", 2);
///
/// let states = EnumerationAdapter::new([pending.clone(), completed.clone()])
///     .initial(pending)
///     .final_state(completed)
///     .build()?;
///
/// assert!(states.lookup("pending")?.is_initial());
/// assert!(states.lookup("completed")?.is_final());
/// assert_eq!(
///     states.lookup("completed")?.value(),
///     &StateValue::Scalar(Scalar::Int(2))
/// );
/// # Ok::<(), mindset_registry::RegistryError>(())
/// ```
pub struct EnumerationAdapter<C: EnumConstant> {
    members: Vec<C>,
    initial: Option<C>,
    finals: Vec<C>,
    value_mode: ValueMode,
}

impl<C: EnumConstant> EnumerationAdapter<C> {
    /// Create a builder over `members`, in the order they are yielded.
    pub fn new(members: impl IntoIterator<Item = C>) -> Self {
        Self {
            members: members.into_iter().collect(),
            initial: None,
            finals: Vec::new(),
            value_mode: ValueMode::default(),
        }
    }

    /// Set the initial constant (required).
    ///
    /// A constant that is not a member marks no state initial.
    pub fn initial(mut self, constant: C) -> Self {
        self.initial = Some(constant);
        self
    }

    /// Add a single final constant.
    pub fn final_state(mut self, constant: C) -> Self {
        self.finals.push(constant);
        self
    }

    /// Add a collection of final constants. `None` and `Some(c)` work too.
    pub fn final_states(mut self, constants: impl IntoIterator<Item = C>) -> Self {
        self.finals.extend(constants);
        self
    }

    /// Choose between storing scalars (default) or constants as values.
    pub fn value_mode(mut self, mode: ValueMode) -> Self {
        self.value_mode = mode;
        self
    }

    /// Build the registry.
    ///
    /// Every constant is validated before any state is built, so a failure
    /// never produces a partial registry. Names must be unique identifiers
    /// and scalars must be unique: a constant that repeats an earlier
    /// constant's scalar is rejected with [`RegistryError::DuplicateScalar`]
    /// rather than treated as an alias of it.
    pub fn build(self) -> Result<StateRegistry<C>, RegistryError> {
        let initial = self.initial.ok_or(RegistryError::MissingInitial)?;
        validate_members(&self.members)?;

        let finals = normalize(self.finals);
        if !self.members.iter().any(|member| member.is(&initial)) {
            debug!(
                initial = initial.name(),
                "Initial constant is not a member, no state marked initial"
            );
        }

        let value_mode = self.value_mode;
        let registry = self
            .members
            .into_iter()
            .map(|member| {
                let is_initial = member.is(&initial);
                let is_final = finals.iter().any(|f| f.is(&member));
                entity_for(member, value_mode).map(|e| e.with_flags(is_initial, is_final))
            })
            .collect::<Result<StateRegistry<C>, _>>()?;

        debug!(
            states = registry.len(),
            mode = ?value_mode,
            "Built state registry from enumeration"
        );
        Ok(registry)
    }
}

fn entity_for<C: EnumConstant>(
    constant: C,
    mode: ValueMode,
) -> Result<StateEntity<C>, RegistryError> {
    let entity = StateEntity::new(constant.name())?;
    let value = match mode {
        ValueMode::Scalar => StateValue::Scalar(constant.scalar()),
        ValueMode::Constant => StateValue::Constant(constant),
    };
    Ok(entity.with_value(value))
}

/// Collapse the final selectors into a set under constant identity.
fn normalize<C: EnumConstant>(constants: Vec<C>) -> Vec<C> {
    let mut set: Vec<C> = Vec::with_capacity(constants.len());
    for constant in constants {
        if !set.iter().any(|c| c.is(&constant)) {
            set.push(constant);
        }
    }
    set
}

fn validate_members<C: EnumConstant>(members: &[C]) -> Result<(), RegistryError> {
    let mut names = HashSet::with_capacity(members.len());
    let mut scalars: HashMap<Scalar, &str> = HashMap::with_capacity(members.len());

    for (position, member) in members.iter().enumerate() {
        let name = member.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyName { position });
        }
        if !is_identifier(name) {
            return Err(RegistryError::InvalidName {
                name: name.to_string(),
            });
        }
        if !names.insert(name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }

        let scalar = member.scalar();
        if let Some(first) = scalars.get(&scalar) {
            return Err(RegistryError::DuplicateScalar {
                scalar: scalar.to_string(),
                first: (*first).to_string(),
                second: name.to_string(),
            });
        }
        scalars.insert(scalar, name);
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
