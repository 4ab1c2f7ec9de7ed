//! Construction of state registries from enumerations.
//!
//! [`EnumerationAdapter`] is the fluent builder. [`from_enum`] and
//! [`from_constants`] cover the common cases in one call, and
//! [`state_enum!`](crate::state_enum) declares a statically known
//! enumeration.

pub mod adapter;
pub mod macros;

pub use adapter::EnumerationAdapter;

use crate::core::{EnumConstant, StateEnum, ValueMode};
use crate::registry::{RegistryError, StateRegistry};

/// Build a registry from a statically known enumeration.
///
/// `finals` accepts a single constant wrapped in `Some` or an array,
/// any collection, or `None`.
///
/// # Example
///
/// ```
/// use mindset_registry::builder::from_enum;
/// use mindset_registry::core::{Scalar, StateValue, ValueMode};
/// use mindset_registry::state_enum;
///
/// state_enum! {
///     enum Status {
///         Pending = 1,
///         Completed = 2,
///     }
/// }
///
/// let states = from_enum(Status::Pending, Some(Status::Completed), ValueMode::Scalar)?;
/// assert!(states.lookup("Pending")?.is_initial());
/// assert_eq!(states.lookup("Completed")?.value(), &StateValue::Scalar(Scalar::Int(2)));
///
/// let states = from_enum(Status::Pending, None, ValueMode::Constant)?;
/// assert_eq!(states.state(&Status::Completed).unwrap().value().as_constant(), Some(&Status::Completed));
/// # Ok::<(), mindset_registry::RegistryError>(())
/// ```
pub fn from_enum<E: StateEnum>(
    initial: E,
    finals: impl IntoIterator<Item = E>,
    value_mode: ValueMode,
) -> Result<StateRegistry<E>, RegistryError> {
    from_constants(E::members(), initial, finals, value_mode)
}

/// Build a registry from an explicit ordered list of constants.
pub fn from_constants<C: EnumConstant>(
    members: impl IntoIterator<Item = C>,
    initial: C,
    finals: impl IntoIterator<Item = C>,
    value_mode: ValueMode,
) -> Result<StateRegistry<C>, RegistryError> {
    EnumerationAdapter::new(members)
        .initial(initial)
        .final_states(finals)
        .value_mode(value_mode)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Constant, Scalar, StateValue};
    use crate::state_enum;

    state_enum! {
        enum TestStatus {
            Pending = 1,
            Running = 2,
            Complete = 3,
        }
    }

    #[test]
    fn from_enum_marks_initial_and_final() {
        let registry = from_enum(
            TestStatus::Pending,
            [TestStatus::Complete],
            ValueMode::Scalar,
        )
        .unwrap();

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["Pending", "Running", "Complete"]);
        assert!(registry.state(&TestStatus::Pending).unwrap().is_initial());
        assert!(registry.state(&TestStatus::Complete).unwrap().is_final());
        assert!(!registry.state(&TestStatus::Running).unwrap().is_final());
    }

    #[test]
    fn from_enum_constant_mode_recovers_constant() {
        let registry = from_enum(TestStatus::Pending, None, ValueMode::Constant).unwrap();

        let value = registry.lookup("Running").unwrap().value();
        assert_eq!(value, &StateValue::Constant(TestStatus::Running));
        assert_eq!(
            registry.find_by_value(&StateValue::Constant(TestStatus::Complete)).map(|s| s.id()),
            Some("Complete")
        );
    }

    #[test]
    fn from_constants_matches_adapter() {
        let members = vec![Constant::new("open", "o"), Constant::new("closed", "c")];
        let registry = from_constants(
            members.clone(),
            members[0].clone(),
            Some(members[1].clone()),
            ValueMode::Scalar,
        )
        .unwrap();

        let expected = EnumerationAdapter::new(members.clone())
            .initial(members[0].clone())
            .final_state(members[1].clone())
            .build()
            .unwrap();

        assert_eq!(registry, expected);
        assert_eq!(
            registry.get("closed").unwrap().value(),
            &StateValue::Scalar(Scalar::from("c"))
        );
    }
}
