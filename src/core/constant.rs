//! Symbolic constants that states are declared from.
//!
//! An enumeration is an ordered set of constants, each pairing a symbolic
//! name with an underlying [`Scalar`]. Statically known enumerations
//! implement [`StateEnum`] (usually through [`state_enum!`](crate::state_enum));
//! enumerations only known at run time are lists of [`Constant`] descriptors.

use super::value::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for enumeration constants.
///
/// # Required Traits
///
/// - `Clone`: constants are stored as state values in [`ValueMode::Constant`](crate::core::ValueMode)
/// - `PartialEq`: state values must be comparable
/// - `Debug`: constants must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: state values must be serializable
///
/// # Example
///
/// ```rust
/// use mindset_registry::core::{EnumConstant, Scalar};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl EnumConstant for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn scalar(&self) -> Scalar {
///         match self {
///             Self::Open => Scalar::Int(1),
///             Self::Closed => Scalar::Int(2),
///         }
///     }
/// }
///
/// assert!(Door::Open.is(&Door::Open));
/// assert!(!Door::Open.is(&Door::Closed));
/// ```
pub trait EnumConstant:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Symbolic name. Becomes the id of the state built from this constant.
    fn name(&self) -> &str;

    /// Underlying scalar value.
    fn scalar(&self) -> Scalar;

    /// Identity comparison used for initial and final selection.
    ///
    /// Two constants are the same constant only when both name and scalar
    /// match. A different constant that merely shares the scalar is not it.
    /// Float scalars compare by bit pattern, so a `NaN` constant is itself.
    fn is(&self, other: &Self) -> bool {
        self.name() == other.name() && self.scalar() == other.scalar()
    }
}

/// A statically known enumeration whose members can be listed in
/// declaration order.
pub trait StateEnum: EnumConstant {
    /// All constants, in declaration order.
    fn members() -> Vec<Self>;
}

/// Runtime descriptor for an enumeration constant: a `(name, scalar)` pair.
///
/// # Example
///
/// ```rust
/// use mindset_registry::core::{Constant, EnumConstant, Scalar};
///
/// let pending = Constant::new("pending", 1);
/// assert_eq!(pending.name(), "pending");
/// assert_eq!(pending.scalar(), Scalar::Int(1));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Constant {
    name: String,
    scalar: Scalar,
}

impl Constant {
    pub fn new(name: impl Into<String>, scalar: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            scalar: scalar.into(),
        }
    }
}

impl EnumConstant for Constant {
    fn name(&self) -> &str {
        &self.name
    }

    fn scalar(&self) -> Scalar {
        self.scalar.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestConstant {
        Pending,
        Running,
        Complete,
    }

    impl EnumConstant for TestConstant {
        fn name(&self) -> &str {
            match self {
                Self::Pending => "Pending",
                Self::Running => "Running",
                Self::Complete => "Complete",
            }
        }

        fn scalar(&self) -> Scalar {
            match self {
                Self::Pending => Scalar::Int(1),
                Self::Running => Scalar::Int(2),
                Self::Complete => Scalar::Int(3),
            }
        }
    }

    impl StateEnum for TestConstant {
        fn members() -> Vec<Self> {
            vec![Self::Pending, Self::Running, Self::Complete]
        }
    }

    #[test]
    fn members_keep_declaration_order() {
        let names: Vec<_> = TestConstant::members()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        assert_eq!(names, vec!["Pending", "Running", "Complete"]);
    }

    #[test]
    fn identity_requires_name_and_scalar() {
        let pending = Constant::new("pending", 1);

        assert!(pending.is(&Constant::new("pending", 1)));
        assert!(!pending.is(&Constant::new("pending", 2)));
        assert!(!pending.is(&Constant::new("waiting", 1)));
    }

    #[test]
    fn nan_constant_is_itself() {
        let nan = Constant::new("unknown", f64::NAN);
        assert!(nan.is(&nan.clone()));
    }

    #[test]
    fn enum_identity_follows_variant() {
        assert!(TestConstant::Running.is(&TestConstant::Running));
        assert!(!TestConstant::Running.is(&TestConstant::Complete));
    }

    #[test]
    fn constant_serializes_correctly() {
        let constant = Constant::new("closed", "c");
        let json = serde_json::to_string(&constant).unwrap();
        let deserialized: Constant = serde_json::from_str(&json).unwrap();
        assert_eq!(constant, deserialized);
    }
}
