//! External values carried by states.
//!
//! A state's value is what a running machine reports as its "current value".
//! It is either a plain [`Scalar`] or, when the registry was built from an
//! enumeration in [`ValueMode::Constant`], the enumeration constant itself.

use super::constant::EnumConstant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Underlying scalar value of an enumeration constant.
///
/// Floats compare by bit pattern, so a scalar always equals itself
/// (`NaN == NaN`) and `0.0 != -0.0`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(x) => x.to_bits().hash(state),
            Self::Str(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Value of a state as seen by the machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum StateValue<C: EnumConstant> {
    /// A plain scalar. States built without an explicit value carry their id here.
    Scalar(Scalar),

    /// The enumeration constant the state was built from.
    Constant(C),
}

impl<C: EnumConstant> StateValue<C> {
    /// The scalar, if this value holds one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Constant(_) => None,
        }
    }

    /// The constant, if this value holds one.
    pub fn as_constant(&self) -> Option<&C> {
        match self {
            Self::Constant(constant) => Some(constant),
            Self::Scalar(_) => None,
        }
    }
}

impl<C: EnumConstant> From<Scalar> for StateValue<C> {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

/// Selects what the enumeration adapter stores as each state's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueMode {
    /// Store the constant's underlying scalar.
    #[default]
    Scalar,

    /// Store the constant itself, so it can be recovered from the state.
    Constant,
}
