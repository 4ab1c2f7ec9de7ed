//! Core state definition types.
//!
//! This module contains the building blocks of a state set:
//! - Enumeration constants via the `EnumConstant` and `StateEnum` traits
//! - Values carried by states
//! - Immutable state entities
//!
//! Nothing here executes transitions or evaluates conditions.

mod constant;
mod entity;
mod value;

pub use constant::{Constant, EnumConstant, StateEnum};
pub use entity::StateEntity;
pub use value::{Scalar, StateValue, ValueMode};
