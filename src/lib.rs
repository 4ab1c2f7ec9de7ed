//! Mindset Registry: ordered state sets for state machine definitions.
//!
//! A machine definition starts with its states. This crate collects them
//! into a [`StateRegistry`], an ordered, id-keyed set of immutable
//! [`StateEntity`] values that a machine assembler reads to build the
//! transition graph. States are declared directly, or derived from an
//! enumeration of symbolic constants.
//!
//! # Core Concepts
//!
//! - **StateEntity**: identity, external value and initial/final flags
//! - **StateRegistry**: insertion-ordered states with named and indexed access
//! - **EnumerationAdapter**: turns an ordered enumeration into a registry
//!
//! The registry only records what the caller declared. It never runs
//! transitions and does not require exactly one initial state; that is the
//! assembler's job.
//!
//! # Example
//!
//! ```rust
//! use mindset_registry::builder::from_enum;
//! use mindset_registry::core::ValueMode;
//! use mindset_registry::state_enum;
//!
//! state_enum! {
//!     enum Order {
//!         Placed = 1,
//!         Paid = 2,
//!         Shipped = 3,
//!         Cancelled = 4,
//!     }
//! }
//!
//! let states = from_enum(
//!     Order::Placed,
//!     [Order::Shipped, Order::Cancelled],
//!     ValueMode::Scalar,
//! )?;
//!
//! let ids: Vec<_> = states.ids().collect();
//! assert_eq!(ids, vec!["Placed", "Paid", "Shipped", "Cancelled"]);
//! assert_eq!(states.initial_states().count(), 1);
//! assert_eq!(states.final_states().count(), 2);
//! # Ok::<(), mindset_registry::RegistryError>(())
//! ```

pub mod builder;
pub mod core;
pub mod registry;

// Re-export commonly used types
pub use crate::builder::{from_enum, EnumerationAdapter};
pub use crate::core::{Constant, EnumConstant, StateEntity, StateEnum, StateValue, ValueMode};
pub use crate::registry::{ErrorKind, RegistryError, StateRegistry};
