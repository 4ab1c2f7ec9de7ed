//! Macros for declaring statically known state enumerations.

/// Declare an enumeration of state constants.
///
/// Generates the enum together with [`EnumConstant`](crate::core::EnumConstant)
/// (name = variant identifier, scalar = the given value) and
/// [`StateEnum`](crate::core::StateEnum) (members in declaration order).
/// The variants are the compile-time named constants of the state set.
///
/// # Example
///
/// ```
/// use mindset_registry::core::{EnumConstant, Scalar, StateEnum};
/// use mindset_registry::state_enum;
///
/// state_enum! {
///     pub enum Status {
///         Pending = 1,
///         Completed = 2,
///         Archived = "archived",
///     }
/// }
///
/// assert_eq!(Status::Pending.name(), "Pending");
/// assert_eq!(Status::Archived.scalar(), Scalar::from("archived"));
/// assert_eq!(Status::members(), vec![Status::Pending, Status::Completed, Status::Archived]);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::EnumConstant for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn scalar(&self) -> $crate::core::Scalar {
                match self {
                    $(Self::$variant => $crate::core::Scalar::from($value)),+
                }
            }
        }

        impl $crate::core::StateEnum for $name {
            fn members() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }
        }
    };
}
