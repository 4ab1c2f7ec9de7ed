//! Approval States
//!
//! This example builds the same approval state set three ways.
//!
//! Key concepts:
//! - Direct construction from entities
//! - Enumeration constants known only at run time
//! - Statically declared enumerations with constant values
//! - Reaching a state whose id shadows a registry operation
//!
//! Run with: cargo run --example approval_states

use mindset_registry::builder::{from_constants, from_enum};
use mindset_registry::core::{Constant, StateEntity, StateValue, ValueMode};
use mindset_registry::{state_enum, RegistryError, StateRegistry};

state_enum! {
    enum Status {
        Pending = 1,
        Completed = 2,
    }
}

fn main() -> Result<(), RegistryError> {
    println!("=== Approval States Example ===\n");

    // 1. Direct construction
    let direct: StateRegistry = StateRegistry::from_map(vec![
        ("pending", StateEntity::new("pending")?.initial()),
        ("completed", StateEntity::new("completed")?.final_state()),
    ])?;
    println!("Direct:      {direct:?}");

    // 2. Runtime descriptors
    let pending = Constant::new("pending", 1);
    let completed = Constant::new("completed", 2);
    let runtime = from_constants(
        [pending.clone(), completed.clone()],
        pending,
        Some(completed),
        ValueMode::Scalar,
    )?;
    println!("Runtime:     {runtime:?}");

    // 3. Static enumeration, keeping the constants as values
    let typed = from_enum(Status::Pending, Some(Status::Completed), ValueMode::Constant)?;
    let value = typed.lookup("Completed")?.value();
    println!("Typed value: {value:?}");
    assert_eq!(value, &StateValue::Constant(Status::Completed));

    // A state named after a registry operation is shadowed in lookup()
    let mut states = runtime;
    states.append(StateEntity::new("append")?);
    match states.lookup("append") {
        Err(err) => println!("\nlookup(\"append\"): {err}"),
        Ok(_) => unreachable!("reserved names are shadowed"),
    }
    println!("get(\"append\"):    {:?}", states.get("append").map(|s| s.id()));

    println!("\n=== Example Complete ===");
    Ok(())
}
