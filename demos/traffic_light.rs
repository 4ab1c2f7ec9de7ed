//! Traffic Light States
//!
//! This example declares a cyclic state set from an enumeration.
//!
//! Key concepts:
//! - Compile-time named constants via `state_enum!`
//! - Declaration order drives iteration order
//! - A state set with no final state
//!
//! Run with: cargo run --example traffic_light

use mindset_registry::builder::from_enum;
use mindset_registry::core::ValueMode;
use mindset_registry::state_enum;

state_enum! {
    enum TrafficLight {
        Red = "red",
        Green = "green",
        Yellow = "yellow",
    }
}

fn main() {
    println!("=== Traffic Light States ===\n");

    let states = from_enum(TrafficLight::Red, None, ValueMode::Constant).unwrap();

    println!("States in declaration order:");
    for state in &states {
        let marker = if state.is_initial() { " (initial)" } else { "" };
        println!("  {} -> {:?}{}", state.id(), state.value(), marker);
    }

    println!("\nThis state set has {} final states.", states.final_states().count());
    println!("The sequence repeats: Red -> Green -> Yellow -> Red -> ...");

    println!("\n=== Example Complete ===");
}
