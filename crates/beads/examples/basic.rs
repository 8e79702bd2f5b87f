//! Basic usage example for the beads crate
//!
//! Looks up a group, queue and channel by name and lists tracked agents.
//!
//! To run this example:
//! ```sh
//! cd crates/beads
//! cargo run --example basic -- oncall
//! ```

use beads::{Beads, Registry, Result};

fn main() -> Result<()> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "oncall".to_string());

    let bd = match Beads::new() {
        Ok(bd) => bd,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nMake sure 'bd' is installed and in your PATH.");
            return Err(e);
        }
    };

    match bd.lookup_group(&name)? {
        Some(group) => {
            println!("group:{}", group.name);
            for member in &group.members {
                println!("  - {}", member);
            }
        }
        None => println!("no group named {}", name),
    }

    if bd.lookup_queue(&name)?.is_some() {
        println!("queue:{} exists", name);
    }
    if bd.lookup_channel(&name)?.is_some() {
        println!("channel:{} exists", name);
    }

    let agents = bd.list_agents()?;
    println!("\n{} active agents", agents.len());
    for id in agents.keys() {
        println!("  {}", id);
    }

    Ok(())
}
