//! `habits` — browse the Habits of Mind catalog.

use anyhow::Result;

use habitmind_core::catalog;

pub fn run(id: Option<u8>, json: bool) -> Result<()> {
    match id {
        Some(id) => {
            let habit = catalog::lookup(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(habit)?);
            } else {
                println!("#{} {}", habit.id, habit.name);
                println!("\n{}", habit.description);
                println!("\nExamples:");
                for example in habit.examples {
                    println!("  - {example}");
                }
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog::all())?);
            } else {
                for habit in catalog::all() {
                    println!("#{:<2} {}", habit.id, habit.name);
                }
            }
        }
    }
    Ok(())
}
