//! Demo binary: simulate one battle between two catalog entries.
//!
//! Usage: `battle-cli <name-or-dex> <name-or-dex> [seed] [--json]`

use anyhow::{anyhow, Context};
use pokemon_battle_sim::prelude::{BattleEngine, BuiltinCatalog};
use std::env;

fn main() -> anyhow::Result<()> {
    let mut json_output = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--list" => {
                let catalog = BuiltinCatalog::new();
                let mut names: Vec<_> = catalog.species_names().collect();
                names.sort_unstable();
                for name in names {
                    println!("{name}");
                }
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let (first, second) = match positional.as_slice() {
        [first, second] | [first, second, _] => (first.clone(), second.clone()),
        _ => {
            return Err(anyhow!(
                "Usage: battle-cli <name-or-dex> <name-or-dex> [seed] [--json]"
            ))
        }
    };
    let seed = match positional.get(2) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid seed '{raw}'"))?,
        None => 0,
    };

    let engine = BattleEngine::with_builtin_catalog();
    let report = engine
        .simulate(&first, &second, seed)
        .context("simulation failed")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        for line in report.transcript() {
            println!("{line}");
        }
        println!();
        println!("{}", report.summary());
    }
    Ok(())
}
