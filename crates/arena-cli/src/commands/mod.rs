pub mod calc;
pub mod file;
pub mod games;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use arena_core::{ArenaError, BattleInput, FollowUp, Ruleset, WinProbability, win_probability};

#[derive(Serialize)]
struct JsonReport<'a> {
    ruleset: Ruleset,
    follow_up: FollowUp,
    #[serde(flatten)]
    win: &'a WinProbability,
}

/// Validate `input`, evaluate it, and print the result in `format`.
fn evaluate(input: &BattleInput, format: &str) -> Result<(), String> {
    if format != "table" && format != "json" {
        return Err(format!("unsupported format: \"{format}\". Use: table, json"));
    }

    let resolved = match input.resolve() {
        Ok(resolved) => resolved,
        Err(ArenaError::Invalid(issues)) => {
            for issue in &issues {
                eprintln!("  {}", issue.to_string().red());
            }
            let count = issues.len();
            return Err(format!(
                "{count} invalid input field{}",
                if count == 1 { "" } else { "s" }
            ));
        }
        Err(e) => return Err(e.to_string()),
    };
    for warning in &resolved.warnings {
        eprintln!("  {}", warning.to_string().yellow());
    }

    let battle = resolved.battle;
    let win = win_probability(&battle).map_err(|e| e.to_string())?;

    if format == "json" {
        let report = JsonReport {
            ruleset: battle.ruleset,
            follow_up: battle.follow_up,
            win: &win,
        };
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Player victory".bold(),
        format!("({}, follow-up: {})", battle.ruleset, battle.follow_up).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Player", "Enemy"]);
    let (p, e) = (battle.player, battle.enemy);
    table.add_row(vec!["Hit".to_string(), p.hit.to_string(), e.hit.to_string()]);
    table.add_row(vec!["Dmg".to_string(), p.damage.to_string(), e.damage.to_string()]);
    table.add_row(vec!["Crit".to_string(), p.crit.to_string(), e.crit.to_string()]);
    table.add_row(vec!["HP".to_string(), p.hp.to_string(), e.hp.to_string()]);
    println!("{table}");
    println!();

    println!("  numerator:   {}", win.numerator());
    println!("  denominator: {}", win.denominator());
    println!("  %:           {}", format!("{:.6}", win.percent()).green());

    Ok(())
}
