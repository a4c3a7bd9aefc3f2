use comfy_table::{ContentArrangement, Table};

use arena_core::{GAMES, Ruleset, games_using};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Game", "Ruleset", "--ruleset"]);

    for ruleset in Ruleset::ALL {
        for game in games_using(ruleset) {
            table.add_row(vec![
                game.title.to_string(),
                ruleset.to_string(),
                ruleset.short_name().to_string(),
            ]);
        }
    }

    println!("{table}");
    println!();
    println!("  {} games", GAMES.len());

    Ok(())
}
