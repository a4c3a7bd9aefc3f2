use arena_core::{BattleInput, CombatantInput, FollowUp, Ruleset};

use crate::StatArgs;

/// Collect command-line stats into raw battle input.
pub fn battle_input(
    stats: StatArgs,
    ruleset: Option<Ruleset>,
    game: Option<String>,
    follow_up: FollowUp,
) -> BattleInput {
    BattleInput {
        player: CombatantInput {
            hit: stats.player_hit,
            damage: stats.player_dmg,
            crit: stats.player_crit,
            hp: stats.player_hp,
        },
        enemy: CombatantInput {
            hit: stats.enemy_hit,
            damage: stats.enemy_dmg,
            crit: stats.enemy_crit,
            hp: stats.enemy_hp,
        },
        ruleset,
        game,
        follow_up,
    }
}

pub fn run(input: &BattleInput, format: &str) -> Result<(), String> {
    super::evaluate(input, format)
}
