//! Collision and outcome evaluation
//!
//! Explosions are the only lethal thing in the game: enemies touching the
//! player do nothing.

use super::state::{GameEvent, GameState, GameStatus};

/// Resolve explosion overlaps for this tick and report the outcome
///
/// The player is checked before enemies are cleared, so a blast that takes
/// out the player and the last enemy together reports `PlayerDied`.
pub fn evaluate(state: &mut GameState) -> GameStatus {
    let was_over = state.status().is_over();

    if state.player.alive && state.explosions.iter().any(|e| e.pos == state.player.pos) {
        state.player.alive = false;
        state.events.push(GameEvent::PlayerDied {
            pos: state.player.pos,
        });
    }

    let explosions = &state.explosions;
    let events = &mut state.events;
    state.enemies.retain(|enemy| {
        let hit = explosions.iter().any(|e| e.pos == enemy.pos);
        if hit {
            log::debug!("Enemy {} killed at ({}, {})", enemy.id, enemy.pos.x, enemy.pos.y);
            events.push(GameEvent::EnemyKilled {
                id: enemy.id,
                pos: enemy.pos,
            });
        }
        !hit
    });

    let status = state.status();
    if !was_over && status.is_over() {
        if status == GameStatus::PlayerWon {
            state.events.push(GameEvent::PlayerWon);
        }
        log::info!("Game over at tick {}: {:?}", state.time_ticks, status);
    }
    status
}
