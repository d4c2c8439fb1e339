//! A simple autoplayer for headless demo sessions.

use barrage_core::state::GameStateSnapshot;
use barrage_core::types::Position;

/// Share of the remaining path to lead a rocket by.
const LEAD_FRACTION: f32 = 0.1;

/// Pick a point to fire at: just ahead of the lowest rocket that no live
/// explosion or in-flight interceptor is already covering.
pub fn choose_shot(snapshot: &GameStateSnapshot) -> Option<Position> {
    snapshot
        .rockets
        .iter()
        .map(|rocket| lead(rocket.position, rocket.target))
        .filter(|aim| !is_covered(snapshot, aim))
        .max_by(|a, b| a.y.total_cmp(&b.y))
}

fn lead(position: Position, target: Position) -> Position {
    Position::new(
        position.x + (target.x - position.x) * LEAD_FRACTION,
        position.y + (target.y - position.y) * LEAD_FRACTION,
    )
}

fn is_covered(snapshot: &GameStateSnapshot, aim: &Position) -> bool {
    let blast_cover = snapshot
        .explosions
        .iter()
        .any(|e| e.position.distance_to(aim) < e.max_radius * 0.5);
    let pending_cover = snapshot
        .interceptors
        .iter()
        .any(|i| i.target.distance_to(aim) < 25.0);
    blast_cover || pending_cover
}
