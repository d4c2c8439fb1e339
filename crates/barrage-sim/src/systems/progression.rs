//! Level progression: score thresholds raise the level and refill turrets.

use barrage_core::components::Turret;
use barrage_core::config::GameConfig;
use barrage_core::events::GameEvent;

use crate::score::ScoreState;
use crate::store::EntityStore;

/// Advance at most one level when `settled_score` strictly exceeds the
/// current threshold. Only turrets still standing are refilled.
///
/// `settled_score` is the score as it stood when the tick began, so kills
/// scored during this tick's collision pass count from the next tick on.
pub fn run(
    store: &mut EntityStore,
    config: &GameConfig,
    score: &mut ScoreState,
    settled_score: u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let threshold = score.level.saturating_mul(config.level_score_step);
    if settled_score <= threshold || score.level >= config.max_level {
        return false;
    }

    score.level += 1;
    for (_entity, turret) in store.world_mut().query_mut::<&mut Turret>() {
        if turret.active {
            turret.ammo = turret.max_ammo;
        }
    }

    log::info!("level {} reached at score {settled_score}", score.level);
    events.push(GameEvent::LevelUp { level: score.level });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_ammo(store: &mut EntityStore) {
        for (_entity, turret) in store.world_mut().query_mut::<&mut Turret>() {
            turret.ammo = 0;
        }
    }

    #[test]
    fn threshold_is_strict() {
        let config = GameConfig::default();
        let mut store = EntityStore::new(&config);
        let mut events = Vec::new();
        let mut score = ScoreState {
            score: 200,
            ..Default::default()
        };

        let settled = score.score;
        assert!(!run(&mut store, &config, &mut score, settled, &mut events));
        assert_eq!(score.level, 1);

        score.score = 220;
        let settled = score.score;
        assert!(run(&mut store, &config, &mut score, settled, &mut events));
        assert_eq!(score.level, 2);
        assert_eq!(events, vec![GameEvent::LevelUp { level: 2 }]);
    }

    #[test]
    fn refills_only_active_turrets() {
        let config = GameConfig::default();
        let mut store = EntityStore::new(&config);
        drain_ammo(&mut store);
        let lost = store.turret_ids()[2];
        store.world_mut().get::<&mut Turret>(lost).unwrap().active = false;

        let mut score = ScoreState {
            score: 220,
            ..Default::default()
        };
        let settled = score.score;
        run(&mut store, &config, &mut score, settled, &mut Vec::new());

        assert_eq!(store.turret(0).unwrap().ammo, config.turret_max_ammo);
        assert_eq!(store.turret(1).unwrap().ammo, config.turret_max_ammo);
        assert_eq!(store.turret(2).unwrap().ammo, 0);
    }

    #[test]
    fn one_level_per_tick_and_capped() {
        let config = GameConfig::default();
        let mut store = EntityStore::new(&config);
        let mut events = Vec::new();
        let mut score = ScoreState {
            score: 900,
            ..Default::default()
        };

        let settled = score.score;
        assert!(run(&mut store, &config, &mut score, settled, &mut events));
        assert_eq!(score.level, 2);

        for _ in 0..10 {
            let settled = score.score;
            run(&mut store, &config, &mut score, settled, &mut events);
        }
        assert_eq!(score.level, config.max_level);
        assert_eq!(events.len() as u32, config.max_level - 1);
    }

    #[test]
    fn score_from_this_tick_waits_a_tick() {
        let config = GameConfig::default();
        let mut store = EntityStore::new(&config);
        let mut events = Vec::new();
        let mut score = ScoreState {
            score: 210,
            ..Default::default()
        };

        assert!(!run(&mut store, &config, &mut score, 190, &mut events));
        assert_eq!(score.level, 1);
        assert!(run(&mut store, &config, &mut score, 210, &mut events));
        assert_eq!(score.level, 2);
    }
}
