//! Entity store: the hecs world plus the fixed ordering of cities and turrets.
//!
//! Rockets, interceptors and explosions live only in the world. Cities and
//! turrets are also kept in layout order so targeting tie-breaks and
//! snapshots are stable. Handles are generation-tagged, so a handle to a
//! removed entity never aliases a newer one.

use hecs::{Entity, World};

use barrage_core::components::*;
use barrage_core::config::GameConfig;
use barrage_core::enums::TargetKind;
use barrage_core::types::Position;

/// The entity a rocket was aimed at, fixed at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLink {
    pub entity: Entity,
    pub kind: TargetKind,
}

/// A live city or turret a rocket may be aimed at.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub link: TargetLink,
    pub position: Position,
}

/// Stable 64-bit id for snapshots and events.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

pub struct EntityStore {
    world: World,
    cities: Vec<Entity>,
    turrets: Vec<Entity>,
}

impl EntityStore {
    /// Build a store holding the starting layout from `config`.
    pub fn new(config: &GameConfig) -> Self {
        let mut store = Self {
            world: World::new(),
            cities: Vec::new(),
            turrets: Vec::new(),
        };
        store.reset(config);
        store
    }

    /// Drop every entity and rebuild the starting layout with full ammo.
    pub fn reset(&mut self, config: &GameConfig) {
        self.world.clear();
        self.cities.clear();
        self.turrets.clear();

        for (index, &position) in config.cities.iter().enumerate() {
            let city = City {
                index: index as u32,
                active: true,
            };
            self.cities.push(self.world.spawn((position, city)));
        }

        for (index, &position) in config.turrets.iter().enumerate() {
            let turret = Turret {
                index: index as u32,
                ammo: config.turret_max_ammo,
                max_ammo: config.turret_max_ammo,
                active: true,
            };
            self.turrets.push(self.world.spawn((position, turret)));
        }
    }

    pub fn add_rocket(&mut self, position: Position, rocket: Rocket, target: TargetLink) -> Entity {
        self.world.spawn((position, rocket, target))
    }

    /// Interceptors start at their origin.
    pub fn add_interceptor(&mut self, interceptor: Interceptor) -> Entity {
        self.world.spawn((interceptor.origin, interceptor))
    }

    pub fn add_explosion(&mut self, center: Position, explosion: Explosion) -> Entity {
        self.world.spawn((center, explosion))
    }

    /// Remove any entity. Returns false for handles that are already gone.
    pub fn remove(&mut self, entity: Entity) -> bool {
        if self.world.despawn(entity).is_err() {
            return false;
        }
        self.cities.retain(|&e| e != entity);
        self.turrets.retain(|&e| e != entity);
        true
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// City handles in layout order.
    pub fn city_ids(&self) -> &[Entity] {
        &self.cities
    }

    /// Turret handles in layout order.
    pub fn turret_ids(&self) -> &[Entity] {
        &self.turrets
    }

    pub fn rocket_count(&self) -> usize {
        self.world.query::<&Rocket>().iter().count()
    }

    pub fn interceptor_count(&self) -> usize {
        self.world.query::<&Interceptor>().iter().count()
    }

    pub fn explosion_count(&self) -> usize {
        self.world.query::<&Explosion>().iter().count()
    }

    pub fn city(&self, index: usize) -> Option<City> {
        let entity = *self.cities.get(index)?;
        self.world.get::<&City>(entity).ok().map(|c| *c)
    }

    pub fn turret(&self, index: usize) -> Option<Turret> {
        let entity = *self.turrets.get(index)?;
        self.world.get::<&Turret>(entity).ok().map(|t| *t)
    }

    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    /// Loss condition: no turret left standing.
    pub fn all_turrets_inactive(&self) -> bool {
        self.turrets.iter().all(|&e| {
            self.world
                .get::<&Turret>(e)
                .map_or(true, |turret| !turret.active)
        })
    }

    /// Active cities then active turrets, each in layout order.
    pub fn active_targets(&self) -> Vec<Target> {
        let mut targets = Vec::with_capacity(self.cities.len() + self.turrets.len());

        for &entity in &self.cities {
            let active = self.world.get::<&City>(entity).map_or(false, |c| c.active);
            if let (true, Some(position)) = (active, self.position(entity)) {
                targets.push(Target {
                    link: TargetLink {
                        entity,
                        kind: TargetKind::City,
                    },
                    position,
                });
            }
        }

        for &entity in &self.turrets {
            let active = self.world.get::<&Turret>(entity).map_or(false, |t| t.active);
            if let (true, Some(position)) = (active, self.position(entity)) {
                targets.push(Target {
                    link: TargetLink {
                        entity,
                        kind: TargetKind::Turret,
                    },
                    position,
                });
            }
        }

        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EntityStore {
        EntityStore::new(&GameConfig::default())
    }

    fn rocket() -> Rocket {
        Rocket {
            target: Position::new(180.0, 570.0),
            speed: 0.01,
            progress: 0.0,
        }
    }

    #[test]
    fn starts_with_layout() {
        let store = store();
        assert_eq!(store.city_ids().len(), 6);
        assert_eq!(store.turret_ids().len(), 3);
        assert_eq!(store.rocket_count(), 0);
        let turret = store.turret(1).unwrap();
        assert_eq!(turret.index, 1);
        assert_eq!(turret.ammo, turret.max_ammo);
        assert!(turret.active);
        assert_eq!(
            store.position(store.turret_ids()[1]),
            Some(Position::new(400.0, 550.0))
        );
    }

    #[test]
    fn reset_clears_moving_entities_and_restores_layout() {
        let mut store = store();
        let city = store.city_ids()[0];
        let link = TargetLink {
            entity: city,
            kind: TargetKind::City,
        };
        store.add_rocket(Position::new(10.0, 0.0), rocket(), link);
        store.add_explosion(
            Position::new(50.0, 50.0),
            Explosion {
                radius: 0.0,
                max_radius: 50.0,
                expanding: true,
                life: 1.0,
            },
        );
        let turret = store.turret_ids()[0];
        store.world_mut().get::<&mut City>(city).unwrap().active = false;
        store.world_mut().get::<&mut Turret>(turret).unwrap().ammo = 0;

        store.reset(&GameConfig::default());

        assert_eq!(store.rocket_count(), 0);
        assert_eq!(store.explosion_count(), 0);
        assert!(store.city(0).unwrap().active);
        assert_eq!(store.turret(0).unwrap().ammo, GameConfig::default().turret_max_ammo);
    }

    #[test]
    fn removed_handle_is_not_reused() {
        let mut store = store();
        let link = TargetLink {
            entity: store.city_ids()[0],
            kind: TargetKind::City,
        };
        let first = store.add_rocket(Position::new(0.0, 0.0), rocket(), link);
        assert!(store.remove(first));
        assert!(!store.remove(first));

        let second = store.add_rocket(Position::new(0.0, 0.0), rocket(), link);
        assert_ne!(entity_id(first), entity_id(second));
        assert!(!store.contains(first));
        assert!(store.contains(second));
    }

    #[test]
    fn active_targets_skip_inactive() {
        let mut store = store();
        let city = store.city_ids()[2];
        let turret = store.turret_ids()[0];
        store.world_mut().get::<&mut City>(city).unwrap().active = false;
        store.world_mut().get::<&mut Turret>(turret).unwrap().active = false;

        let targets = store.active_targets();
        assert_eq!(targets.len(), 7);
        assert!(targets.iter().all(|t| t.link.entity != city && t.link.entity != turret));
        assert_eq!(targets[0].link.kind, TargetKind::City);
        assert_eq!(targets[6].link.kind, TargetKind::Turret);
    }

    #[test]
    fn loss_condition_tracks_turrets_only() {
        let mut store = store();
        for &city in store.city_ids().to_vec().iter() {
            store.world_mut().get::<&mut City>(city).unwrap().active = false;
        }
        assert!(!store.all_turrets_inactive());

        for &turret in store.turret_ids().to_vec().iter() {
            store.world_mut().get::<&mut Turret>(turret).unwrap().active = false;
        }
        assert!(store.all_turrets_inactive());
    }
}
