//! ECS Systems
//!
//! Night-creature behavior: spawning, pursuit of the nearer player, daytime
//! decay, and lethal contact checks.

use hecs::World;

use crate::ecs::{Enemy, PlayerId, Position};
use crate::game::GameRng;
use crate::world::WORLD_SIZE;

/// Most creatures alive at once
pub const ENEMY_CAP: usize = 8;
/// Per-tick chance to spawn one creature while below the cap (night only)
pub const SPAWN_CHANCE: f64 = 0.02;
/// Per-tick chance to remove one creature outside night
pub const DESPAWN_CHANCE: f64 = 0.04;
/// Per-axis chance each tick that a creature steps toward its target
pub const STEP_CHANCE: f64 = 0.7;

/// Advance all night creatures by one tick.
///
/// During night: below the cap, one creature may spawn at a uniformly random
/// tile, and every creature (including one spawned this tick) steps toward
/// whichever player is nearer. Outside night the population decays instead,
/// newest first.
pub fn update_enemies(
    world: &mut World,
    players: [Position; 2],
    night: bool,
    spawn_counter: &mut u64,
    rng: &mut GameRng,
) {
    if !night {
        decay_one(world, rng);
        return;
    }

    if count_enemies(world) < ENEMY_CAP && rng.gen_bool(SPAWN_CHANCE) {
        let pos = Position::new(rng.gen_index(WORLD_SIZE), rng.gen_index(WORLD_SIZE));
        world.spawn((pos, Enemy { ordinal: *spawn_counter }));
        *spawn_counter += 1;
    }

    // Collect first, then mutate. Sorted by spawn order so the random
    // stream is consumed in a reproducible order (query order isn't).
    let mut enemies: Vec<(hecs::Entity, Position, u64)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| (entity, *pos, enemy.ordinal))
        .collect();
    enemies.sort_by_key(|&(_, _, ordinal)| ordinal);

    for (entity, pos, _) in enemies {
        let target = nearer_player(pos, players);
        let mut next = pos;
        let dx = (target.x - pos.x).signum();
        let dy = (target.y - pos.y).signum();
        if rng.gen_bool(STEP_CHANCE) {
            next.x += dx;
        }
        if rng.gen_bool(STEP_CHANCE) {
            next.y += dy;
        }
        next = next.clamped(WORLD_SIZE);

        if let Ok(mut p) = world.get::<&mut Position>(entity) {
            *p = next;
        }
    }
}

/// The player a creature hunts; ties go to player two
fn nearer_player(from: Position, players: [Position; 2]) -> Position {
    if from.distance(&players[0]) < from.distance(&players[1]) {
        players[0]
    } else {
        players[1]
    }
}

/// Probabilistically remove the most recently spawned creature
fn decay_one(world: &mut World, rng: &mut GameRng) {
    if count_enemies(world) == 0 || !rng.gen_bool(DESPAWN_CHANCE) {
        return;
    }
    let newest = world
        .query::<&Enemy>()
        .iter()
        .max_by_key(|(_, enemy)| enemy.ordinal)
        .map(|(entity, _)| entity);
    if let Some(entity) = newest {
        let _ = world.despawn(entity);
    }
}

/// First player standing on the exact tile of any creature, if any
pub fn enemy_contact(world: &World, players: [(PlayerId, Position); 2]) -> Option<PlayerId> {
    for (id, pos) in players {
        for (_, (enemy_pos, _)) in world.query::<(&Position, &Enemy)>().iter() {
            if *enemy_pos == pos {
                return Some(id);
            }
        }
    }
    None
}

/// Number of creatures currently alive
pub fn count_enemies(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

/// Creature positions in spawn order, for render snapshots
pub fn enemy_positions(world: &World) -> Vec<Position> {
    let mut out: Vec<(u64, Position)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(_, (pos, enemy))| (enemy.ordinal, *pos))
        .collect();
    out.sort_by_key(|&(ordinal, _)| ordinal);
    out.into_iter().map(|(_, pos)| pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_enemy(world: &mut World, x: i32, y: i32, ordinal: u64) {
        world.spawn((Position::new(x, y), Enemy { ordinal }));
    }

    fn players_at(a: (i32, i32), b: (i32, i32)) -> [Position; 2] {
        [Position::new(a.0, a.1), Position::new(b.0, b.1)]
    }

    #[test]
    fn test_no_spawns_during_day() {
        let mut world = World::new();
        let mut counter = 0;
        let mut rng = GameRng::new(1);
        for _ in 0..5000 {
            update_enemies(&mut world, players_at((0, 0), (59, 59)), false, &mut counter, &mut rng);
        }
        assert_eq!(count_enemies(&world), 0);
    }

    #[test]
    fn test_night_population_capped() {
        let mut world = World::new();
        let mut counter = 0;
        let mut rng = GameRng::new(2);
        for _ in 0..20_000 {
            update_enemies(&mut world, players_at((0, 0), (59, 59)), true, &mut counter, &mut rng);
        }
        assert!(count_enemies(&world) <= ENEMY_CAP);
        assert!(count_enemies(&world) > 0);
    }

    #[test]
    fn test_pursuit_closes_on_nearer_player() {
        let mut world = World::new();
        spawn_enemy(&mut world, 50, 50, 0);
        let players = players_at((40, 40), (0, 0));
        let mut counter = 1;
        let mut rng = GameRng::new(3);
        let start = Position::new(50, 50);
        for _ in 0..200 {
            update_enemies(&mut world, players, true, &mut counter, &mut rng);
        }
        let pos = enemy_positions(&world)[0];
        assert!(pos.distance(&players[0]) < start.distance(&players[0]));
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut world = World::new();
        spawn_enemy(&mut world, 0, 0, 0);
        let players = players_at((0, 0), (0, 0));
        let mut counter = 1;
        let mut rng = GameRng::new(4);
        for _ in 0..500 {
            update_enemies(&mut world, players, true, &mut counter, &mut rng);
            let pos = enemy_positions(&world)[0];
            assert!(pos.x >= 0 && pos.x < WORLD_SIZE);
            assert!(pos.y >= 0 && pos.y < WORLD_SIZE);
        }
    }

    #[test]
    fn test_daytime_decay_empties_population() {
        let mut world = World::new();
        for i in 0..5 {
            spawn_enemy(&mut world, i, i, i as u64);
        }
        let mut counter = 5;
        let mut rng = GameRng::new(5);
        for _ in 0..10_000 {
            update_enemies(&mut world, players_at((0, 0), (59, 59)), false, &mut counter, &mut rng);
        }
        assert_eq!(count_enemies(&world), 0);
    }

    #[test]
    fn test_decay_removes_newest_first() {
        let mut world = World::new();
        spawn_enemy(&mut world, 1, 1, 0);
        spawn_enemy(&mut world, 2, 2, 1);
        let mut rng = GameRng::new(6);
        // Roll until one despawn happens
        while count_enemies(&world) == 2 {
            decay_one(&mut world, &mut rng);
        }
        assert_eq!(enemy_positions(&world), vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_contact_detection() {
        let mut world = World::new();
        spawn_enemy(&mut world, 7, 7, 0);
        let players = [
            (PlayerId::One, Position::new(3, 3)),
            (PlayerId::Two, Position::new(7, 7)),
        ];
        assert_eq!(enemy_contact(&world, players), Some(PlayerId::Two));

        let clear = [
            (PlayerId::One, Position::new(3, 3)),
            (PlayerId::Two, Position::new(8, 7)),
        ];
        assert_eq!(enemy_contact(&world, clear), None);
    }
}
