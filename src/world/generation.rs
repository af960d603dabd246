//! Deterministic world generation
//!
//! One pass over the grid with a single random sample per tile, followed by
//! rejection-sampled shrine and chamber placement. Everything draws from the
//! session's one random stream, so a seed reproduces the world exactly.

use std::collections::HashSet;

use crate::ecs::Position;
use crate::game::GameRng;
use crate::minigames::MinigameVariant;
use crate::world::{Chamber, Shrine, World};

/// Fraction of tiles holding any obstacle
const OBSTACLE_DENSITY: f64 = 0.10;
/// Share of obstacles that are trees (the rest are rocks)
const TREE_SHARE: f64 = 0.7;
/// Shrines placed per world
const SHRINE_COUNT: usize = 3;
/// Sigils needed to unlock the chamber
const CHAMBER_REQUIRED_SIGILS: u32 = 3;
/// Minimum Euclidean distance from player one's spawn to the chamber
const CHAMBER_MIN_SPAWN_DISTANCE: f64 = 10.0;

/// Generate a world and both player spawn points.
///
/// Spawn points are drawn before terrain, so terrain layout depends on them
/// in the stream. Player one's spawn tile is cleared of obstacles afterwards.
pub fn generate(rng: &mut GameRng, size: i32) -> (World, [Position; 2]) {
    let spawns = [random_tile(rng, size), random_tile(rng, size)];

    let mut trees = HashSet::new();
    let mut rocks = HashSet::new();
    for x in 0..size {
        for y in 0..size {
            // One sample, two thresholds: a tile is never both.
            let r = rng.next_unit();
            if r < OBSTACLE_DENSITY * TREE_SHARE {
                trees.insert(Position::new(x, y));
            } else if r < OBSTACLE_DENSITY {
                rocks.insert(Position::new(x, y));
            }
        }
    }
    trees.remove(&spawns[0]);
    rocks.remove(&spawns[0]);

    let mut shrines = Vec::with_capacity(SHRINE_COUNT);
    for i in 0..SHRINE_COUNT {
        let pos = loop {
            let candidate = random_tile(rng, size);
            if !trees.contains(&candidate) && !rocks.contains(&candidate) {
                break candidate;
            }
        };
        shrines.push(Shrine {
            pos,
            variant: MinigameVariant::from_index(i),
        });
    }

    let chamber_pos = loop {
        let candidate = random_tile(rng, size);
        if candidate.distance(&spawns[0]) >= CHAMBER_MIN_SPAWN_DISTANCE {
            break candidate;
        }
    };

    let world = World {
        trees,
        rocks,
        dug: HashSet::new(),
        shrines,
        chamber: Chamber {
            pos: chamber_pos,
            required_sigils: CHAMBER_REQUIRED_SIGILS,
            unlocked: false,
        },
    };
    (world, spawns)
}

fn random_tile(rng: &mut GameRng, size: i32) -> Position {
    Position::new(rng.gen_index(size), rng.gen_index(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WORLD_SIZE;

    #[test]
    fn test_trees_and_rocks_never_overlap() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let (world, _) = generate(&mut rng, WORLD_SIZE);
            assert!(
                world.trees.is_disjoint(&world.rocks),
                "overlap with seed {seed}"
            );
        }
    }

    #[test]
    fn test_three_shrines_one_of_each_variant() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let (world, _) = generate(&mut rng, WORLD_SIZE);
            assert_eq!(world.shrines.len(), 3);
            let mut variants: Vec<MinigameVariant> =
                world.shrines.iter().map(|s| s.variant).collect();
            variants.sort_by_key(|v| v.index());
            assert_eq!(
                variants,
                vec![
                    MinigameVariant::SequenceRecall,
                    MinigameVariant::TargetCapture,
                    MinigameVariant::Riddle,
                ]
            );
        }
    }

    #[test]
    fn test_shrines_avoid_obstacles() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let (world, _) = generate(&mut rng, WORLD_SIZE);
            for shrine in &world.shrines {
                assert!(!world.is_obstructed(shrine.pos));
            }
        }
    }

    #[test]
    fn test_chamber_far_from_first_spawn() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let (world, spawns) = generate(&mut rng, WORLD_SIZE);
            assert!(world.chamber.pos.distance(&spawns[0]) >= 10.0);
            assert!(!world.chamber.unlocked);
            assert_eq!(world.chamber.required_sigils, 3);
        }
    }

    #[test]
    fn test_first_spawn_tile_is_clear() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let (world, spawns) = generate(&mut rng, WORLD_SIZE);
            assert!(!world.is_obstructed(spawns[0]));
        }
    }

    #[test]
    fn test_spawns_in_bounds() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let (_, spawns) = generate(&mut rng, WORLD_SIZE);
            for spawn in spawns {
                assert!(spawn.x >= 0 && spawn.x < WORLD_SIZE);
                assert!(spawn.y >= 0 && spawn.y < WORLD_SIZE);
            }
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = GameRng::new(1234);
        let mut b = GameRng::new(1234);
        let (wa, sa) = generate(&mut a, WORLD_SIZE);
        let (wb, sb) = generate(&mut b, WORLD_SIZE);
        assert_eq!(sa, sb);
        assert_eq!(wa.trees, wb.trees);
        assert_eq!(wa.rocks, wb.rocks);
        assert_eq!(wa.chamber.pos, wb.chamber.pos);
        let pa: Vec<Position> = wa.shrines.iter().map(|s| s.pos).collect();
        let pb: Vec<Position> = wb.shrines.iter().map(|s| s.pos).collect();
        assert_eq!(pa, pb);
    }
}
