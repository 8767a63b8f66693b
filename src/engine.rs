//! The generation step over a sparse world.
//!
//! Each generation builds a brand-new [`World`] from the current one rather
//! than mutating in place. Only live cells and their Moore neighbors are ever
//! examined, so the cost scales with the population, not with any grid area.

use crate::Pos2;
use crate::World;

/// Advances `world` by `generations` steps of B3/S23 life.
///
/// `generations == 0` returns an equivalent copy of the input.
pub fn advance(world: &World, generations: usize) -> World {
    let mut world = world.clone();
    for _ in 0..generations {
        world = next_generation(&world);
    }

    world
}

fn next_generation(world: &World) -> World {
    let mut next = World::default();

    for &cell in world.iter() {
        // live cell survives with exactly 2 or 3 live neighbors
        let live = live_neighbors(world, cell);
        if live == 2 || live == 3 {
            next.insert(cell);
        }

        // dead neighbors are the only birth candidates; a birth needs
        // exactly 3 live neighbors in the *current* world
        for neighbor in cell.neighbors() {
            if !world.contains(&neighbor) && live_neighbors(world, neighbor) == 3 {
                next.insert(neighbor);
            }
        }
    }

    next
}

fn live_neighbors(world: &World, pos: Pos2) -> usize {
    pos.neighbors()
        .into_iter()
        .filter(|neighbor| world.contains(neighbor))
        .count()
}
