//! All-or-nothing movement resolution against obstacles and actors.

use hecs::{Entity, World};

use ironsights_core::components::{Chassis, Obstacle};
use ironsights_core::constants::{BATTLEFIELD_SIZE, BOUNDS_MARGIN};
use ironsights_core::types::{footprints_overlap, Position};

/// Attempt to displace `mover` by (dx, dz). The move is applied only
/// if the candidate position overlaps no obstacle and no other actor;
/// a rejected move leaves the position untouched. On success the
/// position is clamped to the battlefield interior.
pub fn try_move(world: &mut World, mover: Entity, dx: f64, dz: f64) -> bool {
    let (candidate, half) = {
        let Ok(pos) = world.get::<&Position>(mover) else {
            return false;
        };
        let Ok(chassis) = world.get::<&Chassis>(mover) else {
            return false;
        };
        (Position::new(pos.x + dx, pos.z + dz), chassis.half_size())
    };

    for (_entity, (obs_pos, obstacle)) in world.query::<(&Position, &Obstacle)>().iter() {
        if footprints_overlap(&candidate, half, obs_pos, obstacle.half_size()) {
            return false;
        }
    }

    for (entity, (other_pos, other)) in world.query::<(&Position, &Chassis)>().iter() {
        if entity == mover {
            continue;
        }
        if footprints_overlap(&candidate, half, other_pos, other.half_size()) {
            return false;
        }
    }

    let mut landed = candidate;
    landed.clamp_to(BATTLEFIELD_SIZE - BOUNDS_MARGIN);
    if let Ok(mut pos) = world.get::<&mut Position>(mover) {
        *pos = landed;
    }
    true
}
