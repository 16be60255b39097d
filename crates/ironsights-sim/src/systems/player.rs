//! Player control system: applies held input to the player's tank.

use hecs::{Entity, World};

use ironsights_core::components::{Chassis, Heading, Player};
use ironsights_core::constants::PLAYER_TURN_RATE;
use ironsights_core::input::InputState;
use ironsights_core::types::Position;

use crate::systems::collision;

/// Locate the player entity, if one exists.
pub fn find_player(world: &World) -> Option<Entity> {
    world.query::<&Player>().iter().next().map(|(entity, _)| entity)
}

/// Current player position and heading.
pub fn player_pose(world: &World) -> Option<(Position, f64)> {
    world
        .query::<(&Player, &Position, &Heading)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading))| (*pos, heading.radians))
}

/// Apply one frame of held turn and move input. `inverted` flips both
/// the turn direction and the drive direction. Backward wins when both
/// drive keys are held.
pub fn run(world: &mut World, input: &InputState, inverted: bool, dt: f64) {
    let Some(player) = find_player(world) else {
        return;
    };

    let turn_sign = if inverted { -1.0 } else { 1.0 };
    if let Ok(mut heading) = world.get::<&mut Heading>(player) {
        if input.turn_left {
            heading.radians += PLAYER_TURN_RATE * dt * turn_sign;
        }
        if input.turn_right {
            heading.radians -= PLAYER_TURN_RATE * dt * turn_sign;
        }
    }

    let mut drive = 0.0;
    if input.forward {
        drive = 1.0;
    }
    if input.backward {
        drive = -1.0;
    }
    if drive == 0.0 {
        return;
    }
    if inverted {
        drive = -drive;
    }

    let (heading, speed) = {
        let Ok(heading) = world.get::<&Heading>(player) else {
            return;
        };
        let Ok(chassis) = world.get::<&Chassis>(player) else {
            return;
        };
        (heading.radians, chassis.speed)
    };
    let step = speed * drive * dt;
    collision::try_move(world, player, heading.sin() * step, heading.cos() * step);
}
