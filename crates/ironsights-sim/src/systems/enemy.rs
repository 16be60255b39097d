//! Enemy tank behavior: steer toward the player, close to standoff
//! range, and fire when the shot is viable.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ironsights_ai::gunnery::{assess_shot, ShotAssessment};
use ironsights_ai::steering::{normalize_angle, rotate_toward};
use ironsights_core::components::{Chassis, Enemy, Heading, Obstacle};
use ironsights_core::constants::{ENEMY_STANDOFF, ENEMY_TURN_RATE, ENEMY_WANDER_RATE};
use ironsights_core::events::AudioEvent;
use ironsights_core::types::Position;

use crate::systems::{collision, player, projectiles};

/// Drive every enemy for one frame. Enemies are processed in a stable
/// order so RNG consumption is reproducible run to run.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now: f64,
    dt: f64,
    grace_period: bool,
    audio_events: &mut Vec<AudioEvent>,
) {
    let Some((player_pos, _)) = player::player_pose(world) else {
        return;
    };
    let target = DVec2::new(player_pos.x, player_pos.z);

    let cover: Vec<(DVec2, f64)> = world
        .query::<(&Position, &Obstacle)>()
        .iter()
        .map(|(_, (pos, obstacle))| (DVec2::new(pos.x, pos.z), obstacle.half_size()))
        .collect();

    let mut roster: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    roster.sort_by_key(|entity| entity.id());

    for entity in roster {
        let (position, heading, speed, next_shot_at) = {
            let Ok((pos, heading, chassis, enemy)) =
                world.query_one_mut::<(&Position, &mut Heading, &Chassis, &Enemy)>(entity)
            else {
                continue;
            };
            let bearing = pos.bearing_to(&player_pos);
            let turned = rotate_toward(heading.radians, bearing, ENEMY_TURN_RATE * dt);
            let wander = rng.gen_range(-0.5..0.5) * ENEMY_WANDER_RATE * dt;
            heading.radians = normalize_angle(turned + wander);
            (*pos, heading.radians, chassis.speed, enemy.next_shot_at)
        };

        // Close until the standoff distance, then hold.
        if position.range_to(&player_pos) > ENEMY_STANDOFF {
            let step = speed * dt;
            collision::try_move(world, entity, heading.sin() * step, heading.cos() * step);
        }

        // The fire gate suppresses only the shot; steering and
        // movement for this and every later enemy are unaffected.
        if now > next_shot_at {
            let muzzle = {
                let Ok(pos) = world.get::<&Position>(entity) else {
                    continue;
                };
                DVec2::new(pos.x, pos.z)
            };
            if assess_shot(muzzle, target, &cover) == ShotAssessment::Clear {
                projectiles::try_enemy_fire(world, rng, now, grace_period, audio_events, entity);
            }
        }
    }
}
