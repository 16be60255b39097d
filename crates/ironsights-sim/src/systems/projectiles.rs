//! Projectile lifecycle: firing, flight, and impact resolution.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ironsights_core::components::{Bullet, BulletOwner, Enemy, Obstacle, Player};
use ironsights_core::constants::{
    BATTLEFIELD_SIZE, BULLET_OBSTACLE_TOLERANCE, BULLET_SPEED, ENEMY_COOLDOWN_BASE,
    ENEMY_COOLDOWN_JITTER, ENEMY_HIT_RADIUS, FLASH_DURATION, GRACE_END_DELAY_BASE,
    GRACE_END_DELAY_JITTER, INVULNERABILITY_SECS, PLAYER_HIT_RADIUS, RESPAWN_DELAY_BASE,
    RESPAWN_DELAY_JITTER,
};
use ironsights_core::events::AudioEvent;
use ironsights_core::types::Position;

use crate::systems::player;
use crate::systems::respawn::SpawnSchedule;

/// True if a bullet with the given owner tag is in flight.
pub fn live_bullet(world: &World, owner: BulletOwner) -> bool {
    world.query::<&Bullet>().iter().any(|(_, bullet)| bullet.owner == owner)
}

/// Fire the player's gun from `origin` along (dir_x, dir_z). Silently
/// refused while a player bullet is already in flight. The first shot
/// of a run ends the grace period and hands every enemy a randomized
/// head start on its own first shot.
pub fn try_player_fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now: f64,
    grace_period: &mut bool,
    audio_events: &mut Vec<AudioEvent>,
    origin: Position,
    dir_x: f64,
    dir_z: f64,
) {
    if live_bullet(world, BulletOwner::Player) {
        return;
    }

    world.spawn((
        origin,
        Bullet {
            dir_x,
            dir_z,
            owner: BulletOwner::Player,
        },
    ));
    audio_events.push(AudioEvent::ShotFired {
        owner: BulletOwner::Player,
    });

    if *grace_period {
        *grace_period = false;
        for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
            enemy.next_shot_at =
                now + GRACE_END_DELAY_BASE + rng.gen_range(0.0..GRACE_END_DELAY_JITTER);
        }
    }
}

/// Fire `shooter`'s gun at the player. Refused during the grace
/// period, before the shooter's cooldown expires, or while an enemy
/// bullet is already in flight. The cooldown is consumed even when the
/// shot turns out degenerate (shooter coincident with the player).
pub fn try_enemy_fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now: f64,
    grace_period: bool,
    audio_events: &mut Vec<AudioEvent>,
    shooter: Entity,
) {
    if grace_period {
        return;
    }
    let Some((player_pos, _)) = player::player_pose(world) else {
        return;
    };
    {
        let Ok(enemy) = world.get::<&Enemy>(shooter) else {
            return;
        };
        if now <= enemy.next_shot_at {
            return;
        }
    }
    if live_bullet(world, BulletOwner::Enemy) {
        return;
    }

    if let Ok(mut enemy) = world.get::<&mut Enemy>(shooter) {
        enemy.next_shot_at = now + ENEMY_COOLDOWN_BASE + rng.gen_range(0.0..ENEMY_COOLDOWN_JITTER);
    }

    let shooter_pos = {
        let Ok(pos) = world.get::<&Position>(shooter) else {
            return;
        };
        *pos
    };
    let dx = player_pos.x - shooter_pos.x;
    let dz = player_pos.z - shooter_pos.z;
    let range = (dx * dx + dz * dz).sqrt();
    if range == 0.0 {
        return;
    }

    world.spawn((
        shooter_pos,
        Bullet {
            dir_x: dx / range,
            dir_z: dz / range,
            owner: BulletOwner::Enemy,
        },
    ));
    audio_events.push(AudioEvent::ShotFired {
        owner: BulletOwner::Enemy,
    });
}

/// Advance every bullet and resolve its impacts, in a stable order.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now: f64,
    dt: f64,
    flash_timer: &mut f64,
    respawns: &mut SpawnSchedule,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut bullets: Vec<(Entity, Bullet)> = world
        .query::<&Bullet>()
        .iter()
        .map(|(entity, bullet)| (entity, *bullet))
        .collect();
    bullets.sort_by_key(|(entity, _)| entity.id());

    for (entity, bullet) in bullets {
        let position = {
            let Ok(mut pos) = world.get::<&mut Position>(entity) else {
                continue;
            };
            pos.x += bullet.dir_x * BULLET_SPEED * dt;
            pos.z += bullet.dir_z * BULLET_SPEED * dt;
            *pos
        };

        // Leaving the battlefield removes the bullet before any impact
        // is considered.
        if position.x.abs() > BATTLEFIELD_SIZE || position.z.abs() > BATTLEFIELD_SIZE {
            let _ = world.despawn(entity);
            continue;
        }

        if hit_obstacle(world, &position) {
            let _ = world.despawn(entity);
            continue;
        }

        match bullet.owner {
            BulletOwner::Player => {
                if let Some((victim, victim_pos)) = first_enemy_hit(world, &position) {
                    let _ = world.despawn(victim);
                    let _ = world.despawn(entity);
                    audio_events.push(AudioEvent::EnemyDestroyed {
                        position: victim_pos,
                    });
                    respawns.schedule(
                        now + RESPAWN_DELAY_BASE + rng.gen_range(0.0..RESPAWN_DELAY_JITTER),
                    );
                }
            }
            BulletOwner::Enemy => {
                let Some((player_pos, _)) = player::player_pose(world) else {
                    continue;
                };
                if position.range_to(&player_pos) < PLAYER_HIT_RADIUS {
                    // The flash restarts on every hit; damage effects
                    // only land outside the invulnerability window.
                    *flash_timer = FLASH_DURATION;
                    let mut struck = false;
                    if let Some(p) = player::find_player(world) {
                        if let Ok(mut state) = world.get::<&mut Player>(p) {
                            if now > state.invulnerable_until {
                                state.invulnerable_until = now + INVULNERABILITY_SECS;
                                struck = true;
                            }
                        }
                    }
                    if struck {
                        audio_events.push(AudioEvent::PlayerHit);
                    }
                    let _ = world.despawn(entity);
                }
            }
        }
    }
}

fn hit_obstacle(world: &World, position: &Position) -> bool {
    world
        .query::<(&Position, &Obstacle)>()
        .iter()
        .any(|(_, (obs_pos, obstacle))| {
            position.range_to(obs_pos) < obstacle.half_size() + BULLET_OBSTACLE_TOLERANCE
        })
}

fn first_enemy_hit(world: &World, position: &Position) -> Option<(Entity, Position)> {
    let mut enemies: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();
    enemies.sort_by_key(|(entity, _)| entity.id());
    enemies
        .into_iter()
        .find(|(_, pos)| position.range_to(pos) < ENEMY_HIT_RADIUS)
}
