//! Snapshot construction. Read-only over the world; view lists are
//! ordered by entity id so identical runs serialize identically.

use hecs::World;

use ironsights_core::components::{Bullet, Chassis, Enemy, Heading, Obstacle, Player};
use ironsights_core::events::AudioEvent;
use ironsights_core::state::{BulletView, EnemyView, FrameSnapshot, ObstacleView, PlayerView};
use ironsights_core::types::{Position, SimTime};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    flash_timer: f64,
    inverted: bool,
    grace_period: bool,
    aim_locked: bool,
    audio_events: Vec<AudioEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        player: build_player(world, time.elapsed_secs),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        obstacles: build_obstacles(world),
        flash_timer,
        inverted,
        grace_period,
        aim_locked,
        audio_events,
    }
}

fn build_player(world: &World, now: f64) -> PlayerView {
    world
        .query::<(&Player, &Position, &Heading)>()
        .iter()
        .next()
        .map(|(_, (state, pos, heading))| PlayerView {
            position: *pos,
            heading: heading.radians,
            invulnerable: now <= state.invulnerable_until,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<(u32, EnemyView)> = world
        .query::<(&Enemy, &Position, &Heading, &Chassis)>()
        .iter()
        .map(|(entity, (_, pos, heading, chassis))| {
            (
                entity.id(),
                EnemyView {
                    position: *pos,
                    heading: heading.radians,
                    size: chassis.size,
                },
            )
        })
        .collect();
    views.sort_by_key(|(id, _)| *id);
    views.into_iter().map(|(_, view)| view).collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut views: Vec<(u32, BulletView)> = world
        .query::<(&Bullet, &Position)>()
        .iter()
        .map(|(entity, (bullet, pos))| {
            (
                entity.id(),
                BulletView {
                    position: *pos,
                    dir_x: bullet.dir_x,
                    dir_z: bullet.dir_z,
                    owner: bullet.owner,
                },
            )
        })
        .collect();
    views.sort_by_key(|(id, _)| *id);
    views.into_iter().map(|(_, view)| view).collect()
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut views: Vec<(u32, ObstacleView)> = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(entity, (obstacle, pos))| {
            (
                entity.id(),
                ObstacleView {
                    position: *pos,
                    size: obstacle.size,
                },
            )
        })
        .collect();
    views.sort_by_key(|(id, _)| *id);
    views.into_iter().map(|(_, view)| view).collect()
}
