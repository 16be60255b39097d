//! The simulation engine: owns the world and advances it frame by
//! frame in a fixed system order.

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ironsights_ai::gunnery;
use ironsights_assets::BattlefieldData;
use ironsights_core::components::Enemy;
use ironsights_core::constants::{MAX_FRAME_DT, MUZZLE_OFFSET};
use ironsights_core::events::AudioEvent;
use ironsights_core::input::InputState;
use ironsights_core::state::FrameSnapshot;
use ironsights_core::types::{MountainPeak, Position, SimTime};

use crate::systems;
use crate::systems::respawn::SpawnSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. The same seed with the same input script reproduces
    /// the same run exactly.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Headless simulation engine. All mutation flows through `step`.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    assets: BattlefieldData,
    mountain_ridge: Vec<MountainPeak>,
    grace_period: bool,
    inverted: bool,
    flash_timer: f64,
    respawns: SpawnSchedule,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Build a new battlefield over a validated asset payload.
    pub fn new(config: SimConfig, assets: BattlefieldData) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mountain_ridge = world_setup::build_mountain_ridge(&mut rng);
        let mut world = World::new();
        world_setup::setup_battlefield(&mut world, &mut rng);

        Self {
            world,
            time: SimTime::default(),
            rng,
            assets,
            mountain_ridge,
            grace_period: true,
            inverted: false,
            flash_timer: 0.0,
            respawns: SpawnSchedule::default(),
            audio_events: Vec::new(),
        }
    }

    /// Advance the simulation by one frame and return its snapshot.
    /// `dt` is the host-measured frame delta in seconds; it is clamped
    /// to `MAX_FRAME_DT` so hitches never teleport anything.
    pub fn step(&mut self, input: &InputState, dt: f64) -> FrameSnapshot {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.time.advance(dt);
        let now = self.time.elapsed_secs;

        // Due respawns release before anything moves this frame.
        systems::respawn::run(&mut self.world, &mut self.rng, &mut self.respawns, now);

        self.flash_timer = (self.flash_timer - dt).max(0.0);

        if input.toggle_invert {
            self.inverted = !self.inverted;
        }
        systems::player::run(&mut self.world, input, self.inverted, dt);

        if input.fire {
            if let Some((pos, heading)) = systems::player::player_pose(&self.world) {
                let origin = Position::new(
                    pos.x + heading.sin() * MUZZLE_OFFSET,
                    pos.z + heading.cos() * MUZZLE_OFFSET,
                );
                systems::projectiles::try_player_fire(
                    &mut self.world,
                    &mut self.rng,
                    now,
                    &mut self.grace_period,
                    &mut self.audio_events,
                    origin,
                    heading.sin(),
                    heading.cos(),
                );
            }
        }

        systems::projectiles::run(
            &mut self.world,
            &mut self.rng,
            now,
            dt,
            &mut self.flash_timer,
            &mut self.respawns,
            &mut self.audio_events,
        );

        systems::enemy::run(
            &mut self.world,
            &mut self.rng,
            now,
            dt,
            self.grace_period,
            &mut self.audio_events,
        );

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.flash_timer,
            self.inverted,
            self.grace_period,
            self.aim_locked(),
            audio_events,
        )
    }

    /// Crosshair query: true when any enemy sits inside the player's
    /// narrow forward cone within aiming range. Pure; safe to call
    /// between steps.
    pub fn aim_locked(&self) -> bool {
        let Some((pos, heading)) = systems::player::player_pose(&self.world) else {
            return false;
        };
        let origin = DVec2::new(pos.x, pos.z);
        self.world
            .query::<(&Enemy, &Position)>()
            .iter()
            .any(|(_, (_, enemy_pos))| {
                gunnery::in_aim_cone(origin, heading, DVec2::new(enemy_pos.x, enemy_pos.z))
            })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> &SimTime {
        &self.time
    }

    pub fn grace_period(&self) -> bool {
        self.grace_period
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn flash_timer(&self) -> f64 {
        self.flash_timer
    }

    pub fn mountain_ridge(&self) -> &[MountainPeak] {
        &self.mountain_ridge
    }

    pub fn assets(&self) -> &BattlefieldData {
        &self.assets
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.pending_count()
    }
}

/// Derives clamped frame deltas from a monotonic clock reading, for
/// hosts that hand the engine wall-clock timestamps.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_secs: Option<f64>,
}

impl FrameClock {
    /// Difference a new monotonic reading against the previous one,
    /// clamped to `MAX_FRAME_DT`. The first call yields zero.
    pub fn delta(&mut self, now_secs: f64) -> f64 {
        let dt = match self.last_secs {
            Some(last) => (now_secs - last).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_secs = Some(now_secs);
        dt
    }
}

#[cfg(test)]
impl SimulationEngine {
    pub(crate) fn clear_obstacles(&mut self) {
        use ironsights_core::components::Obstacle;
        let doomed: Vec<hecs::Entity> = self
            .world
            .query::<&Obstacle>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
    }

    pub(crate) fn clear_enemies(&mut self) {
        let doomed: Vec<hecs::Entity> = self
            .world
            .query::<&Enemy>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
    }

    pub(crate) fn spawn_obstacle_at(&mut self, x: f64, z: f64, size: f64) {
        use ironsights_core::components::Obstacle;
        self.world.spawn((Position::new(x, z), Obstacle { size }));
    }

    pub(crate) fn spawn_enemy_at(
        &mut self,
        x: f64,
        z: f64,
        heading: f64,
        next_shot_at: f64,
    ) -> hecs::Entity {
        use ironsights_core::components::{Chassis, Heading};
        use ironsights_core::constants::{ENEMY_BASE_SPEED, ENEMY_SIZE};
        self.world.spawn((
            Enemy { next_shot_at },
            Position::new(x, z),
            Heading { radians: heading },
            Chassis {
                size: ENEMY_SIZE,
                speed: ENEMY_BASE_SPEED,
            },
        ))
    }

    pub(crate) fn set_player_pose(&mut self, x: f64, z: f64, heading: f64) {
        use ironsights_core::components::Heading;
        if let Some(player) = systems::player::find_player(&self.world) {
            if let Ok(mut pos) = self.world.get::<&mut Position>(player) {
                *pos = Position::new(x, z);
            }
            if let Ok(mut h) = self.world.get::<&mut Heading>(player) {
                h.radians = heading;
            }
        }
    }

    pub(crate) fn set_grace(&mut self, grace: bool) {
        self.grace_period = grace;
    }

    pub(crate) fn schedule_respawn(&mut self, due_at: f64) {
        self.respawns.schedule(due_at);
    }

    pub(crate) fn respawn_due_times(&self) -> &[f64] {
        self.respawns.due_times()
    }
}
