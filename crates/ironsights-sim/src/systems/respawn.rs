//! Deferred enemy respawns, keyed to the simulation clock rather than
//! any host timer so paused runs stay frozen.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use ironsights_core::components::Enemy;
use ironsights_core::constants::ENEMY_CAP;

use crate::world_setup;

/// Pending one-shot spawns at absolute simulation times.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    pending: Vec<f64>,
}

impl SpawnSchedule {
    /// Queue a spawn to fire at `due_at` simulation seconds.
    pub fn schedule(&mut self, due_at: f64) {
        self.pending.push(due_at);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn due_times(&self) -> &[f64] {
        &self.pending
    }
}

/// Release every spawn that has come due. A spawn that comes due while
/// the enemy cap is reached is dropped, not re-queued.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, schedule: &mut SpawnSchedule, now: f64) {
    let mut due = 0usize;
    schedule.pending.retain(|&at| {
        if at <= now {
            due += 1;
            false
        } else {
            true
        }
    });

    for _ in 0..due {
        let alive = world.query::<&Enemy>().iter().count();
        if alive < ENEMY_CAP {
            world_setup::spawn_enemy(world, rng, now);
        }
    }
}
