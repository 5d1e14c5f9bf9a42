use legion::*;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::time::{Duration, Instant};

use crate::{
    ball::Ball,
    bounds::Bounds,
    config::{ConfigError, UniverseConfig},
    world_gen::init_world,
};

/// The ball world together with the schedule that advances it. Created once
/// the window has its final size, then ticked every frame.
pub struct Simulation {
    world: World,
    resources: Resources,
    schedule: Schedule,
    ticks: u64,
}

impl Simulation {
    pub fn populate(
        bounds: Bounds,
        config: &UniverseConfig,
        mut rng: Pcg64,
    ) -> Result<Self, ConfigError> {
        let mut world = World::default();
        init_world(&mut world, &bounds, config, &mut rng)?;
        info!(
            "Populated {} balls in a {}x{} area",
            world.len(),
            bounds.width,
            bounds.height
        );

        let mut resources = Resources::default();
        resources.insert(bounds);
        resources.insert(rng);

        let schedule = Schedule::builder()
            .add_system(crate::advance::advance_balls_system())
            .build();

        Ok(Simulation {
            world,
            resources,
            schedule,
            ticks: 0,
        })
    }

    /// Advances every ball one step against the current bounds.
    pub fn tick(&mut self, bounds: Bounds) {
        if let Some(mut current) = self.resources.get_mut::<Bounds>() {
            if *current != bounds {
                debug!(
                    "Bounds changed from {}x{} to {}x{}",
                    current.width, current.height, bounds.width, bounds.height
                );
                *current = bounds;
            }
        }
        self.schedule.execute(&mut self.world, &mut self.resources);
        self.ticks += 1;
    }

    pub fn balls(&self) -> Vec<Ball> {
        let mut query = <&Ball>::query();
        query.iter(&self.world).copied().collect()
    }

    /// Visits the balls in order without copying them, stopping at the first error.
    pub fn try_for_each_ball<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(&Ball) -> Result<(), E>,
    {
        let mut query = <&Ball>::query();
        query.iter(&self.world).try_for_each(f)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

pub fn create_rng(config: &UniverseConfig) -> Pcg64 {
    match config.seed {
        Some(seed) => {
            info!("Seeding balls with {:#x}", seed);
            Pcg64::seed_from_u64(seed)
        }
        None => Pcg64::from_entropy(),
    }
}

/// Paces the repaint loop to one tick per `delay`.
pub struct FrameTimer {
    delay: Duration,
    last_tick: Instant,
}

impl FrameTimer {
    pub fn new(delay: Duration) -> Self {
        FrameTimer {
            delay,
            last_tick: Instant::now(),
        }
    }

    /// Sleeps out the rest of the current frame and returns how long the
    /// frame took.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.delay {
            std::thread::sleep(self.delay - elapsed);
        }
        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;
        trace!("Frame time: {:?}", frame_time);
        frame_time
    }
}
