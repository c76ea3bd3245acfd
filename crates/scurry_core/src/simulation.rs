//! The paused/running state machine driving the world
//!
//! The simulation owns the world and the random number generator. While
//! paused, [`Simulation::step`] does nothing at all, so walker positions
//! are untouched no matter how many frames elapse. Quitting is not modeled
//! here; it is the window-close path in the application loop.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{PaletteError, WalkerKey, World};

/// Drives the world one random-walk step at a time, unless paused
pub struct Simulation {
    world: World,
    paused: bool,
    rng: StdRng,
}

impl Simulation {
    /// Create a new simulation around a world
    ///
    /// With `seed` set the walk is reproducible; otherwise the generator is
    /// seeded from the OS. The simulation starts paused; the first unpause
    /// starts the walk.
    pub fn new(world: World, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            world,
            paused: true,
            rng,
        }
    }

    /// Whether the simulation is currently paused
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Force the paused/running state
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip between paused and running, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// The world being simulated
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The simulation's random number generator
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Spawn `count` walkers at `center` using the simulation's generator
    pub fn spawn_centered(
        &mut self,
        count: usize,
        center: (i32, i32),
        size: u32,
    ) -> Result<Vec<WalkerKey>, PaletteError> {
        self.world.spawn_centered(count, center, size, &mut self.rng)
    }

    /// Run one simulation frame
    ///
    /// Returns false without touching the world while paused. Otherwise
    /// assigns colors to any colorless walkers and advances every walker by
    /// one random step.
    pub fn step(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.world.assign_missing_colors(&mut self.rng);
        self.world.update_all(&mut self.rng);
        true
    }
}
