//! World container for walkers
//!
//! The World manages all walkers in the simulation. Walkers are stored in a
//! slotmap so keys stay valid across unrelated removals and a stale key can
//! never alias a newer walker.

use rand::Rng;
use slotmap::{SlotMap, new_key_type};
use std::fmt;

use crate::{PaletteError, Walker, sample_distinct};

new_key_type! {
    /// A generational key to a walker in the world
    pub struct WalkerKey;
}

/// Error type for world operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The key does not refer to a live walker
    UnknownWalker(WalkerKey),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::UnknownWalker(key) => {
                write!(f, "no walker in the world for key {:?}", key)
            }
        }
    }
}

impl std::error::Error for WorldError {}

/// The world containing all walkers
///
/// Walkers are mutually independent; bulk operations iterate them in
/// unspecified order.
#[derive(Default)]
pub struct World {
    walkers: SlotMap<WalkerKey, Walker>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            walkers: SlotMap::with_key(),
        }
    }

    /// Add a walker to the world and return its key
    pub fn add_walker(&mut self, walker: Walker) -> WalkerKey {
        self.walkers.insert(walker)
    }

    /// Remove a walker from the world and return it
    ///
    /// Removing a walker that is not in the world is an error.
    pub fn remove_walker(&mut self, key: WalkerKey) -> Result<Walker, WorldError> {
        self.walkers
            .remove(key)
            .ok_or(WorldError::UnknownWalker(key))
    }

    /// Get a reference to a walker by key
    pub fn get_walker(&self, key: WalkerKey) -> Option<&Walker> {
        self.walkers.get(key)
    }

    /// Get a mutable reference to a walker by key
    pub fn get_walker_mut(&mut self, key: WalkerKey) -> Option<&mut Walker> {
        self.walkers.get_mut(key)
    }

    /// Get the number of walkers
    #[inline]
    pub fn walker_count(&self) -> usize {
        self.walkers.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }

    /// Remove all walkers
    pub fn clear(&mut self) {
        self.walkers.clear();
    }

    /// Iterate over all walkers
    pub fn iter(&self) -> impl Iterator<Item = &Walker> {
        self.walkers.values()
    }

    /// Iterate over all walkers mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Walker> {
        self.walkers.values_mut()
    }

    /// Iterate over keys and walkers
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (WalkerKey, &Walker)> {
        self.walkers.iter()
    }

    /// Advance every walker by one random step
    pub fn update_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for walker in self.walkers.values_mut() {
            walker.update(rng);
        }
    }

    /// Assign a random color to every walker that has none yet
    ///
    /// Each assignment is made once; already-colored walkers are untouched.
    pub fn assign_missing_colors<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for walker in self.walkers.values_mut() {
            walker.ensure_color(rng);
        }
    }

    /// Spawn `count` walkers at `center`, each with a distinct palette color
    ///
    /// This is how the initial population is created: everyone starts on
    /// the same pixel and diffuses outward. Fails when `count` exceeds the
    /// palette size.
    pub fn spawn_centered<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        center: (i32, i32),
        size: u32,
        rng: &mut R,
    ) -> Result<Vec<WalkerKey>, PaletteError> {
        let colors = sample_distinct(rng, count)?;
        let (x, y) = center;
        let keys = colors
            .into_iter()
            .map(|color| self.add_walker(Walker::with_color(x, y, size, color)))
            .collect();
        log::debug!("spawned {} walkers at ({}, {})", count, x, y);
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn make_test_walker() -> Walker {
        Walker::with_color(0, 0, 2, Color::WHITE)
    }

    #[test]
    fn test_world_new() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.walker_count(), 0);
    }

    #[test]
    fn test_world_add_and_get() {
        let mut world = World::new();
        let key = world.add_walker(make_test_walker());

        assert_eq!(world.walker_count(), 1);
        assert_eq!(world.get_walker(key).unwrap().color(), Some(Color::WHITE));
    }

    #[test]
    fn test_world_get_walker_mut() {
        let mut world = World::new();
        let key = world.add_walker(make_test_walker());

        if let Some(walker) = world.get_walker_mut(key) {
            walker.x = 42;
        }
        assert_eq!(world.get_walker(key).unwrap().x, 42);
    }

    #[test]
    fn test_world_remove_walker() {
        let mut world = World::new();
        let key = world.add_walker(make_test_walker());

        let removed = world.remove_walker(key).unwrap();
        assert_eq!(removed.color(), Some(Color::WHITE));
        assert!(world.is_empty());
        assert!(world.get_walker(key).is_none());
    }

    #[test]
    fn test_remove_unknown_walker_is_an_error() {
        let mut world = World::new();
        let key = world.add_walker(make_test_walker());
        world.remove_walker(key).unwrap();

        let err = world.remove_walker(key).unwrap_err();
        assert_eq!(err, WorldError::UnknownWalker(key));
    }

    #[test]
    fn test_removed_walker_is_never_updated_again() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut world = World::new();
        let keep = world.add_walker(make_test_walker());
        let drop = world.add_walker(make_test_walker());

        world.remove_walker(drop).unwrap();
        world.update_all(&mut rng);

        assert!(world.get_walker(drop).is_none());
        assert_eq!(world.walker_count(), 1);
        assert!(world.get_walker(keep).is_some());
        assert_eq!(world.iter().count(), 1);
    }

    #[test]
    fn test_update_all_moves_every_walker_within_step_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut world = World::new();
        for _ in 0..5 {
            world.add_walker(Walker::with_color(100, 100, 3, Color::RED));
        }

        world.update_all(&mut rng);

        for walker in world.iter() {
            assert!([97, 100, 103].contains(&walker.x));
            assert!([97, 100, 103].contains(&walker.y));
        }
    }

    #[test]
    fn test_assign_missing_colors() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut world = World::new();
        let colorless = world.add_walker(Walker::new(0, 0, 2, None));
        let colored = world.add_walker(Walker::with_color(0, 0, 2, Color::RED));

        world.assign_missing_colors(&mut rng);

        assert!(world.get_walker(colorless).unwrap().color().is_some());
        assert_eq!(world.get_walker(colored).unwrap().color(), Some(Color::RED));
    }

    #[test]
    fn test_spawn_centered_distinct_palette_colors() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut world = World::new();
        let keys = world.spawn_centered(11, (320, 240), 2, &mut rng).unwrap();

        assert_eq!(keys.len(), 11);
        assert_eq!(world.walker_count(), 11);

        let colors: HashSet<_> = world.iter().map(|w| w.color().unwrap()).collect();
        assert_eq!(colors.len(), 11);

        for walker in world.iter() {
            assert_eq!((walker.x, walker.y), (320, 240));
            assert_eq!(walker.size(), 2);
        }
    }

    #[test]
    fn test_spawn_centered_too_many_fails() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut world = World::new();
        let err = world.spawn_centered(12, (0, 0), 2, &mut rng).unwrap_err();

        assert!(matches!(err, PaletteError::NotEnoughColors { requested: 12, .. }));
        // A failed spawn leaves the world untouched
        assert!(world.is_empty());
    }

    #[test]
    fn test_world_clear() {
        let mut world = World::new();
        world.add_walker(make_test_walker());
        world.add_walker(make_test_walker());

        world.clear();
        assert!(world.is_empty());
    }

    #[test]
    fn test_world_iter_with_keys() {
        let mut world = World::new();
        let a = world.add_walker(make_test_walker());
        let b = world.add_walker(make_test_walker());

        let keys: HashSet<_> = world.iter_with_keys().map(|(k, _)| k).collect();
        assert_eq!(keys, HashSet::from([a, b]));
    }
}
