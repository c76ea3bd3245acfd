//! Converts the World to GPU instance data
//!
//! One [`SquareInstance`] per walker, rebuilt every unpaused frame. Colors
//! are expected to be assigned by the simulation before conversion; a
//! walker that somehow still has none falls back to white rather than
//! panicking mid-frame.

use scurry_core::{Color, World};

use crate::pipeline::SquareInstance;

/// Build the per-frame instance list for all walkers
pub fn square_instances(world: &World) -> Vec<SquareInstance> {
    world
        .iter()
        .map(|walker| SquareInstance {
            position: [walker.x as f32, walker.y as f32],
            size: walker.size() as f32,
            _padding: 0.0,
            color: walker.color().unwrap_or(Color::WHITE).to_linear_rgba(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scurry_core::Walker;

    #[test]
    fn test_one_instance_per_walker() {
        let mut world = World::new();
        world.add_walker(Walker::with_color(1, 2, 3, Color::RED));
        world.add_walker(Walker::with_color(-4, 5, 2, Color::BLUE));

        let instances = square_instances(&world);
        assert_eq!(instances.len(), 2);
    }

    #[test]
    fn test_instance_carries_walker_state() {
        let mut world = World::new();
        world.add_walker(Walker::with_color(10, -20, 4, Color::RED));

        let instances = square_instances(&world);
        assert_eq!(instances[0].position, [10.0, -20.0]);
        assert_eq!(instances[0].size, 4.0);
        assert_eq!(instances[0].color, Color::RED.to_linear_rgba());
    }

    #[test]
    fn test_colorless_walker_falls_back_to_white() {
        let mut world = World::new();
        world.add_walker(Walker::new(0, 0, 2, None));

        let instances = square_instances(&world);
        assert_eq!(instances[0].color, Color::WHITE.to_linear_rgba());
    }

    #[test]
    fn test_empty_world_yields_no_instances() {
        let world = World::new();
        assert!(square_instances(&world).is_empty());
    }
}
