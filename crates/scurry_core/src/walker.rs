//! The random-walk agent
//!
//! A walker is a colored square at an integer pixel position. Each update
//! moves it by `{-1, 0, 1} * size` independently on both axes. There is no
//! bounds checking; walkers are free to wander off screen.

use rand::Rng;
use crate::Color;

/// An agent performing an independent 2D random walk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walker {
    /// X position in pixels (top-left corner of the square)
    pub x: i32,
    /// Y position in pixels (top-left corner of the square)
    pub y: i32,
    /// Side length of the square, which is also the step length
    size: u32,
    /// Fixed color, or None until one is assigned
    color: Option<Color>,
}

impl Walker {
    /// Create a new walker
    ///
    /// `color` may be None; a random color is then assigned once, the first
    /// time it is needed (see [`ensure_color`](Self::ensure_color)).
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; a zero-size walker could never move.
    pub fn new(x: i32, y: i32, size: u32, color: Option<Color>) -> Self {
        assert!(size > 0, "walker size must be positive");
        Self { x, y, size, color }
    }

    /// Create a walker with a fixed color
    pub fn with_color(x: i32, y: i32, size: u32, color: Color) -> Self {
        Self::new(x, y, size, Some(color))
    }

    /// The side length of the square in pixels
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The walker's color, if one has been assigned
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The walker's color, assigning a random one first if it has none
    ///
    /// The assignment happens once; the walker keeps the sampled color for
    /// the rest of its life instead of re-rolling every frame.
    pub fn ensure_color<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Color {
        *self.color.get_or_insert_with(|| Color::random(rng))
    }

    /// Advance the walk by one step
    ///
    /// Each axis independently moves by -size, 0, or +size.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let step = self.size as i32;
        self.x += rng.gen_range(-1..=1) * step;
        self.y += rng.gen_range(-1..=1) * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_walker_new() {
        let walker = Walker::with_color(10, 20, 2, Color::RED);
        assert_eq!(walker.x, 10);
        assert_eq!(walker.y, 20);
        assert_eq!(walker.size(), 2);
        assert_eq!(walker.color(), Some(Color::RED));
    }

    #[test]
    #[should_panic(expected = "walker size must be positive")]
    fn test_zero_size_walker_is_rejected() {
        Walker::new(0, 0, 0, None);
    }

    #[test]
    fn test_update_step_is_bounded_by_size() {
        let mut rng = StdRng::seed_from_u64(1);
        for size in [1u32, 2, 5, 16] {
            let mut walker = Walker::new(0, 0, size, None);
            for _ in 0..200 {
                let (old_x, old_y) = (walker.x, walker.y);
                walker.update(&mut rng);
                let dx = (walker.x - old_x).unsigned_abs();
                let dy = (walker.y - old_y).unsigned_abs();
                assert!(dx == 0 || dx == size, "dx = {} for size {}", dx, size);
                assert!(dy == 0 || dy == size, "dy = {} for size {}", dy, size);
            }
        }
    }

    #[test]
    fn test_update_eventually_moves_both_axes() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut walker = Walker::new(0, 0, 3, None);
        let mut moved_x = false;
        let mut moved_y = false;
        for _ in 0..100 {
            let (old_x, old_y) = (walker.x, walker.y);
            walker.update(&mut rng);
            moved_x |= walker.x != old_x;
            moved_y |= walker.y != old_y;
        }
        assert!(moved_x);
        assert!(moved_y);
    }

    #[test]
    fn test_fixed_color_survives_updates() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut walker = Walker::with_color(0, 0, 2, Color::BLUE);
        for _ in 0..50 {
            walker.update(&mut rng);
        }
        assert_eq!(walker.color(), Some(Color::BLUE));
    }

    #[test]
    fn test_ensure_color_assigns_once() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut walker = Walker::new(0, 0, 2, None);
        assert_eq!(walker.color(), None);

        let first = walker.ensure_color(&mut rng);
        let second = walker.ensure_color(&mut rng);
        assert_eq!(first, second);
        assert_eq!(walker.color(), Some(first));
    }

    #[test]
    fn test_ensure_color_keeps_existing_color() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut walker = Walker::with_color(0, 0, 2, Color::GREEN);
        assert_eq!(walker.ensure_color(&mut rng), Color::GREEN);
    }
}
