//! Arena bounds and the mapping from cells to world space.

use bevy::prelude::*;
use rand::Rng;

use super::{ARENA_HEIGHT, ARENA_WIDTH, CELL_SIZE, Position};

/// The playing field: `width` x `height` cells of `cell_size` pixels each.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(ARENA_WIDTH, ARENA_HEIGHT, CELL_SIZE)
    }
}

impl Grid {
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// A uniformly random cell inside the arena.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.width as i32),
            rng.random_range(0..self.height as i32),
        )
    }

    /// Arena size in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }

    /// World-space center of a cell. The arena is centered on the origin.
    pub fn to_world(&self, pos: Position) -> Vec2 {
        self.cell_to_world(Vec2::new(pos.x as f32, pos.y as f32))
    }

    /// Like [`Grid::to_world`], for fractional cell coordinates.
    pub fn cell_to_world(&self, cell: Vec2) -> Vec2 {
        Vec2::new(
            (cell.x - self.width as f32 / 2.0 + 0.5) * self.cell_size,
            (cell.y - self.height as f32 / 2.0 + 0.5) * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bounds_checking() {
        let grid = Grid::new(20, 20, 25.0);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 19)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, 20)));
    }

    #[test]
    fn center_of_default_arena() {
        assert_eq!(Grid::default().center(), Position::new(20, 15));
        assert_eq!(Grid::new(20, 20, 10.0).center(), Position::new(10, 10));
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let grid = Grid::new(7, 3, 10.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn world_mapping_is_centered() {
        let grid = Grid::new(2, 2, 10.0);
        assert_eq!(grid.to_world(Position::new(0, 0)), Vec2::new(-5.0, -5.0));
        assert_eq!(grid.to_world(Position::new(1, 1)), Vec2::new(5.0, 5.0));
        assert_eq!(grid.pixel_size(), Vec2::new(20.0, 20.0));
    }
}
