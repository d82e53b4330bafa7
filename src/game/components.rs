//! Grid primitives and ECS components for the snake game.

use bevy::prelude::*;

/// Cell coordinate on the arena. `y` grows upwards, like world space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector in cell coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    /// Arrow key and WASD key for this direction.
    fn keys(self) -> [KeyCode; 2] {
        match self {
            Direction::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
            Direction::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
            Direction::Up => [KeyCode::ArrowUp, KeyCode::KeyW],
            Direction::Down => [KeyCode::ArrowDown, KeyCode::KeyS],
        }
    }

    /// Reads keyboard input and returns the requested direction, or `current`.
    ///
    /// Keys pressed this frame win over keys held from earlier frames. The
    /// reverse of `current` is skipped, so holding it never hides another
    /// held key.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>, current: Direction) -> Direction {
        let turns = || {
            Direction::ALL
                .into_iter()
                .filter(move |&direction| direction != current.opposite())
        };
        turns()
            .find(|direction| keyboard_input.any_just_pressed(direction.keys()))
            .or_else(|| turns().find(|direction| keyboard_input.any_pressed(direction.keys())))
            .unwrap_or(current)
    }
}

/// Expanding flash drawn where food was eaten.
#[derive(Component)]
pub struct PulseEffect {
    pub position: Position,
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the restart button on the game over overlay.
#[derive(Component)]
pub struct RestartButton;
