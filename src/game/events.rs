//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message triggered after a successful tick moved the snake.
#[derive(Message, Debug, Clone, Copy)]
pub struct SnakeMovedEvent {
    pub head: Position,
}

/// Message triggered when food is eaten (for visual effects).
#[derive(Message, Debug, Clone, Copy)]
pub struct FoodEatenEvent {
    pub position: Position,
}

/// Message triggered when the snake hits a wall or itself.
#[derive(Message, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub score: u32,
}

/// Message triggered by the restart button or keyboard shortcut.
#[derive(Message, Debug, Clone, Copy)]
pub struct RestartEvent;
