//! The match context: everything a tick or a restart needs, in one system param.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::{GamePhase, GameRng, GameState, Grid, Position};
use crate::food::Food;
use crate::snake::Snake;

/// Grid, snake, food, randomness and phase, borrowed together for one system run.
#[derive(SystemParam)]
pub struct MatchContext<'w> {
    pub grid: Res<'w, Grid>,
    pub snake: ResMut<'w, Snake>,
    pub food: ResMut<'w, Food>,
    pub rng: ResMut<'w, GameRng>,
    pub state: ResMut<'w, GameState>,
}

impl MatchContext<'_> {
    /// Resets the snake, re-rolls the food and resumes play.
    pub fn start_match(&mut self) {
        self.snake.reset(&self.grid, &mut self.rng.0);
        self.food.randomize(&self.grid, &mut self.rng.0);
        self.state.phase = GamePhase::Playing;
        info!(
            "New match: snake at {:?} heading {:?}, food at {:?}",
            self.snake.head(),
            self.snake.direction(),
            self.food.position
        );
    }

    /// Grows the snake and re-rolls the food if `head` is on it.
    pub fn try_eat(&mut self, head: Position) -> Option<Position> {
        if head != self.food.position {
            return None;
        }
        let eaten = head;
        self.snake.grow();
        self.food.randomize(&self.grid, &mut self.rng.0);
        debug!(
            "Food eaten at {:?}, score {}, target length {}, next food at {:?}",
            eaten,
            self.snake.score(),
            self.snake.target_length(),
            self.food.position
        );
        Some(eaten)
    }
}
