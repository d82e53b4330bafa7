//! Snake plugin - handles the snake body, movement input, the fixed-rate tick and collisions.

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use crate::game::{
    Direction, GameOverEvent, GamePhase, GameRng, GameSet, GameState, Grid, InputBuffer,
    MoveTimer, Position, SnakeMovedEvent, StepTimer,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Snake>()
            .add_systems(Update, snake_movement_input.in_set(GameSet::Input))
            .add_systems(
                Update,
                (tick_step_timer, snake_movement.run_if(step_due))
                    .chain()
                    .in_set(GameSet::Tick),
            );
    }
}

/// The player's snake. The body is never empty and its head is at the front.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    previous_body: Vec<Position>,
    direction: Direction,
    target_length: usize,
    score: u32,
}

impl FromWorld for Snake {
    fn from_world(world: &mut World) -> Self {
        let grid = *world.resource::<Grid>();
        let mut rng = world.resource_mut::<GameRng>();
        Snake::new(&grid, &mut rng.0)
    }
}

impl Snake {
    /// A fresh one-cell snake at the center of `grid`.
    pub fn new<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let head = grid.center();
        Snake {
            body: VecDeque::from([head]),
            previous_body: vec![head],
            direction: Direction::ALL[rng.random_range(0..Direction::ALL.len())],
            target_length: 1,
            score: 0,
        }
    }

    pub fn reset<R: Rng>(&mut self, grid: &Grid, rng: &mut R) {
        *self = Snake::new(grid, rng);
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Body as it was before the last successful [`Snake::advance`].
    pub fn previous_body(&self) -> &[Position] {
        &self.previous_body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Turns the snake unless `direction` would reverse it. Returns whether it turned.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Moves the head one cell forward.
    ///
    /// Returns `false` without touching the body when the new head would leave
    /// the grid or land on a cell that stays occupied after this move. The tail
    /// only counts as free when the body is already at its target length,
    /// since that is the only case where it gets trimmed.
    pub fn advance(&mut self, grid: &Grid) -> bool {
        let new_head = self.head().step(self.direction);
        if !grid.contains(new_head) || self.occupies_after_move(new_head) {
            return false;
        }

        self.previous_body = self.body.iter().copied().collect();
        self.body.push_front(new_head);
        self.body.truncate(self.target_length);
        true
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
        self.score += 1;
    }

    fn occupies_after_move(&self, cell: Position) -> bool {
        let tail_vacates = self.body.len() >= self.target_length;
        let still_occupied = self.body.len() - usize::from(tail_vacates);
        self.body.iter().take(still_occupied).any(|&p| p == cell)
    }

    #[cfg(test)]
    pub fn from_parts(body: Vec<Position>, direction: Direction, target_length: usize) -> Self {
        assert!(!body.is_empty() && body.len() <= target_length);
        Snake {
            previous_body: body.clone(),
            body: body.into(),
            direction,
            target_length,
            score: 0,
        }
    }
}

/// System to read keyboard input and queue direction changes.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_buffer: ResMut<InputBuffer>,
    snake: Res<Snake>,
    game_state: Res<GameState>,
) {
    if !game_state.is_playing() {
        return;
    }

    // Get the last direction in buffer or current head direction
    let last_direction = input_buffer.last_direction().unwrap_or(snake.direction());

    let new_direction = Direction::from_input(&keyboard_input, last_direction);

    // If direction changed and it's not opposite to the last direction, queue it
    if new_direction != last_direction && new_direction != last_direction.opposite() {
        input_buffer.queue_direction(new_direction);
    }
}

/// System to advance the step timer.
fn tick_step_timer(time: Res<Time>, mut step_timer: ResMut<StepTimer>) {
    step_timer.0.tick(time.delta());
}

/// Run condition: a full step interval has elapsed this frame.
fn step_due(step_timer: Res<StepTimer>) -> bool {
    step_timer.0.just_finished()
}

/// System to execute one snake step on the tick timer.
pub(crate) fn snake_movement(
    grid: Res<Grid>,
    mut snake: ResMut<Snake>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    mut move_timer: ResMut<MoveTimer>,
    mut moved_writer: MessageWriter<SnakeMovedEvent>,
    mut game_over_writer: MessageWriter<GameOverEvent>,
) {
    if !game_state.is_playing() {
        return;
    }

    move_timer.elapsed = std::time::Duration::ZERO;

    if let Some(buffered_direction) = input_buffer.pop_direction() {
        snake.set_direction(buffered_direction);
    }

    if snake.advance(&grid) {
        moved_writer.write(SnakeMovedEvent { head: snake.head() });
    } else {
        game_state.phase = GamePhase::GameOver;
        input_buffer.clear();
        game_over_writer.write(GameOverEvent {
            score: snake.score(),
        });
        info!("Game Over! Final score: {}", snake.score());
    }
}
