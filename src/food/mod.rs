//! Food plugin - handles food placement and eating.

use bevy::prelude::*;
use rand::Rng;

use crate::game::{
    FoodEatenEvent, GameRng, GameSet, Grid, MatchContext, Position, SnakeMovedEvent,
};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Food>()
            .add_systems(Update, food_collision.in_set(GameSet::Resolve));
    }
}

/// The single food cell on the arena.
///
/// Placement is uniform over the whole grid and may land under the snake.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl FromWorld for Food {
    fn from_world(world: &mut World) -> Self {
        let grid = *world.resource::<Grid>();
        let mut rng = world.resource_mut::<GameRng>();
        Food {
            position: grid.random_cell(&mut rng.0),
        }
    }
}

impl Food {
    pub fn randomize<R: Rng>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }
}

/// System to eat the food when a tick moved the head onto it.
fn food_collision(
    mut ctx: MatchContext,
    mut moved_reader: MessageReader<SnakeMovedEvent>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
) {
    let Some(moved) = moved_reader.read().last().copied() else {
        return;
    };
    if !ctx.state.is_playing() {
        return;
    }

    if let Some(position) = ctx.try_eat(moved.head) {
        food_eaten_writer.write(FoodEatenEvent { position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{message_count, test_app, write_message};
    use crate::game::{Direction, GamePhase, GamePlugin, GameState};
    use crate::snake::{Snake, SnakePlugin, snake_movement};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::time::TimeUpdateStrategy;
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    #[test]
    fn randomize_reaches_every_cell() {
        let grid = Grid::new(3, 2, 10.0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food {
            position: Position::new(0, 0),
        };
        let mut seen = Vec::new();
        for _ in 0..200 {
            food.randomize(&grid, &mut rng);
            assert!(grid.contains(food.position));
            if !seen.contains(&food.position) {
                seen.push(food.position);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn eating_food_grows_the_snake() {
        let grid = Grid::new(20, 20, 20.0);
        let mut app = test_app(grid, 21);
        let head = grid.center();
        app.insert_resource(Snake::from_parts(vec![head], Direction::Right, 1));
        app.insert_resource(Food {
            position: head.step(Direction::Right),
        });

        app.world_mut().run_system_once(snake_movement).unwrap();
        app.world_mut().run_system_once(food_collision).unwrap();

        let snake = app.world().resource::<Snake>();
        assert_eq!(snake.head(), Position::new(11, 10));
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.target_length(), 2);
        assert!(grid.contains(app.world().resource::<Food>().position));
        assert_eq!(message_count::<FoodEatenEvent>(&app), 1);
    }

    #[test]
    fn missing_the_food_changes_nothing() {
        let grid = Grid::new(20, 20, 20.0);
        let mut app = test_app(grid, 21);
        app.insert_resource(Snake::from_parts(
            vec![Position::new(4, 4)],
            Direction::Up,
            1,
        ));
        let food = Food {
            position: Position::new(9, 9),
        };
        app.insert_resource(food);
        write_message(
            &mut app,
            SnakeMovedEvent {
                head: Position::new(4, 4),
            },
        );

        app.world_mut().run_system_once(food_collision).unwrap();

        assert_eq!(*app.world().resource::<Food>(), food);
        assert_eq!(app.world().resource::<Snake>().score(), 0);
        assert_eq!(message_count::<FoodEatenEvent>(&app), 0);
    }

    #[test]
    fn food_is_only_checked_after_a_move() {
        let grid = Grid::new(20, 20, 20.0);
        let mut app = test_app(grid, 21);
        let head = Position::new(4, 4);
        app.insert_resource(Snake::from_parts(vec![head], Direction::Up, 1));
        app.insert_resource(Food { position: head });

        app.world_mut().run_system_once(food_collision).unwrap();
        assert_eq!(app.world().resource::<Snake>().score(), 0);

        app.world_mut().resource_mut::<GameState>().phase = GamePhase::GameOver;
        write_message(&mut app, SnakeMovedEvent { head });
        app.world_mut().run_system_once(food_collision).unwrap();
        assert_eq!(app.world().resource::<Snake>().score(), 0);
    }

    #[test]
    fn food_under_the_moved_head_is_eaten() {
        let grid = Grid::new(20, 20, 20.0);
        let mut app = test_app(grid, 21);
        let head = Position::new(7, 3);
        app.insert_resource(Snake::from_parts(vec![head], Direction::Up, 1));
        app.insert_resource(Food { position: head });
        write_message(&mut app, SnakeMovedEvent { head });

        app.world_mut().run_system_once(food_collision).unwrap();

        assert_eq!(app.world().resource::<Snake>().score(), 1);
        let eaten = app
            .world()
            .resource::<Messages<FoodEatenEvent>>()
            .iter_current_update_messages()
            .map(|event| event.position)
            .collect::<Vec<_>>();
        assert_eq!(eaten, [head]);
    }

    #[test]
    fn food_is_eaten_in_the_frame_the_head_reaches_it() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(70)))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins((GamePlugin, SnakePlugin, FoodPlugin))
            .insert_resource(GameRng::seeded(4));

        let grid = *app.world().resource::<Grid>();
        let start = grid.center();
        app.insert_resource(Snake::from_parts(vec![start], Direction::Right, 1));
        app.insert_resource(Food {
            position: start.step(Direction::Right),
        });

        let mut frames = 0;
        while app.world().resource::<Snake>().head() == start {
            assert!(frames < 10, "the snake never stepped");
            app.update();
            frames += 1;
        }

        let snake = app.world().resource::<Snake>();
        assert_eq!(snake.head(), start.step(Direction::Right));
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.target_length(), 2);
    }
}
