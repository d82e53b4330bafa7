//! Core game module containing shared components, resources, events, and constants.

mod components;
mod constants;
mod context;
mod events;
mod grid;
mod resources;

pub use components::*;
pub use constants::*;
pub use context::*;
pub use events::*;
pub use grid::*;
pub use resources::*;

use bevy::prelude::*;

/// Per-frame ordering of the game loop.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard and pointer handling.
    Input,
    /// The fixed-rate snake step.
    Tick,
    /// Consequences of a tick or a restart request.
    Resolve,
    /// Drawing and UI updates.
    Present,
}

/// Plugin for the shared game resources and the system set ordering.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Grid::default())
            .insert_resource(GameRng::from_env())
            .init_resource::<GameState>()
            .init_resource::<InputBuffer>()
            .init_resource::<MoveTimer>()
            .init_resource::<StepTimer>()
            .init_resource::<CameraShake>()
            .add_message::<SnakeMovedEvent>()
            .add_message::<FoodEatenEvent>()
            .add_message::<GameOverEvent>()
            .add_message::<RestartEvent>()
            .configure_sets(
                Update,
                (
                    GameSet::Input,
                    GameSet::Tick,
                    GameSet::Resolve,
                    GameSet::Present,
                )
                    .chain(),
            );
    }
}
