use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use food::FoodPlugin;
use game::{
    ARENA_HEIGHT, ARENA_WIDTH, BACKGROUND_COLOR, CELL_SIZE, GamePlugin, WINDOW_MARGIN,
    WINDOW_TITLE,
};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        (ARENA_WIDTH as f32 * CELL_SIZE + WINDOW_MARGIN) as u32,
                        (ARENA_HEIGHT as f32 * CELL_SIZE + WINDOW_MARGIN) as u32,
                    ),
                    title: WINDOW_TITLE.to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Order matters: the snake and food are built from the grid and RNG
        .add_plugins((GamePlugin, SnakePlugin, FoodPlugin, RenderingPlugin, UiPlugin))
        .run()
}
