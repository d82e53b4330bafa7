//! Game constants for arena size, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Arena dimensions, in cells
pub const ARENA_WIDTH: u32 = 40;
pub const ARENA_HEIGHT: u32 = 30;

// Visual settings
pub const CELL_SIZE: f32 = 20.0;
pub const CORNER_RADIUS: f32 = 4.0;
pub const WINDOW_MARGIN: f32 = 20.0;
pub const WINDOW_TITLE: &str = "Snake";

// Timing
pub const TICK_RATE_HZ: u64 = 15;
pub const MOVE_INTERVAL: Duration = Duration::from_micros(1_000_000 / TICK_RATE_HZ);

// Randomness
pub const SEED_ENV_VAR: &str = "SNAKE_SEED";

// Fonts, relative to the `assets/` directory, in order of preference
pub const ASSET_ROOT: &str = "assets";
pub const FONT_CANDIDATES: &[&str] = &[
    "fonts/FiraSans-Bold.ttf",
    "fonts/NotoSans-Bold.ttf",
    "fonts/DejaVuSans-Bold.ttf",
];

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(0.6, 1.0, 0.6, 1.0);
pub const SNAKE_HEAD_GLOW_COLOR: Color = Color::srgba(0.2, 0.8, 0.2, 0.35);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgba(0.0, 0.8, 0.0, 1.0);
pub const SNAKE_EYE_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const FOOD_FLASH_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const ARENA_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.9, 0.3, 0.6);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);
pub const BUTTON_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
pub const BUTTON_HOVER_COLOR: Color = Color::srgb(0.39, 0.39, 0.39);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
