//! Rendering plugin - immediate-mode drawing of the snake and food, interpolation, effects and camera.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::food::Food;
use crate::game::{
    CORNER_RADIUS, CameraShake, FOOD_COLOR, FOOD_FLASH_COLOR, FoodEatenEvent, GameOverEvent,
    GameSet, Grid, MOVE_INTERVAL, MoveTimer, Position, PulseEffect, SNAKE_EYE_COLOR,
    SNAKE_HEAD_COLOR, SNAKE_HEAD_GLOW_COLOR, SNAKE_SEGMENT_COLOR, Z_FOOD, Z_SNAKE_HEAD,
    Z_SNAKE_SEGMENT,
};
use crate::snake::Snake;

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                update_move_timer,
                draw_food,
                draw_snake,
                spawn_food_eaten_effect,
                pulse_effect_system,
                trigger_camera_shake_on_game_over,
                camera_shake_system,
            )
                .chain()
                .in_set(GameSet::Present),
        );
    }
}

/// Fraction of the current tick that has elapsed, clamped to `0.0..=1.0`.
pub fn tick_progress(move_timer: &MoveTimer) -> f32 {
    (move_timer.elapsed.as_secs_f32() / MOVE_INTERVAL.as_secs_f32()).min(1.0)
}

/// Where segment `index` is drawn, in fractional cell coordinates.
///
/// Each segment slides from its slot in the previous body towards its slot in
/// the current one. Segments that did not exist before the tick stay put.
pub fn interpolated_segment(snake: &Snake, index: usize, progress: f32) -> Vec2 {
    let current = cell_vec(snake.body()[index]);
    let previous = snake
        .previous_body()
        .get(index)
        .copied()
        .map(cell_vec)
        .unwrap_or(current);
    previous.lerp(current, progress)
}

fn cell_vec(pos: Position) -> Vec2 {
    Vec2::new(pos.x as f32, pos.y as f32)
}

/// System to track elapsed time for interpolation.
fn update_move_timer(mut move_timer: ResMut<MoveTimer>, time: Res<Time>) {
    move_timer.elapsed += time.delta();
}

/// System to draw the snake, head last so it sits on top.
fn draw_snake(
    mut painter: ShapePainter,
    grid: Res<Grid>,
    snake: Res<Snake>,
    move_timer: Res<MoveTimer>,
) {
    let progress = tick_progress(&move_timer);

    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    painter.corner_radii = Vec4::splat(CORNER_RADIUS / (grid.cell_size / 2.0));
    painter.color = SNAKE_SEGMENT_COLOR;
    for index in (1..snake.body().len()).rev() {
        let world = grid.cell_to_world(interpolated_segment(&snake, index, progress));
        painter.set_translation(world.extend(Z_SNAKE_SEGMENT));
        painter.rect(Vec2::splat(grid.cell_size));
    }

    let head = grid.cell_to_world(interpolated_segment(&snake, 0, progress));

    // Glow effect behind the head
    painter.corner_radii = Vec4::ZERO;
    painter.color = SNAKE_HEAD_GLOW_COLOR;
    painter.alpha_mode = ShapeAlphaMode::Add;
    painter.set_translation(head.extend(Z_SNAKE_HEAD - 0.1));
    painter.circle(grid.cell_size * 0.8);
    painter.alpha_mode = ShapeAlphaMode::Blend;

    let size = grid.cell_size * 0.9;
    painter.corner_radii = Vec4::splat(CORNER_RADIUS / (size / 2.0));
    painter.color = SNAKE_HEAD_COLOR;
    painter.set_translation(head.extend(Z_SNAKE_HEAD));
    painter.rect(Vec2::splat(size));

    // Eyes sit towards the front of the head, one on each side
    let (dx, dy) = snake.direction().delta();
    let forward = Vec2::new(dx as f32, dy as f32);
    let side = forward.perp();
    painter.corner_radii = Vec4::ZERO;
    painter.color = SNAKE_EYE_COLOR;
    for sign in [1.0, -1.0] {
        let eye = head + (forward + side * sign) * grid.cell_size * 0.15;
        painter.set_translation(eye.extend(Z_SNAKE_HEAD + 0.1));
        painter.circle(grid.cell_size * 0.08);
    }
}

/// System to draw the food with a gentle pulse.
fn draw_food(mut painter: ShapePainter, grid: Res<Grid>, food: Res<Food>, time: Res<Time>) {
    let phase = time.elapsed_secs() / 0.8 * std::f32::consts::TAU;
    let scale = 1.0 + phase.sin() * 0.15;

    painter.color = FOOD_COLOR;
    painter.set_translation(grid.to_world(food.position).extend(Z_FOOD));
    painter.circle(grid.cell_size / 2.0 * scale);
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
) {
    for event in food_eaten_reader.read() {
        commands.spawn(PulseEffect {
            position: event.position,
            timer: Timer::from_seconds(0.3, TimerMode::Once),
            start_scale: 1.0,
            end_scale: 2.5,
        });
    }
}

/// System to advance and draw pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    mut painter: ShapePainter,
    time: Res<Time>,
    grid: Res<Grid>,
    mut effects: Query<(Entity, &mut PulseEffect)>,
) {
    for (entity, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            painter.color = FOOD_FLASH_COLOR.with_alpha(0.8 * (1.0 - progress));
            painter.set_translation(grid.to_world(effect.position).extend(Z_FOOD + 0.5));
            painter.circle(grid.cell_size / 2.0 * scale);
        }
    }
}

/// System to trigger camera shake on game over.
fn trigger_camera_shake_on_game_over(
    mut game_over_reader: MessageReader<GameOverEvent>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if game_over_reader.read().last().is_some() {
        camera_shake.timer = Timer::from_seconds(0.5, TimerMode::Once);
        camera_shake.intensity = 8.0;
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) -> Result {
    if camera_shake.timer.is_finished() {
        return Ok(());
    }
    camera_shake.timer.tick(time.delta());

    let mut camera_transform = camera_query.single_mut()?;
    if camera_shake.timer.is_finished() {
        // Reset camera position when shake is done
        camera_transform.translation.x = 0.0;
        camera_transform.translation.y = 0.0;
    } else {
        let decay = 1.0 - camera_shake.timer.fraction();

        let mut rng = rand::rng();
        let shake_x = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
        let shake_y = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;

        camera_transform.translation.x = shake_x;
        camera_transform.translation.y = shake_y;
    }
    Ok(())
}
