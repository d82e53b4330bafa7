//! UI plugin - handles the score display, game over screen, restart control and game flow.

use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;
use std::time::Duration;

use bevy_vector_shapes::prelude::*;

use crate::game::{
    ARENA_BORDER_COLOR, ARENA_COLOR, BUTTON_COLOR, BUTTON_HOVER_COLOR, GameOverEvent, GameOverUI,
    GameSet, GameState, Grid, InputBuffer, MatchContext, MoveTimer, RestartButton, RestartEvent,
    ScoreText, StepTimer, UiFont, Z_BACKGROUND,
};
use crate::snake::Snake;

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFont>()
            .add_systems(Startup, (setup_system, start_match_system))
            .add_systems(
                Update,
                (restart_button_system, restart_key_system).in_set(GameSet::Input),
            )
            .add_systems(Update, restart_game.in_set(GameSet::Resolve))
            .add_systems(
                Update,
                (update_score_text, spawn_game_over_screen_system)
                    .chain()
                    .in_set(GameSet::Present),
            );
    }
}

// Type alias for the restart button's interaction query
type RestartButtonQuery<'w, 's> = Query<
    'w,
    's,
    (&'static Interaction, &'static mut BackgroundColor),
    (Changed<Interaction>, With<RestartButton>),
>;

/// Initial setup system - camera, arena, score text.
fn setup_system(mut commands: Commands, grid: Res<Grid>, font: Res<UiFont>) {
    // Setup camera with HDR and bloom for glowing effects
    commands.spawn((
        Camera2d,
        Hdr,
        Bloom {
            intensity: 0.3,
            low_frequency_boost: 0.6,
            low_frequency_boost_curvature: 0.5,
            high_pass_frequency: 0.8,
            ..default()
        },
    ));

    // Arena background
    let arena = grid.pixel_size();
    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(arena),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND)),
    ));

    // Glowing arena border using hollow rectangle
    commands.spawn(ShapeBundle::rect(
        &ShapeConfig {
            color: ARENA_BORDER_COLOR,
            alpha_mode: ShapeAlphaMode::Add,
            hollow: true,
            thickness: 4.0,
            corner_radii: Vec4::splat(0.02),
            transform: Transform::from_xyz(0.0, 0.0, Z_BACKGROUND + 0.1),
            ..ShapeConfig::default_2d()
        },
        arena + Vec2::splat(4.0),
    ));

    commands.spawn((
        Text::from("Score: 0"),
        TextFont {
            font: font.0.clone(),
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));
}

/// System to start the first match once the window is up.
fn start_match_system(mut ctx: MatchContext) {
    ctx.start_match();
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, font: &Handle<Font>, score: u32) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("GAME OVER"),
                TextFont {
                    font: font.clone(),
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 0.3, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(format!("Final Score: {}", score)),
                TextFont {
                    font: font.clone(),
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(160.0),
                        height: Val::Px(40.0),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        margin: UiRect::bottom(Val::Px(15.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_COLOR),
                    RestartButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::from("Restart"),
                        TextFont {
                            font: font.clone(),
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            parent.spawn((
                Text::from("or press SPACE"),
                TextFont {
                    font: font.clone(),
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to spawn game over screen when game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    mut game_over_reader: MessageReader<GameOverEvent>,
    font: Res<UiFont>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    // Only spawn once per game over
    if let Some(event) = game_over_reader.read().last()
        && game_over_ui.is_empty()
    {
        spawn_game_over_screen(&mut commands, &font.0, event.score);
    }
}

/// System to highlight the restart button and request a restart on click.
fn restart_button_system(
    mut buttons: RestartButtonQuery,
    mut restart_writer: MessageWriter<RestartEvent>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                restart_writer.write(RestartEvent);
            }
            Interaction::Hovered => background.0 = BUTTON_HOVER_COLOR,
            Interaction::None => background.0 = BUTTON_COLOR,
        }
    }
}

/// System to request a restart with the keyboard.
fn restart_key_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut restart_writer: MessageWriter<RestartEvent>,
) {
    if !game_state.is_playing() && keyboard_input.just_pressed(KeyCode::Space) {
        restart_writer.write(RestartEvent);
    }
}

/// System to restart the match from the game over screen.
fn restart_game(
    mut commands: Commands,
    mut ctx: MatchContext,
    mut restart_reader: MessageReader<RestartEvent>,
    mut input_buffer: ResMut<InputBuffer>,
    mut move_timer: ResMut<MoveTimer>,
    mut step_timer: ResMut<StepTimer>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if restart_reader.read().last().is_none() || ctx.state.is_playing() {
        return;
    }

    for entity in game_over_ui.iter() {
        commands.entity(entity).despawn();
    }

    input_buffer.clear();
    move_timer.elapsed = Duration::ZERO;
    step_timer.0.reset();
    ctx.start_match();
}

/// System to update the score display, visible only while playing.
fn update_score_text(
    game_state: Res<GameState>,
    snake: Res<Snake>,
    mut query: Query<(&mut Text, &mut Visibility), With<ScoreText>>,
) -> Result {
    let (mut text, mut visibility) = query.single_mut()?;
    *text = Text::from(format!("Score: {}", snake.score()));
    *visibility = if game_state.is_playing() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use crate::game::testing::{message_count, test_app, write_message};
    use crate::game::{Direction, GamePhase, Position};
    use bevy::ecs::system::RunSystemOnce;

    fn game_over_app() -> App {
        let mut app = test_app(Grid::new(20, 20, 20.0), 8);
        let mut snake = Snake::from_parts(
            vec![Position::new(19, 10), Position::new(18, 10)],
            Direction::Right,
            3,
        );
        snake.grow();
        app.insert_resource(snake);
        app.world_mut().resource_mut::<GameState>().phase = GamePhase::GameOver;
        app.world_mut().spawn((Node::default(), GameOverUI));
        app
    }

    #[test]
    fn restart_resets_the_match() {
        let mut app = game_over_app();
        app.world_mut()
            .resource_mut::<InputBuffer>()
            .queue_direction(Direction::Up);
        app.world_mut()
            .resource_mut::<StepTimer>()
            .0
            .set_elapsed(Duration::from_millis(60));
        write_message(&mut app, RestartEvent);

        app.world_mut().run_system_once(restart_game).unwrap();

        let world = app.world_mut();
        assert_eq!(world.resource::<GameState>().phase, GamePhase::Playing);
        let snake = world.resource::<Snake>();
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.head(), Position::new(10, 10));
        assert!(Grid::new(20, 20, 20.0).contains(world.resource::<Food>().position));
        assert_eq!(world.resource::<InputBuffer>().len(), 0);
        assert_eq!(world.resource::<StepTimer>().0.elapsed(), Duration::ZERO);

        let mut overlays = world.query_filtered::<Entity, With<GameOverUI>>();
        assert_eq!(overlays.iter(world).count(), 0);
    }

    #[test]
    fn no_restart_without_a_request() {
        let mut app = game_over_app();

        app.world_mut().run_system_once(restart_game).unwrap();

        assert_eq!(
            app.world().resource::<GameState>().phase,
            GamePhase::GameOver
        );
        assert_eq!(app.world().resource::<Snake>().score(), 1);
    }

    #[test]
    fn restart_is_ignored_while_playing() {
        let mut app = game_over_app();
        app.world_mut().resource_mut::<GameState>().phase = GamePhase::Playing;
        write_message(&mut app, RestartEvent);

        app.world_mut().run_system_once(restart_game).unwrap();

        assert_eq!(app.world().resource::<Snake>().score(), 1);
    }

    #[test]
    fn score_text_follows_the_snake() {
        let mut app = game_over_app();
        app.world_mut().resource_mut::<GameState>().phase = GamePhase::Playing;
        let entity = app
            .world_mut()
            .spawn((Text::from("Score: 0"), Visibility::Hidden, ScoreText))
            .id();

        app.world_mut()
            .run_system_once::<_, Result, _>(update_score_text)
            .unwrap()
            .unwrap();

        let world = app.world();
        assert_eq!(world.get::<Text>(entity).unwrap().0, "Score: 1");
        assert_eq!(
            *world.get::<Visibility>(entity).unwrap(),
            Visibility::Inherited
        );
    }

    #[test]
    fn clicking_restart_requests_a_restart() {
        let mut app = game_over_app();
        app.world_mut().spawn((
            Button,
            RestartButton,
            Interaction::Pressed,
            BackgroundColor(BUTTON_COLOR),
        ));

        app.world_mut().run_system_once(restart_button_system).unwrap();

        assert_eq!(message_count::<RestartEvent>(&app), 1);
    }

    #[test]
    fn hovering_restart_only_highlights_it() {
        let mut app = game_over_app();
        let button = app
            .world_mut()
            .spawn((
                Button,
                RestartButton,
                Interaction::Hovered,
                BackgroundColor(BUTTON_COLOR),
            ))
            .id();

        app.world_mut().run_system_once(restart_button_system).unwrap();

        let background = app.world().get::<BackgroundColor>(button).unwrap();
        assert_eq!(background.0, BUTTON_HOVER_COLOR);
        assert_eq!(message_count::<RestartEvent>(&app), 0);
    }

    #[test]
    fn space_restarts_only_after_game_over() {
        let mut app = game_over_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);

        app.world_mut().run_system_once(restart_key_system).unwrap();
        assert_eq!(message_count::<RestartEvent>(&app), 1);

        let mut app = game_over_app();
        app.world_mut().resource_mut::<GameState>().phase = GamePhase::Playing;
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);

        app.world_mut().run_system_once(restart_key_system).unwrap();
        assert_eq!(message_count::<RestartEvent>(&app), 0);
    }

    #[test]
    fn game_over_shows_one_overlay_with_the_score() {
        let mut app = test_app(Grid::new(20, 20, 20.0), 8);
        app.insert_resource(UiFont(Handle::default()));
        write_message(&mut app, GameOverEvent { score: 3 });

        app.world_mut()
            .run_system_once(spawn_game_over_screen_system)
            .unwrap();

        let world = app.world_mut();
        let mut overlays = world.query_filtered::<Entity, With<GameOverUI>>();
        let overlay = overlays.single(world).unwrap();
        let mut texts = world.query::<(&ChildOf, &Text)>();
        assert!(
            texts
                .iter(world)
                .any(|(parent, text)| parent.parent() == overlay && text.0 == "Final Score: 3")
        );

        write_message(&mut app, GameOverEvent { score: 3 });
        app.world_mut()
            .run_system_once(spawn_game_over_screen_system)
            .unwrap();

        let world = app.world_mut();
        let mut overlays = world.query_filtered::<Entity, With<GameOverUI>>();
        assert_eq!(overlays.iter(world).count(), 1);
    }
}
