//! Game resources (singleton state).

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{ASSET_ROOT, Direction, FONT_CANDIDATES, MOVE_INTERVAL, SEED_ENV_VAR};

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Main game state resource.
#[derive(Resource, Debug, Default)]
pub struct GameState {
    pub phase: GamePhase,
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

/// Input buffer to queue direction changes.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_directions: Vec<Direction>,
}

impl InputBuffer {
    /// Queue a direction change (max 2 buffered inputs).
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.queued_directions.len() < 2 {
            self.queued_directions.push(direction);
        }
    }

    /// Pop the next queued direction.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        if !self.queued_directions.is_empty() {
            Some(self.queued_directions.remove(0))
        } else {
            None
        }
    }

    /// Get the last queued direction without removing it.
    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_directions.last().copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queued_directions.len()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.queued_directions.clear();
    }
}

/// Resource to track time since last move for interpolation.
#[derive(Resource)]
pub struct MoveTimer {
    pub elapsed: Duration,
}

impl Default for MoveTimer {
    fn default() -> Self {
        MoveTimer {
            elapsed: Duration::ZERO,
        }
    }
}

/// Paces the snake step. Restarting a match resets it, so the first step of
/// a new match always waits a full interval.
#[derive(Resource)]
pub struct StepTimer(pub Timer);

impl Default for StepTimer {
    fn default() -> Self {
        StepTimer(Timer::new(MOVE_INTERVAL, TimerMode::Repeating))
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        CameraShake {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            intensity: 0.0,
        }
    }
}

/// Random source for every game-state decision (spawn direction, food).
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        GameRng(StdRng::seed_from_u64(seed))
    }

    /// Seeds from `SNAKE_SEED` when set, otherwise from the OS.
    pub fn from_env() -> Self {
        match std::env::var(SEED_ENV_VAR) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(seed) => {
                    info!("Seeding game RNG from {SEED_ENV_VAR}={seed}");
                    GameRng::seeded(seed)
                }
                Err(err) => {
                    warn!("Ignoring {SEED_ENV_VAR}={value:?}: {err}");
                    GameRng(StdRng::from_os_rng())
                }
            },
            Err(_) => GameRng(StdRng::from_os_rng()),
        }
    }
}

/// Font used by all UI text.
#[derive(Resource)]
pub struct UiFont(pub Handle<Font>);

impl FromWorld for UiFont {
    fn from_world(world: &mut World) -> Self {
        match find_font(&asset_root(), FONT_CANDIDATES) {
            Some(path) => {
                info!("Using UI font {path}");
                UiFont(world.resource::<AssetServer>().load(path))
            }
            None => {
                info!("No bundled UI font found, using the built-in font");
                UiFont(Handle::default())
            }
        }
    }
}

/// Directory the asset server loads from: `BEVY_ASSET_ROOT`, then
/// `CARGO_MANIFEST_DIR`, then the executable's directory, joined with `assets`.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join(ASSET_ROOT)
}

/// First candidate that exists under `root`.
pub fn find_font(root: &Path, candidates: &[&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .copied()
        .find(|candidate| root.join(candidate).is_file())
}
