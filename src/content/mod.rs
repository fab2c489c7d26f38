//! Content domain: RON tuning overrides loaded at startup.
//!
//! Tuning resources ship with built-in defaults; `assets/data/tuning.ron`
//! can override any subset of them without a rebuild. A missing or broken
//! file logs a warning and the defaults stand.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::boss::BossTuning;
use crate::movement::MovementTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk tuning file. Every section is optional; absent sections keep
/// their compiled-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct TuningFile {
    pub movement: Option<MovementTuning>,
    pub boss: Option<BossTuning>,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Startup system: apply tuning overrides from disk over the defaults.
fn apply_tuning_overrides(
    mut movement: ResMut<MovementTuning>,
    mut boss: ResMut<BossTuning>,
) {
    let file = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{e}; using built-in tuning defaults");
            return;
        }
    };

    if let Some(overrides) = file.movement {
        *movement = overrides;
        info!("Loaded movement tuning from {TUNING_PATH}");
    }
    if let Some(overrides) = file.boss {
        *boss = overrides;
        info!("Loaded boss tuning from {TUNING_PATH}");
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_tuning_overrides);
    }
}
