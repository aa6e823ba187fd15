//! Config — tunables пешки из TOML файла
//!
//! Все значения имеют defaults (5 m/s, 10 1/s, capsule 0.34/0.88, arm 3.0m),
//! файл может задавать любое подмножество полей. Ошибка загрузки — не краш:
//! логируем warning и работаем на defaults (неправильный конфиг проявляется
//! как отсутствие поведения, не как diagnosable failure).

use std::{fmt, fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::logger;

const DEFAULT_MAX_WALK_SPEED: f32 = 5.0;
const DEFAULT_ROTATION_SPEED: f32 = 10.0;
const DEFAULT_LOOK_SENSITIVITY: f32 = 2.5;
const DEFAULT_CAPSULE_RADIUS: f32 = 0.34;
const DEFAULT_CAPSULE_HALF_HEIGHT: f32 = 0.88;
const DEFAULT_ARM_LENGTH: f32 = 3.0;

/// Tunables симуляции (Resource + источник для spawn helper'а)
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Максимальная скорость ходьбы (m/s)
    pub max_walk_speed: f32,
    /// Скорость интерполяции разворота (1/s)
    pub rotation_speed: f32,
    /// Чувствительность look input (rad/s на единицу input)
    pub look_sensitivity: f32,
    /// Радиус капсулы пешки (метры)
    pub capsule_radius: f32,
    /// Полувысота капсулы, включая полусферы (метры)
    pub capsule_half_height: f32,
    /// Длина spring arm камеры (метры)
    pub arm_length: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_walk_speed: DEFAULT_MAX_WALK_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            capsule_radius: DEFAULT_CAPSULE_RADIUS,
            capsule_half_height: DEFAULT_CAPSULE_HALF_HEIGHT,
            arm_length: DEFAULT_ARM_LENGTH,
        }
    }
}

impl SimulationConfig {
    /// Загрузка из TOML файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&raw).map_err(ConfigError::Parse)
    }

    /// Загрузка с fallback на defaults (warning в лог)
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                logger::log_warning(&format!(
                    "Config {} не загружен ({}), работаем на defaults",
                    path.display(),
                    error
                ));
                Self::default()
            }
        }
    }
}

/// Ошибка загрузки конфига (единственная Result-граница в crate)
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io: {}", error),
            Self::Parse(error) => write!(f, "toml: {}", error),
        }
    }
}

impl std::error::Error for ConfigError {}
