//! Game configuration
//!
//! Geometry of the field, paddle, ball and brick grid. Loaded from JSON,
//! validated once before a round is built.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration cannot produce well-formed geometry
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dimension or count that must be strictly positive
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },

    /// A spacing, step or margin that must not be negative
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: i64 },

    /// A value above its allowed maximum
    #[error("{name} must be at most {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        max: i64,
    },

    /// An entity that does not fit inside the play field
    #[error("{what} does not fit inside the play field")]
    DoesNotFit { what: &'static str },

    /// A restored state that no round could have reached
    #[error("inconsistent snapshot: {reason}")]
    Snapshot { reason: &'static str },

    /// Malformed JSON
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Field and entity geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,

    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Paddle top edge sits this far above the field bottom
    pub paddle_bottom_margin: i32,
    pub paddle_step: i32,

    pub ball_size: i32,
    /// Velocity on spawn and after `reset_ball`
    pub ball_velocity: IVec2,

    pub brick_width: i32,
    pub brick_height: i32,
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_spacing: i32,
    /// Top-left corner of the first brick
    pub grid_origin: IVec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_step: PADDLE_STEP,

            ball_size: BALL_SIZE,
            ball_velocity: IVec2::new(BALL_VELOCITY_X, BALL_VELOCITY_Y),

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_spacing: BRICK_SPACING,
            grid_origin: IVec2::new(GRID_ORIGIN_X, GRID_ORIGIN_Y),
        }
    }
}

fn positive(name: &'static str, value: i64) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: i64) -> Result<(), ConfigError> {
    if value < 0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn at_most(name: &'static str, value: i64, max: i64) -> Result<(), ConfigError> {
    if value > max {
        return Err(ConfigError::OutOfRange { name, value, max });
    }
    Ok(())
}

impl GameConfig {
    /// Reject configurations that would produce degenerate geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width.into())?;
        positive("field_height", self.field_height.into())?;
        positive("paddle_width", self.paddle_width.into())?;
        positive("paddle_height", self.paddle_height.into())?;
        positive("ball_size", self.ball_size.into())?;
        positive("brick_width", self.brick_width.into())?;
        positive("brick_height", self.brick_height.into())?;
        positive("brick_rows", self.brick_rows.into())?;
        positive("brick_columns", self.brick_columns.into())?;

        non_negative("paddle_step", self.paddle_step.into())?;
        non_negative("brick_spacing", self.brick_spacing.into())?;
        non_negative("paddle_bottom_margin", self.paddle_bottom_margin.into())?;
        non_negative("grid_origin.x", self.grid_origin.x.into())?;
        non_negative("grid_origin.y", self.grid_origin.y.into())?;

        at_most("field_width", self.field_width.into(), MAX_FIELD_SIZE.into())?;
        at_most("field_height", self.field_height.into(), MAX_FIELD_SIZE.into())?;
        at_most("paddle_step", self.paddle_step.into(), self.field_width.into())?;

        // Per-tick displacement must stay below the field size
        let speed_limit = i64::from(self.max_ball_speed());
        at_most(
            "ball_velocity.x",
            i64::from(self.ball_velocity.x).abs(),
            speed_limit,
        )?;
        at_most(
            "ball_velocity.y",
            i64::from(self.ball_velocity.y).abs(),
            speed_limit,
        )?;

        if self.paddle_width > self.field_width {
            return Err(ConfigError::DoesNotFit { what: "paddle" });
        }
        if self.paddle_bottom_margin < self.paddle_height
            || self.paddle_bottom_margin > self.field_height
        {
            return Err(ConfigError::DoesNotFit { what: "paddle" });
        }
        if self.ball_size >= self.field_width || self.ball_size >= self.field_height {
            return Err(ConfigError::DoesNotFit { what: "ball" });
        }

        let (right, bottom) = self.grid_extent();
        if right > i64::from(self.field_width) || bottom > i64::from(self.field_height) {
            return Err(ConfigError::DoesNotFit { what: "brick grid" });
        }

        Ok(())
    }

    /// Right and bottom edges of the brick grid (computed wide to avoid overflow)
    fn grid_extent(&self) -> (i64, i64) {
        let cols = i64::from(self.brick_columns);
        let rows = i64::from(self.brick_rows);
        let spacing = i64::from(self.brick_spacing);
        let right = i64::from(self.grid_origin.x)
            + cols * i64::from(self.brick_width)
            + (cols - 1) * spacing;
        let bottom = i64::from(self.grid_origin.y)
            + rows * i64::from(self.brick_height)
            + (rows - 1) * spacing;
        (right, bottom)
    }

    /// Largest per-axis ball speed (units per tick) the field allows
    pub fn max_ball_speed(&self) -> i32 {
        self.field_width.min(self.field_height) - 1
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self) -> i32 {
        self.field_height - self.paddle_bottom_margin
    }

    /// Largest x the paddle may take while staying inside the field
    pub fn paddle_max_x(&self) -> i32 {
        self.field_width - self.paddle_width
    }

    /// Ball spawn position (field centre)
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(
            self.field_width / 2 - self.ball_size / 2,
            self.field_height / 2 - self.ball_size / 2,
        )
    }

    /// Total number of bricks in the grid
    pub fn brick_count(&self) -> usize {
        self.brick_rows as usize * self.brick_columns as usize
    }

    /// Parse and validate a JSON config; omitted fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
