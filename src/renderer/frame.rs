//! Frame description for an external rendering backend
//!
//! Turns the simulation's read accessors into an ordered list of draw
//! commands. A backend (SDL, wgpu, a terminal) only has to execute them.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Rect, Simulation};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
}

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const PADDLE_COLOR: Color = Color::WHITE;
pub const BALL_COLOR: Color = Color::RED;
pub const BRICK_COLOR: Color = Color::GREEN;
pub const TEXT_COLOR: Color = Color::WHITE;

/// Where the score label is anchored
pub const SCORE_POS: IVec2 = IVec2::new(10, 10);
/// Offset of the "Game Over" label from the field centre
pub const GAME_OVER_OFFSET: IVec2 = IVec2::new(-50, -20);

/// A single drawing operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole field
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    /// Text with its top-left corner at `pos`
    Text { text: String, pos: IVec2, color: Color },
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub const GAME_OVER_LABEL: &str = "Game Over";

/// Build the draw list for the current frame
pub fn build_frame(sim: &Simulation) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(sim.remaining_bricks() + 5);

    commands.push(DrawCommand::Clear(BACKGROUND_COLOR));
    commands.push(DrawCommand::FillRect {
        rect: sim.paddle_rect(),
        color: PADDLE_COLOR,
    });
    commands.push(DrawCommand::FillRect {
        rect: sim.ball_rect(),
        color: BALL_COLOR,
    });

    commands.extend(
        sim.bricks()
            .filter(|(_, destroyed)| !destroyed)
            .map(|(rect, _)| DrawCommand::FillRect {
                rect,
                color: BRICK_COLOR,
            }),
    );

    commands.push(DrawCommand::Text {
        text: score_label(sim.score()),
        pos: SCORE_POS,
        color: TEXT_COLOR,
    });

    if sim.is_game_over() {
        let config = sim.config();
        let center = IVec2::new(config.field_width / 2, config.field_height / 2);
        commands.push(DrawCommand::Text {
            text: GAME_OVER_LABEL.to_string(),
            pos: center + GAME_OVER_OFFSET,
            color: TEXT_COLOR,
        });
    }

    commands
}

/// Text lines of the frame, top to bottom (for headless output)
pub fn text_lines(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
