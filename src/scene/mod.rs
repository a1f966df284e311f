//! Renderer-agnostic scene building
//!
//! Turns a simulation `Snapshot` into a flat draw list: fruits, the slash
//! ribbon, and HUD text. Hosts rasterize it however they like; GPU hosts can
//! tessellate everything into one triangle list.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::Serialize;

use crate::settings::SessionConfig;
use crate::sim::{RoundState, Snapshot};
use vertex::{Vertex, colors, rgba};

/// Trail ribbon width in playfield units
pub const TRAIL_WIDTH: f32 = 5.0;
/// HUD font sizes
pub const HUD_TEXT_SIZE: f32 = 48.0;
pub const BANNER_TEXT_SIZE: f32 = 72.0;
/// Timer label offset from the right edge
const TIMER_RIGHT_INSET: f32 = 180.0;

/// Where a text item's position sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    TopLeft,
    /// Horizontally centered, top edge at the position
    TopCenter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudText {
    pub text: String,
    pub position: Vec2,
    pub anchor: TextAnchor,
    pub size: f32,
    pub color: [u8; 3],
}

/// One thing to draw, in back-to-front order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: [u8; 3],
    },
    /// Open polyline through the trail points, oldest first
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [u8; 3],
    },
    Text(HudText),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Tessellate circles and the trail into a triangle list (text excluded)
    pub fn triangles(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => vertices.extend(shapes::circle(
                    *center,
                    *radius,
                    rgba(*color, 1.0),
                    shapes::circle_segments(*radius),
                )),
                DrawCommand::Polyline {
                    points,
                    width,
                    color,
                } => vertices.extend(shapes::trail_ribbon(points, *width, rgba(*color, 1.0))),
                DrawCommand::Text(_) => {}
            }
        }
        vertices
    }

    pub fn texts(&self) -> impl Iterator<Item = &HudText> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

/// Build the draw list for one frame
pub fn build_scene(snapshot: &Snapshot, config: &SessionConfig) -> Scene {
    let (width, height) = (config.width, config.height);
    let mut commands = Vec::with_capacity(snapshot.projectiles.len() + 6);

    for fruit in &snapshot.projectiles {
        commands.push(DrawCommand::Circle {
            center: Vec2::new(fruit.x, fruit.y),
            radius: fruit.radius,
            color: fruit.color.rgb(),
        });
    }

    if snapshot.trail.len() > 1 {
        commands.push(DrawCommand::Polyline {
            points: snapshot.trail.clone(),
            width: TRAIL_WIDTH,
            color: colors::TRAIL,
        });
    }

    commands.push(text(
        format!("Score: {}", snapshot.score),
        Vec2::new(10.0, 10.0),
        TextAnchor::TopLeft,
        HUD_TEXT_SIZE,
        colors::SCORE,
    ));
    commands.push(text(
        format!("Time: {}", snapshot.remaining_seconds),
        Vec2::new(width - TIMER_RIGHT_INSET, 10.0),
        TextAnchor::TopLeft,
        HUD_TEXT_SIZE,
        colors::TIMER,
    ));

    if snapshot.round_state == RoundState::RoundOver {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        commands.push(text(
            "Game Over!".to_string(),
            Vec2::new(center_x, center_y - 60.0),
            TextAnchor::TopCenter,
            BANNER_TEXT_SIZE,
            colors::GAME_OVER,
        ));
        commands.push(text(
            format!("Final Score: {}", snapshot.score),
            Vec2::new(center_x, center_y + 10.0),
            TextAnchor::TopCenter,
            HUD_TEXT_SIZE,
            colors::FINAL_SCORE,
        ));
        commands.push(text(
            "Press R to Restart".to_string(),
            Vec2::new(center_x, center_y + 60.0),
            TextAnchor::TopCenter,
            HUD_TEXT_SIZE,
            colors::RESTART_HINT,
        ));
    }

    Scene {
        width,
        height,
        commands,
    }
}

fn text(text: String, position: Vec2, anchor: TextAnchor, size: f32, color: [u8; 3]) -> DrawCommand {
    DrawCommand::Text(HudText {
        text,
        position,
        anchor,
        size,
        color,
    })
}
