//! Shape generation for 2D primitives
//!
//! Everything is emitted directly in normalized device coordinates so the
//! GPU side is a pass-through shader.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::GLOW_SCALE;
use crate::settings::Settings;
use crate::sim::{GameState, Viewport};

/// Lighten `color` toward white by the vertical NDC position:
/// unchanged at the bottom edge (y = -1), white at the top (y = 1).
/// Alpha is preserved.
pub fn gradient_color(color: [f32; 4], ndc_y: f32) -> [f32; 4] {
    let t = ((ndc_y + 1.0) / 2.0).clamp(0.0, 1.0);
    [
        color[0] + (1.0 - color[0]) * t,
        color[1] + (1.0 - color[1]) * t,
        color[2] + (1.0 - color[2]) * t,
        color[3],
    ]
}

/// Generate vertices for a filled axis-aligned square.
///
/// Each corner (`center ± size/2`) is mapped to NDC on its own. With
/// `gradient`, corners get [`gradient_color`]; the lightening is linear in y,
/// so interpolating between corners matches a per-fragment evaluation.
pub fn square(
    viewport: &Viewport,
    center: Vec2,
    size: f32,
    color: [f32; 4],
    gradient: bool,
) -> [Vertex; 6] {
    let half = size / 2.0;
    let corner = |dx: f32, dy: f32| {
        let ndc = viewport.to_ndc(center.x + dx, center.y + dy);
        let color = if gradient {
            gradient_color(color, ndc.y)
        } else {
            color
        };
        Vertex::new(ndc.x, ndc.y, color)
    };

    let top_left = corner(-half, -half);
    let top_right = corner(half, -half);
    let bottom_left = corner(-half, half);
    let bottom_right = corner(half, half);

    // Two triangles
    [
        top_left,
        bottom_left,
        top_right,
        top_right,
        bottom_left,
        bottom_right,
    ]
}

/// Clear color for the current frame
pub fn background(elapsed: f32, settings: &Settings) -> [f32; 4] {
    if !settings.background_pulse {
        return colors::BACKGROUND;
    }
    [
        0.1 + 0.05 * elapsed.sin(),
        0.1 + 0.05 * (elapsed * 0.7).sin(),
        0.15 + 0.05 * (elapsed * 1.3).sin(),
        1.0,
    ]
}

/// Build the draw list for a frame: glow, player, then rocks (later on top)
pub fn scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let viewport = &state.viewport;
    let gradient = settings.gradient;
    let mut vertices = Vec::with_capacity((state.rocks.len() + 2) * 6);

    let player = &state.player;
    if settings.glow {
        vertices.extend(square(
            viewport,
            player.pos,
            player.size * GLOW_SCALE,
            colors::PLAYER_GLOW,
            gradient,
        ));
    }
    vertices.extend(square(
        viewport,
        player.pos,
        player.size,
        colors::PLAYER,
        gradient,
    ));

    for rock in &state.rocks {
        vertices.extend(square(viewport, rock.pos, rock.size, colors::ROCK, gradient));
    }

    vertices
}
