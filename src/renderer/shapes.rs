//! Shape generation for 2D primitives and scene assembly
//!
//! Vertices are produced in screen space (pixels, y down); the pipeline maps
//! them to NDC at upload time. The camera offset is applied here, so the
//! rest of the game only ever thinks in world coordinates.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::sim::{GameState, PlatformKind};

/// Generate vertices for a filled rectangle (two triangles)
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

fn platform_color(kind: PlatformKind) -> [f32; 4] {
    match kind {
        PlatformKind::Static => colors::PLATFORM_STATIC,
        PlatformKind::Moving => colors::PLATFORM_MOVING,
        PlatformKind::Breakable => colors::PLATFORM_BREAKABLE,
    }
}

/// Build the full frame's vertex list at camera-relative positions
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let cam_y = state.camera.offset.y;
    let mut vertices = Vec::with_capacity((state.level.platforms.len() + 1) * 12 + 12);

    for platform in &state.level.platforms {
        let pos = Vec2::new(platform.rect.pos.x, platform.rect.pos.y - cam_y);
        vertices.extend(quad(pos, platform.rect.size, platform_color(platform.kind)));
        // Thin highlight along the landing edge
        let strip = Vec2::new(platform.rect.size.x, 3.0);
        vertices.extend(quad(pos, strip, colors::PLATFORM_TOP));
    }

    let player_color = if state.player.dead {
        colors::PLAYER_DEAD
    } else {
        colors::PLAYER
    };
    let player_pos = Vec2::new(state.player.pos.x, state.player.pos.y - cam_y);
    vertices.extend(quad(player_pos, state.player.size, player_color));

    // A pair of eyes so the slime reads as a character, not a box
    let eye = Vec2::new(PLAYER_WIDTH / 8.0, PLAYER_HEIGHT / 6.0);
    let eye_y = player_pos.y + PLAYER_HEIGHT / 4.0;
    let eye_color = [0.05, 0.08, 0.10, 1.0];
    vertices.extend(quad(
        Vec2::new(player_pos.x + PLAYER_WIDTH / 4.0, eye_y),
        eye,
        eye_color,
    ));
    vertices.extend(quad(
        Vec2::new(player_pos.x + PLAYER_WIDTH * 5.0 / 8.0, eye_y),
        eye,
        eye_color,
    ));

    vertices
}
