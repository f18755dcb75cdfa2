//! Rendering contract
//!
//! The simulation is drawn as flat-filled convex polygons. [`draw_list`] reads
//! the state after `update` and yields what to draw, back to front;
//! [`tessellate`] turns that into a screen-space triangle list.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::Vertex;

use crate::sim::{Color, GameState, GameStatus, Polygon};

/// One polygon to fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPolygon {
    pub poly: Polygon,
    pub color: Color,
}

/// Live polygons in draw order: particles, asteroids, bullets, then the
/// player while a round is in progress
pub fn draw_list(state: &GameState) -> Vec<DrawPolygon> {
    let live = state.particles.len() + state.asteroids.len() + state.bullets.len() + 1;
    let mut list = Vec::with_capacity(live);

    let back_to_front = state
        .particle_entities()
        .chain(state.asteroid_entities())
        .chain(state.bullet_entities());
    list.extend(back_to_front.map(|e| DrawPolygon {
        poly: e.poly,
        color: e.color,
    }));

    if state.status() == GameStatus::Playing {
        let player = state.player();
        list.push(DrawPolygon {
            poly: player.poly,
            color: player.color,
        });
    }

    list
}

/// Fill every polygon of the draw list into one vertex buffer
pub fn tessellate(list: &[DrawPolygon], screen: Vec2) -> Vec<Vertex> {
    list.iter()
        .flat_map(|d| shapes::polygon_fill(&d.poly, d.color.to_array(), screen))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HEIGHT, WIDTH};

    #[test]
    fn test_draw_order() {
        let mut state = GameState::new(11).unwrap();
        state.spawn_bullet().unwrap();
        state.spawn_particles(2, 1.0, Color::BLACK, Vec2::ZERO).unwrap();

        let list = draw_list(&state);
        assert_eq!(list.len(), 2 + 5 + 1 + 1);
        assert_eq!(list[0].poly.len(), crate::consts::PARTICLE_POINTS);
        assert_eq!(list[7].color, Color::RED);
        assert_eq!(list[8].poly, state.player().poly);
    }

    #[test]
    fn test_player_hidden_after_game_over() {
        let mut state = GameState::new(11).unwrap();
        state.input.status = GameStatus::Over;
        let list = draw_list(&state);
        assert_eq!(list.len(), 5);
        assert!(!list.iter().any(|d| d.poly == state.player().poly));
    }

    #[test]
    fn test_tessellate_lands_on_screen() {
        let mut state = GameState::new(3).unwrap();
        // Only the ship, which starts centred
        while !state.asteroids.is_empty() {
            let idx = state.asteroids.remove_at(0);
            state.pool.free(idx);
        }
        let screen = Vec2::new(WIDTH, HEIGHT);
        let verts = tessellate(&draw_list(&state), screen);
        assert!(!verts.is_empty());
        for v in &verts {
            assert!(v.position[0] > 0.0 && v.position[0] < WIDTH);
            assert!(v.position[1] > 0.0 && v.position[1] < HEIGHT);
        }
    }
}
