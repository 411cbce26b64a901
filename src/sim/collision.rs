//! Axis-aligned square overlap tests
//!
//! Both the player and the rocks are squares described by their center and
//! edge length, so overlap reduces to a per-axis distance check.

use glam::Vec2;

use super::state::{Player, Rock};

/// Whether two axis-aligned squares overlap.
///
/// Touching edges do not count: the distance on each axis must be strictly
/// less than half the combined edge lengths.
#[inline]
pub fn squares_overlap(a_center: Vec2, a_size: f32, b_center: Vec2, b_size: f32) -> bool {
    let reach = (a_size + b_size) / 2.0;
    let delta = (a_center - b_center).abs();
    delta.x < reach && delta.y < reach
}

/// Whether a rock hits the player
#[inline]
pub fn rock_hits_player(player: &Player, rock: &Rock) -> bool {
    squares_overlap(player.pos, player.size, rock.pos, rock.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_scenario() {
        let player = Player {
            pos: Vec2::new(500.0, 550.0),
            size: 30.0,
        };
        let rock = Rock::new(505.0, 560.0, 20.0, 4.0);
        assert!(rock_hits_player(&player, &rock));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Reach is 25 on both axes
        assert!(!squares_overlap(
            Vec2::new(0.0, 0.0),
            30.0,
            Vec2::new(25.0, 0.0),
            20.0
        ));
        assert!(squares_overlap(
            Vec2::new(0.0, 0.0),
            30.0,
            Vec2::new(24.9, 0.0),
            20.0
        ));
    }

    #[test]
    fn test_miss_on_single_axis() {
        // Horizontally aligned but far above
        assert!(!squares_overlap(
            Vec2::new(100.0, 100.0),
            30.0,
            Vec2::new(100.0, 40.0),
            20.0
        ));
        // Vertically aligned but off to the side
        assert!(!squares_overlap(
            Vec2::new(100.0, 100.0),
            30.0,
            Vec2::new(160.0, 100.0),
            20.0
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(30.0, 5.0);
        assert_eq!(
            squares_overlap(a, 30.0, b, 20.0),
            squares_overlap(b, 20.0, a, 30.0)
        );
    }
}
