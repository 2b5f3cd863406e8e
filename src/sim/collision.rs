//! Landing detection between the falling player and platform tops
//!
//! Collision uses discrete per-frame position sampling: the player's bottom
//! edge is compared against a platform's top edge across two consecutive
//! frames, so a fast fall cannot tunnel vertically through a thin platform.
//! Horizontal motion is still sampled discretely; a platform sliding out from
//! under the crossing column between frames is a known limitation.

use super::rect::Rect;

/// True if the player's bottom edge crossed `platform`'s top edge moving
/// downward between the previous and current frame, with horizontal overlap.
pub fn crossed_platform_top(player: &Rect, prev_bottom: f32, platform: &Rect) -> bool {
    player.overlaps_x(platform)
        && prev_bottom <= platform.top()
        && player.bottom() >= platform.top()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Rect {
        Rect::new(100.0, 500.0, 100.0, 15.0)
    }

    #[test]
    fn test_crossing_detected() {
        // Bottom edge moved from above the top edge to below it
        let player = Rect::new(120.0, 473.0, 32.0, 32.0); // bottom = 505
        assert!(crossed_platform_top(&player, 495.0, &platform()));
    }

    #[test]
    fn test_touch_at_exact_top_counts() {
        let player = Rect::new(120.0, 468.0, 32.0, 32.0); // bottom = 500
        assert!(crossed_platform_top(&player, 490.0, &platform()));
    }

    #[test]
    fn test_already_below_is_not_a_landing() {
        // Previous bottom was already past the top edge: no crossing
        let player = Rect::new(120.0, 490.0, 32.0, 32.0); // bottom = 522
        assert!(!crossed_platform_top(&player, 510.0, &platform()));
    }

    #[test]
    fn test_still_above_is_not_a_landing() {
        let player = Rect::new(120.0, 440.0, 32.0, 32.0); // bottom = 472
        assert!(!crossed_platform_top(&player, 460.0, &platform()));
    }

    #[test]
    fn test_no_horizontal_overlap_misses() {
        // Crossing the right altitude but off to the side
        let player = Rect::new(300.0, 473.0, 32.0, 32.0);
        assert!(!crossed_platform_top(&player, 495.0, &platform()));
    }

    #[test]
    fn test_fast_fall_does_not_tunnel() {
        // 60 px of travel in one frame, platform only 15 px thick
        let player = Rect::new(120.0, 508.0, 32.0, 32.0); // bottom = 540
        assert!(crossed_platform_top(&player, 480.0, &platform()));
    }
}
