//! Bounce motion. Each axis is an independent oscillator that flips direction once it has run
//! past an edge.

use crate::generate::Bounds;
use crate::sprite::Sprite;

pub const HORIZONTAL_STEP: f32 = 2.0;
pub const VERTICAL_STEP: f32 = 1.0;

// Move first, check after. A sprite may therefore spend one frame past the edge before it turns
// around, and the far edge counts the sprite's own extent.
fn bounce(position: &mut f32, moving_positive: &mut bool, step: f32, extent: f32, limit: f32) {
    if *moving_positive {
        *position += step;
        if *position + extent > limit {
            *moving_positive = false;
        }
    } else {
        *position -= step;
        if *position < 0.0 {
            *moving_positive = true;
        }
    }
}

impl Sprite {
    /// Moves one frame's worth inside `bounds`.
    pub fn advance(&mut self, bounds: Bounds) {
        bounce(
            &mut self.position.x,
            &mut self.horizontal_direction,
            HORIZONTAL_STEP,
            self.source_rect.width.abs(),
            bounds.width,
        );
        bounce(
            &mut self.position.y,
            &mut self.vertical_direction,
            VERTICAL_STEP,
            self.source_rect.height,
            bounds.height,
        );
    }
}
