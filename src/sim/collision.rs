//! Collision detection for the rectangular field
//!
//! All checks are threshold tests on the ball's post-integration rectangle.
//! There is no swept test, so a fast ball can pass through a thin obstacle
//! in a single tick.

use super::rect::Rect;
use super::state::BrickGrid;

/// Ball touches or crosses the left or right wall
pub fn ball_side_wall_collision(ball: &Rect, field_width: i32) -> bool {
    ball.left() <= 0 || ball.right() >= field_width
}

/// Ball touches or crosses the ceiling
pub fn ball_ceiling_collision(ball: &Rect) -> bool {
    ball.top() <= 0
}

/// Ball reached the floor (round lost)
pub fn ball_floor_collision(ball: &Rect, field_height: i32) -> bool {
    ball.bottom() >= field_height
}

/// Ball overlaps the paddle
pub fn ball_paddle_collision(ball: &Rect, paddle: &Rect) -> bool {
    ball.intersects(paddle)
}

/// Y position that puts the ball's bottom edge on the paddle's top edge
pub fn paddle_rest_y(ball: &Rect, paddle: &Rect) -> i32 {
    paddle.top() - ball.height()
}

/// Index of the first intact brick (row-major) overlapping the ball
pub fn first_brick_hit(ball: &Rect, bricks: &BrickGrid) -> Option<usize> {
    bricks
        .iter()
        .position(|brick| !brick.destroyed && ball.intersects(&brick.rect))
}
