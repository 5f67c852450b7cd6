/// Collision predicate shared by the simulation step.
///
/// The only geometric primitive the game needs: an inclusive-bounds
/// point-in-axis-aligned-rectangle test. The simulation uses it for
/// the player's apex against an enemy box and for a shot against an
/// enemy box; the ground-crossing check is a plain comparison and
/// does not come through here.

/// True when (px, py) lies inside or on the edge of the rectangle
/// spanned by [left, right] × [top, bottom].
pub fn point_in_rect(px: f32, py: f32, left: f32, right: f32, top: f32, bottom: f32) -> bool {
    px >= left && px <= right && py >= top && py <= bottom
}
