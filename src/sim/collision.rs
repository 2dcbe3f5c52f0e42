//! Axis-aligned collision detection
//!
//! Strict inequalities throughout: boxes that merely share an edge do not
//! collide. Policy (end the run, credit a gauge) lives in the tick, not here.

use super::state::Aabb;

/// AABB overlap test. Symmetric; edge contact is not overlap.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
