//! Painter's-algorithm ordering

use crate::geometry::Point3;

/// Sort points by ascending z so nearer points are drawn last.
///
/// Ties land in arbitrary order. Uses `total_cmp`, so NaN depths sort
/// to the ends instead of breaking the sort.
pub fn sort_back_to_front(points: &mut [Point3]) {
    points.sort_unstable_by(|a, b| a.z.total_cmp(&b.z));
}
