//! Utilities for ordered edge points of a spatial graph.
//!
//! An edge stores the positions between its source and target nodes as a
//! list ordered by connectivity: consecutive points are neighbours.

use crate::array::{distance, Array3D};

/// Sum of the distances between consecutive points, 0 for fewer than two.
///
/// Does not include the hops to the nodes; see [`contour_length`].
pub fn edge_points_length(points: &[Array3D]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Length from `source` through every edge point to `target`.
///
/// With no edge points this is the straight distance between the nodes.
pub fn contour_length(source: &Array3D, points: &[Array3D], target: &Array3D) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            distance(source, first) + edge_points_length(points) + distance(last, target)
        }
        _ => distance(source, target),
    }
}

/// Insert `new_point` so that `points` stays ordered by connectivity.
///
/// The point goes next to its nearest existing point: at an end when it
/// extends the chain, otherwise between the nearest point and whichever of
/// that point's neighbours is closer to it.
pub fn insert_edge_point_with_distance_order(points: &mut Vec<Array3D>, new_point: Array3D) {
    let n = points.len();
    if n < 2 {
        points.push(new_point);
        return;
    }

    let d = |i: usize| distance(&points[i], &new_point);
    let nearest = (0..n)
        .min_by(|&a, &b| d(a).total_cmp(&d(b)))
        .unwrap_or(n - 1);

    let position = if nearest == 0 {
        // between the first two points only if closer to the second than the first is
        if d(1) < distance(&points[0], &points[1]) {
            1
        } else {
            0
        }
    } else if nearest == n - 1 {
        if d(n - 2) < distance(&points[n - 1], &points[n - 2]) {
            n - 1
        } else {
            n
        }
    } else if d(nearest - 1) <= d(nearest + 1) {
        nearest
    } else {
        nearest + 1
    };
    points.insert(position, new_point);
}

/// Cosine of every angle.
pub fn compute_cosines(angles: &[f64]) -> Vec<f64> {
    angles.iter().map(|a| a.cos()).collect()
}
