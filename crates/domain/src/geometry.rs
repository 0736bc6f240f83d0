// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Geodesic buffering and point-in-polygon tests over district boundaries.
//!
//! A boundary buffered outward by `d` meters is the set of points that are
//! either inside the boundary or within `d` meters (great-circle) of it.
//! `BufferedBoundary` represents that set directly rather than
//! materialising a new polygon.
//!
//! Ring edges are straight lines in longitude/latitude, matching the
//! point-in-polygon test. A great-circle arc between two distant vertices
//! bows toward the pole, so rings are densified in that plane before the
//! haversine closest point is taken.

use geo::{
    Closest, Densify, HaversineClosestPoint, HaversineDistance, Intersects, LineString,
    MultiPolygon, Point,
};

/// Longest edge, in degrees, measured as a great-circle arc.
///
/// At 0.001 degrees the arc strays from the straight edge by a few
/// millimetres at most, outside the polar caps.
const MAX_EDGE_DEGREES: f64 = 0.001;

/// A district boundary expanded outward by a fixed metric tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferedBoundary<'a> {
    shape: &'a MultiPolygon<f64>,
    meters: f64,
}

impl<'a> BufferedBoundary<'a> {
    /// Buffers `shape` by `meters`.
    ///
    /// Negative or non-finite tolerances are treated as zero, leaving the
    /// original boundary.
    #[must_use]
    pub fn new(shape: &'a MultiPolygon<f64>, meters: f64) -> Self {
        let meters = if meters.is_finite() && meters > 0.0 {
            meters
        } else {
            0.0
        };
        Self { shape, meters }
    }

    /// The effective buffer distance in meters.
    #[must_use]
    pub const fn meters(&self) -> f64 {
        self.meters
    }

    /// Returns true if `point` (longitude, latitude) lies inside the
    /// buffered boundary. Points on the boundary are inside.
    #[must_use]
    pub fn contains(&self, point: &Point<f64>) -> bool {
        if self.shape.intersects(point) {
            return true;
        }
        if self.meters == 0.0 {
            return false;
        }
        self.distance_to_nearest_ring(point)
            .is_some_and(|distance| distance <= self.meters)
    }

    /// Great-circle distance in meters from `point` to the closest ring,
    /// exterior or interior, of any polygon in the boundary.
    fn distance_to_nearest_ring(&self, point: &Point<f64>) -> Option<f64> {
        self.shape
            .iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .filter_map(|ring| ring_distance(ring, point))
            .min_by(f64::total_cmp)
    }
}

fn ring_distance(ring: &LineString<f64>, point: &Point<f64>) -> Option<f64> {
    match ring.densify(MAX_EDGE_DEGREES).haversine_closest_point(point) {
        Closest::Intersection(nearest) | Closest::SinglePoint(nearest) => {
            Some(nearest.haversine_distance(point))
        }
        Closest::Indeterminate => None,
    }
}
