//! Candidate placement points (extreme-point heuristic).
//!
//! Every accepted placement spawns three candidate points at its +x, +z and
//! +y corners, following the extreme-point idea of Crainic, Perboli & Tadei
//! (2008). The set is kept compact with a quantized deduplication pass and a
//! hard size bound; when over the bound, points closest to the floor and the
//! rear wall survive, since the packer scans bottom-back-left first.

use nalgebra::Vector3;
use std::cmp::Ordering;

use crate::geometry::Aabb;

/// Hard bound on the candidate set size.
pub const MAX_CANDIDATES: usize = 350;

/// Coordinates are deduplicated at a resolution of 1e-5.
const QUANT_SCALE: f64 = 1e5;

/// The set of bottom-back-left corners where the next box may be attempted.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    points: Vec<Vector3<f64>>,
}

impl CandidateSet {
    /// Creates a set holding only the truck origin.
    pub fn new() -> Self {
        Self {
            points: vec![Vector3::new(0.0, 0.0, 0.0)],
        }
    }

    /// Returns the number of candidate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the candidate points in their current order.
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Appends the three extreme points spawned by an accepted placement.
    pub fn push_extreme_points(&mut self, placed: &Aabb) {
        let p = placed.position;
        let d = placed.dimensions;
        self.points.push(Vector3::new(p.x + d.x, p.y, p.z));
        self.points.push(Vector3::new(p.x, p.y, p.z + d.z));
        self.points.push(Vector3::new(p.x, p.y + d.y, p.z));
    }

    /// Deduplicates quantized points and enforces the size bound.
    ///
    /// Points are first sorted by their quantized coordinates and adjacent
    /// duplicates removed. If the set still exceeds [`MAX_CANDIDATES`], a
    /// stable sort by `(y, z, x)` keeps the floor- and rear-biased prefix.
    pub fn normalize(&mut self) {
        self.points.sort_by_key(quantize_point);
        self.points.dedup_by_key(|p| quantize_point(p));

        if self.points.len() > MAX_CANDIDATES {
            self.points.sort_by(|a, b| {
                a.y.partial_cmp(&b.y)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.z.partial_cmp(&b.z).unwrap_or(Ordering::Equal))
                    .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
            });
            self.points.truncate(MAX_CANDIDATES);
        }
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

fn quantize(v: f64) -> i64 {
    (v * QUANT_SCALE).round() as i64
}

fn quantize_point(p: &Vector3<f64>) -> (i64, i64, i64) {
    (quantize(p.x), quantize(p.y), quantize(p.z))
}
