//! Support and crush checks for stacked placements.
//!
//! A box not resting on the floor must sit on the top faces of already
//! placed boxes: the supports must cover at least [`MIN_SUPPORT_RATIO`] of
//! its base area and one of them must contain its xz centroid. Each support
//! then absorbs an area-weighted share of the new box's weight, bounded by
//! its load budget.
//!
//! Load application is transactional. A successful check commits the shares
//! into the supports' `load_on_top` accumulators and returns them, so a
//! caller holding a merely tentative placement can undo the commit with
//! [`rollback_loads`].

use crate::geometry::{overlap_area_xz, point_in_overlap_xz, Aabb, EPS};
use crate::placement::PlacedState;

/// Minimum fraction of a stacked box's base area that must be supported.
pub const MIN_SUPPORT_RATIO: f64 = 0.90;

/// Tolerance when matching a support's top face to a candidate's bottom face.
pub const Y_FACE_EPS: f64 = 1e-6;

/// Slack for weight and load comparisons.
pub const LOAD_EPS: f64 = 1e-9;

/// Checks support and crush constraints for a tentative placement and, on
/// success, applies the load shares to the supporting boxes.
///
/// Returns the `(support index, added load)` pairs that were committed, or
/// `None` if the placement is rejected; rejection never mutates `placed`.
/// Boxes on the floor (`y <= 1e-8`) are always supported and add no load.
pub fn apply_support_loads(
    candidate: &Aabb,
    weight: f64,
    placed: &mut [PlacedState],
) -> Option<Vec<(usize, f64)>> {
    if candidate.position.y <= EPS {
        return Some(Vec::new());
    }

    let base_area = candidate.base_area().max(EPS);
    let (cx, cz) = candidate.center_xz();

    let mut supported_area = 0.0;
    let mut centroid_supported = false;
    let mut supports: Vec<(usize, f64)> = Vec::new();

    for (i, s) in placed.iter().enumerate() {
        if (s.top_y() - candidate.position.y).abs() > Y_FACE_EPS {
            continue;
        }
        let area = overlap_area_xz(candidate, &s.aabb);
        if area <= EPS {
            continue;
        }

        supported_area += area;
        supports.push((i, area));
        if !centroid_supported && point_in_overlap_xz(cx, cz, candidate, &s.aabb) {
            centroid_supported = true;
        }
    }

    if !centroid_supported {
        return None;
    }

    if supported_area + LOAD_EPS < MIN_SUPPORT_RATIO * base_area {
        return None;
    }

    // Verify every support's crush limit before committing anything.
    for &(idx, area) in &supports {
        let added = load_share(area, base_area, weight);
        if placed[idx].load_on_top + added > placed[idx].max_load + LOAD_EPS {
            return None;
        }
    }

    let mut applied = Vec::with_capacity(supports.len());
    for (idx, area) in supports {
        let added = load_share(area, base_area, weight);
        placed[idx].load_on_top += added;
        applied.push((idx, added));
    }

    Some(applied)
}

/// Undoes a load application returned by [`apply_support_loads`].
pub fn rollback_loads(placed: &mut [PlacedState], applied: &[(usize, f64)]) {
    for &(idx, added) in applied.iter().rev() {
        placed[idx].load_on_top -= added;
    }
}

fn load_share(area: f64, base_area: f64, weight: f64) -> f64 {
    (area / base_area).clamp(0.0, 1.0) * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn floor_box(w: f64, h: f64, d: f64, weight: f64) -> PlacedState {
        PlacedState::new(Aabb::new(0.0, 0.0, 0.0, w, h, d), "base", weight)
    }

    #[test]
    fn test_floor_placement_is_always_supported() {
        let mut placed: Vec<PlacedState> = Vec::new();
        let candidate = Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

        let applied = apply_support_loads(&candidate, 50.0, &mut placed);
        assert_eq!(applied, Some(Vec::new()));
    }

    #[test]
    fn test_full_support_applies_load() {
        let mut placed = vec![floor_box(1.0, 1.0, 1.0, 10.0)];
        let candidate = Aabb::new(0.0, 1.0, 0.0, 1.0, 1.0, 1.0);

        let applied = apply_support_loads(&candidate, 5.0, &mut placed).unwrap();
        assert_eq!(applied.len(), 1);
        assert_relative_eq!(placed[0].load_on_top, 5.0);
    }

    #[test]
    fn test_partial_coverage_rejected() {
        // Base covers only half of the candidate footprint.
        let mut placed = vec![floor_box(1.0, 1.0, 1.0, 10.0)];
        let candidate = Aabb::new(0.0, 1.0, 0.0, 2.0, 1.0, 1.0);

        assert!(apply_support_loads(&candidate, 5.0, &mut placed).is_none());
        assert_relative_eq!(placed[0].load_on_top, 0.0);
    }

    #[test]
    fn test_unsupported_centroid_rejected() {
        // Two narrow pillars leave the centroid hanging over the gap, even
        // though their combined coverage exceeds the ratio.
        let mut placed = vec![
            floor_box(0.48, 1.0, 1.0, 100.0),
            PlacedState::new(Aabb::new(0.52, 0.0, 0.0, 0.48, 1.0, 1.0), "p2", 100.0),
        ];
        let candidate = Aabb::new(0.0, 1.0, 0.0, 1.0, 1.0, 1.0);

        assert!(apply_support_loads(&candidate, 5.0, &mut placed).is_none());
    }

    #[test]
    fn test_crush_limit_rejected_without_mutation() {
        // 1 kg base holds at most 6 kg.
        let mut placed = vec![floor_box(1.0, 1.0, 1.0, 1.0)];
        let candidate = Aabb::new(0.0, 1.0, 0.0, 1.0, 1.0, 1.0);

        assert!(apply_support_loads(&candidate, 1000.0, &mut placed).is_none());
        assert_relative_eq!(placed[0].load_on_top, 0.0);
    }

    #[test]
    fn test_shared_load_split_by_area() {
        let mut placed = vec![
            floor_box(1.0, 1.0, 2.0, 100.0),
            PlacedState::new(Aabb::new(1.0, 0.0, 0.0, 1.0, 1.0, 2.0), "p2", 100.0),
        ];
        // Spans both supports evenly.
        let candidate = Aabb::new(0.0, 1.0, 0.0, 2.0, 1.0, 2.0);

        let applied = apply_support_loads(&candidate, 10.0, &mut placed).unwrap();
        assert_eq!(applied.len(), 2);
        assert_relative_eq!(placed[0].load_on_top, 5.0);
        assert_relative_eq!(placed[1].load_on_top, 5.0);
    }

    #[test]
    fn test_rollback_restores_loads() {
        let mut placed = vec![floor_box(1.0, 1.0, 1.0, 10.0)];
        let candidate = Aabb::new(0.0, 1.0, 0.0, 1.0, 1.0, 1.0);

        let applied = apply_support_loads(&candidate, 5.0, &mut placed).unwrap();
        rollback_loads(&mut placed, &applied);

        assert_relative_eq!(placed[0].load_on_top, 0.0);
    }
}
