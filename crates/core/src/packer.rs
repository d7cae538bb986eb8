//! Deterministic constructive packer.
//!
//! [`pack_by_order`] walks the boxes in a caller-supplied order and greedily
//! places each one at the best admissible candidate point, scanning all
//! candidates against all six orientations. Admissibility means containment
//! in the truck, no interior overlap with placed boxes, and the support and
//! crush constraints of the [`support`](crate::support) kernel. The best
//! placement is the lowest one, then the rearmost, then the leftmost.

use crate::candidates::CandidateSet;
use crate::geometry::{orientations, Aabb};
use crate::item::CargoBox;
use crate::placement::{PlacedState, Placement};
use crate::result::PackResult;
use crate::support::{apply_support_loads, rollback_loads, LOAD_EPS};
use crate::truck::Truck;

/// Packs `boxes` into `truck` following the permutation `order`.
///
/// `order` must be a permutation of `0..boxes.len()`. Boxes that do not fit
/// anywhere (or would exceed the remaining weight budget) are recorded in
/// `unplaced`; the call itself always succeeds.
pub fn pack_by_order(truck: &Truck, boxes: &[CargoBox], order: &[usize]) -> PackResult {
    let mut result = PackResult::new();
    result.total_volume = boxes.iter().map(|b| b.volume()).sum();

    let mut placed: Vec<PlacedState> = Vec::with_capacity(order.len());
    let mut candidates = CandidateSet::new();
    let mut remaining_weight = truck.max_weight();

    for &idx in order {
        let item = &boxes[idx];

        if item.weight() > remaining_weight + LOAD_EPS {
            result.unplaced.push(item.id().to_string());
            continue;
        }

        candidates.normalize();

        let mut best: Option<(Aabb, Vec<(usize, f64)>)> = None;

        for &point in candidates.points() {
            for dims in orientations(item.dimensions()) {
                let candidate = Aabb::from_vectors(point, dims);

                if !truck.contains(&candidate) {
                    continue;
                }
                if placed.iter().any(|p| candidate.intersects(&p.aabb)) {
                    continue;
                }

                let Some(applied) = apply_support_loads(&candidate, item.weight(), &mut placed)
                else {
                    continue;
                };

                if best
                    .as_ref()
                    .map_or(true, |(current, _)| lower_back_left(&candidate, current))
                {
                    if let Some((_, displaced)) = best.take() {
                        rollback_loads(&mut placed, &displaced);
                    }
                    best = Some((candidate, applied));
                } else {
                    rollback_loads(&mut placed, &applied);
                }
            }
        }

        let Some((aabb, _)) = best else {
            result.unplaced.push(item.id().to_string());
            continue;
        };

        // The winner's load shares are already committed.
        placed.push(PlacedState::new(aabb, item.id().to_string(), item.weight()));

        result.used_volume += aabb.volume();
        result.total_weight += item.weight();
        remaining_weight -= item.weight();

        candidates.push_extreme_points(&aabb);
        result.placed.push(Placement::new(item.id().to_string(), aabb));
    }

    let truck_volume = truck.volume();
    result.utilization = if truck_volume > 0.0 {
        result.used_volume / truck_volume
    } else {
        0.0
    };

    result
}

/// Placement preference: lower first, then rearmost, then leftmost.
fn lower_back_left(a: &Aabb, b: &Aabb) -> bool {
    if a.position.y != b.position.y {
        return a.position.y < b.position.y;
    }
    if a.position.z != b.position.z {
        return a.position.z < b.position.z;
    }
    a.position.x < b.position.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_box_at_origin() {
        let truck = Truck::new(1.0, 1.0, 1.0).with_max_weight(10.0);
        let boxes = vec![CargoBox::new("A", 1.0, 1.0, 1.0).with_weight(5.0)];

        let result = pack_by_order(&truck, &boxes, &[0]);

        assert_eq!(result.placed.len(), 1);
        assert_eq!(result.placed[0].id, "A");
        assert_eq!(result.placed[0].aabb, Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0));
        assert_relative_eq!(result.utilization, 1.0);
        assert_relative_eq!(result.total_weight, 5.0);
    }

    #[test]
    fn test_fills_floor_before_stacking() {
        let truck = Truck::new(2.0, 2.0, 1.0).with_max_weight(100.0);
        let boxes = vec![
            CargoBox::new("A", 1.0, 1.0, 1.0).with_weight(1.0),
            CargoBox::new("B", 1.0, 1.0, 1.0).with_weight(1.0),
        ];

        let result = pack_by_order(&truck, &boxes, &[0, 1]);

        assert_eq!(result.placed.len(), 2);
        // Both on the floor, B beside A rather than on top.
        assert_relative_eq!(result.placed[0].aabb.position.y, 0.0);
        assert_relative_eq!(result.placed[1].aabb.position.y, 0.0);
    }

    #[test]
    fn test_weight_budget_gates_placement() {
        let truck = Truck::new(10.0, 1.0, 1.0).with_max_weight(3.0);
        let boxes: Vec<CargoBox> = (0..10)
            .map(|i| CargoBox::new(format!("B{}", i), 1.0, 1.0, 1.0).with_weight(1.0))
            .collect();
        let order: Vec<usize> = (0..10).collect();

        let result = pack_by_order(&truck, &boxes, &order);

        assert_eq!(result.placed.len(), 3);
        assert_eq!(result.unplaced.len(), 7);
        assert_relative_eq!(result.total_weight, 3.0);
    }

    #[test]
    fn test_oversized_box_goes_unplaced() {
        let truck = Truck::new(1.0, 1.0, 1.0).with_max_weight(100.0);
        let boxes = vec![
            CargoBox::new("big", 2.0, 2.0, 2.0),
            CargoBox::new("small", 0.5, 0.5, 0.5),
        ];

        let result = pack_by_order(&truck, &boxes, &[0, 1]);

        assert_eq!(result.unplaced, vec!["big".to_string()]);
        assert_eq!(result.placed.len(), 1);
        // total_volume counts the unplaced box too.
        assert_relative_eq!(result.total_volume, 8.0 + 0.125);
        assert_relative_eq!(result.used_volume, 0.125);
    }

    #[test]
    fn test_orientation_rescues_tall_box() {
        // Fits only when laid on its side.
        let truck = Truck::new(3.0, 1.0, 1.0).with_max_weight(100.0);
        let boxes = vec![CargoBox::new("tall", 1.0, 3.0, 1.0)];

        let result = pack_by_order(&truck, &boxes, &[0]);

        assert_eq!(result.placed.len(), 1);
        assert_relative_eq!(result.placed[0].aabb.dimensions.y, 1.0);
    }

    #[test]
    fn test_stacks_when_floor_is_full() {
        let truck = Truck::new(1.0, 2.0, 1.0).with_max_weight(100.0);
        let boxes = vec![
            CargoBox::new("A", 1.0, 1.0, 1.0).with_weight(10.0),
            CargoBox::new("B", 1.0, 1.0, 1.0).with_weight(10.0),
        ];

        let result = pack_by_order(&truck, &boxes, &[0, 1]);

        assert_eq!(result.placed.len(), 2);
        assert_relative_eq!(result.placed[1].aabb.position.y, 1.0);
        assert_relative_eq!(result.utilization, 1.0);
    }

    #[test]
    fn test_zero_volume_truck_has_zero_utilization() {
        let truck = Truck::new(0.0, 0.0, 0.0).with_max_weight(1.0);
        let boxes = vec![CargoBox::new("A", 1.0, 1.0, 1.0)];

        let result = pack_by_order(&truck, &boxes, &[0]);

        assert_relative_eq!(result.utilization, 0.0);
        assert!(result.placed.is_empty());
    }
}
