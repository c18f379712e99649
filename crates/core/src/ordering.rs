//! Ordered-collection reorder planning.
//!
//! Entities that carry a persisted `order_index` (pastorals, celebrations,
//! slides) are displayed ascending by that index, scoped to an optional
//! partition (celebrations order within their day of week). Moving an entry
//! up or down exchanges its `order_index` with the adjacent neighbor and
//! nothing else.
//!
//! This module computes the swap; executing it belongs to the repository
//! layer, which applies both writes in a single transaction so a failure
//! can never leave one side of the exchange persisted.

use serde::Deserialize;

use crate::types::DbId;

/// Direction of a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// A minimal view of an ordered row: its id and current `order_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedRow {
    pub id: DbId,
    pub order_index: i32,
}

/// The two writes that realize a move: each row gets the other's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    pub target_id: DbId,
    pub target_new_index: i32,
    pub neighbor_id: DbId,
    pub neighbor_new_index: i32,
}

/// Outcome of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The swap was planned/applied.
    Moved,
    /// The target is already first (up) or last (down) in its partition.
    Boundary,
    /// The target id is not part of the partition.
    NotFound,
}

/// Plan a move within one partition.
///
/// `rows` must contain every row of the target's partition and nothing else;
/// they may arrive in any order. The partition is sorted ascending by
/// `(order_index, id)` — the id component makes neighbor selection
/// deterministic when two rows share an `order_index` (a degenerate state a
/// crashed historic swap could have left behind): the first row encountered
/// in that sort wins.
///
/// Returns `Err(MoveOutcome::NotFound)` when `target_id` is absent and
/// `Err(MoveOutcome::Boundary)` when the target has no neighbor in the
/// requested direction. A singleton partition is always a boundary.
pub fn plan_move(
    rows: &[OrderedRow],
    target_id: DbId,
    direction: MoveDirection,
) -> Result<SwapPlan, MoveOutcome> {
    let mut sorted: Vec<OrderedRow> = rows.to_vec();
    sorted.sort_by_key(|r| (r.order_index, r.id));

    let i = match sorted.iter().position(|r| r.id == target_id) {
        Some(i) => i,
        None => return Err(MoveOutcome::NotFound),
    };

    let j = match direction {
        MoveDirection::Up => {
            if i == 0 {
                return Err(MoveOutcome::Boundary);
            }
            i - 1
        }
        MoveDirection::Down => {
            if i + 1 >= sorted.len() {
                return Err(MoveOutcome::Boundary);
            }
            i + 1
        }
    };

    let target = sorted[i];
    let neighbor = sorted[j];

    Ok(SwapPlan {
        target_id: target.id,
        target_new_index: neighbor.order_index,
        neighbor_id: neighbor.id,
        neighbor_new_index: target.order_index,
    })
}

/// Apply a [`SwapPlan`] to an in-memory partition and re-sort it.
///
/// Repositories re-read from the database after committing a swap; this
/// helper exists for callers that hold the partition in memory (and for
/// asserting the planner's invariants in tests).
pub fn apply_swap(rows: &mut [OrderedRow], plan: &SwapPlan) {
    for row in rows.iter_mut() {
        if row.id == plan.target_id {
            row.order_index = plan.target_new_index;
        } else if row.id == plan.neighbor_id {
            row.order_index = plan.neighbor_new_index;
        }
    }
    rows.sort_by(|a, b| (a.order_index, a.id).cmp(&(b.order_index, b.id)));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: DbId, order_index: i32) -> OrderedRow {
        OrderedRow { id, order_index }
    }

    // -- plan_move: adjacent exchange ---------------------------------------

    #[test]
    fn move_up_swaps_with_previous() {
        let rows = [row(1, 0), row(2, 1), row(3, 2)];
        let plan = plan_move(&rows, 2, MoveDirection::Up).unwrap();
        assert_eq!(plan.target_id, 2);
        assert_eq!(plan.target_new_index, 0);
        assert_eq!(plan.neighbor_id, 1);
        assert_eq!(plan.neighbor_new_index, 1);
    }

    #[test]
    fn move_down_swaps_with_next() {
        let rows = [row(1, 0), row(2, 1), row(3, 2)];
        let plan = plan_move(&rows, 2, MoveDirection::Down).unwrap();
        assert_eq!(plan.target_id, 2);
        assert_eq!(plan.target_new_index, 2);
        assert_eq!(plan.neighbor_id, 3);
        assert_eq!(plan.neighbor_new_index, 1);
    }

    #[test]
    fn swap_exchanges_exactly_the_two_indices() {
        let mut rows = vec![row(1, 0), row(2, 3), row(3, 7)];
        let plan = plan_move(&rows, 3, MoveDirection::Up).unwrap();
        apply_swap(&mut rows, &plan);
        // Gap values travel with the swap; untouched rows keep theirs.
        assert_eq!(rows, vec![row(1, 0), row(3, 3), row(2, 7)]);
    }

    #[test]
    fn moved_entity_ends_up_before_its_old_predecessor() {
        let mut rows = vec![row(10, 0), row(11, 1), row(12, 2), row(13, 3)];
        let plan = plan_move(&rows, 12, MoveDirection::Up).unwrap();
        apply_swap(&mut rows, &plan);
        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 12, 11, 13]);
    }

    // -- plan_move: boundary no-ops -----------------------------------------

    #[test]
    fn move_up_on_first_is_boundary() {
        let rows = [row(1, 0), row(2, 1)];
        assert_eq!(
            plan_move(&rows, 1, MoveDirection::Up),
            Err(MoveOutcome::Boundary)
        );
    }

    #[test]
    fn move_down_on_last_is_boundary() {
        let rows = [row(1, 0), row(2, 1)];
        assert_eq!(
            plan_move(&rows, 2, MoveDirection::Down),
            Err(MoveOutcome::Boundary)
        );
    }

    #[test]
    fn singleton_partition_is_always_boundary() {
        let rows = [row(7, 4)];
        assert_eq!(
            plan_move(&rows, 7, MoveDirection::Up),
            Err(MoveOutcome::Boundary)
        );
        assert_eq!(
            plan_move(&rows, 7, MoveDirection::Down),
            Err(MoveOutcome::Boundary)
        );
    }

    #[test]
    fn unknown_target_is_not_found() {
        let rows = [row(1, 0), row(2, 1)];
        assert_eq!(
            plan_move(&rows, 99, MoveDirection::Up),
            Err(MoveOutcome::NotFound)
        );
    }

    #[test]
    fn empty_partition_is_not_found() {
        assert_eq!(
            plan_move(&[], 1, MoveDirection::Down),
            Err(MoveOutcome::NotFound)
        );
    }

    // -- plan_move: unsorted input and duplicate indices --------------------

    #[test]
    fn input_order_does_not_matter() {
        let rows = [row(3, 2), row(1, 0), row(2, 1)];
        let plan = plan_move(&rows, 2, MoveDirection::Up).unwrap();
        assert_eq!(plan.neighbor_id, 1);
    }

    #[test]
    fn duplicate_index_ties_break_by_id() {
        // Rows 2 and 3 share index 1 (leftover of a historic partial swap).
        // Sorted order is (1,0), (2,1), (3,1): moving 3 up must pick 2.
        let rows = [row(1, 0), row(2, 1), row(3, 1)];
        let plan = plan_move(&rows, 3, MoveDirection::Up).unwrap();
        assert_eq!(plan.neighbor_id, 2);
        assert_eq!(plan.target_new_index, 1);
        assert_eq!(plan.neighbor_new_index, 1);
    }

    #[test]
    fn only_the_two_involved_rows_change() {
        let mut rows = vec![row(1, 0), row(2, 1), row(3, 2), row(4, 3)];
        let before = rows.clone();
        let plan = plan_move(&rows, 3, MoveDirection::Down).unwrap();
        apply_swap(&mut rows, &plan);
        for r in &before {
            if r.id != plan.target_id && r.id != plan.neighbor_id {
                let after = rows.iter().find(|x| x.id == r.id).unwrap();
                assert_eq!(after.order_index, r.order_index);
            }
        }
    }
}
