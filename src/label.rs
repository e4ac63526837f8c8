//! Label derivation for the rendered diagram.
//!
//! Decides which applied moves are visible as numbered labels and narrows
//! the overwritten-label record to the labels a viewer can actually see.

use std::collections::{HashMap, HashSet};

use crate::apply::{Move, OverwrittenLabel, Selection};
use crate::board::Point;

/// Map each labeled point to its display number.
///
/// The display number is the move's own number in the unfiltered record, so
/// a range 16..=18 shows "16 17 18", never "1 2 3". Passes have no point
/// and produce no entry. When several selected moves touched the same point,
/// the latest one wins, matching the stone physically on the final board.
pub fn labels_for(applied: &[Move], selection: &Selection) -> HashMap<Point, u32> {
    let mut labels = HashMap::new();
    for mv in applied {
        if let Some(pt) = mv.point {
            if selection.labels(mv.number) {
                labels.insert(pt, mv.number);
            }
        }
    }
    labels
}

/// Keep only records whose original move is among the visible labels.
///
/// "Move 4 was overwritten" means nothing to a viewer who cannot see a
/// move 4, so records for unlabeled moves are dropped.
pub fn filter_overwritten_labels(
    records: &[OverwrittenLabel],
    labels: &HashMap<Point, u32>,
) -> Vec<OverwrittenLabel> {
    let visible: HashSet<u32> = labels.values().copied().collect();
    records
        .iter()
        .filter(|r| visible.contains(&r.original_move))
        .copied()
        .collect()
}

/// Caption lines, one per record: `"{original} at {overwriter}"`.
pub fn format_for_caption(records: &[OverwrittenLabel]) -> Vec<String> {
    records
        .iter()
        .map(|r| format!("{} at {}", r.original_move, r.overwritten_by))
        .collect()
}
