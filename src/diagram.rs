//! The full conversion pipeline: board size, replay, labels, caption.

use std::collections::HashMap;

use crate::apply::{apply_moves, ApplyMovesResult, Move, Selection, SelectionError};
use crate::board::{Board, Point, SizeError};
use crate::label::{filter_overwritten_labels, format_for_caption, labels_for};

/// Configuration rejected before any board work begins. Fatal to the
/// conversion call, unlike per-move rule violations, which are recovered
/// from silently during replay.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Everything the renderer needs for one diagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagram {
    /// Final board position.
    pub board: Board,
    /// Moves actually applied, passes included.
    pub applied: Vec<Move>,
    /// Display number for every visibly labeled point.
    pub labels: HashMap<Point, u32>,
    /// Caption lines for labels hidden by later board changes; empty when
    /// the caption should be omitted.
    pub caption: Vec<String>,
}

/// Convert a recorded game into one diagram.
pub fn render(size: usize, moves: &[Move], selection: &Selection) -> Result<Diagram, ConfigError> {
    let board = Board::new(size)?;
    let ApplyMovesResult {
        board,
        applied,
        overwritten,
    } = apply_moves(board, moves, selection);
    let labels = labels_for(&applied, selection);
    let visible = filter_overwritten_labels(&overwritten, &labels);
    Ok(Diagram {
        board,
        applied,
        labels,
        caption: format_for_caption(&visible),
    })
}

/// One diagram per successive prefix of the selected subsequence, from the
/// first selected move up to the whole selection. Relies on range-and-limit
/// composition: each snapshot is the same selection truncated one entry
/// further.
pub fn render_snapshots(
    size: usize,
    moves: &[Move],
    selection: &Selection,
) -> Result<Vec<Diagram>, ConfigError> {
    let mut len = moves.iter().filter(|m| selection.replays(m.number)).count();
    if let Some(k) = selection.limit() {
        len = len.min(k);
    }
    let mut snapshots = Vec::with_capacity(len);
    for k in 1..=len {
        snapshots.push(render(size, moves, &selection.with_limit(k))?);
    }
    Ok(snapshots)
}
