//! Move selection and replay.
//!
//! [`apply_moves`] replays a selected subsequence of a recorded game onto a
//! board and accounts for every labeled position that was later vacated.
//! Illegal entries in the record (occupied point, suicide, off-board) are
//! skipped rather than reported: edited and malformed game records contain
//! them routinely, and the diagram should still show every move that could
//! be applied.

use crate::board::{Board, Point, Stone};

/// One recorded move. `point = None` encodes a pass. `number` is the
/// 1-based position in the original record, not in any filtered
/// subsequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub stone: Stone,
    pub point: Option<Point>,
    pub number: u32,
}

impl Move {
    pub fn play(number: u32, stone: Stone, point: Point) -> Self {
        Move {
            stone,
            point: Some(point),
            number,
        }
    }

    pub fn pass(number: u32, stone: Stone) -> Self {
        Move {
            stone,
            point: None,
            number,
        }
    }
}

/// Invalid move-range bounds.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid move range {start}..={end} (bounds must satisfy 1 <= start <= end)")]
pub struct SelectionError {
    pub start: u32,
    pub end: u32,
}

/// Which part of the move list to expose as the diagram.
///
/// A range restricts which moves are *labeled*; for replay it still applies
/// every move up to the end of the range, because earlier moves determine
/// which labeled stones are still on the board. A limit truncates the
/// selected subsequence to its first K entries; range and limit compose
/// (filter, then truncate), which snapshot generation relies on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    range: Option<(u32, u32)>,
    limit: Option<usize>,
}

impl Selection {
    /// The whole move list.
    pub fn all() -> Self {
        Selection::default()
    }

    /// Label moves numbered `start..=end` (1-based, inclusive).
    pub fn range(start: u32, end: u32) -> Result<Self, SelectionError> {
        if start < 1 || start > end {
            return Err(SelectionError { start, end });
        }
        Ok(Selection {
            range: Some((start, end)),
            limit: None,
        })
    }

    /// Only the first `limit` entries of the move list.
    pub fn first(limit: usize) -> Self {
        Selection {
            range: None,
            limit: Some(limit),
        }
    }

    /// Same selection truncated to the first `limit` entries of its
    /// subsequence.
    pub fn with_limit(self, limit: usize) -> Self {
        Selection {
            limit: Some(limit),
            ..self
        }
    }

    /// Whether a move takes part in the replay. Moves before the start of a
    /// range still replay; skipping them would misplace every capture.
    pub(crate) fn replays(&self, number: u32) -> bool {
        match self.range {
            Some((_, end)) => number <= end,
            None => true,
        }
    }

    /// Whether a move's number is shown as a label.
    pub(crate) fn labels(&self, number: u32) -> bool {
        match self.range {
            Some((start, end)) => (start..=end).contains(&number),
            None => true,
        }
    }

    pub(crate) fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// A labeled position whose stone was later removed or replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverwrittenLabel {
    /// Move that originally placed a stone at `point`.
    pub original_move: u32,
    /// Later move whose placement removed or replaced it.
    pub overwritten_by: u32,
    pub point: Point,
}

/// Outcome of replaying a selected subsequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyMovesResult {
    /// Board after the last applied move.
    pub board: Board,
    /// Moves actually applied, in order: passes included, illegal moves
    /// excluded.
    pub applied: Vec<Move>,
    /// Vacated labeled positions, in discovery order.
    pub overwritten: Vec<OverwrittenLabel>,
}

/// Replay the selected subsequence of `moves` onto `board`.
///
/// Never fails: a move the rules reject is skipped (logged at debug level)
/// and the replay continues, so a malformed record degrades to "as many
/// legal moves as could be applied".
pub fn apply_moves(board: Board, moves: &[Move], selection: &Selection) -> ApplyMovesResult {
    let size = board.size;
    // moveNumber that most recently placed a stone per point, flat-indexed
    let mut owner: Vec<Option<u32>> = vec![None; size * size];
    let mut applied: Vec<Move> = Vec::new();
    let mut overwritten: Vec<OverwrittenLabel> = Vec::new();
    let mut board = board;

    let selected = moves.iter().filter(|m| selection.replays(m.number));
    let working: Vec<&Move> = match selection.limit() {
        Some(k) => selected.take(k).collect(),
        None => selected.collect(),
    };

    for mv in working {
        let Some(pt) = mv.point else {
            applied.push(*mv);
            continue;
        };
        let next = match board.place(pt, mv.stone) {
            Ok(next) => next,
            Err(err) => {
                log::debug!("skipping move {}: {err}", mv.number);
                continue;
            }
        };

        // Direct reuse: the point was empty (placement succeeded) yet still
        // carries an owner. Its label is being replaced, so disclose it.
        let (x, y) = pt;
        if let Some(prev) = owner[y * size + x] {
            overwritten.push(OverwrittenLabel {
                original_move: prev,
                overwritten_by: mv.number,
                point: pt,
            });
        }

        // Any cell occupied before and empty after was captured by this
        // move. A captured stone cannot be captured again, so its owner
        // entry is cleared.
        for cy in 0..size {
            for cx in 0..size {
                if board.stone_at((cx, cy)).is_some() && next.stone_at((cx, cy)).is_none() {
                    if let Some(orig) = owner[cy * size + cx].take() {
                        overwritten.push(OverwrittenLabel {
                            original_move: orig,
                            overwritten_by: mv.number,
                            point: (cx, cy),
                        });
                    }
                }
            }
        }

        owner[y * size + x] = Some(mv.number);
        applied.push(*mv);
        board = next;
    }

    ApplyMovesResult {
        board,
        applied,
        overwritten,
    }
}
