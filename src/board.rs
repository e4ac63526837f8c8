//! Immutable Go board representation.
//!
//! A [`Board`] holds one position of an N×N game (1 ≤ N ≤ 25). Every
//! "mutating" operation returns a new `Board`; the receiver is never touched,
//! so earlier positions stay valid for comparison after later moves are
//! played. [`Board::place`] enforces the full placement rules: opponent
//! groups left without liberties are captured first, and only then is the
//! placed stone's own group checked for suicide.

use std::fmt;

/// Smallest supported board size.
pub const MIN_SIZE: usize = 1;
/// Largest supported board size.
pub const MAX_SIZE: usize = 25;

/// A placeable stone color. The empty cell state is `Option<Stone>`, so
/// "place an empty stone" cannot be expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// A point on the board: (x, y), 0-based. x grows rightward, y grows
/// downward.
pub type Point = (usize, usize);

/// Board size outside the supported range.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("board size {0} is outside {MIN_SIZE}..={MAX_SIZE}")]
pub struct SizeError(pub usize);

/// Why a stone could not be placed.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PlaceError {
    #[error("point ({0}, {1}) is outside the board")]
    OutOfRange(usize, usize),
    #[error("point ({0}, {1}) is already occupied")]
    Occupied(usize, usize),
    #[error("move would leave its own group without liberties")]
    Suicide,
}

/// One immutable board position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Create an empty board. The size check lives here because it protects
    /// the grid invariant everything else relies on.
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(SizeError(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn is_valid(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    /// Stone at a point, `None` for empty cells and for any out-of-range
    /// point. Never errors.
    pub fn stone_at(&self, pt: Point) -> Option<Stone> {
        if !self.is_valid(pt) {
            return None;
        }
        self.cells[self.idx(pt.0, pt.1)]
    }

    fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::new();
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        v.into_iter()
    }

    /// Place a stone, returning the resulting board.
    ///
    /// Adjacent opponent groups left without liberties are removed before
    /// the placed stone's own group is checked, so a move that fills an
    /// opponent group's last liberty is legal even though the point looks
    /// like suicide beforehand.
    pub fn place(&self, pt: Point, stone: Stone) -> Result<Board, PlaceError> {
        let (x, y) = pt;
        if !self.is_valid(pt) {
            return Err(PlaceError::OutOfRange(x, y));
        }
        if self.stone_at(pt).is_some() {
            return Err(PlaceError::Occupied(x, y));
        }

        let mut next = self.clone();
        let i = next.idx(x, y);
        next.cells[i] = Some(stone);

        let opp = stone.opponent();
        let mut dead: Vec<Point> = Vec::new();
        for n in next.neighbors(pt) {
            if next.stone_at(n) == Some(opp) && !dead.contains(&n) {
                let grp = next.group(n);
                if !next.has_liberties(&grp) {
                    dead.extend(grp);
                }
            }
        }
        let next = next.remove_stones(&dead);

        let own = next.group(pt);
        if !next.has_liberties(&own) {
            return Err(PlaceError::Suicide);
        }
        Ok(next)
    }

    /// The connected same-color group containing `pt`, empty if the point is
    /// empty or out of range. Explicit-stack flood fill over 4-connected
    /// neighbors; each point is visited once.
    pub fn group(&self, pt: Point) -> Vec<Point> {
        let Some(color) = self.stone_at(pt) else {
            return Vec::new();
        };
        let mut stack = vec![pt];
        let mut visited = vec![false; self.size * self.size];
        let mut out = Vec::new();
        while let Some((cx, cy)) = stack.pop() {
            let i = self.idx(cx, cy);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            out.push((cx, cy));
            for n in self.neighbors((cx, cy)) {
                if !visited[self.idx(n.0, n.1)] && self.stone_at(n) == Some(color) {
                    stack.push(n);
                }
            }
        }
        out
    }

    /// True iff any stone in `group` has an empty orthogonal neighbor.
    pub fn has_liberties(&self, group: &[Point]) -> bool {
        group
            .iter()
            .any(|&pt| self.neighbors(pt).any(|n| self.stone_at(n).is_none()))
    }

    /// Board with every listed point cleared. Out-of-range points are
    /// silently ignored.
    pub fn remove_stones(&self, points: &[Point]) -> Board {
        let mut next = self.clone();
        for &pt in points {
            if next.is_valid(pt) {
                let i = next.idx(pt.0, pt.1);
                next.cells[i] = None;
            }
        }
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.stone_at((x, y)) {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a Go coordinate like "D4" into a point on a board of the given
/// size. Columns are letters skipping `I`; rows are numbered from the
/// bottom. Returns `None` for anything unparseable or off the board.
pub fn parse_coord(s: &str, size: usize) -> Option<Point> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_alphabetic() {
        return None;
    }
    let col_char = bytes[0].to_ascii_uppercase();
    if col_char == b'I' {
        return None;
    }
    let mut x = (col_char - b'A') as usize;
    if col_char > b'I' {
        x -= 1;
    }
    let row: usize = s[1..].parse().ok()?;
    if x >= size || row < 1 || row > size {
        return None;
    }
    Some((x, size - row))
}

/// Format a point as a Go coordinate ("D4") on a board of the given size.
pub fn format_coord((x, y): Point, size: usize) -> String {
    let mut c = b'A' + x as u8;
    if c >= b'I' {
        c += 1;
    }
    format!("{}{}", c as char, size - y)
}
