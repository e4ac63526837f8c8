//! godiag: a static Go diagram engine.
//!
//! Replays a recorded move sequence onto an immutable board, honoring
//! capture and suicide rules, and derives the numbered labels and the
//! "overwritten label" caption a diagram renderer needs.
//!
//! ## Modules
//!
//! - [`board`] - Immutable board state, groups, liberties, captures
//! - [`apply`] - Move selection and replay with overwrite bookkeeping
//! - [`label`] - Label visibility and caption formatting
//! - [`diagram`] - The whole conversion pipeline in one call
//!
//! ## Example
//!
//! ```
//! use godiag::apply::{Move, Selection};
//! use godiag::board::Stone::{Black, White};
//! use godiag::diagram::render;
//!
//! // White's third move captures Black's corner stone.
//! let moves = vec![
//!     Move::play(1, Black, (0, 0)),
//!     Move::play(2, White, (1, 0)),
//!     Move::play(3, White, (0, 1)),
//! ];
//!
//! let diagram = render(9, &moves, &Selection::all()).unwrap();
//! assert_eq!(diagram.board.stone_at((0, 0)), None);
//! assert_eq!(diagram.caption, vec!["1 at 3"]);
//! ```

pub mod apply;
pub mod board;
pub mod diagram;
pub mod label;
