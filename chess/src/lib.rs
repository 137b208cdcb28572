//! # chessroute
//!
//! Geometric movement legality for chess pieces on an 8×8 board.
//!
//! Squares are [`Position`]s with file `x` and rank `y`, both in `1..=8`. On top of them, this
//! crate provides:
//!
//! - line relations and the [routes](between::route) strictly between two squares,
//! - the [movement rule](Movement) of each piece kind, with optional occupancy checks through the
//!   [`Occupancy`] trait,
//! - the [duplicated file count](pawns::count_duplicated_files) used to score pawn structure.
//!
//! # Example
//!
//! ```
//! use chessroute::{Movement, Position, Snapshot};
//!
//! let rook = Position::new(2, 3).unwrap();
//! assert!(Movement::Rook.can_move(rook, Position::new(2, 7).unwrap()));
//! assert!(!Movement::Rook.can_move(rook, Position::new(3, 4).unwrap()));
//!
//! let snap = Snapshot::from_fen("8/8/8/8/8/8/8/8").unwrap();
//! assert!(Movement::Rook.is_legal(rook, Position::new(7, 3).unwrap(), &snap));
//!
//! assert!(Position::new(9, 1).is_err());
//! ```

pub mod between;
pub mod board;
pub mod legal;
pub mod pawns;

pub use chessroute_base::{bitboard, geometry, types};

pub use between::{Line, Route};
pub use bitboard::Bitboard;
pub use board::{Occupancy, Snapshot};
pub use legal::Movement;
pub use types::{Color, Coordinate, Piece, Position, RangeError};
