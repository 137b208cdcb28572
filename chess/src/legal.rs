//! Per-piece movement rules

use crate::between;
use crate::board::Occupancy;
use crate::geometry;
use crate::types::{Color, Piece, Position};

use std::fmt;

use arrayvec::ArrayVec;

const KNIGHT_DISTANCE: u32 = 5;

/// Most targets any piece can have from one square (a queen in the centre)
pub const MAX_DESTINATIONS: usize = 27;

pub type Destinations = ArrayVec<Position, MAX_DESTINATIONS>;

/// Movement rule of a piece
///
/// Pawns move towards the opposite side, so their rule also carries the side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Movement {
    Rook,
    Bishop,
    Queen,
    Knight,
    King,
    Pawn(Color),
}

impl Movement {
    pub const fn from_parts(c: Color, p: Piece) -> Movement {
        match p {
            Piece::Pawn => Movement::Pawn(c),
            Piece::King => Movement::King,
            Piece::Knight => Movement::Knight,
            Piece::Bishop => Movement::Bishop,
            Piece::Rook => Movement::Rook,
            Piece::Queen => Movement::Queen,
        }
    }

    pub const fn piece(&self) -> Piece {
        match *self {
            Movement::Rook => Piece::Rook,
            Movement::Bishop => Piece::Bishop,
            Movement::Queen => Piece::Queen,
            Movement::Knight => Piece::Knight,
            Movement::King => Piece::King,
            Movement::Pawn(_) => Piece::Pawn,
        }
    }

    /// Returns `true` for pieces which can be blocked by squares on their route
    pub const fn is_sliding(&self) -> bool {
        matches!(*self, Movement::Rook | Movement::Bishop | Movement::Queen)
    }

    /// Checks whether the piece can geometrically go from `src` to `dst` on an empty board
    ///
    /// For pawns, this covers all the shapes a pawn move can take: one step forward, two steps
    /// forward from the start row, and one step diagonally forward. Whether the latter is a
    /// capture, and whether the forward squares are free, is decided by [`Movement::is_legal()`].
    ///
    /// # Example
    ///
    /// ```
    /// # use chessroute::{Movement, Position};
    /// #
    /// let knight = Position::new(4, 4).unwrap();
    /// assert!(Movement::Knight.can_move(knight, Position::new(5, 6).unwrap()));
    /// assert!(!Movement::Knight.can_move(knight, Position::new(6, 6).unwrap()));
    /// ```
    pub fn can_move(&self, src: Position, dst: Position) -> bool {
        match *self {
            Movement::Rook => between::is_rook_valid(src, dst),
            Movement::Bishop => between::is_bishop_valid(src, dst),
            Movement::Queen => {
                between::is_rook_valid(src, dst) || between::is_bishop_valid(src, dst)
            }
            Movement::Knight => src.squared_distance(dst) == KNIGHT_DISTANCE,
            Movement::King => is_king_step(src, dst),
            Movement::Pawn(c) => pawn_step(c, src, dst).is_some(),
        }
    }

    /// Checks whether the piece can go from `src` to `dst` with the board occupied as in `occ`
    ///
    /// Sliding pieces need every square of [`between::route()`] to be empty. Pawns need empty
    /// squares to move forward and an opponent's piece to move diagonally. The occupant of the
    /// destination square is not checked for other moves.
    ///
    /// # Example
    ///
    /// ```
    /// # use chessroute::{Color, Movement, Position, Snapshot};
    /// #
    /// let snap = Snapshot::from_fen("8/8/8/8/8/8/1p6/R7").unwrap();
    /// let a1 = Position::new(1, 1).unwrap();
    /// assert!(Movement::Rook.is_legal(a1, Position::new(8, 1).unwrap(), &snap));
    /// assert!(Movement::Rook.is_legal(a1, Position::new(1, 8).unwrap(), &snap));
    /// assert!(!Movement::Bishop.is_legal(a1, Position::new(8, 8).unwrap(), &snap));
    /// assert!(Movement::Pawn(Color::White).is_legal(a1, Position::new(2, 2).unwrap(), &snap));
    /// ```
    pub fn is_legal(&self, src: Position, dst: Position, occ: &impl Occupancy) -> bool {
        match *self {
            Movement::Pawn(c) => match pawn_step(c, src, dst) {
                Some(PawnStep::Single) => !occ.is_occupied(dst),
                Some(PawnStep::Double) => {
                    is_route_clear(src, dst, occ) && !occ.is_occupied(dst)
                }
                Some(PawnStep::Capture) => occ.is_occupied_by_opponent(dst, c),
                None => false,
            },
            _ if self.is_sliding() => self.can_move(src, dst) && is_route_clear(src, dst, occ),
            _ => self.can_move(src, dst),
        }
    }

    /// Lists all the squares where [`Movement::is_legal()`] holds, in [`Position::index()`] order
    pub fn destinations(&self, src: Position, occ: &impl Occupancy) -> Destinations {
        Position::iter()
            .filter(|&dst| self.is_legal(src, dst, occ))
            .collect()
    }
}

/// White pawns are written as `P`, black ones as `p`, other pieces in upper case
impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Movement::Pawn(Color::Black) => write!(f, "p"),
            _ => write!(f, "{}", self.piece().as_char().to_ascii_uppercase()),
        }
    }
}

/// Returns `true` if no square strictly between `src` and `dst` is occupied
pub fn is_route_clear(src: Position, dst: Position, occ: &impl Occupancy) -> bool {
    between::route(src, dst)
        .iter()
        .all(|&p| !occ.is_occupied(p))
}

fn is_king_step(src: Position, dst: Position) -> bool {
    matches!(src.squared_distance(dst), 1 | 2)
        && src.delta_x(dst).abs() <= 1
        && src.delta_y(dst).abs() <= 1
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PawnStep {
    Single,
    Double,
    Capture,
}

fn pawn_step(c: Color, src: Position, dst: Position) -> Option<PawnStep> {
    let forward = geometry::pawn_forward_delta(c);
    let dx = dst.delta_x(src);
    let dy = dst.delta_y(src);
    match (dx, dy) {
        (0, dy) if dy == forward => Some(PawnStep::Single),
        // On the opponent's start row a double step would leave the board anyway
        (0, dy) if dy == 2 * forward && src.is_start_row() => Some(PawnStep::Double),
        (-1 | 1, dy) if dy == forward => Some(PawnStep::Capture),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Snapshot;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_rook() {
        let rook = pos(2, 3);
        assert!(Movement::Rook.can_move(rook, pos(2, 7)));
        assert!(Movement::Rook.can_move(rook, pos(7, 3)));
        assert!(Movement::Rook.can_move(rook, pos(2, 1)));
        assert!(!Movement::Rook.can_move(rook, pos(3, 4)));
        assert!(!Movement::Rook.can_move(rook, pos(5, 6)));
        assert!(!Movement::Rook.can_move(rook, rook));
    }

    #[test]
    fn test_bishop() {
        let bishop = pos(1, 1);
        assert!(Movement::Bishop.can_move(bishop, pos(8, 8)));
        assert!(!Movement::Bishop.can_move(bishop, pos(1, 8)));
        assert!(!Movement::Bishop.can_move(bishop, bishop));
        assert!(Movement::Bishop.can_move(pos(4, 5), pos(7, 2)));
    }

    #[test]
    fn test_queen() {
        for src in Position::iter() {
            for dst in Position::iter() {
                assert_eq!(
                    Movement::Queen.can_move(src, dst),
                    Movement::Rook.can_move(src, dst) || Movement::Bishop.can_move(src, dst),
                );
            }
        }
        assert!(!Movement::Queen.can_move(pos(4, 4), pos(4, 4)));
        assert!(!Movement::Queen.can_move(pos(4, 4), pos(5, 6)));
    }

    #[test]
    fn test_knight() {
        let knight = pos(4, 4);
        assert!(Movement::Knight.can_move(knight, pos(5, 6)));
        assert!(Movement::Knight.can_move(knight, pos(6, 5)));
        assert!(Movement::Knight.can_move(knight, pos(2, 3)));
        assert!(!Movement::Knight.can_move(knight, pos(4, 6)));
        assert!(!Movement::Knight.can_move(knight, pos(6, 6)));
        let count = Position::iter()
            .filter(|&p| Movement::Knight.can_move(knight, p))
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_king() {
        let king = pos(4, 4);
        let targets: Vec<_> = Position::iter()
            .filter(|&p| Movement::King.can_move(king, p))
            .collect();
        assert_eq!(targets.len(), 8);
        assert!(targets.iter().all(|p| p.squared_distance(king) <= 2));
        assert!(!Movement::King.can_move(king, king));
        assert!(!Movement::King.can_move(king, pos(4, 6)));
        assert_eq!(
            Position::iter()
                .filter(|&p| Movement::King.can_move(pos(1, 1), p))
                .count(),
            3
        );
    }

    #[test]
    fn test_pawn_geometry() {
        let white = Movement::Pawn(Color::White);
        let black = Movement::Pawn(Color::Black);
        assert!(white.can_move(pos(5, 2), pos(5, 3)));
        assert!(white.can_move(pos(5, 2), pos(5, 4)));
        assert!(white.can_move(pos(5, 2), pos(6, 3)));
        assert!(!white.can_move(pos(5, 3), pos(5, 5)));
        assert!(!white.can_move(pos(5, 3), pos(5, 2)));
        assert!(!white.can_move(pos(5, 3), pos(7, 4)));
        assert!(black.can_move(pos(5, 7), pos(5, 5)));
        assert!(black.can_move(pos(5, 7), pos(4, 6)));
        assert!(!black.can_move(pos(5, 7), pos(5, 8)));
        assert!(!black.can_move(pos(5, 2), pos(5, 3)));
    }

    #[test]
    fn test_pawn_occupancy() {
        let white = Movement::Pawn(Color::White);
        let black = Movement::Pawn(Color::Black);
        let snap = Snapshot::from_fen("8/8/8/8/3P4/2p1p3/3P1P2/8").unwrap();

        assert!(white.is_legal(pos(4, 2), pos(4, 3), &snap));
        assert!(!white.is_legal(pos(4, 2), pos(4, 4), &snap));
        assert!(white.is_legal(pos(4, 2), pos(3, 3), &snap));
        assert!(white.is_legal(pos(4, 2), pos(5, 3), &snap));

        assert!(white.is_legal(pos(6, 2), pos(6, 3), &snap));
        assert!(white.is_legal(pos(6, 2), pos(6, 4), &snap));
        assert!(white.is_legal(pos(6, 2), pos(5, 3), &snap));
        assert!(!white.is_legal(pos(6, 2), pos(7, 3), &snap));

        assert!(black.is_legal(pos(3, 3), pos(4, 2), &snap));
        assert!(!black.is_legal(pos(3, 3), pos(2, 2), &snap));
        assert!(black.is_legal(pos(5, 3), pos(5, 2), &snap));
        assert!(black.is_legal(pos(5, 3), pos(6, 2), &snap));
        assert!(!black.is_legal(pos(5, 3), pos(4, 4), &snap));
    }

    #[test]
    fn test_pawn_blocked_double() {
        let white = Movement::Pawn(Color::White);
        let snap = Snapshot::from_fen("8/8/8/8/8/4p3/4P3/8").unwrap();
        assert!(!white.is_legal(pos(5, 2), pos(5, 3), &snap));
        assert!(!white.is_legal(pos(5, 2), pos(5, 4), &snap));
        let snap = Snapshot::from_fen("8/8/8/8/4p3/8/4P3/8").unwrap();
        assert!(white.is_legal(pos(5, 2), pos(5, 3), &snap));
        assert!(!white.is_legal(pos(5, 2), pos(5, 4), &snap));
    }

    #[test]
    fn test_sliding_blocked() {
        let snap = Snapshot::from_fen("8/8/8/8/3p4/8/8/R2P4").unwrap();
        let rook = pos(1, 1);
        assert!(Movement::Rook.is_legal(rook, pos(3, 1), &snap));
        assert!(Movement::Rook.is_legal(rook, pos(4, 1), &snap));
        assert!(!Movement::Rook.is_legal(rook, pos(5, 1), &snap));
        assert!(Movement::Rook.is_legal(rook, pos(1, 8), &snap));

        let bishop = pos(1, 1);
        assert!(Movement::Bishop.is_legal(bishop, pos(3, 3), &snap));
        assert!(!Movement::Bishop.is_legal(bishop, pos(5, 5), &snap));
        assert!(!Movement::Queen.is_legal(bishop, pos(8, 8), &snap));
        assert!(Movement::Queen.is_legal(bishop, pos(1, 8), &snap));
    }

    #[test]
    fn test_jumping_ignores_route() {
        let snap = Snapshot::initial();
        assert!(Movement::Knight.is_legal(pos(2, 1), pos(3, 3), &snap));
        assert!(!Movement::Rook.is_legal(pos(1, 1), pos(1, 3), &snap));
        assert!(Movement::King.is_legal(pos(5, 1), pos(5, 2), &snap));
    }

    #[test]
    fn test_destinations() {
        let empty = Snapshot::EMPTY;
        assert_eq!(Movement::Queen.destinations(pos(4, 4), &empty).len(), MAX_DESTINATIONS);
        assert_eq!(Movement::Rook.destinations(pos(1, 1), &empty).len(), 14);
        assert_eq!(Movement::Bishop.destinations(pos(1, 1), &empty).len(), 7);
        assert_eq!(Movement::Knight.destinations(pos(1, 1), &empty).len(), 2);

        let snap = Snapshot::initial();
        let white = Movement::Pawn(Color::White);
        assert_eq!(
            white.destinations(pos(5, 2), &snap).as_slice(),
            &[pos(5, 3), pos(5, 4)]
        );
        // Only the route is checked, so own pieces next to the bishop still count
        assert_eq!(
            Movement::Bishop.destinations(pos(3, 1), &snap).as_slice(),
            &[pos(2, 2), pos(4, 2)]
        );
    }

    #[test]
    fn test_from_parts() {
        for c in [Color::White, Color::Black] {
            for p in Piece::iter() {
                assert_eq!(Movement::from_parts(c, p).piece(), p);
            }
        }
        assert_eq!(
            Movement::from_parts(Color::Black, Piece::Pawn),
            Movement::Pawn(Color::Black)
        );
        assert!(Movement::Queen.is_sliding());
        assert!(!Movement::Knight.is_sliding());
        assert_eq!(Movement::Pawn(Color::White).to_string(), "P");
        assert_eq!(Movement::Pawn(Color::Black).to_string(), "p");
        assert_eq!(Movement::Rook.to_string(), "R");
    }
}
