//! Board occupancy as seen by movement rules

use crate::bitboard::Bitboard;
use crate::types::{Color, Piece, Position};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a [`Snapshot`] from the placement part of FEN
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum SnapshotParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(u8),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(u8),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Read-only view of which squares are occupied, and by which side
///
/// Movement rules query it while checking a single move, so the implementor must not change
/// between the queries made by one call.
pub trait Occupancy {
    /// Returns `true` if any piece stands on `p`
    fn is_occupied(&self, p: Position) -> bool;

    /// Returns `true` if a piece of the side opposite to `side` stands on `p`
    fn is_occupied_by_opponent(&self, p: Position, side: Color) -> bool;
}

impl<T: Occupancy + ?Sized> Occupancy for &T {
    #[inline]
    fn is_occupied(&self, p: Position) -> bool {
        (**self).is_occupied(p)
    }

    #[inline]
    fn is_occupied_by_opponent(&self, p: Position, side: Color) -> bool {
        (**self).is_occupied_by_opponent(p, side)
    }
}

/// Occupancy snapshot holding one square set per side
///
/// Piece kinds are not stored, only which side owns each occupied square.
///
/// # Example
///
/// ```
/// # use chessroute::{Color, Occupancy, Position, Snapshot};
/// #
/// let snap: Snapshot = "8/8/8/8/8/8/PPPPPPPP/8".parse().unwrap();
/// let e2 = Position::new(5, 2).unwrap();
/// assert!(snap.is_occupied(e2));
/// assert!(snap.is_occupied_by_opponent(e2, Color::Black));
/// assert!(!snap.is_occupied_by_opponent(e2, Color::White));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    white: Bitboard,
    black: Bitboard,
}

impl Snapshot {
    pub const EMPTY: Snapshot = Snapshot {
        white: Bitboard::EMPTY,
        black: Bitboard::EMPTY,
    };

    /// Returns a snapshot with pieces on ranks 1, 2, 7 and 8, as in the initial position
    pub fn initial() -> Snapshot {
        let mut res = Snapshot::EMPTY;
        for p in Position::iter() {
            match p.y() {
                1 | 2 => res.put(p, Color::White),
                7 | 8 => res.put(p, Color::Black),
                _ => {}
            }
        }
        res
    }

    pub const fn from_parts(white: Bitboard, black: Bitboard) -> Snapshot {
        Snapshot {
            white: Bitboard::from_raw(white.as_raw() & !black.as_raw()),
            black,
        }
    }

    /// Parses a snapshot from the placement part of FEN
    ///
    /// Does the same as [`Snapshot::from_str`].
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Snapshot, SnapshotParseError> {
        Snapshot::from_str(fen)
    }

    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn all(&self) -> Bitboard {
        self.white | self.black
    }

    pub fn color_at(&self, p: Position) -> Option<Color> {
        if self.white.has(p) {
            Some(Color::White)
        } else if self.black.has(p) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Puts a piece of side `c` to `p`, replacing the previous occupant
    pub fn put(&mut self, p: Position, c: Color) {
        self.remove(p);
        match c {
            Color::White => self.white.set(p),
            Color::Black => self.black.set(p),
        }
    }

    pub fn remove(&mut self, p: Position) {
        self.white.unset(p);
        self.black.unset(p);
    }
}

impl Occupancy for Snapshot {
    #[inline]
    fn is_occupied(&self, p: Position) -> bool {
        self.all().has(p)
    }

    #[inline]
    fn is_occupied_by_opponent(&self, p: Position, side: Color) -> bool {
        self.color(side.inv()).has(p)
    }
}

/// Occupied squares with unknown owners
///
/// No square counts as an opponent's one.
impl Occupancy for Bitboard {
    #[inline]
    fn is_occupied(&self, p: Position) -> bool {
        self.has(p)
    }

    #[inline]
    fn is_occupied_by_opponent(&self, _p: Position, _side: Color) -> bool {
        false
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotParseError;

    fn from_str(s: &str) -> Result<Snapshot, Self::Err> {
        type Error = SnapshotParseError;

        let mut x = 0_u8;
        let mut y = 8_u8;
        let mut res = Snapshot::EMPTY;
        for b in s.bytes() {
            match b {
                b'1'..=b'8' => {
                    let add = b - b'0';
                    if x + add > 8 {
                        return Err(Error::RankOverflow(y));
                    }
                    x += add;
                }
                b'/' => {
                    if x < 8 {
                        return Err(Error::RankUnderflow(y));
                    }
                    y -= 1;
                    x = 0;
                    if y == 0 {
                        return Err(Error::Overflow);
                    }
                }
                _ => {
                    if x >= 8 {
                        return Err(Error::RankOverflow(y));
                    }
                    let ch = b as char;
                    Piece::from_char(ch).ok_or(Error::UnexpectedChar(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    x += 1;
                    res.put(unsafe { Position::new_unchecked(x, y) }, color);
                }
            }
        }

        if x < 8 {
            return Err(Error::RankUnderflow(y));
        }
        if y > 1 {
            return Err(Error::Underflow);
        }
        Ok(res)
    }
}

/// Writes the placement part of FEN, white pieces as `P` and black ones as `p`
impl Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for y in (1..=8_u8).rev() {
            let mut empty = 0;
            for x in 1..=8_u8 {
                let ch = match self.color_at(unsafe { Position::new_unchecked(x, y) }) {
                    Some(Color::White) => 'P',
                    Some(Color::Black) => 'p',
                    None => {
                        empty += 1;
                        continue;
                    }
                };
                if empty != 0 {
                    write!(f, "{}", empty)?;
                    empty = 0;
                }
                write!(f, "{}", ch)?;
            }
            if empty != 0 {
                write!(f, "{}", empty)?;
            }
            if y != 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
