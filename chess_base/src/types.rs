use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

use crate::geometry;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("coordinate ({x}, {y}) is outside the board")]
pub struct RangeError {
    pub x: i32,
    pub y: i32,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Pair of board coordinates, both within `1..=8`
///
/// There is no way to obtain an off-board `Coordinate` through safe code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Result<Coordinate, RangeError> {
        if !geometry::is_on_board(x) || !geometry::is_on_board(y) {
            return Err(RangeError { x, y });
        }
        Ok(Coordinate {
            x: x as u8,
            y: y as u8,
        })
    }

    /// # Safety
    ///
    /// Both `x` and `y` must be within `1..=8`.
    pub const unsafe fn new_unchecked(x: u8, y: u8) -> Coordinate {
        Coordinate { x, y }
    }

    pub const fn x(&self) -> u8 {
        self.x
    }

    pub const fn y(&self) -> u8 {
        self.y
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position(Coordinate);

impl Position {
    pub const fn new(x: i32, y: i32) -> Result<Position, RangeError> {
        match Coordinate::new(x, y) {
            Ok(c) => Ok(Position(c)),
            Err(e) => Err(e),
        }
    }

    /// # Safety
    ///
    /// Both `x` and `y` must be within `1..=8`.
    pub const unsafe fn new_unchecked(x: u8, y: u8) -> Position {
        Position(Coordinate::new_unchecked(x, y))
    }

    pub const fn from_coordinate(c: Coordinate) -> Position {
        Position(c)
    }

    pub const fn from_index(val: u8) -> Position {
        assert!(val < 64, "position index must be between 0 and 63");
        unsafe { Position::new_unchecked((val & 7) + 1, (val >> 3) + 1) }
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.0
    }

    pub const fn x(&self) -> u8 {
        self.0.x
    }

    pub const fn y(&self) -> u8 {
        self.0.y
    }

    pub const fn index(&self) -> u8 {
        ((self.0.y - 1) << 3) | (self.0.x - 1)
    }

    pub const fn is_match(&self, x: i32, y: i32) -> bool {
        self.0.x as i32 == x && self.0.y as i32 == y
    }

    pub const fn delta_x(&self, other: Position) -> i32 {
        self.0.x as i32 - other.0.x as i32
    }

    pub const fn delta_y(&self, other: Position) -> i32 {
        self.0.y as i32 - other.0.y as i32
    }

    pub const fn same_file(&self, other: Position) -> bool {
        self.0.x == other.0.x
    }

    pub const fn same_rank(&self, other: Position) -> bool {
        self.0.y == other.0.y
    }

    /// Both deltas are equal, so the line rises with the file.
    ///
    /// Vacuously true when `other == self`.
    pub const fn positive_diagonal(&self, other: Position) -> bool {
        self.delta_y(other) == self.delta_x(other)
    }

    /// Deltas have equal magnitude and opposite sign.
    ///
    /// Vacuously true when `other == self`.
    pub const fn negative_diagonal(&self, other: Position) -> bool {
        self.delta_y(other) + self.delta_x(other) == 0
    }

    pub const fn squared_distance(&self, other: Position) -> u32 {
        let dx = self.delta_x(other);
        let dy = self.delta_y(other);
        (dx * dx + dy * dy) as u32
    }

    pub const fn is_start_row(&self) -> bool {
        self.0.y == geometry::pawn_start_rank(Color::White)
            || self.0.y == geometry::pawn_start_rank(Color::Black)
    }

    pub fn try_shift(self, delta_x: i32, delta_y: i32) -> Option<Position> {
        Position::new(self.0.x as i32 + delta_x, self.0.y as i32 + delta_y).ok()
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Position::from_index)
    }
}

impl From<Coordinate> for Position {
    fn from(c: Coordinate) -> Position {
        Position(c)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = RangeError;

    fn try_from((x, y): (i32, i32)) -> Result<Position, RangeError> {
        Position::new(x, y)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Position({})", self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.0.x, self.0.y)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 2 {
            return Err(PositionParseError::BadLength);
        }
        let mut chars = s.chars();
        let (x_ch, y_ch) = match (chars.next(), chars.next()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(PositionParseError::BadLength),
        };
        let x = match x_ch {
            '1'..='8' => x_ch as u8 - b'0',
            _ => return Err(PositionParseError::UnexpectedFileChar(x_ch)),
        };
        let y = match y_ch {
            '1'..='8' => y_ch as u8 - b'0',
            _ => return Err(PositionParseError::UnexpectedRankChar(y_ch)),
        };
        Ok(unsafe { Position::new_unchecked(x, y) })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ColorParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    King = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl Piece {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Piece::Pawn,
            Piece::King,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ]
        .into_iter()
    }

    pub fn as_char(&self) -> char {
        b"pknbrq"[*self as usize] as char
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'k' => Some(Piece::King),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            _ => None,
        }
    }
}
