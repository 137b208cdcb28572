//! Squares lying strictly between two aligned squares

use crate::types::Position;

use std::ops::Range;

use arrayvec::ArrayVec;

/// Longest possible route on an 8×8 board
pub const MAX_ROUTE_LEN: usize = 6;

/// Squares strictly between two squares, ordered by increasing file (or by increasing rank
/// for a route along a file)
pub type Route = ArrayVec<Position, MAX_ROUTE_LEN>;

/// Straight line relation between two distinct squares
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    /// Same rank, file varies
    Rank,
    /// Same file, rank varies
    File,
    /// Both coordinates change by the same signed amount
    PositiveDiagonal,
    /// Coordinates change by the same amount with opposite signs
    NegativeDiagonal,
}

impl Line {
    pub const ALL: [Line; 4] = [
        Line::Rank,
        Line::File,
        Line::PositiveDiagonal,
        Line::NegativeDiagonal,
    ];

    /// Returns `true` if `a` and `b` satisfy this relation
    ///
    /// Every relation holds for coincident squares.
    #[inline]
    pub fn holds(self, a: Position, b: Position) -> bool {
        match self {
            Line::Rank => a.same_rank(b),
            Line::File => a.same_file(b),
            Line::PositiveDiagonal => a.positive_diagonal(b),
            Line::NegativeDiagonal => a.negative_diagonal(b),
        }
    }

    /// Returns the only line connecting `a` and `b`
    ///
    /// Coincident and unaligned squares yield `None`.
    pub fn between(a: Position, b: Position) -> Option<Line> {
        if a == b {
            return None;
        }
        Line::ALL.into_iter().find(|l| l.holds(a, b))
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, Line::PositiveDiagonal | Line::NegativeDiagonal)
    }
}

#[inline]
fn strict(a: u8, b: u8) -> Range<u8> {
    a.min(b) + 1..a.max(b)
}

#[inline]
fn at(x: u8, y: u8) -> Position {
    // Strict ranges never leave the bounds spanned by two valid squares
    unsafe { Position::new_unchecked(x, y) }
}

fn push_line(res: &mut Route, line: Line, a: Position, b: Position) {
    let xs = strict(a.x(), b.x());
    let ys = strict(a.y(), b.y());
    match line {
        Line::Rank => res.extend(xs.map(|x| at(x, a.y()))),
        Line::File => res.extend(ys.map(|y| at(a.x(), y))),
        Line::PositiveDiagonal => res.extend(xs.zip(ys).map(|(x, y)| at(x, y))),
        Line::NegativeDiagonal => res.extend(xs.zip(ys.rev()).map(|(x, y)| at(x, y))),
    }
}

/// Returns the squares strictly between `a` and `b` along `line`
///
/// The result is empty if `line` does not connect the two squares.
pub fn line_route(line: Line, a: Position, b: Position) -> Route {
    let mut res = Route::new();
    if line.holds(a, b) {
        push_line(&mut res, line, a, b);
    }
    res
}

/// Returns the squares strictly between `a` and `b`
///
/// Adjacent, coincident and unaligned squares all give an empty route. The order is the same
/// regardless of which endpoint is passed first.
///
/// # Example
///
/// ```
/// # use chessroute::{between, Position};
/// #
/// let a = Position::new(2, 3).unwrap();
/// let b = Position::new(5, 6).unwrap();
/// let route: Vec<_> = between::route(a, b).iter().map(|p| p.to_string()).collect();
/// assert_eq!(route, ["34", "45"]);
/// assert_eq!(between::route(b, a), between::route(a, b));
/// ```
pub fn route(a: Position, b: Position) -> Route {
    let mut res = Route::new();
    for line in Line::ALL {
        if line.holds(a, b) {
            push_line(&mut res, line, a, b);
        }
    }
    #[cfg(any(debug_assertions, feature = "selftest"))]
    check_route(&res, a, b);
    res
}

#[cfg(any(debug_assertions, feature = "selftest"))]
fn check_route(res: &Route, a: Position, b: Position) {
    if let Some(line) = Line::between(a, b) {
        let span = a.delta_x(b).abs().max(a.delta_y(b).abs()) as usize;
        assert_eq!(res.len(), span - 1, "bad route length from {} to {}", a, b);
        for p in res {
            assert!(line.holds(a, *p) && line.holds(*p, b), "{} is off the line", p);
        }
    } else {
        assert!(res.is_empty(), "non-empty route from {} to {}", a, b);
    }
}

/// Returns `true` if `a` and `b` are on one rank or file
#[inline]
pub fn is_rook_valid(a: Position, b: Position) -> bool {
    a != b && (a.same_file(b) || a.same_rank(b))
}

/// Returns `true` if `a` and `b` are on one diagonal
#[inline]
pub fn is_bishop_valid(a: Position, b: Position) -> bool {
    a != b && (a.positive_diagonal(b) || a.negative_diagonal(b))
}
