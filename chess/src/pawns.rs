//! Pawn structure helpers used by position scoring

use crate::types::Position;

/// Returns how many of `positions` stand on each file, indexed by `x - 1`
pub fn file_counts(positions: impl IntoIterator<Item = Position>) -> [u32; 8] {
    let mut counts = [0_u32; 8];
    for p in positions {
        counts[(p.x() - 1) as usize] += 1;
    }
    counts
}

/// Counts pawns standing on files with more than one pawn
///
/// Every pawn on such a file is counted, including the first one. So two pawns on one file
/// give 2, not 1.
///
/// # Example
///
/// ```
/// # use chessroute::{pawns, Position};
/// #
/// let ps = [(3, 2), (3, 4), (5, 2)].map(|(x, y)| Position::new(x, y).unwrap());
/// assert_eq!(pawns::count_duplicated_files(ps), 2);
/// ```
pub fn count_duplicated_files(positions: impl IntoIterator<Item = Position>) -> u32 {
    file_counts(positions)
        .into_iter()
        .filter(|&count| count >= 2)
        .sum()
}
