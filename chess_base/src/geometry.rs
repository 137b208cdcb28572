use crate::types::Color;

pub const MIN_COORD: i32 = 1;
pub const MAX_COORD: i32 = 8;

pub const fn is_on_board(val: i32) -> bool {
    val >= MIN_COORD && val <= MAX_COORD
}

pub const fn pawn_start_rank(c: Color) -> u8 {
    match c {
        Color::White => 2,
        Color::Black => 7,
    }
}

pub const fn pawn_forward_delta(c: Color) -> i32 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}
