//! # Base types for chessroute
//!
//! This is an auxiliary crate for `chessroute`, which contains the board value types: validated
//! coordinates and positions, sides, piece kinds and square sets.
//!
//! Normally you don't want to use this crate directly. Use `chessroute` instead, which re-exports
//! everything declared here.

pub mod bitboard;
pub mod geometry;
pub mod types;
