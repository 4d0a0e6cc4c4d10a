//! Optimally solves N×N sliding-tile puzzles (8-puzzle, 15-puzzle, …).
//!
//! The library is organized around one flow: a raw tile grid becomes a
//! [`Board`](crate::core::Board), the [`parity`] gate decides whether the
//! goal is reachable at all, and [`solve::solve`] runs a best-first search
//! that returns the move string plus search statistics.

pub mod core;
pub mod gen;
pub mod heuristic;
pub mod parity;
pub mod solve;
