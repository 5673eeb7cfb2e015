//! Test utilities for Rangoli integration tests.
//!
//! Helpers for building worlds and belief grids.

#![allow(dead_code)]

use rangoli::filter::normalize;
use rangoli::{BeliefGrid, Color, ColorGrid, GridCoord, Shape};

/// The 2x2 world used for the hit/miss example.
pub fn red_corner_world() -> ColorGrid {
    ColorGrid::from_rows(vec![
        vec![Color::RED, Color::GREEN],
        vec![Color::GREEN, Color::GREEN],
    ])
    .unwrap()
}

/// A world with a deterministic, non-repeating-looking color pattern.
pub fn patterned_world(height: usize, width: usize) -> ColorGrid {
    let palette = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
    let rows = (0..height)
        .map(|r| {
            (0..width)
                .map(|c| palette[(r * 7 + c * 3 + r * c) % palette.len()])
                .collect()
        })
        .collect();
    ColorGrid::from_rows(rows).unwrap()
}

/// A normalized, uneven belief grid generated from a seed.
pub fn lumpy_beliefs(shape: Shape, seed: u64) -> BeliefGrid {
    use std::num::Wrapping;

    // Simple LCG PRNG for reproducibility
    let mut state = Wrapping(seed);
    let a = Wrapping(1664525u64);
    let c = Wrapping(1013904223u64);

    let rows = (0..shape.height)
        .map(|_| {
            (0..shape.width)
                .map(|_| {
                    state = a * state + c;
                    ((state.0 >> 8) & 0xFFFF) as f64 / 65536.0 + 0.001
                })
                .collect()
        })
        .collect();
    normalize(&BeliefGrid::from_rows(rows).unwrap()).unwrap()
}

/// Point mass in a grid of the given shape.
pub fn one_hot(height: usize, width: usize, row: usize, col: usize) -> BeliefGrid {
    BeliefGrid::one_hot(Shape::new(height, width), GridCoord::new(row, col)).unwrap()
}

/// Assert two grids agree cell by cell within `epsilon`.
pub fn assert_grids_close(a: &BeliefGrid, b: &BeliefGrid, epsilon: f64) {
    assert_eq!(a.shape(), b.shape(), "shape mismatch");
    for ((coord, pa), (_, pb)) in a.iter().zip(b.iter()) {
        assert!(
            (pa - pb).abs() <= epsilon,
            "cell {coord}: {pa} vs {pb} (epsilon {epsilon})"
        );
    }
}
