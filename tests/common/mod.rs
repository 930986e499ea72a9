//! Common test utilities
#![allow(dead_code)]

use rand::Rng;
use sparsekit::dtype::{Complex64, Complex128};

/// Random f32 values in [-1, 1)
pub fn random_f32(len: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect()
}

/// Random f64 values in [-1, 1)
pub fn random_f64(len: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(-1.0f64..1.0)).collect()
}

/// Random Complex64 values with components in [-1, 1)
pub fn random_c64(len: usize) -> Vec<Complex64> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            Complex64::new(
                rng.random_range(-1.0f32..1.0),
                rng.random_range(-1.0f32..1.0),
            )
        })
        .collect()
}

/// Random Complex128 values with components in [-1, 1)
pub fn random_c128(len: usize) -> Vec<Complex128> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            Complex128::new(
                rng.random_range(-1.0f64..1.0),
                rng.random_range(-1.0f64..1.0),
            )
        })
        .collect()
}
