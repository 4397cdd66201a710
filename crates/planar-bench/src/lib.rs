//! Benchmark profiles for Planar geometry values.
//!
//! - [`scatter_bodies`]: deterministic transforms spread over a square
//! - [`scatter_velocities`]: matching per-body velocities

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use planar_core::{RawRot, RawTransform, RawVec2};

/// Half-width of the square bodies are scattered over.
pub const WORLD_HALF_EXTENT: f32 = 100.0;

/// `count` transforms with positions in the world square and random
/// headings. Same seed, same bodies.
pub fn scatter_bodies(count: usize, seed: u64) -> Vec<RawTransform> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(-WORLD_HALF_EXTENT..WORLD_HALF_EXTENT);
            let y = rng.random_range(-WORLD_HALF_EXTENT..WORLD_HALF_EXTENT);
            let angle = rng.random_range(-std::f32::consts::PI..std::f32::consts::PI);
            RawTransform::new(RawVec2::new(x, y), RawRot::from_angle(angle))
        })
        .collect()
}

/// `count` velocities with components in `[-1, 1)`.
pub fn scatter_velocities(count: usize, seed: u64) -> Vec<RawVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| RawVec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect()
}
