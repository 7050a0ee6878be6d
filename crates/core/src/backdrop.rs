use rand::Rng;

use crate::{WORLD_H, WORLD_W};

pub const STAR_COUNT: usize = 50;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Grey level, 100..255.
    pub brightness: u8,
}

pub fn generate_stars<R: Rng>(rng: &mut R) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.random_range(0.0..WORLD_W),
            y: rng.random_range(0.0..WORLD_H),
            size: rng.random_range(1.0..3.0),
            brightness: rng.random_range(100..255),
        })
        .collect()
}
