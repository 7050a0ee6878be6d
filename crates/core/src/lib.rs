#![allow(clippy::many_single_char_names)]

//! Control Shift game core.
//!
//! Seven rooms, each bending the controls or the physics in one way. The
//! host samples held buttons once per display frame and calls
//! [`GameState::tick`]; movement is not scaled by elapsed time. Everything
//! the host needs to draw is readable off the state afterwards.

use serde::Deserialize;

pub mod backdrop;
pub mod effect;
pub mod game;
pub mod input;
pub mod physics;
pub mod rooms;

pub use backdrop::{generate_stars, Star};
pub use effect::{resolve, EffectFlags, RoomEffect};
pub use game::{GameState, Screen};
pub use input::{Buttons, MenuKey};
pub use physics::{land_on_platforms, step, Events, Player};
pub use rooms::{catalog, random_platforms, Room, GROUND};

pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 600.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Exclusive AABB overlap: rects that only share an edge do not intersect.
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Params {
    // Horizontal
    pub move_speed: f32,
    pub momentum_damping: f32,

    // Vertical
    pub gravity: f32,
    pub heavy_gravity_multiplier: f32,
    pub terminal_velocity: f32,
    pub jump_strength: f32,

    // Player
    pub player_w: f32,
    pub player_h: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,

    // World
    pub world_w: f32,
    // Falling below this resets the player to spawn
    pub fall_limit: f32,

    // Chance per tick that the random room reshuffles its platforms
    pub reshuffle_chance: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            momentum_damping: 0.8,

            gravity: 0.8,
            heavy_gravity_multiplier: 2.0,
            terminal_velocity: 15.0,
            jump_strength: -12.0,

            player_w: 20.0,
            player_h: 30.0,
            spawn_x: 50.0,
            spawn_y: 300.0,

            world_w: WORLD_W,
            fall_limit: WORLD_H,

            reshuffle_chance: 0.01,
        }
    }
}

/// A tuning value outside the range the game can run with.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidParam {
    pub field: &'static str,
    pub value: f64,
}

impl std::fmt::Display for InvalidParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid param {}: {}", self.field, self.value)
    }
}

impl std::error::Error for InvalidParam {}

impl Params {
    /// Rejects non-finite values and a reshuffle chance outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), InvalidParam> {
        let floats = [
            ("move_speed", self.move_speed),
            ("momentum_damping", self.momentum_damping),
            ("gravity", self.gravity),
            ("heavy_gravity_multiplier", self.heavy_gravity_multiplier),
            ("terminal_velocity", self.terminal_velocity),
            ("jump_strength", self.jump_strength),
            ("player_w", self.player_w),
            ("player_h", self.player_h),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("world_w", self.world_w),
            ("fall_limit", self.fall_limit),
        ];
        for (field, v) in floats {
            if !v.is_finite() {
                return Err(InvalidParam { field, value: v as f64 });
            }
        }
        if !(0.0..=1.0).contains(&self.reshuffle_chance) {
            return Err(InvalidParam {
                field: "reshuffle_chance",
                value: self.reshuffle_chance,
            });
        }
        Ok(())
    }

    /// `reshuffle_chance` forced into `[0, 1]`; NaN counts as never.
    pub fn reshuffle_probability(&self) -> f64 {
        if self.reshuffle_chance.is_nan() {
            0.0
        } else {
            self.reshuffle_chance.clamp(0.0, 1.0)
        }
    }
}
