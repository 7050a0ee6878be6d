//! The room catalog and random platform generation.

use rand::Rng;

use crate::effect::RoomEffect;
use crate::Rect;

/// Floor shared by every room. Random layouts always keep it at index 0.
pub const GROUND: Rect = Rect::new(0.0, 550.0, 800.0, 50.0);

pub const RANDOM_PLATFORM_COUNT: usize = 5;
pub const RANDOM_PLATFORM_H: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub name: &'static str,
    pub platforms: Vec<Rect>,
    pub goal: Rect,
    pub effect: RoomEffect,
}

impl Room {
    /// Replaces the platform list with ground plus a fresh random layout.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        self.platforms = random_platforms(rng);
        log::debug!("{}: platforms regenerated", self.name);
    }
}

/// Ground followed by [`RANDOM_PLATFORM_COUNT`] platforms with
/// `x` in `[50, 700)`, `y` in `[200, 500)`, width in `[60, 120)`.
pub fn random_platforms<R: Rng>(rng: &mut R) -> Vec<Rect> {
    let mut platforms = Vec::with_capacity(RANDOM_PLATFORM_COUNT + 1);
    platforms.push(GROUND);
    for _ in 0..RANDOM_PLATFORM_COUNT {
        platforms.push(Rect {
            x: rng.random_range(50.0..700.0),
            y: rng.random_range(200.0..500.0),
            w: rng.random_range(60.0..120.0),
            h: RANDOM_PLATFORM_H,
        });
    }
    platforms
}

fn plat(x: f32, y: f32, w: f32) -> Rect {
    Rect::new(x, y, w, 20.0)
}

fn goal(x: f32, y: f32) -> Rect {
    Rect::new(x, y, 30.0, 30.0)
}

/// The seven rooms in play order.
pub fn catalog() -> Vec<Room> {
    vec![
        Room {
            name: "Normal Room",
            platforms: vec![
                GROUND,
                plat(200.0, 450.0, 100.0),
                plat(400.0, 350.0, 100.0),
                plat(600.0, 250.0, 100.0),
            ],
            goal: goal(750.0, 250.0),
            effect: RoomEffect::Normal,
        },
        Room {
            name: "High Gravity",
            platforms: vec![
                GROUND,
                plat(150.0, 450.0, 80.0),
                plat(300.0, 350.0, 80.0),
                plat(450.0, 250.0, 80.0),
                plat(600.0, 150.0, 80.0),
            ],
            goal: goal(620.0, 120.0),
            effect: RoomEffect::Gravity,
        },
        Room {
            name: "Momentum",
            platforms: vec![
                GROUND,
                plat(100.0, 450.0, 60.0),
                plat(250.0, 350.0, 60.0),
                plat(400.0, 250.0, 60.0),
                plat(550.0, 150.0, 60.0),
                plat(700.0, 100.0, 60.0),
            ],
            goal: goal(720.0, 70.0),
            effect: RoomEffect::Momentum,
        },
        Room {
            name: "Reversed Controls",
            platforms: vec![
                GROUND,
                plat(250.0, 450.0, 100.0),
                plat(450.0, 350.0, 100.0),
            ],
            goal: goal(470.0, 320.0),
            effect: RoomEffect::Reversed,
        },
        Room {
            name: "Random Platforms",
            platforms: vec![GROUND],
            goal: goal(750.0, 250.0),
            effect: RoomEffect::Random,
        },
        Room {
            name: "Delayed Input",
            platforms: vec![
                GROUND,
                plat(200.0, 450.0, 100.0),
                plat(400.0, 350.0, 100.0),
                plat(100.0, 250.0, 100.0),
                plat(600.0, 200.0, 100.0),
            ],
            goal: goal(620.0, 170.0),
            effect: RoomEffect::Delayed,
        },
        Room {
            name: "Final Challenge",
            platforms: vec![
                GROUND,
                plat(100.0, 450.0, 80.0),
                plat(250.0, 380.0, 80.0),
                plat(400.0, 310.0, 80.0),
                plat(550.0, 240.0, 80.0),
                plat(350.0, 170.0, 80.0),
                plat(200.0, 100.0, 80.0),
            ],
            goal: goal(220.0, 50.0),
            effect: RoomEffect::Final,
        },
    ]
}
