use crate::effect::RoomEffect;
use crate::input::Buttons;
use crate::{rects_intersect, Params, Rect};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub w: f32,
    pub h: f32,
    pub on_ground: bool,
}

impl Player {
    pub fn spawn(params: &Params) -> Self {
        Self {
            x: params.spawn_x,
            y: params.spawn_y,
            w: params.player_w,
            h: params.player_h,
            ..Self::default()
        }
    }

    /// Back to spawn with no velocity. Size is kept.
    pub fn respawn(&mut self, params: &Params) {
        self.x = params.spawn_x;
        self.y = params.spawn_y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Events {
    pub jumped: bool,
    pub landed: bool,
    pub fell: bool,
}

/// Snaps the player onto the first platform (in list order) it overlaps
/// while moving down. Overlaps with `vy <= 0` are ignored, so platforms can
/// be passed through from below.
pub fn land_on_platforms(player: &mut Player, platforms: &[Rect]) -> bool {
    player.on_ground = false;
    let rect = player.rect();
    for p in platforms {
        if rects_intersect(&rect, p) && player.vy > 0.0 {
            player.y = p.y - player.h;
            player.vy = 0.0;
            player.on_ground = true;
            break;
        }
    }
    player.on_ground
}

/// One tick of player physics. `input` is expected to have gone through
/// [`crate::resolve`] already. The order of the stages matters.
pub fn step(
    params: &Params,
    platforms: &[Rect],
    player: &mut Player,
    effect: RoomEffect,
    input: Buttons,
) -> Events {
    let mut ev = Events::default();
    let was_grounded = player.on_ground;

    // Left is checked first and wins ties
    player.vx = if input.contains(Buttons::LEFT) {
        -params.move_speed
    } else if input.contains(Buttons::RIGHT) {
        params.move_speed
    } else {
        0.0
    };

    if input.contains(Buttons::JUMP) && was_grounded {
        player.vy = params.jump_strength;
        ev.jumped = true;
    }

    let mut g = params.gravity;
    if effect.heavy_gravity() {
        g *= params.heavy_gravity_multiplier;
    }
    player.vy = (player.vy + g).min(params.terminal_velocity);

    if effect.damps_momentum() {
        player.vx *= params.momentum_damping;
    }

    player.x += player.vx;
    player.y += player.vy;

    player.x = player.x.max(0.0).min(params.world_w - player.w);

    if player.y > params.fall_limit {
        log::debug!("player fell at x={:.1}, back to spawn", player.x);
        player.x = params.spawn_x;
        player.y = params.spawn_y;
        player.vx = 0.0;
        player.vy = 0.0;
        ev.fell = true;
    }

    if land_on_platforms(player, platforms) && !was_grounded {
        ev.landed = true;
    }

    ev
}
