//! Canvas drawing for each screen.

use std::f64::consts::TAU;

use controlshift_core::{GameState, Screen, WORLD_H, WORLD_W};
use web_sys::CanvasRenderingContext2d;

const PINK: &str = "#FFB6C1";
const WHITE: &str = "#FFFFFF";
const CENTER_X: f64 = WORLD_W as f64 / 2.0;

pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(0.0, 0.0, WORLD_W as f64, WORLD_H as f64);

    for star in state.stars() {
        let b = star.brightness;
        ctx.set_fill_style_str(&format!("rgb({b}, {b}, {b})"));
        disc(ctx, star.x as f64, star.y as f64, star.size as f64);
    }

    match state.screen() {
        Screen::Title => title(ctx),
        Screen::LevelSelect => level_select(ctx, state),
        Screen::Playing => playing(ctx, state),
        Screen::Ending => ending(ctx),
    }
}

fn disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    if ctx.arc(x, y, r, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}

fn text(ctx: &CanvasRenderingContext2d, font: &str, color: &str, s: &str, x: f64, y: f64) {
    ctx.set_font(font);
    ctx.set_fill_style_str(color);
    ctx.fill_text(s, x, y).ok();
}

fn title(ctx: &CanvasRenderingContext2d) {
    ctx.set_text_align("center");
    text(ctx, "bold 48px Arial", PINK, "Control Shift", CENTER_X, 250.0);
    text(ctx, "24px Arial", WHITE, "Press SPACE to start", CENTER_X, 320.0);
    text(ctx, "24px Arial", WHITE, "Press L for level select", CENTER_X, 350.0);
}

fn level_select(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.set_text_align("center");
    text(ctx, "bold 48px Arial", PINK, "Level Select", CENTER_X, 100.0);
    for (i, room) in state.rooms().iter().enumerate() {
        let line = format!("{}. {}", i + 1, room.name);
        text(ctx, "24px Arial", WHITE, &line, CENTER_X, 200.0 + i as f64 * 40.0);
    }
    text(ctx, "24px Arial", "#888888", "Press ESC to return", CENTER_X, 500.0);
}

fn playing(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let room = state.room();

    ctx.set_fill_style_str("#666666");
    for p in &room.platforms {
        ctx.fill_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);
    }

    let g = room.goal;
    ctx.set_fill_style_str("#00FF00");
    ctx.fill_rect(g.x as f64, g.y as f64, g.w as f64, g.h as f64);

    let p = &state.player;
    ctx.set_fill_style_str(PINK);
    ctx.fill_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);
    ctx.set_fill_style_str("#FFFF99");
    disc(ctx, (p.x + p.w / 2.0) as f64, (p.y + 5.0) as f64, 5.0);

    ctx.set_text_align("left");
    let hud = format!(
        "Room {}/{}: {}",
        state.current_room() + 1,
        state.room_count(),
        room.name
    );
    text(ctx, "20px Arial", WHITE, &hud, 10.0, 30.0);
    if state.effect() == controlshift_core::RoomEffect::Final {
        text(ctx, "20px Arial", WHITE, "Effect: All combined!", 10.0, 60.0);
    }
}

fn ending(ctx: &CanvasRenderingContext2d) {
    ctx.set_text_align("center");
    text(ctx, "bold 48px Arial", PINK, "Congratulations!", CENTER_X, 250.0);
    text(ctx, "24px Arial", WHITE, "You completed all rooms!", CENTER_X, 320.0);
    text(ctx, "24px Arial", WHITE, "Press SPACE to restart", CENTER_X, 350.0);
}
