use controlshift_core::{Buttons, GameState, MenuKey};

fn main() {
    let mut game = GameState::new(0);
    game.press(MenuKey::Start);

    let mut jumped: u32 = 0;
    let mut landed: u32 = 0;
    let mut fell: u32 = 0;

    for frame in 0..180 {
        let mut buttons = Buttons::empty();
        if frame < 120 {
            buttons |= Buttons::RIGHT;
        }
        if frame == 40 {
            buttons |= Buttons::JUMP;
        }

        let ev = game.tick(buttons);
        jumped += ev.jumped as u32;
        landed += ev.landed as u32;
        fell += ev.fell as u32;
    }

    let p = &game.player;
    let summary = serde_json::json!({
        "room": game.current_room(),
        "x": p.x,
        "y": p.y,
        "vx": p.vx,
        "vy": p.vy,
        "on_ground": p.on_ground,
        "jumped": jumped,
        "landed": landed,
        "fell": fell,
    });
    println!("{summary}");
}
