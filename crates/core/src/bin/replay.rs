use std::error::Error;
use std::fs;
use std::path::PathBuf;

use controlshift_core::{Buttons, GameState, MenuKey, Params};
use serde::Deserialize;

/// Replay file. `inputs` holds one button bit set per tick; `presses` maps
/// a tick to a DOM key code pressed before that tick runs.
#[derive(Debug, Deserialize)]
struct Replay {
    #[serde(default)]
    seed: u64,
    #[serde(default)]
    room: Option<usize>,
    #[serde(default)]
    params: Params,
    inputs: Vec<u8>,
    #[serde(default)]
    presses: Vec<(usize, String)>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: cargo run -p controlshift_core --bin replay -- <replay.json>")?;
    let raw = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let replay: Replay = serde_json::from_str(&raw)?;
    replay.params.validate()?;

    let mut game = GameState::with_params(replay.seed, replay.params);
    // Skip the title screen unless the replay scripts it
    if replay.presses.is_empty() {
        game.press(MenuKey::Start);
    }
    if let Some(room) = replay.room {
        game.set_room(room);
    }

    println!("frame,room,screen,x,y,vx,vy,on_ground");
    for (frame, bits) in replay.inputs.iter().enumerate() {
        for (_, code) in replay.presses.iter().filter(|(at, _)| *at == frame) {
            match MenuKey::from_code(code) {
                Some(key) => game.press(key),
                None => log::warn!("frame {frame}: unknown menu key {code:?}"),
            }
        }

        let _ = game.tick(Buttons::from_bits_truncate(*bits));
        let p = &game.player;
        println!(
            "{},{},{:?},{},{},{},{},{}",
            frame,
            game.current_room(),
            game.screen(),
            p.x,
            p.y,
            p.vx,
            p.vy,
            p.on_ground as u8
        );
    }

    Ok(())
}
