use controlshift_core::{Buttons, Events, GameState, MenuKey, Player, Rect};

/// Menu codes accepted by `cs_game_press`: 0 start, 1 level select, 2 back,
/// 10..=16 select room 0..=6.
fn menu_key(code: u8) -> Option<MenuKey> {
    match code {
        0 => Some(MenuKey::Start),
        1 => Some(MenuKey::LevelSelect),
        2 => Some(MenuKey::Back),
        10..=16 => Some(MenuKey::Select((code - 10) as usize)),
        _ => None,
    }
}

#[no_mangle]
pub extern "C" fn cs_game_new(seed: u64) -> *mut GameState {
    Box::into_raw(Box::new(GameState::new(seed)))
}

#[no_mangle]
pub extern "C" fn cs_game_free(game: *mut GameState) {
    if !game.is_null() {
        unsafe { drop(Box::from_raw(game)); }
    }
}

#[no_mangle]
pub extern "C" fn cs_game_tick(game: *mut GameState, input_bits: u8) -> Events {
    let Some(g) = (unsafe { game.as_mut() }) else {
        return Events::default();
    };
    g.tick(Buttons::from_bits_truncate(input_bits))
}

#[no_mangle]
pub extern "C" fn cs_game_press(game: *mut GameState, menu_code: u8) {
    if let (Some(g), Some(key)) = (unsafe { game.as_mut() }, menu_key(menu_code)) {
        g.press(key);
    }
}

#[no_mangle]
pub extern "C" fn cs_game_set_room(game: *mut GameState, index: usize) {
    if let Some(g) = unsafe { game.as_mut() } {
        g.set_room(index);
    }
}

#[no_mangle]
pub extern "C" fn cs_game_player(game: *const GameState, out: *mut Player) {
    if let (Some(g), false) = (unsafe { game.as_ref() }, out.is_null()) {
        unsafe { *out = g.player; }
    }
}

#[no_mangle]
pub extern "C" fn cs_game_room(game: *const GameState) -> usize {
    unsafe { game.as_ref() }.map_or(0, |g| g.current_room())
}

#[no_mangle]
pub extern "C" fn cs_game_screen(game: *const GameState) -> u8 {
    unsafe { game.as_ref() }.map_or(0, |g| g.screen() as u8)
}

#[no_mangle]
pub extern "C" fn cs_game_effect_flags(game: *const GameState) -> u8 {
    unsafe { game.as_ref() }.map_or(0, |g| g.effect_flags().bits())
}

#[no_mangle]
pub extern "C" fn cs_game_goal(game: *const GameState, out: *mut Rect) {
    if let (Some(g), false) = (unsafe { game.as_ref() }, out.is_null()) {
        unsafe { *out = g.room().goal; }
    }
}

#[no_mangle]
pub extern "C" fn cs_game_platform_count(game: *const GameState) -> usize {
    unsafe { game.as_ref() }.map_or(0, |g| g.room().platforms.len())
}

/// Copies up to `cap` platforms of the current room into `out` and returns
/// how many were written.
#[no_mangle]
pub extern "C" fn cs_game_platforms(game: *const GameState, out: *mut Rect, cap: usize) -> usize {
    let Some(g) = (unsafe { game.as_ref() }) else {
        return 0;
    };
    if out.is_null() {
        return 0;
    }
    let platforms = &g.room().platforms;
    let n = platforms.len().min(cap);
    let dst = unsafe { std::slice::from_raw_parts_mut(out, n) };
    dst.copy_from_slice(&platforms[..n]);
    n
}
