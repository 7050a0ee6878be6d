//! Held buttons and discrete menu presses.

bitflags::bitflags! {
    /// Logical buttons held this tick.
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 2;
    }
}

impl Buttons {
    /// Maps a DOM `KeyboardEvent.code` onto the button it drives. Arrows and
    /// WASD share the same logical bits.
    pub fn from_code(code: &str) -> Buttons {
        match code {
            "ArrowLeft" | "KeyA" => Buttons::LEFT,
            "ArrowRight" | "KeyD" => Buttons::RIGHT,
            "Space" | "ArrowUp" | "KeyW" => Buttons::JUMP,
            _ => Buttons::empty(),
        }
    }
}

/// Edge-triggered keys consumed by the screen flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Start,
    LevelSelect,
    Back,
    /// Zero-based room index.
    Select(usize),
}

impl MenuKey {
    pub fn from_code(code: &str) -> Option<MenuKey> {
        match code {
            "Space" => Some(MenuKey::Start),
            "KeyL" => Some(MenuKey::LevelSelect),
            "Escape" => Some(MenuKey::Back),
            _ => {
                let digit = code.strip_prefix("Digit")?.parse::<usize>().ok()?;
                (1..=7).contains(&digit).then(|| MenuKey::Select(digit - 1))
            }
        }
    }
}
