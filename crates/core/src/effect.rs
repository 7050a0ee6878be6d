//! Per-room modifiers and the input resolver.

use crate::input::Buttons;

/// The modifier active in the current room. Only one is ever current.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoomEffect {
    #[default]
    Normal,
    Gravity,
    Momentum,
    Reversed,
    Random,
    /// Carried as a room tag only; input is not actually delayed.
    Delayed,
    /// Doubled gravity plus momentum damping.
    Final,
}

bitflags::bitflags! {
    /// Flag view of [`RoomEffect`] for hosts that want the six booleans.
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EffectFlags: u8 {
        const GRAVITY  = 1 << 0;
        const MOMENTUM = 1 << 1;
        const REVERSED = 1 << 2;
        const RANDOM   = 1 << 3;
        const DELAYED  = 1 << 4;
        const FINAL    = 1 << 5;
    }
}

impl RoomEffect {
    pub const ALL: [RoomEffect; 7] = [
        RoomEffect::Normal,
        RoomEffect::Gravity,
        RoomEffect::Momentum,
        RoomEffect::Reversed,
        RoomEffect::Random,
        RoomEffect::Delayed,
        RoomEffect::Final,
    ];

    pub fn flags(self) -> EffectFlags {
        match self {
            RoomEffect::Normal => EffectFlags::empty(),
            RoomEffect::Gravity => EffectFlags::GRAVITY,
            RoomEffect::Momentum => EffectFlags::MOMENTUM,
            RoomEffect::Reversed => EffectFlags::REVERSED,
            RoomEffect::Random => EffectFlags::RANDOM,
            RoomEffect::Delayed => EffectFlags::DELAYED,
            RoomEffect::Final => EffectFlags::FINAL,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            RoomEffect::Normal => "normal",
            RoomEffect::Gravity => "gravity",
            RoomEffect::Momentum => "momentum",
            RoomEffect::Reversed => "reversed",
            RoomEffect::Random => "random",
            RoomEffect::Delayed => "delayed",
            RoomEffect::Final => "final",
        }
    }

    #[inline]
    pub fn heavy_gravity(self) -> bool {
        matches!(self, RoomEffect::Gravity | RoomEffect::Final)
    }

    #[inline]
    pub fn damps_momentum(self) -> bool {
        matches!(self, RoomEffect::Momentum | RoomEffect::Final)
    }
}

/// Turns raw held buttons into the buttons the physics step should see.
/// Only `Reversed` touches input; it swaps left and right.
pub fn resolve(effect: RoomEffect, input: Buttons) -> Buttons {
    if effect != RoomEffect::Reversed {
        return input;
    }

    let mut out = input & Buttons::JUMP;
    out.set(Buttons::LEFT, input.contains(Buttons::RIGHT));
    out.set(Buttons::RIGHT, input.contains(Buttons::LEFT));
    out
}
