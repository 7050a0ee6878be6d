//! Game state, room transitions and the screen flow.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::backdrop::{generate_stars, Star};
use crate::effect::{resolve, EffectFlags, RoomEffect};
use crate::input::{Buttons, MenuKey};
use crate::physics::{step, Events, Player};
use crate::rooms::{catalog, Room};
use crate::{rects_intersect, Params};

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Title = 0,
    LevelSelect = 1,
    Playing = 2,
    /// Every room cleared.
    Ending = 3,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub params: Params,
    pub player: Player,
    rooms: Vec<Room>,
    current_room: usize,
    effect: RoomEffect,
    screen: Screen,
    rng: Pcg32,
    stars: Vec<Star>,
    ticks: u64,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, Params::default())
    }

    pub fn with_params(seed: u64, params: Params) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = generate_stars(&mut rng);
        let mut state = Self {
            params,
            player: Player::spawn(&params),
            rooms: catalog(),
            current_room: 0,
            effect: RoomEffect::Normal,
            screen: Screen::Title,
            rng,
            stars,
            ticks: 0,
        };
        state.set_room(0);
        state
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn current_room(&self) -> usize {
        self.current_room
    }

    pub fn room(&self) -> &Room {
        &self.rooms[self.current_room]
    }

    pub fn effect(&self) -> RoomEffect {
        self.effect
    }

    pub fn effect_flags(&self) -> EffectFlags {
        self.effect.flags()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Enters room `index`. Out-of-range indices are ignored.
    pub fn set_room(&mut self, index: usize) {
        if index >= self.rooms.len() {
            log::debug!("set_room({index}) ignored, {} rooms", self.rooms.len());
            return;
        }

        self.current_room = index;
        self.player.respawn(&self.params);
        self.effect = self.rooms[index].effect;
        if self.effect == RoomEffect::Random {
            self.rooms[index].regenerate(&mut self.rng);
        }

        log::info!(
            "room {}/{}: {} ({})",
            index + 1,
            self.rooms.len(),
            self.rooms[index].name,
            self.effect.tag()
        );
    }

    /// Handles a discrete key press for the title, level select and ending
    /// screens. Presses that mean nothing on the current screen are dropped.
    pub fn press(&mut self, key: MenuKey) {
        match (self.screen, key) {
            (Screen::Title, MenuKey::Start) => self.screen = Screen::Playing,
            (Screen::Title, MenuKey::LevelSelect) => self.screen = Screen::LevelSelect,
            (Screen::LevelSelect, MenuKey::Back) => self.screen = Screen::Title,
            (Screen::LevelSelect, MenuKey::Select(index)) if index < self.rooms.len() => {
                self.set_room(index);
                self.screen = Screen::Playing;
            }
            (Screen::Ending, MenuKey::Start) => {
                self.screen = Screen::Title;
                self.set_room(0);
            }
            _ => {}
        }
    }

    /// One frame of play: resolve input, step physics, then check the goal
    /// and the random room's reshuffle. Does nothing off the play screen.
    pub fn tick(&mut self, held: Buttons) -> Events {
        if self.screen != Screen::Playing {
            return Events::default();
        }
        self.ticks += 1;

        let input = resolve(self.effect, held);
        let room = &self.rooms[self.current_room];
        let ev = step(
            &self.params,
            &room.platforms,
            &mut self.player,
            self.effect,
            input,
        );

        if rects_intersect(&self.player.rect(), &room.goal) {
            self.complete_room();
        }

        if self.effect == RoomEffect::Random
            && self.rng.random_bool(self.params.reshuffle_probability())
        {
            self.rooms[self.current_room].regenerate(&mut self.rng);
        }

        ev
    }

    fn complete_room(&mut self) {
        if self.current_room + 1 < self.rooms.len() {
            self.set_room(self.current_room + 1);
        } else {
            log::info!("all {} rooms cleared after {} ticks", self.rooms.len(), self.ticks);
            self.screen = Screen::Ending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, Screen};
    use crate::effect::{EffectFlags, RoomEffect};
    use crate::input::{Buttons, MenuKey};
    use crate::rooms::{GROUND, RANDOM_PLATFORM_COUNT};
    use crate::Params;

    fn approx_eq(a: f32, b: f32) {
        let eps = 1e-4;
        assert!(
            (a - b).abs() <= eps,
            "expected {b}, got {a} (diff {})",
            (a - b).abs()
        );
    }

    fn playing(seed: u64) -> GameState {
        let mut g = GameState::new(seed);
        g.press(MenuKey::Start);
        assert_eq!(g.screen(), Screen::Playing);
        g
    }

    #[test]
    fn starts_on_title_in_first_room() {
        let g = GameState::new(1);
        assert_eq!(g.screen(), Screen::Title);
        assert_eq!(g.current_room(), 0);
        assert_eq!(g.effect(), RoomEffect::Normal);
        approx_eq(g.player.x, 50.0);
        approx_eq(g.player.y, 300.0);
    }

    #[test]
    fn set_room_arms_exactly_the_rooms_effect() {
        let mut g = GameState::new(3);
        for i in 0..g.room_count() {
            g.player.vx = 3.0;
            g.player.on_ground = true;
            g.set_room(i);
            let want = g.rooms()[i].effect;
            assert_eq!(g.effect(), want);
            let flags = g.effect_flags();
            if want == RoomEffect::Normal {
                assert!(flags.is_empty());
            } else {
                assert_eq!(flags.bits().count_ones(), 1);
                assert_eq!(flags, want.flags());
            }
            approx_eq(g.player.x, 50.0);
            approx_eq(g.player.y, 300.0);
            approx_eq(g.player.vx, 0.0);
            approx_eq(g.player.vy, 0.0);
            assert!(!g.player.on_ground);
        }
    }

    #[test]
    fn out_of_range_set_room_is_ignored() {
        let mut g = GameState::new(3);
        g.set_room(2);
        g.player.x = 400.0;
        g.set_room(7);
        g.set_room(usize::MAX);
        assert_eq!(g.current_room(), 2);
        assert_eq!(g.effect(), RoomEffect::Momentum);
        approx_eq(g.player.x, 400.0);
    }

    #[test]
    fn entering_random_room_regenerates_platforms() {
        let mut g = GameState::new(11);
        assert_eq!(g.rooms()[4].platforms.len(), 1);
        g.set_room(4);
        let platforms = &g.room().platforms;
        assert_eq!(platforms.len(), RANDOM_PLATFORM_COUNT + 1);
        assert_eq!(platforms[0], GROUND);
        assert!(g.effect_flags().contains(EffectFlags::RANDOM));
    }

    #[test]
    fn random_room_reshuffles_during_play() {
        let params = Params {
            reshuffle_chance: 1.0,
            ..Params::default()
        };
        let mut g = GameState::with_params(5, params);
        g.press(MenuKey::LevelSelect);
        g.press(MenuKey::Select(4));
        let before = g.room().platforms.clone();
        g.tick(Buttons::empty());
        let after = &g.room().platforms;
        assert_ne!(&before, after);
        assert_eq!(after[0], GROUND);
    }

    #[test]
    fn bad_reshuffle_chance_does_not_panic() {
        let params = Params {
            reshuffle_chance: 1.5,
            ..Params::default()
        };
        let mut g = GameState::with_params(5, params);
        g.press(MenuKey::LevelSelect);
        g.press(MenuKey::Select(4));
        let before = g.room().platforms.clone();
        g.tick(Buttons::empty());
        assert_ne!(&before, &g.room().platforms);

        g.params.reshuffle_chance = f64::NAN;
        let before = g.room().platforms.clone();
        for _ in 0..50 {
            g.tick(Buttons::empty());
        }
        assert_eq!(before, g.room().platforms);
    }

    #[test]
    fn zero_chance_never_reshuffles_random_room() {
        let params = Params {
            reshuffle_chance: 0.0,
            ..Params::default()
        };
        let mut g = GameState::with_params(5, params);
        g.press(MenuKey::LevelSelect);
        g.press(MenuKey::Select(4));
        let before = g.room().platforms.clone();
        for _ in 0..300 {
            g.tick(Buttons::empty());
            assert_eq!(g.current_room(), 4);
        }
        assert_eq!(before, g.room().platforms);
    }

    #[test]
    fn fixed_rooms_never_regenerate() {
        let params = Params {
            reshuffle_chance: 1.0,
            ..Params::default()
        };
        let catalog = crate::rooms::catalog();
        for room in [0, 1, 2, 3, 5, 6] {
            let mut g = GameState::with_params(5, params);
            g.press(MenuKey::LevelSelect);
            g.press(MenuKey::Select(room));
            for _ in 0..120 {
                g.tick(Buttons::empty());
            }
            assert_eq!(g.current_room(), room);
            assert_eq!(g.room().platforms, catalog[room].platforms, "{}", g.room().name);
        }
    }

    #[test]
    fn left_for_one_tick_in_first_room() {
        let mut g = playing(1);
        g.tick(Buttons::LEFT);
        approx_eq(g.player.vx, -5.0);
        approx_eq(g.player.x, 45.0);
    }

    #[test]
    fn reversed_room_inverts_movement() {
        let mut g = playing(1);
        g.set_room(3);
        g.tick(Buttons::LEFT);
        approx_eq(g.player.vx, 5.0);
        approx_eq(g.player.x, 55.0);
    }

    #[test]
    fn delayed_room_moves_immediately() {
        let mut g = playing(1);
        g.set_room(5);
        g.tick(Buttons::RIGHT);
        approx_eq(g.player.x, 55.0);
    }

    #[test]
    fn fall_off_resets_without_changing_room() {
        let mut g = playing(1);
        g.set_room(1);
        g.player.x = 300.0;
        g.player.y = 595.0;
        g.player.vy = 10.0;
        let ev = g.tick(Buttons::empty());
        assert!(ev.fell);
        assert_eq!(g.current_room(), 1);
        approx_eq(g.player.x, 50.0);
        approx_eq(g.player.y, 300.0);
        approx_eq(g.player.vx, 0.0);
        approx_eq(g.player.vy, 0.0);
        assert!(!g.player.on_ground);
    }

    #[test]
    fn reaching_goal_advances_room() {
        let mut g = playing(1);
        g.player.x = 755.0;
        g.player.y = 255.0;
        g.tick(Buttons::empty());
        assert_eq!(g.current_room(), 1);
        assert_eq!(g.effect(), RoomEffect::Gravity);
        assert!(g.effect_flags().contains(EffectFlags::GRAVITY));
        approx_eq(g.player.x, 50.0);
        approx_eq(g.player.y, 300.0);
        assert_eq!(g.screen(), Screen::Playing);
    }

    #[test]
    fn clearing_last_room_ends_the_run() {
        let mut g = playing(1);
        g.set_room(6);
        g.player.x = 225.0;
        g.player.y = 55.0;
        g.tick(Buttons::empty());
        assert_eq!(g.screen(), Screen::Ending);
        assert_eq!(g.current_room(), 6);

        // Frozen until restarted
        let x = g.player.x;
        g.tick(Buttons::RIGHT);
        approx_eq(g.player.x, x);
    }

    #[test]
    fn screen_flow() {
        let mut g = GameState::new(2);
        g.press(MenuKey::Back);
        assert_eq!(g.screen(), Screen::Title);
        g.press(MenuKey::LevelSelect);
        assert_eq!(g.screen(), Screen::LevelSelect);
        g.press(MenuKey::Start);
        assert_eq!(g.screen(), Screen::LevelSelect);
        g.press(MenuKey::Back);
        assert_eq!(g.screen(), Screen::Title);
        g.press(MenuKey::LevelSelect);
        g.press(MenuKey::Select(6));
        assert_eq!(g.screen(), Screen::Playing);
        assert_eq!(g.current_room(), 6);
        assert_eq!(g.effect(), RoomEffect::Final);

        g.player.x = 225.0;
        g.player.y = 55.0;
        g.tick(Buttons::empty());
        assert_eq!(g.screen(), Screen::Ending);

        g.press(MenuKey::Start);
        assert_eq!(g.screen(), Screen::Title);
        assert_eq!(g.current_room(), 0);
        assert_eq!(g.effect(), RoomEffect::Normal);
    }

    #[test]
    fn menus_do_not_tick_physics() {
        let mut g = GameState::new(2);
        let ev = g.tick(Buttons::RIGHT);
        assert_eq!(ev, Default::default());
        approx_eq(g.player.x, 50.0);
        assert_eq!(g.ticks(), 0);
    }
}
