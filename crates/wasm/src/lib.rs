use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use controlshift_core::{Buttons, GameState, MenuKey};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod render;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Host-driven game: JS owns the loop and the canvas, this owns the rules.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    // Physical key codes currently down; several codes can share a button
    down: HashSet<String>,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Game {
        Game {
            state: GameState::new(seed as u64),
            down: HashSet::new(),
        }
    }

    /// `code` is a `KeyboardEvent.code`.
    pub fn key_down(&mut self, code: &str) {
        if !Buttons::from_code(code).is_empty() {
            self.down.insert(code.to_owned());
        }
        if let Some(key) = MenuKey::from_code(code) {
            self.state.press(key);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.down.remove(code);
    }

    pub fn set_room(&mut self, index: usize) {
        self.state.set_room(index);
    }

    /// Step once and return the player, room and events as a JS object.
    pub fn tick(&mut self) -> JsValue {
        let ev = self.state.tick(self.held());
        let p = &self.state.player;

        let obj = js_sys::Object::new();
        let set = |k: &str, v: JsValue| {
            let _ = js_sys::Reflect::set(&obj, &k.into(), &v);
        };
        set("x", JsValue::from_f64(p.x as f64));
        set("y", JsValue::from_f64(p.y as f64));
        set("vx", JsValue::from_f64(p.vx as f64));
        set("vy", JsValue::from_f64(p.vy as f64));
        set("on_ground", JsValue::from_bool(p.on_ground));
        set("room", JsValue::from_f64(self.state.current_room() as f64));
        set("room_name", JsValue::from_str(self.state.room().name));
        set("screen", JsValue::from_f64(self.state.screen() as u8 as f64));
        set("effects", JsValue::from_f64(self.state.effect_flags().bits() as f64));
        set("jumped", JsValue::from_bool(ev.jumped));
        set("landed", JsValue::from_bool(ev.landed));
        set("fell", JsValue::from_bool(ev.fell));

        JsValue::from(obj)
    }

    /// Packed rects: [x,y,w,h, x,y,w,h, ...]
    pub fn platforms(&self) -> Box<[f32]> {
        self.state
            .room()
            .platforms
            .iter()
            .flat_map(|r| [r.x, r.y, r.w, r.h])
            .collect()
    }

    pub fn goal(&self) -> Box<[f32]> {
        let g = self.state.room().goal;
        Box::new([g.x, g.y, g.w, g.h])
    }
}

impl Game {
    /// Buttons held right now, OR-ed over every key that is down.
    fn held(&self) -> Buttons {
        self.down
            .iter()
            .fold(Buttons::empty(), |b, code| b | Buttons::from_code(code))
    }
}

thread_local! {
    static RUNNING: RefCell<Option<Game>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-driving browser game on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn run(canvas_id: &str, seed: u32) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| format!("no element #{canvas_id}"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;
    canvas.set_width(controlshift_core::WORLD_W as u32);
    canvas.set_height(controlshift_core::WORLD_H as u32);
    let ctx = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    RUNNING.with(|cell| *cell.borrow_mut() = Some(Game::new(seed)));
    log::info!("control shift started, seed {seed}");

    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            RUNNING.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.key_down(&evt.code());
                }
            });
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            RUNNING.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.key_up(&evt.code());
                }
            });
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        RUNNING.with(|cell| {
            if let Some(game) = cell.borrow_mut().as_mut() {
                let held = game.held();
                game.state.tick(held);
                render::draw(&ctx, &game.state);
            }
        });
        if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(())
}
