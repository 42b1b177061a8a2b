//! Browser runtime: one client, at most one pending animation frame, two key listeners

use crate::input::{handle_key_down, handle_key_up};
use crate::renderer::Renderer;
use crate::scene::build_instances;
use crate::simulation::LocalGame;
use crate::state::{phase_name, HudState};
use game_core::{Config, GamePhase, InputEvent};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

type FrameCallback = Closure<dyn FnMut(f64)>;
type KeyCallback = Closure<dyn FnMut(KeyboardEvent)>;

/// Main client state
struct Client {
    renderer: Renderer,
    game: LocalGame,
    hud: HudState,
}

impl Client {
    /// Advance, log and draw one frame. Returns the phase afterwards.
    fn on_frame(&mut self, timestamp_ms: f64) -> Result<GamePhase, String> {
        let (events, snapshot) = self.game.on_frame(timestamp_ms);
        for line in self.hud.observe(&events, &snapshot) {
            console_log!("{}", line);
        }

        let config = self.game.config();
        let instances = build_instances(&snapshot, config.arena_width, config.arena_height);
        self.renderer.draw(&instances)?;
        Ok(snapshot.phase)
    }

    fn push_input(&mut self, event: Option<InputEvent>) -> bool {
        match event {
            Some(event) => {
                self.game.push_input(event);
                true
            }
            None => false,
        }
    }
}

/// requestAnimationFrame chain. Runs while a round is running and goes idle
/// otherwise; input wakes it for one frame.
#[derive(Clone)]
struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    handle: Rc<Cell<Option<i32>>>,
    active: Rc<Cell<bool>>,
}

impl FrameLoop {
    fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            handle: Rc::new(Cell::new(None)),
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Request the next frame unless one is already pending
    fn schedule(&self) {
        if !self.active.get() || self.handle.get().is_some() {
            return;
        }
        if let Some(callback) = self.callback.borrow().as_ref() {
            match request_frame(callback) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => console_log!("Failed to schedule frame: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        self.active.set(false);
        if let Some(handle) = self.handle.take() {
            if let Ok(window) = window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        // Breaks the callback's reference to this loop
        self.callback.borrow_mut().take();
    }
}

/// Everything that must be torn down together
struct Runtime {
    client: Rc<RefCell<Client>>,
    frames: FrameLoop,
    key_down: KeyCallback,
    key_up: KeyCallback,
}

impl Runtime {
    fn stop(self) {
        self.frames.cancel();
        if let Ok(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                self.key_down.as_ref().unchecked_ref(),
            );
            let _ = window
                .remove_event_listener_with_callback("keyup", self.key_up.as_ref().unchecked_ref());
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn parse_config(config_json: Option<String>) -> Result<Config, JsValue> {
    match config_json {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e))),
        _ => Ok(Config::default()),
    }
}

/// Queue an input and make sure a frame will pick it up
fn submit_input(client: &Rc<RefCell<Client>>, frames: &FrameLoop, event: Option<InputEvent>) -> bool {
    let handled = client.borrow_mut().push_input(event);
    if handled {
        frames.schedule();
    }
    handled
}

fn key_listener(
    client: &Rc<RefCell<Client>>,
    frames: &FrameLoop,
    map: fn(&str) -> Option<InputEvent>,
) -> KeyCallback {
    let client = client.clone();
    let frames = frames.clone();
    Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        if submit_input(&client, &frames, map(&e.code())) {
            e.prevent_default();
        }
    })
}

fn install_frame_callback(client: &Rc<RefCell<Client>>, frames: &FrameLoop) {
    let client = client.clone();
    let next = frames.clone();
    *frames.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        next.handle.set(None);
        if !next.active.get() {
            return;
        }
        let mut client = client.borrow_mut();
        match client.on_frame(timestamp) {
            Ok(GamePhase::Running) => next.schedule(),
            Ok(_) => client.game.pause(),
            Err(e) => {
                console_log!("Render error: {}", e);
                next.schedule();
            }
        }
    }) as Box<dyn FnMut(f64)>));
}

async fn init(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<(), JsValue> {
    let config = parse_config(config_json)?;
    let seed = js_sys::Date::now() as u64;
    let game = LocalGame::new(config, seed).map_err(|e| JsValue::from_str(&e))?;
    let (width, height) = (game.config().arena_width, game.config().arena_height);
    let renderer = Renderer::new(canvas, width, height)
        .await
        .map_err(|e| JsValue::from_str(&e))?;

    // A second init replaces the first rather than running two loops
    shutdown();

    let client = Rc::new(RefCell::new(Client {
        renderer,
        game,
        hud: HudState::new(),
    }));
    let frames = FrameLoop::new();
    install_frame_callback(&client, &frames);

    let key_down = key_listener(&client, &frames, handle_key_down);
    let key_up = key_listener(&client, &frames, handle_key_up);
    let win = window()?;
    win.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())?;
    win.add_event_listener_with_callback("keyup", key_up.as_ref().unchecked_ref())?;

    // Draw the idle screen once
    frames.schedule();

    RUNTIME.with(|runtime| {
        *runtime.borrow_mut() = Some(Runtime {
            client,
            frames,
            key_down,
            key_up,
        });
    });

    console_log!("Client initialized (seed {})", seed);
    Ok(())
}

fn with_runtime<T>(f: impl FnOnce(&Runtime) -> T) -> Result<T, JsValue> {
    RUNTIME.with(|runtime| {
        let runtime = runtime.borrow();
        let runtime = runtime
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Client not initialized"))?;
        Ok(f(runtime))
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, config_json: Option<String>) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        match init(canvas, config_json).await {
            Ok(()) => Ok(JsValue::UNDEFINED),
            Err(e) => {
                console_log!("Failed to initialize client: {:?}", e);
                Err(e)
            }
        }
    })
}

/// Feed a `KeyboardEvent.code` press from the page. Returns whether it was handled.
#[wasm_bindgen]
pub fn key_down(code: &str) -> Result<bool, JsValue> {
    with_runtime(|rt| submit_input(&rt.client, &rt.frames, handle_key_down(code)))
}

#[wasm_bindgen]
pub fn key_up(code: &str) -> Result<bool, JsValue> {
    with_runtime(|rt| submit_input(&rt.client, &rt.frames, handle_key_up(code)))
}

#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsValue> {
    let snapshot = with_runtime(|rt| rt.client.borrow().game.snapshot())?;
    serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn score() -> Result<u32, JsValue> {
    with_runtime(|rt| rt.client.borrow().game.score().current)
}

#[wasm_bindgen]
pub fn high_score() -> Result<u32, JsValue> {
    with_runtime(|rt| rt.client.borrow().game.score().high)
}

#[wasm_bindgen]
pub fn phase() -> Result<String, JsValue> {
    with_runtime(|rt| phase_name(rt.client.borrow().game.phase()).to_string())
}

/// Cancel the pending frame and detach key listeners. Safe to call more than once.
#[wasm_bindgen]
pub fn shutdown() {
    let runtime = RUNTIME.with(|runtime| runtime.borrow_mut().take());
    if let Some(runtime) = runtime {
        runtime.stop();
        console_log!("Client shut down");
    }
}
