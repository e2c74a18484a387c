//! Browser host (WASM only)
//!
//! Binds the game to a `<canvas id="pongCanvas">`: `mousemove` drives the
//! user paddle and `setInterval` runs one tick and one redraw per callback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::log_events;
use crate::renderer::{CanvasSurface, RenderStyle, render};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// Element id of the game canvas
pub const CANVAS_ID: &str = "pongCanvas";

/// Game instance holding all state
struct Game {
    state: GameState,
    surface: CanvasSurface,
    style: RenderStyle,
}

impl Game {
    /// One scheduler callback: update, then redraw
    fn frame(&mut self) {
        let events = tick(&mut self.state);
        log_events(&events);
        render(&self.state, &mut self.surface, &self.style);
    }
}

pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("Canvas Pong starting...");

    let settings = Settings::load();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("no canvas")?
        .dyn_into()?;

    canvas.set_width(settings.surface_width);
    canvas.set_height(settings.surface_height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    let game = Rc::new(RefCell::new(Game {
        state: GameState::new(settings.surface()),
        surface: CanvasSurface::new(ctx, &settings.score_font),
        style: settings.render_style(),
    }));
    log::info!(
        "Surface {}x{} @ {} fps",
        settings.surface_width,
        settings.surface_height,
        settings.frames_per_second
    );

    setup_pointer_input(&canvas, game.clone())?;
    start_interval(&window, game, settings.tick_interval_ms())?;

    log::info!("Canvas Pong running!");
    Ok(())
}

/// Pointer y relative to the canvas top drives the user paddle
fn setup_pointer_input(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = canvas_clone.get_bounding_client_rect();
        let y = event.client_y() as f32 - rect.top() as f32;
        game.borrow_mut().state.apply_pointer_input(y);
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Fixed-rate loop, started once and never cancelled
fn start_interval(
    window: &web_sys::Window,
    game: Rc<RefCell<Game>>,
    interval_ms: f64,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        game.borrow_mut().frame();
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms.round() as i32,
    )?;
    closure.forget();
    Ok(())
}
