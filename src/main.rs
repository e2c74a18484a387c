//! Canvas Pong entry point
//!
//! Native builds play in the terminal; WASM builds attach to the page canvas.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    canvas_pong::platform::web::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (terminal) starting...");

    let settings = canvas_pong::Settings::load();
    if let Err(e) = canvas_pong::platform::terminal::run(settings) {
        eprintln!("canvas-pong: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
