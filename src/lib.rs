//! Canvas Quiz core crate.
//!
//! A single-player multiple-choice quiz drawn on a 2D canvas. The question
//! flow (bank, session, views, draw commands) is plain Rust and runs natively;
//! `host` binds it to the page. Call `start_quiz()` (or
//! `start_quiz_with_config(json)`) from JS once the mount element exists.

use wasm_bindgen::prelude::*;

pub mod bank;
pub mod config;
pub mod error;
mod host;
mod logging;
pub mod quiz;
pub mod render;
pub mod session;
pub mod text;
pub mod view;

pub use bank::{BUILTIN_QUESTIONS, OPTION_COUNT, QuestionBank, QuestionRecord};
pub use config::{Labels, QuizConfig};
pub use error::QuizError;
pub use quiz::{Effect, Quiz, QuizEvent, TimerToken};
pub use session::QuestionSession;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_quiz() -> Result<(), JsValue> {
    host::mount(QuizConfig::default())?;
    Ok(())
}

/// Same as `start_quiz` with a JSON config object; omitted fields keep their
/// defaults.
#[wasm_bindgen]
pub fn start_quiz_with_config(json: &str) -> Result<(), JsValue> {
    let config = QuizConfig::from_json(json)?;
    host::mount(config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn is_mounted() -> bool {
    host::is_mounted()
}
