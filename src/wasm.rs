use crate::clue_list::ClueList;
use crate::errors::LoadError;
use crate::generator::{GenerateError, Generator, GeneratorConfig};
use crate::log::init_logger;
use crate::puzzle::{Puzzle, DEFAULT_TITLE};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Longest a single browser call may search before giving up.
const WASM_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "L001", "G004")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GenerateError> for WasmError {
    fn from(e: GenerateError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<Box<LoadError>> for WasmError {
    fn from(e: Box<LoadError>) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

/// Errors reach JavaScript as plain objects with the `WasmError` fields, so callers can
/// branch on `code`.
impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        serde_wasm_bindgen::to_value(&e).unwrap_or_else(|ser_err| {
            js_sys::Error::new(&format!("Error {}: {} ({ser_err})", e.code, e.message)).into()
        })
    }
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: (clue_text: string, size: number, title?: string) → puzzle object
///
/// `clue_text` holds one `WORD hint` per line. The returned object has the same shape as the
/// CLI's JSON output (`title`, `numRows`, `numCols`, `answers`, `clues`).
#[wasm_bindgen]
pub fn generate_puzzle_wasm(clue_text: &str, size: usize, title: Option<String>) -> Result<JsValue, JsValue> {
    let clue_list = ClueList::parse_from_str(clue_text).map_err(WasmError::from)?;

    let config = GeneratorConfig { time_budget: Some(WASM_TIME_BUDGET) };
    let (solution, _) = Generator::new(&clue_list.clues, size, config)
        .and_then(|generator| generator.generate())
        .map_err(WasmError::from)?;

    let title = title.as_deref().unwrap_or(DEFAULT_TITLE);
    let puzzle = Puzzle::assemble(title, &clue_list.clues, &solution);

    serde_wasm_bindgen::to_value(&puzzle).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize puzzle".to_string(),
            details: "The generated puzzle could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
