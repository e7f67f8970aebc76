// Library API shared by the CLI binary and the WASM build
pub mod clue_list;
pub mod cross_index;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod log;
pub mod numbering;
pub mod placement;
pub mod puzzle;
pub mod puzzle_char;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
