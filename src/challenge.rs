pub use gate::{check_answer, gate_of, Gate};
pub use models::{CompletedPuzzles, Puzzle, PuzzleId, PUZZLES};
pub use session::SessionState;

mod gate;
mod models;
mod session;
