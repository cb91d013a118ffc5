mod board;
mod game_state;
mod opponent;

pub use board::{Board, BoardError, Evaluation, Marker, MarkerError, Status, BOARD_SIZE, LINES};
pub use game_state::{play, GameState, DRAW, YOUR_TURN};
pub use opponent::{choose_cell, select_move, CENTER, CORNERS};
