pub mod calculator;
pub mod messages;
pub mod tictactoe;
pub mod todo;

pub use calculator::{calculate, CalcError, CalcRequest, Operation};
pub use tictactoe::{Board, GameState, Marker};
pub use todo::{Todo, TodoError, TodoList};
