use crate::tictactoe::board::{Board, BoardError, Evaluation, Status};
use crate::tictactoe::opponent::select_move;
use serde::{Deserialize, Serialize};

pub const YOUR_TURN: &str = "Your turn (X)";
pub const DRAW: &str = "It's a draw!";

// The JSON shape exchanged with the browser. Only `board` is read from requests,
// the other fields are always recomputed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Vec<String>,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub message: String,
}

impl GameState {
    pub fn new_game() -> Self {
        GameState::from_board(Board::empty(), Board::empty().evaluate())
    }

    fn from_board(board: Board, evaluation: Evaluation) -> Self {
        let (game_over, winner, message) = match evaluation.status() {
            Status::Won(marker) => (true, marker.to_string(), format!("{} wins!", marker)),
            Status::Draw => (true, String::new(), DRAW.to_string()),
            Status::InProgress => (false, String::new(), YOUR_TURN.to_string()),
        };
        GameState {
            board: board.to_wire().to_vec(),
            game_over,
            winner,
            message,
        }
    }

    pub fn board(&self) -> Result<Board, BoardError> {
        Board::from_wire(&self.board)
    }

    // Validate the submitted board, then run one turn of the game
    pub fn play(&self) -> Result<GameState, BoardError> {
        Ok(play(self.board()?))
    }
}

// Takes a board that already contains the player's move. A finished game is reported
// as-is, otherwise the opponent replies and the result is evaluated again.
pub fn play(board: Board) -> GameState {
    let evaluation = board.evaluate();
    if evaluation.is_terminal() {
        return GameState::from_board(board, evaluation);
    }
    let board = select_move(board);
    GameState::from_board(board, board.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::Marker;

    fn state(cells: [&str; 9]) -> GameState {
        GameState {
            board: cells.iter().map(|c| c.to_string()).collect(),
            game_over: false,
            winner: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new_game();
        assert_eq!(game.board, vec![""; 9]);
        assert!(!game.game_over);
        assert_eq!(game.winner, "");
        assert_eq!(game.message, YOUR_TURN);
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(GameState::new_game()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "board": ["", "", "", "", "", "", "", "", ""],
                "gameOver": false,
                "winner": "",
                "message": "Your turn (X)"
            })
        );
    }

    #[test]
    fn test_deserialize_board_only() {
        let game: GameState =
            serde_json::from_str(r#"{"board":["X","","","","","","","",""]}"#).unwrap();
        assert!(!game.game_over);
        assert_eq!(game.board().unwrap().get(0), Marker::Player);
    }

    #[test]
    fn test_player_move_gets_reply() {
        let next = state(["X", "", "", "", "", "", "", "", ""]).play().unwrap();
        assert_eq!(next.board, vec!["X", "", "", "", "O", "", "", "", ""]);
        assert!(!next.game_over);
        assert_eq!(next.winner, "");
        assert_eq!(next.message, YOUR_TURN);
    }

    #[test]
    fn test_player_win_is_not_answered() {
        let cells = ["X", "X", "X", "O", "O", "", "", "", ""];
        let next = state(cells).play().unwrap();
        assert_eq!(next.board, cells.to_vec());
        assert!(next.game_over);
        assert_eq!(next.winner, "X");
        assert_eq!(next.message, "X wins!");
    }

    #[test]
    fn test_draw_is_not_answered() {
        let cells = ["X", "O", "X", "X", "O", "O", "O", "X", "X"];
        let next = state(cells).play().unwrap();
        assert_eq!(next.board, cells.to_vec());
        assert!(next.game_over);
        assert_eq!(next.winner, "");
        assert_eq!(next.message, DRAW);
    }

    #[test]
    fn test_opponent_wins_on_reply() {
        let next = state(["X", "X", "", "O", "O", "", "X", "", ""]).play().unwrap();
        assert_eq!(next.board, vec!["X", "X", "", "O", "O", "O", "X", "", ""]);
        assert!(next.game_over);
        assert_eq!(next.winner, "O");
        assert_eq!(next.message, "O wins!");
    }

    #[test]
    fn test_reply_fills_board_to_draw() {
        let next = state(["X", "O", "X", "X", "O", "O", "", "X", "X"]).play().unwrap();
        assert_eq!(next.board, vec!["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert!(next.game_over);
        assert_eq!(next.message, DRAW);
    }

    #[test]
    fn test_stale_fields_are_recomputed() {
        let mut submitted = state(["X", "", "", "", "", "", "", "", ""]);
        submitted.game_over = true;
        submitted.winner = "O".to_string();
        submitted.message = "O wins!".to_string();
        let next = submitted.play().unwrap();
        assert!(!next.game_over);
        assert_eq!(next.winner, "");
    }

    #[test]
    fn test_malformed_board_rejected() {
        let short = GameState {
            board: vec!["X".to_string()],
            ..GameState::new_game()
        };
        assert_eq!(short.play(), Err(BoardError::WrongLength(1)));

        let bad = state(["X", "", "", "", "Z", "", "", "", ""]);
        assert!(matches!(
            bad.play(),
            Err(BoardError::InvalidMarker { index: 4, .. })
        ));
    }

    #[test]
    fn test_full_game_terminates() {
        // The player always takes the lowest empty cell
        let mut game = GameState::new_game();
        for _ in 0..5 {
            if game.game_over {
                break;
            }
            let mut board = game.board().unwrap();
            let index = board.empty_cells().next().unwrap();
            board.set(index, Marker::Player);
            let before = board;
            game = play(board);
            let after = game.board().unwrap();
            let changed = (0..9).filter(|&i| before.get(i) != after.get(i)).count();
            assert!(changed <= 1);
        }
        assert!(game.game_over);
    }
}
