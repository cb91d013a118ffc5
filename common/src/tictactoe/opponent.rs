use crate::tictactoe::board::{Board, Marker};

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

// Greedy one-ply policy: win, block, center, corner, then the lowest empty cell.
// It does not look for forks, so a careful player can beat it.
pub fn select_move(board: Board) -> Board {
    match choose_cell(&board) {
        Some(index) => {
            let mut next = board;
            next.set(index, Marker::Opponent);
            next
        }
        // No empty cell to take
        None => board,
    }
}

pub fn choose_cell(board: &Board) -> Option<usize> {
    winning_cell(board, Marker::Opponent)
        .or_else(|| winning_cell(board, Marker::Player))
        .or_else(|| board.get(CENTER).is_empty().then_some(CENTER))
        .or_else(|| CORNERS.into_iter().find(|&i| board.get(i).is_empty()))
        .or_else(|| board.empty_cells().next())
}

// First empty cell, in ascending order, that would complete a line for `marker`
fn winning_cell(board: &Board, marker: Marker) -> Option<usize> {
    let mut scratch = *board;
    board.empty_cells().find(|&index| {
        scratch.set(index, marker);
        let wins = scratch.winner() == Some(marker);
        scratch.set(index, Marker::Empty);
        wins
    })
}
