use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const BOARD_SIZE: usize = 9;

// Rows, then columns, then the two diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Error, Debug, PartialEq)]
pub enum MarkerError {
    #[error("Unknown marker {0:?}, expected \"\", \"X\" or \"O\"")]
    Unknown(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Board has {0} cells, expected 9")]
    WrongLength(usize),
    #[error("Invalid marker at index {index}: {source}")]
    InvalidMarker { index: usize, source: MarkerError },
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Empty,
    // The human player, "X" on the wire
    Player,
    // The computer, "O" on the wire
    Opponent,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Empty => "",
            Marker::Player => "X",
            Marker::Opponent => "O",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Marker::Empty)
    }
}

impl TryFrom<&str> for Marker {
    type Error = MarkerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "" => Ok(Marker::Empty),
            "X" => Ok(Marker::Player),
            "O" => Ok(Marker::Opponent),
            other => Err(MarkerError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Marker),
    Draw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub winner: Option<Marker>,
    // Whether no cell is empty, regardless of the winner
    pub full: bool,
}

impl Evaluation {
    pub fn status(&self) -> Status {
        match (self.winner, self.full) {
            (Some(marker), _) => Status::Won(marker),
            (None, true) => Status::Draw,
            (None, false) => Status::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.status(), Status::InProgress)
    }
}

// Cells are indexed 0-8 in row-major order
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Board([Marker; BOARD_SIZE]);

impl Board {
    pub fn new(cells: [Marker; BOARD_SIZE]) -> Self {
        Board(cells)
    }

    pub fn empty() -> Self {
        Board::default()
    }

    // Ensure that the wire board has exactly nine cells and every cell is "", "X" or "O"
    pub fn from_wire<S: AsRef<str>>(cells: &[S]) -> Result<Self, BoardError> {
        if cells.len() != BOARD_SIZE {
            return Err(BoardError::WrongLength(cells.len()));
        }
        let mut board = Board::empty();
        for (index, cell) in cells.iter().enumerate() {
            board.0[index] = Marker::try_from(cell.as_ref())
                .map_err(|source| BoardError::InvalidMarker { index, source })?;
        }
        Ok(board)
    }

    pub fn to_wire(&self) -> [String; BOARD_SIZE] {
        self.0.map(|m| m.as_str().to_string())
    }

    pub fn cells(&self) -> &[Marker; BOARD_SIZE] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Marker {
        self.0[index]
    }

    pub fn set(&mut self, index: usize, marker: Marker) {
        self.0[index] = marker;
    }

    // Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|m| !m.is_empty())
    }

    pub fn winner(&self) -> Option<Marker> {
        LINES.iter().find_map(|&[a, b, c]| {
            let m = self.0[a];
            (!m.is_empty() && m == self.0[b] && m == self.0[c]).then_some(m)
        })
    }

    pub fn evaluate(&self) -> Evaluation {
        Evaluation {
            winner: self.winner(),
            full: self.is_full(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(3) {
            let row: Vec<&str> = row
                .iter()
                .map(|m| if m.is_empty() { "." } else { m.as_str() })
                .collect();
            writeln!(f, "{}", row.join(""))?;
        }
        Ok(())
    }
}
