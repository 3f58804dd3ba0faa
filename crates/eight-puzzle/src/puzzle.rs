//! Board representation and move generation for the 8-puzzle.
//!
//! A [`Board`] is an immutable 3x3 arrangement of the tiles `1`-`8` and the
//! blank `0`. Every constructor validates the label set, so a `Board` value
//! always holds each label exactly once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Side length of the grid
pub const SIZE: usize = 3;

/// Number of cells on the grid
pub const CELLS: usize = SIZE * SIZE;

/// Label of the blank cell
pub const BLANK: u8 = 0;

/// Row/column position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn from_index(index: usize) -> Self {
        Self {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// L1 distance between two positions
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Neighbouring position in the direction of `mv`, if it lies on the grid
    pub fn step(self, mv: Move) -> Option<Position> {
        let (dr, dc) = mv.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < SIZE && col < SIZE).then_some(Position { row, col })
    }
}

/// Direction the blank travels in a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
}

impl Move {
    /// Generation order. Successors are always produced in this order, which
    /// fixes how equal-`f` nodes are tie-broken during search.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// Single-letter label used in output records
    pub fn label(self) -> &'static str {
        match self {
            Move::Left => "L",
            Move::Right => "R",
            Move::Up => "U",
            Move::Down => "D",
        }
    }

    /// The move that undoes this one
    pub fn inverse(self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    /// (row, column) offset of the blank
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(Move::Left),
            "R" => Ok(Move::Right),
            "U" => Ok(Move::Up),
            "D" => Ok(Move::Down),
            other => Err(Error::malformed(format!("unknown move label '{other}'"))),
        }
    }
}

/// One arrangement of the eight tiles and the blank
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Build a board from row-major cells, checking that every label
    /// `0..CELLS` appears exactly once.
    pub fn new(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &tile in &cells {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or_else(|| Error::malformed(format!("tile label {tile} is out of range")))?;
            if *slot {
                return Err(Error::malformed(format!("tile label {tile} appears more than once")));
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    /// Build a board from rows of textual labels
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(Error::malformed(format!(
                "expected {SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [BLANK; CELLS];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(Error::malformed(format!(
                    "row {} has {} labels, expected {SIZE}",
                    r + 1,
                    row.len()
                )));
            }
            for (c, label) in row.iter().enumerate() {
                cells[r * SIZE + c] = parse_label(label.as_ref())?;
            }
        }

        Self::new(cells)
    }

    /// The conventional target `1 2 3 / 4 5 6 / 7 8 0`
    pub fn standard_goal() -> Self {
        let mut cells = [BLANK; CELLS];
        for (i, cell) in cells.iter_mut().take(CELLS - 1).enumerate() {
            *cell = (i + 1) as u8;
        }
        Self { cells }
    }

    #[cfg(test)]
    pub(crate) fn from_cells_unchecked(cells: [u8; CELLS]) -> Self {
        Self { cells }
    }

    /// Label at a position
    pub fn tile(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Iterate over `(position, label)` in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &tile)| (Position::from_index(i), tile))
    }

    /// Labels of one row, left to right
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * SIZE..(row + 1) * SIZE]
    }

    /// Find the blank. Fails if the board does not hold exactly one.
    pub fn locate_blank(&self) -> Result<Position> {
        let mut blanks = self
            .tiles()
            .filter(|&(_, tile)| tile == BLANK)
            .map(|(pos, _)| pos);

        match (blanks.next(), blanks.next()) {
            (Some(pos), None) => Ok(pos),
            (None, _) => Err(Error::malformed("board has no blank")),
            (Some(_), Some(_)) => Err(Error::malformed("board has more than one blank")),
        }
    }

    /// Legal successors in `L, R, U, D` order
    pub fn generate_moves(&self) -> Result<Successors> {
        let blank = self.locate_blank()?;
        Ok(Successors {
            board: *self,
            blank,
            next: 0,
        })
    }

    /// Slide the blank in direction `mv`. Returns `Ok(None)` when the blank
    /// is already on that edge of the grid.
    pub fn apply(&self, mv: Move) -> Result<Option<Board>> {
        let blank = self.locate_blank()?;
        Ok(self.slide(blank, mv))
    }

    fn slide(&self, blank: Position, mv: Move) -> Option<Board> {
        let target = blank.step(mv)?;
        let mut cells = self.cells;
        cells.swap(blank.index(), target.index());
        Some(Board { cells })
    }

    /// Whether the number of inversions among non-blank tiles is even.
    ///
    /// On an odd-width grid a board can only reach boards of the same parity.
    pub fn has_even_parity(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&t| t != BLANK).collect();
        let inversions: usize = tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum();
        inversions % 2 == 0
    }
}

fn parse_label(label: &str) -> Result<u8> {
    label
        .parse::<u8>()
        .ok()
        .filter(|&tile| (tile as usize) < CELLS)
        .ok_or_else(|| Error::malformed(format!("invalid tile label '{label}'")))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE {
            if r > 0 {
                writeln!(f)?;
            }
            let row = self.row(r);
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.chunks(SIZE)).finish()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine whitespace-separated labels in row-major order
    fn from_str(s: &str) -> Result<Self> {
        let labels: Vec<&str> = s.split_whitespace().collect();
        if labels.len() != CELLS {
            return Err(Error::malformed(format!(
                "expected {CELLS} labels, got {}",
                labels.len()
            )));
        }
        let rows: Vec<Vec<&str>> = labels.chunks(SIZE).map(<[&str]>::to_vec).collect();
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.cells.chunks(SIZE).map(<[u8]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        if rows.len() != SIZE || rows.iter().any(|row| row.len() != SIZE) {
            return Err(Error::malformed(format!("board must be {SIZE}x{SIZE}")));
        }
        let mut cells = [BLANK; CELLS];
        for (cell, tile) in cells.iter_mut().zip(rows.into_iter().flatten()) {
            *cell = tile;
        }
        Board::new(cells)
    }
}

/// Lazy iterator over the boards one move away from a parent board
#[derive(Debug, Clone)]
pub struct Successors {
    board: Board,
    blank: Position,
    next: usize,
}

impl Iterator for Successors {
    type Item = (Board, Move);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&mv) = Move::ALL.get(self.next) {
            self.next += 1;
            if let Some(child) = self.board.slide(self.blank, mv) {
                return Some((child, mv));
            }
        }
        None
    }
}
