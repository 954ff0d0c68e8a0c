use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// What the move generator and solver need from a board.
///
/// Implementations must be deep-copied by `clone`: the solver hands each
/// search branch its own snapshot and mutates it freely.
pub trait Board: Clone {
    /// Whether `stone` may play at `point` under the board's rules.
    fn is_legal(&self, point: Point, stone: Stone) -> bool;

    /// Candidate cells for `stone`, legal or not.
    fn empty_positions(&self, stone: Stone) -> Vec<Point>;

    /// The winner if the position is terminal.
    fn winner(&self) -> Option<Stone>;

    /// Places `stone` at `point` and hands the turn to the opponent.
    /// The caller guarantees legality.
    fn apply_move(&mut self, point: Point, stone: Stone);

    fn to_play(&self) -> Stone;

    fn set_to_play(&mut self, stone: Stone);
}

/// NoGo board: a padded grid where captures and suicide are both illegal,
/// and a player with no legal move loses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoBoard {
    size: usize,
    /// Row stride; one border column is shared between adjacent rows.
    ns: usize,
    grid: Vec<Color>,
    to_play: Stone,
    passes_black: u32,
    passes_white: u32,
}

impl GoBoard {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        let ns = size + 1;
        // Rows 0 and size+1 plus column 0 of each row are border cells.
        let len = ns * (size + 2) + 1;
        let mut grid = vec![Color::Border; len];
        for row in 1..=size {
            for col in 1..=size {
                grid[row * ns + col] = Color::Empty;
            }
        }
        Ok(Self {
            size,
            ns,
            grid,
            to_play: Stone::Black,
            passes_black: 0,
            passes_white: 0,
        })
    }

    /// Builds a board from a diagram: one line per row, highest row first,
    /// `X` black, `O` white, `.` empty. Whitespace inside lines is ignored.
    pub fn from_diagram(diagram: &str, to_play: Stone) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        let size = rows.len();
        let mut board = GoBoard::new(size)?;
        for (i, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::InvalidSize(cells.len()));
            }
            let row = size - i;
            for (j, ch) in cells.iter().enumerate() {
                let color = match ch {
                    'X' | 'x' => Color::Black,
                    'O' | 'o' => Color::White,
                    '.' => Color::Empty,
                    other => return Err(BoardError::InvalidDiagram(*other)),
                };
                let p = board.coord_to_point(Coord::new(row, j + 1))?;
                board.grid[p.index()] = color;
            }
        }
        board.to_play = to_play;
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get_color(&self, point: Point) -> Color {
        self.grid.get(point.index()).copied().unwrap_or(Color::Border)
    }

    pub fn passes(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.passes_black,
            Stone::White => self.passes_white,
        }
    }

    pub fn point_to_coord(&self, point: Point) -> Coord {
        let i = point.index();
        Coord::new(i / self.ns, i % self.ns)
    }

    pub fn coord_to_point(&self, coord: Coord) -> Result<Point, BoardError> {
        let on_board = |v: usize| (1..=self.size).contains(&v);
        if !on_board(coord.row) || !on_board(coord.col) {
            return Err(BoardError::OffBoard);
        }
        Ok(Point::new((coord.row * self.ns + coord.col) as u16))
    }

    /// Checks `stone` at `point` against the NoGo rules, reporting which one
    /// fails.
    pub fn check_move(&self, point: Point, stone: Stone) -> Result<(), BoardError> {
        match self.grid.get(point.index()) {
            Some(Color::Empty) => {}
            Some(Color::Black | Color::White) => return Err(BoardError::Occupied),
            _ => return Err(BoardError::OffBoard),
        }

        let mut after = self.grid.clone();
        after[point.index()] = stone.color();

        let enemy = stone.opponent().color();
        for nb in self.neighbors(point.index()) {
            if after[nb] == enemy && !has_liberty(&after, nb, self.ns) {
                return Err(BoardError::Capture);
            }
        }
        if !has_liberty(&after, point.index(), self.ns) {
            return Err(BoardError::Suicide);
        }
        Ok(())
    }

    /// Checked move used by the protocol layer.
    pub fn play(&mut self, mv: Move, stone: Stone) -> Result<(), BoardError> {
        match mv {
            Move::Pass => {
                match stone {
                    Stone::Black => self.passes_black += 1,
                    Stone::White => self.passes_white += 1,
                }
                self.to_play = stone.opponent();
            }
            Move::Play(p) => {
                self.check_move(p, stone)?;
                self.apply_move(p, stone);
            }
        }
        Ok(())
    }

    /// Iterates all on-board points in row-major order starting at row 1.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (1..=self.size).flat_map(move |row| {
            (1..=self.size).map(move |col| Point::new((row * self.ns + col) as u16))
        })
    }

    fn neighbors(&self, i: usize) -> [usize; 4] {
        [i - 1, i + 1, i - self.ns, i + self.ns]
    }
}

/// Whether the block containing `start` touches an empty cell. Visited stones
/// are marked `FloodFill` on a scratch copy of the grid.
fn has_liberty(grid: &[Color], start: usize, ns: usize) -> bool {
    let color = grid[start];
    let mut marks = grid.to_vec();
    let mut stack = vec![start];
    marks[start] = Color::FloodFill;
    while let Some(i) = stack.pop() {
        for nb in [i - 1, i + 1, i - ns, i + ns] {
            match marks[nb] {
                Color::Empty => return true,
                c if c == color => {
                    marks[nb] = Color::FloodFill;
                    stack.push(nb);
                }
                _ => {}
            }
        }
    }
    false
}

impl Board for GoBoard {
    fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.check_move(point, stone).is_ok()
    }

    fn empty_positions(&self, _stone: Stone) -> Vec<Point> {
        self.points()
            .filter(|p| self.grid[p.index()] == Color::Empty)
            .collect()
    }

    fn winner(&self) -> Option<Stone> {
        let mover = self.to_play;
        let can_move = self
            .empty_positions(mover)
            .into_iter()
            .any(|p| self.is_legal(p, mover));
        if can_move { None } else { Some(mover.opponent()) }
    }

    fn apply_move(&mut self, point: Point, stone: Stone) {
        self.grid[point.index()] = stone.color();
        self.to_play = stone.opponent();
    }

    fn to_play(&self) -> Stone {
        self.to_play
    }

    fn set_to_play(&mut self, stone: Stone) {
        self.to_play = stone;
    }
}

impl fmt::Display for GoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.size {
                let ch = match self.grid[row * self.ns + col] {
                    Color::Black => 'X',
                    Color::White => 'O',
                    _ => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 1..=self.size {
            // Same letters as the move notation.
            let letter = format_move(Some(Coord::new(1, col)), self.size)
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or('?');
            write!(f, " {letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
