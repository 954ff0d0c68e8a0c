use crate::error::CodecError;

/// Contents of a board cell.
///
/// `Border` and `FloodFill` are grid sentinels owned by the board: `Border`
/// pads the playing area and `FloodFill` marks cells visited while counting
/// liberties. Nothing outside the board produces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Black,
    White,
    Border,
    FloodFill,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Empty,
        Color::Black,
        Color::White,
        Color::Border,
        Color::FloodFill,
    ];

    pub fn from_symbol(sym: &str) -> Result<Color, CodecError> {
        match sym {
            "b" => Ok(Color::Black),
            "w" => Ok(Color::White),
            "e" => Ok(Color::Empty),
            "BORDER" => Ok(Color::Border),
            "FLOODFILL" => Ok(Color::FloodFill),
            _ => Err(CodecError::InvalidColorSymbol(sym.to_string())),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Color::Black => "b",
            Color::White => "w",
            Color::Empty => "e",
            Color::Border => "BORDER",
            Color::FloodFill => "FLOODFILL",
        }
    }

    /// Integer encoding used by board dumps: 0 empty, 1 black, 2 white,
    /// 3 border, 4 flood-fill marker.
    pub fn value(self) -> u8 {
        match self {
            Color::Empty => 0,
            Color::Black => 1,
            Color::White => 2,
            Color::Border => 3,
            Color::FloodFill => 4,
        }
    }

    /// The player owning this cell, if it holds a stone.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Color::Black => Some(Stone::Black),
            Color::White => Some(Stone::White),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Color::Empty),
            1 => Ok(Color::Black),
            2 => Ok(Color::White),
            3 => Ok(Color::Border),
            4 => Ok(Color::FloodFill),
            v => Err(CodecError::InvalidColorValue(v)),
        }
    }
}

/// A player. `opponent` is only meaningful for stones, so the board's
/// sentinels never reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Stone::Black => Color::Black,
            Stone::White => Color::White,
        }
    }

    pub fn symbol(self) -> &'static str {
        self.color().symbol()
    }

    /// Parses a player from protocol text (`b`, `w`, `black`, `white`).
    pub fn from_symbol(sym: &str) -> Result<Stone, CodecError> {
        match sym.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Stone::Black),
            "w" | "white" => Ok(Stone::White),
            _ => Err(CodecError::InvalidColorSymbol(sym.to_string())),
        }
    }
}

/// Opaque handle of a board cell. Only the board that issued a point knows
/// how it maps to a row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(u16);

impl Point {
    /// Mints a handle. Meant for [`Board`](crate::board::Board) implementations.
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A decoded cell position, 1-based in both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// No stone placed (protocol text `pass`).
    Pass,
    Play(Point),
}

impl Move {
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Pass => None,
            Move::Play(p) => Some(p),
        }
    }
}

impl From<Option<Point>> for Move {
    fn from(p: Option<Point>) -> Self {
        p.map_or(Move::Pass, Move::Play)
    }
}

/// Largest board the coordinate notation can express.
pub const MAX_BOARD_SIZE: usize = 25;

// Column letters skip `i`.
const COLUMN_LETTERS: &[u8; 25] = b"abcdefghjklmnopqrstuvwxyz";

/// Renders a coordinate as protocol text, `None` meaning pass.
pub fn format_move(coord: Option<Coord>, board_size: usize) -> Result<String, CodecError> {
    let Some(Coord { row, col }) = coord else {
        return Ok("pass".to_string());
    };
    let in_range = |v: usize| (1..=board_size.min(MAX_BOARD_SIZE)).contains(&v);
    if !in_range(row) || !in_range(col) {
        return Err(CodecError::CoordinateOutOfRange {
            row,
            col,
            size: board_size,
        });
    }
    let letter = COLUMN_LETTERS[col - 1] as char;
    Ok(format!("{letter}{row}"))
}

/// Parses protocol text such as `c4` into a coordinate on a board of the
/// given size. Case-insensitive. `pass` is rejected as a reserved word.
pub fn parse_move(text: &str, board_size: usize) -> Result<Coord, CodecError> {
    let invalid = || CodecError::InvalidCoordinate(text.to_string());
    if !(1..=MAX_BOARD_SIZE).contains(&board_size) {
        return Err(invalid());
    }

    let s = text.to_ascii_lowercase();
    if s == "pass" {
        return Err(CodecError::ReservedWord(text.to_string()));
    }

    let mut chars = s.chars();
    let col_c = chars.next().ok_or_else(invalid)?;
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b as char == col_c)
        .map(|i| i + 1)
        .ok_or_else(invalid)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row < 1 || row > board_size || col > board_size {
        return Err(invalid());
    }
    Ok(Coord { row, col })
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
