//! Go Text Protocol session.
//!
//! [`GtpSession`] owns the live board and an engine, turns one command line
//! into one response, and leaves I/O to the caller.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, GoBoard};
use crate::error::{BoardError, CodecError};
use crate::movegen::legal_moves;
use crate::solver::{MoveOrder, Solver};
use crate::time_control::{SearchLimits, TimeControl};
use crate::types::*;
use crate::Engine;

/// Commands answered by [`GtpSession`].
pub const COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "gogui-rules_game_id",
    "known_command",
    "komi",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "solve",
    "timelimit",
    "version",
];

const MAX_TIME_LIMIT_SECS: u64 = 100;

#[derive(Debug, Error)]
pub enum GtpError {
    #[error("unknown command")]
    UnknownCommand,

    #[error("syntax error, usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("illegal move: \"{mv}\" ({reason})")]
    IllegalMove { mv: String, reason: BoardError },
}

/// One formatted reply plus whether the session is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub quit: bool,
}

/// Renders a move for `board` in protocol notation.
pub fn format_point(board: &GoBoard, mv: Move) -> Result<String, CodecError> {
    let coord = mv.point().map(|p| board.point_to_coord(p));
    format_move(coord, board.size())
}

/// Parses protocol notation into a move on `board`; `pass` is accepted here.
pub fn parse_point(board: &GoBoard, text: &str) -> Result<Move, GtpError> {
    if text.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }
    let coord = parse_move(text, board.size())?;
    Ok(Move::Play(board.coord_to_point(coord)?))
}

pub struct GtpSession {
    board: GoBoard,
    engine: Box<dyn Engine>,
    time_limit: Option<Duration>,
    solver_order: MoveOrder,
}

impl GtpSession {
    pub fn new(board: GoBoard, engine: Box<dyn Engine>) -> Self {
        Self {
            board,
            engine,
            time_limit: None,
            solver_order: MoveOrder::Natural,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_solver_order(mut self, order: MoveOrder) -> Self {
        self.solver_order = order;
        self
    }

    pub fn board(&self) -> &GoBoard {
        &self.board
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Handles one input line. Blank lines and `#` comments yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.split('#').next().unwrap_or("").trim();
        let mut parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return None;
        }

        let id = match parts[0].parse::<u32>() {
            Ok(id) => {
                parts.remove(0);
                Some(id)
            }
            Err(_) => None,
        };
        let id_text = id.map(|i| i.to_string()).unwrap_or_default();
        let Some((&cmd, args)) = parts.split_first() else {
            return Some(Response {
                text: format!("?{id_text} missing command\n\n"),
                quit: false,
            });
        };

        debug!(cmd, ?args, "gtp command");
        let quit = cmd == "quit";
        let text = match self.dispatch(cmd, args) {
            Ok(body) if body.is_empty() => format!("={id_text}\n\n"),
            Ok(body) => format!("={id_text} {body}\n\n"),
            Err(e) => {
                debug!(cmd, error = %e, "gtp command failed");
                format!("?{id_text} {e}\n\n")
            }
        };
        Some(Response { text, quit })
    }

    fn dispatch(&mut self, cmd: &str, args: &[&str]) -> Result<String, GtpError> {
        match cmd {
            "protocol_version" => Ok("2".to_string()),
            "name" => Ok(self.engine.name().to_string()),
            "version" => Ok(self.engine.version().to_string()),
            "known_command" => {
                let name = args.first().ok_or(GtpError::Usage("known_command <name>"))?;
                Ok(COMMANDS.contains(name).to_string())
            }
            "list_commands" => Ok(COMMANDS.join("\n")),
            "quit" => Ok(String::new()),
            "gogui-rules_game_id" => Ok("NoGo".to_string()),
            "boardsize" => {
                let size = args
                    .first()
                    .and_then(|s| s.parse::<usize>().ok())
                    .ok_or(GtpError::Usage("boardsize <size>"))?;
                self.board = GoBoard::new(size)?;
                self.engine.new_game();
                Ok(String::new())
            }
            "clear_board" => {
                self.board = GoBoard::new(self.board.size())?;
                self.engine.new_game();
                Ok(String::new())
            }
            "komi" => {
                let _komi = args
                    .first()
                    .and_then(|s| s.parse::<f64>().ok())
                    .ok_or(GtpError::Usage("komi <float>"))?;
                Ok(String::new())
            }
            "showboard" => Ok(format!("\n{}", self.board)),
            "play" => self.cmd_play(args),
            "genmove" => self.cmd_genmove(args),
            "legal_moves" => self.cmd_legal_moves(args),
            "solve" => self.cmd_solve(),
            "timelimit" => {
                let secs = args
                    .first()
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|s| (1..=MAX_TIME_LIMIT_SECS).contains(s))
                    .ok_or(GtpError::Usage("timelimit <seconds 1..=100>"))?;
                self.time_limit = Some(Duration::from_secs(secs));
                Ok(String::new())
            }
            _ => Err(GtpError::UnknownCommand),
        }
    }

    fn cmd_play(&mut self, args: &[&str]) -> Result<String, GtpError> {
        let [color, text] = args else {
            return Err(GtpError::Usage("play <color> <move>"));
        };
        let stone = Stone::from_symbol(color)?;
        let mv = parse_point(&self.board, text)?;
        self.board
            .play(mv, stone)
            .map_err(|reason| GtpError::IllegalMove {
                mv: format!("{} {}", stone.symbol(), text.to_ascii_lowercase()),
                reason,
            })?;
        Ok(String::new())
    }

    fn cmd_genmove(&mut self, args: &[&str]) -> Result<String, GtpError> {
        let color = args.first().ok_or(GtpError::Usage("genmove <color>"))?;
        let stone = Stone::from_symbol(color)?;

        let limits = SearchLimits::from_option(self.time_limit);
        let result = self.engine.search(&self.board, stone, &limits);
        if result.best_move == Move::Pass {
            info!(color = stone.symbol(), "no legal move, resigning");
            return Ok("resign".to_string());
        }

        let text = format_point(&self.board, result.best_move)?;
        self.board.play(result.best_move, stone)?;
        info!(
            color = stone.symbol(),
            mv = %text,
            proven = ?result.winner.map(Stone::symbol),
            nodes = result.nodes,
            "genmove"
        );
        Ok(text)
    }

    fn cmd_legal_moves(&self, args: &[&str]) -> Result<String, GtpError> {
        let color = args.first().ok_or(GtpError::Usage("legal_moves <color>"))?;
        let stone = Stone::from_symbol(color)?;
        let mut moves = legal_moves(&self.board, stone)
            .into_iter()
            .map(|p| format_point(&self.board, Move::Play(p)))
            .collect::<Result<Vec<_>, _>>()?;
        moves.sort();
        Ok(moves.join(" "))
    }

    fn cmd_solve(&self) -> Result<String, GtpError> {
        let tc = TimeControl::new(self.time_limit);
        tc.start();
        let mut solver = Solver::new(self.solver_order);
        let Some(outcome) = solver.solve_within(&self.board, &tc) else {
            return Ok("unknown".to_string());
        };
        if outcome.winner == self.board.to_play() && outcome.first_move != Move::Pass {
            let mv = format_point(&self.board, outcome.first_move)?;
            Ok(format!("{} {}", outcome.winner.symbol(), mv))
        } else {
            Ok(outcome.winner.symbol().to_string())
        }
    }
}

#[cfg(test)]
#[path = "gtp_tests.rs"]
mod gtp_tests;
