//! Line-oriented text protocol over a game session.
//!
//! One command per line. Replies are one or more lines; a failed command
//! replies `error: <message>` and the loop keeps going.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{
    Board, Color, Move, MoveError, MoveParseError, Piece, PieceKind, PieceParseError,
    PlacementError, Square, SquareError,
};
use crate::game::Game;
use crate::session::SharedGame;

pub mod command;
pub mod options;

pub use command::{parse_command, Command};
pub use options::ProtocolOptions;

/// Error type for protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidSquare(SquareError),
    InvalidMove(MoveParseError),
    Rejected(MoveError),
    InvalidPiece(PieceParseError),
    InvalidPlacement(PlacementError),
    InvalidColor { name: String },
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    UnknownCommand { line: String },
    UnknownOption { name: String },
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidMove(e) => write!(f, "{e}"),
            CommandError::Rejected(e) => write!(f, "{e}"),
            CommandError::InvalidPiece(e) => write!(f, "{e}"),
            CommandError::InvalidPlacement(e) => write!(f, "{e}"),
            CommandError::InvalidColor { name } => {
                write!(f, "Invalid color '{name}', expected 'white' or 'black'")
            }
            CommandError::MissingArgument { command, argument } => {
                write!(f, "'{command}' is missing its {argument}")
            }
            CommandError::UnexpectedArgument { command, argument } => {
                write!(f, "'{command}' does not take the extra argument '{argument}'")
            }
            CommandError::UnknownCommand { line } => write!(f, "Unknown command '{line}'"),
            CommandError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            CommandError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::InvalidMove(e)
    }
}

impl From<MoveError> for CommandError {
    fn from(e: MoveError) -> Self {
        CommandError::Rejected(e)
    }
}

impl From<PieceParseError> for CommandError {
    fn from(e: PieceParseError) -> Self {
        CommandError::InvalidPiece(e)
    }
}

impl From<PlacementError> for CommandError {
    fn from(e: PlacementError) -> Self {
        CommandError::InvalidPlacement(e)
    }
}

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(Vec<String>),
    Quit,
}

/// Protocol state: the session it drives plus its options.
#[derive(Debug, Default)]
pub struct Protocol {
    session: SharedGame,
    options: ProtocolOptions,
}

impl Protocol {
    #[must_use]
    pub fn new(session: SharedGame) -> Self {
        Protocol {
            session,
            options: ProtocolOptions::default(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SharedGame {
        &self.session
    }

    /// Handle one input line. Blank lines produce an empty reply.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let Some(cmd) = parse_command(line) else {
            return Outcome::Reply(Vec::new());
        };
        if cmd == Command::Quit {
            return Outcome::Quit;
        }
        match self.execute(cmd) {
            Ok(lines) => Outcome::Reply(lines),
            Err(e) => {
                log::debug!("command failed: {e}");
                Outcome::Reply(vec![format!("error: {e}")])
            }
        }
    }

    /// Run a parsed command and return its reply lines.
    pub fn execute(&mut self, cmd: Command) -> Result<Vec<String>, CommandError> {
        match cmd {
            Command::Board => Ok(self.board_lines()),
            Command::Moves(args) => {
                reject_extra(&args, 1, "moves")?;
                let from = parse_square(&args, 0, "moves", "square")?;
                let moves = self.session.legal_moves_from(from);
                let mut line = format!("moves {from}:");
                for to in moves {
                    line.push(' ');
                    line.push_str(&to.to_string());
                }
                Ok(vec![line])
            }
            Command::Move(args) => self.play(&args),
            Command::MoveList => Ok(vec![self.session.moves().join(" ")]),
            Command::Reset => {
                self.session.reset();
                Ok(vec!["ok".to_string()])
            }
            Command::Check => Ok(vec![self.check_line()]),
            Command::Attacked(args) => {
                reject_extra(&args, 2, "attacked")?;
                let target = parse_square(&args, 0, "attacked", "square")?;
                let name = args.get(1).ok_or(CommandError::MissingArgument {
                    command: "attacked",
                    argument: "color",
                })?;
                let by = Color::from_name(name)
                    .ok_or_else(|| CommandError::InvalidColor { name: name.clone() })?;
                let attacked = self.session.with(|game| game.is_square_attacked(target, by));
                Ok(vec![format!("attacked {target} {attacked}")])
            }
            Command::Place(args) => {
                reject_extra(&args, 2, "place")?;
                let square = parse_square(&args, 0, "place", "square")?;
                let piece = match args.get(1).map(String::as_str) {
                    None => {
                        return Err(CommandError::MissingArgument {
                            command: "place",
                            argument: "piece",
                        })
                    }
                    Some("-") => None,
                    Some(letter) => Some(parse_piece(letter)?),
                };
                self.session.with(|game| game.place_piece(square, piece));
                Ok(vec!["ok".to_string()])
            }
            Command::TestCheck => {
                let e2: Square = "e2".parse()?;
                let queen = Piece::new(PieceKind::Queen, Color::Black);
                self.session.with(|game| game.place_piece(e2, Some(queen)));
                Ok(self.board_lines())
            }
            Command::Position(args) => {
                reject_extra(&args, 2, "position")?;
                let placement = args.first().ok_or(CommandError::MissingArgument {
                    command: "position",
                    argument: "placement",
                })?;
                let board = Board::try_from_placement(placement)?;
                let side = match args.get(1) {
                    None => Color::White,
                    Some(name) => Color::from_name(name)
                        .ok_or_else(|| CommandError::InvalidColor { name: name.clone() })?,
                };
                self.session
                    .with(|game| *game = Game::from_position(board, side));
                Ok(vec!["ok".to_string()])
            }
            Command::Placement => {
                let game = self.session.lock();
                Ok(vec![format!(
                    "placement {} {}",
                    game.board().to_placement(),
                    game.side_to_move().name()
                )])
            }
            Command::SetOption(args) => {
                self.options.apply_setoption(&args)?;
                Ok(vec!["ok".to_string()])
            }
            Command::Options => Ok(self.options.lines()),
            Command::Quit => Ok(Vec::new()),
            Command::Unknown(line) => Err(CommandError::UnknownCommand { line }),
        }
    }

    fn play(&mut self, args: &[String]) -> Result<Vec<String>, CommandError> {
        let mv: Move = match args {
            [_, _, extra, ..] => {
                return Err(CommandError::UnexpectedArgument {
                    command: "move",
                    argument: extra.clone(),
                })
            }
            [] => {
                return Err(CommandError::MissingArgument {
                    command: "move",
                    argument: "from square",
                })
            }
            [single] => single.parse()?,
            [from, to] => Move::new(from.parse()?, to.parse()?),
        };

        let (played, in_check) = self.session.with(|game| {
            let played = game.make_move(mv.from(), mv.to())?;
            Ok::<_, MoveError>((played, game.in_check(game.side_to_move())))
        })?;

        let mut line = format!("ok {played}");
        if self.options.announce_check && in_check {
            line.push_str(" check");
        }
        let mut lines = vec![line];
        if self.options.show_board {
            lines.extend(self.board_lines());
        }
        Ok(lines)
    }

    fn board_lines(&self) -> Vec<String> {
        let game = self.session.lock();
        let mut lines: Vec<String> = game.board().to_string().lines().map(str::to_string).collect();
        lines.push(format!("side {}", game.side_to_move().name()));
        lines.push(format!(
            "check white {} black {}",
            game.in_check(Color::White),
            game.in_check(Color::Black)
        ));
        lines
    }

    fn check_line(&self) -> String {
        let snapshot = self.session.snapshot();
        format!(
            "check white {} black {}",
            snapshot.white_in_check, snapshot.black_in_check
        )
    }
}

fn parse_square(
    args: &[String],
    idx: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<Square, CommandError> {
    let raw = args
        .get(idx)
        .ok_or(CommandError::MissingArgument { command, argument })?;
    Ok(raw.parse()?)
}

/// Commands take at most `max` arguments.
fn reject_extra(args: &[String], max: usize, command: &'static str) -> Result<(), CommandError> {
    match args.get(max) {
        Some(extra) => Err(CommandError::UnexpectedArgument {
            command,
            argument: extra.clone(),
        }),
        None => Ok(()),
    }
}

fn parse_piece(letter: &str) -> Result<Piece, CommandError> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Piece::from_fen_char(c)?),
        _ => Err(CommandError::InvalidPiece(PieceParseError::InvalidPiece {
            char: letter.chars().next().unwrap_or(' '),
        })),
    }
}

/// Read commands from `input` until `quit` or end of input, writing replies to `output`.
pub fn run_loop<R: BufRead, W: Write>(
    protocol: &mut Protocol,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match protocol.handle_line(&line) {
            Outcome::Quit => break,
            Outcome::Reply(lines) => {
                for reply in lines {
                    writeln!(output, "{reply}")?;
                }
                output.flush()?;
            }
        }
    }
    Ok(())
}

/// Run the protocol on stdin/stdout with a fresh game.
pub fn run_stdio() -> io::Result<()> {
    let mut protocol = Protocol::new(SharedGame::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut protocol, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(protocol: &mut Protocol, line: &str) -> Vec<String> {
        match protocol.handle_line(line) {
            Outcome::Reply(lines) => lines,
            Outcome::Quit => panic!("unexpected quit for '{line}'"),
        }
    }

    #[test]
    fn test_moves_reply_lists_destinations() {
        let mut protocol = Protocol::default();
        assert_eq!(reply(&mut protocol, "moves e2"), vec!["moves e2: e3 e4"]);
        assert_eq!(reply(&mut protocol, "moves a1"), vec!["moves a1:"]);
    }

    #[test]
    fn test_move_forms() {
        let mut protocol = Protocol::default();
        assert_eq!(reply(&mut protocol, "move e2 e4"), vec!["ok e2-e4"]);
        assert_eq!(reply(&mut protocol, "move e7-e5"), vec!["ok e7-e5"]);
        assert_eq!(reply(&mut protocol, "move g1f3"), vec!["ok g1-f3"]);
        assert_eq!(
            reply(&mut protocol, "movelist"),
            vec!["e2-e4 e7-e5 g1-f3"]
        );
    }

    #[test]
    fn test_illegal_move_is_an_error_line() {
        let mut protocol = Protocol::default();
        assert_eq!(
            reply(&mut protocol, "move e2 e6"),
            vec!["error: Illegal move 'e2-e6'"]
        );
        assert_eq!(reply(&mut protocol, "movelist"), vec![""]);
        assert_eq!(protocol.session().side_to_move(), Color::White);
    }

    #[test]
    fn test_bad_coordinates() {
        let mut protocol = Protocol::default();
        assert_eq!(
            reply(&mut protocol, "moves z9"),
            vec!["error: File 'z' out of range (must be 'a'-'h')"]
        );
        assert_eq!(
            reply(&mut protocol, "moves e"),
            vec!["error: Square 'e' must be exactly 2 characters"]
        );
        assert_eq!(
            reply(&mut protocol, "moves"),
            vec!["error: 'moves' is missing its square"]
        );
    }

    #[test]
    fn test_testcheck_then_escape() {
        let mut protocol = Protocol::default();
        reply(&mut protocol, "move e2 e4");
        reply(&mut protocol, "move e7 e5");
        let lines = reply(&mut protocol, "testcheck");
        assert_eq!(lines.last().unwrap(), "check white true black false");
        assert!(lines.contains(&"side white".to_string()));
        assert_eq!(reply(&mut protocol, "moves e1"), vec!["moves e1: e2"]);
        assert_eq!(reply(&mut protocol, "move e1 e2"), vec!["ok e1-e2"]);
    }

    #[test]
    fn test_announce_check_and_show_board() {
        let mut protocol = Protocol::default();
        reply(&mut protocol, "position 4k3/8/8/8/8/8/8/R3K3 white");
        assert_eq!(reply(&mut protocol, "move a1 a8"), vec!["ok a1-a8 check"]);

        reply(&mut protocol, "setoption name AnnounceCheck value false");
        reply(&mut protocol, "setoption name ShowBoard value true");
        reply(&mut protocol, "position 4k3/8/8/8/8/8/8/R3K3 w");
        let lines = reply(&mut protocol, "move a1 a8");
        assert_eq!(lines[0], "ok a1-a8");
        assert_eq!(lines[1], "8 R . . . k . . .");
        assert_eq!(lines.last().unwrap(), "check white false black true");
    }

    #[test]
    fn test_place_and_attacked() {
        let mut protocol = Protocol::default();
        assert_eq!(reply(&mut protocol, "attacked e4 black"), vec!["attacked e4 false"]);
        assert_eq!(reply(&mut protocol, "place d5 p"), vec!["ok"]);
        assert_eq!(reply(&mut protocol, "attacked e4 black"), vec!["attacked e4 true"]);
        assert_eq!(reply(&mut protocol, "place d5 -"), vec!["ok"]);
        assert_eq!(reply(&mut protocol, "attacked e4 b"), vec!["attacked e4 false"]);
        assert_eq!(
            reply(&mut protocol, "attacked e4 green"),
            vec!["error: Invalid color 'green', expected 'white' or 'black'"]
        );
        assert_eq!(
            reply(&mut protocol, "place d5 x"),
            vec!["error: Invalid piece character 'x'"]
        );
    }

    #[test]
    fn test_reset_and_options() {
        let mut protocol = Protocol::default();
        reply(&mut protocol, "move d2 d4");
        assert_eq!(reply(&mut protocol, "reset"), vec!["ok"]);
        assert_eq!(reply(&mut protocol, "movelist"), vec![""]);
        assert_eq!(
            reply(&mut protocol, "options"),
            vec!["option ShowBoard false", "option AnnounceCheck true"]
        );
        assert_eq!(
            reply(&mut protocol, "frobnicate"),
            vec!["error: Unknown command 'frobnicate'"]
        );
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        let mut protocol = Protocol::default();
        assert_eq!(
            reply(&mut protocol, "move e2 e4 junk"),
            vec!["error: 'move' does not take the extra argument 'junk'"]
        );
        assert_eq!(
            reply(&mut protocol, "position 8/8/8/8/8/8/8/K6k w now"),
            vec!["error: 'position' does not take the extra argument 'now'"]
        );
        assert_eq!(
            reply(&mut protocol, "moves e2 e4"),
            vec!["error: 'moves' does not take the extra argument 'e4'"]
        );
        assert!(reply(&mut protocol, "attacked e4 black white")[0].starts_with("error: "));
        assert!(reply(&mut protocol, "place e4 Q q")[0].starts_with("error: "));
        assert_eq!(reply(&mut protocol, "movelist"), vec![""]);
        assert_eq!(protocol.session().snapshot().cells, *Board::new().cells());
    }

    #[test]
    fn test_placement_reports_position_and_side() {
        let mut protocol = Protocol::default();
        assert_eq!(
            reply(&mut protocol, "placement"),
            vec!["placement rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR white"]
        );
        reply(&mut protocol, "position 4k3/8/8/1B6/8/8/8/4K3 b");
        assert_eq!(
            reply(&mut protocol, "placement"),
            vec!["placement 4k3/8/8/1B6/8/8/8/4K3 black"]
        );
        reply(&mut protocol, "move e8 d8");
        assert_eq!(
            reply(&mut protocol, "placement"),
            vec!["placement 3k4/8/8/1B6/8/8/8/4K3 white"]
        );
    }

    #[test]
    fn test_run_loop_stops_at_quit() {
        let mut protocol = Protocol::default();
        let input = b"moves b1\n\nmove b1 c3\nquit\nmove e7 e5\n";
        let mut output = Vec::new();
        run_loop(&mut protocol, &input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "moves b1: a3 c3\nok b1-c3\n");
        assert_eq!(protocol.session().side_to_move(), Color::Black);
    }
}
