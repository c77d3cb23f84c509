/// One parsed protocol line. Arguments stay raw; they are validated when the
/// command runs so errors can name the bad value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Board,
    Moves(Vec<String>),
    Move(Vec<String>),
    MoveList,
    Reset,
    Check,
    Attacked(Vec<String>),
    Place(Vec<String>),
    TestCheck,
    Position(Vec<String>),
    Placement,
    SetOption(Vec<String>),
    Options,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let args = || parts[1..].iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "board" => Command::Board,
        "moves" => Command::Moves(args()),
        "move" => Command::Move(args()),
        "movelist" => Command::MoveList,
        "reset" => Command::Reset,
        "check" => Command::Check,
        "attacked" => Command::Attacked(args()),
        "place" => Command::Place(args()),
        "testcheck" => Command::TestCheck,
        "position" => Command::Position(args()),
        "placement" => Command::Placement,
        "setoption" => Command::SetOption(args()),
        "options" => Command::Options,
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
