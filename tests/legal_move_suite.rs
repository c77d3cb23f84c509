//! Table-driven legal move checks loaded from `tests/data/positions.json`.

use mini_chess::{Board, Color, Game, Square};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    placement: String,
    side: String,
    from: String,
    in_check: bool,
    expected: Vec<String>,
}

fn load_cases() -> Vec<Case> {
    serde_json::from_str(include_str!("data/positions.json")).expect("valid positions.json")
}

fn game_for(case: &Case) -> Game {
    let board = Board::try_from_placement(&case.placement)
        .unwrap_or_else(|e| panic!("{}: bad placement: {e}", case.name));
    let side = Color::from_name(&case.side)
        .unwrap_or_else(|| panic!("{}: bad side '{}'", case.name, case.side));
    Game::from_position(board, side)
}

#[test]
fn legal_moves_match_expected_sets() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in &cases {
        let mut game = game_for(case);
        let from: Square = case.from.parse().unwrap();

        let mut got: Vec<String> = game
            .legal_moves_from(from)
            .iter()
            .map(Square::to_string)
            .collect();
        got.sort();
        let mut expected = case.expected.clone();
        expected.sort();

        assert_eq!(got, expected, "{}", case.name);
    }
}

#[test]
fn check_flags_match_expected() {
    for case in &load_cases() {
        let game = game_for(case);
        assert_eq!(
            game.in_check(game.side_to_move()),
            case.in_check,
            "{}",
            case.name
        );
    }
}

#[test]
fn every_listed_move_can_be_played() {
    for case in &load_cases() {
        let from: Square = case.from.parse().unwrap();
        for to in &case.expected {
            let mut game = game_for(case);
            let to: Square = to.parse().unwrap();
            let side = game.side_to_move();

            game.make_move(from, to)
                .unwrap_or_else(|e| panic!("{}: {e}", case.name));
            assert!(!game.in_check(side), "{}: {from}-{to}", case.name);
            assert_eq!(game.side_to_move(), side.opponent());
        }
    }
}
