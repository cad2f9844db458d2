//! Tests for the command shell over a scripted session.

use strictly_quarto::{Board, Game, TopologyKind};
use strictly_quarto_cli::{Reply, Shell};

fn shell(kind: TopologyKind) -> Shell {
    Shell::new(Game::new(
        2,
        Board::new(kind, 16, 4, 6, 6).expect("Valid board"),
    ))
}

/// Feeds `script` through a session and returns everything it printed.
fn transcript(shell: &mut Shell, script: &str) -> String {
    let mut output = Vec::new();
    shell
        .run(script.as_bytes(), &mut output)
        .expect("Session I/O failed");
    String::from_utf8(output).expect("Output is UTF-8")
}

fn ok() -> Reply {
    Reply::Output("OK".to_string())
}

#[test]
fn test_winning_session() {
    let mut shell = shell(TopologyKind::Bounded);
    let script = "select 0\nplace 0;0\nselect 1\nplace 0;1\n\
                  select 2\nplace 0;2\nselect 3\nplace 0;3\nquit\n";

    assert_eq!(
        transcript(&mut shell, script),
        "OK\nOK\nOK\nOK\nOK\nOK\nOK\nP1 wins\n3\n"
    );
    assert!(shell.game().is_won());
}

#[test]
fn test_lines_after_quit_are_ignored() {
    let mut shell = shell(TopologyKind::Bounded);
    assert_eq!(transcript(&mut shell, "bag\nquit\nselect 0\n").lines().count(), 1);
    assert!(shell.game().board().selected().is_none());
}

#[test]
fn test_end_of_input_ends_session() {
    let mut shell = shell(TopologyKind::Bounded);
    assert_eq!(transcript(&mut shell, "select 0\nplace 2;2"), "OK\nOK\n");
    assert_eq!(shell.game().move_count(), 1);
}

#[test]
fn test_errors_do_not_end_session() {
    let mut shell = shell(TopologyKind::Bounded);
    let output = transcript(&mut shell, "\nfly\nselect\nselect 0\n");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Error, please enter a command");
    assert!(lines[1].starts_with("Error, only the following commands are allowed"));
    assert!(lines[2].starts_with("Error, "));
    assert_eq!(lines[3], "OK");
}

#[test]
fn test_failed_place_returns_token_to_bag() {
    let mut shell = shell(TopologyKind::Bounded);
    let full_bag = shell.execute("bag");

    assert_eq!(shell.execute("select 4"), ok());
    assert_eq!(
        shell.execute("place 9;9"),
        Reply::Error("Error, field 9;9 does not exist.".to_string())
    );
    assert!(shell.game().board().selected().is_none());
    assert_eq!(shell.execute("bag"), full_bag);
    assert_eq!(shell.execute("select 5"), ok());
}

#[test]
fn test_malformed_place_returns_token_to_bag() {
    let mut shell = shell(TopologyKind::Bounded);
    for line in ["place 1", "place a;b", "place 1;2;3"] {
        assert_eq!(shell.execute("select 4"), ok());
        assert!(matches!(shell.execute(line), Reply::Error(_)));
        assert!(shell.game().board().selected().is_none());
    }
}

#[test]
fn test_bare_place_keeps_selection() {
    let mut shell = shell(TopologyKind::Bounded);
    assert_eq!(shell.execute("select 4"), ok());
    assert_eq!(
        shell.execute("place"),
        Reply::Error(
            "Error, the command place requires exactly one parameter to work, but you provided none."
                .to_string()
        )
    );
    assert_eq!(shell.game().board().selected().map(|t| t.id()), Some(4));
    assert_eq!(shell.execute("place 2;2"), ok());
}

#[test]
fn test_failed_select_keeps_selection() {
    let mut shell = shell(TopologyKind::Bounded);
    assert_eq!(shell.execute("select 4"), ok());
    assert_eq!(
        shell.execute("select 5"),
        Reply::Error(
            "Error, token 4 has already been selected. Please place the token now.".to_string()
        )
    );
    assert_eq!(shell.game().board().selected().map(|t| t.id()), Some(4));
}

#[test]
fn test_bag_lists_remaining_tokens() {
    let mut shell = shell(TopologyKind::Bounded);
    shell.execute("select 0");
    shell.execute("place 1;1");
    shell.execute("select 15");

    assert_eq!(
        shell.execute("bag"),
        Reply::Output("1 2 3 4 5 6 7 8 9 10 11 12 13 14".to_string())
    );
}

#[test]
fn test_row_and_column_print() {
    let mut shell = shell(TopologyKind::Toroidal);
    shell.execute("select 3");
    assert_eq!(shell.execute("place -6;-5"), ok());

    assert_eq!(
        shell.execute("rowprint 0"),
        Reply::Output("# 3 # # # #".to_string())
    );
    assert_eq!(
        shell.execute("colprint 1"),
        Reply::Output("3 # # # # #".to_string())
    );
    assert_eq!(
        shell.execute("colprint 6"),
        Reply::Error("Error, invalid column number.".to_string())
    );
}

#[test]
fn test_draw_reply() {
    let mut shell = Shell::new(Game::new(
        2,
        Board::new(TopologyKind::Bounded, 16, 4, 2, 2).expect("Valid board"),
    ));
    let script = "select 0\nplace 0;0\nselect 1\nplace 0;1\n\
                  select 2\nplace 1;0\nselect 3\nplace 1;1\nselect 4\n";

    let output = transcript(&mut shell, script);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[7], "draw");
    assert_eq!(lines[8], "Error, the game is already over.");
}
