use bingo_board::game::{BingoGame, Board, Phase, SelectOutcome, CENTER, ENTRIES_TO_START};
use bingo_board::storage::{BoardStore, FileStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn open(dir: &std::path::Path, seed: u64) -> BingoGame {
    let store = FileStore::new(dir, "bingo-board");
    BingoGame::load(Box::new(store), StdRng::seed_from_u64(seed))
}

#[test]
fn partial_board_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = open(dir.path(), 1);
    for i in 0..10 {
        game.insert(&format!("entry {i}")).unwrap();
    }
    let before = game.board().clone();
    drop(game);

    let game = open(dir.path(), 2);
    assert_eq!(game.board(), &before);
    assert_eq!(game.phase(), Phase::Filling);
    assert_eq!(game.entry_count(), 10);
}

#[test]
fn full_game_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = open(dir.path(), 3);
    for i in 0..ENTRIES_TO_START {
        game.insert(&format!("entry {i}")).unwrap();
    }
    game.select(CENTER, 0).unwrap();
    game.select(CENTER, 1).unwrap();
    game.select(CENTER, 3).unwrap();
    drop(game);

    // Resume mid-play and finish the center row
    let mut game = open(dir.path(), 4);
    assert_eq!(game.phase(), Phase::Playing);
    let selection = game.select(CENTER, 4).unwrap();
    assert!(matches!(selection.outcome, SelectOutcome::Bingo { .. }));
    assert!(selection.save_error.is_none());
    drop(game);

    let game = open(dir.path(), 5);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.phase(), Phase::Filling);
}

#[test]
fn browser_saved_board_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    // Sparse rows as written by the original web page
    let blob = r#"[[],[null,{"text":"typo in slides","selected":false}],[null,null,{"text":"Free Space","selected":true},null],[],[]]"#;
    std::fs::write(dir.path().join("bingo-board.json"), blob).unwrap();

    let game = open(dir.path(), 6);
    assert_eq!(game.entry_count(), 1);
    assert_eq!(game.board().get(1, 1).unwrap().text, "typo in slides");
}

#[test]
fn corrupted_save_starts_fresh_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bingo-board.json");
    std::fs::write(&path, "[[[[").unwrap();

    let mut game = open(dir.path(), 7);
    assert_eq!(game.board(), &Board::new());

    game.insert("fresh start").unwrap();
    let store = FileStore::new(dir.path(), "bingo-board");
    assert_eq!(store.load().unwrap().as_ref(), Some(game.board()));
}
