use birch_and_silk::board::{Board, Cell};
use birch_and_silk::config::Config;
use birch_and_silk::entities::{Arrow, EnemyId, Position};
use birch_and_silk::session::Session;

fn make_session() -> Session {
    Session::new(&Config::default())
}

fn count(board: &Board, wanted: fn(&Cell) -> bool) -> usize {
    board.cells().iter().filter(|c| wanted(*c)).count()
}

// ── Board primitives ──────────────────────────────────────────────────────────

#[test]
fn new_board_is_all_floor() {
    let board = Board::new(21, 21);
    assert_eq!(board.cells().len(), 21 * 21);
    assert!(board.cells().iter().all(|c| *c == Cell::Floor));
}

#[test]
fn in_bounds_edges() {
    let board = Board::new(21, 21);
    assert!(board.in_bounds(Position::new(0, 0)));
    assert!(board.in_bounds(Position::new(20, 20)));
    assert!(!board.in_bounds(Position::new(-1, 0)));
    assert!(!board.in_bounds(Position::new(0, -1)));
    assert!(!board.in_bounds(Position::new(21, 0)));
    assert!(!board.in_bounds(Position::new(0, 21)));
}

#[test]
fn place_then_clear() {
    let mut board = Board::new(5, 5);
    board.place(Position::new(2, 3), Cell::Player);
    assert_eq!(board.get(Position::new(2, 3)), Some(Cell::Player));
    board.clear();
    assert_eq!(board.get(Position::new(2, 3)), Some(Cell::Floor));
}

#[test]
fn get_off_board_is_none() {
    let board = Board::new(5, 5);
    assert_eq!(board.get(Position::new(5, 0)), None);
    assert!(!board.is_floor(Position::new(-1, 2)));
}

#[test]
fn try_step_moves_and_stamps() {
    let mut board = Board::new(5, 5);
    let mut pos = Position::new(2, 2);
    assert!(board.try_step(&mut pos, -1, 1, Cell::Enemy(EnemyId(0))));
    assert_eq!(pos, Position::new(1, 3));
    assert_eq!(board.get(pos), Some(Cell::Enemy(EnemyId(0))));
}

#[test]
fn try_step_off_board_changes_nothing() {
    let mut board = Board::new(5, 5);
    let mut pos = Position::new(0, 4);
    let before = board.clone();
    assert!(!board.try_step(&mut pos, 0, 1, Cell::Player));
    assert_eq!(pos, Position::new(0, 4));
    assert_eq!(board, before);
}

#[test]
fn perimeter_detection() {
    let board = Board::new(5, 7);
    assert!(board.on_perimeter(Position::new(0, 3)));
    assert!(board.on_perimeter(Position::new(4, 6)));
    assert!(board.on_perimeter(Position::new(2, 0)));
    assert!(!board.on_perimeter(Position::new(2, 3)));
    assert!(!board.on_perimeter(Position::new(5, 3)));
}

#[test]
fn glyphs() {
    assert_eq!(Cell::Floor.glyph(), ' ');
    assert_eq!(Cell::Player.glyph(), '@');
    assert_eq!(Cell::Enemy(EnemyId(3)).glyph(), 'm');
    assert_eq!(Cell::Arrow { vertical: true }.glyph(), '!');
    assert_eq!(Cell::Arrow { vertical: false }.glyph(), '-');
}

// ── Session rebuild ───────────────────────────────────────────────────────────

#[test]
fn new_session_places_player_in_centre() {
    let s = make_session();
    assert_eq!(s.player.pos, Position::new(10, 10));
    assert_eq!(s.board.get(Position::new(10, 10)), Some(Cell::Player));
    assert_eq!(count(&s.board, |c| *c == Cell::Player), 1);
    assert_eq!(count(&s.board, |c| *c == Cell::Floor), 21 * 21 - 1);
}

#[test]
fn clear_then_place_player_only() {
    let mut s = make_session();
    s.board.clear();
    s.board.place(s.player.pos, Cell::Player);
    assert_eq!(count(&s.board, |c| *c == Cell::Player), 1);
    assert_eq!(count(&s.board, |c| *c == Cell::Floor), 21 * 21 - 1);
}

#[test]
fn rebuild_skips_idle_arrow() {
    let mut s = make_session();
    let mut arrow = Arrow::loosed(Position::new(3, 3), -1, 0);
    arrow.flying = false;
    s.arrow = Some(arrow);
    s.rebuild();
    assert_eq!(s.board.get(Position::new(3, 3)), Some(Cell::Floor));

    if let Some(arrow) = s.arrow.as_mut() {
        arrow.flying = true;
    }
    s.rebuild();
    assert_eq!(
        s.board.get(Position::new(3, 3)),
        Some(Cell::Arrow { vertical: true })
    );
}

#[test]
fn rebuild_player_wins_overlap() {
    let mut s = make_session();
    // Overlap never happens in play; forced here to check stamping order.
    s.spawn_enemy_at(Position::new(10, 10));
    s.rebuild();
    assert_eq!(s.board.get(Position::new(10, 10)), Some(Cell::Player));
}

#[test]
fn rebuild_reflects_every_live_enemy() {
    let mut s = make_session();
    let a = s.spawn_enemy_at(Position::new(0, 0));
    let b = s.spawn_enemy_at(Position::new(0, 20));
    s.rebuild();
    assert_eq!(s.board.get(Position::new(0, 0)), Some(Cell::Enemy(a)));
    assert_eq!(s.board.get(Position::new(0, 20)), Some(Cell::Enemy(b)));

    assert!(s.kill_enemy(a));
    assert_eq!(s.board.get(Position::new(0, 0)), Some(Cell::Floor));
    assert!(!s.kill_enemy(a));
}

#[test]
fn enemy_ids_are_not_reused() {
    let mut s = make_session();
    let a = s.spawn_enemy_at(Position::new(0, 0));
    s.kill_enemy(a);
    let b = s.spawn_enemy_at(Position::new(0, 0));
    assert_ne!(a, b);
}
