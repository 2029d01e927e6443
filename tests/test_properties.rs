//! Property tests over random play.

use proptest::prelude::*;

use birch_and_silk::board::Cell;
use birch_and_silk::config::Config;
use birch_and_silk::entities::{Direction, Position};
use birch_and_silk::game::Game;
use birch_and_silk::input::Action;
use birch_and_silk::menu::{Command, Screen, ScreenKind};
use birch_and_silk::session::{Session, MAX_SCORE};

#[derive(Clone, Copy, Debug)]
enum Op {
    Move(Direction),
    Wait,
    Shoot(Direction),
    Tick,
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        direction().prop_map(Op::Move),
        Just(Op::Wait),
        direction().prop_map(Op::Shoot),
        Just(Op::Tick),
    ]
}

fn make_game(seed: u64) -> Game {
    let mut game = Game::new(Config {
        seed: Some(seed),
        ..Config::default()
    })
    .expect("default config is valid");
    game.execute(Command::StartGame);
    game
}

fn apply(game: &mut Game, op: Op) {
    match op {
        Op::Move(direction) => {
            let (dr, dc) = direction.delta();
            game.player_move(dr, dc);
        }
        Op::Wait => {
            game.player_move(0, 0);
        }
        Op::Shoot(direction) => {
            game.player_shoot(direction);
        }
        Op::Tick => game.tick_flight(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// While a session is live the board mirrors the entities exactly.
    #[test]
    fn board_mirrors_entities(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..150)) {
        let mut game = make_game(seed);
        let mut last_score = 0;
        for op in ops {
            apply(&mut game, op);
            let s = &game.session;
            if s.is_over() {
                prop_assert_eq!(game.visible.kind, ScreenKind::GameOver);
                break;
            }
            let cells = s.board.cells();
            prop_assert_eq!(cells.iter().filter(|c| **c == Cell::Player).count(), 1);
            prop_assert_eq!(
                cells.iter().filter(|c| matches!(c, Cell::Enemy(_))).count(),
                s.enemies.len()
            );
            for enemy in &s.enemies {
                prop_assert_eq!(s.board.get(enemy.pos), Some(Cell::Enemy(enemy.id)));
                prop_assert!(enemy.pos.chebyshev(s.player.pos) >= 1);
            }
            prop_assert!(s.score <= MAX_SCORE);
            prop_assert!(s.score >= last_score);
            prop_assert!(s.player.reload <= s.config.reload_time);
            prop_assert!(s.enemies.len() <= s.config.spawn_capacity() + s.config.spawn_quantity);
            last_score = s.score;
        }
    }

    /// The menu cursor always points at an option and wraps both ways.
    #[test]
    fn cursor_wraps(moves in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut screen = Screen::new(ScreenKind::Title);
        let len = screen.options().len();
        let mut expected = 0usize;
        for down in moves {
            let action = if down { Action::Move(Direction::Down) } else { Action::Move(Direction::Up) };
            screen.on_input(action);
            expected = if down { (expected + 1) % len } else { (expected + len - 1) % len };
            prop_assert_eq!(screen.cursor, expected);
            prop_assert!(screen.selected().is_some());
        }
    }

    /// A single shot through `n` lined-up enemies scores 1 + 2 + ... + 2^(n-1), capped.
    #[test]
    fn combo_score_for_a_column(n in 1i32..=10) {
        let mut s = Session::new(&Config::default());
        for row in (10 - n)..10 {
            s.spawn_enemy_at(Position::new(row, 10));
        }
        s.launch_arrow(-1, 0);
        while s.step_arrow() {}
        let expected = ((1u32 << n) - 1).min(MAX_SCORE);
        prop_assert_eq!(s.score, expected);
        prop_assert!(s.enemies.is_empty());
    }
}
