//! End-to-end scenarios through the public controller API.

use tictactoe::core::{Cell, Player, Status};
use tictactoe::{Game, GameBuilder, GameError, GameView, MoveOutcome, MoveViolation};

fn game_after(moves: &[usize]) -> Game {
    GameBuilder::new()
        .moves(moves.iter().copied())
        .build()
        .unwrap()
}

#[test]
fn top_row_win_after_fifth_move() {
    let mut game = Game::new();
    for index in [0, 4, 1, 3] {
        assert!(game.play(index).is_applied());
        assert!(!game.status().is_over());
    }

    assert_eq!(
        game.play(2),
        MoveOutcome::Applied(tictactoe::core::Move {
            index: 2,
            player: Player::X
        })
    );
    assert_eq!(
        game.status(),
        Status::Winner {
            player: Player::X,
            line: [0, 1, 2]
        }
    );
}

#[test]
fn same_cell_twice_registers_once() {
    let mut game = Game::new();
    game.play(6);
    game.play(6);

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current().get(6), Some(Cell::X));
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn jump_to_start_keeps_every_snapshot() {
    let mut game = game_after(&[0, 4, 8, 2]);
    assert_eq!(game.next_player(), Player::X);
    game.jump_to(3).unwrap();
    assert_eq!(game.next_player(), Player::O);

    game.jump_to(0).unwrap();

    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.current().empty_cells().count(), 9);
}

#[test]
fn move_after_jump_truncates_future() {
    let mut game = game_after(&[0, 4, 8, 2, 6]);
    let k = 2;
    game.jump_to(k).unwrap();

    assert!(game.play(7).is_applied());

    assert_eq!(game.history().len(), k + 2);
    assert_eq!(game.cursor(), k + 1);
    // X again, since step 2 is even
    assert_eq!(game.current().get(7), Some(Cell::X));
    assert_eq!(game.current().get(8), Some(Cell::Empty));
}

#[test]
fn won_position_refuses_every_empty_cell() {
    let mut game = game_after(&[0, 4, 1, 3, 2]);
    let before = game.state().clone();

    for index in game.current().empty_cells().collect::<Vec<_>>() {
        assert_eq!(
            game.play(index),
            MoveOutcome::Rejected(vec![MoveViolation::GameOver { winner: Player::X }])
        );
    }
    assert_eq!(game.state(), &before);
}

#[test]
fn play_resumes_from_before_the_win() {
    let mut game = game_after(&[0, 4, 1, 3, 2]);
    game.jump_to(4).unwrap();

    assert!(game.play(5).is_applied());
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn jump_beyond_history_is_refused() {
    let mut game = game_after(&[4]);

    assert_eq!(
        game.jump_to(5),
        Err(GameError::StepOutOfRange { step: 5, len: 2 })
    );
    assert_eq!(game.cursor(), 1);
}

#[test]
fn draw_can_be_left_implicit() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    let reported = game_after(&moves);
    assert_eq!(reported.status(), Status::Draw);

    let implicit = GameBuilder::new().report_draws(false).moves(moves).build().unwrap();
    assert_eq!(implicit.status(), Status::NextPlayer(Player::O));
    assert_eq!(GameView::project(&implicit).status, "Next player: O");
}

#[test]
fn view_tracks_time_travel() {
    let mut game = game_after(&[0, 4, 1, 3, 2]);
    let won = GameView::project(&game);
    assert_eq!(won.status, "Winner: X");
    assert_eq!(won.moves.len(), 6);

    game.jump_to(2).unwrap();
    let rewound = GameView::project(&game);
    assert_eq!(rewound.status, "Next player: X");
    assert!(rewound.cells.iter().all(|c| !c.winning));
    assert!(rewound.moves[2].selected);
    assert_eq!(rewound.moves.len(), 6);
}

#[test]
fn refused_moves_never_reach_history() {
    let mut won = game_after(&[0, 4, 1, 3, 2]);
    assert!(!won.play(5).is_applied());
    assert_eq!(won.history().len(), 6);
    assert_eq!(won.current().get(5), Some(Cell::Empty));

    let mut fresh = Game::new();
    assert!(fresh.play(4).is_applied());
    assert!(!fresh.play(4).is_applied());
    assert!(!fresh.play(9).is_applied());
    assert_eq!(fresh.history().len(), 2);
    assert_eq!(fresh.current().get(4), Some(Cell::X));
}
