mod support;

use he_battleship::{
    Arbiter, Board, Game, GameConfig, GameError, GameOutcome, Player, PlayerKind,
    RandomTargeting, Targeting, TurnState, SHIP_LENGTHS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use support::{bfv_player, clear_player, one_destroyer_board, ScriptedTargeting};

fn scripted(moves: &[(usize, usize)]) -> Box<dyn Targeting> {
    Box::new(ScriptedTargeting::new(moves))
}

#[test]
fn test_turn_states_and_destroyer_win() {
    let mut rng = SmallRng::seed_from_u64(1);
    let alice = bfv_player("alice", one_destroyer_board(), 1);
    let bob = bfv_player("bob", one_destroyer_board(), 2);
    let mut game = Game::new(
        [alice, bob],
        [scripted(&[(0, 0), (0, 1)]), scripted(&[(5, 5)])],
        Arbiter::default(),
    );

    assert_eq!(game.state(), TurnState::TurnStart);
    assert_eq!(game.step(&mut rng).unwrap(), TurnState::AwaitingGuess);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.step(&mut rng).unwrap(), TurnState::Resolving((0, 0)));
    assert_eq!(
        game.step(&mut rng).unwrap(),
        TurnState::Scoring { target: (0, 0), hit: true }
    );
    assert_eq!(game.player(0).score(), 0);
    assert_eq!(game.step(&mut rng).unwrap(), TurnState::CheckWin);
    assert_eq!(game.player(0).score(), 1);
    assert_eq!(game.step(&mut rng).unwrap(), TurnState::TurnStart);
    assert_eq!(game.attacker(), 1);
    assert_eq!(game.defender(), 0);

    assert_eq!(game.play(&mut rng).unwrap(), GameOutcome::Winner(0));
    assert_eq!(game.turn(), 3);
    assert_eq!(game.player(0).score(), 2);
    assert_eq!(game.player(1).score(), 0);
    assert!(game.player(1).board().all_sunk());
    assert!(game.player(1).board().is_sunk(1));
    assert!(!game.player(0).board().is_sunk(1));
    assert!(game.player(0).board().is_shot(5, 5).unwrap());

    let report = serde_json::to_value(game.report()).unwrap();
    assert_eq!(report["players"][1]["ships_sunk"], 1);
    assert_eq!(report["players"][0]["ships_sunk"], 0);

    // terminal: nothing more happens
    assert!(matches!(game.step(&mut rng), Err(GameError::GameOver)));
    assert_eq!(game.play(&mut rng).unwrap(), GameOutcome::Winner(0));
}

#[test]
fn test_quit_before_first_shot() {
    let mut rng = SmallRng::seed_from_u64(2);
    let alice = clear_player("alice", one_destroyer_board());
    let bob = clear_player("bob", one_destroyer_board());
    let mut game = Game::new([alice, bob], [scripted(&[]), scripted(&[])], Arbiter::default());

    assert_eq!(game.play(&mut rng).unwrap(), GameOutcome::Cancelled);
    assert_eq!(game.state(), TurnState::GameOver(GameOutcome::Cancelled));
    assert!(game.player(1).board().shots().is_empty());
    assert!(game.player(0).board().shots().is_empty());
    assert_eq!(game.player(0).score(), 0);

    let report = game.report();
    assert!(report.cancelled);
    assert_eq!(report.winner, None);
    assert_eq!(report.turns, 1);
}

#[test]
fn test_quit_mid_game_leaves_defender_untouched() {
    let mut rng = SmallRng::seed_from_u64(3);
    let alice = clear_player("alice", one_destroyer_board());
    let bob = clear_player("bob", one_destroyer_board());
    let mut game = Game::new(
        [alice, bob],
        [scripted(&[(0, 0)]), scripted(&[(9, 9)])],
        Arbiter::default(),
    );

    // run up to alice's second AwaitingGuess
    while !(game.turn() == 3 && game.state() == TurnState::AwaitingGuess) {
        game.step(&mut rng).unwrap();
    }
    let before = game.player(1).board().clone();
    assert!(matches!(game.step(&mut rng), Err(GameError::Cancelled)));
    assert_eq!(game.player(1).board(), &before);
    assert_eq!(game.player(1).board().shots().count_ones(), 1);
    assert_eq!(game.player(0).score(), 1);
    assert_eq!(game.outcome(), Some(GameOutcome::Cancelled));
}

#[test]
fn test_water_shots_never_score() {
    let mut rng = SmallRng::seed_from_u64(4);
    let alice = clear_player("alice", one_destroyer_board());
    let bob = clear_player("bob", one_destroyer_board());
    let water = [(3, 3), (4, 4), (5, 5)];
    let mut game = Game::new(
        [alice, bob],
        [scripted(&water), scripted(&water)],
        Arbiter::default(),
    );
    assert_eq!(game.play(&mut rng).unwrap(), GameOutcome::Cancelled);
    assert_eq!(game.player(0).score(), 0);
    assert_eq!(game.player(1).score(), 0);
    assert_eq!(game.player(0).board().shots().count_ones(), 3);
    assert_eq!(game.player(1).board().shots().count_ones(), 3);
}

#[test]
fn test_full_encrypted_game_between_computers() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let config = GameConfig::default();
    let key1: [u8; 32] = rng.random();
    let p1 = Player::with_random_board("p1", PlayerKind::Automated, &config, &mut rng, key1).unwrap();
    let key2: [u8; 32] = rng.random();
    let p2 = Player::with_random_board("p2", PlayerKind::Automated, &config, &mut rng, key2).unwrap();
    let mut game = Game::new(
        [p1, p2],
        [Box::new(RandomTargeting::new()), Box::new(RandomTargeting::new())],
        Arbiter::from_config(&config).unwrap(),
    );

    let GameOutcome::Winner(winner) = game.play(&mut rng).unwrap() else {
        panic!("computer game should not be cancelled");
    };
    let loser = 1 - winner;
    assert_eq!(game.player(winner).score(), TOTAL_SHIP_CELLS);
    assert_eq!(game.player(loser).board().hit_count(), TOTAL_SHIP_CELLS);
    assert!(game.player(loser).board().all_sunk());
    assert!(!game.player(winner).board().all_sunk());
    assert_eq!(game.player(loser).score(), game.player(winner).board().hit_count());
    assert!(game.turn() < 200);

    let report = serde_json::to_value(game.report()).unwrap();
    assert_eq!(report["winner"], game.player(winner).name());
    assert_eq!(report["cancelled"], false);
    assert_eq!(report["players"][0]["kind"], "automated");
    assert_eq!(report["players"][loser]["hits_taken"], TOTAL_SHIP_CELLS);
    assert_eq!(report["players"][loser]["ships_sunk"], SHIP_LENGTHS.len());
}

#[test]
fn test_scores_match_hits_taken_across_seeds() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut boards = [Board::new(), Board::new()];
        for board in &mut boards {
            board.place_ships_randomly(&mut rng, &[5, 4, 3, 2, 2]).unwrap();
        }
        let [a, b] = boards;
        let mut game = Game::new(
            [clear_player("a", a), clear_player("b", b)],
            [Box::new(RandomTargeting), Box::new(RandomTargeting)],
            Arbiter::default(),
        );
        let outcome = game.play(&mut rng).unwrap();
        assert!(matches!(outcome, GameOutcome::Winner(_)));
        assert_eq!(game.player(0).score(), game.player(1).board().hit_count());
        assert_eq!(game.player(1).score(), game.player(0).board().hit_count());
    }
}
