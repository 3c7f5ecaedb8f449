use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use shipgame::sim::place_fleet;
use shipgame::{Coord, Match, MatchError, Outcome, Player};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::First), Just(Player::Second)]
}

fn coord() -> impl Strategy<Value = Coord> {
    (0..10usize, 0..10usize).prop_map(|(r, c)| Coord::new(r, c).unwrap())
}

fn seeded_match(seed: u64, first: &[usize], second: &[usize]) -> Match {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new();
    place_fleet(&mut game, Player::First, first, &mut rng).unwrap();
    place_fleet(&mut game, Player::Second, second, &mut rng).unwrap();
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn attack_state_machine(
        seed in any::<u64>(),
        first in prop::collection::vec(2..5usize, 0..4),
        second in prop::collection::vec(2..5usize, 0..4),
        moves in prop::collection::vec((player(), coord()), 1..200),
    ) {
        let mut game = seeded_match(seed, &first, &second);
        for (attacker, target) in moves {
            let before = game.clone();
            let result = game.attack(attacker, target);
            if before.outcome().is_terminal() {
                prop_assert_eq!(result, Err(MatchError::MatchOver(before.outcome())));
                prop_assert_eq!(&game, &before);
            } else if attacker != before.current_turn() {
                let out_of_turn = matches!(result, Err(MatchError::NotYourTurn { .. }));
                prop_assert!(out_of_turn, "expected NotYourTurn, got {:?}", result);
                prop_assert_eq!(&game, &before);
            } else {
                prop_assert!(result.is_ok());
                let defender = attacker.opponent();
                prop_assert_eq!(game.current_turn(), defender);
                prop_assert_eq!(game.shots_taken(), before.shots_taken() + 1);
                prop_assert_eq!(game.ships_remaining(attacker), before.ships_remaining(attacker));
                if game.ships_remaining(defender) == 0 {
                    prop_assert_eq!(game.outcome(), Outcome::won_by(attacker));
                } else {
                    prop_assert_eq!(game.outcome(), Outcome::InProgress);
                }
            }
        }
    }

    #[test]
    fn outcome_never_reverts(seed in any::<u64>(), targets in prop::collection::vec(coord(), 1..300)) {
        let mut game = seeded_match(seed, &[2, 3], &[2]);
        let mut latched: Option<Outcome> = None;
        for target in targets {
            let attacker = game.current_turn();
            let _ = game.attack(attacker, target);
            if let Some(outcome) = latched {
                prop_assert_eq!(game.outcome(), outcome);
            } else if game.outcome().is_terminal() {
                latched = Some(game.outcome());
            }
        }
    }
}
